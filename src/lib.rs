pub mod config;
pub mod downloader;
pub mod extractor;
pub mod resolver;
pub mod session;

pub use config::AppConfig;
pub use downloader::{DownloadError, DownloadOptions, DownloadOutcome, ThumbnailDownloader};
pub use extractor::{extract_video_id, VideoId};
pub use resolver::{resolve_thumbnails, ThumbnailDescriptor, ThumbnailLabel};
pub use session::{Session, SessionState};
