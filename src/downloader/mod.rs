// Download module - retrieval, local save, and browser fallback

pub mod errors;
pub mod orchestrator;

pub use errors::DownloadError;
pub use orchestrator::{
    BrowserOpener, DownloadOptions, DownloadOutcome, Opener, ThumbnailDownloader,
};
