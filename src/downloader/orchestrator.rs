// Fetch-then-save orchestration with browser fallback

use std::path::PathBuf;
use std::time::Duration;

use super::errors::DownloadError;
use crate::extractor::VideoId;
use crate::resolver::ThumbnailDescriptor;

/// How a download request ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    /// Image bytes were written to this path.
    Saved(PathBuf),
    /// Retrieval or save failed; the URL was opened in the browser instead.
    OpenedFallback(String),
}

/// Download options
#[derive(Debug, Clone)]
pub struct DownloadOptions {
    pub output_dir: PathBuf,
    pub timeout_seconds: u64,
}

impl Default for DownloadOptions {
    fn default() -> Self {
        Self {
            output_dir: dirs::download_dir().unwrap_or_else(|| PathBuf::from(".")),
            timeout_seconds: 30,
        }
    }
}

/// Opens a URL in the user's viewing context (normally the system browser).
pub trait Opener: Send + Sync {
    fn open(&self, url: &str) -> Result<(), String>;
}

/// Production opener backed by the default browser.
pub struct BrowserOpener;

impl Opener for BrowserOpener {
    fn open(&self, url: &str) -> Result<(), String> {
        webbrowser::open(url).map_err(|e| e.to_string())
    }
}

pub struct ThumbnailDownloader {
    options: DownloadOptions,
    opener: Box<dyn Opener>,
}

impl ThumbnailDownloader {
    pub fn new(options: DownloadOptions) -> Self {
        Self {
            options,
            opener: Box::new(BrowserOpener),
        }
    }

    pub fn with_opener(options: DownloadOptions, opener: Box<dyn Opener>) -> Self {
        Self { options, opener }
    }

    /// Retrieve the image and save it locally; on any failure fall back to
    /// opening the URL directly so the user always has a path to the image.
    ///
    /// No retry. Failures on the save path are logged, not surfaced, and the
    /// caller's descriptor list is untouched. Each call is independent, so
    /// several downloads may run concurrently without coordinating.
    pub async fn download(
        &self,
        id: &VideoId,
        thumb: &ThumbnailDescriptor,
    ) -> Result<DownloadOutcome, DownloadError> {
        match self.fetch_and_save(id, thumb).await {
            Ok(path) => Ok(DownloadOutcome::Saved(path)),
            Err(e) => {
                eprintln!("[Downloader] ✗ Save failed for {}: {}", thumb.url, e);
                match self.opener.open(&thumb.url) {
                    Ok(()) => {
                        eprintln!("[Downloader] Opened {} in browser instead", thumb.url);
                        Ok(DownloadOutcome::OpenedFallback(thumb.url.clone()))
                    }
                    Err(open_err) => Err(DownloadError::OpenFailed(open_err)),
                }
            }
        }
    }

    async fn fetch_and_save(
        &self,
        id: &VideoId,
        thumb: &ThumbnailDescriptor,
    ) -> Result<PathBuf, DownloadError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(self.options.timeout_seconds))
            .build()
            .map_err(|e| DownloadError::Network(e.to_string()))?;

        let response = client
            .get(&thumb.url)
            .send()
            .await
            .map_err(|e| DownloadError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(DownloadError::BadStatus(response.status().as_u16()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| DownloadError::Network(e.to_string()))?;

        let path = self.options.output_dir.join(thumb.file_name(id));
        tokio::fs::write(&path, &bytes)
            .await
            .map_err(|e| DownloadError::Io(e.to_string()))?;

        Ok(path)
    }
}
