// Error types for thumbnail downloads

use std::fmt;

#[derive(Debug, Clone)]
pub enum DownloadError {
    /// Request failed before a usable response arrived
    Network(String),

    /// Image host answered with a non-success status
    BadStatus(u16),

    /// Image bytes could not be written to disk
    Io(String),

    /// Save failed AND the browser fallback could not open the URL
    OpenFailed(String),
}

impl fmt::Display for DownloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(msg) => write!(f, "Network error: {}", msg),
            Self::BadStatus(code) => write!(f, "Image host returned HTTP {}", code),
            Self::Io(msg) => write!(f, "Failed to save file: {}", msg),
            Self::OpenFailed(msg) => write!(f, "Could not open URL in browser: {}", msg),
        }
    }
}

impl std::error::Error for DownloadError {}
