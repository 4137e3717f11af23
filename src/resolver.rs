// Thumbnail variant resolution against the i.ytimg.com image host

use serde::Serialize;
use std::fmt;

use crate::extractor::VideoId;

/// Image-hosting origin. The only external integration point of the tool.
pub const THUMBNAIL_ORIGIN: &str = "https://i.ytimg.com";

/// Fixed set of thumbnail sizes offered to the user, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ThumbnailLabel {
    MaxRes,
    Hd,
    Sd,
    High,
    Medium,
    Default,
}

impl ThumbnailLabel {
    pub const ALL: [ThumbnailLabel; 6] = [
        ThumbnailLabel::MaxRes,
        ThumbnailLabel::Hd,
        ThumbnailLabel::Sd,
        ThumbnailLabel::High,
        ThumbnailLabel::Medium,
        ThumbnailLabel::Default,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MaxRes => "Max-Res",
            Self::Hd => "HD",
            Self::Sd => "SD",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Default => "Default",
        }
    }

    /// Nominal dimensions advertised for this label.
    pub fn dimensions(&self) -> &'static str {
        match self {
            Self::MaxRes => "1920x1080",
            Self::Hd => "1280x720",
            Self::Sd => "640x480",
            Self::High => "480x360",
            Self::Medium => "320x180",
            Self::Default => "120x90",
        }
    }

    /// i.ytimg.com filename variant for this label.
    ///
    /// The HD/SD pair is kept exactly as the original site shipped it (HD ->
    /// sddefault, SD -> hqdefault), and Medium and Default share `default`.
    /// Fixing the swap would silently change which file users get for a
    /// given label, so compatibility wins.
    pub fn variant(&self) -> &'static str {
        match self {
            Self::MaxRes => "maxresdefault",
            Self::Hd => "sddefault",
            Self::Sd => "hqdefault",
            Self::High => "mqdefault",
            Self::Medium => "default",
            Self::Default => "default",
        }
    }

    /// Parse a user-supplied label name (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "max-res" | "maxres" => Some(Self::MaxRes),
            "hd" => Some(Self::Hd),
            "sd" => Some(Self::Sd),
            "high" => Some(Self::High),
            "medium" => Some(Self::Medium),
            "default" => Some(Self::Default),
            _ => None,
        }
    }
}

impl fmt::Display for ThumbnailLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One thumbnail variant offered for a video. Produced fresh per
/// submission, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThumbnailDescriptor {
    pub label: ThumbnailLabel,
    pub dimensions: &'static str,
    pub url: String,
}

impl ThumbnailDescriptor {
    /// Suggested local filename for a saved copy.
    pub fn file_name(&self, id: &VideoId) -> String {
        format!("youtube_{}_{}.jpg", id, self.label)
    }
}

/// Build the fixed six-descriptor sequence for a video.
///
/// Purely computational and idempotent; no check that the image host
/// actually has every variant (missing ones 404, which is accepted).
pub fn resolve_thumbnails(id: &VideoId) -> Vec<ThumbnailDescriptor> {
    ThumbnailLabel::ALL
        .iter()
        .map(|label| ThumbnailDescriptor {
            label: *label,
            dimensions: label.dimensions(),
            url: format!("{}/vi/{}/{}.jpg", THUMBNAIL_ORIGIN, id, label.variant()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::extract_video_id;

    fn sample_id() -> VideoId {
        extract_video_id("https://youtu.be/dQw4w9WgXcQ").unwrap()
    }

    #[test]
    fn test_exactly_six_in_fixed_order() {
        let thumbs = resolve_thumbnails(&sample_id());
        assert_eq!(thumbs.len(), 6);
        let labels: Vec<&str> = thumbs.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, ["Max-Res", "HD", "SD", "High", "Medium", "Default"]);
    }

    #[test]
    fn test_maxres_url() {
        let thumbs = resolve_thumbnails(&sample_id());
        assert_eq!(
            thumbs[0].url,
            "https://i.ytimg.com/vi/dQw4w9WgXcQ/maxresdefault.jpg"
        );
    }

    #[test]
    fn test_id_appears_exactly_once_per_url() {
        let id = sample_id();
        for thumb in resolve_thumbnails(&id) {
            assert_eq!(thumb.url.matches(id.as_str()).count(), 1, "{}", thumb.url);
        }
    }

    #[test]
    fn test_idempotent() {
        let id = sample_id();
        assert_eq!(resolve_thumbnails(&id), resolve_thumbnails(&id));
    }

    #[test]
    fn test_legacy_hd_sd_mapping_preserved() {
        let thumbs = resolve_thumbnails(&sample_id());
        assert!(thumbs[1].url.ends_with("/sddefault.jpg")); // HD
        assert!(thumbs[2].url.ends_with("/hqdefault.jpg")); // SD
        assert!(thumbs[4].url.ends_with("/default.jpg")); // Medium
        assert!(thumbs[5].url.ends_with("/default.jpg")); // Default
    }

    #[test]
    fn test_file_name_embeds_id_and_label() {
        let id = sample_id();
        let thumbs = resolve_thumbnails(&id);
        assert_eq!(thumbs[0].file_name(&id), "youtube_dQw4w9WgXcQ_Max-Res.jpg");
    }

    #[test]
    fn test_label_parse_round_trip() {
        for label in ThumbnailLabel::ALL {
            assert_eq!(ThumbnailLabel::parse(label.as_str()), Some(label));
        }
        assert_eq!(ThumbnailLabel::parse("4k"), None);
    }
}
