// Video-id extraction from user-pasted URLs

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

lazy_static! {
    // Accepted shapes: youtu.be/<id>, youtube.com/watch?v=<id>,
    // youtube.com/embed/<id>, youtube.com/v/<id>, with optional scheme
    // and "www.". Anything after the 11-char token is ignored.
    static ref VIDEO_ID_RE: Regex = Regex::new(
        r"(?:https?://)?(?:www\.)?(?:youtube\.com/(?:watch\?v=|embed/|v/)|youtu\.be/)([0-9A-Za-z_-]{11})"
    )
    .unwrap();
}

/// An 11-character YouTube video identifier (alphanumeric plus `-` and `_`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VideoId(String);

impl VideoId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Pull the video id out of a free-text URL candidate.
///
/// Returns `None` when no accepted shape matches; never panics. The first
/// 11-char token after the recognized path marker wins, and trailing path
/// or query segments do not invalidate the match.
pub fn extract_video_id(input: &str) -> Option<VideoId> {
    VIDEO_ID_RE
        .captures(input.trim())
        .map(|caps| VideoId(caps[1].to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id_of(input: &str) -> Option<String> {
        extract_video_id(input).map(|id| id.as_str().to_string())
    }

    #[test]
    fn test_watch_url() {
        assert_eq!(
            id_of("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_short_url_with_query() {
        assert_eq!(
            id_of("https://youtu.be/dQw4w9WgXcQ?t=10"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_embed_url() {
        assert_eq!(
            id_of("https://www.youtube.com/embed/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_bare_path_url() {
        assert_eq!(
            id_of("youtube.com/v/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_no_scheme_no_www() {
        assert_eq!(
            id_of("youtu.be/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_scheme_variants_agree() {
        let expected = Some("a1B2c3D4e5F".to_string());
        assert_eq!(id_of("http://youtube.com/watch?v=a1B2c3D4e5F"), expected);
        assert_eq!(id_of("https://www.youtube.com/watch?v=a1B2c3D4e5F"), expected);
        assert_eq!(id_of("www.youtube.com/watch?v=a1B2c3D4e5F"), expected);
    }

    #[test]
    fn test_trailing_params_ignored() {
        assert_eq!(
            id_of("https://www.youtube.com/watch?v=dQw4w9WgXcQ&list=PLx&t=30s"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_hyphen_underscore_in_id() {
        assert_eq!(
            id_of("https://youtu.be/a-b_c-d_e-f"),
            Some("a-b_c-d_e-f".to_string())
        );
    }

    #[test]
    fn test_surrounding_whitespace() {
        assert_eq!(
            id_of("  https://youtu.be/dQw4w9WgXcQ  "),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(id_of(""), None);
    }

    #[test]
    fn test_non_url_text() {
        assert_eq!(id_of("not a url"), None);
    }

    #[test]
    fn test_missing_id_segment() {
        assert_eq!(id_of("https://www.youtube.com/watch"), None);
        assert_eq!(id_of("https://youtu.be/"), None);
    }

    #[test]
    fn test_id_too_short() {
        assert_eq!(id_of("https://youtu.be/short"), None);
    }

    #[test]
    fn test_other_domain() {
        assert_eq!(id_of("https://vimeo.com/12345678901"), None);
    }
}
