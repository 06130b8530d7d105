//! Video URL classification for VIDEO materials.

use std::sync::LazyLock;

use regex::Regex;

/// Recognizes hosted-video URLs carrying an 11-character video identifier.
/// Covers `watch?v=`, `embed/`, `shorts/`, and short-link forms.
static VIDEO_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:youtube\.com/(?:watch\?v=|embed/|shorts/)|youtu\.be/)([A-Za-z0-9_-]{11})")
        .expect("video id pattern is valid")
});

/// How a VIDEO material's URL should be presented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoSource {
    /// The URL matched the recognized pattern; embed by identifier.
    Embed {
        /// The 11-character video identifier.
        id: String,
    },
    /// No identifier found; pass the original URL through unchanged.
    /// Best-effort degradation, not an error.
    Raw {
        /// The authored URL.
        url: String,
    },
}

impl VideoSource {
    /// The URL to load in the embedded player.
    #[must_use]
    pub fn embed_url(&self) -> String {
        match self {
            Self::Embed { id } => format!("https://www.youtube.com/embed/{id}"),
            Self::Raw { url } => url.clone(),
        }
    }
}

/// Extracts the video identifier from a URL, falling back to passthrough.
#[must_use]
pub fn classify_url(url: &str) -> VideoSource {
    VIDEO_ID.captures(url).map_or_else(
        || VideoSource::Raw {
            url: url.to_string(),
        },
        |caps| VideoSource::Embed {
            id: caps[1].to_string(),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watch_url_extracts_id() {
        let source = classify_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ");
        assert_eq!(
            source,
            VideoSource::Embed {
                id: "dQw4w9WgXcQ".to_string()
            }
        );
        assert_eq!(
            source.embed_url(),
            "https://www.youtube.com/embed/dQw4w9WgXcQ"
        );
    }

    #[test]
    fn test_short_link_extracts_id() {
        assert_eq!(
            classify_url("https://youtu.be/dQw4w9WgXcQ?t=42"),
            VideoSource::Embed {
                id: "dQw4w9WgXcQ".to_string()
            }
        );
    }

    #[test]
    fn test_embed_and_shorts_forms_extract_id() {
        for url in [
            "https://www.youtube.com/embed/dQw4w9WgXcQ",
            "https://youtube.com/shorts/dQw4w9WgXcQ",
        ] {
            assert_eq!(
                classify_url(url),
                VideoSource::Embed {
                    id: "dQw4w9WgXcQ".to_string()
                }
            );
        }
    }

    #[test]
    fn test_unrecognized_url_passes_through() {
        let url = "https://vimeo.com/123456789";
        let source = classify_url(url);
        assert_eq!(
            source,
            VideoSource::Raw {
                url: url.to_string()
            }
        );
        assert_eq!(source.embed_url(), url);
    }

    #[test]
    fn test_short_identifier_passes_through() {
        assert!(matches!(
            classify_url("https://youtu.be/short"),
            VideoSource::Raw { .. }
        ));
    }
}
