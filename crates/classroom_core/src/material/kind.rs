//! Material kind tags.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The fixed set of content kinds a material can carry.
///
/// Serialized with the backend's uppercase tags (`"TEXT"`, `"FILE"`,
/// `"VIDEO"`, `"MODEL3D"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaterialKind {
    /// Prose with optional embedded math regions.
    #[serde(rename = "TEXT")]
    Text,
    /// A downloadable file attachment.
    #[serde(rename = "FILE")]
    File,
    /// A link to a hosted video.
    #[serde(rename = "VIDEO")]
    Video,
    /// An uploaded 3D model, optionally viewable in AR.
    #[serde(rename = "MODEL3D")]
    Model3d,
}

impl MaterialKind {
    /// The backend wire tag for this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "TEXT",
            Self::File => "FILE",
            Self::Video => "VIDEO",
            Self::Model3d => "MODEL3D",
        }
    }
}

impl fmt::Display for MaterialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown material kind tag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown material kind: {0}")]
pub struct UnknownKind(pub String);

impl FromStr for MaterialKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TEXT" => Ok(Self::Text),
            "FILE" => Ok(Self::File),
            "VIDEO" => Ok(Self::Video),
            "MODEL3D" => Ok(Self::Model3d),
            other => Err(UnknownKind(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_tags_round_trip() {
        for kind in [
            MaterialKind::Text,
            MaterialKind::File,
            MaterialKind::Video,
            MaterialKind::Model3d,
        ] {
            assert_eq!(kind.as_str().parse::<MaterialKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_serde_uses_backend_tags() {
        let json = serde_json::to_string(&MaterialKind::Model3d).unwrap();
        assert_eq!(json, "\"MODEL3D\"");
        let kind: MaterialKind = serde_json::from_str("\"VIDEO\"").unwrap();
        assert_eq!(kind, MaterialKind::Video);
    }

    #[test]
    fn test_unknown_tag_rejected() {
        assert!("AUDIO".parse::<MaterialKind>().is_err());
    }
}
