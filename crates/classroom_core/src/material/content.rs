//! Persisted materials and their kind-tagged payloads.

use serde::{Deserialize, Serialize};

use super::kind::MaterialKind;
use super::record::MaterialRecord;

/// A downloadable file attachment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileAttachment {
    /// Publicly resolvable download URL.
    pub url: String,
    /// Original file name, used to label the download affordance.
    pub name: Option<String>,
}

/// Display settings for an uploaded 3D model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSettings {
    /// URL of the binary model asset (typically a `.glb`).
    pub url: String,
    /// Uniform scale applied by the viewer.
    pub scale: f32,
    /// Whether the AR entry point is offered on capable devices.
    pub ar_enabled: bool,
}

impl ModelSettings {
    /// Default uniform scale when the record carries none.
    pub const DEFAULT_SCALE: f32 = 1.0;
}

/// Fallback viewer settings used when a MODEL3D record omits them,
/// typically sourced from the client configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelDefaults {
    /// Uniform scale applied when the record carries none.
    pub scale: f32,
    /// AR availability when the record carries none.
    pub ar_enabled: bool,
}

impl Default for ModelDefaults {
    fn default() -> Self {
        Self {
            scale: ModelSettings::DEFAULT_SCALE,
            ar_enabled: true,
        }
    }
}

/// Kind-specific material payload.
///
/// Exactly one payload is active per material; the tag replaces the informal
/// "ignore irrelevant fields" rule the flat wire record would otherwise
/// require.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MaterialContent {
    /// Prose that may interleave `$...$` and `$$...$$` math regions.
    Text {
        /// The raw authored text.
        content: String,
    },
    /// A file attachment; `None` when no upload has been linked yet, which
    /// renders as an empty state rather than an error.
    File {
        /// The attachment, if any.
        file: Option<FileAttachment>,
    },
    /// A hosted video link.
    Video {
        /// The authored video URL.
        video_url: String,
    },
    /// An uploaded 3D/AR model.
    Model3d {
        /// Viewer settings for the model.
        model: ModelSettings,
    },
}

impl MaterialContent {
    /// The kind tag this payload belongs to.
    #[must_use]
    pub const fn kind(&self) -> MaterialKind {
        match self {
            Self::Text { .. } => MaterialKind::Text,
            Self::File { .. } => MaterialKind::File,
            Self::Video { .. } => MaterialKind::Video,
            Self::Model3d { .. } => MaterialKind::Model3d,
        }
    }
}

/// Summary of the user who created a material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatorSummary {
    /// User identifier.
    pub id: String,
    /// Display name.
    pub name: String,
}

/// A persisted material, classified from the backend's flat record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Opaque backend identifier.
    pub id: String,
    /// Non-empty title shown in listings.
    pub title: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// The kind-tagged payload.
    pub content: MaterialContent,
    /// Whether students (non-owning viewers) can see this material. The
    /// backend enforces the gate; the client only mirrors the flag.
    pub is_published: bool,
    /// Position within the classroom's material list.
    pub order: i64,
    /// Owning classroom identifier.
    pub classroom_id: String,
    /// The teacher who created the material, when the backend embeds it.
    pub created_by: Option<CreatorSummary>,
    /// Creation timestamp as an opaque RFC 3339 string.
    pub created_at: String,
    /// Last update timestamp as an opaque RFC 3339 string.
    pub updated_at: String,
}

impl Material {
    /// Classifies a flat wire record with the built-in model fallbacks.
    ///
    /// Equivalent to [`Self::from_record_with`] with
    /// [`ModelDefaults::default`].
    #[must_use]
    pub fn from_record(record: MaterialRecord) -> Self {
        Self::from_record_with(record, ModelDefaults::default())
    }

    /// Classifies a flat wire record into a kind-tagged material.
    ///
    /// Payload fields that do not belong to the record's kind are dropped.
    /// Missing payload fields classify to empty strings (TEXT/VIDEO/MODEL3D)
    /// or an absent attachment (FILE); the validation gate prevents a client
    /// of this crate from *creating* such records, but the backend is the
    /// authority of record and may hand them back. Absent model scale and
    /// AR availability fall back to `defaults`.
    #[must_use]
    pub fn from_record_with(record: MaterialRecord, defaults: ModelDefaults) -> Self {
        let content = match record.kind {
            MaterialKind::Text => MaterialContent::Text {
                content: record.content.unwrap_or_default(),
            },
            MaterialKind::File => MaterialContent::File {
                file: record.file_url.map(|url| FileAttachment {
                    url,
                    name: record.file_name,
                }),
            },
            MaterialKind::Video => MaterialContent::Video {
                video_url: record.video_url.unwrap_or_default(),
            },
            MaterialKind::Model3d => MaterialContent::Model3d {
                model: ModelSettings {
                    url: record.model_url.unwrap_or_default(),
                    scale: record.model_scale.unwrap_or(defaults.scale),
                    ar_enabled: record.ar_enabled.unwrap_or(defaults.ar_enabled),
                },
            },
        };

        Self {
            id: record.id,
            title: record.title,
            description: record.description,
            content,
            is_published: record.is_published,
            order: record.order,
            classroom_id: record.classroom_id,
            created_by: record.created_by,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }

    /// Constructs a material directly from a payload, without a backend
    /// round trip. Used by previews and tests.
    #[must_use]
    pub fn local(id: &str, title: &str, content: MaterialContent) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: None,
            content,
            is_published: true,
            order: 0,
            classroom_id: String::new(),
            created_by: None,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    /// The kind tag of this material's payload.
    #[must_use]
    pub const fn kind(&self) -> MaterialKind {
        self.content.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(kind: MaterialKind) -> MaterialRecord {
        MaterialRecord {
            id: "m-1".to_string(),
            title: "Forces".to_string(),
            description: None,
            kind,
            content: Some("notes".to_string()),
            file_url: Some("https://files.test/f.pdf".to_string()),
            file_name: Some("f.pdf".to_string()),
            video_url: Some("https://youtu.be/dQw4w9WgXcQ".to_string()),
            model_url: Some("https://files.test/m.glb".to_string()),
            model_scale: Some(2.5),
            ar_enabled: Some(false),
            is_published: true,
            order: 3,
            classroom_id: "c-1".to_string(),
            created_by: None,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    #[test]
    fn test_classification_drops_foreign_payloads() {
        let material = Material::from_record(record(MaterialKind::Text));
        assert_eq!(
            material.content,
            MaterialContent::Text {
                content: "notes".to_string()
            }
        );

        let material = Material::from_record(record(MaterialKind::Video));
        assert_eq!(
            material.content,
            MaterialContent::Video {
                video_url: "https://youtu.be/dQw4w9WgXcQ".to_string()
            }
        );
    }

    #[test]
    fn test_model_defaults_applied() {
        let mut rec = record(MaterialKind::Model3d);
        rec.model_scale = None;
        rec.ar_enabled = None;
        let material = Material::from_record(rec);
        let MaterialContent::Model3d { model } = material.content else {
            panic!("expected model payload");
        };
        assert_eq!(model.scale, ModelSettings::DEFAULT_SCALE);
        assert!(model.ar_enabled);
    }

    #[test]
    fn test_configured_model_defaults_applied() {
        let mut rec = record(MaterialKind::Model3d);
        rec.model_scale = None;
        rec.ar_enabled = None;
        let defaults = ModelDefaults {
            scale: 2.0,
            ar_enabled: false,
        };
        let material = Material::from_record_with(rec, defaults);
        let MaterialContent::Model3d { model } = material.content else {
            panic!("expected model payload");
        };
        assert_eq!(model.scale, 2.0);
        assert!(!model.ar_enabled);
    }

    #[test]
    fn test_record_values_win_over_defaults() {
        let defaults = ModelDefaults {
            scale: 2.0,
            ar_enabled: true,
        };
        let material = Material::from_record_with(record(MaterialKind::Model3d), defaults);
        let MaterialContent::Model3d { model } = material.content else {
            panic!("expected model payload");
        };
        assert_eq!(model.scale, 2.5);
        assert!(!model.ar_enabled);
    }

    #[test]
    fn test_file_without_upload_classifies_to_empty_state() {
        let mut rec = record(MaterialKind::File);
        rec.file_url = None;
        let material = Material::from_record(rec);
        assert_eq!(material.content, MaterialContent::File { file: None });
    }
}
