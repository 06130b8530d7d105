//! Authoring-form drafts and the submission gate.

use thiserror::Error;

use super::content::ModelSettings;
use super::kind::MaterialKind;
use super::record::{MaterialCreate, MaterialUpdate};

/// Why a draft was rejected by the submission gate.
///
/// Every variant is recoverable by editing the draft; the messages are shown
/// inline on the authoring form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DraftError {
    /// The title was empty after trimming whitespace.
    #[error("title required")]
    TitleRequired,
    /// A VIDEO draft had no video URL.
    #[error("video url required")]
    VideoUrlRequired,
    /// A TEXT draft had no content.
    #[error("content required")]
    ContentRequired,
    /// A MODEL3D draft had no model URL, i.e. no upload has completed.
    #[error("model upload required")]
    ModelUploadRequired,
}

/// Flat authoring-form state for one material.
///
/// Mirrors the form fields one-to-one: all payload fields coexist while
/// editing, and only the kind-relevant ones survive the conversion into a
/// wire payload. Switching kinds therefore preserves whatever was typed in
/// the other tabs.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialDraft {
    /// Title, required for every kind.
    pub title: String,
    /// Optional description; empty means absent.
    pub description: String,
    /// Selected content kind.
    pub kind: MaterialKind,
    /// TEXT payload.
    pub content: String,
    /// FILE payload: download URL from a completed upload.
    pub file_url: String,
    /// FILE payload: original file name.
    pub file_name: String,
    /// VIDEO payload.
    pub video_url: String,
    /// MODEL3D payload: asset URL from a completed upload.
    pub model_url: String,
    /// MODEL3D payload: uniform scale.
    pub model_scale: f32,
    /// MODEL3D payload: AR entry point flag.
    pub ar_enabled: bool,
    /// Visibility gate for non-owning viewers.
    pub is_published: bool,
}

impl MaterialDraft {
    /// Creates an empty draft for the given kind.
    #[must_use]
    pub fn new(kind: MaterialKind) -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            kind,
            content: String::new(),
            file_url: String::new(),
            file_name: String::new(),
            video_url: String::new(),
            model_url: String::new(),
            model_scale: ModelSettings::DEFAULT_SCALE,
            ar_enabled: true,
            is_published: true,
        }
    }

    /// The submission gate: decides whether this draft is complete enough to
    /// submit. Rules apply in order, first failure wins:
    ///
    /// 1. the trimmed title must be non-empty
    /// 2. VIDEO drafts need a video URL
    /// 3. TEXT drafts need content
    /// 4. MODEL3D drafts need a completed model upload
    ///
    /// FILE drafts have no payload rule; an absent upload renders as an
    /// empty state later. Pure function of the draft, no I/O.
    ///
    /// # Errors
    ///
    /// The first [`DraftError`] whose rule fails.
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.title.trim().is_empty() {
            return Err(DraftError::TitleRequired);
        }
        match self.kind {
            MaterialKind::Video if self.video_url.is_empty() => Err(DraftError::VideoUrlRequired),
            MaterialKind::Text if self.content.is_empty() => Err(DraftError::ContentRequired),
            MaterialKind::Model3d if self.model_url.is_empty() => {
                Err(DraftError::ModelUploadRequired)
            }
            _ => Ok(()),
        }
    }

    /// Validates and converts into a create payload. Only the kind-relevant
    /// payload fields are emitted.
    ///
    /// # Errors
    ///
    /// Propagates the [`DraftError`] when validation rejects the draft.
    pub fn into_create(self) -> Result<MaterialCreate, DraftError> {
        self.validate()?;
        let description = none_if_empty(self.description);
        let mut payload = MaterialCreate {
            title: self.title.trim().to_string(),
            description,
            kind: self.kind,
            content: None,
            file_url: None,
            file_name: None,
            video_url: None,
            model_url: None,
            model_scale: None,
            ar_enabled: None,
            is_published: self.is_published,
        };
        match self.kind {
            MaterialKind::Text => payload.content = Some(self.content),
            MaterialKind::File => {
                payload.file_url = none_if_empty(self.file_url);
                payload.file_name = none_if_empty(self.file_name);
            }
            MaterialKind::Video => payload.video_url = Some(self.video_url),
            MaterialKind::Model3d => {
                payload.model_url = Some(self.model_url);
                payload.model_scale = Some(self.model_scale);
                payload.ar_enabled = Some(self.ar_enabled);
            }
        }
        Ok(payload)
    }

    /// Validates and converts into a full re-submit update payload.
    ///
    /// # Errors
    ///
    /// Propagates the [`DraftError`] when validation rejects the draft.
    pub fn into_update(self) -> Result<MaterialUpdate, DraftError> {
        let create = self.into_create()?;
        Ok(MaterialUpdate {
            title: Some(create.title),
            description: create.description,
            kind: Some(create.kind),
            content: create.content,
            file_url: create.file_url,
            file_name: create.file_name,
            video_url: create.video_url,
            model_url: create.model_url,
            model_scale: create.model_scale,
            ar_enabled: create.ar_enabled,
            is_published: Some(create.is_published),
            order: None,
        })
    }
}

fn none_if_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titled(kind: MaterialKind) -> MaterialDraft {
        let mut draft = MaterialDraft::new(kind);
        draft.title = "Lesson 1".to_string();
        draft
    }

    #[test]
    fn test_missing_title_rejected_for_every_kind() {
        for kind in [
            MaterialKind::Text,
            MaterialKind::File,
            MaterialKind::Video,
            MaterialKind::Model3d,
        ] {
            let draft = MaterialDraft::new(kind);
            assert_eq!(draft.validate(), Err(DraftError::TitleRequired));
        }
    }

    #[test]
    fn test_whitespace_title_rejected() {
        let mut draft = MaterialDraft::new(MaterialKind::File);
        draft.title = "   \t".to_string();
        assert_eq!(draft.validate(), Err(DraftError::TitleRequired));
    }

    #[test]
    fn test_title_checked_before_payload() {
        // Empty title and empty video URL: the title rule fires first.
        let draft = MaterialDraft::new(MaterialKind::Video);
        assert_eq!(draft.validate(), Err(DraftError::TitleRequired));
    }

    #[test]
    fn test_video_requires_url() {
        let mut draft = titled(MaterialKind::Video);
        assert_eq!(draft.validate(), Err(DraftError::VideoUrlRequired));
        draft.video_url = "https://youtu.be/dQw4w9WgXcQ".to_string();
        assert_eq!(draft.validate(), Ok(()));
    }

    #[test]
    fn test_text_requires_content() {
        let mut draft = titled(MaterialKind::Text);
        assert_eq!(draft.validate(), Err(DraftError::ContentRequired));
        draft.content = "Newton's laws".to_string();
        assert_eq!(draft.validate(), Ok(()));
    }

    #[test]
    fn test_model_requires_completed_upload() {
        let mut draft = titled(MaterialKind::Model3d);
        assert_eq!(draft.validate(), Err(DraftError::ModelUploadRequired));
        draft.model_url = "https://files.test/molecule.glb".to_string();
        assert_eq!(draft.validate(), Ok(()));
    }

    #[test]
    fn test_file_without_upload_is_accepted() {
        let draft = titled(MaterialKind::File);
        assert_eq!(draft.validate(), Ok(()));
    }

    #[test]
    fn test_rejected_draft_yields_no_wire_payload() {
        let draft = titled(MaterialKind::Model3d);
        assert_eq!(draft.into_create(), Err(DraftError::ModelUploadRequired));
    }

    #[test]
    fn test_create_payload_carries_only_relevant_fields() {
        let mut draft = titled(MaterialKind::Text);
        draft.content = "body".to_string();
        // Leftovers from other tabs must not leak into the payload.
        draft.video_url = "https://youtu.be/dQw4w9WgXcQ".to_string();
        draft.model_url = "https://files.test/m.glb".to_string();

        let payload = draft.into_create().unwrap();
        assert_eq!(payload.content.as_deref(), Some("body"));
        assert!(payload.video_url.is_none());
        assert!(payload.model_url.is_none());
    }

    #[test]
    fn test_model_payload_carries_settings() {
        let mut draft = titled(MaterialKind::Model3d);
        draft.model_url = "https://files.test/m.glb".to_string();
        draft.model_scale = 0.5;
        draft.ar_enabled = false;

        let payload = draft.into_create().unwrap();
        assert_eq!(payload.model_scale, Some(0.5));
        assert_eq!(payload.ar_enabled, Some(false));
    }

    #[test]
    fn test_update_is_full_resubmit() {
        let mut draft = titled(MaterialKind::Video);
        draft.video_url = "https://youtu.be/dQw4w9WgXcQ".to_string();
        draft.is_published = false;

        let payload = draft.into_update().unwrap();
        assert_eq!(payload.title.as_deref(), Some("Lesson 1"));
        assert_eq!(payload.kind, Some(MaterialKind::Video));
        assert_eq!(payload.is_published, Some(false));
        assert!(payload.order.is_none());
    }
}
