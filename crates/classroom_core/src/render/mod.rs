//! Content rendering pipeline.
//!
//! **SEPARATION OF CONCERNS**:
//! - `render` (this module): pure kind dispatch from a persisted
//!   [`Material`] to a [`RenderedView`]
//! - [`math`]: segmentation of TEXT content into prose and math regions,
//!   plus the typesetting collaborator seam
//! - [`video`]: video-identifier extraction with passthrough degradation
//! - [`model_viewer`]: the LOADING/READY/ERROR lifecycle around the external
//!   3D/AR viewer embed
//! - [`html`]: flattening a rendered view into an HTML document
//!
//! Render failures never escape a single material: a math segment that fails
//! to typeset degrades to its flagged source text, and a model that fails to
//! load lands in a terminal error view. Everything here is synchronous; the
//! only asynchronous signal (3D asset load completion) arrives as an event
//! handled by [`ModelViewer`].

pub mod html;
pub mod math;
pub mod model_viewer;
pub mod video;

pub use math::{PlainTypesetter, RenderedSegment, Segment, TypesetError, Typesetter};
pub use model_viewer::{LoadState, LoadToken, ModelViewer, PresentationMode, ViewerView};
pub use video::VideoSource;

use crate::material::{Material, MaterialContent, ModelSettings};

/// Label used for a file affordance when the record carries no file name.
pub const GENERIC_DOWNLOAD_LABEL: &str = "Download attachment";

/// A download affordance for a FILE material.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadLink {
    /// Publicly resolvable download URL.
    pub url: String,
    /// Label shown to the viewer.
    pub label: String,
}

/// The display representation of one material, one variant per kind.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderedView {
    /// Ordered prose and math segments.
    Text(Vec<RenderedSegment>),
    /// An embeddable or passthrough video source.
    Video(VideoSource),
    /// A download affordance, or `None` for the empty state.
    File(Option<DownloadLink>),
    /// Settings handed to the 3D viewer lifecycle.
    Model(ModelSettings),
}

/// Selects a rendering strategy by material kind.
///
/// Pure mapping with one branch per kind; the tagged payload means no branch
/// can observe another kind's fields.
#[must_use]
pub fn render(material: &Material, typesetter: &dyn Typesetter) -> RenderedView {
    match &material.content {
        MaterialContent::Text { content } => {
            RenderedView::Text(math::typeset_segments(content, typesetter))
        }
        MaterialContent::Video { video_url } => RenderedView::Video(video::classify_url(video_url)),
        MaterialContent::File { file } => RenderedView::File(file.as_ref().map(|attachment| {
            DownloadLink {
                url: attachment.url.clone(),
                label: attachment
                    .name
                    .clone()
                    .unwrap_or_else(|| GENERIC_DOWNLOAD_LABEL.to_string()),
            }
        })),
        MaterialContent::Model3d { model } => RenderedView::Model(model.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::FileAttachment;

    #[test]
    fn test_file_without_upload_renders_empty_state() {
        let material = Material::local(
            "m-1",
            "Worksheet",
            MaterialContent::File { file: None },
        );
        let view = render(&material, &PlainTypesetter);
        assert_eq!(view, RenderedView::File(None));
    }

    #[test]
    fn test_file_affordance_labeled_with_file_name() {
        let material = Material::local(
            "m-1",
            "Worksheet",
            MaterialContent::File {
                file: Some(FileAttachment {
                    url: "https://files.test/ws.pdf".to_string(),
                    name: Some("ws.pdf".to_string()),
                }),
            },
        );
        let RenderedView::File(Some(link)) = render(&material, &PlainTypesetter) else {
            panic!("expected a download affordance");
        };
        assert_eq!(link.label, "ws.pdf");
    }

    #[test]
    fn test_file_affordance_falls_back_to_generic_label() {
        let material = Material::local(
            "m-1",
            "Worksheet",
            MaterialContent::File {
                file: Some(FileAttachment {
                    url: "https://files.test/ws.pdf".to_string(),
                    name: None,
                }),
            },
        );
        let RenderedView::File(Some(link)) = render(&material, &PlainTypesetter) else {
            panic!("expected a download affordance");
        };
        assert_eq!(link.label, GENERIC_DOWNLOAD_LABEL);
    }

    #[test]
    fn test_model_branch_passes_settings_through() {
        let settings = ModelSettings {
            url: "https://files.test/cell.glb".to_string(),
            scale: 2.0,
            ar_enabled: false,
        };
        let material = Material::local(
            "m-1",
            "Cell",
            MaterialContent::Model3d {
                model: settings.clone(),
            },
        );
        assert_eq!(
            render(&material, &PlainTypesetter),
            RenderedView::Model(settings)
        );
    }
}
