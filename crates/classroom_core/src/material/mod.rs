//! Material domain model.
//!
//! A material is one unit of classroom content of a fixed kind: prose with
//! embedded LaTeX, a file attachment, a hosted video link, or an uploaded
//! 3D/AR model. The backend stores materials as flat records with one
//! optional column per payload field; this module classifies those records
//! into a kind-tagged [`MaterialContent`] so that irrelevant payload fields
//! cannot leak into rendering.
//!
//! Lifecycle: an authoring form edits a [`MaterialDraft`], the draft passes
//! the validation gate ([`MaterialDraft::validate`]), and only a validated
//! draft can be turned into a wire payload for the backend
//! ([`MaterialDraft::into_create`] / [`MaterialDraft::into_update`]).

mod content;
mod draft;
mod kind;
mod record;

pub use content::{
    CreatorSummary, FileAttachment, Material, MaterialContent, ModelDefaults, ModelSettings,
};
pub use draft::{DraftError, MaterialDraft};
pub use kind::{MaterialKind, UnknownKind};
pub use record::{MaterialCreate, MaterialRecord, MaterialUpdate};
