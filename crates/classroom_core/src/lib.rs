//! # Classroom Core
//!
//! Client core for a classroom e-learning platform. Teachers publish
//! materials (rich text with LaTeX, video links, file attachments, or 3D/AR
//! models) and students view them; persistence and authentication live in an
//! external backend, which this crate talks to over REST.
//!
//! ## Features
//!
//! - **Material Model**: kind-tagged materials with mutually exclusive
//!   payloads enforced by construction
//! - **Draft Validation**: the submission gate that runs before any
//!   create/update call crosses the system boundary
//! - **Content Rendering**: per-kind rendering strategies, including a
//!   math-segment interpreter for `$...$` / `$$...$$` regions
//! - **3D Viewer Lifecycle**: loading/ready/error state machine with stale
//!   signal rejection and an orthogonal AR presentation toggle
//! - **Backend Client**: blocking REST client for classroom and material
//!   CRUD, with an injected session capability
//!
//! ## Quick Start
//!
//! ```rust
//! use classroom_core::prelude::*;
//!
//! let mut draft = MaterialDraft::new(MaterialKind::Text);
//! draft.title = "Quadratic formula".to_string();
//! draft.content = r"Solve with $x = \frac{-b \pm \sqrt{b^2-4ac}}{2a}$".to_string();
//! assert!(draft.validate().is_ok());
//!
//! let material = Material::local(
//!     "m-1",
//!     &draft.title,
//!     MaterialContent::Text {
//!         content: draft.content.clone(),
//!     },
//! );
//! let view = render(&material, &PlainTypesetter);
//! assert!(matches!(view, RenderedView::Text(_)));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod api;
pub mod config;
pub mod events;
pub mod material;
pub mod render;
pub mod session;

/// Common imports for crate users
pub mod prelude {
    pub use crate::{
        api::{ApiError, ApiResult, Client},
        config::{ClientConfig, Config, ConfigError},
        events::{Event, EventArg, EventHandler, EventSystem, EventType},
        material::{
            DraftError, Material, MaterialContent, MaterialDraft, MaterialKind, ModelDefaults,
            ModelSettings,
        },
        render::{
            render, LoadState, ModelViewer, PlainTypesetter, PresentationMode, RenderedSegment,
            RenderedView, Typesetter, VideoSource,
        },
        session::{MemorySession, SessionProvider},
    };
}
