//! Backend REST client.
//!
//! The backend is an external collaborator: it owns persistence,
//! authentication, and re-validates everything. This module is the thin
//! glue that issues the calls. The one piece of client-side logic it
//! enforces is the submission gate: a material create/update can only be
//! built from a draft that passed validation, so no unvalidated payload
//! ever crosses the boundary.
//!
//! Failures are transient from the caller's perspective: the client mutates
//! no local state, so a failed call leaves everything where it was and the
//! caller is free to retry.

pub mod client;
pub mod types;
pub mod upload;

pub use client::Client;
pub use upload::ObjectStore;

use thiserror::Error;

use crate::material::DraftError;

/// Errors surfaced by backend and object-storage calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The draft failed the submission gate; no request was issued.
    #[error("draft rejected: {0}")]
    Rejected(#[from] DraftError),

    /// The request could not be sent or the response could not be read.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success status. `detail` carries the
    /// backend's error body when it sent one.
    #[error("backend returned {status}: {detail}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Backend-provided detail or the status' canonical reason.
        detail: String,
    },

    /// A call that requires a session was made while signed out.
    #[error("not signed in")]
    Unauthenticated,

    /// The configured base URL or a joined endpoint was invalid.
    #[error("invalid endpoint: {0}")]
    Endpoint(#[from] url::ParseError),

    /// An upload exceeded the configured size limit; nothing was sent.
    #[error("upload of {size_mb} MB exceeds the {limit_mb} MB limit")]
    UploadTooLarge {
        /// Size of the rejected payload in megabytes.
        size_mb: u64,
        /// Configured limit in megabytes.
        limit_mb: u64,
    },
}

/// Result type alias for API calls.
pub type ApiResult<T> = Result<T, ApiError>;
