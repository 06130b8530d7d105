//! Object-storage uploads.
//!
//! The storage service is an external collaborator that accepts a binary
//! PUT and makes the object publicly resolvable; the rest of the pipeline
//! only ever consumes the resulting URL. A failed upload changes nothing:
//! the draft keeps its state and the user retries.

use std::time::Duration;

use url::Url;

use crate::config::UploadConfig;
use crate::events::{Event, EventArg, EventSystem, EventType};

use super::{ApiError, ApiResult};

const BYTES_PER_MB: u64 = 1024 * 1024;

/// Client for the upload endpoint of the object-storage collaborator.
pub struct ObjectStore {
    http: reqwest::blocking::Client,
    endpoint: Url,
    max_size_mb: u64,
}

impl ObjectStore {
    /// Builds an uploader against the configured storage endpoint.
    ///
    /// # Errors
    ///
    /// [`ApiError::Endpoint`] for an unparsable endpoint;
    /// [`ApiError::Transport`] when the HTTP client cannot be constructed.
    pub fn new(config: &UploadConfig) -> ApiResult<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(120))
            .build()?;
        let endpoint = Url::parse(&config.endpoint)?;
        Ok(Self {
            http,
            endpoint,
            max_size_mb: config.max_size_mb,
        })
    }

    /// Uploads one object and returns its publicly resolvable URL.
    ///
    /// The size limit is enforced before anything is sent, so an oversized
    /// payload fails fast without touching the network.
    ///
    /// # Errors
    ///
    /// [`ApiError::UploadTooLarge`] for oversized payloads,
    /// [`ApiError::Transport`] / [`ApiError::Status`] for failed uploads.
    pub fn put(&self, name: &str, bytes: Vec<u8>, content_type: &str) -> ApiResult<String> {
        let size_mb = (bytes.len() as u64).div_ceil(BYTES_PER_MB);
        if size_mb > self.max_size_mb {
            return Err(ApiError::UploadTooLarge {
                size_mb,
                limit_mb: self.max_size_mb,
            });
        }

        let target = self.endpoint.join(name)?;
        log::info!("uploading {} ({} bytes) to {target}", name, bytes.len());
        let response = self
            .http
            .put(target.clone())
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(bytes)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("upload of {name} failed with {status}");
            return Err(ApiError::Status {
                status: status.as_u16(),
                detail: status
                    .canonical_reason()
                    .unwrap_or("upload failed")
                    .to_string(),
            });
        }
        Ok(target.to_string())
    }

    /// Uploads one object and reports the outcome through the event system.
    ///
    /// Success queues [`EventType::UploadCompleted`] carrying the object
    /// URL; failure queues [`EventType::UploadFailed`] with the error
    /// detail so the draft owner can surface a retry affordance. The
    /// result is returned either way; events are delivered on the next
    /// dispatch.
    ///
    /// # Errors
    ///
    /// Same as [`Self::put`].
    pub fn put_notified(
        &self,
        events: &mut EventSystem,
        name: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> ApiResult<String> {
        let timestamp = events.current_time();
        match self.put(name, bytes, content_type) {
            Ok(url) => {
                events.send(
                    Event::new(EventType::UploadCompleted, timestamp)
                        .with_arg("url", EventArg::Url(url.clone())),
                );
                Ok(url)
            }
            Err(err) => {
                events.send(
                    Event::new(EventType::UploadFailed, timestamp)
                        .with_arg("detail", EventArg::Detail(err.to_string())),
                );
                Err(err)
            }
        }
    }
}
