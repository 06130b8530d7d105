//! Blocking REST client for the classroom backend.

use std::sync::Arc;
use std::time::Duration;

use reqwest::blocking::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::config::ClientConfig;
use crate::material::{Material, MaterialDraft, MaterialRecord, ModelDefaults};
use crate::session::SessionProvider;

use super::types::{
    AuthResponse, Classroom, ClassroomCreate, ClassroomUpdate, ErrorBody, JoinRequest,
    JoinResponse, LoginRequest, MessageResponse, PasswordChange, ProfileUpdate, RegisterRequest,
    ReorderRequest, StudentEntry, UserProfile,
};
use super::{ApiError, ApiResult};

/// Client for the backend's material and classroom CRUD API.
///
/// Holds no mutable state of its own; every method maps one endpoint and
/// returns the backend's response as the single source of truth. The
/// session capability is injected so token storage stays the host's
/// decision.
pub struct Client {
    http: reqwest::blocking::Client,
    base: Url,
    session: Arc<dyn SessionProvider>,
    model_defaults: ModelDefaults,
}

impl Client {
    /// Builds a client against the configured backend. The viewer section
    /// supplies the fallbacks applied when fetched MODEL3D records omit
    /// scale or AR availability.
    ///
    /// # Errors
    ///
    /// [`ApiError::Endpoint`] for an unparsable base URL;
    /// [`ApiError::Transport`] when the HTTP client cannot be constructed.
    pub fn new(config: &ClientConfig, session: Arc<dyn SessionProvider>) -> ApiResult<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.api.timeout_secs))
            .build()?;
        let base = Url::parse(&config.api.base_url)?;
        Ok(Self {
            http,
            base,
            session,
            model_defaults: config.viewer.model_defaults(),
        })
    }

    fn endpoint(&self, path: &str) -> ApiResult<Url> {
        Ok(self.base.join(path)?)
    }

    fn bearer(&self, builder: RequestBuilder) -> ApiResult<RequestBuilder> {
        let token = self.session.token().ok_or(ApiError::Unauthenticated)?;
        Ok(builder.bearer_auth(token))
    }

    fn read_json<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json()?);
        }
        let detail = response
            .json::<ErrorBody>()
            .map(|body| body.detail)
            .unwrap_or_else(|_| {
                status
                    .canonical_reason()
                    .unwrap_or("unknown error")
                    .to_string()
            });
        log::warn!("backend call failed with {status}: {detail}");
        Err(ApiError::Status {
            status: status.as_u16(),
            detail,
        })
    }

    fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        log::debug!("GET {path}");
        let builder = self.bearer(self.http.get(self.endpoint(path)?))?;
        Self::read_json(builder.send()?)
    }

    fn send_json<T: DeserializeOwned, B: Serialize>(
        &self,
        method: reqwest::Method,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        log::debug!("{method} {path}");
        let builder = self
            .bearer(self.http.request(method, self.endpoint(path)?))?
            .json(body);
        Self::read_json(builder.send()?)
    }

    fn delete<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        log::debug!("DELETE {path}");
        let builder = self.bearer(self.http.delete(self.endpoint(path)?))?;
        Self::read_json(builder.send()?)
    }

    // ==================== AUTH ====================

    /// Registers a new account. Does not start a session; the caller
    /// decides what to do with the returned token.
    ///
    /// # Errors
    ///
    /// [`ApiError`] on transport failure or a backend rejection.
    pub fn register(&self, request: &RegisterRequest) -> ApiResult<AuthResponse> {
        log::debug!("POST auth/register");
        let builder = self
            .http
            .post(self.endpoint("auth/register")?)
            .json(request);
        Self::read_json(builder.send()?)
    }

    /// Logs in with email and password.
    ///
    /// # Errors
    ///
    /// [`ApiError`] on transport failure or invalid credentials.
    pub fn login(&self, email: &str, password: &str) -> ApiResult<AuthResponse> {
        log::debug!("POST auth/login");
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let builder = self.http.post(self.endpoint("auth/login")?).json(&request);
        Self::read_json(builder.send()?)
    }

    /// Fetches the signed-in profile.
    ///
    /// # Errors
    ///
    /// [`ApiError::Unauthenticated`] when signed out; otherwise transport
    /// or backend errors.
    pub fn profile(&self) -> ApiResult<UserProfile> {
        self.get("auth/profile")
    }

    /// Updates name and/or avatar.
    ///
    /// # Errors
    ///
    /// [`ApiError`] on transport failure or a backend rejection.
    pub fn update_profile(&self, update: &ProfileUpdate) -> ApiResult<UserProfile> {
        self.send_json(reqwest::Method::PATCH, "auth/profile", update)
    }

    /// Changes the account password.
    ///
    /// # Errors
    ///
    /// [`ApiError`] on transport failure or a wrong current password.
    pub fn change_password(&self, change: &PasswordChange) -> ApiResult<()> {
        let _: MessageResponse =
            self.send_json(reqwest::Method::POST, "auth/change-password", change)?;
        Ok(())
    }

    // ==================== CLASSROOMS ====================

    /// Lists the classrooms visible to the signed-in user: owned ones for
    /// teachers, enrolled ones for students.
    ///
    /// # Errors
    ///
    /// [`ApiError`] on transport failure or a backend rejection.
    pub fn classrooms(&self) -> ApiResult<Vec<Classroom>> {
        self.get("classrooms")
    }

    /// Creates a classroom (teacher only).
    ///
    /// # Errors
    ///
    /// [`ApiError`] on transport failure or a backend rejection.
    pub fn create_classroom(&self, request: &ClassroomCreate) -> ApiResult<Classroom> {
        self.send_json(reqwest::Method::POST, "classrooms", request)
    }

    /// Fetches one classroom.
    ///
    /// # Errors
    ///
    /// [`ApiError`] on transport failure or a backend rejection.
    pub fn classroom(&self, id: &str) -> ApiResult<Classroom> {
        self.get(&format!("classrooms/{id}"))
    }

    /// Updates a classroom (teacher only).
    ///
    /// # Errors
    ///
    /// [`ApiError`] on transport failure or a backend rejection.
    pub fn update_classroom(&self, id: &str, update: &ClassroomUpdate) -> ApiResult<Classroom> {
        self.send_json(reqwest::Method::PUT, &format!("classrooms/{id}"), update)
    }

    /// Deletes a classroom along with its enrollments and materials
    /// (teacher only).
    ///
    /// # Errors
    ///
    /// [`ApiError`] on transport failure or a backend rejection.
    pub fn delete_classroom(&self, id: &str) -> ApiResult<()> {
        let _: MessageResponse = self.delete(&format!("classrooms/{id}"))?;
        Ok(())
    }

    /// Joins a classroom by code (student only; the backend enforces the
    /// role).
    ///
    /// # Errors
    ///
    /// [`ApiError`] on transport failure, an invalid code, or when already
    /// enrolled.
    pub fn join_classroom(&self, code: &str) -> ApiResult<Classroom> {
        let request = JoinRequest {
            code: code.to_string(),
        };
        let response: JoinResponse =
            self.send_json(reqwest::Method::POST, "classrooms/join", &request)?;
        Ok(response.classroom)
    }

    /// Leaves a classroom (student only).
    ///
    /// # Errors
    ///
    /// [`ApiError`] on transport failure or when not enrolled.
    pub fn leave_classroom(&self, id: &str) -> ApiResult<()> {
        let _: MessageResponse = self.delete(&format!("classrooms/{id}/leave"))?;
        Ok(())
    }

    /// Fetches the enrollment roster (teacher only).
    ///
    /// # Errors
    ///
    /// [`ApiError`] on transport failure or a backend rejection.
    pub fn students(&self, classroom_id: &str) -> ApiResult<Vec<StudentEntry>> {
        self.get(&format!("classrooms/{classroom_id}/students"))
    }

    // ==================== MATERIALS ====================

    /// Lists a classroom's materials, classified into the kind-tagged
    /// model. Students only receive published materials; the backend
    /// applies that filter.
    ///
    /// # Errors
    ///
    /// [`ApiError`] on transport failure or a backend rejection.
    pub fn materials(&self, classroom_id: &str) -> ApiResult<Vec<Material>> {
        let records: Vec<MaterialRecord> =
            self.get(&format!("materials/classroom/{classroom_id}"))?;
        Ok(records
            .into_iter()
            .map(|record| Material::from_record_with(record, self.model_defaults))
            .collect())
    }

    /// Fetches one material.
    ///
    /// # Errors
    ///
    /// [`ApiError`] on transport failure or a backend rejection.
    pub fn material(&self, id: &str) -> ApiResult<Material> {
        let record: MaterialRecord = self.get(&format!("materials/{id}"))?;
        Ok(Material::from_record_with(record, self.model_defaults))
    }

    /// Creates a material from a draft (teacher only). The draft passes the
    /// submission gate here; a rejected draft produces
    /// [`ApiError::Rejected`] and no request is issued.
    ///
    /// # Errors
    ///
    /// [`ApiError::Rejected`] from the gate, or transport/backend errors.
    pub fn create_material(&self, classroom_id: &str, draft: MaterialDraft) -> ApiResult<Material> {
        let payload = draft.into_create()?;
        let record: MaterialRecord = self.send_json(
            reqwest::Method::POST,
            &format!("materials/classroom/{classroom_id}"),
            &payload,
        )?;
        Ok(Material::from_record_with(record, self.model_defaults))
    }

    /// Re-submits a material from a draft (teacher only), behind the same
    /// gate as creation.
    ///
    /// # Errors
    ///
    /// [`ApiError::Rejected`] from the gate, or transport/backend errors.
    pub fn update_material(&self, id: &str, draft: MaterialDraft) -> ApiResult<Material> {
        let payload = draft.into_update()?;
        let record: MaterialRecord =
            self.send_json(reqwest::Method::PUT, &format!("materials/{id}"), &payload)?;
        Ok(Material::from_record_with(record, self.model_defaults))
    }

    /// Deletes a material (teacher only).
    ///
    /// # Errors
    ///
    /// [`ApiError`] on transport failure or a backend rejection.
    pub fn delete_material(&self, id: &str) -> ApiResult<()> {
        let _: MessageResponse = self.delete(&format!("materials/{id}"))?;
        Ok(())
    }

    /// Persists a new display order for a classroom's materials (teacher
    /// only).
    ///
    /// # Errors
    ///
    /// [`ApiError`] on transport failure or a backend rejection.
    pub fn reorder_materials(&self, classroom_id: &str, material_ids: Vec<String>) -> ApiResult<()> {
        let request = ReorderRequest { material_ids };
        let _: MessageResponse = self.send_json(
            reqwest::Method::POST,
            &format!("materials/classroom/{classroom_id}/reorder"),
            &request,
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use crate::material::{DraftError, MaterialKind};
    use crate::session::MemorySession;

    fn offline_client() -> Client {
        let config = ClientConfig {
            api: ApiConfig {
                base_url: "http://localhost:1/api/".to_string(),
                timeout_secs: 1,
            },
            ..ClientConfig::default()
        };
        Client::new(&config, Arc::new(MemorySession::new())).unwrap()
    }

    #[test]
    fn test_rejected_draft_never_crosses_the_boundary() {
        // An unresolvable backend proves no request was attempted: the gate
        // fails before transport is involved.
        let client = offline_client();
        let draft = MaterialDraft::new(MaterialKind::Text);
        match client.create_material("c-1", draft) {
            Err(ApiError::Rejected(DraftError::TitleRequired)) => {}
            other => panic!("expected gate rejection, got {other:?}"),
        }
    }

    #[test]
    fn test_signed_out_calls_fail_without_transport() {
        let client = offline_client();
        match client.classrooms() {
            Err(ApiError::Unauthenticated) => {}
            other => panic!("expected unauthenticated error, got {other:?}"),
        }
    }

    #[test]
    fn test_base_url_must_parse() {
        let config = ClientConfig {
            api: ApiConfig {
                base_url: "not a url".to_string(),
                timeout_secs: 1,
            },
            ..ClientConfig::default()
        };
        assert!(matches!(
            Client::new(&config, Arc::new(MemorySession::new())),
            Err(ApiError::Endpoint(_))
        ));
    }
}
