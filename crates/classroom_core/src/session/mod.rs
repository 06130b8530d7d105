//! Session capability.
//!
//! Authentication token issuance is the backend's business; the client only
//! needs somewhere to keep the bearer token and the signed-in profile
//! between calls. That somewhere is injected as a capability rather than
//! read from ambient global state, so hosts can supply their own storage.

use std::sync::Mutex;

use crate::api::types::UserProfile;

/// Read access to the current session, injected into the API client.
pub trait SessionProvider: Send + Sync {
    /// The bearer token, if signed in.
    fn token(&self) -> Option<String>;

    /// The signed-in user's profile, if known.
    fn profile(&self) -> Option<UserProfile>;
}

#[derive(Debug, Clone)]
struct SessionState {
    token: String,
    profile: UserProfile,
}

/// In-memory session storage. Persistence across restarts is the host
/// application's concern.
#[derive(Debug, Default)]
pub struct MemorySession {
    state: Mutex<Option<SessionState>>,
}

impl MemorySession {
    /// Creates an empty (signed-out) session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Begins a session from a login or registration response.
    pub fn begin(&self, token: impl Into<String>, profile: UserProfile) {
        let mut state = self.state.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        *state = Some(SessionState {
            token: token.into(),
            profile,
        });
    }

    /// Signs out.
    pub fn clear(&self) {
        let mut state = self.state.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        *state = None;
    }
}

impl SessionProvider for MemorySession {
    fn token(&self) -> Option<String> {
        self.state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .as_ref()
            .map(|s| s.token.clone())
    }

    fn profile(&self) -> Option<UserProfile> {
        self.state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .as_ref()
            .map(|s| s.profile.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::Role;

    fn profile() -> UserProfile {
        UserProfile {
            id: "u-1".to_string(),
            email: "ada@school.test".to_string(),
            name: "Ada".to_string(),
            role: Role::Teacher,
            avatar: None,
            created_at: "2024-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_starts_signed_out() {
        let session = MemorySession::new();
        assert!(session.token().is_none());
        assert!(session.profile().is_none());
    }

    #[test]
    fn test_begin_and_clear() {
        let session = MemorySession::new();
        session.begin("jwt-token", profile());
        assert_eq!(session.token().as_deref(), Some("jwt-token"));
        assert_eq!(session.profile().map(|p| p.name), Some("Ada".to_string()));

        session.clear();
        assert!(session.token().is_none());
    }
}
