//! Wire DTOs for the backend's JSON, all camelCase on the wire.

use serde::{Deserialize, Serialize};

/// User role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Creates classrooms and publishes materials.
    #[serde(rename = "TEACHER")]
    Teacher,
    /// Joins classrooms via code and views published materials.
    #[serde(rename = "STUDENT")]
    Student,
}

/// A user as returned by the auth endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Opaque identifier.
    pub id: String,
    /// Account email.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Account role.
    pub role: Role,
    /// Optional avatar URL.
    #[serde(default)]
    pub avatar: Option<String>,
    /// Creation timestamp.
    pub created_at: String,
}

/// Registration payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Account email.
    pub email: String,
    /// Plain-text password; the backend hashes it.
    pub password: String,
    /// Display name.
    pub name: String,
    /// Requested role.
    pub role: Role,
}

/// Login payload.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    /// Account email.
    pub email: String,
    /// Plain-text password.
    pub password: String,
}

/// Response from register and login: the profile plus a bearer token.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    /// The signed-in profile.
    pub user: UserProfile,
    /// Bearer token for subsequent calls.
    pub token: String,
}

/// Profile update payload.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileUpdate {
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New avatar URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Password change payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChange {
    /// The current password.
    pub current_password: String,
    /// The replacement password.
    pub new_password: String,
}

/// Enrollment and material counts embedded in classroom responses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct ClassroomCounts {
    /// Number of enrolled students.
    #[serde(default)]
    pub enrollments: u64,
    /// Number of materials.
    #[serde(default)]
    pub materials: u64,
}

/// Teacher summary embedded in classroom responses.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TeacherSummary {
    /// User identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Account email.
    pub email: String,
}

/// A classroom: a named container of materials with a join code.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classroom {
    /// Opaque identifier.
    pub id: String,
    /// Classroom name.
    pub name: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// Subject label.
    pub subject: String,
    /// Join code students enter to enroll.
    pub code: String,
    /// Optional cover image URL.
    #[serde(default)]
    pub cover_image: Option<String>,
    /// Whether new enrollments are accepted.
    #[serde(default = "default_active")]
    pub is_active: bool,
    /// Owning teacher's identifier.
    pub teacher_id: String,
    /// Counts, embedded by the backend on reads.
    #[serde(rename = "_count", default)]
    pub counts: Option<ClassroomCounts>,
    /// Teacher summary, embedded by the backend on reads.
    #[serde(default)]
    pub teacher: Option<TeacherSummary>,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: String,
    /// Last update timestamp.
    #[serde(default)]
    pub updated_at: String,
}

const fn default_active() -> bool {
    true
}

/// Classroom creation payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassroomCreate {
    /// Classroom name.
    pub name: String,
    /// Optional description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Subject label.
    pub subject: String,
    /// Optional cover image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
}

/// Classroom update payload; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassroomUpdate {
    /// New name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New subject label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// New cover image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    /// New enrollment flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Join-by-code payload.
#[derive(Debug, Clone, Serialize)]
pub struct JoinRequest {
    /// The classroom's join code.
    pub code: String,
}

/// Response wrapper for join-by-code.
#[derive(Debug, Clone, Deserialize)]
pub struct JoinResponse {
    /// The joined classroom.
    pub classroom: Classroom,
}

/// One roster row.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentEntry {
    /// User identifier.
    pub id: String,
    /// Account email.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Optional avatar URL.
    #[serde(default)]
    pub avatar: Option<String>,
    /// Enrollment timestamp.
    pub joined_at: String,
}

/// Reorder payload: material identifiers in their new order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderRequest {
    /// Identifiers in display order.
    pub material_ids: Vec<String>,
}

/// Generic `{"message": ...}` acknowledgement.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    /// Human-readable acknowledgement.
    pub message: String,
}

/// The backend's `{"detail": ...}` error body.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    /// Human-readable error detail.
    pub detail: String,
}
