//! Flat wire shapes for materials, matching the backend JSON.

use serde::{Deserialize, Serialize};

use super::content::CreatorSummary;
use super::kind::MaterialKind;

const fn default_true() -> bool {
    true
}

/// A material as the backend stores and returns it: one record with an
/// optional column per payload field. Classified into
/// [`Material`](super::Material) on receipt.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialRecord {
    /// Opaque identifier.
    pub id: String,
    /// Title.
    pub title: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// Kind tag; selects which payload fields are meaningful.
    #[serde(rename = "type")]
    pub kind: MaterialKind,
    /// TEXT payload.
    #[serde(default)]
    pub content: Option<String>,
    /// FILE payload: download URL.
    #[serde(default)]
    pub file_url: Option<String>,
    /// FILE payload: original file name.
    #[serde(default)]
    pub file_name: Option<String>,
    /// VIDEO payload.
    #[serde(default)]
    pub video_url: Option<String>,
    /// MODEL3D payload: asset URL.
    #[serde(default)]
    pub model_url: Option<String>,
    /// MODEL3D payload: uniform scale.
    #[serde(default)]
    pub model_scale: Option<f32>,
    /// MODEL3D payload: AR entry point flag.
    #[serde(default)]
    pub ar_enabled: Option<bool>,
    /// Visibility gate for non-owning viewers.
    #[serde(default = "default_true")]
    pub is_published: bool,
    /// Position within the classroom's material list.
    #[serde(default)]
    pub order: i64,
    /// Owning classroom.
    pub classroom_id: String,
    /// Creator summary, embedded by the backend on reads.
    #[serde(default)]
    pub created_by: Option<CreatorSummary>,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: String,
    /// Last update timestamp.
    #[serde(default)]
    pub updated_at: String,
}

/// Create payload for `POST /materials/classroom/{id}`.
///
/// Only obtainable through [`MaterialDraft::into_create`](super::MaterialDraft::into_create),
/// which validates first.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialCreate {
    /// Title.
    pub title: String,
    /// Optional description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Kind tag.
    #[serde(rename = "type")]
    pub kind: MaterialKind,
    /// TEXT payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// FILE payload: download URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
    /// FILE payload: original file name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    /// VIDEO payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    /// MODEL3D payload: asset URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_url: Option<String>,
    /// MODEL3D payload: uniform scale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_scale: Option<f32>,
    /// MODEL3D payload: AR entry point flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ar_enabled: Option<bool>,
    /// Visibility gate.
    pub is_published: bool,
}

/// Update payload for `PUT /materials/{id}`. The backend applies only the
/// fields that are present; a full re-submit sends the same shape as create.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialUpdate {
    /// Title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Optional description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Kind tag.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<MaterialKind>,
    /// TEXT payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// FILE payload: download URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
    /// FILE payload: original file name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    /// VIDEO payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    /// MODEL3D payload: asset URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_url: Option<String>,
    /// MODEL3D payload: uniform scale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_scale: Option<f32>,
    /// MODEL3D payload: AR entry point flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ar_enabled: Option<bool>,
    /// Visibility gate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_published: Option<bool>,
    /// Position within the classroom's material list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
}
