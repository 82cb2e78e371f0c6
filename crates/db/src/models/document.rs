//! Document entity model and DTOs.

use aisow_core::types::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A document row from the `documents` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: EntityId,
    pub file_name: String,
    pub project_id: EntityId,
    pub created_at: Timestamp,
}

/// DTO for registering a document against an existing project.
///
/// Used by the upload collaborator once the file itself has been stored.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateDocument {
    pub project_id: EntityId,
    #[validate(length(min = 1, max = 255))]
    pub file_name: String,
}

/// Filter for document listings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentFilter {
    pub project_id: Option<EntityId>,
}
