//! Project entity model and DTOs.

use aisow_core::types::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::document::Document;

/// A project row from the `projects` table, without its documents.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct ProjectRow {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ProjectRow {
    /// Attach the project's documents, producing the API-facing aggregate.
    pub fn with_documents(self, documents: Vec<Document>) -> Project {
        Project {
            id: self.id,
            name: self.name,
            description: self.description,
            documents,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// A project together with every document it owns.
///
/// This is the only shape the store hands out: reads always include documents.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub documents: Vec<Document>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new project.
///
/// Any `id` or `documents` field in the request body is ignored; identity is
/// assigned by the store.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    /// A missing name deserializes as empty and is rejected by validation.
    #[serde(default)]
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    /// Defaults to empty text if omitted.
    #[serde(default)]
    #[validate(length(max = 4000))]
    pub description: String,
}

/// DTO for replacing the mutable fields of an existing project.
///
/// Both fields are replaced; an omitted description becomes empty text.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    #[serde(default)]
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 4000))]
    pub description: String,
}
