//! Repository for the `documents` table.

use aisow_core::types::EntityId;
use sqlx::PgPool;

use crate::models::document::{CreateDocument, Document};

const COLUMNS: &str = "id, file_name, project_id, created_at";

/// Provides insert and lookup operations for document rows.
pub struct DocumentRepo;

impl DocumentRepo {
    /// Insert a new document under the given id.
    ///
    /// Fails with a foreign-key violation (`23503`) if the project is gone.
    pub async fn create(
        pool: &PgPool,
        id: EntityId,
        input: &CreateDocument,
    ) -> Result<Document, sqlx::Error> {
        let query = format!(
            "INSERT INTO documents (id, file_name, project_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Document>(&query)
            .bind(id)
            .bind(&input.file_name)
            .bind(input.project_id)
            .fetch_one(pool)
            .await
    }

    /// List every document, oldest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Document>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM documents ORDER BY created_at ASC, id ASC");
        sqlx::query_as::<_, Document>(&query).fetch_all(pool).await
    }

    /// List documents belonging to a single project, oldest first.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: EntityId,
    ) -> Result<Vec<Document>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM documents
             WHERE project_id = $1
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, Document>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// List documents for a batch of projects in one round trip.
    pub async fn list_by_projects(
        pool: &PgPool,
        project_ids: &[EntityId],
    ) -> Result<Vec<Document>, sqlx::Error> {
        if project_ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = format!(
            "SELECT {COLUMNS} FROM documents
             WHERE project_id = ANY($1)
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, Document>(&query)
            .bind(project_ids)
            .fetch_all(pool)
            .await
    }
}
