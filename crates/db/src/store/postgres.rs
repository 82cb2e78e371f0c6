use std::collections::HashMap;

use aisow_core::error::CoreError;
use aisow_core::types::{new_entity_id, EntityId};
use aisow_core::validation::{validate_file_name, validate_project_fields};
use async_trait::async_trait;

use crate::models::document::{CreateDocument, Document, DocumentFilter};
use crate::models::project::{CreateProject, Project, UpdateProject};
use crate::repositories::{DocumentRepo, ProjectRepo};
use crate::store::{ProjectStore, StoreResult};
use crate::DbPool;

/// PostgreSQL error code for a foreign key violation.
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// [`ProjectStore`] backed by PostgreSQL.
#[derive(Debug, Clone)]
pub struct PgProjectStore {
    pool: DbPool,
}

impl PgProjectStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProjectStore for PgProjectStore {
    async fn list(&self) -> StoreResult<Vec<Project>> {
        let rows = ProjectRepo::list(&self.pool).await?;
        let ids: Vec<EntityId> = rows.iter().map(|p| p.id).collect();

        let mut by_project: HashMap<EntityId, Vec<Document>> = HashMap::new();
        for doc in DocumentRepo::list_by_projects(&self.pool, &ids).await? {
            by_project.entry(doc.project_id).or_default().push(doc);
        }

        Ok(rows
            .into_iter()
            .map(|row| {
                let documents = by_project.remove(&row.id).unwrap_or_default();
                row.with_documents(documents)
            })
            .collect())
    }

    async fn get(&self, id: EntityId) -> StoreResult<Project> {
        let row = ProjectRepo::find_by_id(&self.pool, id)
            .await?
            .ok_or(CoreError::project_not_found(id))?;
        let documents = DocumentRepo::list_by_project(&self.pool, id).await?;
        Ok(row.with_documents(documents))
    }

    async fn create(&self, input: &CreateProject) -> StoreResult<Project> {
        validate_project_fields(&input.name, &input.description)?;

        let row = ProjectRepo::create(&self.pool, new_entity_id(), input).await?;
        tracing::debug!(project_id = %row.id, "Project row inserted");
        Ok(row.with_documents(Vec::new()))
    }

    async fn update(&self, id: EntityId, input: &UpdateProject) -> StoreResult<Project> {
        validate_project_fields(&input.name, &input.description)?;

        let row = ProjectRepo::update(&self.pool, id, input)
            .await?
            .ok_or(CoreError::project_not_found(id))?;
        let documents = DocumentRepo::list_by_project(&self.pool, id).await?;
        Ok(row.with_documents(documents))
    }

    async fn delete(&self, id: EntityId) -> StoreResult<()> {
        if ProjectRepo::delete(&self.pool, id).await? {
            Ok(())
        } else {
            Err(CoreError::project_not_found(id).into())
        }
    }

    async fn project_exists(&self, id: EntityId) -> StoreResult<bool> {
        Ok(ProjectRepo::exists(&self.pool, id).await?)
    }

    async fn add_document(&self, input: &CreateDocument) -> StoreResult<Document> {
        validate_file_name(&input.file_name)?;

        if !ProjectRepo::exists(&self.pool, input.project_id).await? {
            return Err(CoreError::project_not_found(input.project_id).into());
        }

        // The project may be deleted between the check and the insert.
        match DocumentRepo::create(&self.pool, new_entity_id(), input).await {
            Ok(doc) => Ok(doc),
            Err(err) if is_foreign_key_violation(&err) => {
                Err(CoreError::project_not_found(input.project_id).into())
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn list_documents(&self, filter: &DocumentFilter) -> StoreResult<Vec<Document>> {
        let docs = match filter.project_id {
            Some(project_id) => DocumentRepo::list_by_project(&self.pool, project_id).await?,
            None => DocumentRepo::list(&self.pool).await?,
        };
        Ok(docs)
    }

    async fn ping(&self) -> StoreResult<()> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }
}

fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().as_deref() == Some(FOREIGN_KEY_VIOLATION),
        _ => false,
    }
}
