use std::collections::HashMap;

use aisow_core::error::CoreError;
use aisow_core::types::{new_entity_id, EntityId};
use aisow_core::validation::{validate_file_name, validate_project_fields};
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::document::{CreateDocument, Document, DocumentFilter};
use crate::models::project::{CreateProject, Project, ProjectRow, UpdateProject};
use crate::store::{ProjectStore, StoreResult};

/// [`ProjectStore`] that keeps everything in process memory.
///
/// Ordering and error behaviour match [`PgProjectStore`](super::PgProjectStore),
/// so it can stand in for the database in tests.
#[derive(Debug, Default)]
pub struct MemoryProjectStore {
    tables: RwLock<Tables>,
}

#[derive(Debug, Default)]
struct Tables {
    projects: HashMap<EntityId, ProjectRow>,
    documents: HashMap<EntityId, Document>,
}

impl Tables {
    fn documents_of(&self, project_id: EntityId) -> Vec<Document> {
        let mut docs: Vec<Document> = self
            .documents
            .values()
            .filter(|d| d.project_id == project_id)
            .cloned()
            .collect();
        sort_documents(&mut docs);
        docs
    }

    fn project(&self, id: EntityId) -> Option<Project> {
        self.projects
            .get(&id)
            .cloned()
            .map(|row| row.with_documents(self.documents_of(id)))
    }
}

impl MemoryProjectStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn sort_documents(docs: &mut [Document]) {
    docs.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
}

#[async_trait]
impl ProjectStore for MemoryProjectStore {
    async fn list(&self) -> StoreResult<Vec<Project>> {
        let tables = self.tables.read().await;

        let mut rows: Vec<&ProjectRow> = tables.projects.values().collect();
        rows.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));

        let mut by_project: HashMap<EntityId, Vec<Document>> = HashMap::new();
        for doc in tables.documents.values() {
            by_project.entry(doc.project_id).or_default().push(doc.clone());
        }

        Ok(rows
            .into_iter()
            .map(|row| {
                let mut documents = by_project.remove(&row.id).unwrap_or_default();
                sort_documents(&mut documents);
                row.clone().with_documents(documents)
            })
            .collect())
    }

    async fn get(&self, id: EntityId) -> StoreResult<Project> {
        let tables = self.tables.read().await;
        Ok(tables.project(id).ok_or(CoreError::project_not_found(id))?)
    }

    async fn create(&self, input: &CreateProject) -> StoreResult<Project> {
        validate_project_fields(&input.name, &input.description)?;

        let now = chrono::Utc::now();
        let row = ProjectRow {
            id: new_entity_id(),
            name: input.name.clone(),
            description: input.description.clone(),
            created_at: now,
            updated_at: now,
        };

        let mut tables = self.tables.write().await;
        tables.projects.insert(row.id, row.clone());
        tracing::debug!(project_id = %row.id, "Project stored in memory");
        Ok(row.with_documents(Vec::new()))
    }

    async fn update(&self, id: EntityId, input: &UpdateProject) -> StoreResult<Project> {
        validate_project_fields(&input.name, &input.description)?;

        let mut tables = self.tables.write().await;
        let row = tables
            .projects
            .get_mut(&id)
            .ok_or(CoreError::project_not_found(id))?;
        row.name = input.name.clone();
        row.description = input.description.clone();
        row.updated_at = chrono::Utc::now();

        Ok(tables
            .project(id)
            .ok_or(CoreError::project_not_found(id))?)
    }

    async fn delete(&self, id: EntityId) -> StoreResult<()> {
        let mut tables = self.tables.write().await;
        if tables.projects.remove(&id).is_none() {
            return Err(CoreError::project_not_found(id).into());
        }
        tables.documents.retain(|_, d| d.project_id != id);
        Ok(())
    }

    async fn project_exists(&self, id: EntityId) -> StoreResult<bool> {
        Ok(self.tables.read().await.projects.contains_key(&id))
    }

    async fn add_document(&self, input: &CreateDocument) -> StoreResult<Document> {
        validate_file_name(&input.file_name)?;

        let mut tables = self.tables.write().await;
        if !tables.projects.contains_key(&input.project_id) {
            return Err(CoreError::project_not_found(input.project_id).into());
        }

        let doc = Document {
            id: new_entity_id(),
            file_name: input.file_name.clone(),
            project_id: input.project_id,
            created_at: chrono::Utc::now(),
        };
        tables.documents.insert(doc.id, doc.clone());
        Ok(doc)
    }

    async fn list_documents(&self, filter: &DocumentFilter) -> StoreResult<Vec<Document>> {
        let tables = self.tables.read().await;
        let mut docs: Vec<Document> = tables
            .documents
            .values()
            .filter(|d| filter.project_id.map_or(true, |pid| d.project_id == pid))
            .cloned()
            .collect();
        sort_documents(&mut docs);
        Ok(docs)
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}
