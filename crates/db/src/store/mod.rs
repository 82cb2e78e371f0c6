//! The [`ProjectStore`] capability.
//!
//! Handlers depend on `Arc<dyn ProjectStore>` rather than a concrete
//! database, so the same HTTP surface runs over PostgreSQL in production and
//! over [`MemoryProjectStore`] in tests or database-less deployments.
//!
//! Policies shared by every implementation:
//!
//! - ids are generated by the store; callers never choose them
//! - reads always include each project's documents
//! - `update` replaces `name` and `description` and never creates a row
//! - concurrent updates are last-writer-wins
//! - deleting a project deletes its documents

mod memory;
mod postgres;

use aisow_core::error::CoreError;
use aisow_core::types::EntityId;
use async_trait::async_trait;

use crate::models::document::{CreateDocument, Document, DocumentFilter};
use crate::models::project::{CreateProject, Project, UpdateProject};

pub use memory::MemoryProjectStore;
pub use postgres::PgProjectStore;

/// Errors surfaced by a [`ProjectStore`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A domain error (not found, validation, ...).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The backing database failed.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence capability for projects and their documents.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// All projects, oldest first, each with its documents attached.
    async fn list(&self) -> StoreResult<Vec<Project>>;

    /// A single project with its documents, or `NotFound`.
    async fn get(&self, id: EntityId) -> StoreResult<Project>;

    /// Store a new project under a freshly generated id.
    async fn create(&self, input: &CreateProject) -> StoreResult<Project>;

    /// Replace the name and description of an existing project.
    async fn update(&self, id: EntityId, input: &UpdateProject) -> StoreResult<Project>;

    /// Remove a project and its documents, or report `NotFound`.
    async fn delete(&self, id: EntityId) -> StoreResult<()>;

    /// Whether a project with this id exists.
    ///
    /// Lets the upload collaborator check its target before accepting a file.
    async fn project_exists(&self, id: EntityId) -> StoreResult<bool>;

    /// Register a document against an existing project.
    ///
    /// Entry point for the upload collaborator: fails with `NotFound` when
    /// `project_id` does not name an existing project.
    async fn add_document(&self, input: &CreateDocument) -> StoreResult<Document>;

    /// Documents, oldest first, optionally restricted to one project.
    async fn list_documents(&self, filter: &DocumentFilter) -> StoreResult<Vec<Document>>;

    /// Verify the backing storage is reachable.
    async fn ping(&self) -> StoreResult<()>;
}
