//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` as the first argument.

pub mod document_repo;
pub mod project_repo;

pub use document_repo::DocumentRepo;
pub use project_repo::ProjectRepo;
