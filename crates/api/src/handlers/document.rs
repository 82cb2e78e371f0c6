//! Handlers for the `/document` resource.
//!
//! Documents are registered by the upload collaborator through
//! [`ProjectStore::add_document`](aisow_db::ProjectStore::add_document);
//! the HTTP surface only lists them.

use aisow_db::models::document::{Document, DocumentFilter};
use axum::extract::State;
use axum::Json;

use crate::error::AppResult;
use crate::extract::AppQuery;
use crate::state::AppState;

/// GET /api/document
///
/// Optional `?projectId=` restricts the listing to one project. An unknown
/// project id yields an empty list, not a 404.
pub async fn list(
    State(state): State<AppState>,
    AppQuery(filter): AppQuery<DocumentFilter>,
) -> AppResult<Json<Vec<Document>>> {
    let documents = state.store.list_documents(&filter).await?;
    Ok(Json(documents))
}
