pub mod document;
pub mod health;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /projects                      list, create
/// /projects/{id}                 get, replace, delete
/// /document                      list documents (?projectId=)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", project::router())
        .nest("/document", document::router())
}
