//! Route definitions for the `/document` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::document;
use crate::state::AppState;

/// Routes mounted at `/document`.
///
/// ```text
/// GET /    -> list
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(document::list))
}
