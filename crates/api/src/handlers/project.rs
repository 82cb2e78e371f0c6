//! Handlers for the `/projects` resource.

use aisow_core::error::CoreError;
use aisow_core::types::EntityId;
use aisow_db::models::project::{CreateProject, Project, UpdateProject};
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath};
use crate::state::AppState;

/// POST /api/projects
///
/// Responds 201 with the stored project and a `Location` header pointing at it.
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateProject>,
) -> AppResult<impl IntoResponse> {
    input.validate().map_err(CoreError::from)?;

    let project = state.store.create(&input).await?;
    tracing::info!(project_id = %project.id, "Project created");

    let location = format!("/api/projects/{}", project.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(project)))
}

/// GET /api/projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    let projects = state.store.list().await?;
    Ok(Json(projects))
}

/// GET /api/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<EntityId>,
) -> AppResult<Json<Project>> {
    let project = state.store.get(id).await?;
    Ok(Json(project))
}

/// PUT /api/projects/{id}
///
/// The id in the path wins; an `id` in the body is ignored.
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<EntityId>,
    AppJson(input): AppJson<UpdateProject>,
) -> AppResult<Json<Project>> {
    input.validate().map_err(CoreError::from)?;

    let project = state.store.update(id, &input).await?;
    tracing::info!(project_id = %id, "Project updated");
    Ok(Json(project))
}

/// DELETE /api/projects/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<EntityId>,
) -> AppResult<StatusCode> {
    state.store.delete(id).await?;
    tracing::info!(project_id = %id, "Project deleted");
    Ok(StatusCode::NO_CONTENT)
}
