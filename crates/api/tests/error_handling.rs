//! Tests for `AppError` to HTTP response mapping.

mod common;

use aisow_api::error::AppError;
use aisow_core::error::CoreError;
use aisow_db::StoreError;
use assert_matches::assert_matches;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use common::body_json;

async fn render(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    (status, body_json(response).await)
}

#[tokio::test]
async fn not_found_maps_to_404_with_entity_message() {
    let id = uuid::Uuid::new_v4();
    let (status, json) = render(AppError::Core(CoreError::project_not_found(id))).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], format!("Project with id {id} not found"));
}

#[tokio::test]
async fn validation_maps_to_400() {
    let (status, json) =
        render(AppError::Core(CoreError::Validation("name is required".into()))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "name is required");
}

#[tokio::test]
async fn conflict_maps_to_409() {
    let (status, json) = render(AppError::Core(CoreError::Conflict("taken".into()))).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "CONFLICT");
}

#[tokio::test]
async fn bad_request_maps_to_400() {
    let (status, json) = render(AppError::BadRequest("bad id".into())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "bad id");
}

#[tokio::test]
async fn internal_errors_are_sanitized() {
    let (status, json) =
        render(AppError::Core(CoreError::Internal("pool exhausted at 10.0.0.3".into()))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");

    let (status, json) = render(AppError::InternalError("secret detail".into())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "An internal error occurred");
}

#[tokio::test]
async fn database_errors_are_classified() {
    let (status, json) = render(AppError::Database(sqlx::Error::RowNotFound)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");

    let (status, json) = render(AppError::Database(sqlx::Error::PoolTimedOut)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "An internal error occurred");
}

#[tokio::test]
async fn store_errors_convert_without_losing_kind() {
    let id = uuid::Uuid::new_v4();
    let err: AppError = StoreError::Core(CoreError::project_not_found(id)).into();
    assert_matches!(&err, AppError::Core(CoreError::NotFound { id: got, .. }) if *got == id);
    let (status, _) = render(err).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let err: AppError = StoreError::Database(sqlx::Error::PoolClosed).into();
    assert_matches!(err, AppError::Database(sqlx::Error::PoolClosed));
    let (status, json) = render(err).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
}
