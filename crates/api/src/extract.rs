//! Request extractors whose rejections use the standard JSON error body.
//!
//! Axum's stock `Json`, `Path` and `Query` reject with plain-text bodies and,
//! for `Json`, a 422 on well-formed but mistyped input. These wrappers route
//! every rejection through [`AppError::BadRequest`] so malformed input is
//! always a 400 with `{"error", "code"}`.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// `Json<T>` body extractor that rejects with [`AppError`].
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// `Path<T>` extractor that rejects with [`AppError`].
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

/// `Query<T>` extractor that rejects with [`AppError`].
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::routing::post;
    use axum::Router;
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Debug, Deserialize)]
    struct Payload {
        #[allow(dead_code)]
        count: u32,
    }

    async fn accept(AppJson(_): AppJson<Payload>) -> StatusCode {
        StatusCode::OK
    }

    async fn post_body(content_type: &str, body: &'static str) -> StatusCode {
        let app = Router::new().route("/", post(accept));
        let request = Request::post("/")
            .header("content-type", content_type)
            .body(Body::from(body))
            .unwrap();
        app.oneshot(request).await.unwrap().status()
    }

    #[tokio::test]
    async fn well_formed_body_is_accepted() {
        assert_eq!(post_body("application/json", r#"{"count": 3}"#).await, StatusCode::OK);
    }

    #[tokio::test]
    async fn mistyped_body_is_a_400_not_a_422() {
        assert_eq!(
            post_body("application/json", r#"{"count": "three"}"#).await,
            StatusCode::BAD_REQUEST
        );
    }

    #[tokio::test]
    async fn missing_content_type_is_a_400() {
        assert_eq!(post_body("text/plain", r#"{"count": 3}"#).await, StatusCode::BAD_REQUEST);
    }
}
