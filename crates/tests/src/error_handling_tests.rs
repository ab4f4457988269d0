use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use pretty_assertions::assert_eq;
use serde_json::json;

use client::{ApiError, CaseApi};

use crate::common::spawn_router;

#[tokio::test]
async fn unparsable_error_body_falls_back_to_generic_message() {
    let router = Router::new().route(
        "/api/cases",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "<html>boom</html>") }),
    );
    let api = CaseApi::new(spawn_router(router).await);

    let err = api.get_all_cases().await.unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert_eq!(err.message(), "An unknown server error occurred.");
}

#[tokio::test]
async fn json_error_body_without_error_field_falls_back_to_status_message() {
    let router = Router::new().route(
        "/api/cases",
        get(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "detail": "stack trace elided" })),
            )
                .into_response()
        }),
    );
    let api = CaseApi::new(spawn_router(router).await);

    let err = api.get_all_cases().await.unwrap_err();
    assert_eq!(err.message(), "Request failed with status 500");
}

#[tokio::test]
async fn error_field_is_used_verbatim() {
    let router = Router::new().route(
        "/api/cases",
        get(|| async {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "complainantPhone is malformed" })),
            )
                .into_response()
        }),
    );
    let api = CaseApi::new(spawn_router(router).await);

    let err = api.get_all_cases().await.unwrap_err();
    assert_eq!(err.status(), Some(400));
    assert_eq!(err.message(), "complainantPhone is malformed");
}

#[tokio::test]
async fn unreachable_backend_is_a_network_failure() {
    // Nothing listens on this port; the request never gets a response.
    let api = CaseApi::new("http://127.0.0.1:1");
    let err = api.get_all_cases().await.unwrap_err();

    assert!(matches!(err, ApiError::Network(_)), "got: {err:?}");
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn base_url_trailing_slash_is_tolerated() {
    let router = Router::new().route("/api/cases", get(|| async { Json(json!([])) }));
    let base = spawn_router(router).await;
    let api = CaseApi::new(format!("{base}/"));

    let cases = api.get_all_cases().await.unwrap();
    assert!(cases.is_empty());
}
