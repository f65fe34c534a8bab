//! Integration tests for health checks and scaffold routes
mod common;

use crate::common::{
    USER_ID, anonymous_request, authed_request, body_json, create_test_state, mock_identity,
};

use axum::http::StatusCode;
use http_body_util::BodyExt;
use tower::ServiceExt;
use wiremock::MockServer;

use ma_server::build_router;

#[tokio::test]
async fn test_health_returns_healthy() {
    let server = MockServer::start().await;
    let app = build_router(create_test_state(&server));

    let response = app
        .oneshot(anonymous_request("GET", "/health"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "healthy");
    assert!(json["version"].as_str().is_some());
    assert!(json["timestamp"].as_str().is_some());
}

#[tokio::test]
async fn test_liveness_probe() {
    let server = MockServer::start().await;
    let app = build_router(create_test_state(&server));

    let response = app.oneshot(anonymous_request("GET", "/live")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"OK");
}

#[tokio::test]
async fn test_readiness_probe() {
    let server = MockServer::start().await;
    let app = build_router(create_test_state(&server));

    let response = app
        .oneshot(anonymous_request("GET", "/ready"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_meetings_require_authentication() {
    let server = MockServer::start().await;
    let app = build_router(create_test_state(&server));

    let response = app
        .oneshot(anonymous_request("GET", "/api/meetings"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_meetings_stub_echoes_caller() {
    let server = MockServer::start().await;
    mock_identity(&server).await;

    let app = build_router(create_test_state(&server));
    let response = app
        .oneshot(authed_request("GET", "/api/meetings"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);

    let json = body_json(response).await;
    assert_eq!(json["endpoint"], "GET /api/meetings");
    assert_eq!(json["user"], USER_ID);
}

#[tokio::test]
async fn test_meeting_detail_stub_includes_id_in_endpoint() {
    let server = MockServer::start().await;
    mock_identity(&server).await;

    let app = build_router(create_test_state(&server));
    let response = app
        .oneshot(authed_request("GET", "/api/meetings/m-42"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);

    let json = body_json(response).await;
    assert_eq!(json["endpoint"], "GET /api/meetings/m-42");
}

#[tokio::test]
async fn test_transcription_stub_requires_authentication() {
    let server = MockServer::start().await;
    let app = build_router(create_test_state(&server));

    let response = app
        .oneshot(anonymous_request("POST", "/api/transcription/process"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_transcription_stub_answers_authenticated_caller() {
    let server = MockServer::start().await;
    mock_identity(&server).await;

    let app = build_router(create_test_state(&server));
    let response = app
        .oneshot(authed_request("POST", "/api/transcription/upload"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);

    let json = body_json(response).await;
    assert_eq!(json["endpoint"], "POST /api/transcription/upload");
}

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let server = MockServer::start().await;
    let app = build_router(create_test_state(&server));

    let response = app
        .oneshot(anonymous_request("GET", "/api/unknown"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
