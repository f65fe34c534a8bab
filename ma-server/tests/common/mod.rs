#![allow(dead_code)]

//! Test infrastructure for ma-server API tests

use ma_config::SupabaseConfig;
use ma_server::AppState;
use ma_supabase::Supabase;

use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const USER_ID: &str = "00000000-0000-0000-0000-0000000000a1";
pub const TOKEN: &str = "user-access-token";

/// App state wired against a wiremock Supabase
pub fn create_test_state(server: &MockServer) -> AppState {
    state_for_url(&server.uri())
}

/// App state pointing at a port nothing listens on
pub fn create_unreachable_state() -> AppState {
    state_for_url("http://127.0.0.1:1")
}

fn state_for_url(url: &str) -> AppState {
    let config = SupabaseConfig {
        url: url.to_string(),
        anon_key: "test-anon-key-0123456789abcdef".to_string(),
        service_role_key: "test-service-key-0123456789abcdef".to_string(),
        timeout_secs: 5,
    };
    let supabase = Arc::new(Supabase::new(&config).expect("Failed to build Supabase client"));

    AppState::new(supabase, "http://localhost:3000".to_string())
}

/// Mock successful token verification for `TOKEN`
pub async fn mock_identity(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .and(header("authorization", format!("Bearer {}", TOKEN).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": USER_ID,
            "aud": "authenticated",
            "email": "alice@example.com",
            "user_metadata": {}
        })))
        .mount(server)
        .await;
}

/// Mock token rejection for any bearer
pub async fn mock_identity_rejection(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "code": 401,
            "error_code": "bad_jwt",
            "msg": "invalid JWT: unable to parse or verify signature"
        })))
        .mount(server)
        .await;
}

pub fn profile_row(tier: &str) -> Value {
    json!({
        "id": USER_ID,
        "email": "alice@example.com",
        "name": "alice",
        "subscription_tier": tier,
        "created_at": "2024-05-01T10:00:00Z",
        "updated_at": "2024-05-01T10:00:00Z"
    })
}

/// Mock an existing profile row for every fetch
pub async fn mock_profile(server: &MockServer, tier: &str) {
    Mock::given(method("GET"))
        .and(path("/rest/v1/profiles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_row(tier)))
        .mount(server)
        .await;
}

/// Mock "no matching row" for every profile fetch
pub async fn mock_profile_missing(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/rest/v1/profiles"))
        .respond_with(ResponseTemplate::new(406).set_body_json(json!({
            "code": "PGRST116",
            "message": "JSON object requested, multiple (or no) rows returned"
        })))
        .mount(server)
        .await;
}

/// Mock a successful profile insert returning `row`
pub async fn mock_profile_insert(server: &MockServer, row: Value) {
    Mock::given(method("POST"))
        .and(path("/rest/v1/profiles"))
        .respond_with(ResponseTemplate::new(201).set_body_json(row))
        .mount(server)
        .await;
}

/// Request carrying the test bearer token
pub fn authed_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("Authorization", format!("Bearer {}", TOKEN))
        .body(Body::empty())
        .unwrap()
}

/// Request with no Authorization header
pub fn anonymous_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}
