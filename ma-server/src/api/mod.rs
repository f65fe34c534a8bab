pub mod analysis;
pub mod auth;
pub mod error;
pub mod extractors;
pub mod meetings;
pub mod middleware;
pub mod transcription;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use uuid::Uuid;

/// 501 response for scaffold endpoints that are pending implementation
pub fn not_implemented(endpoint: &str) -> Response {
    log::info!("Unimplemented endpoint called: {}", endpoint);

    (
        StatusCode::NOT_IMPLEMENTED,
        Json(json!({
            "message": format!("{} - implementation pending", endpoint),
            "endpoint": endpoint,
        })),
    )
        .into_response()
}

/// 501 response echoing the authenticated caller
pub fn not_implemented_for(endpoint: &str, user_id: Uuid) -> Response {
    log::info!("Unimplemented endpoint called: {} by {}", endpoint, user_id);

    (
        StatusCode::NOT_IMPLEMENTED,
        Json(json!({
            "message": format!("{} - implementation pending", endpoint),
            "endpoint": endpoint,
            "user": user_id,
        })),
    )
        .into_response()
}
