use crate::api::analysis::analysis::{
    action_items, batch, follow_ups, get_analysis, get_insights, sentiment, summarize,
};
use crate::api::auth::auth::{get_me, login, logout, refresh, register};
use crate::api::meetings::meetings::{
    add_participant, create_meeting, delete_meeting, get_meeting, list_meetings,
    list_participants, update_meeting,
};
use crate::api::middleware::authenticate::authenticate;
use crate::api::middleware::subscription::{require_enterprise_tier, require_pro_tier};
use crate::api::transcription::transcription::{
    export_transcription, get_transcription, process_transcription, transcription_status,
    update_transcription, upload_audio,
};
use crate::health;
use crate::state::AppState;

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post},
};
use tower_http::cors::CorsLayer;

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    // Session management stubs are public; /me requires authentication
    let auth_routes = Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/register", post(register))
        .route("/api/auth/logout", post(logout))
        .route("/api/auth/refresh", post(refresh))
        .route(
            "/api/auth/me",
            get(get_me).layer(from_fn_with_state(state.clone(), authenticate)),
        );

    let meeting_routes = Router::new()
        .route("/api/meetings", get(list_meetings).post(create_meeting))
        .route(
            "/api/meetings/{id}",
            get(get_meeting).put(update_meeting).delete(delete_meeting),
        )
        .route(
            "/api/meetings/{id}/participants",
            get(list_participants).post(add_participant),
        )
        .route_layer(from_fn_with_state(state.clone(), authenticate));

    let transcription_routes = Router::new()
        .route("/api/transcription/upload", post(upload_audio))
        .route("/api/transcription/process", post(process_transcription))
        .route(
            "/api/transcription/{meeting_id}",
            get(get_transcription).put(update_transcription),
        )
        .route(
            "/api/transcription/{meeting_id}/status",
            get(transcription_status),
        )
        .route(
            "/api/transcription/{meeting_id}/export",
            post(export_transcription),
        )
        .route_layer(from_fn_with_state(state.clone(), authenticate));

    // Analysis is the paid surface: pro for single-meeting analysis,
    // enterprise for batch
    let analysis_routes = Router::new()
        .route("/api/analysis/summarize", post(summarize))
        .route("/api/analysis/sentiment", post(sentiment))
        .route("/api/analysis/action-items", post(action_items))
        .route("/api/analysis/follow-ups", post(follow_ups))
        .route("/api/analysis/{meeting_id}", get(get_analysis))
        .route("/api/analysis/{meeting_id}/insights", get(get_insights))
        .route_layer(from_fn(require_pro_tier))
        .route(
            "/api/analysis/batch",
            post(batch).layer(from_fn(require_enterprise_tier)),
        )
        .route_layer(from_fn_with_state(state.clone(), authenticate));

    let cors = cors_layer(&state.frontend_url);

    Router::new()
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        // API routes
        .merge(auth_routes)
        .merge(meeting_routes)
        .merge(transcription_routes)
        .merge(analysis_routes)
        // Add shared state
        .with_state(state)
        // CORS restricted to the dashboard origin
        .layer(cors)
}

fn cors_layer(frontend_url: &str) -> CorsLayer {
    match frontend_url.parse::<HeaderValue>() {
        Ok(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
            .allow_credentials(true),
        Err(_) => {
            log::warn!("Invalid frontend URL for CORS: {}", frontend_url);
            CorsLayer::new()
        }
    }
}
