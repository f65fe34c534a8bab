//! Meeting analysis API handlers - scaffold stubs pending the AI services.
//!
//! The whole router is gated at the `pro` tier; batch analysis requires
//! `enterprise`.

use crate::api::extractors::current_user::CurrentUser;
use crate::api::not_implemented_for;

use axum::{extract::Path, response::Response};

/// POST /api/analysis/summarize
pub async fn summarize(CurrentUser(session): CurrentUser) -> Response {
    not_implemented_for("POST /api/analysis/summarize", session.identity.id)
}

/// POST /api/analysis/sentiment
pub async fn sentiment(CurrentUser(session): CurrentUser) -> Response {
    not_implemented_for("POST /api/analysis/sentiment", session.identity.id)
}

/// POST /api/analysis/action-items
pub async fn action_items(CurrentUser(session): CurrentUser) -> Response {
    not_implemented_for("POST /api/analysis/action-items", session.identity.id)
}

/// POST /api/analysis/follow-ups
pub async fn follow_ups(CurrentUser(session): CurrentUser) -> Response {
    not_implemented_for("POST /api/analysis/follow-ups", session.identity.id)
}

/// GET /api/analysis/{meeting_id}
pub async fn get_analysis(
    CurrentUser(session): CurrentUser,
    Path(meeting_id): Path<String>,
) -> Response {
    not_implemented_for(
        &format!("GET /api/analysis/{}", meeting_id),
        session.identity.id,
    )
}

/// GET /api/analysis/{meeting_id}/insights
pub async fn get_insights(
    CurrentUser(session): CurrentUser,
    Path(meeting_id): Path<String>,
) -> Response {
    not_implemented_for(
        &format!("GET /api/analysis/{}/insights", meeting_id),
        session.identity.id,
    )
}

/// POST /api/analysis/batch
pub async fn batch(CurrentUser(session): CurrentUser) -> Response {
    not_implemented_for("POST /api/analysis/batch", session.identity.id)
}
