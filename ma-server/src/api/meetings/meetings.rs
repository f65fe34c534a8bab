//! Meeting API handlers - scaffold stubs pending the meetings service

use crate::api::extractors::current_user::CurrentUser;
use crate::api::not_implemented_for;

use axum::{extract::Path, response::Response};

/// GET /api/meetings
pub async fn list_meetings(CurrentUser(session): CurrentUser) -> Response {
    not_implemented_for("GET /api/meetings", session.identity.id)
}

/// POST /api/meetings
pub async fn create_meeting(CurrentUser(session): CurrentUser) -> Response {
    not_implemented_for("POST /api/meetings", session.identity.id)
}

/// GET /api/meetings/{id}
pub async fn get_meeting(CurrentUser(session): CurrentUser, Path(id): Path<String>) -> Response {
    not_implemented_for(&format!("GET /api/meetings/{}", id), session.identity.id)
}

/// PUT /api/meetings/{id}
pub async fn update_meeting(CurrentUser(session): CurrentUser, Path(id): Path<String>) -> Response {
    not_implemented_for(&format!("PUT /api/meetings/{}", id), session.identity.id)
}

/// DELETE /api/meetings/{id}
pub async fn delete_meeting(CurrentUser(session): CurrentUser, Path(id): Path<String>) -> Response {
    not_implemented_for(&format!("DELETE /api/meetings/{}", id), session.identity.id)
}

/// GET /api/meetings/{id}/participants
pub async fn list_participants(
    CurrentUser(session): CurrentUser,
    Path(id): Path<String>,
) -> Response {
    not_implemented_for(
        &format!("GET /api/meetings/{}/participants", id),
        session.identity.id,
    )
}

/// POST /api/meetings/{id}/participants
pub async fn add_participant(
    CurrentUser(session): CurrentUser,
    Path(id): Path<String>,
) -> Response {
    not_implemented_for(
        &format!("POST /api/meetings/{}/participants", id),
        session.identity.id,
    )
}
