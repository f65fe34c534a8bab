//! Transcription API handlers - scaffold stubs pending the speech-to-text
//! pipeline

use crate::api::extractors::current_user::CurrentUser;
use crate::api::not_implemented_for;

use axum::{extract::Path, response::Response};

/// POST /api/transcription/upload
pub async fn upload_audio(CurrentUser(session): CurrentUser) -> Response {
    not_implemented_for("POST /api/transcription/upload", session.identity.id)
}

/// POST /api/transcription/process
pub async fn process_transcription(CurrentUser(session): CurrentUser) -> Response {
    not_implemented_for("POST /api/transcription/process", session.identity.id)
}

/// GET /api/transcription/{meeting_id}
pub async fn get_transcription(
    CurrentUser(session): CurrentUser,
    Path(meeting_id): Path<String>,
) -> Response {
    not_implemented_for(
        &format!("GET /api/transcription/{}", meeting_id),
        session.identity.id,
    )
}

/// PUT /api/transcription/{meeting_id}
pub async fn update_transcription(
    CurrentUser(session): CurrentUser,
    Path(meeting_id): Path<String>,
) -> Response {
    not_implemented_for(
        &format!("PUT /api/transcription/{}", meeting_id),
        session.identity.id,
    )
}

/// GET /api/transcription/{meeting_id}/status
pub async fn transcription_status(
    CurrentUser(session): CurrentUser,
    Path(meeting_id): Path<String>,
) -> Response {
    not_implemented_for(
        &format!("GET /api/transcription/{}/status", meeting_id),
        session.identity.id,
    )
}

/// POST /api/transcription/{meeting_id}/export
pub async fn export_transcription(
    CurrentUser(session): CurrentUser,
    Path(meeting_id): Path<String>,
) -> Response {
    not_implemented_for(
        &format!("POST /api/transcription/{}/export", meeting_id),
        session.identity.id,
    )
}
