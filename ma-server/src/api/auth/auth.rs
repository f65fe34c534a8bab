//! Authentication API handlers
//!
//! Session management (login, register, refresh) is delegated to the
//! hosted identity service; those endpoints are pending. The profile
//! endpoint is live and provisions a profile on first access.

use crate::api::auth::me_response::MeResponse;
use crate::api::error::Result as ApiResult;
use crate::api::extractors::current_user::CurrentUser;
use crate::api::not_implemented;

use ma_auth::ensure_profile;

use axum::{Json, response::Response};

/// GET /api/auth/me
///
/// Returns the caller's identity and profile. The profile is created with
/// tier `free` when this identity has never been seen before.
pub async fn get_me(CurrentUser(session): CurrentUser) -> ApiResult<Json<MeResponse>> {
    let profile = ensure_profile(&session).await?;

    Ok(Json(MeResponse {
        user: session.identity,
        profile,
    }))
}

/// POST /api/auth/login
pub async fn login() -> Response {
    not_implemented("POST /api/auth/login")
}

/// POST /api/auth/register
pub async fn register() -> Response {
    not_implemented("POST /api/auth/register")
}

/// POST /api/auth/logout
pub async fn logout() -> Response {
    not_implemented("POST /api/auth/logout")
}

/// POST /api/auth/refresh
pub async fn refresh() -> Response {
    not_implemented("POST /api/auth/refresh")
}
