//! Axum extractors for authenticated request context

use crate::api::error::ApiError;
use crate::state::AppState;

use ma_auth::{AuthError, AuthSession};

use std::future::Future;
use std::panic::Location;

use axum::{extract::FromRequestParts, http::request::Parts};
use error_location::ErrorLocation;

/// Extracts the verified session attached by the `authenticate` middleware.
///
/// Rejects with 401 when the route is reached without authentication.
pub struct CurrentUser(pub AuthSession);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            parts
                .extensions
                .get::<AuthSession>()
                .cloned()
                .map(CurrentUser)
                .ok_or_else(|| {
                    AuthError::AuthenticationRequired {
                        location: ErrorLocation::from(Location::caller()),
                    }
                    .into()
                })
        }
    }
}
