//! Request authentication middleware.
//!
//! `authenticate` attaches the verified session to request extensions and
//! rejects per the credential verifier's error taxonomy;
//! `optional_authenticate` performs the same steps but lets every request
//! through, authenticated or not.

use crate::api::error::ApiError;
use crate::state::AppState;

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

/// Verify the bearer token and attach the session to the request
pub async fn authenticate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let authorization = authorization_header(&request);
    let session = state
        .authenticator
        .authenticate(authorization.as_deref())
        .await?;

    request.extensions_mut().insert(session);

    Ok(next.run(request).await)
}

/// Attach a session when a valid token is present; never rejects
pub async fn optional_authenticate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let authorization = authorization_header(&request);

    if let Some(session) = state
        .authenticator
        .optional_authenticate(authorization.as_deref())
        .await
    {
        request.extensions_mut().insert(session);
    }

    next.run(request).await
}

fn authorization_header(request: &Request) -> Option<String> {
    request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(String::from)
}
