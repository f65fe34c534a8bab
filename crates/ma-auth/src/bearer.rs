use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

const BEARER_PREFIX: &str = "Bearer ";

/// Extract the token from an `Authorization` header value.
///
/// An absent header or any form other than `Bearer <token>` is a missing
/// credential.
#[track_caller]
pub fn bearer_token(authorization: Option<&str>) -> AuthErrorResult<&str> {
    let token = authorization
        .and_then(|header| header.strip_prefix(BEARER_PREFIX))
        .ok_or_else(|| AuthError::MissingCredential {
            location: ErrorLocation::from(Location::caller()),
        })?;

    if token.is_empty() {
        return Err(AuthError::MissingCredential {
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(token)
}
