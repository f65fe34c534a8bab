//! Credential verification against the external identity service.

use crate::{AuthError, AuthSession, Result as AuthErrorResult, bearer_token};

use ma_supabase::{ErrorKind, Supabase};

use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;

/// Verifies bearer tokens and builds the per-request session.
///
/// Holds only the shared service client; every request performs a fresh
/// token verification.
#[derive(Clone)]
pub struct Authenticator {
    supabase: Arc<Supabase>,
}

impl Authenticator {
    pub fn new(supabase: Arc<Supabase>) -> Self {
        Self { supabase }
    }

    /// Resolve the `Authorization` header value to a verified session.
    ///
    /// A rejected token is `InvalidCredential`; an unreachable or failing
    /// identity service is `AuthenticationFailure`, so callers can tell a
    /// bad token from an outage.
    pub async fn authenticate(&self, authorization: Option<&str>) -> AuthErrorResult<AuthSession> {
        let token = bearer_token(authorization)?;

        match self.supabase.get_user(token).await {
            Ok(identity) => Ok(AuthSession::new(identity, self.supabase.scoped(token))),
            Err(source) => match source.kind() {
                ErrorKind::Connectivity | ErrorKind::Unavailable => {
                    Err(AuthError::AuthenticationFailure {
                        source,
                        location: ErrorLocation::from(Location::caller()),
                    })
                }
                _ => {
                    log::debug!("Token rejected by identity service: {}", source);
                    Err(AuthError::InvalidCredential {
                        location: ErrorLocation::from(Location::caller()),
                    })
                }
            },
        }
    }

    /// Like `authenticate`, but never fails the request: any error proceeds
    /// as anonymous.
    pub async fn optional_authenticate(&self, authorization: Option<&str>) -> Option<AuthSession> {
        match self.authenticate(authorization).await {
            Ok(session) => Some(session),
            Err(e) => {
                log::debug!("Optional authentication skipped: {}", e);
                None
            }
        }
    }
}
