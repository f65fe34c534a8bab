//! Lazy profile provisioning on first authenticated access.

use crate::{AuthError, AuthSession, Result as AuthErrorResult};

use ma_core::{NewProfile, Profile};
use ma_supabase::ErrorKind;

use std::panic::Location;

use error_location::ErrorLocation;

/// Fetch the caller's profile, creating the default `free` profile on
/// first access. Idempotent: an existing profile is returned unchanged.
///
/// A concurrent first request may win the insert; the resulting unique
/// violation re-fetches and returns the row that now exists.
pub async fn ensure_profile(session: &AuthSession) -> AuthErrorResult<Profile> {
    let repo = session.profiles();

    match repo.find_by_id(session.identity.id).await {
        Ok(Some(profile)) => return Ok(profile),
        Ok(None) => {}
        Err(source) => {
            return Err(AuthError::ProfileFetchFailure {
                source,
                location: ErrorLocation::from(Location::caller()),
            });
        }
    }

    let new_profile = NewProfile::for_identity(&session.identity);
    log::info!("Provisioning profile for {}", session.identity.id);

    match repo.insert(&new_profile).await {
        Ok(profile) => Ok(profile),
        Err(source) if source.kind() == ErrorKind::Conflict => {
            match repo.find_by_id(session.identity.id).await {
                Ok(Some(profile)) => Ok(profile),
                Ok(None) => Err(AuthError::ProfileCreateFailure {
                    source,
                    location: ErrorLocation::from(Location::caller()),
                }),
                Err(fetch_source) => Err(AuthError::ProfileFetchFailure {
                    source: fetch_source,
                    location: ErrorLocation::from(Location::caller()),
                }),
            }
        }
        Err(source) => Err(AuthError::ProfileCreateFailure {
            source,
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}
