//! Subscription tier gate for paid capabilities.

use crate::{AuthError, AuthSession, Result as AuthErrorResult};

use ma_core::{Profile, SubscriptionTier};

use std::panic::Location;

use error_location::ErrorLocation;

/// Permit continuation when the caller's tier is at least `minimum`.
///
/// Fetch only: a caller without a profile is denied, not provisioned.
/// Evaluated once per request; no state is held between requests.
pub async fn require_tier(
    minimum: SubscriptionTier,
    session: Option<&AuthSession>,
) -> AuthErrorResult<Profile> {
    let session = session.ok_or_else(|| AuthError::AuthenticationRequired {
        location: ErrorLocation::from(Location::caller()),
    })?;

    let profile = match session.profiles().find_by_id(session.identity.id).await {
        Ok(Some(profile)) => profile,
        Ok(None) => {
            return Err(AuthError::ProfileNotFound {
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Err(source) => {
            log::error!("Profile fetch failed during tier check: {}", source);
            return Err(AuthError::ProfileNotFound {
                location: ErrorLocation::from(Location::caller()),
            });
        }
    };

    if profile.subscription_tier < minimum {
        return Err(AuthError::InsufficientTier {
            current: profile.subscription_tier,
            required: minimum,
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(profile)
}
