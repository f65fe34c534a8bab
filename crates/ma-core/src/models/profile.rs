//! Application profile, one-to-one with an identity.

use crate::{Identity, SubscriptionTier};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A row of the `profiles` table. Created lazily on first authenticated
/// access, never deleted by this service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub subscription_tier: SubscriptionTier,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert payload for first-access provisioning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewProfile {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub subscription_tier: SubscriptionTier,
}

impl NewProfile {
    /// Default profile for an identity that has none yet.
    pub fn for_identity(identity: &Identity) -> Self {
        Self {
            id: identity.id,
            email: identity.email.clone().unwrap_or_default(),
            name: identity.display_name(),
            subscription_tier: SubscriptionTier::Free,
        }
    }
}
