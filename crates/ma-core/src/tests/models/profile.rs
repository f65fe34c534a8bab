use crate::{Identity, NewProfile, SubscriptionTier};

use uuid::Uuid;

#[test]
fn given_identity_when_provisioned_then_free_tier_and_derived_name() {
    let identity = Identity {
        id: Uuid::new_v4(),
        email: Some("carol@example.com".to_string()),
        name: None,
    };

    let profile = NewProfile::for_identity(&identity);

    assert_eq!(profile.id, identity.id);
    assert_eq!(profile.email, "carol@example.com");
    assert_eq!(profile.name, "carol");
    assert_eq!(profile.subscription_tier, SubscriptionTier::Free);
}

#[test]
fn given_identity_without_email_when_provisioned_then_empty_email_stored() {
    let identity = Identity {
        id: Uuid::new_v4(),
        email: None,
        name: None,
    };

    let profile = NewProfile::for_identity(&identity);

    assert_eq!(profile.email, "");
    assert_eq!(profile.name, "User");
}
