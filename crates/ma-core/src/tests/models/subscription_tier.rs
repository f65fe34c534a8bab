use crate::{CoreError, SubscriptionTier};

use std::str::FromStr;

#[test]
fn given_tier_order_when_compared_then_free_below_pro_below_enterprise() {
    assert!(SubscriptionTier::Free < SubscriptionTier::Pro);
    assert!(SubscriptionTier::Pro < SubscriptionTier::Enterprise);
    assert!(SubscriptionTier::Free < SubscriptionTier::Enterprise);
}

#[test]
fn given_known_strings_when_parsed_then_round_trips() {
    for tier in [
        SubscriptionTier::Free,
        SubscriptionTier::Pro,
        SubscriptionTier::Enterprise,
    ] {
        assert_eq!(SubscriptionTier::from_str(tier.as_str()).unwrap(), tier);
    }
}

#[test]
fn given_unknown_string_when_parsed_then_invalid_tier_error() {
    let result = SubscriptionTier::from_str("platinum");

    assert!(matches!(
        result,
        Err(CoreError::InvalidSubscriptionTier { .. })
    ));
}

#[test]
fn given_store_json_when_deserialized_then_lowercase_names_match() {
    let tier: SubscriptionTier = serde_json::from_str("\"enterprise\"").unwrap();

    assert_eq!(tier, SubscriptionTier::Enterprise);
    assert_eq!(serde_json::to_string(&tier).unwrap(), "\"enterprise\"");
}

#[test]
fn given_default_when_constructed_then_free() {
    assert_eq!(SubscriptionTier::default(), SubscriptionTier::Free);
}
