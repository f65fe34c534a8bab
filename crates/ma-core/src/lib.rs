pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::identity::Identity;
pub use models::profile::{NewProfile, Profile};
pub use models::subscription_tier::SubscriptionTier;

#[cfg(test)]
mod tests;
