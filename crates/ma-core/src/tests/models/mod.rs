mod identity;
mod profile;
mod subscription_tier;
