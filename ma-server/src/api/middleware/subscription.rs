//! Subscription tier gates for paid routes. Run after `authenticate`.

use crate::api::error::ApiError;

use ma_auth::AuthSession;
use ma_core::SubscriptionTier;

use axum::{extract::Request, middleware::Next, response::Response};

/// Require at least the `pro` tier
pub async fn require_pro_tier(request: Request, next: Next) -> Result<Response, ApiError> {
    enforce_tier(SubscriptionTier::Pro, request, next).await
}

/// Require the `enterprise` tier
pub async fn require_enterprise_tier(request: Request, next: Next) -> Result<Response, ApiError> {
    enforce_tier(SubscriptionTier::Enterprise, request, next).await
}

async fn enforce_tier(
    minimum: SubscriptionTier,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let session = request.extensions().get::<AuthSession>();
    ma_auth::require_tier(minimum, session).await?;

    Ok(next.run(request).await)
}
