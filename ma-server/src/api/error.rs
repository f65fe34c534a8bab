//! REST API error types
//!
//! Auth failures project to the JSON shape the dashboard consumes:
//! `{error, message}`, plus `current_tier`/`required_tier` on tier denials
//! so the client can render an upgrade prompt.

use ma_auth::AuthError;
use ma_core::SubscriptionTier;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "INVALID_CREDENTIAL")
    pub error: String,
    /// Human-readable error message
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_tier: Option<SubscriptionTier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_tier: Option<SubscriptionTier>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Authentication failed or is missing (401)
    #[error("Unauthorized: {message}")]
    Unauthorized {
        code: &'static str,
        message: String,
    },

    /// Caller's subscription tier is below the gate (403)
    #[error("Insufficient subscription: requires {required} (current: {current})")]
    InsufficientTier {
        current: SubscriptionTier,
        required: SubscriptionTier,
    },

    /// Resource not found (404)
    #[error("Not found: {message}")]
    NotFound {
        code: &'static str,
        message: String,
    },

    /// Internal server error (500)
    #[error("Internal error: {message}")]
    Internal {
        code: &'static str,
        message: String,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Unauthorized { code, message } => (
                StatusCode::UNAUTHORIZED,
                ApiErrorBody {
                    error: code.into(),
                    message,
                    current_tier: None,
                    required_tier: None,
                },
            ),
            ApiError::InsufficientTier { current, required } => (
                StatusCode::FORBIDDEN,
                ApiErrorBody {
                    error: "INSUFFICIENT_TIER".into(),
                    message: format!("This feature requires {} subscription or higher", required),
                    current_tier: Some(current),
                    required_tier: Some(required),
                },
            ),
            ApiError::NotFound { code, message } => (
                StatusCode::NOT_FOUND,
                ApiErrorBody {
                    error: code.into(),
                    message,
                    current_tier: None,
                    required_tier: None,
                },
            ),
            ApiError::Internal { code, message } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    error: code.into(),
                    message,
                    current_tier: None,
                    required_tier: None,
                },
            ),
        };

        (status, Json(body)).into_response()
    }
}

/// Convert auth errors to API errors.
///
/// Messages are client-facing; the underlying cause (with its call site)
/// is logged here and never exposed.
impl From<AuthError> for ApiError {
    fn from(e: AuthError) -> Self {
        let code = e.error_code();

        match &e {
            AuthError::MissingCredential { .. } => {
                log::warn!("{}", e);
                ApiError::Unauthorized {
                    code,
                    message: "Please provide a valid Bearer token".into(),
                }
            }
            AuthError::InvalidCredential { .. } => {
                log::warn!("{}", e);
                ApiError::Unauthorized {
                    code,
                    message: "Please log in again".into(),
                }
            }
            AuthError::AuthenticationRequired { .. } => {
                log::warn!("{}", e);
                ApiError::Unauthorized {
                    code,
                    message: "Please log in to access this feature".into(),
                }
            }
            AuthError::AuthenticationFailure { .. } => {
                log::error!("{}", e);
                ApiError::Internal {
                    code,
                    message: "Internal server error during authentication".into(),
                }
            }
            AuthError::ProfileFetchFailure { .. } => {
                log::error!("{}", e);
                ApiError::Internal {
                    code,
                    message: "Failed to fetch user profile".into(),
                }
            }
            AuthError::ProfileCreateFailure { .. } => {
                log::error!("{}", e);
                ApiError::Internal {
                    code,
                    message: "Failed to create user profile".into(),
                }
            }
            AuthError::ProfileNotFound { .. } => {
                log::warn!("{}", e);
                ApiError::NotFound {
                    code,
                    message: "User profile could not be retrieved".into(),
                }
            }
            AuthError::InsufficientTier {
                current, required, ..
            } => {
                log::warn!("{}", e);
                ApiError::InsufficientTier {
                    current: *current,
                    required: *required,
                }
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
