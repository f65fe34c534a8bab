use ma_core::SubscriptionTier;
use ma_supabase::SupabaseError;

use error_location::ErrorLocation;
use thiserror::Error;

/// Failures across credential verification, profile provisioning, and tier
/// gating. Each variant has one stable machine code; the HTTP layer decides
/// status codes and response bodies.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Missing or malformed authorization header {location}")]
    MissingCredential { location: ErrorLocation },

    #[error("Invalid or expired token {location}")]
    InvalidCredential { location: ErrorLocation },

    /// The identity service could not be consulted, as opposed to the
    /// service rejecting the token
    #[error("Identity verification failed: {source} {location}")]
    AuthenticationFailure {
        #[source]
        source: SupabaseError,
        location: ErrorLocation,
    },

    #[error("Profile fetch failed: {source} {location}")]
    ProfileFetchFailure {
        #[source]
        source: SupabaseError,
        location: ErrorLocation,
    },

    #[error("Profile creation failed: {source} {location}")]
    ProfileCreateFailure {
        #[source]
        source: SupabaseError,
        location: ErrorLocation,
    },

    #[error("Authentication required {location}")]
    AuthenticationRequired { location: ErrorLocation },

    #[error("Profile not found {location}")]
    ProfileNotFound { location: ErrorLocation },

    #[error("Requires {required} subscription or higher (current: {current}) {location}")]
    InsufficientTier {
        current: SubscriptionTier,
        required: SubscriptionTier,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// Stable machine code for client responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingCredential { .. } => "MISSING_CREDENTIAL",
            Self::InvalidCredential { .. } => "INVALID_CREDENTIAL",
            Self::AuthenticationFailure { .. } => "AUTHENTICATION_FAILURE",
            Self::ProfileFetchFailure { .. } => "PROFILE_FETCH_FAILED",
            Self::ProfileCreateFailure { .. } => "PROFILE_CREATE_FAILED",
            Self::AuthenticationRequired { .. } => "AUTHENTICATION_REQUIRED",
            Self::ProfileNotFound { .. } => "PROFILE_NOT_FOUND",
            Self::InsufficientTier { .. } => "INSUFFICIENT_TIER",
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
