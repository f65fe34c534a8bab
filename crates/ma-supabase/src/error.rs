//! Errors for calls to the hosted backend service.
//!
//! Service error codes are classified into `ErrorKind` here, once; callers
//! branch on the kind and never inspect message text.

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SupabaseError {
    /// Transport-level failure before any service response
    #[error("Supabase request failed: {source} {location}")]
    Http {
        #[source]
        source: reqwest::Error,
        location: ErrorLocation,
    },

    /// The service answered with an error body
    #[error("Supabase API error ({status}): {message} {location}")]
    Api {
        status: u16,
        /// Service error code, e.g. "PGRST116" or "23505"
        code: Option<String>,
        message: String,
        location: ErrorLocation,
    },

    /// Response body did not match the expected shape
    #[error("Supabase response decode failed: {source} {location}")]
    Decode {
        #[source]
        source: reqwest::Error,
        location: ErrorLocation,
    },
}

/// Boundary-level classification of service failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Single-object read matched no rows (PGRST116)
    NoRows,
    /// Unique constraint violation (23505) or HTTP 409
    Conflict,
    /// Rejected credentials (HTTP 401/403)
    Unauthorized,
    /// The service is up but failing (HTTP 5xx)
    Unavailable,
    /// The service could not be reached at all
    Connectivity,
    Other,
}

impl SupabaseError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Http { .. } => ErrorKind::Connectivity,
            Self::Decode { .. } => ErrorKind::Other,
            Self::Api { status, code, .. } => match code.as_deref() {
                Some("PGRST116") => ErrorKind::NoRows,
                Some("23505") => ErrorKind::Conflict,
                _ if *status == 401 || *status == 403 => ErrorKind::Unauthorized,
                _ if *status == 409 => ErrorKind::Conflict,
                _ if *status >= 500 => ErrorKind::Unavailable,
                _ => ErrorKind::Other,
            },
        }
    }
}

impl From<reqwest::Error> for SupabaseError {
    #[track_caller]
    fn from(source: reqwest::Error) -> Self {
        if source.is_decode() {
            Self::Decode {
                source,
                location: ErrorLocation::from(Location::caller()),
            }
        } else {
            Self::Http {
                source,
                location: ErrorLocation::from(Location::caller()),
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, SupabaseError>;
