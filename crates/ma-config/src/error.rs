use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum ConfigError {
    #[error("{category} error: {message} {location}")]
    Generic {
        category: &'static str,
        message: String,
        location: ErrorLocation,
    },
}

impl ConfigError {
    /// Create a server error
    #[track_caller]
    pub fn server<S: Into<String>>(message: S) -> Self {
        ConfigError::Generic {
            category: "Server",
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a supabase error
    #[track_caller]
    pub fn supabase<S: Into<String>>(message: S) -> Self {
        ConfigError::Generic {
            category: "Supabase",
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

}

pub type ConfigErrorResult<T> = StdResult<T, ConfigError>;
