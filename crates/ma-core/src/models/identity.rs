//! Authenticated principal resolved from a bearer token.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The verified identity issued by the external identity service.
/// Valid for the lifetime of the token it was resolved from; this service
/// never creates or mutates identities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: Uuid,
    pub email: Option<String>,
    /// Display name from the identity service's user metadata, if set
    pub name: Option<String>,
}

impl Identity {
    /// Display name for a freshly provisioned profile: the metadata name,
    /// else the email local-part, else `"User"`.
    pub fn display_name(&self) -> String {
        if let Some(name) = self.name.as_deref() {
            if !name.is_empty() {
                return name.to_string();
            }
        }

        self.email
            .as_deref()
            .and_then(|email| email.split('@').next())
            .filter(|local_part| !local_part.is_empty())
            .map(String::from)
            .unwrap_or_else(|| String::from("User"))
    }
}
