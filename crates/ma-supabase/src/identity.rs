//! Identity verification against the hosted auth service.

use crate::Result as SupabaseErrorResult;
use crate::client::{Supabase, check_status};

use ma_core::Identity;

use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

/// User payload returned by `GET /auth/v1/user`
#[derive(Debug, Deserialize)]
struct UserPayload {
    id: Uuid,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    user_metadata: Option<Value>,
}

impl From<UserPayload> for Identity {
    fn from(user: UserPayload) -> Self {
        let name = user
            .user_metadata
            .as_ref()
            .and_then(|meta| meta.get("name"))
            .and_then(Value::as_str)
            .map(String::from);

        Identity {
            id: user.id,
            email: user.email.filter(|email| !email.is_empty()),
            name,
        }
    }
}

impl Supabase {
    /// Resolve a bearer token to the identity it was issued for.
    ///
    /// The service verifies the token; this side only relays it.
    pub async fn get_user(&self, access_token: &str) -> SupabaseErrorResult<Identity> {
        let response = self
            .http()
            .get(format!("{}/auth/v1/user", self.base_url()))
            .header("apikey", self.anon_key())
            .bearer_auth(access_token)
            .send()
            .await?;

        let user: UserPayload = check_status(response).await?.json().await?;

        Ok(user.into())
    }
}
