//! Repository for the `profiles` table via the REST data API.

use crate::client::{ScopedClient, check_status};
use crate::{ErrorKind, Result as SupabaseErrorResult};

use ma_core::{NewProfile, Profile};

use reqwest::Method;
use reqwest::header::ACCEPT;
use uuid::Uuid;

/// Accept header asking the data API for a single object instead of an array
const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

pub struct ProfileRepository {
    client: ScopedClient,
}

impl ProfileRepository {
    pub fn new(client: ScopedClient) -> Self {
        Self { client }
    }

    /// Fetch a profile by identity id. `Ok(None)` when no row matches.
    pub async fn find_by_id(&self, id: Uuid) -> SupabaseErrorResult<Option<Profile>> {
        let response = self
            .client
            .rest(Method::GET, "profiles")
            .query(&[("id", format!("eq.{}", id)), ("select", "*".to_string())])
            .header(ACCEPT, SINGLE_OBJECT)
            .send()
            .await?;

        match check_status(response).await {
            Ok(response) => Ok(Some(response.json().await?)),
            Err(e) if e.kind() == ErrorKind::NoRows => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Insert a freshly provisioned profile and return the stored row.
    ///
    /// A unique-constraint violation surfaces as `ErrorKind::Conflict`.
    pub async fn insert(&self, profile: &NewProfile) -> SupabaseErrorResult<Profile> {
        let response = self
            .client
            .rest(Method::POST, "profiles")
            .header(ACCEPT, SINGLE_OBJECT)
            .header("Prefer", "return=representation")
            .json(profile)
            .send()
            .await?;

        Ok(check_status(response).await?.json().await?)
    }
}
