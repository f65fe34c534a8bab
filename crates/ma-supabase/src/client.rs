//! HTTP client for the hosted backend service.
//!
//! One `Supabase` client is constructed during process startup and shared;
//! per-request work goes through a `ScopedClient` bound to the caller's
//! token so the store's row-level authorization applies. Token sessions are
//! never persisted or refreshed here: every request carries its own bearer.

use crate::profiles::ProfileRepository;
use crate::{Result as SupabaseErrorResult, SupabaseError};

use ma_config::SupabaseConfig;

use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response, StatusCode};
use serde_json::Value;

/// Shared client for the hosted service
pub struct Supabase {
    base_url: String,
    anon_key: String,
    service_role_key: String,
    http: ReqwestClient,
}

impl Supabase {
    /// Build the process-wide client from configuration
    pub fn new(config: &SupabaseConfig) -> SupabaseErrorResult<Self> {
        let http = ReqwestClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            base_url: config.url.trim_end_matches('/').to_string(),
            anon_key: config.anon_key.clone(),
            service_role_key: config.service_role_key.clone(),
            http,
        })
    }

    /// Handle bound to one caller's access token. Reads and writes through
    /// it are constrained by the store's row-level authorization.
    pub fn scoped(&self, access_token: &str) -> ScopedClient {
        ScopedClient {
            base_url: self.base_url.clone(),
            anon_key: self.anon_key.clone(),
            bearer: access_token.to_string(),
            http: self.http.clone(),
        }
    }

    /// Reachability probe against the identity service, using the
    /// privileged backend key
    pub async fn auth_health(&self) -> SupabaseErrorResult<()> {
        let response = self
            .http
            .get(format!("{}/auth/v1/health", self.base_url))
            .header("apikey", &self.service_role_key)
            .send()
            .await?;

        check_status(response).await?;

        Ok(())
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn anon_key(&self) -> &str {
        &self.anon_key
    }

    pub(crate) fn http(&self) -> &ReqwestClient {
        &self.http
    }
}

/// Per-request handle carrying the caller's bearer token.
/// Discarded when the request ends.
#[derive(Clone)]
pub struct ScopedClient {
    base_url: String,
    anon_key: String,
    bearer: String,
    http: ReqwestClient,
}

impl ScopedClient {
    /// Repository over the `profiles` table, scoped to this handle
    pub fn profiles(&self) -> ProfileRepository {
        ProfileRepository::new(self.clone())
    }

    /// Build a REST data API request with auth headers applied
    pub(crate) fn rest(&self, method: Method, table: &str) -> RequestBuilder {
        self.http
            .request(method, format!("{}/rest/v1/{}", self.base_url, table))
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.bearer)
    }
}

/// Convert a non-success response into an `Api` error carrying the
/// service's code and message
pub(crate) async fn check_status(response: Response) -> SupabaseErrorResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body: Value = response.json().await.unwrap_or(Value::Null);

    Err(api_error(status, &body))
}

fn api_error(status: StatusCode, body: &Value) -> SupabaseError {
    // PostgREST uses `code`/`message`, the auth service `error_code`/`msg`
    let code = body
        .get("code")
        .and_then(Value::as_str)
        .or_else(|| body.get("error_code").and_then(Value::as_str))
        .map(String::from);
    let message = body
        .get("message")
        .or_else(|| body.get("msg"))
        .or_else(|| body.get("error"))
        .and_then(Value::as_str)
        .unwrap_or("Unknown error")
        .to_string();

    SupabaseError::Api {
        status: status.as_u16(),
        code,
        message,
        location: ErrorLocation::from(Location::caller()),
    }
}
