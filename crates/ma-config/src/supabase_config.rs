use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_SUPABASE_TIMEOUT_SECS, DEFAULT_SUPABASE_URL,
    MIN_KEY_LENGTH, is_http_url,
};

/// Connection settings for the hosted backend service
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    /// Project base URL
    pub url: String,
    /// Publishable key for user-scoped requests
    pub anon_key: String,
    /// Privileged key for backend operations; falls back to the anon key
    pub service_role_key: String,
    /// HTTP client timeout in seconds
    pub timeout_secs: u64,
}

impl Default for SupabaseConfig {
    fn default() -> Self {
        Self {
            url: String::from(DEFAULT_SUPABASE_URL),
            anon_key: String::new(),
            service_role_key: String::new(),
            timeout_secs: DEFAULT_SUPABASE_TIMEOUT_SECS,
        }
    }
}

impl SupabaseConfig {
    pub(crate) fn from_env() -> Self {
        let anon_key = std::env::var("SUPABASE_ANON_KEY").unwrap_or_default();
        let service_role_key =
            std::env::var("SUPABASE_SERVICE_ROLE_KEY").unwrap_or_else(|_| anon_key.clone());

        Self {
            url: std::env::var("SUPABASE_URL")
                .unwrap_or_else(|_| String::from(DEFAULT_SUPABASE_URL)),
            anon_key,
            service_role_key,
            timeout_secs: std::env::var("SUPABASE_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_SUPABASE_TIMEOUT_SECS),
        }
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !is_http_url(&self.url) {
            return Err(ConfigError::supabase(format!(
                "SUPABASE_URL must be an http(s) URL, got {}",
                self.url
            )));
        }

        if self.anon_key.is_empty() {
            return Err(ConfigError::supabase("SUPABASE_ANON_KEY is required"));
        }

        if self.anon_key.len() <= MIN_KEY_LENGTH {
            return Err(ConfigError::supabase(
                "SUPABASE_ANON_KEY appears to be invalid (too short)",
            ));
        }

        if self.service_role_key.len() <= MIN_KEY_LENGTH {
            return Err(ConfigError::supabase(
                "SUPABASE_SERVICE_ROLE_KEY appears to be invalid (too short)",
            ));
        }

        if self.timeout_secs == 0 {
            return Err(ConfigError::supabase("SUPABASE_TIMEOUT_SECS must be >= 1"));
        }

        Ok(())
    }
}
