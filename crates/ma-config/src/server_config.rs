use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_FRONTEND_URL, DEFAULT_HOST, DEFAULT_PORT, is_http_url,
};

/// HTTP server settings
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Allowed CORS origin (the dashboard frontend)
    pub frontend_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from(DEFAULT_HOST),
            port: DEFAULT_PORT,
            frontend_url: String::from(DEFAULT_FRONTEND_URL),
        }
    }
}

impl ServerConfig {
    pub(crate) fn from_env() -> Self {
        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| String::from(DEFAULT_HOST)),
            port: std::env::var("PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            frontend_url: std::env::var("FRONTEND_URL")
                .unwrap_or_else(|_| String::from(DEFAULT_FRONTEND_URL)),
        }
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.port == 0 {
            return Err(ConfigError::server("PORT must be 1-65535, got 0"));
        }

        if !is_http_url(&self.frontend_url) {
            return Err(ConfigError::server(format!(
                "FRONTEND_URL must be an http(s) URL, got {}",
                self.frontend_url
            )));
        }

        Ok(())
    }
}
