use crate::{ConfigErrorResult, LoggingConfig, ServerConfig, SupabaseConfig};

use log::info;

/// Process configuration assembled from environment variables.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub server: ServerConfig,
    pub supabase: SupabaseConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// Loads a `.env` file first when present (development), then reads
    /// each section. Does NOT validate - call validate() after from_env().
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();

        Self {
            server: ServerConfig::from_env(),
            supabase: SupabaseConfig::from_env(),
            logging: LoggingConfig::from_env(),
        }
    }

    /// Validate all configuration.
    /// Call after from_env() to catch startup errors before serving.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.supabase.validate()?;

        Ok(())
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs key material).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!("  frontend origin: {}", self.server.frontend_url);
        info!(
            "  supabase: {} (timeout: {}s)",
            self.supabase.url, self.supabase.timeout_secs
        );
        info!(
            "  supabase keys: anon [{}], service_role [{}]",
            set_or_not(&self.supabase.anon_key),
            set_or_not(&self.supabase.service_role_key)
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("none")
        );
    }
}

fn set_or_not(value: &str) -> &'static str {
    if value.is_empty() { "NOT SET" } else { "SET" }
}
