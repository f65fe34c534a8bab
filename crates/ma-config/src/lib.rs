mod config;
mod error;
mod log_level;
mod logging_config;
mod server_config;
mod supabase_config;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use supabase_config::SupabaseConfig;

#[cfg(test)]
mod tests;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3001;
const DEFAULT_FRONTEND_URL: &str = "http://localhost:3000";
const DEFAULT_SUPABASE_URL: &str = "http://127.0.0.1:54321";
const DEFAULT_SUPABASE_TIMEOUT_SECS: u64 = 10;
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const MIN_KEY_LENGTH: usize = 20;

/// Shared validator for URL-shaped settings
pub(crate) fn is_http_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}
