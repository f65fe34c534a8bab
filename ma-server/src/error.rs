use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] ma_config::ConfigError),

    #[error("Supabase client error: {0}")]
    Supabase(#[from] ma_supabase::SupabaseError),

    #[error("Logger initialization failed: {message}")]
    Logger { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
