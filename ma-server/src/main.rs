pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

use crate::routes::build_router;
use crate::state::AppState;

use ma_supabase::Supabase;

use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

use log::{info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration
    let config = ma_config::Config::from_env();
    config.validate()?;

    // Initialize logger (before any other logging)
    let log_file = config.logging.file.clone().map(PathBuf::from);
    logger::initialize(config.logging.level, log_file, config.logging.colored)?;

    info!("Starting ma-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // One shared Supabase client for the whole process
    let supabase = Arc::new(Supabase::new(&config.supabase)?);

    // Startup reachability probe; failures are logged, not fatal
    match supabase.auth_health().await {
        Ok(()) => info!("Supabase auth service reachable"),
        Err(e) => warn!(
            "Supabase connection validation failed - some features may not work properly: {}",
            e
        ),
    }

    // Build router
    let state = AppState::new(supabase, config.server.frontend_url.clone());
    let app = build_router(state);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;
    info!("Server listening on {}", listener.local_addr()?);

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
                Err(e) => log::error!("Failed to listen for SIGINT: {}", e),
            }
        })
        .await?;

    info!("Shutdown complete");

    Ok(())
}
