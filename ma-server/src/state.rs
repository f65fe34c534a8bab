use ma_auth::Authenticator;
use ma_supabase::Supabase;

use std::sync::Arc;

/// Shared application state for the router.
///
/// Holds no per-request or mutable data; the only shared resource is the
/// pooled HTTP client inside the Supabase handle.
#[derive(Clone)]
pub struct AppState {
    pub authenticator: Authenticator,
    /// Allowed CORS origin (the dashboard frontend)
    pub frontend_url: String,
}

impl AppState {
    pub fn new(supabase: Arc<Supabase>, frontend_url: String) -> Self {
        Self {
            authenticator: Authenticator::new(supabase),
            frontend_url,
        }
    }
}
