use ma_core::Identity;
use ma_supabase::{ProfileRepository, ScopedClient};

/// Verified per-request context: the resolved identity plus a data-access
/// handle bound to the same token. Dropped when the request ends; nothing
/// is shared between requests.
#[derive(Clone)]
pub struct AuthSession {
    pub identity: Identity,
    pub client: ScopedClient,
}

impl AuthSession {
    pub fn new(identity: Identity, client: ScopedClient) -> Self {
        Self { identity, client }
    }

    /// Profile repository scoped to this caller
    pub fn profiles(&self) -> ProfileRepository {
        self.client.profiles()
    }
}
