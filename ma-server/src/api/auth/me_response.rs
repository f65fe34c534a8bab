use ma_core::{Identity, Profile};

use serde::Serialize;

/// Response for `GET /api/auth/me`
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub user: Identity,
    pub profile: Profile,
}
