pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

pub use api::{
    auth::me_response::MeResponse,
    error::{ApiError, ApiErrorBody, Result as ApiResult},
    extractors::current_user::CurrentUser,
    middleware::authenticate::{authenticate, optional_authenticate},
    middleware::subscription::{require_enterprise_tier, require_pro_tier},
};

pub use crate::routes::build_router;
pub use crate::state::AppState;
