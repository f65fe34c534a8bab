
use crate::AuthSession;

use ma_config::SupabaseConfig;
use ma_core::Identity;
use ma_supabase::Supabase;

use std::sync::Arc;

use serde_json::{Value, json};
use uuid::Uuid;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub(crate) const USER_ID: &str = "00000000-0000-0000-0000-0000000000a1";

pub(crate) fn user_id() -> Uuid {
    Uuid::parse_str(USER_ID).unwrap()
}

pub(crate) fn supabase_at(url: &str) -> Arc<Supabase> {
    let config = SupabaseConfig {
        url: url.to_string(),
        anon_key: "test-anon-key-0123456789abcdef".to_string(),
        service_role_key: "test-service-key-0123456789abcdef".to_string(),
        timeout_secs: 5,
    };

    Arc::new(Supabase::new(&config).expect("Failed to build Supabase client"))
}

/// Session with a known identity, bound to the mock server
pub(crate) fn session_for(server: &MockServer, email: Option<&str>, name: Option<&str>) -> AuthSession {
    let supabase = supabase_at(&server.uri());
    let identity = Identity {
        id: user_id(),
        email: email.map(String::from),
        name: name.map(String::from),
    };

    AuthSession::new(identity, supabase.scoped("user-access-token"))
}

pub(crate) fn profile_row(tier: &str) -> Value {
    json!({
        "id": USER_ID,
        "email": "a@b.com",
        "name": "a",
        "subscription_tier": tier,
        "created_at": "2024-05-01T10:00:00Z",
        "updated_at": "2024-05-01T10:00:00Z"
    })
}

pub(crate) fn no_rows() -> ResponseTemplate {
    ResponseTemplate::new(406).set_body_json(json!({
        "code": "PGRST116",
        "message": "JSON object requested, multiple (or no) rows returned"
    }))
}

pub(crate) async fn mock_profile_fetch(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/rest/v1/profiles"))
        .respond_with(response)
        .mount(server)
        .await;
}
