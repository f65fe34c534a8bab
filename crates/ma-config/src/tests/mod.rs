
use std::env;

/// Every variable read by `Config::from_env`
pub(crate) const ALL_VARS: &[&str] = &[
    "HOST",
    "PORT",
    "FRONTEND_URL",
    "SUPABASE_URL",
    "SUPABASE_ANON_KEY",
    "SUPABASE_SERVICE_ROLE_KEY",
    "SUPABASE_TIMEOUT_SECS",
    "LOG_LEVEL",
    "LOG_COLORED",
    "LOG_FILE",
];

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Remove every config variable so a test starts from defaults
pub(crate) fn clean_env() -> Vec<EnvGuard> {
    ALL_VARS.iter().map(|&key| EnvGuard::remove(key)).collect()
}
