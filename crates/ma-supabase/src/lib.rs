pub mod client;
pub mod error;
pub mod identity;
pub mod profiles;

pub use client::{ScopedClient, Supabase};
pub use error::{ErrorKind, Result, SupabaseError};
pub use profiles::ProfileRepository;
