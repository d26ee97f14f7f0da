//! Session middleware configuration.
//!
//! Sessions live in memory alongside the shopper stores they point at, so a
//! restart clears every basket.

use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer, cookie::time};

use crate::config::StorefrontConfig;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "fungi_session";

/// Create the session layer with an in-memory store.
///
/// Sessions expire after `config.session_idle` without a request.
#[must_use]
pub fn create_session_layer(config: &StorefrontConfig) -> SessionManagerLayer<MemoryStore> {
    let idle_seconds = i64::try_from(config.session_idle.as_secs()).unwrap_or(i64::MAX);

    SessionManagerLayer::new(MemoryStore::default())
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(time::Duration::seconds(idle_seconds)))
        .with_secure(config.is_secure())
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}
