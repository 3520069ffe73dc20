use time::Duration;
use tower_sessions::{cookie::SameSite, Expiry, MemoryStore, SessionManagerLayer};

use crate::server::{config::Config, error::Error, service::esi::EsiApi};

/// Sessions expire after this long without a request, the lifetime of an EVE SSO access token.
pub const SESSION_INACTIVITY_MINUTES: i64 = 20;

/// Build and configure the ESI client with the provided credentials
pub fn build_esi_client(config: &Config) -> Result<eve_esi::Client, Error> {
    let esi_client = eve_esi::Client::builder()
        .user_agent(&config.user_agent)
        .client_id(&config.esi_client_id)
        .client_secret(&config.esi_client_secret)
        .callback_url(&config.esi_callback_url)
        .build()?;

    Ok(esi_client)
}

/// Build the HTTP client for fleet, wallet and name requests
pub fn build_esi_api(config: &Config) -> Result<EsiApi, Error> {
    EsiApi::with_user_agent(&config.user_agent, &config.esi_url)
}

/// Configure in-memory session management
pub fn build_session_layer() -> SessionManagerLayer<MemoryStore> {
    // Secure cookies outside of debug builds
    let secure_cookies = !cfg!(debug_assertions);

    SessionManagerLayer::new(MemoryStore::default())
        .with_secure(secure_cookies)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::minutes(
            SESSION_INACTIVITY_MINUTES,
        )))
}
