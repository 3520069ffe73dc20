//! Integration tests for the HTTP controllers, calling handlers directly with a mock ESI server.

mod auth;
mod character;
mod fleet;
mod wallet;

use chrono::{Duration, Utc};
use pochven_payout::server::model::session::token::SessionToken;
use tower_sessions::Session;

/// Signs `character_id` in on `session` with a token valid for `valid_for`.
async fn sign_in(session: &Session, character_id: i64, valid_for: Duration) -> SessionToken {
    let token = SessionToken {
        access_token: "access_token".to_string(),
        character_id,
        character_name: "Test Character".to_string(),
        expires_at: Utc::now() + valid_for,
    };

    SessionToken::insert(session, &token).await.unwrap();

    token
}
