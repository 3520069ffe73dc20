use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, Error},
    model::session::token::SessionToken,
};

/// Retrieves the signed in character's access token from the session.
///
/// # Returns
/// - `Ok(SessionToken)` - Token present and not yet expired
/// - `Err(Error::AuthError(AuthError::NotSignedIn))` - Nobody signed in with this session
/// - `Err(Error::AuthError(AuthError::AuthenticationExpired))` - Token expired, session is cleared
pub async fn require_token(session: &Session) -> Result<SessionToken, Error> {
    let Some(token) = SessionToken::get(session).await? else {
        return Err(Error::AuthError(AuthError::NotSignedIn));
    };

    if token.is_expired() {
        session.clear().await;

        tracing::debug!(
            character_id = %token.character_id,
            "Cleared session holding an expired access token"
        );

        return Err(Error::AuthError(AuthError::AuthenticationExpired(
            token.character_id,
        )));
    }

    Ok(token)
}
