use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::{auth::AuthError, Error};

pub const SESSION_AUTH_CSRF_KEY: &str = "payout:auth:csrf";

/// CSRF state issued when the EVE SSO login starts, checked once on callback.
#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionAuthCsrf(pub String);

impl SessionAuthCsrf {
    pub async fn insert(session: &Session, state: &str) -> Result<(), Error> {
        session
            .insert(SESSION_AUTH_CSRF_KEY, SessionAuthCsrf(state.to_string()))
            .await?;

        Ok(())
    }

    /// Retrieves the CSRF state without removing it.
    ///
    /// # Returns
    /// - `Ok(String)` - CSRF state found
    /// - `Err(Error::AuthError(AuthError::CsrfMissingValue))` - No CSRF state in session
    pub async fn get(session: &Session) -> Result<String, Error> {
        match session.get::<SessionAuthCsrf>(SESSION_AUTH_CSRF_KEY).await? {
            Some(SessionAuthCsrf(state)) => Ok(state),
            None => Err(AuthError::CsrfMissingValue.into()),
        }
    }

    /// Removes and returns the CSRF state so it can only be used once.
    ///
    /// # Returns
    /// - `Ok(String)` - CSRF state found and removed
    /// - `Err(Error::AuthError(AuthError::CsrfMissingValue))` - No CSRF state in session
    pub async fn remove(session: &Session) -> Result<String, Error> {
        match session.remove::<SessionAuthCsrf>(SESSION_AUTH_CSRF_KEY).await? {
            Some(SessionAuthCsrf(state)) => Ok(state),
            None => Err(AuthError::CsrfMissingValue.into()),
        }
    }
}
