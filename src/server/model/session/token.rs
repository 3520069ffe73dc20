use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::{model::user::IdentityDto, server::error::Error};

pub const SESSION_AUTH_TOKEN_KEY: &str = "payout:auth:token";

/// EVE SSO access token of the signed in character.
///
/// The token never leaves the server, the client only sees the [`IdentityDto`] derived from it.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct SessionToken {
    pub access_token: String,
    pub character_id: i64,
    pub character_name: String,
    pub expires_at: DateTime<Utc>,
}

impl SessionToken {
    pub async fn insert(session: &Session, token: &SessionToken) -> Result<(), Error> {
        session.insert(SESSION_AUTH_TOKEN_KEY, token).await?;

        Ok(())
    }

    pub async fn get(session: &Session) -> Result<Option<SessionToken>, Error> {
        Ok(session.get(SESSION_AUTH_TOKEN_KEY).await?)
    }

    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }

    pub fn identity(&self) -> IdentityDto {
        IdentityDto {
            character_id: self.character_id,
            character_name: self.character_name.clone(),
            expires_at: self.expires_at,
        }
    }
}
