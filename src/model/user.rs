use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The character signed in through EVE SSO
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct IdentityDto {
    pub character_id: i64,
    pub character_name: String,
    /// When the access token stops being valid, the user must sign in again afterwards
    pub expires_at: DateTime<Utc>,
}

/// Public profile of the signed in character
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct PublicCharacterDto {
    pub id: i64,
    pub name: String,
    pub corporation_id: i64,
    pub alliance_id: Option<i64>,
    pub birthday: DateTime<Utc>,
}
