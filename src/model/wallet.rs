use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A wallet journal entry of the signed in character
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct WalletJournalEntryDto {
    pub id: i64,
    pub date: DateTime<Utc>,
    pub ref_type: String,
    /// ISK moved, positive when received
    pub amount: Option<f64>,
    /// Character or corporation the ISK came from
    pub first_party_id: Option<i64>,
    pub description: String,
}
