use serde::{Deserialize, Serialize};

/// A character taking part in the fleet.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FleetMember {
    pub character_id: i64,
    pub name: String,
    /// Character ID of the main this character is an alt of, `None` for mains
    pub alt_of_id: Option<i64>,
    /// Whether the character earns shares at all
    pub eligible: bool,
    /// Whether the character took part in the site being paid out
    pub part_of_site_payout: bool,
}

impl FleetMember {
    /// Creates a freshly imported member: eligible, not yet in the payout and not an alt.
    pub fn new(character_id: i64, name: impl Into<String>) -> Self {
        Self {
            character_id,
            name: name.into(),
            alt_of_id: None,
            eligible: true,
            part_of_site_payout: false,
        }
    }

    pub fn is_main(&self) -> bool {
        self.alt_of_id.is_none()
    }

    /// Whether the member counts towards share allocation.
    pub fn is_paid_out(&self) -> bool {
        self.eligible && self.part_of_site_payout
    }

    /// Portrait URL from the EVE image server.
    pub fn portrait_url(&self, size: u32) -> String {
        format!(
            "https://images.evetech.net/characters/{}/portrait?tenant=tranquility&size={}",
            self.character_id, size
        )
    }
}
