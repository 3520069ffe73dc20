use serde::{Deserialize, Serialize};

/// A character ID paired with its name
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CharacterDto {
    pub id: i64,
    pub name: String,
}

/// Fleet the signed in character is currently in
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct FleetStatusDto {
    pub fleet_id: i64,
    pub role: String,
    pub is_fleet_commander: bool,
    /// Fleet members, only readable by the fleet commander
    pub members: Option<Vec<CharacterDto>>,
}

/// Character names to resolve to IDs
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ResolveNamesDto {
    pub names: Vec<String>,
}
