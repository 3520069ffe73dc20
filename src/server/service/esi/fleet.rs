use dioxus_logger::tracing;
use serde::Deserialize;

use crate::{
    model::fleet::FleetStatusDto,
    server::{
        error::{esi::EsiError, Error},
        service::esi::EsiApi,
    },
};

/// Fleet role allowed to read the member list.
pub const FLEET_COMMANDER_ROLE: &str = "fleet_commander";

/// Response of `GET /characters/{character_id}/fleet`.
#[derive(Clone, Debug, Deserialize)]
pub struct CharacterFleet {
    pub fleet_id: i64,
    pub role: String,
}

/// Entry of `GET /fleets/{fleet_id}/members`.
#[derive(Clone, Debug, Deserialize)]
pub struct FleetMemberEntry {
    pub character_id: i64,
}

impl EsiApi {
    /// The fleet the character is in, `None` when it is not in one.
    pub async fn get_character_fleet(
        &self,
        access_token: &str,
        character_id: i64,
    ) -> Result<Option<CharacterFleet>, Error> {
        let path = format!("/characters/{}/fleet", character_id);

        Ok(self.get_optional(&path, access_token).await?)
    }

    pub async fn get_fleet_members(
        &self,
        access_token: &str,
        fleet_id: i64,
    ) -> Result<Vec<FleetMemberEntry>, Error> {
        let path = format!("/fleets/{}/members", fleet_id);

        Ok(self.get(&path, access_token).await?)
    }
}

pub struct FleetService<'a> {
    esi: &'a EsiApi,
}

impl<'a> FleetService<'a> {
    pub fn new(esi: &'a EsiApi) -> Self {
        Self { esi }
    }

    /// Fleet status of the character, with named members when it commands the fleet.
    ///
    /// # Returns
    /// - `Ok(FleetStatusDto)` - Fleet found, `members` is `None` unless the character is FC
    /// - `Err(Error::EsiError(EsiError::NotInFleet))` - Character is not in a fleet
    /// - `Err(Error::EsiError(EsiError::UpstreamApiError))` - An ESI request failed
    pub async fn get_fleet_status(
        &self,
        access_token: &str,
        character_id: i64,
    ) -> Result<FleetStatusDto, Error> {
        let Some(fleet) = self
            .esi
            .get_character_fleet(access_token, character_id)
            .await?
        else {
            return Err(EsiError::NotInFleet(character_id).into());
        };

        let is_fleet_commander = fleet.role == FLEET_COMMANDER_ROLE;

        let members = if is_fleet_commander {
            let entries = self
                .esi
                .get_fleet_members(access_token, fleet.fleet_id)
                .await?;
            let character_ids: Vec<i64> = entries.iter().map(|m| m.character_id).collect();

            let members = self.esi.resolve_character_names(&character_ids).await?;

            tracing::debug!(
                fleet_id = %fleet.fleet_id,
                member_count = members.len(),
                "Resolved fleet members"
            );

            Some(members)
        } else {
            None
        };

        Ok(FleetStatusDto {
            fleet_id: fleet.fleet_id,
            role: fleet.role,
            is_fleet_commander,
            members,
        })
    }
}
