use std::collections::HashMap;

use serde::Deserialize;

use crate::{
    model::fleet::CharacterDto,
    server::{error::Error, service::esi::EsiApi},
};

#[derive(Deserialize)]
struct UniverseName {
    category: String,
    id: i64,
    name: String,
}

#[derive(Deserialize)]
struct UniverseIds {
    #[serde(default)]
    characters: Vec<UniverseId>,
}

#[derive(Deserialize)]
struct UniverseId {
    id: i64,
    name: String,
}

impl EsiApi {
    /// Resolves character IDs to names through `POST /universe/names`.
    ///
    /// IDs ESI reports under another category are dropped.
    pub async fn resolve_character_names(
        &self,
        character_ids: &[i64],
    ) -> Result<Vec<CharacterDto>, Error> {
        if character_ids.is_empty() {
            return Ok(Vec::new());
        }

        let names: Vec<UniverseName> = self.post("/universe/names", character_ids).await?;

        Ok(names
            .into_iter()
            .filter(|entry| entry.category == "character")
            .map(|entry| CharacterDto {
                id: entry.id,
                name: entry.name,
            })
            .collect())
    }

    /// Resolves character names to IDs through `POST /universe/ids`.
    ///
    /// Names ESI does not recognise are dropped; the result follows the order of `names`.
    pub async fn resolve_character_ids(&self, names: &[String]) -> Result<Vec<CharacterDto>, Error> {
        if names.is_empty() {
            return Ok(Vec::new());
        }

        let ids: UniverseIds = self.post("/universe/ids", names).await?;

        let mut by_name: HashMap<String, CharacterDto> = ids
            .characters
            .into_iter()
            .map(|entry| {
                (
                    entry.name.to_lowercase(),
                    CharacterDto {
                        id: entry.id,
                        name: entry.name,
                    },
                )
            })
            .collect();

        Ok(names
            .iter()
            .filter_map(|name| by_name.remove(&name.to_lowercase()))
            .collect())
    }
}
