use axum::{extract::State, response::IntoResponse, Json};
use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        fleet::{CharacterDto, ResolveNamesDto},
        user::PublicCharacterDto,
    },
    server::{controller::util::token::require_token, error::Error, model::app::AppState},
};

pub static CHARACTER_TAG: &str = "character";

/// Public profile of the signed in character
#[utoipa::path(
    get,
    path = "/api/character",
    tag = CHARACTER_TAG,
    responses(
        (status = 200, description = "Character profile", body = PublicCharacterDto),
        (status = 401, description = "Login expired", body = ErrorDto),
        (status = 404, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_character(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let token = require_token(&session).await?;

    let character = state
        .esi_client
        .character()
        .get_character_public_information(token.character_id)
        .await?;

    Ok(Json(PublicCharacterDto {
        id: token.character_id,
        name: character.name,
        corporation_id: character.corporation_id,
        alliance_id: character.alliance_id,
        birthday: character.birthday,
    }))
}

/// Resolves pasted character names to character IDs
///
/// Unknown names are left out of the response.
#[utoipa::path(
    post,
    path = "/api/characters/resolve",
    tag = CHARACTER_TAG,
    request_body = ResolveNamesDto,
    responses(
        (status = 200, description = "Resolved characters", body = Vec<CharacterDto>),
        (status = 401, description = "Login expired", body = ErrorDto),
        (status = 404, description = "Not signed in", body = ErrorDto),
        (status = 502, description = "ESI request failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn resolve_characters(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<ResolveNamesDto>,
) -> Result<impl IntoResponse, Error> {
    require_token(&session).await?;

    let characters = state.esi.resolve_character_ids(&body.names).await?;

    tracing::debug!(
        requested = body.names.len(),
        resolved = characters.len(),
        "Resolved character names"
    );

    Ok(Json(characters))
}
