use axum::{extract::State, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, fleet::FleetStatusDto},
    server::{
        controller::util::token::require_token, error::Error, model::app::AppState,
        service::esi::fleet::FleetService,
    },
};

pub static FLEET_TAG: &str = "fleet";

/// Fleet the signed in character is in
///
/// Includes the named member list when the character is the fleet commander.
#[utoipa::path(
    get,
    path = "/api/fleet",
    tag = FLEET_TAG,
    responses(
        (status = 200, description = "Fleet status", body = FleetStatusDto),
        (status = 401, description = "Login expired", body = ErrorDto),
        (status = 404, description = "Not signed in or not in a fleet", body = ErrorDto),
        (status = 502, description = "ESI request failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_fleet(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let token = require_token(&session).await?;

    let status = FleetService::new(&state.esi)
        .get_fleet_status(&token.access_token, token.character_id)
        .await?;

    Ok(Json(status))
}
