use axum::{extract::State, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, wallet::WalletJournalEntryDto},
    server::{controller::util::token::require_token, error::Error, model::app::AppState},
};

pub static WALLET_TAG: &str = "wallet";

/// Wallet journal of the signed in character
#[utoipa::path(
    get,
    path = "/api/wallet/journal",
    tag = WALLET_TAG,
    responses(
        (status = 200, description = "Wallet journal entries", body = Vec<WalletJournalEntryDto>),
        (status = 401, description = "Login expired", body = ErrorDto),
        (status = 404, description = "Not signed in", body = ErrorDto),
        (status = 502, description = "ESI request failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_wallet_journal(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let token = require_token(&session).await?;

    let journal = state
        .esi
        .get_wallet_journal(&token.access_token, token.character_id)
        .await?;

    Ok(Json(journal))
}
