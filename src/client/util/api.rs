//! Requests to the payout server's API from the browser.

use dioxus::prelude::*;
use dioxus_logger::tracing;
use reqwasm::http::{Request, RequestCredentials, Response};
use thiserror::Error;

use crate::{
    client::store::user::UserState,
    model::{
        api::ErrorDto,
        fleet::{CharacterDto, FleetStatusDto, ResolveNamesDto},
        user::IdentityDto,
        wallet::WalletJournalEntryDto,
    },
};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The session expired or was never created, the server already cleared it
    #[error("Your session has expired, please sign in again")]
    Unauthorized,
    #[error("{0}")]
    NotFound(String),
    /// EVE Online's API failed or refused the request
    #[error("EVE Online's API is unavailable: {0}")]
    Upstream(String),
    #[error("Request failed: {0}")]
    Other(String),
}

/// Sends the user back to the sign in page when the server no longer knows their session.
pub fn clear_on_unauthorized(mut user_store: Store<UserState>, err: &ApiError) {
    if matches!(err, ApiError::Unauthorized) {
        tracing::debug!("Session expired, clearing signed in character");
        user_store.write().sign_out();
    }
}

/// Retrieve the signed in character, `None` when nobody is signed in
pub async fn get_user() -> Result<Option<IdentityDto>, ApiError> {
    let response = send(Request::get("/api/auth/user")).await?;

    match response.status() {
        200 => parse(&response).await.map(Some),
        404 => Ok(None),
        _ => Err(error_from_response(&response).await),
    }
}

/// Retrieve the fleet of the signed in character, `None` when not in a fleet
pub async fn get_fleet() -> Result<Option<FleetStatusDto>, ApiError> {
    let response = send(Request::get("/api/fleet")).await?;

    match response.status() {
        200 => parse(&response).await.map(Some),
        404 => Ok(None),
        _ => Err(error_from_response(&response).await),
    }
}

/// Resolve pasted character names to IDs, unknown names are left out
pub async fn resolve_characters(names: Vec<String>) -> Result<Vec<CharacterDto>, ApiError> {
    let body = serde_json::to_string(&ResolveNamesDto { names })
        .map_err(|e| ApiError::Other(format!("Failed to serialize names: {}", e)))?;

    let request = Request::post("/api/characters/resolve")
        .header("Content-Type", "application/json")
        .body(body);
    let response = send(request).await?;

    match response.status() {
        200 => parse(&response).await,
        _ => Err(error_from_response(&response).await),
    }
}

/// Retrieve the wallet journal of the signed in character
pub async fn get_wallet_journal() -> Result<Vec<WalletJournalEntryDto>, ApiError> {
    let response = send(Request::get("/api/wallet/journal")).await?;

    match response.status() {
        200 => parse(&response).await,
        _ => Err(error_from_response(&response).await),
    }
}

async fn send(request: Request) -> Result<Response, ApiError> {
    request
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| ApiError::Other(format!("Failed to send request: {}", e)))
}

async fn parse<T: serde::de::DeserializeOwned>(response: &Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Other(format!("Failed to parse response: {}", e)))
}

async fn error_from_response(response: &Response) -> ApiError {
    let status = response.status();

    let message = match response.json::<ErrorDto>().await {
        Ok(error_dto) => error_dto.error,
        Err(_) => response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string()),
    };

    match status {
        401 => ApiError::Unauthorized,
        404 => ApiError::NotFound(message),
        502 => ApiError::Upstream(message),
        _ => ApiError::Other(format!("status {}: {}", status, message)),
    }
}
