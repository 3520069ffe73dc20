use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect},
    Json,
};
use dioxus_logger::tracing;
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, user::IdentityDto},
    server::{
        controller::util::{csrf::validate_csrf, token::require_token},
        error::Error,
        model::{
            app::AppState,
            session::{auth::SessionAuthCsrf, token::SessionToken},
        },
        service::auth::{callback::callback_service, login::login_service},
    },
};

pub static AUTH_TAG: &str = "auth";

#[derive(Deserialize)]
pub struct CallbackParams {
    pub state: String,
    pub code: String,
}

/// Login route to initiate login with EVE Online
///
/// Redirects to EVE Online's SSO requesting the fleet and wallet scopes.
#[utoipa::path(
    get,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Redirect to EVE Online's login page"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let login = login_service(&state.esi_client)?;

    SessionAuthCsrf::insert(&session, &login.state).await?;

    Ok(Redirect::temporary(&login.login_url))
}

/// Callback route EVE Online redirects to after a successful login
///
/// Validates the CSRF state, exchanges the code for an access token and keeps it in the session.
#[utoipa::path(
    get,
    path = "/api/auth/callback",
    tag = AUTH_TAG,
    params(
        ("state" = String, Query, description = "CSRF state issued at login"),
        ("code" = String, Query, description = "Authorization code from EVE Online")
    ),
    responses(
        (status = 307, description = "Logged in, redirect to the payout tool"),
        (status = 400, description = "CSRF state mismatch", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    params: Query<CallbackParams>,
) -> Result<impl IntoResponse, Error> {
    validate_csrf(&session, &params.0.state).await?;

    let token = callback_service(&state.esi_client, &params.0.code).await?;

    SessionToken::insert(&session, &token).await?;

    tracing::info!(
        character_id = %token.character_id,
        "Character logged in"
    );

    Ok(Redirect::temporary("/payout"))
}

/// Logs the user out by clearing their session
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Logged out, redirect to the home page"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    // Clearing a session without data errors, only clear when someone is signed in
    if SessionToken::get(&session).await?.is_some() {
        session.clear().await;
    }

    Ok(Redirect::temporary("/"))
}

/// Character signed in with the current session
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Signed in character", body = IdentityDto),
        (status = 401, description = "Login expired, session cleared", body = ErrorDto),
        (status = 404, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(session: Session) -> Result<impl IntoResponse, Error> {
    let token = require_token(&session).await?;

    Ok(Json(token.identity()))
}
