//! HTTP routing and OpenAPI documentation.
//!
//! Every API endpoint is registered here with its utoipa specification; Swagger UI serves the
//! collected document at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the API router with Swagger UI.
///
/// # Registered Endpoints
/// - `GET /api/auth/login` - Start EVE Online SSO login
/// - `GET /api/auth/callback` - SSO callback
/// - `GET /api/auth/logout` - Clear the session
/// - `GET /api/auth/user` - Signed in character
/// - `GET /api/character` - Public profile of the signed in character
/// - `POST /api/characters/resolve` - Resolve character names to IDs
/// - `GET /api/fleet` - Fleet status and members
/// - `GET /api/wallet/journal` - Wallet journal
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Pochven Payout", description = "Pochven Payout API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Authentication API routes"),
        (name = controller::character::CHARACTER_TAG, description = "Character lookup API routes"),
        (name = controller::fleet::FLEET_TAG, description = "Fleet API routes"),
        (name = controller::wallet::WALLET_TAG, description = "Wallet API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::callback))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::get_user))
        .routes(routes!(controller::character::get_character))
        .routes(routes!(controller::character::resolve_characters))
        .routes(routes!(controller::fleet::get_fleet))
        .routes(routes!(controller::wallet::get_wallet_journal))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
