//! Error types for the payout server.
//!
//! Each domain has its own `thiserror` enum mapped to an HTTP response; [`Error`] aggregates
//! them with the library errors that can surface from a request.

pub mod auth;
pub mod config;
pub mod esi;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, esi::EsiError},
};

/// Main error type for the payout server.
///
/// Domain errors carry their own response mapping, everything else becomes a logged
/// 500 Internal Server Error.
#[derive(Error, Debug)]
pub enum Error {
    /// Missing or invalid environment variables.
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Session, CSRF and token expiry errors.
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Failed ESI request for fleet, wallet or name data.
    #[error(transparent)]
    EsiError(#[from] EsiError),
    /// EVE SSO or ESI client error from `eve_esi`.
    #[error(transparent)]
    EveEsiError(#[from] eve_esi::Error),
    /// HTTP client construction error.
    #[error(transparent)]
    ReqwestError(#[from] reqwest::Error),
    /// Session retrieval, storage or serialization error.
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::EsiError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wraps any displayable error into a 500 Internal Server Error response.
///
/// The full error is logged, the client only receives a generic message.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
