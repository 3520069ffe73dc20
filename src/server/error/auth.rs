use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::InternalServerError};

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("No EVE Online character is signed in for this session")]
    NotSignedIn,
    #[error("Access token for character {0} has expired")]
    AuthenticationExpired(i64),
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,
    #[error("Failed to login user due to CSRF state present in session store but without a value")]
    CsrfMissingValue,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::NotSignedIn => {
                tracing::debug!("{}", self);

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: "User not found".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::AuthenticationExpired(character_id) => {
                tracing::debug!(character_id = %character_id, "{}", self);

                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: "Your EVE Online login has expired, please login again.".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::CsrfValidationFailed => {
                tracing::debug!("{}", self);

                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto {
                        error: "There was an issue logging you in, please try again.".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::CsrfMissingValue => InternalServerError(self).into_response(),
        }
    }
}
