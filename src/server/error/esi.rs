use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum EsiError {
    #[error("ESI request to {endpoint} failed with status {status}")]
    UpstreamApiError { endpoint: String, status: u16 },
    #[error("ESI request to {endpoint} failed: {reason}")]
    RequestFailed { endpoint: String, reason: String },
    #[error("Character {0} is not in a fleet")]
    NotInFleet(i64),
}

impl IntoResponse for EsiError {
    fn into_response(self) -> Response {
        match self {
            Self::NotInFleet(character_id) => {
                tracing::debug!(character_id = %character_id, "{}", self);

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: "You are not currently in a fleet".to_string(),
                    }),
                )
                    .into_response()
            }
            err => {
                tracing::warn!("{}", err);

                (
                    StatusCode::BAD_GATEWAY,
                    Json(ErrorDto {
                        error: "EVE Online's ESI did not respond successfully, please try again later."
                            .to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
