use dioxus_logger::tracing;
use oauth2::TokenResponse;

use crate::server::{error::Error, model::session::token::SessionToken};

/// Exchanges the SSO authorization code for a validated access token.
///
/// # Returns
/// - `Ok(SessionToken)` - Token with the character it was issued for
/// - `Err(Error::EveEsiError)` - Token exchange or JWT validation failed
pub async fn callback_service(
    esi_client: &eve_esi::Client,
    code: &str,
) -> Result<SessionToken, Error> {
    let token = esi_client.oauth2().get_token(code).await?;

    let access_token = token.access_token().secret().to_string();
    let claims = esi_client
        .oauth2()
        .validate_token(access_token.clone())
        .await?;

    let character_id = claims.character_id()?;

    tracing::debug!(character_id = %character_id, "Validated EVE SSO token");

    Ok(SessionToken {
        access_token,
        character_id,
        character_name: claims.name,
        expires_at: claims.exp,
    })
}

#[cfg(test)]
mod tests {
    use payout_test_utils::prelude::*;

    use super::callback_service;

    #[tokio::test]
    /// Expect the token to carry the character from the JWT claims
    async fn returns_token_for_character() -> Result<(), TestError> {
        let character_id = 2114794365;
        let test = TestBuilder::new()
            .with_jwt_endpoints(character_id, "owner_hash")
            .build()
            .await?;

        let result = callback_service(&test.esi_client, "code").await;

        assert!(result.is_ok());
        let token = result.unwrap();
        assert_eq!(token.character_id, character_id);
        assert_eq!(token.character_name, "Test Character");
        assert!(!token.is_expired());
        test.assert_mocks();

        Ok(())
    }

    #[tokio::test]
    /// Expect an error when the token endpoint rejects the code
    async fn fails_when_token_exchange_fails() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_mock_endpoint(|server| {
                server
                    .mock("POST", "/v2/oauth/token")
                    .with_status(400)
                    .with_header("content-type", "application/json")
                    .with_body(r#"{"error":"invalid_grant"}"#)
                    .create()
            })
            .build()
            .await?;

        let result = callback_service(&test.esi_client, "code").await;

        assert!(result.is_err());

        Ok(())
    }
}
