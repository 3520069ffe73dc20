use mockito::Mock;

use crate::fixtures::auth::{
    factory::mock_jwt_claims,
    mock::{mock_jwt_keys, mock_jwt_token},
    AuthFixtures,
};

impl<'a> AuthFixtures<'a> {
    /// Mocks `GET /oauth/jwks` and `POST /v2/oauth/token` for an SSO callback.
    ///
    /// The token endpoint hands out a JWT for `character_id` signed with the key served by the
    /// JWKS endpoint.
    pub fn create_jwt_endpoints(&mut self, character_id: i64, owner_hash: &str) -> Vec<Mock> {
        let mock_keys = mock_jwt_keys();
        let mock_token = mock_jwt_token(mock_jwt_claims(character_id, owner_hash));

        let mock_jwt_key_endpoint = self
            .context
            .server
            .mock("GET", "/oauth/jwks")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&mock_keys).unwrap())
            .create();

        let mock_jwt_token_endpoint = self
            .context
            .server
            .mock("POST", "/v2/oauth/token")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&mock_token).unwrap())
            .create();

        vec![mock_jwt_key_endpoint, mock_jwt_token_endpoint]
    }
}
