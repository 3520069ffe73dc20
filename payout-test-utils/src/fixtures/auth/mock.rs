//! Signed JWT tokens and the matching key set.
//!
//! A single RSA key pair is generated per test binary and shared by every test.

use std::{sync::OnceLock, time::Duration};

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use eve_esi::model::oauth2::{EveJwtClaims, EveJwtKey, EveJwtKeys};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use oauth2::{
    basic::BasicTokenType, AccessToken, EmptyExtraTokenFields, RefreshToken, StandardTokenResponse,
};
use openssl::{pkey::Private, rsa::Rsa};

pub static RSA_KEY_ID: &str = "JWT-Signature-Key-1";

static RSA_KEY: OnceLock<Rsa<Private>> = OnceLock::new();

fn rsa_key() -> &'static Rsa<Private> {
    RSA_KEY.get_or_init(|| Rsa::generate(2048).expect("Failed to generate RSA test key"))
}

/// Key set EVE SSO would serve from `/oauth/jwks` for the test key.
pub fn mock_jwt_keys() -> EveJwtKeys {
    let rsa = rsa_key();

    let n = URL_SAFE_NO_PAD.encode(rsa.n().to_vec());
    let e = URL_SAFE_NO_PAD.encode(rsa.e().to_vec());

    EveJwtKeys {
        skip_unresolved_json_web_keys: false,
        keys: vec![
            EveJwtKey::RS256 {
                e,
                kid: RSA_KEY_ID.to_string(),
                kty: "RSA".to_string(),
                n,
                r#use: "sig".to_string(),
            },
            // EVE also publishes an ES256 key, unused for validation
            EveJwtKey::ES256 {
                crv: "P-256".to_string(),
                kid: "JWT-Signature-Key-2".to_string(),
                kty: "EC".to_string(),
                r#use: "sig".to_string(),
                x: "ITcDYJ8WVpDO4QtZ169xXUt7GB1Y6-oMKIwJ3nK1tFU".to_string(),
                y: "ZAJr0f4V2Eu7xBgLMgQBdJ2DZ2mp8JykOhX4XgU_UEY".to_string(),
            },
        ],
    }
}

/// Token response with `claims` signed by the test key.
pub fn mock_jwt_token(
    claims: EveJwtClaims,
) -> StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType> {
    let private_key = rsa_key()
        .private_key_to_pem()
        .expect("Failed to export RSA test key");
    let encoding_key =
        EncodingKey::from_rsa_pem(&private_key).expect("Failed to create encoding key");

    let mut header = Header::new(Algorithm::RS256);
    header.kid = Some(RSA_KEY_ID.to_string());

    let access_token_secret =
        encode(&header, &claims, &encoding_key).expect("Failed to encode token");

    let mut token = StandardTokenResponse::new(
        AccessToken::new(access_token_secret),
        BasicTokenType::Bearer,
        EmptyExtraTokenFields {},
    );

    token.set_expires_in(Some(&Duration::from_secs(1200)));
    token.set_refresh_token(Some(RefreshToken::new(
        "mock_refresh_token_value".to_string(),
    )));

    token
}
