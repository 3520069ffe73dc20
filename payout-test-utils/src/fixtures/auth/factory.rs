use chrono::Utc;
use eve_esi::model::oauth2::EveJwtClaims;

/// JWT claims shaped like EVE Online SSO's, expiring in 15 minutes.
pub fn mock_jwt_claims(character_id: i64, owner_hash: &str) -> EveJwtClaims {
    let now = Utc::now();
    EveJwtClaims {
        iss: "https://login.eveonline.com".to_string(),
        sub: format!("CHARACTER:EVE:{}", character_id),
        aud: vec!["client_id".to_string()],
        jti: "test_jti".to_string(),
        kid: "test_kid".to_string(),
        tenant: "tranquility".to_string(),
        region: "world".to_string(),
        exp: now + chrono::Duration::seconds(900),
        iat: now,
        scp: vec![
            "esi-wallet.read_character_wallet.v1".to_string(),
            "esi-fleets.read_fleet.v1".to_string(),
        ],
        name: "Test Character".to_string(),
        owner: owner_hash.to_string(),
        azp: "test_azp".to_string(),
    }
}
