use axum::{
    extract::{Query, State},
    http::{header::LOCATION, StatusCode},
    response::IntoResponse,
};
use payout_test_utils::prelude::*;
use pochven_payout::server::{
    controller::auth::{callback, CallbackParams},
    model::session::{auth::SessionAuthCsrf, token::SessionToken},
};

fn params(state: &str) -> CallbackParams {
    CallbackParams {
        state: state.to_string(),
        code: "code".to_string(),
    }
}

#[tokio::test]
/// Expect a redirect to the payout tool with the token stored in session
async fn stores_token_and_redirects() -> Result<(), TestError> {
    let character_id = 2114794365;
    let test = TestBuilder::new()
        .with_jwt_endpoints(character_id, "owner_hash")
        .build()
        .await?;
    SessionAuthCsrf::insert(&test.session, "state").await.unwrap();

    let result = callback(
        State(test.to_app_state()),
        test.session.clone(),
        Query(params("state")),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(resp.headers().get(LOCATION).unwrap(), "/payout");

    let token = SessionToken::get(&test.session).await.unwrap();
    assert_eq!(token.map(|t| t.character_id), Some(character_id));
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 400 bad request for a CSRF state mismatch, without contacting EVE SSO
async fn fails_for_csrf_mismatch() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    SessionAuthCsrf::insert(&test.session, "state").await.unwrap();

    let result = callback(
        State(test.to_app_state()),
        test.session.clone(),
        Query(params("other_state")),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(SessionToken::get(&test.session).await.unwrap().is_none());

    Ok(())
}

#[tokio::test]
/// Expect 500 internal server error when login was never started
async fn fails_without_csrf_in_session() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = callback(
        State(test.to_app_state()),
        test.session.clone(),
        Query(params("state")),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
