use axum::{extract::State, http::StatusCode, response::IntoResponse};
use payout_test_utils::{constant::TEST_USER_AGENT, prelude::*};
use pochven_payout::server::{
    controller::auth::login,
    model::{app::AppState, session::auth::SessionAuthCsrf},
};

#[tokio::test]
/// Expect 307 temporary redirect to EVE Online with the CSRF state stored
async fn redirects_to_eve_login() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = login(State(test.to_app_state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert!(SessionAuthCsrf::get(&test.session).await.is_ok());

    Ok(())
}

#[tokio::test]
/// Expect 500 internal server error when the ESI client lacks OAuth2 configuration
async fn fails_when_oauth2_not_configured() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let mut state: AppState = test.to_app_state();
    state.esi_client = eve_esi::Client::new(TEST_USER_AGENT).unwrap();

    let result = login(State(state), test.session).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
