use axum::{http::StatusCode, response::IntoResponse};
use chrono::Duration;
use payout_test_utils::prelude::*;
use pochven_payout::server::{controller::auth::get_user, model::session::token::SessionToken};

use super::sign_in;

#[tokio::test]
/// Expect 200 success for a signed in character
async fn returns_signed_in_character() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    sign_in(&test.session, 1, Duration::minutes(20)).await;

    let result = get_user(test.session).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 404 not found without a login
async fn returns_not_found_without_login() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = get_user(test.session).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect 401 unauthorized and a cleared session once the token expired
async fn returns_unauthorized_for_expired_login() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    sign_in(&test.session, 1, Duration::minutes(-1)).await;

    let result = get_user(test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert!(SessionToken::get(&test.session).await.unwrap().is_none());

    Ok(())
}
