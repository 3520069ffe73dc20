use axum::{
    http::{header::LOCATION, StatusCode},
    response::IntoResponse,
};
use chrono::Duration;
use payout_test_utils::prelude::*;
use pochven_payout::server::{controller::auth::logout, model::session::token::SessionToken};

use super::sign_in;

#[tokio::test]
/// Expect 307 temporary redirect home with the token cleared
async fn clears_session_on_logout() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    sign_in(&test.session, 1, Duration::minutes(20)).await;

    let result = logout(test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(resp.headers().get(LOCATION).unwrap(), "/");
    assert!(SessionToken::get(&test.session).await.unwrap().is_none());

    Ok(())
}

#[tokio::test]
/// Expect 307 temporary redirect even when nobody was signed in
async fn redirects_without_session() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = logout(test.session).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);

    Ok(())
}
