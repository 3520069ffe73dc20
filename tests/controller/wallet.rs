use axum::{extract::State, http::StatusCode, response::IntoResponse};
use chrono::Duration;
use payout_test_utils::prelude::*;
use pochven_payout::server::controller::wallet::get_wallet_journal;

use super::sign_in;

#[tokio::test]
/// Expect 200 success with the signed in character's journal
async fn returns_wallet_journal() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_wallet_journal_endpoint(
            1,
            vec![factory::journal_entry(10, "player_donation", 1_770_000_000.0, 2)],
            1,
        )
        .build()
        .await?;
    sign_in(&test.session, 1, Duration::minutes(20)).await;

    let result = get_wallet_journal(State(test.to_app_state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 404 not found without a login
async fn returns_not_found_without_login() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_wallet_journal_endpoint(1, Vec::new(), 0)
        .build()
        .await?;

    let result = get_wallet_journal(State(test.to_app_state()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    test.assert_mocks();

    Ok(())
}
