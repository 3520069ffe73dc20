use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Duration;
use payout_test_utils::prelude::*;
use pochven_payout::{
    model::fleet::ResolveNamesDto,
    server::controller::character::{get_character, resolve_characters},
};

use super::sign_in;

#[tokio::test]
/// Expect 200 success with the public profile
async fn returns_character_profile() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_character_endpoint(1, factory::public_character(1000125, None), 1)
        .build()
        .await?;
    sign_in(&test.session, 1, Duration::minutes(20)).await;

    let result = get_character(State(test.to_app_state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 200 success for resolved names
async fn resolves_character_names() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_universe_ids_endpoint(vec![factory::character(1, "ConnorJC")], 1)
        .build()
        .await?;
    sign_in(&test.session, 1, Duration::minutes(20)).await;

    let result = resolve_characters(
        State(test.to_app_state()),
        test.session.clone(),
        Json(ResolveNamesDto {
            names: vec!["ConnorJC".to_string()],
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 404 not found without a login and no ESI request
async fn rejects_resolve_without_login() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_universe_ids_endpoint(Vec::new(), 0)
        .build()
        .await?;

    let result = resolve_characters(
        State(test.to_app_state()),
        test.session.clone(),
        Json(ResolveNamesDto {
            names: vec!["ConnorJC".to_string()],
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    test.assert_mocks();

    Ok(())
}
