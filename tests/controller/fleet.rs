use axum::{extract::State, http::StatusCode, response::IntoResponse};
use chrono::Duration;
use payout_test_utils::prelude::*;
use pochven_payout::server::controller::fleet::get_fleet;

use super::sign_in;

#[tokio::test]
/// Expect 200 success with members for the fleet commander
async fn returns_fleet_for_commander() -> Result<(), TestError> {
    let fleet_id = 1234567890;
    let test = TestBuilder::new()
        .with_character_fleet_endpoint(1, factory::character_fleet(fleet_id, "fleet_commander"), 1)
        .with_fleet_members_endpoint(fleet_id, vec![1, 2, 3], 1)
        .with_universe_names_endpoint(
            vec![
                factory::universe_name(1, "ConnorJC", "character"),
                factory::universe_name(2, "HogTits", "character"),
                factory::universe_name(3, "Orisis Wessette", "character"),
            ],
            1,
        )
        .build()
        .await?;
    sign_in(&test.session, 1, Duration::minutes(20)).await;

    let result = get_fleet(State(test.to_app_state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 404 not found when the character is not in a fleet
async fn returns_not_found_outside_fleet() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/characters/1/fleet")
                .with_status(404)
                .with_header("content-type", "application/json")
                .with_body(r#"{"error":"Character is not in a fleet"}"#)
                .expect(1)
                .create()
        })
        .build()
        .await?;
    sign_in(&test.session, 1, Duration::minutes(20)).await;

    let result = get_fleet(State(test.to_app_state()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 502 bad gateway when ESI is unavailable
async fn returns_bad_gateway_on_esi_failure() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/characters/1/fleet")
                .with_status(503)
                .expect(1)
                .create()
        })
        .build()
        .await?;
    sign_in(&test.session, 1, Duration::minutes(20)).await;

    let result = get_fleet(State(test.to_app_state()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 401 unauthorized without any ESI request once the login expired
async fn returns_unauthorized_for_expired_login() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_character_fleet_endpoint(1, factory::character_fleet(1, "fleet_commander"), 0)
        .build()
        .await?;
    sign_in(&test.session, 1, Duration::minutes(-1)).await;

    let result = get_fleet(State(test.to_app_state()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    test.assert_mocks();

    Ok(())
}
