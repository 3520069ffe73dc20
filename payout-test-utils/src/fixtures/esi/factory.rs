//! ESI response bodies with standard test values.

use chrono::{DateTime, Utc};
use eve_esi::model::character::Character;
use serde_json::{json, Value};

/// Response of `GET /characters/{character_id}/fleet`.
pub fn character_fleet(fleet_id: i64, role: &str) -> Value {
    json!({
        "fleet_id": fleet_id,
        "role": role,
        "squad_id": -1,
        "wing_id": -1
    })
}

/// Entry of `GET /fleets/{fleet_id}/members`.
pub fn fleet_member(character_id: i64) -> Value {
    json!({
        "character_id": character_id,
        "join_time": "2025-01-01T18:00:00Z",
        "role": "squad_member",
        "role_name": "Squad Member",
        "ship_type_id": 47466,
        "solar_system_id": 30000157,
        "squad_id": 3129411261968i64,
        "takes_fleet_warp": true,
        "wing_id": 2073711261968i64
    })
}

/// Entry of `POST /universe/names`.
pub fn universe_name(id: i64, name: &str, category: &str) -> Value {
    json!({
        "category": category,
        "id": id,
        "name": name
    })
}

/// Character entry of `POST /universe/ids`.
pub fn character(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name
    })
}

/// Entry of `GET /characters/{character_id}/wallet/journal`.
pub fn journal_entry(id: i64, ref_type: &str, amount: f64, first_party_id: i64) -> Value {
    json!({
        "id": id,
        "date": "2025-01-01T19:30:00Z",
        "ref_type": ref_type,
        "amount": amount,
        "balance": 10_000_000_000.0,
        "first_party_id": first_party_id,
        "second_party_id": 2114794365,
        "description": format!("{} deposited cash into character's account", first_party_id)
    })
}

/// Public information of a character in an NPC corporation.
pub fn public_character(corporation_id: i64, alliance_id: Option<i64>) -> Character {
    Character {
        alliance_id,
        birthday: DateTime::parse_from_rfc3339("2018-12-20T16:11:54Z")
            .unwrap()
            .with_timezone(&Utc),
        bloodline_id: 7,
        corporation_id,
        description: Some("description".to_string()),
        faction_id: None,
        gender: "male".to_string(),
        name: "Test Character".to_string(),
        race_id: 8,
        security_status: Some(-0.1),
        title: None,
    }
}
