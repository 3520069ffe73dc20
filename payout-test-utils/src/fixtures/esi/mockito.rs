use eve_esi::model::character::Character;
use mockito::{Matcher, Mock};
use serde_json::Value;

use crate::fixtures::esi::{factory, EsiFixtures};

impl<'a> EsiFixtures<'a> {
    fn json_endpoint(
        &mut self,
        method: &str,
        path: &str,
        body: String,
        expected_requests: usize,
    ) -> Mock {
        self.context
            .server
            .mock(method, path)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(expected_requests)
            .create()
    }

    /// `GET /characters/{character_id}/fleet`
    pub fn create_character_fleet_endpoint(
        &mut self,
        character_id: i64,
        fleet: Value,
        expected_requests: usize,
    ) -> Mock {
        self.json_endpoint(
            "GET",
            &format!("/characters/{}/fleet", character_id),
            fleet.to_string(),
            expected_requests,
        )
    }

    /// `GET /fleets/{fleet_id}/members`
    pub fn create_fleet_members_endpoint(
        &mut self,
        fleet_id: i64,
        character_ids: Vec<i64>,
        expected_requests: usize,
    ) -> Mock {
        let members: Vec<Value> = character_ids
            .into_iter()
            .map(factory::fleet_member)
            .collect();

        self.json_endpoint(
            "GET",
            &format!("/fleets/{}/members", fleet_id),
            Value::from(members).to_string(),
            expected_requests,
        )
    }

    /// `POST /universe/names`
    pub fn create_universe_names_endpoint(
        &mut self,
        names: Vec<Value>,
        expected_requests: usize,
    ) -> Mock {
        self.json_endpoint(
            "POST",
            "/universe/names",
            Value::from(names).to_string(),
            expected_requests,
        )
    }

    /// `POST /universe/ids`, only the `characters` category is filled
    pub fn create_universe_ids_endpoint(
        &mut self,
        characters: Vec<Value>,
        expected_requests: usize,
    ) -> Mock {
        let body = serde_json::json!({ "characters": characters });

        self.json_endpoint("POST", "/universe/ids", body.to_string(), expected_requests)
    }

    /// `GET /characters/{character_id}/wallet/journal`, matching any page
    pub fn create_wallet_journal_endpoint(
        &mut self,
        character_id: i64,
        entries: Vec<Value>,
        expected_requests: usize,
    ) -> Mock {
        self.context
            .server
            .mock(
                "GET",
                format!("/characters/{}/wallet/journal", character_id).as_str(),
            )
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(Value::from(entries).to_string())
            .expect(expected_requests)
            .create()
    }

    /// `GET /characters/{character_id}`
    pub fn create_character_endpoint(
        &mut self,
        character_id: i64,
        character: Character,
        expected_requests: usize,
    ) -> Mock {
        self.json_endpoint(
            "GET",
            &format!("/characters/{}", character_id),
            serde_json::to_string(&character).unwrap(),
            expected_requests,
        )
    }
}
