//! Declarative setup of the mock ESI server.
//!
//! Endpoints are queued on the builder and created when [`TestBuilder::build`] runs.

use eve_esi::model::character::Character;
use mockito::Mock;
use serde_json::Value;

use crate::{error::TestError, TestContext};

/// Builder for a [`TestContext`] with mock ESI endpoints.
pub struct TestBuilder {
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,

    character_fleet_endpoints: Vec<(i64, Value, usize)>,
    fleet_members_endpoints: Vec<(i64, Vec<i64>, usize)>,
    universe_names_endpoints: Vec<(Vec<Value>, usize)>,
    universe_ids_endpoints: Vec<(Vec<Value>, usize)>,
    wallet_journal_endpoints: Vec<(i64, Vec<Value>, usize)>,
    character_endpoints: Vec<(i64, Character, usize)>,
    jwt_configs: Vec<(i64, String)>, // (character_id, owner_hash)
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            mock_builders: Vec::new(),
            character_fleet_endpoints: Vec::new(),
            fleet_members_endpoints: Vec::new(),
            universe_names_endpoints: Vec::new(),
            universe_ids_endpoints: Vec::new(),
            wallet_journal_endpoints: Vec::new(),
            character_endpoints: Vec::new(),
            jwt_configs: Vec::new(),
        }
    }

    /// Mock `GET /characters/{character_id}/fleet` returning `fleet`.
    ///
    /// # Arguments
    /// - `character_id` - Character the fleet is requested for
    /// - `fleet` - Response body, see [`factory::character_fleet`](crate::fixtures::esi::factory::character_fleet)
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn with_character_fleet_endpoint(
        mut self,
        character_id: i64,
        fleet: Value,
        expected_requests: usize,
    ) -> Self {
        self.character_fleet_endpoints
            .push((character_id, fleet, expected_requests));
        self
    }

    /// Mock `GET /fleets/{fleet_id}/members` listing `character_ids`.
    pub fn with_fleet_members_endpoint(
        mut self,
        fleet_id: i64,
        character_ids: Vec<i64>,
        expected_requests: usize,
    ) -> Self {
        self.fleet_members_endpoints
            .push((fleet_id, character_ids, expected_requests));
        self
    }

    /// Mock `POST /universe/names` returning `names`.
    pub fn with_universe_names_endpoint(mut self, names: Vec<Value>, expected_requests: usize) -> Self {
        self.universe_names_endpoints.push((names, expected_requests));
        self
    }

    /// Mock `POST /universe/ids` returning `characters` as the resolved characters.
    pub fn with_universe_ids_endpoint(
        mut self,
        characters: Vec<Value>,
        expected_requests: usize,
    ) -> Self {
        self.universe_ids_endpoints
            .push((characters, expected_requests));
        self
    }

    /// Mock `GET /characters/{character_id}/wallet/journal` returning `entries`.
    pub fn with_wallet_journal_endpoint(
        mut self,
        character_id: i64,
        entries: Vec<Value>,
        expected_requests: usize,
    ) -> Self {
        self.wallet_journal_endpoints
            .push((character_id, entries, expected_requests));
        self
    }

    /// Mock `GET /characters/{character_id}` returning `character`.
    pub fn with_character_endpoint(
        mut self,
        character_id: i64,
        character: Character,
        expected_requests: usize,
    ) -> Self {
        self.character_endpoints
            .push((character_id, character, expected_requests));
        self
    }

    /// Mock the EVE SSO JWKS and token endpoints for a login as `character_id`.
    pub fn with_jwt_endpoints(mut self, character_id: i64, owner_hash: impl Into<String>) -> Self {
        self.jwt_configs.push((character_id, owner_hash.into()));
        self
    }

    /// Add a custom mock endpoint with full control over the mockito server.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Creates the test context and every queued endpoint.
    ///
    /// Custom endpoints are created first so tests can layer several mocks on the same path.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Ready test environment
    /// - `Err(TestError::EsiError)` - Mock ESI client initialization failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new().await?;
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut context.server));
        }

        for (character_id, fleet, expected) in self.character_fleet_endpoints {
            mocks.push(
                context
                    .esi()
                    .create_character_fleet_endpoint(character_id, fleet, expected),
            );
        }

        for (fleet_id, character_ids, expected) in self.fleet_members_endpoints {
            mocks.push(
                context
                    .esi()
                    .create_fleet_members_endpoint(fleet_id, character_ids, expected),
            );
        }

        for (names, expected) in self.universe_names_endpoints {
            mocks.push(context.esi().create_universe_names_endpoint(names, expected));
        }

        for (characters, expected) in self.universe_ids_endpoints {
            mocks.push(context.esi().create_universe_ids_endpoint(characters, expected));
        }

        for (character_id, entries, expected) in self.wallet_journal_endpoints {
            mocks.push(
                context
                    .esi()
                    .create_wallet_journal_endpoint(character_id, entries, expected),
            );
        }

        for (character_id, character, expected) in self.character_endpoints {
            mocks.push(
                context
                    .esi()
                    .create_character_endpoint(character_id, character, expected),
            );
        }

        for (character_id, owner_hash) in self.jwt_configs {
            mocks.extend(context.auth().create_jwt_endpoints(character_id, &owner_hash));
        }

        context.mocks = mocks;

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
