use std::sync::Arc;

use mockito::{Mock, Server, ServerGuard};
use tower_sessions::{MemoryStore, Session};

use crate::{
    constant::{TEST_CALLBACK_URL, TEST_ESI_CLIENT_ID, TEST_ESI_CLIENT_SECRET, TEST_USER_AGENT},
    error::TestError,
};

/// Test environment returned by [`TestBuilder::build`](crate::TestBuilder::build).
///
/// ```ignore
/// let test = TestBuilder::new()
///     .with_wallet_journal_endpoint(1, vec![factory::journal_entry(1, "player_donation", 1e6, 2)], 1)
///     .build()
///     .await?;
///
/// let state: AppState = test.to_app_state();
///
/// test.assert_mocks();
/// ```
pub struct TestContext {
    /// ESI client configured to use the mock server
    pub esi_client: eve_esi::Client,
    /// Session backed by an in-memory store
    pub session: Session,

    pub(crate) server: ServerGuard,
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    /// Convert the ESI client and mock server URL into any type constructible from them.
    ///
    /// Keeps this crate free of a dependency on the server's `AppState`.
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<(eve_esi::Client, String)>,
    {
        T::from((self.esi_client.clone(), self.server.url()))
    }

    /// Base URL of the mock ESI server.
    pub fn server_url(&self) -> String {
        self.server.url()
    }

    pub(crate) async fn new() -> Result<Self, TestError> {
        let mock_server = Server::new_async().await;
        let mock_server_url = mock_server.url();

        let esi_config = eve_esi::Config::builder()
            .esi_url(&mock_server_url)
            .token_url(&format!("{}/v2/oauth/token", mock_server_url))
            .jwk_url(&format!("{}/oauth/jwks", mock_server_url))
            .build()?;

        let esi_client = eve_esi::Client::builder()
            .config(esi_config)
            .user_agent(TEST_USER_AGENT)
            .client_id(TEST_ESI_CLIENT_ID)
            .client_secret(TEST_ESI_CLIENT_SECRET)
            .callback_url(TEST_CALLBACK_URL)
            .build()?;

        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        Ok(TestContext {
            server: mock_server,
            esi_client,
            session,
            mocks: Vec::new(),
        })
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
