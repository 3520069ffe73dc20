//! Placeholder ESI client configuration shared by all tests; none of these are real credentials.

pub static TEST_USER_AGENT: &str =
    "PochvenPayoutTest/1.0 (contact@example.com; +https://github.com/autumn-order/pochven-payout)";

pub static TEST_ESI_CLIENT_ID: &str = "esi_client_id";

pub static TEST_ESI_CLIENT_SECRET: &str = "esi_client_secret";

pub static TEST_CALLBACK_URL: &str = "http://localhost:8080/api/auth/callback";
