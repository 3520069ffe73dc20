//! EVE Online SSO login flow.

pub mod callback;
pub mod login;

/// ESI scopes requested at login: reading the FC's fleet and wallet journal.
pub const LOGIN_SCOPES: [&str; 2] = [
    "esi-wallet.read_character_wallet.v1",
    "esi-fleets.read_fleet.v1",
];
