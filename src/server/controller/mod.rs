//! Axum handlers for the payout API.
//!
//! Handlers read the signed in character from the session, call into the services and map
//! results to JSON responses documented with utoipa.

pub mod auth;
pub mod character;
pub mod fleet;
pub mod util;
pub mod wallet;
