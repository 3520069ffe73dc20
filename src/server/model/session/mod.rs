//! Typed wrappers around the data kept in a user's session.
//!
//! Sessions live in an in-memory store; they only hold the login CSRF state and the EVE SSO
//! access token of the signed in character.

pub mod auth;
pub mod token;
