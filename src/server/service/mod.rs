//! Service layer between the controllers and EVE Online.
//!
//! `auth` drives the EVE SSO flow through `eve_esi`, `esi` performs the authenticated fleet,
//! wallet and name lookups the payout page needs.

pub mod auth;
pub mod esi;
