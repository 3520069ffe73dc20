//! Fixtures creating mock ESI data and endpoints.
//!
//! - `auth` - JWT signing keys, tokens and the EVE SSO endpoints
//! - `esi` - Fleet, wallet journal, name lookup and character endpoints

pub mod auth;
pub mod esi;
