//! Server application core modules.
//!
//! The server signs the fleet commander in with EVE Online SSO, keeps the access token in an
//! in-memory session and proxies the ESI reads the payout page needs: fleet members, wallet
//! journal and character name lookups.

pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
