//! Payout engine shared by the client and server.
//!
//! Everything here is synchronous and free of I/O: the roster and settings go in, groups,
//! shares, the percentage breakdown and pay-in status come out. Invalid states are reported as
//! [`PayoutError`] instead of being folded into zero or NaN figures.

pub mod breakdown;
pub mod error;
pub mod group;
pub mod import;
pub mod member;
pub mod reconcile;
pub mod refresh;
pub mod roster;
pub mod session;
pub mod settings;
pub mod share;
pub mod tax;

pub use error::PayoutError;
pub use member::FleetMember;
pub use session::PayoutSession;
