//! Server state and session data models.

pub mod app;
pub mod session;
