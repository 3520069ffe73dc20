//! Helpers shared by the controllers: CSRF validation and access to the session token.

pub mod csrf;
pub mod token;
