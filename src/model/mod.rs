pub mod api;
pub mod fleet;
pub mod user;
pub mod wallet;
