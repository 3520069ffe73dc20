pub mod model;
pub mod payout;

#[cfg(feature = "server")]
pub mod server;
