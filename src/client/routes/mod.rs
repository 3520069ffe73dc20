pub mod home;
pub mod not_found;
pub mod payout;

pub use home::Home;
pub use not_found::NotFound;
pub use payout::PayoutTool;
