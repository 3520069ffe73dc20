#[cfg(feature = "web")]
pub mod api;
pub mod format;
