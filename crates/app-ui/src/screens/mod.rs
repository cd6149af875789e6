//! Application screens
//!
//! Each screen owns its state and produces a serializable view for the
//! renderer. Screens never draw anything themselves.

pub mod home;
pub mod wifi;

pub use home::{HomeHeader, HomeScreen, HomeView};
pub use wifi::{WifiScreen, WifiView};
