//! Core application logic for QR Studio
//!
//! This crate contains the framework-independent pieces of the app:
//! the WiFi network name validator, the WiFi form model, the supported
//! QR content types, and branding constants.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod branding;
pub mod qr_type;
pub mod ssid;
pub mod wifi;

pub use qr_type::QrType;
pub use ssid::{
    character_count_label, validate, CharacterCount, SsidField, SsidIssue, ValidationResult,
    MAX_SSID_LENGTH,
};
pub use wifi::{WifiError, WifiNetwork, WifiSecurity};
