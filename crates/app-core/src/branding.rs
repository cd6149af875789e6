//! QR Studio Branding
//!
//! Branding constants shown on the home screen header and the about page.

/// Application name
pub const APP_NAME: &str = "QR Studio";

/// Application name short form
pub const APP_NAME_SHORT: &str = "Studio";

/// Application tagline
pub const APP_TAGLINE: &str = "Create QR codes in seconds";

/// Application version (from Cargo.toml)
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Logo asset path (relative to the assets directory)
pub const LOGO_PATH: &str = "images/logo.png";

/// Brand colors
pub mod colors {
    /// Primary brand color (indigo)
    pub const PRIMARY: &str = "#4F46E5";

    /// Secondary brand color (teal)
    pub const SECONDARY: &str = "#14B8A6";

    /// Accent color (amber)
    pub const ACCENT: &str = "#F59E0B";

    /// Background color (light theme)
    pub const BACKGROUND_LIGHT: &str = "#F8FAFC";

    /// Background color (dark theme)
    pub const BACKGROUND_DARK: &str = "#0F172A";
}

/// Copyright information
pub mod copyright {
    /// Copyright year
    pub const YEAR: &str = "2025";

    /// Copyright holder
    pub const HOLDER: &str = "QR Studio Team";

    /// License
    pub const LICENSE: &str = "MIT";

    /// Full copyright notice
    pub fn notice() -> String {
        format!("© {} {}. Licensed under {}.", YEAR, HOLDER, LICENSE)
    }
}

/// About information for the app
pub mod about {
    use super::*;

    /// Full about text
    pub fn text() -> String {
        format!(
            "{} v{}\n\n{}\n\nGenerate QR codes for links, text, WiFi networks and more.\n\n{}",
            APP_NAME,
            APP_VERSION,
            APP_TAGLINE,
            copyright::notice()
        )
    }
}
