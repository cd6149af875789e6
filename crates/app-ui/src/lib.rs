//! User interface for QR Studio
//!
//! This crate provides the UI layer, including components,
//! screens, navigation, theming, and design system primitives.
//! Nothing here draws pixels: screens produce serializable views that an
//! external renderer turns into widgets.
//!
//! # Design System
//!
//! - Primary: Indigo (#4F46E5)
//! - Secondary: Teal (#14B8A6)
//! - Accent: Amber (#F59E0B)
//!
//! Two themes are supported, [`theme::ThemeName::Light`] and
//! [`theme::ThemeName::Dark`], switched from the home screen header.
//!
//! # Modules
//!
//! - [`theme`] - Theme provider, color palettes, and gradients
//! - [`tokens`] - Design tokens (spacing, sizing, breakpoints, motion)
//! - [`typography`] - Typography system and text styles
//! - [`components`] - UI component library
//! - [`screens`] - Application screens
//! - [`navigation`] - Navigation stack
//!
//! # Example
//!
//! ```rust
//! use app_ui::components::SsidInput;
//! use app_ui::theme::{get_theme, ThemeName};
//!
//! let theme = get_theme(ThemeName::Dark);
//! let mut input = SsidInput::new();
//! input.handle_input("HomeWiFi");
//!
//! let props = input.render(&theme);
//! assert_eq!(props.counter_label, "8/32");
//! assert!(props.error.is_none());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod components;
pub mod navigation;
pub mod screens;
pub mod theme;
pub mod tokens;
pub mod typography;

// Re-export commonly used types
pub use theme::{
    dark_theme, get_theme, light_theme, FontConfig, FontFamily, Gradient, Palette, Theme,
    ThemeColors, ThemeName, ThemeState,
};

pub use tokens::{border, breakpoints, duration, easing, radius, shadows, sizing, spacing, Breakpoint, Shadow};

pub use typography::{font_size, TextStyle, Typography, TypographyVariant};

pub use navigation::{NavigationAnimation, NavigationStack, Route, StackEntry};

pub use components::{clamp_to_max_length, SsidInput, SsidInputProps};

pub use screens::{HomeScreen, HomeView, WifiScreen, WifiView};
