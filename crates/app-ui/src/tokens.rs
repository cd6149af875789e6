//! Design tokens for QR Studio
//!
//! Spacing, sizing, radii, elevation, breakpoints and motion values shared by
//! every component. Values follow a 4px base grid.

use serde::{Deserialize, Serialize};

// =============================================================================
// Spacing Tokens
// =============================================================================

/// Spacing scale in logical pixels
pub mod spacing {
    /// 4px - Extra small
    pub const XS: f32 = 4.0;
    /// 8px - Small
    pub const SM: f32 = 8.0;
    /// 12px - Medium-small
    pub const MS: f32 = 12.0;
    /// 16px - Medium (default screen padding)
    pub const MD: f32 = 16.0;
    /// 24px - Large
    pub const LG: f32 = 24.0;
    /// 32px - Extra large
    pub const XL: f32 = 32.0;
    /// 48px - 2x large
    pub const XXL: f32 = 48.0;

    /// Get spacing value by name
    pub fn get(name: &str) -> Option<f32> {
        match name {
            "xs" => Some(XS),
            "sm" => Some(SM),
            "ms" => Some(MS),
            "md" => Some(MD),
            "lg" => Some(LG),
            "xl" => Some(XL),
            "xxl" => Some(XXL),
            _ => None,
        }
    }
}

// =============================================================================
// Sizing Tokens
// =============================================================================

/// Size tokens for component dimensions
pub mod sizing {
    /// Icon sizes
    pub mod icon {
        /// Small icon (16px)
        pub const SM: f32 = 16.0;
        /// Medium icon (24px)
        pub const MD: f32 = 24.0;
        /// Large icon (32px)
        pub const LG: f32 = 32.0;
        /// Card icon badge (40px)
        pub const CARD: f32 = 40.0;
    }

    /// Button sizes
    pub mod button {
        /// Icon button (40px square)
        pub const ICON: f32 = 40.0;
        /// Standard button height (48px)
        pub const HEIGHT: f32 = 48.0;
        /// Horizontal padding (24px)
        pub const PADDING_X: f32 = 24.0;
    }

    /// Input field sizes
    pub mod input {
        /// Input height (56px)
        pub const HEIGHT: f32 = 56.0;
        /// Horizontal content padding (16px)
        pub const PADDING_X: f32 = 16.0;
    }

    /// Home-screen feature cards
    pub mod card {
        /// Minimum card height (120px)
        pub const MIN_HEIGHT: f32 = 120.0;
        /// Inner padding (16px)
        pub const PADDING: f32 = 16.0;
    }

    /// Branded header logo (72px)
    pub const LOGO: f32 = 72.0;

    /// Generated QR code preview edge (240px)
    pub const QR_PREVIEW: f32 = 240.0;
}

// =============================================================================
// Border Radius Tokens
// =============================================================================

/// Border radius tokens
pub mod radius {
    /// No radius (0px)
    pub const NONE: f32 = 0.0;
    /// Small radius (8px) - inputs
    pub const SM: f32 = 8.0;
    /// Medium radius (12px) - buttons
    pub const MD: f32 = 12.0;
    /// Large radius (16px) - cards
    pub const LG: f32 = 16.0;
    /// Extra large radius (24px) - sheets, header
    pub const XL: f32 = 24.0;
    /// Full/round radius (9999px)
    pub const FULL: f32 = 9999.0;
}

/// Border width tokens
pub mod border {
    /// Resting input border (1px)
    pub const THIN: f32 = 1.0;
    /// Focused input border (2px)
    pub const FOCUSED: f32 = 2.0;
}

// =============================================================================
// Elevation Tokens
// =============================================================================

/// Shadow definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    /// Horizontal offset
    pub offset_x: f32,
    /// Vertical offset
    pub offset_y: f32,
    /// Blur radius
    pub blur: f32,
    /// Spread radius
    pub spread: f32,
    /// Shadow color (with alpha)
    pub color: String,
}

impl Shadow {
    /// Create a new shadow
    pub fn new(offset_x: f32, offset_y: f32, blur: f32, spread: f32, color: &str) -> Self {
        Self { offset_x, offset_y, blur, spread, color: color.to_string() }
    }
}

/// Elevation presets; the color comes from the active theme's shadow color
pub mod shadows {
    use super::Shadow;

    /// Flat surface
    pub fn none() -> Shadow {
        Shadow::new(0.0, 0.0, 0.0, 0.0, "transparent")
    }

    /// Resting card
    pub fn card(color: &str) -> Shadow {
        Shadow::new(0.0, 2.0, 8.0, 0.0, color)
    }

    /// Pressed or hovered card
    pub fn raised(color: &str) -> Shadow {
        Shadow::new(0.0, 8.0, 24.0, -4.0, color)
    }
}

// =============================================================================
// Breakpoint Tokens
// =============================================================================

/// Window size class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    /// Phones in portrait (< 600px)
    Compact,
    /// Tablets and foldables (>= 600px)
    Medium,
    /// Desktop windows (>= 840px)
    Expanded,
}

/// Breakpoint widths
pub mod breakpoints {
    /// Medium breakpoint (600px)
    pub const MEDIUM: u32 = 600;
    /// Expanded breakpoint (840px)
    pub const EXPANDED: u32 = 840;

    /// Size class for a window width
    pub fn current(width: u32) -> super::Breakpoint {
        if width >= EXPANDED {
            super::Breakpoint::Expanded
        } else if width >= MEDIUM {
            super::Breakpoint::Medium
        } else {
            super::Breakpoint::Compact
        }
    }
}

// =============================================================================
// Motion Tokens
// =============================================================================

/// Animation durations in milliseconds
pub mod duration {
    /// Theme cross-fade (200ms)
    pub const THEME_SWITCH: u32 = 200;
    /// Card press feedback (100ms)
    pub const PRESS: u32 = 100;
    /// Home header fade-in (600ms)
    pub const HEADER_FADE: u32 = 600;
    /// Delay between successive card entrances (80ms)
    pub const CARD_STAGGER: u32 = 80;
    /// Screen push transition (300ms)
    pub const PAGE_TRANSITION: u32 = 300;
}

/// Named easing curves, resolved by the renderer
pub mod easing {
    /// Standard curve
    pub const STANDARD: &str = "ease-in-out";
    /// Entering elements
    pub const DECELERATE: &str = "ease-out";
    /// Exiting elements
    pub const ACCELERATE: &str = "ease-in";
}

// =============================================================================
// Typography Tokens
// =============================================================================

/// Letter spacing (tracking) in em units
pub mod tracking {
    /// Default letter spacing
    pub const DEFAULT: f32 = 0.0;
    /// Tight letter spacing for large headings
    pub const TIGHT: f32 = -0.02;
    /// Wide letter spacing for labels
    pub const WIDE: f32 = 0.04;
}

/// Line height multipliers
pub mod line_height {
    /// Tight (1.2)
    pub const TIGHT: f32 = 1.2;
    /// Normal (1.4)
    pub const NORMAL: f32 = 1.4;
    /// Relaxed (1.6)
    pub const RELAXED: f32 = 1.6;
}

/// Font weight values
pub mod font_weight {
    /// Regular (400)
    pub const NORMAL: u16 = 400;
    /// Medium (500)
    pub const MEDIUM: u16 = 500;
    /// Semi-bold (600)
    pub const SEMI_BOLD: u16 = 600;
    /// Bold (700)
    pub const BOLD: u16 = 700;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spacing_on_grid() {
        for value in [
            spacing::XS,
            spacing::SM,
            spacing::MS,
            spacing::MD,
            spacing::LG,
            spacing::XL,
            spacing::XXL,
        ] {
            assert_eq!(value % 4.0, 0.0, "{} is off the 4px grid", value);
        }
    }

    #[test]
    fn test_spacing_get() {
        assert_eq!(spacing::get("md"), Some(16.0));
        assert_eq!(spacing::get("huge"), None);
    }

    #[test]
    fn test_touch_targets() {
        assert!(sizing::button::HEIGHT >= 48.0);
        assert!(sizing::input::HEIGHT >= sizing::button::HEIGHT);
    }

    #[test]
    fn test_radius_scale() {
        assert!(radius::SM < radius::MD);
        assert!(radius::MD < radius::LG);
        assert!(radius::LG < radius::XL);
        assert!(radius::FULL > 1000.0);
    }

    #[test]
    fn test_shadow_presets() {
        assert_eq!(shadows::none().blur, 0.0);
        let card = shadows::card("#00000014");
        let raised = shadows::raised("#00000014");
        assert!(card.blur < raised.blur);
        assert_eq!(card.color, "#00000014");
    }

    #[test]
    fn test_breakpoint_current() {
        assert_eq!(breakpoints::current(360), Breakpoint::Compact);
        assert_eq!(breakpoints::current(600), Breakpoint::Medium);
        assert_eq!(breakpoints::current(839), Breakpoint::Medium);
        assert_eq!(breakpoints::current(1280), Breakpoint::Expanded);
    }

    #[test]
    fn test_motion_ordering() {
        assert!(duration::PRESS < duration::THEME_SWITCH);
        assert!(duration::CARD_STAGGER < duration::PAGE_TRANSITION);
    }

    #[test]
    fn test_font_weights() {
        assert!(font_weight::NORMAL < font_weight::MEDIUM);
        assert!(font_weight::MEDIUM < font_weight::SEMI_BOLD);
        assert!(font_weight::SEMI_BOLD < font_weight::BOLD);
    }

    #[test]
    fn test_breakpoint_serialization() {
        let json = serde_json::to_string(&Breakpoint::Expanded).unwrap();
        assert_eq!(json, "\"expanded\"");
    }
}
