//! Design system and theme provider for QR Studio
//!
//! Two themes are supported:
//! - Light: bright slate background with indigo accents
//! - Dark: deep navy background with the same accent hues lifted for contrast
//!
//! The home screen toggles between them; [`ThemeState`] holds the active
//! theme together with the user's font preferences.
//!
//! # Usage
//!
//! ```rust
//! use app_ui::theme::{ThemeName, ThemeState};
//!
//! let mut state = ThemeState::default();
//! state.toggle();
//! assert_eq!(state.theme_name, ThemeName::Dark);
//! let bg = &state.current_theme().colors.background;
//! ```

use app_core::QrType;
use serde::{Deserialize, Serialize};

// =============================================================================
// Color Types
// =============================================================================

/// A color represented as an RGBA hex string (e.g., "#FFFFFF" or "#FFFFFF80")
pub type Color = String;

/// Parse a hex color string to RGB components
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if hex.len() < 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Convert RGB to hex string
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}

/// Append an alpha channel (0.0 - 1.0) to a `#RRGGBB` color
pub fn with_alpha(hex: &str, alpha: f32) -> Color {
    match parse_hex_color(hex) {
        Some((r, g, b)) => {
            let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
            format!("{}{:02X}", rgb_to_hex(r, g, b), a)
        }
        None => hex.to_string(),
    }
}

// =============================================================================
// Color Scale
// =============================================================================

/// A color scale with stops from lightest to darkest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorScale {
    /// Very light (50)
    pub s50: Color,
    /// Light (100)
    pub s100: Color,
    /// Light-medium (200)
    pub s200: Color,
    /// Medium-light (300)
    pub s300: Color,
    /// Medium (400)
    pub s400: Color,
    /// Base (500)
    pub s500: Color,
    /// Medium-dark (600)
    pub s600: Color,
    /// Dark-medium (700)
    pub s700: Color,
    /// Dark (800)
    pub s800: Color,
    /// Very dark (900)
    pub s900: Color,
}

impl ColorScale {
    fn from_stops(stops: [&str; 10]) -> Self {
        let [s50, s100, s200, s300, s400, s500, s600, s700, s800, s900] = stops.map(String::from);
        Self { s50, s100, s200, s300, s400, s500, s600, s700, s800, s900 }
    }

    /// Get a color by its numeric stop (50, 100, ..., 900)
    pub fn get(&self, stop: u16) -> Option<&Color> {
        match stop {
            50 => Some(&self.s50),
            100 => Some(&self.s100),
            200 => Some(&self.s200),
            300 => Some(&self.s300),
            400 => Some(&self.s400),
            500 => Some(&self.s500),
            600 => Some(&self.s600),
            700 => Some(&self.s700),
            800 => Some(&self.s800),
            900 => Some(&self.s900),
            _ => None,
        }
    }
}

/// Indigo brand scale
fn indigo() -> ColorScale {
    ColorScale::from_stops([
        "#EEF2FF", "#E0E7FF", "#C7D2FE", "#A5B4FC", "#818CF8", "#6366F1", "#4F46E5", "#4338CA",
        "#3730A3", "#312E81",
    ])
}

/// Slate neutral scale
fn slate() -> ColorScale {
    ColorScale::from_stops([
        "#F8FAFC", "#F1F5F9", "#E2E8F0", "#CBD5E1", "#94A3B8", "#64748B", "#475569", "#334155",
        "#1E293B", "#0F172A",
    ])
}

/// Red error scale
fn red() -> ColorScale {
    ColorScale::from_stops([
        "#FEF2F2", "#FEE2E2", "#FECACA", "#FCA5A5", "#F87171", "#EF4444", "#DC2626", "#B91C1C",
        "#991B1B", "#7F1D1D",
    ])
}

/// Amber warning scale
fn amber() -> ColorScale {
    ColorScale::from_stops([
        "#FFFBEB", "#FEF3C7", "#FDE68A", "#FCD34D", "#FBBF24", "#F59E0B", "#D97706", "#B45309",
        "#92400E", "#78350F",
    ])
}

/// Teal success scale
fn teal() -> ColorScale {
    ColorScale::from_stops([
        "#F0FDFA", "#CCFBF1", "#99F6E4", "#5EEAD4", "#2DD4BF", "#14B8A6", "#0D9488", "#0F766E",
        "#115E59", "#134E4A",
    ])
}

/// Complete color palette shared by both themes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    /// White color
    pub white: Color,
    /// Black color
    pub black: Color,
    /// Brand colors
    pub primary: ColorScale,
    /// Neutral colors (backgrounds, borders, text)
    pub neutral: ColorScale,
    /// Error colors
    pub negative: ColorScale,
    /// Warning colors
    pub warning: ColorScale,
    /// Success colors
    pub positive: ColorScale,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            white: "#FFFFFF".to_string(),
            black: "#000000".to_string(),
            primary: indigo(),
            neutral: slate(),
            negative: red(),
            warning: amber(),
            positive: teal(),
        }
    }
}

// =============================================================================
// Semantic Colors
// =============================================================================

/// Semantic colors for specific UI purposes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeColors {
    /// Screen background
    pub background: Color,
    /// Elevated surfaces (app bar, sheets)
    pub surface: Color,
    /// Card background
    pub card: Color,
    /// Card border
    pub card_border: Color,
    /// Primary text
    pub text: Color,
    /// Secondary text (helpers, subtitles)
    pub text_muted: Color,
    /// Text on primary-colored backgrounds
    pub on_primary: Color,
    /// Primary accent (buttons, focused borders)
    pub primary: Color,
    /// Input border at rest
    pub border: Color,
    /// Input border when focused
    pub border_focused: Color,
    /// Icon color
    pub icon: Color,
    /// Error text and borders
    pub error: Color,
    /// Warning emphasis (e.g. character counter near its limit)
    pub warning: Color,
    /// Success indicators
    pub success: Color,
    /// Input fill
    pub input_fill: Color,
    /// Shadow base color
    pub shadow: Color,
}

// =============================================================================
// Gradients
// =============================================================================

/// A gradient stop with position and color
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    /// Position from 0.0 to 1.0
    pub position: f32,
    /// Color at this position
    pub color: Color,
}

/// A gradient definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gradient {
    /// Gradient stops
    pub stops: Vec<GradientStop>,
    /// Angle in degrees (0 = left to right)
    pub angle: f32,
}

impl Gradient {
    /// Create a new gradient with stops
    pub fn new(stops: Vec<(f32, &str)>, angle: f32) -> Self {
        Self {
            stops: stops
                .into_iter()
                .map(|(pos, color)| GradientStop { position: pos, color: color.to_string() })
                .collect(),
            angle,
        }
    }

    /// Two-stop diagonal gradient
    pub fn diagonal(from: &str, to: &str) -> Self {
        Self::new(vec![(0.0, from), (1.0, to)], 135.0)
    }
}

/// Gradient used by the home-screen card of each QR type
pub fn card_gradient(qr_type: QrType) -> Gradient {
    match qr_type {
        QrType::Url => Gradient::diagonal("#6366F1", "#8B5CF6"),
        QrType::Text => Gradient::diagonal("#0EA5E9", "#6366F1"),
        QrType::Wifi => Gradient::diagonal("#14B8A6", "#0EA5E9"),
        QrType::Email => Gradient::diagonal("#F59E0B", "#EF4444"),
        QrType::Phone => Gradient::diagonal("#22C55E", "#14B8A6"),
        QrType::Sms => Gradient::diagonal("#EC4899", "#8B5CF6"),
        QrType::Contact => Gradient::diagonal("#F97316", "#F59E0B"),
    }
}

/// Header gradient behind the logo on the home screen
pub fn header_gradient(name: ThemeName) -> Gradient {
    match name {
        ThemeName::Light => Gradient::new(vec![(0.0, "#4F46E5"), (0.6, "#6366F1"), (1.0, "#14B8A6")], 135.0),
        ThemeName::Dark => Gradient::new(vec![(0.0, "#312E81"), (0.6, "#3730A3"), (1.0, "#115E59")], 135.0),
    }
}

// =============================================================================
// Theme Definition
// =============================================================================

/// Theme name enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    /// Light theme
    #[default]
    Light,
    /// Dark theme
    Dark,
}

impl ThemeName {
    /// Get the color scheme name
    pub fn color_scheme(&self) -> &'static str {
        match self {
            ThemeName::Light => "light",
            ThemeName::Dark => "dark",
        }
    }

    /// The other theme
    pub fn toggled(&self) -> Self {
        match self {
            ThemeName::Light => ThemeName::Dark,
            ThemeName::Dark => ThemeName::Light,
        }
    }
}

impl std::fmt::Display for ThemeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeName::Light => write!(f, "Light"),
            ThemeName::Dark => write!(f, "Dark"),
        }
    }
}

impl std::str::FromStr for ThemeName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(ThemeName::Light),
            "dark" => Ok(ThemeName::Dark),
            _ => Err(format!("Unknown theme: {}", s)),
        }
    }
}

/// Complete theme definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Theme name
    pub name: ThemeName,
    /// Color palette
    pub palette: Palette,
    /// Semantic theme colors
    pub colors: ThemeColors,
    /// Home header gradient
    pub header_gradient: Gradient,
}

impl Theme {
    /// Check if this is a dark theme
    pub fn is_dark(&self) -> bool {
        self.name == ThemeName::Dark
    }

    /// Get a neutral color by level, falling back to 500
    pub fn neutral(&self, level: u16) -> &str {
        self.palette
            .neutral
            .get(level)
            .unwrap_or(&self.palette.neutral.s500)
    }

    /// Get a primary color by level, falling back to 500
    pub fn primary(&self, level: u16) -> &str {
        self.palette
            .primary
            .get(level)
            .unwrap_or(&self.palette.primary.s500)
    }
}

/// Create the light theme
pub fn light_theme() -> Theme {
    let palette = Palette::default();
    let colors = ThemeColors {
        background: palette.neutral.s50.clone(),
        surface: palette.white.clone(),
        card: palette.white.clone(),
        card_border: palette.neutral.s200.clone(),
        text: palette.neutral.s900.clone(),
        text_muted: palette.neutral.s500.clone(),
        on_primary: palette.white.clone(),
        primary: palette.primary.s600.clone(),
        border: palette.neutral.s300.clone(),
        border_focused: palette.primary.s500.clone(),
        icon: palette.neutral.s600.clone(),
        error: palette.negative.s600.clone(),
        warning: palette.warning.s600.clone(),
        success: palette.positive.s600.clone(),
        input_fill: palette.white.clone(),
        shadow: with_alpha(&palette.neutral.s900, 0.08),
    };

    Theme {
        name: ThemeName::Light,
        header_gradient: header_gradient(ThemeName::Light),
        palette,
        colors,
    }
}

/// Create the dark theme
pub fn dark_theme() -> Theme {
    let palette = Palette::default();
    let colors = ThemeColors {
        background: palette.neutral.s900.clone(),
        surface: palette.neutral.s800.clone(),
        card: palette.neutral.s800.clone(),
        card_border: palette.neutral.s700.clone(),
        text: palette.neutral.s50.clone(),
        text_muted: palette.neutral.s400.clone(),
        on_primary: palette.white.clone(),
        primary: palette.primary.s400.clone(),
        border: palette.neutral.s600.clone(),
        border_focused: palette.primary.s400.clone(),
        icon: palette.neutral.s300.clone(),
        error: palette.negative.s400.clone(),
        warning: palette.warning.s400.clone(),
        success: palette.positive.s400.clone(),
        input_fill: palette.neutral.s800.clone(),
        shadow: with_alpha(&palette.black, 0.4),
    };

    Theme {
        name: ThemeName::Dark,
        header_gradient: header_gradient(ThemeName::Dark),
        palette,
        colors,
    }
}

// =============================================================================
// Theme Provider
// =============================================================================

/// Get a theme by name
pub fn get_theme(name: ThemeName) -> Theme {
    match name {
        ThemeName::Light => light_theme(),
        ThemeName::Dark => dark_theme(),
    }
}

/// Smallest font scale multiplier
pub const MIN_FONT_SCALE: f32 = 0.8;

/// Largest font scale multiplier
pub const MAX_FONT_SCALE: f32 = 1.4;

/// Bring a font scale into range. Non-finite values reset to 1.0.
pub fn clamp_font_scale(scale: f32) -> f32 {
    if scale.is_finite() {
        scale.clamp(MIN_FONT_SCALE, MAX_FONT_SCALE)
    } else {
        1.0
    }
}

/// Theme configuration for font preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontConfig {
    /// Font scale multiplier (0.8 - 1.4)
    pub scale: f32,
    /// Font family preference
    pub family: FontFamily,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self { scale: 1.0, family: FontFamily::System }
    }
}

/// Available font families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FontFamily {
    /// System default font
    #[default]
    System,
    /// Inter font
    Inter,
    /// Roboto (Android)
    Roboto,
}

impl FontFamily {
    /// CSS font stack
    pub fn stack(&self) -> &'static str {
        match self {
            FontFamily::System => {
                "-apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Helvetica, Arial, sans-serif"
            }
            FontFamily::Inter => "Inter, -apple-system, sans-serif",
            FontFamily::Roboto => "Roboto, 'Helvetica Neue', Arial, sans-serif",
        }
    }
}

/// Theme provider state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeState {
    /// Current theme name
    pub theme_name: ThemeName,
    /// Current theme (regenerated on deserialization)
    #[serde(skip, default = "light_theme")]
    pub theme: Theme,
    /// Font configuration
    pub fonts: FontConfig,
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new(ThemeName::Light)
    }
}

impl ThemeState {
    /// Create a new theme state with the given theme
    pub fn new(theme_name: ThemeName) -> Self {
        Self {
            theme_name,
            theme: get_theme(theme_name),
            fonts: FontConfig::default(),
        }
    }

    /// Set the current theme
    pub fn set_theme(&mut self, theme_name: ThemeName) {
        self.theme_name = theme_name;
        self.theme = get_theme(theme_name);
    }

    /// Switch between light and dark, returning the new theme name
    pub fn toggle(&mut self) -> ThemeName {
        let next = self.theme_name.toggled();
        tracing::debug!(from = %self.theme_name, to = %next, "theme toggled");
        self.set_theme(next);
        next
    }

    /// Set font scale
    pub fn set_font_scale(&mut self, scale: f32) {
        self.fonts.scale = clamp_font_scale(scale);
    }

    /// Set font family
    pub fn set_font_family(&mut self, family: FontFamily) {
        self.fonts.family = family;
    }

    /// Get the current theme
    pub fn current_theme(&self) -> &Theme {
        &self.theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // Color Utility Tests
    // ==========================================================================

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#FFFFFF"), Some((255, 255, 255)));
        assert_eq!(parse_hex_color("#4F46E5"), Some((79, 70, 229)));
        assert_eq!(parse_hex_color("000000"), Some((0, 0, 0)));
        assert_eq!(parse_hex_color("#FF"), None);
        assert_eq!(parse_hex_color("#GG0000"), None);
    }

    #[test]
    fn test_rgb_to_hex() {
        assert_eq!(rgb_to_hex(255, 255, 255), "#FFFFFF");
        assert_eq!(rgb_to_hex(79, 70, 229), "#4F46E5");
    }

    #[test]
    fn test_with_alpha() {
        assert_eq!(with_alpha("#000000", 1.0), "#000000FF");
        assert_eq!(with_alpha("#0F172A", 0.0), "#0F172A00");
        assert_eq!(with_alpha("transparent", 0.5), "transparent");
    }

    // ==========================================================================
    // Theme Name Tests
    // ==========================================================================

    #[test]
    fn test_theme_name_toggle() {
        assert_eq!(ThemeName::Light.toggled(), ThemeName::Dark);
        assert_eq!(ThemeName::Dark.toggled(), ThemeName::Light);
    }

    #[test]
    fn test_theme_name_from_str() {
        assert_eq!("light".parse::<ThemeName>().unwrap(), ThemeName::Light);
        assert_eq!("DARK".parse::<ThemeName>().unwrap(), ThemeName::Dark);
        assert!("dim".parse::<ThemeName>().is_err());
    }

    #[test]
    fn test_theme_name_display() {
        assert_eq!(ThemeName::Light.to_string(), "Light");
        assert_eq!(ThemeName::Dark.color_scheme(), "dark");
    }

    // ==========================================================================
    // Theme Tests
    // ==========================================================================

    #[test]
    fn test_light_theme_basics() {
        let theme = light_theme();
        assert_eq!(theme.name, ThemeName::Light);
        assert!(!theme.is_dark());
        assert_eq!(theme.colors.background, "#F8FAFC");
        assert_eq!(theme.colors.primary, app_core::branding::colors::PRIMARY);
    }

    #[test]
    fn test_dark_theme_basics() {
        let theme = dark_theme();
        assert!(theme.is_dark());
        assert_eq!(theme.colors.background, app_core::branding::colors::BACKGROUND_DARK);
        assert_ne!(theme.colors.text, light_theme().colors.text);
    }

    #[test]
    fn test_palette_lookup_falls_back() {
        let theme = light_theme();
        assert_eq!(theme.primary(600), "#4F46E5");
        assert_eq!(theme.neutral(123), theme.palette.neutral.s500);
    }

    #[test]
    fn test_all_colors_are_hex() {
        for theme in [light_theme(), dark_theme()] {
            let json = serde_json::to_value(&theme.colors).unwrap();
            for (key, value) in json.as_object().unwrap() {
                let color = value.as_str().unwrap();
                assert!(parse_hex_color(color).is_some(), "{} is not hex: {}", key, color);
            }
        }
    }

    #[test]
    fn test_every_qr_type_has_gradient() {
        for qr_type in QrType::all() {
            let gradient = card_gradient(qr_type);
            assert_eq!(gradient.stops.len(), 2);
            assert_eq!(gradient.stops[0].position, 0.0);
        }
    }

    // ==========================================================================
    // Theme State Tests
    // ==========================================================================

    #[test]
    fn test_theme_state_toggle() {
        let mut state = ThemeState::default();
        assert_eq!(state.theme_name, ThemeName::Light);

        assert_eq!(state.toggle(), ThemeName::Dark);
        assert!(state.current_theme().is_dark());

        assert_eq!(state.toggle(), ThemeName::Light);
        assert!(!state.current_theme().is_dark());
    }

    #[test]
    fn test_font_scale_clamped() {
        let mut state = ThemeState::new(ThemeName::Dark);
        state.set_font_scale(3.0);
        assert_eq!(state.fonts.scale, 1.4);
        state.set_font_scale(0.1);
        assert_eq!(state.fonts.scale, 0.8);
    }

    #[test]
    fn test_font_scale_non_finite_resets() {
        let mut state = ThemeState::default();
        state.set_font_scale(1.2);
        state.set_font_scale(f32::NAN);
        assert_eq!(state.fonts.scale, 1.0);
        state.set_font_scale(f32::INFINITY);
        assert_eq!(state.fonts.scale, 1.0);
        assert_eq!(clamp_font_scale(f32::NEG_INFINITY), 1.0);
    }

    #[test]
    fn test_theme_state_serialization_skips_theme() {
        let state = ThemeState::new(ThemeName::Dark);
        let json = serde_json::to_string(&state).unwrap();
        assert!(!json.contains("palette"));

        let restored: ThemeState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.theme_name, ThemeName::Dark);
    }
}
