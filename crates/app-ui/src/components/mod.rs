//! UI component library for QR Studio
//!
//! Components are plain Rust structs with serializable props. A frontend
//! renders them; this crate decides what they say and how they are styled
//! for the active [`Theme`]. Each component provides:
//!
//! - Type-safe props with builder patterns
//! - Theme-aware computed styles
//! - Event handler identifiers the frontend dispatches back
//!
//! # Available Components
//!
//! - [`Button`] - Filled, outlined, text and icon buttons
//! - [`Icon`] - Named icon
//! - [`Input`] - Generic text input
//! - [`FeatureCard`] - Home-screen card that opens a generator
//! - [`ThemeToggle`] - Light/dark switch in the app bar
//! - [`SsidInput`] - WiFi network name field with live validation

mod ssid_input;

pub use ssid_input::{clamp_to_max_length, SsidInput, SsidInputProps, SsidInputStyles};

use crate::navigation::Route;
use crate::theme::{card_gradient, Color, Gradient, Theme, ThemeName};
use crate::tokens::{border, radius, shadows, sizing, spacing, Shadow};
use crate::typography::TypographyVariant;
use app_core::QrType;
use serde::{Deserialize, Serialize};

// =============================================================================
// Common Types
// =============================================================================

/// Event handler callback type (represented as a string identifier)
pub type EventHandler = String;

/// Spacing values (margin, padding)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Spacing {
    /// Uniform spacing on all sides
    Uniform(f32),
    /// Vertical and horizontal spacing
    Symmetric {
        /// Vertical spacing
        vertical: f32,
        /// Horizontal spacing
        horizontal: f32,
    },
}

impl Default for Spacing {
    fn default() -> Self {
        Spacing::Uniform(0.0)
    }
}

impl Spacing {
    /// Create uniform spacing
    pub fn uniform(value: f32) -> Self {
        Spacing::Uniform(value)
    }

    /// Create symmetric spacing
    pub fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Spacing::Symmetric { vertical, horizontal }
    }
}

// =============================================================================
// Icon Component
// =============================================================================

/// Icon component properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Icon {
    /// Icon name
    pub name: String,
    /// Size in pixels
    pub size: f32,
    /// Icon color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Accessible label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Icon {
    /// Create a medium icon
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), size: sizing::icon::MD, color: None, label: None }
    }

    /// Set size
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Set color
    pub fn with_color(mut self, color: impl Into<Color>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set accessible label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

// =============================================================================
// Button Component
// =============================================================================

/// Button style variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    /// Solid primary background
    #[default]
    Filled,
    /// Primary border, transparent background
    Outlined,
    /// Text only
    Text,
    /// Square icon-only button
    Icon,
}

/// Button component properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Button {
    /// Accessible label (also the visible text for non-icon buttons)
    pub label: String,
    /// Button style variant
    #[serde(default)]
    pub variant: ButtonVariant,
    /// Whether the button is disabled
    #[serde(default)]
    pub disabled: bool,
    /// Icon name to display
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// On press event handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_press: Option<EventHandler>,
}

impl Button {
    /// Create a filled button
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            variant: ButtonVariant::Filled,
            disabled: false,
            icon: None,
            on_press: None,
        }
    }

    /// Create an icon-only button
    pub fn icon(icon: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            variant: ButtonVariant::Icon,
            icon: Some(icon.into()),
            ..Self::new(label)
        }
    }

    /// Set the button variant
    pub fn with_variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set disabled state
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set icon
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Set on press handler
    pub fn on_press(mut self, handler: impl Into<EventHandler>) -> Self {
        self.on_press = Some(handler.into());
        self
    }

    /// Get the computed styles for this button based on theme
    pub fn computed_styles(&self, theme: &Theme) -> ButtonStyles {
        let colors = &theme.colors;
        let (background, text_color, border_color) = match self.variant {
            ButtonVariant::Filled => {
                (colors.primary.clone(), colors.on_primary.clone(), None)
            }
            ButtonVariant::Outlined => (
                "transparent".to_string(),
                colors.primary.clone(),
                Some(colors.primary.clone()),
            ),
            ButtonVariant::Text => ("transparent".to_string(), colors.primary.clone(), None),
            ButtonVariant::Icon => ("transparent".to_string(), colors.icon.clone(), None),
        };

        let (height, padding_horizontal, border_radius) = match self.variant {
            ButtonVariant::Icon => (sizing::button::ICON, 0.0, radius::FULL),
            _ => (sizing::button::HEIGHT, sizing::button::PADDING_X, radius::MD),
        };

        ButtonStyles {
            background,
            text_color,
            border_width: if border_color.is_some() { border::THIN } else { 0.0 },
            border_color,
            height,
            width: (self.variant == ButtonVariant::Icon).then_some(sizing::button::ICON),
            padding_horizontal,
            border_radius,
            typography: TypographyVariant::Button,
            opacity: if self.disabled { 0.5 } else { 1.0 },
        }
    }
}

/// Computed button styles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonStyles {
    /// Background color
    pub background: Color,
    /// Text and icon color
    pub text_color: Color,
    /// Border color, if bordered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Color>,
    /// Border width
    pub border_width: f32,
    /// Height
    pub height: f32,
    /// Fixed width (icon buttons)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    /// Horizontal padding
    pub padding_horizontal: f32,
    /// Corner radius
    pub border_radius: f32,
    /// Label text style
    pub typography: TypographyVariant,
    /// Opacity
    pub opacity: f32,
}

// =============================================================================
// Input Component
// =============================================================================

/// Input type variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    /// Text input
    #[default]
    Text,
    /// Password input (masked)
    Password,
    /// Email input
    Email,
    /// URL input
    Url,
    /// Phone number input
    Tel,
    /// Multi-line text area
    Textarea,
}

/// Generic text input properties
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Input {
    /// Input type
    #[serde(default)]
    pub input_type: InputType,
    /// Label text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Placeholder text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Current value
    #[serde(default)]
    pub value: String,
    /// Helper/hint text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub helper_text: Option<String>,
    /// Error message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Whether the input is required
    #[serde(default)]
    pub required: bool,
    /// Maximum length enforced at capture time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    /// On change handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_change: Option<EventHandler>,
}

impl Input {
    /// Create a new text input
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a password input
    pub fn password() -> Self {
        Self { input_type: InputType::Password, ..Self::new() }
    }

    /// Set label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set placeholder text
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Set value
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Set helper text
    pub fn with_helper(mut self, helper: impl Into<String>) -> Self {
        self.helper_text = Some(helper.into());
        self
    }

    /// Set error message
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// Set required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set max length
    pub fn with_max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Set on change handler
    pub fn on_change(mut self, handler: impl Into<EventHandler>) -> Self {
        self.on_change = Some(handler.into());
        self
    }

    /// Border color for the current state
    pub fn border_color(&self, theme: &Theme, focused: bool) -> Color {
        if self.error.is_some() {
            theme.colors.error.clone()
        } else if focused {
            theme.colors.border_focused.clone()
        } else {
            theme.colors.border.clone()
        }
    }
}

// =============================================================================
// Feature Card Component
// =============================================================================

/// Home-screen card that opens the generator for one QR type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCard {
    /// QR type this card opens
    pub qr_type: QrType,
    /// Leading icon
    pub icon: Icon,
    /// Card title
    pub title: String,
    /// Card subtitle
    pub subtitle: String,
    /// Icon badge gradient
    pub gradient: Gradient,
    /// Route pushed when the card is tapped
    pub route: Route,
    /// Computed styles
    pub styles: CardStyles,
    /// Entrance animation delay in milliseconds
    pub enter_delay_ms: u32,
}

/// Computed card styles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardStyles {
    /// Card background
    pub background: Color,
    /// Border color
    pub border_color: Color,
    /// Border width
    pub border_width: f32,
    /// Corner radius
    pub border_radius: f32,
    /// Inner padding
    pub padding: Spacing,
    /// Minimum height
    pub min_height: f32,
    /// Resting elevation
    pub shadow: Shadow,
    /// Title color
    pub title_color: Color,
    /// Subtitle color
    pub subtitle_color: Color,
    /// Title text style
    pub title_typography: TypographyVariant,
    /// Subtitle text style
    pub subtitle_typography: TypographyVariant,
}

impl FeatureCard {
    /// Build the card for `qr_type` styled for `theme`
    pub fn for_type(qr_type: QrType, theme: &Theme) -> Self {
        Self {
            qr_type,
            icon: Icon::new(qr_type.icon())
                .with_size(sizing::icon::CARD)
                .with_color(theme.colors.on_primary.clone())
                .with_label(qr_type.title()),
            title: qr_type.title().to_string(),
            subtitle: qr_type.description().to_string(),
            gradient: card_gradient(qr_type),
            route: Route::generator(qr_type),
            styles: CardStyles {
                background: theme.colors.card.clone(),
                border_color: theme.colors.card_border.clone(),
                border_width: border::THIN,
                border_radius: radius::LG,
                padding: Spacing::uniform(sizing::card::PADDING),
                min_height: sizing::card::MIN_HEIGHT,
                shadow: if theme.is_dark() {
                    shadows::none()
                } else {
                    shadows::card(&theme.colors.shadow)
                },
                title_color: theme.colors.text.clone(),
                subtitle_color: theme.colors.text_muted.clone(),
                title_typography: TypographyVariant::TitleSm,
                subtitle_typography: TypographyVariant::BodySm,
            },
            enter_delay_ms: 0,
        }
    }

    /// Set the entrance animation delay
    pub fn with_enter_delay(mut self, delay_ms: u32) -> Self {
        self.enter_delay_ms = delay_ms;
        self
    }
}

// =============================================================================
// Theme Toggle Component
// =============================================================================

/// Light/dark switch shown in the home app bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeToggle {
    /// Theme currently shown
    pub current: ThemeName,
    /// The button that flips it
    pub button: Button,
}

/// Event emitted when the toggle is pressed
pub const TOGGLE_THEME_EVENT: &str = "theme:toggle";

impl ThemeToggle {
    /// Toggle for the given theme; the icon shows what pressing it switches to
    pub fn new(current: ThemeName) -> Self {
        let (icon, label) = match current {
            ThemeName::Light => ("moon", "Switch to dark theme"),
            ThemeName::Dark => ("sun", "Switch to light theme"),
        };
        Self {
            current,
            button: Button::icon(icon, label).on_press(TOGGLE_THEME_EVENT),
        }
    }
}

/// Default spacing between stacked form fields
pub const FIELD_GAP: f32 = spacing::MD;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{dark_theme, light_theme};

    #[test]
    fn test_filled_button_styles() {
        let theme = light_theme();
        let styles = Button::new("Generate").computed_styles(&theme);
        assert_eq!(styles.background, theme.colors.primary);
        assert_eq!(styles.text_color, theme.colors.on_primary);
        assert_eq!(styles.border_width, 0.0);
        assert_eq!(styles.opacity, 1.0);
    }

    #[test]
    fn test_outlined_button_has_border() {
        let theme = dark_theme();
        let styles = Button::new("Share")
            .with_variant(ButtonVariant::Outlined)
            .computed_styles(&theme);
        assert_eq!(styles.border_color.as_deref(), Some(theme.colors.primary.as_str()));
        assert_eq!(styles.border_width, border::THIN);
    }

    #[test]
    fn test_icon_button_is_square() {
        let styles = Button::icon("close", "Clear").computed_styles(&light_theme());
        assert_eq!(styles.width, Some(styles.height));
        assert_eq!(styles.border_radius, radius::FULL);
    }

    #[test]
    fn test_disabled_button_dims() {
        let styles = Button::new("Save").disabled(true).computed_styles(&light_theme());
        assert!(styles.opacity < 1.0);
    }

    #[test]
    fn test_input_border_color() {
        let theme = light_theme();
        let input = Input::new().with_label("Password");
        assert_eq!(input.border_color(&theme, false), theme.colors.border);
        assert_eq!(input.border_color(&theme, true), theme.colors.border_focused);

        let input = input.with_error("Too short");
        assert_eq!(input.border_color(&theme, true), theme.colors.error);
    }

    #[test]
    fn test_feature_card_for_wifi() {
        let theme = light_theme();
        let card = FeatureCard::for_type(QrType::Wifi, &theme);
        assert_eq!(card.title, "WiFi");
        assert_eq!(card.icon.name, "wifi");
        assert_eq!(card.route, Route::generator(QrType::Wifi));
        assert_eq!(card.styles.background, theme.colors.card);
        assert!(card.styles.shadow.blur > 0.0);
    }

    #[test]
    fn test_feature_card_flat_in_dark_theme() {
        let card = FeatureCard::for_type(QrType::Url, &dark_theme());
        assert_eq!(card.styles.shadow, shadows::none());
    }

    #[test]
    fn test_theme_toggle_icon() {
        let toggle = ThemeToggle::new(ThemeName::Light);
        assert_eq!(toggle.button.icon.as_deref(), Some("moon"));
        assert_eq!(toggle.button.on_press.as_deref(), Some(TOGGLE_THEME_EVENT));

        let toggle = ThemeToggle::new(ThemeName::Dark);
        assert_eq!(toggle.button.icon.as_deref(), Some("sun"));
    }

    #[test]
    fn test_spacing_serialization() {
        let json = serde_json::to_string(&Spacing::symmetric(8.0, 16.0)).unwrap();
        assert_eq!(json, r#"{"vertical":8.0,"horizontal":16.0}"#);
        assert_eq!(serde_json::to_string(&Spacing::uniform(4.0)).unwrap(), "4.0");
    }
}
