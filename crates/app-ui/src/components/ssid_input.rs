//! Network name input
//!
//! Hosts an [`SsidField`] and turns its state into something a renderer can
//! draw: label, placeholder, helper, error line, character counter and an
//! optional clear button. Keystrokes arriving through [`SsidInput::handle_input`]
//! are clamped to [`MAX_SSID_LENGTH`]; values set programmatically are not.

use super::{Button, EventHandler, Spacing};
use crate::theme::{Color, Theme};
use crate::tokens::{border, radius, sizing, spacing};
use crate::typography::TypographyVariant;
use app_core::ssid::{CharacterCount, SsidField, ValidationResult, MAX_SSID_LENGTH};
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// Field label
pub const LABEL: &str = "Network Name (SSID)";
/// Placeholder shown while empty
pub const PLACEHOLDER: &str = "Enter WiFi network name";
/// Helper line shown when there is no error
pub const HELPER_TEXT: &str = "The name of your WiFi network";
/// Event emitted by the clear button
pub const CLEAR_EVENT: &str = "ssid:clear";
/// Event emitted on every keystroke
pub const CHANGE_EVENT: &str = "ssid:change";

/// Cut `text` down to at most `max` grapheme clusters.
///
/// Returns the input unchanged when it already fits.
pub fn clamp_to_max_length(text: &str, max: usize) -> &str {
    match text.grapheme_indices(true).nth(max) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

/// Network name input bound to an [`SsidField`]
#[derive(Debug, Default)]
pub struct SsidInput {
    field: SsidField,
    focused: bool,
}

impl SsidInput {
    /// Create an empty input
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an input seeded with a value. The value is kept whole.
    pub fn with_value(value: impl Into<String>) -> Self {
        Self { field: SsidField::with_text(value), focused: false }
    }

    /// Register the host's change listener
    pub fn set_on_changed(&mut self, listener: impl FnMut(&str) + 'static) {
        self.field.set_on_changed(listener);
    }

    /// Underlying field state
    pub fn field(&self) -> &SsidField {
        &self.field
    }

    /// Current value
    pub fn value(&self) -> &str {
        self.field.text()
    }

    /// Accept text typed or pasted by the user, clamped to the maximum.
    pub fn handle_input(&mut self, raw: &str) -> ValidationResult {
        let clamped = clamp_to_max_length(raw, MAX_SSID_LENGTH);
        if clamped.len() < raw.len() {
            tracing::debug!(max = MAX_SSID_LENGTH, "ssid input clamped");
        }
        self.field.set_text(clamped)
    }

    /// Replace the value without clamping
    pub fn set_value(&mut self, value: impl Into<String>) -> ValidationResult {
        self.field.set_text(value)
    }

    /// Empty the field
    pub fn clear(&mut self) {
        self.field.clear();
    }

    /// Track focus for border styling
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Whether the input has focus
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Whether the clear button should be shown
    pub fn shows_clear_button(&self) -> bool {
        !self.field.is_empty()
    }

    /// Snapshot of everything the renderer needs for `theme`
    pub fn render(&self, theme: &Theme) -> SsidInputProps {
        let validation = self.field.validation();
        let counter = self.field.character_count();

        SsidInputProps {
            label: LABEL.to_string(),
            placeholder: PLACEHOLDER.to_string(),
            value: self.field.text().to_string(),
            helper_text: validation
                .error_message
                .is_none()
                .then(|| HELPER_TEXT.to_string()),
            error: validation.error_message.clone(),
            is_valid: validation.is_valid,
            counter_label: counter.label(),
            counter,
            max_length: MAX_SSID_LENGTH,
            clear_button: self
                .shows_clear_button()
                .then(|| Button::icon("close", "Clear network name").on_press(CLEAR_EVENT)),
            on_change: CHANGE_EVENT.to_string(),
            styles: self.computed_styles(theme, &validation, &counter),
        }
    }

    fn computed_styles(
        &self,
        theme: &Theme,
        validation: &ValidationResult,
        counter: &CharacterCount,
    ) -> SsidInputStyles {
        let colors = &theme.colors;
        let (border_color, border_width) = if !validation.is_valid && !self.field.is_empty() {
            (colors.error.clone(), border::FOCUSED)
        } else if self.focused {
            (colors.border_focused.clone(), border::FOCUSED)
        } else {
            (colors.border.clone(), border::THIN)
        };

        SsidInputStyles {
            background: colors.input_fill.clone(),
            text_color: colors.text.clone(),
            placeholder_color: colors.text_muted.clone(),
            label_color: colors.text_muted.clone(),
            border_color,
            border_width,
            border_radius: radius::SM,
            height: sizing::input::HEIGHT,
            padding: Spacing::symmetric(spacing::SM, sizing::input::PADDING_X),
            helper_color: colors.text_muted.clone(),
            error_color: colors.error.clone(),
            counter_color: if counter.emphasized {
                colors.warning.clone()
            } else {
                colors.text_muted.clone()
            },
            label_typography: TypographyVariant::Label,
            text_typography: TypographyVariant::Body,
            helper_typography: TypographyVariant::Caption,
            counter_typography: TypographyVariant::Counter,
        }
    }
}

/// Serializable render snapshot of an [`SsidInput`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SsidInputProps {
    /// Field label
    pub label: String,
    /// Placeholder text
    pub placeholder: String,
    /// Current value
    pub value: String,
    /// Helper line, present only when there is no error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub helper_text: Option<String>,
    /// Error line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Whether the value is valid
    pub is_valid: bool,
    /// Counter label, e.g. `"8/32"`
    pub counter_label: String,
    /// Counter details
    pub counter: CharacterCount,
    /// Capture limit
    pub max_length: usize,
    /// Clear button, present only when the field is non-empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clear_button: Option<Button>,
    /// Change handler identifier
    pub on_change: EventHandler,
    /// Computed styles
    pub styles: SsidInputStyles,
}

/// Computed styles for the network name input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SsidInputStyles {
    /// Field fill
    pub background: Color,
    /// Value text color
    pub text_color: Color,
    /// Placeholder color
    pub placeholder_color: Color,
    /// Label color
    pub label_color: Color,
    /// Border color
    pub border_color: Color,
    /// Border width
    pub border_width: f32,
    /// Corner radius
    pub border_radius: f32,
    /// Field height
    pub height: f32,
    /// Content padding
    pub padding: Spacing,
    /// Helper line color
    pub helper_color: Color,
    /// Error line color
    pub error_color: Color,
    /// Counter color; the warning color once the counter is emphasized
    pub counter_color: Color,
    /// Label text style
    pub label_typography: TypographyVariant,
    /// Value text style
    pub text_typography: TypographyVariant,
    /// Helper and error text style
    pub helper_typography: TypographyVariant,
    /// Counter text style
    pub counter_typography: TypographyVariant,
}
