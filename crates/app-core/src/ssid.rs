//! WiFi network name (SSID) field
//!
//! Validation and live character-count feedback for the single bounded
//! text field that captures a network name. Validity is a pure function of
//! the current text: the error message and the counter are recomputed on
//! every read, so they can never go stale relative to the content.
//!
//! Truncation is not done here. The widget that captures keystrokes clamps
//! input to [`MAX_SSID_LENGTH`]; text supplied programmatically (seeded
//! values, pasted payloads) reaches this module untouched and is reported
//! as too long instead of being cut.
//!
//! # Example
//!
//! ```
//! use app_core::ssid::{validate, character_count_label, SsidField};
//!
//! let result = validate("HomeWiFi");
//! assert!(result.is_valid);
//! assert_eq!(character_count_label("HomeWiFi"), "8/32");
//!
//! let mut field = SsidField::with_text("Office");
//! field.clear();
//! assert_eq!(field.error_message().as_deref(), Some("Network name is required"));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use unicode_segmentation::UnicodeSegmentation;

/// Maximum SSID length per IEEE 802.11.
pub const MAX_SSID_LENGTH: usize = 32;

/// Fraction of [`MAX_SSID_LENGTH`] at which the counter is emphasized.
pub const COUNTER_WARNING_RATIO: f32 = 0.9;

/// Reason a network name is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SsidIssue {
    /// Field is empty
    #[error("Network name is required")]
    Required,

    /// Field holds more than [`MAX_SSID_LENGTH`] characters
    #[error("Network name is too long (max 32 characters)")]
    TooLong,
}

/// Outcome of validating a network name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// Whether the text is an acceptable network name
    pub is_valid: bool,
    /// Diagnostic shown beneath the field, absent when valid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl ValidationResult {
    fn valid() -> Self {
        Self { is_valid: true, error_message: None }
    }

    fn invalid(issue: SsidIssue) -> Self {
        Self { is_valid: false, error_message: Some(issue.to_string()) }
    }
}

impl From<Option<SsidIssue>> for ValidationResult {
    fn from(issue: Option<SsidIssue>) -> Self {
        match issue {
            Some(issue) => Self::invalid(issue),
            None => Self::valid(),
        }
    }
}

/// Number of user-perceived characters in `text`.
///
/// Counts extended grapheme clusters so a flag emoji or an accented letter
/// built from combining marks counts once, matching what the capture
/// widget lets the user type.
pub fn char_len(text: &str) -> usize {
    text.graphemes(true).count()
}

/// Classify `text`, checking emptiness before length.
pub fn check(text: &str) -> Option<SsidIssue> {
    let len = char_len(text);
    if len == 0 {
        Some(SsidIssue::Required)
    } else if len > MAX_SSID_LENGTH {
        Some(SsidIssue::TooLong)
    } else {
        None
    }
}

/// Validate a candidate network name.
///
/// Never fails: invalid input is reported through
/// [`ValidationResult::error_message`].
pub fn validate(text: &str) -> ValidationResult {
    check(text).into()
}

/// Live character counter shown next to the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterCount {
    /// Current length
    pub count: usize,
    /// Policy maximum
    pub max: usize,
    /// Render with warning emphasis (length within 10% of the maximum)
    pub emphasized: bool,
}

impl CharacterCount {
    /// Counter for `text`
    pub fn of(text: &str) -> Self {
        let count = char_len(text);
        Self {
            count,
            max: MAX_SSID_LENGTH,
            emphasized: count as f32 >= MAX_SSID_LENGTH as f32 * COUNTER_WARNING_RATIO,
        }
    }

    /// Display label, e.g. `"8/32"`
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CharacterCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.count, self.max)
    }
}

/// Counter label for `text`, formatted as `"{len}/32"`.
pub fn character_count_label(text: &str) -> String {
    CharacterCount::of(text).label()
}

/// Callback invoked with the new text whenever the field changes
pub type ChangeListener = Box<dyn FnMut(&str)>;

/// State of the network name field owned by a hosting form
#[derive(Default)]
pub struct SsidField {
    text: String,
    on_changed: Option<ChangeListener>,
}

impl fmt::Debug for SsidField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SsidField")
            .field("text", &self.text)
            .field("has_listener", &self.on_changed.is_some())
            .finish()
    }
}

impl SsidField {
    /// Create an empty field
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a field seeded with an initial value
    pub fn with_text(text: impl Into<String>) -> Self {
        Self { text: text.into(), on_changed: None }
    }

    /// Register the host's change listener, replacing any previous one
    pub fn set_on_changed(&mut self, listener: impl FnMut(&str) + 'static) {
        self.on_changed = Some(Box::new(listener));
    }

    /// Current text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Current length in characters
    pub fn len(&self) -> usize {
        char_len(&self.text)
    }

    /// Whether the field is empty
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Replace the text and return the fresh validation result.
    ///
    /// The text is stored as given, even when it exceeds the maximum.
    pub fn set_text(&mut self, text: impl Into<String>) -> ValidationResult {
        self.text = text.into();
        tracing::trace!(len = self.len(), "ssid field changed");
        self.notify();
        self.validation()
    }

    /// Reset the text to empty and notify the host.
    pub fn clear(&mut self) {
        self.text.clear();
        tracing::trace!("ssid field cleared");
        self.notify();
    }

    /// Validation result for the current text
    pub fn validation(&self) -> ValidationResult {
        validate(&self.text)
    }

    /// Current diagnostic, if any
    pub fn error_message(&self) -> Option<String> {
        self.validation().error_message
    }

    /// Current issue, if any
    pub fn issue(&self) -> Option<SsidIssue> {
        check(&self.text)
    }

    /// Whether the current text is a valid network name
    pub fn is_valid(&self) -> bool {
        self.issue().is_none()
    }

    /// Counter for the current text
    pub fn character_count(&self) -> CharacterCount {
        CharacterCount::of(&self.text)
    }

    /// Counter label for the current text
    pub fn character_count_label(&self) -> String {
        self.character_count().label()
    }

    fn notify(&mut self) {
        if let Some(listener) = self.on_changed.as_mut() {
            listener(&self.text);
        }
    }
}
