//! Typography system for QR Studio
//!
//! A small fixed table of text styles. Every piece of text the screens emit
//! names one [`TypographyVariant`]; the renderer looks the style up in a
//! [`Typography`] scaled by the user's font preference.

use crate::theme::clamp_font_scale;
use crate::tokens::{font_weight, line_height, tracking};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Font size scale in pixels
pub mod font_size {
    /// Caption and counter text (12px)
    pub const CAPTION: f32 = 12.0;
    /// Small body text (14px)
    pub const BODY_SM: f32 = 14.0;
    /// Body text (16px)
    pub const BODY: f32 = 16.0;
    /// Small title (18px)
    pub const TITLE_SM: f32 = 18.0;
    /// Title (22px)
    pub const TITLE: f32 = 22.0;
    /// Headline (28px)
    pub const HEADLINE: f32 = 28.0;
    /// Display (36px)
    pub const DISPLAY: f32 = 36.0;
}

/// A typography style definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in pixels
    pub font_size: f32,
    /// Font weight (400, 500, 600, 700)
    pub font_weight: u16,
    /// Line height multiplier
    pub line_height: f32,
    /// Letter spacing in em
    pub letter_spacing: f32,
    /// Font family override (None = theme default)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
}

impl TextStyle {
    /// Create a new text style
    pub fn new(font_size: f32, font_weight: u16) -> Self {
        Self {
            font_size,
            font_weight,
            line_height: line_height::NORMAL,
            letter_spacing: tracking::DEFAULT,
            font_family: None,
        }
    }

    /// Set line height
    pub fn with_line_height(mut self, lh: f32) -> Self {
        self.line_height = lh;
        self
    }

    /// Set letter spacing
    pub fn with_letter_spacing(mut self, ls: f32) -> Self {
        self.letter_spacing = ls;
        self
    }

    /// Set font family
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    /// Calculate the actual line height in pixels
    pub fn line_height_px(&self) -> f32 {
        self.font_size * self.line_height
    }

    /// Scale the font size by a multiplier
    pub fn scale(&self, multiplier: f32) -> Self {
        Self {
            font_size: self.font_size * multiplier,
            ..self.clone()
        }
    }
}

/// Typography variant identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TypographyVariant {
    /// App name in the home header
    Display,
    /// Screen headings
    Headline,
    /// App bar titles
    Title,
    /// Card titles
    TitleSm,
    /// Body text
    #[default]
    Body,
    /// Card subtitles, helper text
    BodySm,
    /// Input labels
    Label,
    /// Error text beneath inputs
    Caption,
    /// Character counter
    Counter,
    /// Button text
    Button,
    /// Generated payload preview
    Mono,
}

impl TypographyVariant {
    /// All variants
    pub fn all() -> [TypographyVariant; 11] {
        use TypographyVariant::*;
        [Display, Headline, Title, TitleSm, Body, BodySm, Label, Caption, Counter, Button, Mono]
    }

    /// Get the unscaled text style for this variant
    pub fn style(&self) -> TextStyle {
        match self {
            Self::Display => TextStyle::new(font_size::DISPLAY, font_weight::BOLD)
                .with_line_height(line_height::TIGHT)
                .with_letter_spacing(tracking::TIGHT),
            Self::Headline => TextStyle::new(font_size::HEADLINE, font_weight::BOLD)
                .with_line_height(line_height::TIGHT),
            Self::Title => TextStyle::new(font_size::TITLE, font_weight::SEMI_BOLD),
            Self::TitleSm => TextStyle::new(font_size::TITLE_SM, font_weight::SEMI_BOLD),
            Self::Body => TextStyle::new(font_size::BODY, font_weight::NORMAL)
                .with_line_height(line_height::RELAXED),
            Self::BodySm => TextStyle::new(font_size::BODY_SM, font_weight::NORMAL),
            Self::Label => TextStyle::new(font_size::BODY_SM, font_weight::MEDIUM)
                .with_letter_spacing(tracking::WIDE),
            Self::Caption => TextStyle::new(font_size::CAPTION, font_weight::NORMAL),
            Self::Counter => TextStyle::new(font_size::CAPTION, font_weight::MEDIUM)
                .with_font_family("monospace"),
            Self::Button => TextStyle::new(font_size::BODY, font_weight::SEMI_BOLD)
                .with_letter_spacing(tracking::WIDE),
            Self::Mono => TextStyle::new(font_size::BODY_SM, font_weight::NORMAL)
                .with_font_family("monospace"),
        }
    }
}

/// Typography table scaled for the user's font preference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Typography {
    /// Font scale multiplier (for accessibility)
    pub scale: f32,
    /// All text styles
    pub styles: HashMap<TypographyVariant, TextStyle>,
}

impl Default for Typography {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Typography {
    /// Create a typography table with the given scale (clamped to 0.8 - 1.4)
    pub fn new(scale: f32) -> Self {
        let scale = clamp_font_scale(scale);
        let styles = TypographyVariant::all()
            .iter()
            .map(|v| (*v, v.style().scale(scale)))
            .collect();

        Self { scale, styles }
    }

    /// Get a text style by variant
    pub fn get(&self, variant: TypographyVariant) -> Option<&TextStyle> {
        self.styles.get(&variant)
    }

    /// Set the font scale and recalculate all styles
    pub fn set_scale(&mut self, scale: f32) {
        let clamped = clamp_font_scale(scale);
        if (clamped - self.scale).abs() > f32::EPSILON {
            *self = Self::new(clamped);
        }
    }
}
