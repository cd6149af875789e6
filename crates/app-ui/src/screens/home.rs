//! Home screen
//!
//! Branded header with the theme toggle, followed by one card per QR type.

use crate::components::{FeatureCard, ThemeToggle};
use crate::navigation::Route;
use crate::theme::{Gradient, ThemeName, ThemeState};
use crate::tokens::{duration, sizing};
use app_core::branding;
use app_core::QrType;
use serde::{Deserialize, Serialize};

/// Header block at the top of the home screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeHeader {
    /// App name
    pub title: String,
    /// Tagline under the name
    pub tagline: String,
    /// Logo asset path
    pub logo: String,
    /// Logo edge length
    pub logo_size: f32,
    /// Background gradient
    pub gradient: Gradient,
    /// Fade-in duration in milliseconds
    pub fade_in_ms: u32,
}

/// Everything the renderer needs to draw the home screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeView {
    /// Active theme
    pub theme: ThemeName,
    /// Page background
    pub background: String,
    /// Header
    pub header: HomeHeader,
    /// Light/dark switch
    pub theme_toggle: ThemeToggle,
    /// One card per QR type, in display order
    pub cards: Vec<FeatureCard>,
}

/// Home screen state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HomeScreen {
    theme: ThemeState,
}

impl HomeScreen {
    /// Create the home screen in the given theme
    pub fn new(theme_name: ThemeName) -> Self {
        Self { theme: ThemeState::new(theme_name) }
    }

    /// Theme state
    pub fn theme(&self) -> &ThemeState {
        &self.theme
    }

    /// Flip between light and dark, returning the new theme
    pub fn toggle_theme(&mut self) -> ThemeName {
        self.theme.toggle()
    }

    /// Route opened by tapping the card for `qr_type`
    pub fn select(&self, qr_type: QrType) -> Route {
        tracing::info!(qr_type = qr_type.slug(), "generator selected");
        Route::generator(qr_type)
    }

    /// Build the view for the current theme
    pub fn render(&self) -> HomeView {
        let theme = self.theme.current_theme();

        let cards = QrType::all()
            .into_iter()
            .enumerate()
            .map(|(i, qr_type)| {
                FeatureCard::for_type(qr_type, theme)
                    .with_enter_delay(i as u32 * duration::CARD_STAGGER)
            })
            .collect();

        HomeView {
            theme: theme.name,
            background: theme.colors.background.clone(),
            header: HomeHeader {
                title: branding::APP_NAME.to_string(),
                tagline: branding::APP_TAGLINE.to_string(),
                logo: branding::LOGO_PATH.to_string(),
                logo_size: sizing::LOGO,
                gradient: theme.header_gradient.clone(),
                fade_in_ms: duration::HEADER_FADE,
            },
            theme_toggle: ThemeToggle::new(theme.name),
            cards,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::header_gradient;

    #[test]
    fn test_home_has_card_per_type() {
        let view = HomeScreen::default().render();
        assert_eq!(view.cards.len(), QrType::all().len());
        assert_eq!(view.cards[0].qr_type, QrType::Url);
        assert_eq!(view.cards[0].enter_delay_ms, 0);
        assert_eq!(view.cards[2].enter_delay_ms, 2 * duration::CARD_STAGGER);
    }

    #[test]
    fn test_header_branding() {
        let view = HomeScreen::default().render();
        assert_eq!(view.header.title, "QR Studio");
        assert_eq!(view.header.tagline, branding::APP_TAGLINE);
        assert_eq!(view.header.gradient, header_gradient(ThemeName::Light));
    }

    #[test]
    fn test_toggle_theme_rerenders() {
        let mut screen = HomeScreen::new(ThemeName::Light);
        let light = screen.render();

        assert_eq!(screen.toggle_theme(), ThemeName::Dark);
        let dark = screen.render();
        assert_eq!(dark.theme, ThemeName::Dark);
        assert_ne!(light.background, dark.background);
        assert_eq!(dark.theme_toggle.button.icon.as_deref(), Some("sun"));

        assert_eq!(screen.toggle_theme(), ThemeName::Light);
    }

    #[test]
    fn test_select_routes_to_generator() {
        let screen = HomeScreen::default();
        let route = screen.select(QrType::Wifi);
        assert_eq!(route.to_path(), "/create/wifi");
    }

    #[test]
    fn test_view_serializes() {
        let json = serde_json::to_value(HomeScreen::new(ThemeName::Dark).render()).unwrap();
        assert_eq!(json["theme"], "dark");
        assert_eq!(json["cards"].as_array().map(Vec::len), Some(7));
    }
}
