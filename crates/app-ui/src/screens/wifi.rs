//! WiFi generator screen
//!
//! Collects the network name, password, security mode and hidden flag, and
//! produces the payload for the QR encoder once the form validates.

use crate::components::{Button, Input, SsidInput, SsidInputProps};
use crate::navigation::Route;
use crate::theme::Theme;
use app_core::wifi::{WifiError, WifiNetwork, WifiSecurity, MAX_PASSWORD_LEN};
use app_core::QrType;
use serde::{Deserialize, Serialize};

/// Event emitted by the generate button
pub const GENERATE_EVENT: &str = "wifi:generate";

/// Everything the renderer needs to draw the WiFi form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WifiView {
    /// App bar title
    pub title: String,
    /// Network name input
    pub ssid: SsidInputProps,
    /// Password input, absent for open networks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<Input>,
    /// Selected security mode
    pub security: WifiSecurity,
    /// Security modes offered, in display order
    pub security_options: Vec<WifiSecurity>,
    /// Hidden network flag
    pub hidden: bool,
    /// Generate button, disabled until the form validates
    pub generate: Button,
}

/// WiFi form state
#[derive(Debug, Default)]
pub struct WifiScreen {
    ssid: SsidInput,
    password: String,
    security: WifiSecurity,
    hidden: bool,
}

impl WifiScreen {
    /// Create an empty form
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a form prefilled from a network
    pub fn from_network(network: &WifiNetwork) -> Self {
        Self {
            ssid: SsidInput::with_value(network.ssid.clone()),
            password: network.password.clone(),
            security: network.security,
            hidden: network.hidden,
        }
    }

    /// Route for this screen
    pub fn route() -> Route {
        Route::generator(QrType::Wifi)
    }

    /// Network name input
    pub fn ssid(&self) -> &SsidInput {
        &self.ssid
    }

    /// Mutable network name input, for keystrokes and clearing
    pub fn ssid_mut(&mut self) -> &mut SsidInput {
        &mut self.ssid
    }

    /// Set the password
    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    /// Set the security mode
    pub fn set_security(&mut self, security: WifiSecurity) {
        self.security = security;
    }

    /// Set the hidden flag
    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    /// Current form contents as a network
    pub fn network(&self) -> WifiNetwork {
        WifiNetwork {
            ssid: self.ssid.value().to_string(),
            password: self.password.clone(),
            security: self.security,
            hidden: self.hidden,
        }
    }

    /// Whether the form would produce a payload
    pub fn can_generate(&self) -> bool {
        self.network().validate().is_ok()
    }

    /// Payload for the QR encoder
    pub fn payload(&self) -> Result<String, WifiError> {
        let payload = self.network().payload()?;
        tracing::info!(security = %self.security, hidden = self.hidden, "wifi payload generated");
        Ok(payload)
    }

    /// Build the view for `theme`
    pub fn render(&self, theme: &Theme) -> WifiView {
        let password = self.security.requires_password().then(|| {
            let input = Input::password()
                .with_label("Password")
                .with_placeholder("Enter WiFi password")
                .with_value(self.password.clone())
                .with_max_length(MAX_PASSWORD_LEN)
                .required()
                .on_change("wifi:password");
            match self.network().validate() {
                Err(err) if !matches!(err, WifiError::InvalidSsid(_)) && !self.password.is_empty() => {
                    input.with_error(err.to_string())
                }
                _ => input,
            }
        });

        WifiView {
            title: Self::route().title(),
            ssid: self.ssid.render(theme),
            password,
            security: self.security,
            security_options: vec![WifiSecurity::Wpa, WifiSecurity::Wep, WifiSecurity::Open],
            hidden: self.hidden,
            generate: Button::new("Generate QR Code")
                .with_icon("qr-code")
                .disabled(!self.can_generate())
                .on_press(GENERATE_EVENT),
        }
    }
}
