//! WiFi network QR content
//!
//! Form model for the WiFi QR type and the payload text handed to the QR
//! encoder. The payload uses the widely supported
//! `WIFI:T:<security>;S:<ssid>;P:<password>;H:true;;` format.

use crate::ssid::{self, char_len};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Minimum WPA passphrase length.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Maximum WPA passphrase length (64 hex digits for a raw key).
pub const MAX_PASSWORD_LEN: usize = 64;

/// WiFi form errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WifiError {
    /// Network name failed validation
    #[error("{0}")]
    InvalidSsid(String),

    /// Secured network without a password
    #[error("Password is required for secured networks")]
    PasswordRequired,

    /// Password shorter than the WPA minimum
    #[error("Password is too short ({len} characters, min {min})")]
    PasswordTooShort {
        /// Actual length
        len: usize,
        /// Required minimum
        min: usize,
    },

    /// Password longer than the WPA maximum
    #[error("Password is too long ({len} characters, max {max})")]
    PasswordTooLong {
        /// Actual length
        len: usize,
        /// Allowed maximum
        max: usize,
    },
}

/// Result type for WiFi form operations
pub type Result<T> = std::result::Result<T, WifiError>;

/// Network security mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WifiSecurity {
    /// WPA/WPA2/WPA3 personal
    #[default]
    Wpa,
    /// Legacy WEP
    Wep,
    /// No password
    Open,
}

impl WifiSecurity {
    /// Value of the `T:` field
    pub fn as_payload_str(&self) -> &'static str {
        match self {
            WifiSecurity::Wpa => "WPA",
            WifiSecurity::Wep => "WEP",
            WifiSecurity::Open => "nopass",
        }
    }

    /// Whether a password is expected
    pub fn requires_password(&self) -> bool {
        !matches!(self, WifiSecurity::Open)
    }
}

impl fmt::Display for WifiSecurity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WifiSecurity::Wpa => write!(f, "WPA/WPA2"),
            WifiSecurity::Wep => write!(f, "WEP"),
            WifiSecurity::Open => write!(f, "None"),
        }
    }
}

impl FromStr for WifiSecurity {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "wpa" | "wpa2" | "wpa3" => Ok(WifiSecurity::Wpa),
            "wep" => Ok(WifiSecurity::Wep),
            "open" | "none" | "nopass" => Ok(WifiSecurity::Open),
            _ => Err(format!("Unknown security mode: {}", s)),
        }
    }
}

/// WiFi network details entered on the WiFi form
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WifiNetwork {
    /// Network name
    pub ssid: String,
    /// Password (ignored for open networks)
    #[serde(default)]
    pub password: String,
    /// Security mode
    #[serde(default)]
    pub security: WifiSecurity,
    /// Whether the network does not broadcast its SSID
    #[serde(default)]
    pub hidden: bool,
}

impl WifiNetwork {
    /// Create a WPA network
    pub fn new(ssid: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            ssid: ssid.into(),
            password: password.into(),
            security: WifiSecurity::Wpa,
            hidden: false,
        }
    }

    /// Create an open network
    pub fn open(ssid: impl Into<String>) -> Self {
        Self {
            ssid: ssid.into(),
            security: WifiSecurity::Open,
            ..Default::default()
        }
    }

    /// Set the security mode
    pub fn with_security(mut self, security: WifiSecurity) -> Self {
        self.security = security;
        self
    }

    /// Mark the network as hidden
    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Validate the network name and the password for the security mode.
    pub fn validate(&self) -> Result<()> {
        if let Some(issue) = ssid::check(&self.ssid) {
            return Err(WifiError::InvalidSsid(issue.to_string()));
        }

        match self.security {
            WifiSecurity::Open => Ok(()),
            WifiSecurity::Wep => {
                if self.password.is_empty() {
                    Err(WifiError::PasswordRequired)
                } else {
                    Ok(())
                }
            }
            WifiSecurity::Wpa => {
                let len = char_len(&self.password);
                if len == 0 {
                    Err(WifiError::PasswordRequired)
                } else if len < MIN_PASSWORD_LEN {
                    Err(WifiError::PasswordTooShort { len, min: MIN_PASSWORD_LEN })
                } else if len > MAX_PASSWORD_LEN {
                    Err(WifiError::PasswordTooLong { len, max: MAX_PASSWORD_LEN })
                } else {
                    Ok(())
                }
            }
        }
    }

    /// Payload text for the QR encoder.
    pub fn payload(&self) -> Result<String> {
        self.validate()?;

        let mut payload = format!(
            "WIFI:T:{};S:{};",
            self.security.as_payload_str(),
            escape(&self.ssid)
        );
        if self.security.requires_password() {
            payload.push_str(&format!("P:{};", escape(&self.password)));
        }
        if self.hidden {
            payload.push_str("H:true;");
        }
        payload.push(';');
        Ok(payload)
    }
}

/// Backslash-escape the payload's reserved characters.
fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | ';' | ',' | ':' | '"') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wpa_payload() {
        let network = WifiNetwork::new("HomeWiFi", "correct horse");
        assert_eq!(
            network.payload().unwrap(),
            "WIFI:T:WPA;S:HomeWiFi;P:correct horse;;"
        );
    }

    #[test]
    fn test_open_payload_omits_password() {
        let network = WifiNetwork::open("Cafe Guest");
        assert_eq!(network.payload().unwrap(), "WIFI:T:nopass;S:Cafe Guest;;");
    }

    #[test]
    fn test_hidden_flag() {
        let network = WifiNetwork::new("Lab", "password1").hidden(true);
        assert_eq!(network.payload().unwrap(), "WIFI:T:WPA;S:Lab;P:password1;H:true;;");
    }

    #[test]
    fn test_reserved_characters_are_escaped() {
        let network = WifiNetwork::new("a;b,c:d", "p\\w\"d123");
        assert_eq!(
            network.payload().unwrap(),
            "WIFI:T:WPA;S:a\\;b\\,c\\:d;P:p\\\\w\\\"d123;;"
        );
    }

    #[test]
    fn test_ssid_rules_are_shared_with_field() {
        let empty = WifiNetwork::open("");
        assert_eq!(
            empty.validate(),
            Err(WifiError::InvalidSsid("Network name is required".to_string()))
        );

        let long = WifiNetwork::open("A".repeat(33));
        assert_eq!(
            long.validate(),
            Err(WifiError::InvalidSsid(
                "Network name is too long (max 32 characters)".to_string()
            ))
        );
    }

    #[test]
    fn test_wpa_password_bounds() {
        assert_eq!(
            WifiNetwork::new("Net", "").validate(),
            Err(WifiError::PasswordRequired)
        );
        assert_eq!(
            WifiNetwork::new("Net", "short").validate(),
            Err(WifiError::PasswordTooShort { len: 5, min: 8 })
        );
        assert_eq!(
            WifiNetwork::new("Net", "k".repeat(65)).validate(),
            Err(WifiError::PasswordTooLong { len: 65, max: 64 })
        );
        assert!(WifiNetwork::new("Net", "k".repeat(64)).validate().is_ok());
    }

    #[test]
    fn test_wep_needs_any_password() {
        let wep = WifiNetwork::new("Old", "").with_security(WifiSecurity::Wep);
        assert_eq!(wep.validate(), Err(WifiError::PasswordRequired));

        let wep = WifiNetwork::new("Old", "abcde").with_security(WifiSecurity::Wep);
        assert_eq!(wep.payload().unwrap(), "WIFI:T:WEP;S:Old;P:abcde;;");
    }

    #[test]
    fn test_security_from_str() {
        assert_eq!("WPA2".parse::<WifiSecurity>().unwrap(), WifiSecurity::Wpa);
        assert_eq!("nopass".parse::<WifiSecurity>().unwrap(), WifiSecurity::Open);
        assert_eq!("wep".parse::<WifiSecurity>().unwrap(), WifiSecurity::Wep);
        assert!("wpa4".parse::<WifiSecurity>().is_err());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            WifiError::PasswordTooShort { len: 3, min: 8 }.to_string(),
            "Password is too short (3 characters, min 8)"
        );
    }
}
