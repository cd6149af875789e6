//! Supported QR code content types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of content a generated QR code carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum QrType {
    /// Website link
    #[default]
    Url,
    /// Free-form text
    Text,
    /// WiFi network credentials
    Wifi,
    /// Email address with optional subject
    Email,
    /// Phone number
    Phone,
    /// Text message
    Sms,
    /// Contact card
    Contact,
}

impl QrType {
    /// All types, in home-screen order
    pub fn all() -> [QrType; 7] {
        [
            QrType::Url,
            QrType::Text,
            QrType::Wifi,
            QrType::Email,
            QrType::Phone,
            QrType::Sms,
            QrType::Contact,
        ]
    }

    /// Stable identifier used in routes and settings
    pub fn slug(&self) -> &'static str {
        match self {
            QrType::Url => "url",
            QrType::Text => "text",
            QrType::Wifi => "wifi",
            QrType::Email => "email",
            QrType::Phone => "phone",
            QrType::Sms => "sms",
            QrType::Contact => "contact",
        }
    }

    /// Card title
    pub fn title(&self) -> &'static str {
        match self {
            QrType::Url => "Website",
            QrType::Text => "Text",
            QrType::Wifi => "WiFi",
            QrType::Email => "Email",
            QrType::Phone => "Phone",
            QrType::Sms => "SMS",
            QrType::Contact => "Contact",
        }
    }

    /// Card subtitle
    pub fn description(&self) -> &'static str {
        match self {
            QrType::Url => "Open a link in the browser",
            QrType::Text => "Share a short note",
            QrType::Wifi => "Join a network without typing the password",
            QrType::Email => "Start an email draft",
            QrType::Phone => "Call a number",
            QrType::Sms => "Send a prefilled message",
            QrType::Contact => "Save a contact card",
        }
    }

    /// Icon name
    pub fn icon(&self) -> &'static str {
        match self {
            QrType::Url => "link",
            QrType::Text => "text",
            QrType::Wifi => "wifi",
            QrType::Email => "mail",
            QrType::Phone => "phone",
            QrType::Sms => "message",
            QrType::Contact => "person",
        }
    }
}

impl fmt::Display for QrType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for QrType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        QrType::all()
            .into_iter()
            .find(|t| t.slug() == lower)
            .ok_or_else(|| format!("Unknown QR type: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_is_unique() {
        let all = QrType::all();
        let unique: HashSet<_> = all.iter().collect();
        assert_eq!(unique.len(), all.len());
        assert_eq!(all[0], QrType::default());
    }

    #[test]
    fn test_slug_round_trips_through_from_str() {
        for t in QrType::all() {
            assert_eq!(t.slug().parse::<QrType>().unwrap(), t);
        }
        assert_eq!("WIFI".parse::<QrType>().unwrap(), QrType::Wifi);
        assert!("barcode".parse::<QrType>().is_err());
    }

    #[test]
    fn test_display_uses_title() {
        assert_eq!(QrType::Sms.to_string(), "SMS");
        assert_eq!(QrType::Wifi.to_string(), "WiFi");
    }

    #[test]
    fn test_serde_matches_slug() {
        for t in QrType::all() {
            let json = serde_json::to_string(&t).unwrap();
            assert_eq!(json, format!("\"{}\"", t.slug()));
        }
    }

    #[test]
    fn test_every_type_has_card_text() {
        for t in QrType::all() {
            assert!(!t.description().is_empty());
            assert!(!t.icon().is_empty());
        }
    }
}
