//! WiFi Form Integration Tests
//!
//! End-to-end behaviour of the network name field as hosted by the WiFi
//! screen: capture clamping, live counter, clearing and payload generation.

use app_core::{character_count_label, validate, QrType, WifiNetwork, WifiSecurity};
use app_ui::components::SsidInput;
use app_ui::{dark_theme, light_theme, HomeScreen, NavigationStack, Route, ThemeName, WifiScreen};
use std::cell::RefCell;
use std::rc::Rc;

const REQUIRED: &str = "Network name is required";
const TOO_LONG: &str = "Network name is too long (max 32 characters)";

/// Home card tap through to a generated payload
#[test]
fn test_home_to_wifi_payload() {
    let home = HomeScreen::new(ThemeName::Light);
    let mut stack = NavigationStack::default();

    stack.push(home.select(QrType::Wifi));
    assert_eq!(stack.current(), &WifiScreen::route());
    assert_eq!(stack.current().title(), "WiFi QR Code");

    let mut screen = WifiScreen::new();
    screen.ssid_mut().handle_input("HomeWiFi");
    screen.set_password("correct horse");
    assert!(screen.can_generate());
    assert_eq!(
        screen.payload().unwrap(),
        "WIFI:T:WPA;S:HomeWiFi;P:correct horse;;"
    );

    assert!(stack.pop());
    assert_eq!(stack.current(), &Route::Home);
}

/// Typing character by character keeps the counter and error in step
#[test]
fn test_typing_updates_counter_and_emphasis() {
    let theme = light_theme();
    let mut input = SsidInput::new();
    let mut typed = String::new();

    for i in 1..=32 {
        typed.push('x');
        let result = input.handle_input(&typed);
        assert!(result.is_valid);

        let props = input.render(&theme);
        assert_eq!(props.counter_label, format!("{}/32", i));
        assert_eq!(props.counter.emphasized, i >= 29, "emphasis at {}", i);
    }

    // The 33rd keystroke is swallowed by the capture clamp
    typed.push('x');
    input.handle_input(&typed);
    assert_eq!(input.render(&theme).counter_label, "32/32");
    assert!(input.field().is_valid());
}

/// Seeded values bypass the clamp and are reported instead
#[test]
fn test_seeded_overlong_value_reports_error() {
    let name = "S".repeat(40);
    let screen = WifiScreen::from_network(&WifiNetwork::open(name.clone()));

    let view = screen.render(&dark_theme());
    assert_eq!(view.ssid.value, name);
    assert_eq!(view.ssid.counter_label, "40/32");
    assert_eq!(view.ssid.error.as_deref(), Some(TOO_LONG));
    assert!(view.generate.disabled);
    assert_eq!(validate(&name).error_message.as_deref(), Some(TOO_LONG));
}

/// Clearing notifies the host and yields the required error
#[test]
fn test_clear_notifies_host() {
    let changes = Rc::new(RefCell::new(Vec::<String>::new()));
    let sink = changes.clone();

    let mut screen = WifiScreen::from_network(&WifiNetwork::new("Office", "password123"));
    screen
        .ssid_mut()
        .set_on_changed(move |text| sink.borrow_mut().push(text.to_string()));

    screen.ssid_mut().handle_input("Office 2");
    screen.ssid_mut().clear();

    assert_eq!(*changes.borrow(), vec!["Office 2".to_string(), String::new()]);

    let view = screen.render(&light_theme());
    assert_eq!(view.ssid.error.as_deref(), Some(REQUIRED));
    assert_eq!(view.ssid.counter_label, "0/32");
    assert!(view.ssid.clear_button.is_none());
    assert!(!screen.can_generate());
}

/// Empty is checked before length
#[test]
fn test_required_takes_precedence() {
    assert_eq!(validate("").error_message.as_deref(), Some(REQUIRED));
    assert_eq!(character_count_label(""), "0/32");
}

/// Switching security changes which fields are needed
#[test]
fn test_security_modes() {
    let mut screen = WifiScreen::new();
    screen.ssid_mut().handle_input("Lab");

    screen.set_security(WifiSecurity::Wpa);
    assert!(!screen.can_generate());

    screen.set_security(WifiSecurity::Wep);
    screen.set_password("abcde");
    assert!(screen.can_generate());

    screen.set_security(WifiSecurity::Open);
    screen.set_hidden(true);
    assert_eq!(screen.payload().unwrap(), "WIFI:T:nopass;S:Lab;H:true;;");
}

/// Theme toggling restyles the counter without touching validation
#[test]
fn test_theme_toggle_keeps_field_state() {
    let mut home = HomeScreen::new(ThemeName::Light);
    let input = SsidInput::with_value("a".repeat(30));

    let light = input.render(home.theme().current_theme());
    home.toggle_theme();
    let dark = input.render(home.theme().current_theme());

    assert_eq!(light.counter_label, dark.counter_label);
    assert_eq!(light.is_valid, dark.is_valid);
    assert_eq!(dark.styles.counter_color, dark_theme().colors.warning);
    assert_ne!(light.styles.counter_color, dark.styles.counter_color);
}
