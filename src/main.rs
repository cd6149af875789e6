//! QR Studio command-line host
//!
//! Drives the screens and prints their views as JSON for an external
//! renderer. Logs go to stderr so stdout stays machine-readable.

use anyhow::{Context, Result};
use app_platform::{default_settings_path, AppSettings, ColorMode, FileSaver, SettingsStore};
use app_ui::components::SsidInput;
use app_ui::{get_theme, HomeScreen, ThemeName, ThemeState, WifiScreen};
use serde_json::json;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;

use cli::{Command, ThemeAction};

fn theme_for(mode: ColorMode) -> ThemeName {
    match mode {
        ColorMode::Dark => ThemeName::Dark,
        ColorMode::Light | ColorMode::System => ThemeName::Light,
    }
}

fn mode_for(theme: ThemeName) -> ColorMode {
    match theme {
        ThemeName::Light => ColorMode::Light,
        ThemeName::Dark => ColorMode::Dark,
    }
}

/// Settings for commands that only read them. Problems are logged and
/// answered with defaults so a bad settings file never blocks a lookup.
async fn read_settings(path: app_platform::Result<PathBuf>) -> AppSettings {
    match path {
        Ok(path) => SettingsStore::read_or_default(&path).await,
        Err(e) => {
            warn!(error = %e, "no settings location, using defaults");
            AppSettings::default()
        }
    }
}

/// Writable store for commands that persist changes
async fn open_store(path: app_platform::Result<PathBuf>) -> Result<SettingsStore> {
    let path = path?;
    SettingsStore::open(&path)
        .await
        .with_context(|| format!("failed to open settings at {}", path.display()))
}

async fn run(
    command: Command,
    settings_path: app_platform::Result<PathBuf>,
) -> Result<serde_json::Value> {
    let output = match command {
        Command::Help => {
            print!("{}", cli::USAGE);
            return Ok(serde_json::Value::Null);
        }
        Command::Home { dark } => {
            let current = read_settings(settings_path).await;
            let theme = if dark { ThemeName::Dark } else { theme_for(current.color_mode) };
            serde_json::to_value(HomeScreen::new(theme).render())?
        }
        Command::Ssid { text } => {
            let current = read_settings(settings_path).await;
            let mut input = SsidInput::new();
            let validation = input.set_value(text);
            json!({
                "validation": validation,
                "characterCount": input.field().character_count_label(),
                "input": input.render(&get_theme(theme_for(current.color_mode))),
            })
        }
        Command::Wifi { ssid, password, security, hidden, save } => {
            let settings = open_store(settings_path).await?;
            let current = settings.get().await;

            let mut screen = WifiScreen::new();
            screen.ssid_mut().set_value(ssid);
            screen.set_password(password);
            screen.set_security(security);
            screen.set_hidden(hidden);

            let view = screen.render(&get_theme(theme_for(current.color_mode)));
            let payload = screen.payload();

            let saved = match (&payload, save) {
                (Ok(payload), Some(target)) => Some(
                    FileSaver::new(target.location)
                        .save(&target.file_name, payload.as_bytes())
                        .await?,
                ),
                _ => None,
            };

            settings.update(|s| s.last_qr_type = Some(app_core::QrType::Wifi)).await?;

            json!({
                "view": view,
                "payload": payload.as_ref().ok(),
                "error": payload.as_ref().err().map(|e| e.to_string()),
                "saved": saved,
            })
        }
        Command::Theme(action) => {
            let settings = open_store(settings_path).await?;
            let current = settings.get().await;
            let next = match action {
                ThemeAction::Toggle => {
                    let mut state = ThemeState::new(theme_for(current.color_mode));
                    mode_for(state.toggle())
                }
                ThemeAction::Set(mode) => mode,
            };
            let updated = settings.update(|s| s.color_mode = next).await?;
            info!(mode = ?updated.color_mode, "color mode saved");
            serde_json::to_value(updated)?
        }
    };

    Ok(output)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let command = cli::parse(std::env::args().skip(1))?;

    let settings_path = default_settings_path();
    if let Ok(path) = &settings_path {
        info!(
            "{} v{} (settings: {})",
            app_core::branding::APP_NAME,
            app_core::branding::APP_VERSION,
            path.display()
        );
    }

    let output = run(command, settings_path).await?;
    if !output.is_null() {
        println!("{}", serde_json::to_string_pretty(&output)?);
    }
    Ok(())
}
