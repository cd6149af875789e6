//! Persisted app settings
//!
//! A small JSON document wrapped in a version number and an md5 checksum of
//! the payload. A missing file yields defaults; a file that fails either
//! check is reported rather than silently replaced.

use crate::{PlatformError, Result};
use app_core::QrType;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::RwLock;

/// Current settings schema version
pub const SETTINGS_VERSION: u32 = 1;

/// Preferred color mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Follow the OS
    #[default]
    System,
    /// Always light
    Light,
    /// Always dark
    Dark,
}

impl std::str::FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "system" => Ok(ColorMode::System),
            "light" => Ok(ColorMode::Light),
            "dark" => Ok(ColorMode::Dark),
            _ => Err(format!("Unknown color mode: {}", s)),
        }
    }
}

/// User settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Light/dark preference
    pub color_mode: ColorMode,
    /// Font scale multiplier (0.8 - 1.4)
    pub font_scale: f32,
    /// Generator opened most recently
    pub last_qr_type: Option<QrType>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self { color_mode: ColorMode::System, font_scale: 1.0, last_qr_type: None }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct VersionedSettings {
    version: u32,
    checksum: String,
    data: AppSettings,
}

/// Keep the scale in 0.8 - 1.4; NaN would serialize as `null` and never load back
fn clamp_font_scale(scale: f32) -> f32 {
    if scale.is_finite() {
        scale.clamp(0.8, 1.4)
    } else {
        1.0
    }
}

fn checksum(data: &AppSettings) -> Result<String> {
    let json = serde_json::to_string(data)?;
    Ok(format!("{:x}", md5::compute(json.as_bytes())))
}

/// Settings file manager
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
    settings: Arc<RwLock<AppSettings>>,
}

impl SettingsStore {
    /// Open the settings at `path`, falling back to defaults when absent
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let settings = match load(&path).await {
            Ok(settings) => settings,
            Err(PlatformError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no settings file, using defaults");
                AppSettings::default()
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to load settings");
                return Err(e);
            }
        };

        Ok(Self { path, settings: Arc::new(RwLock::new(settings)) })
    }

    /// Read the settings at `path` without opening a store.
    ///
    /// Any failure (corrupt file, version mismatch, unreadable path) is
    /// logged and answered with defaults, for callers that never write.
    pub async fn read_or_default(path: &Path) -> AppSettings {
        match load(path).await {
            Ok(settings) => settings,
            Err(PlatformError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                AppSettings::default()
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable settings");
                AppSettings::default()
            }
        }
    }

    /// Settings file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Snapshot of the current settings
    pub async fn get(&self) -> AppSettings {
        self.settings.read().await.clone()
    }

    /// Apply `f` and persist the result, returning the new settings
    pub async fn update<F>(&self, f: F) -> Result<AppSettings>
    where
        F: FnOnce(&mut AppSettings),
    {
        let mut settings = self.settings.write().await;
        let mut next = settings.clone();
        f(&mut next);
        next.font_scale = clamp_font_scale(next.font_scale);

        save(&self.path, &next).await?;
        *settings = next.clone();
        Ok(next)
    }

    /// Restore defaults and persist them
    pub async fn reset(&self) -> Result<AppSettings> {
        self.update(|s| *s = AppSettings::default()).await
    }
}

async fn load(path: &Path) -> Result<AppSettings> {
    let contents = fs::read_to_string(path).await?;
    let versioned: VersionedSettings = serde_json::from_str(&contents)?;

    let computed = checksum(&versioned.data)?;
    if computed != versioned.checksum {
        return Err(PlatformError::Corruption(format!(
            "Checksum mismatch: expected {}, got {}",
            versioned.checksum, computed
        )));
    }

    if versioned.version != SETTINGS_VERSION {
        return Err(PlatformError::VersionMismatch {
            expected: SETTINGS_VERSION,
            found: versioned.version,
        });
    }

    Ok(versioned.data)
}

async fn save(path: &Path, data: &AppSettings) -> Result<()> {
    let versioned = VersionedSettings {
        version: SETTINGS_VERSION,
        checksum: checksum(data)?,
        data: data.clone(),
    };
    let json = serde_json::to_string_pretty(&versioned)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await?;
    }

    let temp_path = path.with_extension("tmp");
    let written = async {
        let mut file = fs::File::create(&temp_path).await?;
        file.write_all(json.as_bytes()).await?;
        file.sync_all().await?;
        drop(file);
        fs::rename(&temp_path, path).await
    }
    .await;

    if let Err(e) = written {
        let _ = fs::remove_file(&temp_path).await;
        return Err(e.into());
    }
    tracing::debug!(path = %path.display(), "settings saved");
    Ok(())
}
