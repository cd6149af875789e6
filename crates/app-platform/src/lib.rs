//! Platform services for QR Studio
//!
//! File export into the user's folders and the persisted settings file.
//! Everything touching the filesystem is async on `tokio::fs`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod file_save;
pub mod settings;

use std::path::PathBuf;
use thiserror::Error;

pub use file_save::{sanitize_file_name, FileSaver, SaveLocation};
pub use settings::{AppSettings, ColorMode, SettingsStore, SETTINGS_VERSION};

/// Platform error types
#[derive(Debug, Error)]
pub enum PlatformError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// File name is empty or only reserved characters
    #[error("Invalid file name: {0:?}")]
    InvalidFileName(String),

    /// The requested user folder does not exist on this platform
    #[error("No {0} directory available")]
    NoTargetDirectory(String),

    /// Settings file failed its checksum
    #[error("Corruption detected: {0}")]
    Corruption(String),

    /// Settings file written by an incompatible version
    #[error("Version mismatch: expected {expected}, found {found}")]
    VersionMismatch {
        /// Expected version
        expected: u32,
        /// Found version
        found: u32,
    },
}

/// Result type for platform operations
pub type Result<T> = std::result::Result<T, PlatformError>;

/// Environment variable overriding the settings file location
pub const CONFIG_ENV: &str = "QR_STUDIO_CONFIG";

/// Default settings file path.
///
/// `$QR_STUDIO_CONFIG` when set, otherwise `settings.json` in the platform
/// config directory (`~/.config/qr-studio` on Linux).
pub fn default_settings_path() -> Result<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return Ok(PathBuf::from(path));
    }
    let dirs = directories::ProjectDirs::from("com", "qrstudio", "qr-studio")
        .ok_or_else(|| PlatformError::NoTargetDirectory("config".to_string()))?;
    Ok(dirs.config_dir().join("settings.json"))
}
