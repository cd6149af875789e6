//! Saving exported QR images
//!
//! Files land in one of the user's folders under a sanitized name. An
//! existing file is never replaced: `wifi.png` becomes `wifi (1).png`,
//! `wifi (2).png` and so on. The chosen name is claimed with an exclusive
//! create, then the bytes go to a hidden temp file and are renamed over the
//! claimed (empty) file once fully written.

use crate::{PlatformError, Result};
use directories::UserDirs;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Characters rejected by at least one desktop filesystem
const RESERVED: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Upper bound on `name (n).ext` attempts
const MAX_SUFFIX: u32 = 9999;

/// Where a file should be saved
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveLocation {
    /// User downloads folder
    Downloads,
    /// User pictures folder
    Pictures,
    /// User documents folder
    Documents,
    /// Explicit directory
    Custom(PathBuf),
}

impl SaveLocation {
    /// Resolve to a directory on this machine
    pub fn resolve(&self) -> Result<PathBuf> {
        match self {
            SaveLocation::Downloads => user_dir("downloads", |d| d.download_dir()),
            SaveLocation::Pictures => user_dir("pictures", |d| d.picture_dir()),
            SaveLocation::Documents => user_dir("documents", |d| d.document_dir()),
            SaveLocation::Custom(path) => Ok(path.clone()),
        }
    }
}

fn user_dir(label: &str, pick: impl FnOnce(&UserDirs) -> Option<&Path>) -> Result<PathBuf> {
    let dirs =
        UserDirs::new().ok_or_else(|| PlatformError::NoTargetDirectory("home".to_string()))?;
    pick(&dirs)
        .map(Path::to_path_buf)
        .ok_or_else(|| PlatformError::NoTargetDirectory(label.to_string()))
}

impl std::str::FromStr for SaveLocation {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "downloads" => Ok(SaveLocation::Downloads),
            "pictures" => Ok(SaveLocation::Pictures),
            "documents" => Ok(SaveLocation::Documents),
            "" => Err("Empty save location".to_string()),
            _ => Ok(SaveLocation::Custom(PathBuf::from(s))),
        }
    }
}

/// Make `name` safe to use as a single path component.
///
/// Reserved and control characters become `_`; leading and trailing dots
/// and whitespace are stripped.
pub fn sanitize_file_name(name: &str) -> Result<String> {
    let replaced: String = name
        .chars()
        .map(|c| if RESERVED.contains(&c) || c.is_control() { '_' } else { c })
        .collect();
    let trimmed = replaced.trim_matches(|c: char| c == '.' || c.is_whitespace());

    if trimmed.is_empty() || trimmed.chars().all(|c| c == '_') {
        tracing::warn!(name, "rejected file name");
        return Err(PlatformError::InvalidFileName(name.to_string()));
    }
    Ok(trimmed.to_string())
}

/// Saves bytes into a target directory
#[derive(Debug, Clone)]
pub struct FileSaver {
    location: SaveLocation,
}

impl FileSaver {
    /// Create a saver for `location`
    pub fn new(location: SaveLocation) -> Self {
        Self { location }
    }

    /// Saver writing into an explicit directory
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self::new(SaveLocation::Custom(dir.into()))
    }

    /// Target location
    pub fn location(&self) -> &SaveLocation {
        &self.location
    }

    /// Write `bytes` as `file_name` and return the path actually used.
    pub async fn save(&self, file_name: &str, bytes: &[u8]) -> Result<PathBuf> {
        let name = sanitize_file_name(file_name)?;
        let dir = self.location.resolve()?;
        fs::create_dir_all(&dir).await?;

        let target = reserve_path(&dir, &name).await?;
        if let Err(e) = write_atomic(&target, bytes).await {
            let _ = fs::remove_file(&target).await;
            return Err(e);
        }

        tracing::info!(path = %target.display(), bytes = bytes.len(), "file saved");
        Ok(target)
    }
}

/// Claim the first free path among `name`, `stem (1).ext`, `stem (2).ext`, ...
///
/// The winner is created empty with `create_new`, so a concurrent save of
/// the same name moves on to the next suffix instead of sharing the path.
async fn reserve_path(dir: &Path, name: &str) -> Result<PathBuf> {
    let (stem, ext) = split_extension(name);
    for n in 0..=MAX_SUFFIX {
        let candidate = match (n, ext) {
            (0, _) => dir.join(name),
            (_, Some(ext)) => dir.join(format!("{} ({}).{}", stem, n, ext)),
            (_, None) => dir.join(format!("{} ({})", stem, n)),
        };
        match fs::OpenOptions::new().write(true).create_new(true).open(&candidate).await {
            Ok(_) => return Ok(candidate),
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Err(PlatformError::InvalidFileName(name.to_string()))
}

fn split_extension(name: &str) -> (&str, Option<&str>) {
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => (stem, Some(ext)),
        _ => (name, None),
    }
}

/// Write via a hidden sibling temp file + rename
async fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let temp_path = path.with_file_name(format!(".{}.tmp", file_name));

    let written = async {
        let mut file = fs::File::create(&temp_path).await?;
        file.write_all(bytes).await?;
        file.sync_all().await?;
        drop(file);
        fs::rename(&temp_path, path).await
    }
    .await;

    if let Err(e) = written {
        let _ = fs::remove_file(&temp_path).await;
        return Err(e.into());
    }
    Ok(())
}
