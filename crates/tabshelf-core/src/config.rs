//! Shelf configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use tabshelf_snapshot::{SnapshotLayout, SnapshotStrategy};

use crate::error::CoreError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path to the bookmark database file
    pub database_path: PathBuf,
    /// Root folder title, window tag, group fallback and prune policy
    pub layout: SnapshotLayout,
    pub strategy: SnapshotStrategy,
}

impl Config {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            database_path: data_dir.join("tabshelf.db"),
            layout: SnapshotLayout::default(),
            strategy: SnapshotStrategy::default(),
        }
    }

    /// Read a JSON config file. Missing fields take their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&contents)?;
        config.validate()?;

        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.layout.root_title.trim().is_empty() {
            return Err(CoreError::Config("root_title cannot be empty".to_string()));
        }
        if self.layout.window_tag.trim().is_empty() {
            return Err(CoreError::Config("window_tag cannot be empty".to_string()));
        }
        if self.layout.group_fallback_prefix.trim().is_empty() {
            return Err(CoreError::Config(
                "group_fallback_prefix cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn data_dir() -> PathBuf {
        dirs::data_local_dir()
            .map(|d| d.join("tabshelf"))
            .unwrap_or_else(|| PathBuf::from(".tabshelf"))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Self::data_dir())
    }
}

mod dirs {
    use std::path::PathBuf;

    pub fn data_local_dir() -> Option<PathBuf> {
        #[cfg(target_os = "windows")]
        {
            std::env::var("LOCALAPPDATA").ok().map(PathBuf::from)
        }
        #[cfg(target_os = "macos")]
        {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join("Library/Application Support"))
        }
        #[cfg(target_os = "linux")]
        {
            std::env::var("XDG_DATA_HOME")
                .ok()
                .map(PathBuf::from)
                .or_else(|| {
                    std::env::var("HOME")
                        .ok()
                        .map(|h| PathBuf::from(h).join(".local/share"))
                })
        }
        #[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
        {
            None
        }
    }
}
