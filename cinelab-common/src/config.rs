//! Configuration file loading and value resolution
//!
//! Each service resolves its settings in priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable (handled by clap's `env` attribute)
//! 3. TOML config file
//! 4. Compiled default (fallback)
//!
//! Tiers 1 and 2 live in each binary's clap `Args`; this module supplies
//! tiers 3 and 4.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Optional settings read from the shared TOML config file
///
/// Every field is optional; a missing file behaves like an empty one.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    /// Port for the cinelab-api service
    pub api_port: Option<u16>,
    /// Port for the cinelab-ui service
    pub ui_port: Option<u16>,
    /// Directory holding movies.json and reviews.json
    pub data_dir: Option<PathBuf>,
    /// Sentiment classifier endpoint URL
    pub sentiment_url: Option<String>,
    /// Sentiment classifier request timeout in seconds
    pub sentiment_timeout_secs: Option<u64>,
    /// API base URL handed to the browser UI
    pub api_base_url: Option<String>,
}

impl FileConfig {
    /// Load the config file if one exists
    ///
    /// A missing file yields defaults; an unreadable or malformed file is
    /// logged and also yields defaults so services still start.
    pub fn load() -> Self {
        let Some(path) = find_config_file() else {
            return Self::default();
        };

        match read_config_file(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!("Ignoring config file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

fn read_config_file(path: &Path) -> Result<FileConfig> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| Error::Config(format!("Parse TOML failed: {}", e)))
}

/// Locate the config file for the platform
///
/// Linux checks `~/.config/cinelab/config.toml` then
/// `/etc/cinelab/config.toml`; other platforms use the OS config directory.
fn find_config_file() -> Option<PathBuf> {
    if let Some(path) = dirs::config_dir().map(|d| d.join("cinelab").join("config.toml")) {
        if path.exists() {
            return Some(path);
        }
    }

    if cfg!(target_os = "linux") {
        let system_config = PathBuf::from("/etc/cinelab/config.toml");
        if system_config.exists() {
            return Some(system_config);
        }
    }

    None
}

/// Create the data directory if it does not exist yet
pub fn ensure_data_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    if !path.is_dir() {
        return Err(Error::Config(format!(
            "Data path exists but is not a directory: {}",
            path.display()
        )));
    }
    Ok(())
}
