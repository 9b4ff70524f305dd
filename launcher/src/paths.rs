//! Cross-platform data path resolution.
//!
//! Determines where launcher data (accounts, settings) is stored based on
//! platform conventions, with an environment override for tests and
//! portable installs.

use std::path::PathBuf;

use directories::ProjectDirs;
use tracing::info;

/// Resolve the launcher data directory, creating it if necessary.
///
/// `EMBER_DATA_DIR` takes priority over the platform default.
pub fn data_dir() -> anyhow::Result<PathBuf> {
    let dir = match std::env::var("EMBER_DATA_DIR") {
        Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => default_data_dir()?,
    };

    if !dir.exists() {
        std::fs::create_dir_all(&dir)?;
        info!("Created data directory: {}", dir.display());
    }

    Ok(dir)
}

/// Platform-specific default data directory.
pub fn default_data_dir() -> anyhow::Result<PathBuf> {
    ProjectDirs::from("org", "Ember", "ember-launcher")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| anyhow::anyhow!("could not determine platform data directory"))
}

/// Path of the account registry file.
pub fn accounts_path() -> anyhow::Result<PathBuf> {
    Ok(data_dir()?.join("accounts.json"))
}

/// Path of the launcher settings file.
pub fn settings_path() -> anyhow::Result<PathBuf> {
    Ok(data_dir()?.join("settings.json"))
}
