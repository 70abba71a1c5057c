use std::path::PathBuf;

use titu_common::PlatformError;

pub(super) const APP_NAME: &str = "titu";

/// Returns the platform-specific configuration directory for Titu.
///
/// - macOS: `~/Library/Application Support/titu`
/// - Linux: `$XDG_CONFIG_HOME/titu` (defaults to `~/.config/titu`)
/// - Windows: `%APPDATA%\titu`
pub fn config_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::config_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine config directory".into()))?
        .join(APP_NAME))
}

/// Returns the platform-specific data directory for Titu.
///
/// - macOS: `~/Library/Application Support/titu`
/// - Linux: `$XDG_DATA_HOME/titu` (defaults to `~/.local/share/titu`)
/// - Windows: `%APPDATA%\titu`
pub fn data_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::data_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine data directory".into()))?
        .join(APP_NAME))
}

/// Returns the path to the main configuration file.
pub fn config_file() -> Result<PathBuf, PlatformError> {
    Ok(config_dir()?.join("config.toml"))
}

/// Returns the path to the persisted visitor identity.
///
/// Located at `data_dir()/identity.json`.
pub fn identity_file() -> Result<PathBuf, PlatformError> {
    Ok(data_dir()?.join("identity.json"))
}
