//! Locating and reading the user-level configuration file.
//!
//! The configuration lives at `${HOME}/.config/boiling/boiling.conf`. This
//! module only resolves and reads it; lexing and interpretation live in
//! [`crate::lexer`] and [`crate::store`].

use std::fs;
use std::path::PathBuf;

use log::debug;

use crate::constants::CONFIG_RELATIVE_PATH;
use crate::error::{Error, Result};

/// Report printed when the configuration file cannot be located.
pub const NO_CONFIG_REPORT: &str = "No config found. Be sure to have set $HOME value. \
     If $HOME is set up correctly, check/create $HOME/.config/boiling directory.";

/// Resolves the configuration file path, returning it only when the file
/// actually exists.
pub fn config_path() -> Option<PathBuf> {
    let path = dirs::home_dir()?.join(CONFIG_RELATIVE_PATH);
    path.is_file().then_some(path)
}

/// Locates and reads the whole configuration text.
///
/// # Errors
/// * `Error::NotFoundError` if the file cannot be located
/// * `Error::IoError` if it exists but cannot be read
pub fn read_config() -> Result<(PathBuf, String)> {
    let path = config_path().ok_or_else(|| Error::NotFoundError(NO_CONFIG_REPORT.to_string()))?;
    debug!("loading configuration from {}", path.display());
    let text = fs::read_to_string(&path).map_err(Error::IoError)?;
    Ok((path, text))
}
