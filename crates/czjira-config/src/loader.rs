//! Configuration loader.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::schema::ConfigFile;
use crate::{ConfigError, ConfigResult, Settings};

/// Candidate configuration file names, in lookup order.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["cz.toml", ".cz.toml", "pyproject.toml"];

/// Loads settings from the given file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or if it has no
/// `[tool.commitizen]` table.
pub fn load_config(path: impl AsRef<Path>) -> ConfigResult<Settings> {
    let path = path.as_ref();
    debug!(?path, "loading configuration");

    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let file: ConfigFile = toml::from_str(&content)?;

    file.tool
        .commitizen
        .ok_or_else(|| ConfigError::MissingTable(path.to_path_buf()))
}

/// Finds and loads settings from the current directory or parents.
///
/// # Errors
///
/// Returns an error if no configuration file is found or it cannot be parsed.
pub fn find_and_load_config() -> ConfigResult<Settings> {
    let current_dir = std::env::current_dir()?;
    find_and_load_config_from(&current_dir)
}

/// Finds and loads settings starting from the given directory.
///
/// Walks up the directory tree until a directory holds at least one candidate
/// file. The first candidate there with a `[tool.commitizen]` table wins.
///
/// # Errors
///
/// Returns [`ConfigError::NotFound`] if no candidate exists anywhere up the
/// tree, and [`ConfigError::MissingTable`] if candidates exist but none of
/// them has the settings table.
pub fn find_and_load_config_from(start_dir: impl AsRef<Path>) -> ConfigResult<Settings> {
    let start_dir = start_dir.as_ref();
    let mut dir = start_dir;

    loop {
        let candidates: Vec<PathBuf> = CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .filter(|path| path.exists())
            .collect();

        if let Some(first) = candidates.first() {
            for path in &candidates {
                match load_config(path) {
                    Ok(settings) => return Ok(settings),
                    Err(ConfigError::MissingTable(_)) => {
                        debug!(?path, "no [tool.commitizen] table, trying next candidate");
                    }
                    Err(e) => return Err(e),
                }
            }
            return Err(ConfigError::MissingTable(first.clone()));
        }

        match dir.parent() {
            Some(parent) => dir = parent,
            None => break,
        }
    }

    Err(ConfigError::NotFound(start_dir.join(CONFIG_FILE_NAMES[0])))
}
