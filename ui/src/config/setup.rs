use super::defaults::DEFAULT_CONFIG;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)]
pub enum SetupError {
    #[error("Failed to determine config directory: {0}")]
    ConfigDirError(String),
    #[error("Failed to create directory {path}: {source}")]
    CreateDirError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write file {path}: {source}")]
    WriteFileError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Config file already exists: {0}")]
    AlreadyExists(PathBuf),
}

impl From<SetupError> for crate::error::AppError {
    fn from(err: SetupError) -> Self {
        match err {
            SetupError::ConfigDirError(_) => crate::error::AppError::Config(err.to_string()),
            _ => crate::error::AppError::Io(err.to_string()),
        }
    }
}

/// Get the standard configuration directory for the current platform
pub fn get_config_dir() -> Result<PathBuf, SetupError> {
    // Prefer ~/.config/pagenav on Unix-like systems, fall back to platform defaults
    if cfg!(unix) {
        if let Some(mut home_path) = dirs::home_dir() {
            home_path.push(".config");
            home_path.push("pagenav");
            return Ok(home_path);
        }
    }

    dirs::config_dir()
        .map(|mut path| {
            path.push("pagenav");
            path
        })
        .ok_or_else(|| {
            SetupError::ConfigDirError("Unable to determine config directory".to_string())
        })
}

/// Get the standard configuration file path
pub fn get_config_file_path() -> Result<PathBuf, SetupError> {
    let mut config_dir = get_config_dir()?;
    config_dir.push("config.toml");
    Ok(config_dir)
}

/// Write the default configuration to `path`, creating parent directories.
///
/// An existing file is left untouched unless `force` is set.
pub fn write_default_config(path: &Path, force: bool) -> Result<PathBuf, SetupError> {
    if path.exists() && !force {
        return Err(SetupError::AlreadyExists(path.to_path_buf()));
    }

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        create_dir_if_not_exists(parent)?;
    }

    fs::write(path, DEFAULT_CONFIG).map_err(|source| SetupError::WriteFileError {
        path: path.to_path_buf(),
        source,
    })?;

    log::info!("Wrote default configuration: {}", path.display());
    Ok(path.to_path_buf())
}

/// Initialize the standard config file with default contents
pub fn initialize_config_file(force: bool) -> Result<PathBuf, SetupError> {
    let config_path = get_config_file_path()?;
    write_default_config(&config_path, force)
}

fn create_dir_if_not_exists(path: &Path) -> Result<(), SetupError> {
    if !path.exists() {
        fs::create_dir_all(path).map_err(|source| SetupError::CreateDirError {
            path: path.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}
