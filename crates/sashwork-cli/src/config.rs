//! Configuration file loading for the CLI
//!
//! This module handles finding and loading TOML configuration files
//! from various locations (explicit path, local directory, system directory).

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use sashwork::{SashworkError, config::AppConfig};

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),

    #[error("Validation error in {path}: {message}")]
    Validation { path: PathBuf, message: String },
}

impl From<ConfigError> for SashworkError {
    fn from(err: ConfigError) -> Self {
        SashworkError::Config(err.to_string())
    }
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (sashwork/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed
/// - Config file parses but holds invalid values
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, SashworkError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    let local_config = Path::new("sashwork/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    if let Some(proj_dirs) = ProjectDirs::from("com", "sashwork", "sashwork") {
        let system_config = proj_dirs.config_dir().join("config.toml");

        if system_config.exists() {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return load_config_file(system_config);
        }

        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

/// Load and check configuration from a TOML file
fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, SashworkError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;

    let config: AppConfig = toml::from_str(&content).map_err(|err| ConfigError::Parse {
        path: path.to_path_buf(),
        message: err.message().to_string(),
    })?;

    validate(&config).map_err(|message| ConfigError::Validation {
        path: path.to_path_buf(),
        message,
    })?;

    Ok(config)
}

/// Surfaces bad values at load time instead of at render time.
fn validate(config: &AppConfig) -> Result<(), String> {
    config
        .profile()
        .validate()
        .map_err(|err| err.to_string())?;

    let style = config.style();
    style.stroke()?;
    style.fill_color()?;
    style.background_color()?;
    style.padding()?;
    style.shading()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_load_explicit_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[profile]\nedge = 60\n\n[style]\npadding = 10\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.profile().edge(), 60.0);
        assert_eq!(config.style().padding().unwrap(), 10.0);
    }

    #[test]
    fn test_missing_explicit_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        match load_config(Some(&path)) {
            Err(SashworkError::Config(message)) => {
                assert!(message.contains("Missing configuration file"));
            }
            other => panic!("Expected a config error, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[profile\nedge = 60\n").unwrap();

        assert!(matches!(
            load_config(Some(&path)),
            Err(SashworkError::Config(_))
        ));
    }

    #[test]
    fn test_invalid_values_rejected_at_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        fs::write(&path, "[profile]\nedge = -5\n").unwrap();
        assert!(matches!(
            load_config(Some(&path)),
            Err(SashworkError::Config(_))
        ));

        fs::write(&path, "[style]\nstroke_color = \"bogus\"\n").unwrap();
        match load_config(Some(&path)) {
            Err(SashworkError::Config(message)) => assert!(message.contains("stroke color")),
            other => panic!("Expected a config error, got {other:?}"),
        }
    }
}
