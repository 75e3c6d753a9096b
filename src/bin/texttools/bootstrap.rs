use chrono::prelude::*;
use std::fs::File;
use std::io::prelude::*;
use std::path::{Path, PathBuf};

use nu_ansi_term::Color::Yellow;
use texttools::constants::config::{DEFAULT_CONF, DEFAULT_CONF_FILE};
use texttools::{debug, log};

pub use texttools::{
    config::{parse as config_parse, MainConfig},
    error::*,
};

use crate::directories::PROJECT_DIRS;

#[derive(Debug)]
pub struct BootStrap {
    config: MainConfig,
}

impl BootStrap {
    pub fn new() -> Result<Self> {
        let config = match config_file() {
            Ok(file) => parse_main_config(&file)?,
            Err(Error::ConfigError(cause)) => {
                debug!("Using default configuration, {}", cause);
                MainConfig::default()
            }
            Err(e) => return Err(e),
        };
        Ok(BootStrap { config })
    }

    pub fn get_config(&self) -> &MainConfig {
        &self.config
    }
}

/// Retrieves the main configuration file path from the configuration directory,
/// expanding any environment variable present in it.
///
/// # Errors
/// Returns an error if no configuration directory is available or the
/// directory path cannot be interpolated
fn config_file() -> Result<PathBuf> {
    let config_dir = PROJECT_DIRS
        .as_ref()
        .map(|dirs| dirs.config_dir().to_string_lossy().to_string())
        .ok_or_else(|| {
            Error::ConfigError("no configuration directory could be determined".to_string())
        })?;

    let config_dir = match shellexpand::env(&config_dir) {
        Ok(dir) => dir.to_string(),
        Err(e) => {
            return Err(Error::InterpolationError {
                cause: e.to_string(),
            });
        }
    };

    Ok(PathBuf::from(config_dir).join(DEFAULT_CONF_FILE))
}

/// Creates the default main configuration file in the config directory
///
/// # Arguments
/// * `config_file` - The path to the configuration file
///
/// # Returns
/// A `Result` containing the configuration data as a `String`
///
/// # Errors
/// * `ConfigError` - If the configuration directory cannot be determined
/// * `Io` - If an I/O error occurs while creating the configuration file
fn create_default_config(config_file: &Path) -> Result<String> {
    let parent_dir = config_file
        .parent()
        .ok_or_else(|| {
            Error::ConfigError(format!(
                "no parent directory for {}",
                config_file.to_string_lossy()
            ))
        })?;
    std::fs::create_dir_all(parent_dir)?;
    let current_date: DateTime<Local> = Local::now();
    let config_data = DEFAULT_CONF.replacen("${date}", &current_date.to_string(), 1);

    File::create(config_file)?.write_all(config_data.as_bytes())?;
    Ok(config_data)
}

/// Processes the main configuration file retrieving the associated `MainConfig` structure
///
/// If the file does not exist, a default configuration file is created. When it
/// cannot be created the default configuration is used without persisting it.
///
/// # Errors
///
/// This function returns an error if an existing configuration file cannot be read or parsed.
pub fn parse_main_config(conf_file: &Path) -> Result<MainConfig> {
    let toml_data = match config_parse(conf_file) {
        Ok(data) => data,
        Err(Error::Io(e)) if e.kind() == ::std::io::ErrorKind::NotFound => {
            match create_default_config(conf_file) {
                Ok(data) => data,
                Err(e) => {
                    debug!(
                        "Unable to create default configuration file {} : {}",
                        conf_file.to_string_lossy(),
                        e
                    );
                    return Ok(MainConfig::default());
                }
            }
        }
        Err(Error::Io(e)) => {
            return Err(Error::ConfigReadError {
                file: String::from(DEFAULT_CONF_FILE),
                cause: log::debug_message(
                    e.to_string(),
                    Yellow
                        .paint(format!("\n[Config path] {}", conf_file.to_string_lossy()))
                        .to_string(),
                ),
            });
        }
        Err(e) => return Err(e),
    };

    MainConfig::from_toml(&toml_data, DEFAULT_CONF_FILE)
}
