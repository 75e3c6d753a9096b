use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::error::*;
use crate::processor::Options;

#[derive(Deserialize, Debug, Default)]
pub struct MainConfig {
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub aliases: HashMap<String, String>,
}

#[derive(Deserialize, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct Defaults {
    pub multiline: bool,
    pub word_mode: bool,
    pub trailing_newline: bool,
}

impl Default for Defaults {
    fn default() -> Defaults {
        Defaults {
            multiline: false,
            word_mode: false,
            trailing_newline: true,
        }
    }
}

impl MainConfig {
    /// Parses the configuration from its TOML representation
    ///
    /// # Arguments
    /// * `toml_data` - The contents of the configuration file
    /// * `file` - The name of the file, used in error messages
    ///
    /// # Errors
    /// Returns `Error::SerdeTomlError` if the contents are not a valid configuration
    pub fn from_toml(toml_data: &str, file: &str) -> Result<Self> {
        toml::from_str(toml_data).map_err(|e| Error::SerdeTomlError {
            file: file.to_string(),
            cause: e.to_string(),
        })
    }

    /// Resolves the command to run, expanding it when it names an alias
    ///
    /// # Examples
    /// ```
    /// use texttools::config::MainConfig;
    ///
    /// let config = MainConfig::from_toml("[aliases]\nclean = \"trim->lower_case\"", "test").unwrap();
    /// assert_eq!(config.resolve_command("clean"), "trim->lower_case");
    /// assert_eq!(config.resolve_command("trim"), "trim");
    /// ```
    pub fn resolve_command<'a>(&'a self, command: &'a str) -> &'a str {
        self.aliases
            .get(command.trim())
            .map_or(command, |expansion| expansion.as_str())
    }

    /// Execution options given by the configured defaults
    pub fn options(&self) -> Options {
        Options {
            multiline: self.defaults.multiline,
            word_mode: self.defaults.word_mode,
        }
    }
}

pub fn parse(file_path: &Path) -> Result<String> {
    let mut config_content = String::new();
    File::open(file_path)?.read_to_string(&mut config_content)?;
    Ok(config_content)
}
