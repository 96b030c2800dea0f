//! Command-line interface for tasklang.

pub mod args;
pub mod commands;
pub mod menu;

use std::path::PathBuf;

use crate::cli::args::{Cli, OutputFormat};
use crate::config::{ColorSetting, Config, Paths};
use crate::core::Locale;
use crate::error::TaskError;

/// Effective settings after merging the config file with CLI flags.
///
/// `config` holds the merged values, not the file contents.
#[derive(Debug, Clone)]
pub struct Settings {
    pub config: Config,
    pub config_path: PathBuf,
    pub format: OutputFormat,
    pub locale: Locale,
    pub color: ColorSetting,
}

impl Settings {
    /// Load the config file and apply CLI overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed, or
    /// if no path was given and the home directory is unknown.
    pub fn from_cli(cli: &Cli) -> Result<Self, TaskError> {
        let config_path = match &cli.config {
            Some(path) => path.clone(),
            None => Paths::new()?.config_file,
        };
        let mut config = Config::load_from_path(&config_path)?;
        if let Some(format) = cli.output {
            config.general.default_output = format;
        }
        if let Some(locale) = cli.locale {
            config.general.locale = locale;
        }

        Ok(Self {
            format: config.general.default_output,
            locale: config.general.locale,
            color: config.general.color,
            config_path,
            config,
        })
    }
}
