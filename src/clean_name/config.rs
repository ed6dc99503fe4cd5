//! Configuration for filename cleaning.

use std::{fmt, fs};

use anyhow::Context;
use serde::Deserialize;

/// Number of error messages shown in the result summary by default.
pub const DEFAULT_MAX_ERRORS: usize = 10;

/// Config from the user config file.
#[derive(Debug, Default, Deserialize)]
pub struct CleanNameFileConfig {
    #[serde(default)]
    pub debug: bool,
    #[serde(default)]
    pub dryrun: bool,
    #[serde(default)]
    pub max_errors: Option<usize>,
    #[serde(default)]
    pub overwrite: bool,
    #[serde(default)]
    pub verbose: bool,
    #[serde(default)]
    pub yes: bool,
}

/// Wrapper needed for parsing the config section.
#[derive(Debug, Default, Deserialize)]
struct UserConfig {
    #[serde(default)]
    clean_name: CleanNameFileConfig,
}

/// Final config created from CLI arguments and user config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanNameConfig {
    pub debug: bool,
    pub dryrun: bool,
    pub max_errors: usize,
    pub overwrite: bool,
    pub verbose: bool,
    pub yes: bool,
}

impl CleanNameFileConfig {
    /// Try to read user config from the file if it exists.
    /// Otherwise, fall back to default config.
    ///
    /// # Errors
    /// Returns an error if config file exists but cannot be read or parsed.
    pub fn get_user_config() -> anyhow::Result<Self> {
        let Some(path) = crate::config_path() else {
            return Ok(Self::default());
        };

        match fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content)
                .map_err(|e| anyhow::anyhow!("Failed to parse config file {}:\n{e}", path.display())),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(error) => Err(anyhow::anyhow!(
                "Failed to read config file {}: {error}",
                path.display()
            )),
        }
    }

    /// Parse config from a TOML string.
    ///
    /// # Errors
    /// Returns an error if the TOML string is invalid.
    pub fn from_toml_str(toml_str: &str) -> anyhow::Result<Self> {
        toml::from_str::<UserConfig>(toml_str)
            .map(|config| config.clean_name)
            .context("Failed to parse clean_name config TOML")
    }
}

impl Default for CleanNameConfig {
    fn default() -> Self {
        Self {
            debug: false,
            dryrun: false,
            max_errors: DEFAULT_MAX_ERRORS,
            overwrite: false,
            verbose: false,
            yes: false,
        }
    }
}

impl From<CleanNameFileConfig> for CleanNameConfig {
    fn from(config: CleanNameFileConfig) -> Self {
        Self {
            debug: config.debug,
            dryrun: config.dryrun,
            max_errors: config.max_errors.unwrap_or(DEFAULT_MAX_ERRORS),
            overwrite: config.overwrite,
            verbose: config.verbose,
            yes: config.yes,
        }
    }
}

impl fmt::Display for CleanNameConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Config:")?;
        writeln!(f, "  debug:      {}", crate::colorize_bool(self.debug))?;
        writeln!(f, "  dryrun:     {}", crate::colorize_bool(self.dryrun))?;
        writeln!(f, "  overwrite:  {}", crate::colorize_bool(self.overwrite))?;
        writeln!(f, "  verbose:    {}", crate::colorize_bool(self.verbose))?;
        writeln!(f, "  yes:        {}", crate::colorize_bool(self.yes))?;
        write!(f, "  max errors: {}", self.max_errors)
    }
}
