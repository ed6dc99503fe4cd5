use std::path::PathBuf;

use rename_tools::clean_name::{CleanNameConfig, CleanNameFileConfig};

use crate::Args;

/// Final config created from CLI arguments and user config file.
#[derive(Debug, Default)]
pub struct Config {
    pub(crate) paths: Vec<PathBuf>,
    pub(crate) drop_data: Vec<String>,
    pub(crate) rename: CleanNameConfig,
}

impl Config {
    /// Create config from given command line args and user config file.
    ///
    /// # Errors
    /// Returns an error if the config file cannot be read or parsed.
    pub fn from_args(args: Args) -> anyhow::Result<Self> {
        let user_config = CleanNameFileConfig::get_user_config()?;
        Ok(Self::from_args_and_user_config(args, user_config))
    }

    /// Combine command line args with user config values.
    /// Flags given on the command line are always enabled.
    fn from_args_and_user_config(args: Args, user_config: CleanNameFileConfig) -> Self {
        let max_errors = args.max_errors.or(user_config.max_errors);
        let user_config = CleanNameConfig::from(user_config);
        Self {
            paths: args.paths,
            drop_data: args.drop,
            rename: CleanNameConfig {
                debug: args.debug || user_config.debug,
                dryrun: args.print || user_config.dryrun,
                max_errors: max_errors.unwrap_or(user_config.max_errors),
                overwrite: args.force || user_config.overwrite,
                verbose: args.verbose || user_config.verbose,
                yes: args.yes || user_config.yes,
            },
        }
    }
}

#[cfg(test)]
mod config_from_args_tests {
    use super::*;

    use rename_tools::clean_name::DEFAULT_MAX_ERRORS;

    fn default_args() -> Args {
        Args {
            paths: Vec::new(),
            drop: Vec::new(),
            debug: false,
            force: false,
            max_errors: None,
            print: false,
            yes: false,
            completion: None,
            verbose: false,
        }
    }

    #[test]
    fn defaults_without_args_or_user_config() {
        let config = Config::from_args_and_user_config(default_args(), CleanNameFileConfig::default());
        assert_eq!(config.rename, CleanNameConfig::default());
        assert_eq!(config.rename.max_errors, DEFAULT_MAX_ERRORS);
    }

    #[test]
    fn cli_flags_enable_options() {
        let mut args = default_args();
        args.debug = true;
        args.force = true;
        args.print = true;
        args.verbose = true;
        args.yes = true;

        let config = Config::from_args_and_user_config(args, CleanNameFileConfig::default());
        assert!(config.rename.debug);
        assert!(config.rename.overwrite);
        assert!(config.rename.dryrun);
        assert!(config.rename.verbose);
        assert!(config.rename.yes);
    }

    #[test]
    fn user_config_enables_options() {
        let user_config = CleanNameFileConfig::from_toml_str(
            r"
[clean_name]
overwrite = true
dryrun = true
",
        )
        .unwrap();

        let config = Config::from_args_and_user_config(default_args(), user_config);
        assert!(config.rename.overwrite);
        assert!(config.rename.dryrun);
        assert!(!config.rename.yes);
    }

    #[test]
    fn cli_max_errors_overrides_user_config() {
        let user_config = CleanNameFileConfig {
            max_errors: Some(3),
            ..Default::default()
        };
        let mut args = default_args();
        args.max_errors = Some(20);

        let config = Config::from_args_and_user_config(args, user_config);
        assert_eq!(config.rename.max_errors, 20);
    }

    #[test]
    fn user_config_max_errors_overrides_default() {
        let user_config = CleanNameFileConfig {
            max_errors: Some(3),
            ..Default::default()
        };

        let config = Config::from_args_and_user_config(default_args(), user_config);
        assert_eq!(config.rename.max_errors, 3);
    }

    #[test]
    fn paths_and_drop_data_are_kept() {
        let mut args = default_args();
        args.paths = vec![PathBuf::from("a_b.txt")];
        args.drop = vec!["{x y.txt}".to_string()];

        let config = Config::from_args_and_user_config(args, CleanNameFileConfig::default());
        assert_eq!(config.paths, vec![PathBuf::from("a_b.txt")]);
        assert_eq!(config.drop_data, vec!["{x y.txt}"]);
    }
}
