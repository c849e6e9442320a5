//! Configuration handling
use std::{fs::read_to_string, path::PathBuf, time::Duration};

use home::home_dir;
use serde::Deserialize;

use crate::{
    cli::RepoMigrateCli,
    errors::{MigrateError, MigrateErrorKind},
    github::config::GithubConfig,
    gitlab::config::GitlabConfig,
};

/// Default repository list
const DEFAULT_REPOS_FILE: &str = "repos.txt";

/// Default log file
const DEFAULT_LOG_FILE: &str = "migration.log";

/// Default pause between two repositories, in seconds
const DEFAULT_DELAY_SECS: u64 = 2;

/// Configuration data
#[derive(Default, Clone, Debug)]
pub struct RepoMigrateConfig {
    /// path to the configuration file, if one was read
    pub config_path: Option<PathBuf>,

    /// actual configuration data
    pub config_data: ConfigData,

    /// CLI arguments
    pub cli_args: RepoMigrateCli,
}

/// Content of the configuration file
#[derive(Deserialize, Default, Clone, Debug)]
pub struct ConfigData {
    /// Gitlab configuration
    pub gitlab: Option<GitlabConfig>,

    /// Github configuration
    pub github: Option<GithubConfig>,

    /// Migration run settings
    pub migration: Option<MigrationConfig>,
}

/// `[migration]` section
#[derive(Deserialize, Default, Clone, Debug)]
pub struct MigrationConfig {
    /// Repository list
    pub repos_file: Option<PathBuf>,

    /// Log file
    pub log_file: Option<PathBuf>,

    /// Parent directory of the local clones
    pub work_dir: Option<PathBuf>,

    /// Pause between two repositories, in seconds
    pub delay_secs: Option<u64>,
}

impl RepoMigrateConfig {
    /// Build the configuration from the CLI arguments.
    ///
    /// An explicit `--config` must exist; the default file is only read when present.
    /// # Errors
    /// Error if the config file can't be read or parsed
    pub fn try_new(cli_args: RepoMigrateCli) -> Result<Self, MigrateError> {
        let config_path = match cli_args.config.clone() {
            Some(p) => Some(p),
            None => Self::get_config_path().filter(|p| p.exists()),
        };
        let config_data = match &config_path {
            Some(path) => {
                let contents = read_to_string(path).map_err(|e| {
                    MigrateError::new_with_source(MigrateErrorKind::Config, e)
                })?;
                toml::from_str(&contents)?
            }
            None => ConfigData::default(),
        };
        Ok(RepoMigrateConfig {
            config_path,
            config_data,
            cli_args,
        })
    }

    /// Get the path of the default config file
    pub fn get_config_path() -> Option<PathBuf> {
        match home_dir() {
            Some(path) if !path.as_os_str().is_empty() => Some(
                path.join(".config")
                    .join(env!("CARGO_PKG_NAME"))
                    .join("config.toml"),
            ),
            _ => None,
        }
    }

    /// `[migration]` section, empty if absent
    fn migration(&self) -> MigrationConfig {
        self.config_data.migration.clone().unwrap_or_default()
    }

    /// Repository list to read
    pub fn repos_file(&self) -> PathBuf {
        self.cli_args
            .repos
            .clone()
            .or(self.migration().repos_file)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_REPOS_FILE))
    }

    /// Log file to append to
    pub fn log_file(&self) -> PathBuf {
        self.cli_args
            .log_file
            .clone()
            .or(self.migration().log_file)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE))
    }

    /// Directory the local clones are created in
    pub fn work_dir(&self) -> PathBuf {
        self.cli_args
            .work_dir
            .clone()
            .or(self.migration().work_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Pause between two repositories
    pub fn delay(&self) -> Duration {
        Duration::from_secs(
            self.cli_args
                .delay
                .or(self.migration().delay_secs)
                .unwrap_or(DEFAULT_DELAY_SECS),
        )
    }
}
