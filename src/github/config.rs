//! Github configuration
use super::platform::GithubPlatform;
use serde::Deserialize;

use crate::{
    config::RepoMigrateConfig, config_password_wrap, config_value_wrap, errors::MigrateError,
};

/// `[github]` section
#[derive(Deserialize, Default, Debug, Clone)]
pub struct GithubConfig {
    /// Account owning the migrated repositories
    pub username: Option<String>,

    /// Github token
    pub token: Option<String>,

    /// REST API base URL
    pub api_url: Option<String>,

    /// Host used for git transport
    pub host: Option<String>,
}

impl GithubConfig {
    /// Get the github platform
    /// # Errors
    /// Error if no destination account is configured
    pub fn get_plateform(config: &RepoMigrateConfig) -> Result<GithubPlatform, MigrateError> {
        let username = match config.cli_args.owner.clone() {
            Some(owner) => owner,
            None => config_value_wrap!(config, github, username, "GITHUB_USERNAME"),
        };
        let token = config_password_wrap!(config, github, token, "GITHUB_TOKEN");
        let mut platform = GithubPlatform::new(username, token);
        if let Some(github) = &config.config_data.github {
            if let Some(api_url) = &github.api_url {
                platform = platform.with_api_url(api_url);
            }
            if let Some(host) = &github.host {
                platform = platform.with_host(host);
            }
        }
        Ok(platform)
    }
}
