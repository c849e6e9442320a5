//! Gitlab configuration
use super::platform::GitlabPlatform;
use crate::{config::RepoMigrateConfig, config_password_wrap};
use serde::Deserialize;

/// `[gitlab]` section
#[derive(Deserialize, Default, Debug, Clone)]
pub struct GitlabConfig {
    /// Gitlab token
    pub token: Option<String>,

    /// REST API base URL
    pub api_url: Option<String>,
}

impl GitlabConfig {
    /// Get Gitlab platform
    pub fn get_plateform(config: &RepoMigrateConfig) -> GitlabPlatform {
        let token = config_password_wrap!(config, gitlab, token, "GITLAB_TOKEN");
        let platform = GitlabPlatform::new(token);
        match config
            .config_data
            .gitlab
            .as_ref()
            .and_then(|c| c.api_url.as_deref())
        {
            Some(api_url) => platform.with_api_url(api_url),
            None => platform,
        }
    }
}
