//! GitLab, the source platform
pub(crate) mod config;
pub(crate) mod platform;
pub(crate) mod repo;

/// Path of the REST API on a GitLab host
const GITLAB_API_PATH: &str = "/api/v4";

/// Username GitLab expects in front of a token in a git URL
const GITLAB_TOKEN_USER: &str = "oauth2";
