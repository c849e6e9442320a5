//! Github Repo struct
use serde::Deserialize;

/// Github Repo, as returned when the repository already exists
#[derive(Deserialize, Default, Debug, Clone)]
pub struct RepoGithub {
    /// Repository name
    pub name: String,

    /// Repository private status
    #[serde(default)]
    pub private: bool,

    /// Repository URL
    #[serde(default)]
    pub html_url: String,
}
