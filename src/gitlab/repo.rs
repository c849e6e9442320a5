//! Gitlab Repo module
use serde::Deserialize;

/// Gitlab project, only the fields read during a migration
#[derive(Deserialize, Default, Debug, Clone)]
pub struct GitlabProject {
    /// `public`, `internal` or `private`
    pub visibility: Option<String>,

    /// Full path of the project
    #[serde(default)]
    pub path_with_namespace: String,
}
