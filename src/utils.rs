//! Utility functions
use std::{path::Path, sync::Arc, time::Duration};

use log::{error, info};
use url::Url;

use crate::errors::{MigrateError, MigrateErrorKind};
use crate::migrate::Migrator;

/// Repository to migrate, derived from its source URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repo {
    /// Source URL as written in the repository list
    pub url: Url,

    /// Name of the repository, also the name of the local checkout
    pub name: String,

    /// Path of the project on the source (`group/sub/proj`)
    pub path: String,
}

impl Repo {
    /// Parse a source URL such as `https://gitlab.com/group/proj.git`
    /// # Errors
    /// Error if the URL doesn't parse or doesn't end with a usable name
    pub fn parse(source_url: &str) -> Result<Self, MigrateError> {
        let url = Url::parse(source_url.trim())?;
        let path = url.path().trim_matches('/');
        let path = path.strip_suffix(".git").unwrap_or(path).to_string();
        let name = path.rsplit('/').next().unwrap_or_default().to_string();
        if name.is_empty() || name == "." || name == ".." || name.contains('\\') {
            return Err(MigrateError::new(MigrateErrorKind::InvalidUrl)
                .with_text(&format!("no repository name in '{source_url}'")));
        }
        Ok(Self { url, name, path })
    }
}

/// Read the repository list: one URL per line, blank lines ignored
/// # Errors
/// Error if the file is missing or unreadable
pub fn read_repo_list(path: &Path) -> Result<Vec<String>, MigrateError> {
    if !path.exists() {
        return Err(MigrateError::new(MigrateErrorKind::InputFile)
            .with_text(&format!("{} file not found", path.display())));
    }
    let contents = std::fs::read_to_string(path)
        .map_err(|e| MigrateError::new_with_source(MigrateErrorKind::InputFile, e))?;
    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}

/// Outcome of a whole batch
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MigrationReport {
    /// Source URLs migrated successfully
    pub succeeded: Vec<String>,

    /// Source URLs that failed, with the reason
    pub failed: Vec<(String, String)>,
}

/// Migrate every repository in order, pausing `delay` between two of them
///
/// One repository is fully done, cleanup included, before the next starts.
/// Failures are logged and counted, never returned.
pub async fn migrate_all(
    migrator: Arc<Migrator>,
    repo_urls: Vec<String>,
    delay: Duration,
) -> MigrationReport {
    let mut report = MigrationReport::default();
    let total = repo_urls.len();
    for (idx, source_url) in repo_urls.into_iter().enumerate() {
        info!("[{}/{}] {}", idx + 1, total, source_url);
        let migrator_ref = migrator.clone();
        let url_ref = source_url.clone();
        let handle = tokio::spawn(async move { migrator_ref.migrate(&url_ref).await });
        match handle.await {
            Ok(Ok(())) => report.succeeded.push(source_url),
            Ok(Err(e)) => report.failed.push((source_url, e.to_string())),
            Err(e) => {
                error!("Unexpected error during migration of {source_url}: {e}");
                report.failed.push((source_url, e.to_string()));
            }
        }
        if idx + 1 < total && !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
    report
}
