//! Mirror one repository from the source to the destination
use std::{
    fs::remove_dir_all,
    path::{Path, PathBuf},
    sync::Arc,
};

use log::{debug, error, info};

use crate::command::{run_command, CommandRunner, GitCommand};
use crate::errors::{MigrateError, MigrateErrorKind};
use crate::github::GITHUB_REMOTE;
use crate::platform::{DestinationPlatform, NewRepo, RepoCreation, SourcePlatform};
use crate::utils::Repo;

/// Make sure the destination has a repository for `repo`.
///
/// The visibility is read from the source first, then an existing destination
/// repository is left exactly as it is, visibility included.
/// # Errors
/// Error if the existence check can't reach the destination or the creation is refused
pub(crate) async fn ensure_destination(
    source: &dyn SourcePlatform,
    destination: &dyn DestinationPlatform,
    repo: &Repo,
) -> Result<RepoCreation, MigrateError> {
    let visibility = source.visibility(repo).await;
    if destination.repo_exists(&repo.name).await? {
        return Ok(RepoCreation::AlreadyExists);
    }
    let new_repo = NewRepo::migrated(&repo.name, visibility);
    destination.create_repo(&new_repo).await?;
    info!(
        "Created {} repository '{}/{}' (Private: {}).",
        destination.get_type(),
        destination.owner(),
        repo.name,
        new_repo.private
    );
    Ok(RepoCreation::Created)
}

/// Local mirror clone, removed when dropped
///
/// Git commands receive the checkout as their working directory, the process
/// current directory is never touched.
#[derive(Debug)]
pub(crate) struct Checkout {
    /// Directory holding the mirror clone
    path: PathBuf,
}

impl Checkout {
    /// Reserve `<parent>/<name>`. Nothing is created on disk.
    pub(crate) fn new(parent: &Path, name: &str) -> Self {
        Self {
            path: parent.join(name),
        }
    }

    /// Remove what an earlier run may have left behind
    /// # Errors
    /// Error if the stale directory can't be removed
    pub(crate) fn clear(&self) -> Result<(), MigrateError> {
        if self.path.exists() {
            remove_dir_all(&self.path)?;
            info!("Removed existing directory: {}", self.path.display());
        }
        Ok(())
    }

    /// Directory holding the mirror clone
    pub(crate) fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for Checkout {
    fn drop(&mut self) {
        let _ = remove_dir_all(&self.path);
        info!("Cleaned up local repository: {}", self.path.display());
    }
}

/// Everything needed to migrate repositories one by one
pub struct Migrator {
    /// Where repositories come from
    source: Arc<dyn SourcePlatform>,

    /// Where repositories go
    destination: Arc<dyn DestinationPlatform>,

    /// Runs git
    runner: Arc<dyn CommandRunner>,

    /// Parent directory of the local checkouts
    work_dir: PathBuf,
}

impl Migrator {
    /// Create a new migrator
    pub(crate) fn new(
        source: Arc<dyn SourcePlatform>,
        destination: Arc<dyn DestinationPlatform>,
        runner: Arc<dyn CommandRunner>,
        work_dir: PathBuf,
    ) -> Self {
        Self {
            source,
            destination,
            runner,
            work_dir,
        }
    }

    /// Migrate the repository at `source_url`, logging the outcome.
    ///
    /// The local checkout is gone when this returns, whatever happened.
    /// # Errors
    /// The step that failed, already logged
    pub async fn migrate(&self, source_url: &str) -> Result<(), MigrateError> {
        let repo = match Repo::parse(source_url) {
            Ok(repo) => repo,
            Err(e) => {
                error!("Skipping '{source_url}': {e}");
                return Err(e);
            }
        };
        info!("Starting migration for {}...", repo.name);
        let checkout = Checkout::new(&self.work_dir, &repo.name);
        match self.mirror(&repo, &checkout).await {
            Ok(()) => {
                info!("Successfully migrated {}!", repo.name);
                Ok(())
            }
            Err(e) => {
                match e.kind() {
                    MigrateErrorKind::RepoCreation
                    | MigrateErrorKind::Clone
                    | MigrateErrorKind::RemoteAdd
                    | MigrateErrorKind::Push => {
                        error!("Skipping {}: {e}", repo.name);
                    }
                    _ => error!(
                        "Unexpected error during migration of {}: {e} ({e:?})",
                        repo.name
                    ),
                }
                Err(e)
            }
        }
    }

    /// Create, clone, add the remote and push. Stops at the first failure.
    async fn mirror(&self, repo: &Repo, checkout: &Checkout) -> Result<(), MigrateError> {
        let creation =
            ensure_destination(self.source.as_ref(), self.destination.as_ref(), repo).await?;
        if creation == RepoCreation::AlreadyExists {
            debug!("Keeping the visibility of the existing {} repository", repo.name);
        }
        checkout.clear()?;

        info!("Cloning {} from {}...", repo.name, self.source.get_type());
        let clone_url = self.source.clone_url(repo)?;
        self.git(
            GitCommand::mirror_clone(&clone_url, &repo.name),
            &self.work_dir,
            MigrateErrorKind::Clone,
        )
        .await?;

        info!(
            "Adding {} remote for {}...",
            self.destination.get_type(),
            repo.name
        );
        let push_url = self.destination.push_url(&repo.name)?;
        self.git(
            GitCommand::remote_add(GITHUB_REMOTE, &push_url),
            checkout.path(),
            MigrateErrorKind::RemoteAdd,
        )
        .await?;

        info!("Pushing {} to {}...", repo.name, self.destination.get_type());
        self.git(
            GitCommand::mirror_push(GITHUB_REMOTE),
            checkout.path(),
            MigrateErrorKind::Push,
        )
        .await
    }

    /// Run a git step, a non-zero exit becomes an error of kind `kind`
    async fn git(
        &self,
        command: GitCommand,
        cwd: &Path,
        kind: MigrateErrorKind,
    ) -> Result<(), MigrateError> {
        let outcome = run_command(self.runner.as_ref(), &command, cwd).await?;
        if !outcome.success() {
            let text = format!("git {} exited with {:?}", command.subcommand(), outcome.code);
            return Err(MigrateError::new(kind).with_text(&text));
        }
        Ok(())
    }
}
