//! Platform traits shared by the source and the destination
use std::{fmt, future::Future, pin::Pin};

use serde::Serialize;

use crate::{errors::MigrateError, utils::Repo};

/// Boxed future returned by the platform traits
pub(crate) type PlatformFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Platform the repositories are read from
pub(crate) trait SourcePlatform: Sync + Send {
    /// Visibility of the repository on the source.
    ///
    /// Never fails: anything that prevents reading the visibility gives
    /// [`Visibility::Private`].
    fn visibility<'a>(&'a self, repo: &'a Repo) -> PlatformFuture<'a, Visibility>;

    /// Clone URL with the credentials embedded
    /// # Errors
    /// Error if the repository URL can't carry credentials
    fn clone_url(&self, repo: &Repo) -> Result<String, MigrateError>;

    /// Type of the platform
    fn get_type(&self) -> PlatformType;
}

/// Platform the repositories are mirrored to
pub(crate) trait DestinationPlatform: Sync + Send {
    /// Whether the destination account already owns a repository named `name`
    fn repo_exists<'a>(&'a self, name: &'a str)
        -> PlatformFuture<'a, Result<bool, MigrateError>>;

    /// Create a repository under the destination account
    fn create_repo<'a>(&'a self, repo: &'a NewRepo)
        -> PlatformFuture<'a, Result<(), MigrateError>>;

    /// Push URL with the credentials embedded
    /// # Errors
    /// Error if the URL can't be built
    fn push_url(&self, name: &str) -> Result<String, MigrateError>;

    /// Account owning the destination repositories
    fn owner(&self) -> &str;

    /// Type of the platform
    fn get_type(&self) -> PlatformType;
}

/// Known platforms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformType {
    /// gitlab.com or a self-hosted GitLab
    Gitlab,
    /// github.com
    Github,
}

impl fmt::Display for PlatformType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformType::Gitlab => write!(f, "gitlab"),
            PlatformType::Github => write!(f, "github"),
        }
    }
}

/// Repository visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Visibility {
    /// Readable by anyone
    Public,
    /// Restricted to authorized accounts
    Private,
}

impl Visibility {
    /// Map the visibility reported by the source. Only the literal `public` is public.
    pub(crate) fn from_source(value: Option<&str>) -> Self {
        match value {
            Some("public") => Visibility::Public,
            _ => Visibility::Private,
        }
    }

    /// `true` unless public
    pub(crate) fn is_private(self) -> bool {
        self == Visibility::Private
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Visibility::Public => write!(f, "Public"),
            Visibility::Private => write!(f, "Private"),
        }
    }
}

/// Body of a repository creation request
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub(crate) struct NewRepo {
    /// Repository name
    pub name: String,

    /// Whether the repository is private
    pub private: bool,

    /// Repository description
    pub description: String,
}

impl NewRepo {
    /// Creation request for a repository migrated from GitLab
    pub(crate) fn migrated(name: &str, visibility: Visibility) -> Self {
        Self {
            name: name.to_string(),
            private: visibility.is_private(),
            description: format!("Migrated from GitLab: {name}"),
        }
    }
}

/// How the destination repository came to exist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RepoCreation {
    /// Created during this run
    Created,
    /// Already there, left untouched
    AlreadyExists,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn only_literal_public_is_public() {
        assert_eq!(Visibility::from_source(Some("public")), Visibility::Public);
        assert_eq!(Visibility::from_source(Some("internal")), Visibility::Private);
        assert_eq!(Visibility::from_source(Some("Public")), Visibility::Private);
        assert_eq!(Visibility::from_source(None), Visibility::Private);
    }

    #[test]
    fn migrated_description() {
        let repo = NewRepo::migrated("proj", Visibility::Public);
        assert_eq!(repo.description, "Migrated from GitLab: proj");
        assert!(!repo.private);
    }
}
