//! Error handling for the repo-migrate crate.
use std::{error::Error as StdError, fmt};

use crate::platform::PlatformType;

/// Error type for the repo-migrate crate.
#[derive(Debug)]
pub struct MigrateError {
    /// Inner error.
    inner: Box<Inner>,
}

impl MigrateError {
    /// Create a new error.
    pub(crate) fn new(kind: MigrateErrorKind) -> Self {
        Self {
            inner: Box::new(Inner {
                kind,
                source: None,
                platform: None,
            }),
        }
    }

    /// Create a new error of a given kind wrapping a source error.
    pub(crate) fn new_with_source<E>(kind: MigrateErrorKind, source: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self {
            inner: Box::new(Inner {
                kind,
                source: Some(source.into()),
                platform: None,
            }),
        }
    }

    /// Attach a text message as the source.
    pub(crate) fn with_text(mut self, text: &str) -> Self {
        self.inner.source = Some(Box::new(std::io::Error::other(text.to_string())));
        self
    }

    /// Attach the platform the error comes from.
    pub(crate) fn with_platform(mut self, platform: PlatformType) -> Self {
        self.inner.platform = Some(platform);
        self
    }

    /// Kind of the error
    pub(crate) fn kind(&self) -> &MigrateErrorKind {
        &self.inner.kind
    }
}

/// Type alias for a boxed error.
pub(crate) type BoxError = Box<dyn StdError + Send + Sync>;

/// Inner error type for the repo-migrate crate.
#[derive(Debug)]
struct Inner {
    /// Error kind.
    kind: MigrateErrorKind,

    /// Platform error
    platform: Option<PlatformType>,

    /// Source error.
    source: Option<BoxError>,
}

/// What went wrong
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MigrateErrorKind {
    /// Missing or invalid configuration.
    Config,

    /// The repository list can't be read.
    InputFile,

    /// A repository URL can't be turned into a repository reference.
    InvalidUrl,

    /// Error related to the reqwest crate.
    Reqwest,

    /// Error related to serde.
    Serde,

    /// Error related to the filesystem or process spawning.
    Io,

    /// Error related to the toml crate.
    Toml,

    /// Error related to the repository existence check.
    RepoExists,

    /// Error related to the repository creation.
    RepoCreation,

    /// The mirror clone exited with a failure.
    Clone,

    /// Registering the destination remote exited with a failure.
    RemoteAdd,

    /// The mirror push exited with a failure.
    Push,

    /// The git command could not be run at all.
    Command,

    /// The logger could not be set up.
    Logger,
}

impl fmt::Display for MigrateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.inner.kind)?;
        if let Some(platform) = &self.inner.platform {
            write!(f, " ({platform})")?;
        }
        if let Some(source) = &self.inner.source {
            write!(f, ": {source}")?;
        }
        Ok(())
    }
}

impl StdError for MigrateError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner.source.as_ref().map(|e| &**e as _)
    }
}

impl From<reqwest::Error> for MigrateError {
    fn from(e: reqwest::Error) -> Self {
        Self::new_with_source(MigrateErrorKind::Reqwest, e)
    }
}

impl From<serde_json::Error> for MigrateError {
    fn from(e: serde_json::Error) -> Self {
        Self::new_with_source(MigrateErrorKind::Serde, e)
    }
}

impl From<std::io::Error> for MigrateError {
    fn from(e: std::io::Error) -> Self {
        Self::new_with_source(MigrateErrorKind::Io, e)
    }
}

impl From<toml::de::Error> for MigrateError {
    fn from(e: toml::de::Error) -> Self {
        Self::new_with_source(MigrateErrorKind::Toml, e)
    }
}

impl From<url::ParseError> for MigrateError {
    fn from(e: url::ParseError) -> Self {
        Self::new_with_source(MigrateErrorKind::InvalidUrl, e)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display_includes_platform_and_text() {
        let err = MigrateError::new(MigrateErrorKind::RepoCreation)
            .with_platform(PlatformType::Github)
            .with_text("name already exists on this account");
        assert_eq!(
            err.to_string(),
            "RepoCreation (github): name already exists on this account"
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn conversions_keep_their_kind() {
        let err: MigrateError = url::Url::parse("not a url").unwrap_err().into();
        assert_eq!(*err.kind(), MigrateErrorKind::InvalidUrl);
        let err: MigrateError = std::io::Error::other("disk full").into();
        assert_eq!(*err.kind(), MigrateErrorKind::Io);
        assert_eq!(err.to_string(), "Io: disk full");
    }
}
