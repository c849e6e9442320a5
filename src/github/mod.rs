//! GitHub, the destination platform
pub(crate) mod config;
pub(crate) mod platform;
pub(crate) mod repo;

/// GitHub host used for git transport
const GITHUB_URL: &str = "github.com";

/// GitHub API URL
const GITHUB_API_URL: &str = "https://api.github.com";

/// GitHub API Header
const GITHUB_API_HEADER: &str = "X-GitHub-Api-Version";

/// GitHub API Version
const GITHUB_API_VERSION: &str = "2022-11-28";

/// Remote name given to GitHub inside the mirror clone
pub(crate) const GITHUB_REMOTE: &str = "github";
