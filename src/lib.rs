//! # repo-migrate
//!
//! Mirror a list of GitLab repositories to GitHub: for each URL of the list,
//! create the GitHub repository with the same visibility if needed, mirror
//! clone from GitLab, mirror push to GitHub and remove the local clone.
//!
//! ## Usage
//!
//! ```txt
//! Usage: repo-migrate [OPTIONS]
//!
//! Options:
//!  -r, --repos <REPOS>        File listing the source repository URLs, one per line [default: repos.txt]
//!  -l, --log-file <LOG_FILE>  Log file, appended to [default: migration.log]
//!  -c, --config <CONFIG>      Custom configuration file path
//!      --show-config-path     Show the default config path
//!  -o, --owner <OWNER>        GitHub account owning the migrated repositories
//!  -w, --work-dir <WORK_DIR>  Directory the local clones are made in [default: .]
//!      --delay <DELAY>        Seconds to wait between two repositories [default: 2]
//!  -v, --verbose...           Verbose mode (-v, -vv)
//!  -h, --help                 Print help
//!  -V, --version              Print version
//! ```
//!
//! Tokens are read from `GITLAB_TOKEN` and `GITHUB_TOKEN` (a `.env` file is
//! loaded first) unless the config file sets them.

#![warn(clippy::all, rust_2018_idioms)]
#![deny(
    missing_docs,
    clippy::all,
    clippy::missing_docs_in_private_items,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::missing_docs_in_private_items))]

pub(crate) mod cli;
pub(crate) mod command;
pub(crate) mod config;
pub(crate) mod errors;
pub(crate) mod logger;
pub(crate) mod macros;
pub(crate) mod migrate;
pub(crate) mod platform;
pub(crate) mod utils;
pub(crate) use macros::config_password_wrap;
pub(crate) use macros::config_value_wrap;

mod github;
mod gitlab;

pub use cli::{main_migrate, repo_migrate_main, RepoMigrateCli};
pub use config::RepoMigrateConfig;
pub use errors::MigrateError;
