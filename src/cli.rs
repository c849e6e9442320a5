//! Command line options for the repo-migrate tool
use crate::{
    command::SystemGit,
    config::RepoMigrateConfig,
    errors::MigrateError,
    github::config::GithubConfig,
    gitlab::config::GitlabConfig,
    logger::{console_level, init_logger},
    migrate::Migrator,
    utils::{migrate_all, read_repo_list},
};
use clap::Parser;
use log::{info, warn};
use std::{path::PathBuf, sync::Arc};

/// repo-migrate - Mirror GitLab repositories to GitHub
#[derive(Parser, Default, Clone, Debug)]
#[command(version)]
pub struct RepoMigrateCli {
    /// File listing the source repository URLs, one per line [default: repos.txt]
    #[arg(short, long)]
    pub repos: Option<PathBuf>,

    /// Log file, appended to [default: migration.log]
    #[arg(short, long = "log-file")]
    pub log_file: Option<PathBuf>,

    /// Custom configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Show the default config path
    #[arg(long)]
    pub show_config_path: bool,

    /// GitHub account owning the migrated repositories
    #[arg(short, long)]
    pub owner: Option<String>,

    /// Directory the local clones are made in [default: .]
    #[arg(short, long = "work-dir")]
    pub work_dir: Option<PathBuf>,

    /// Seconds to wait between two repositories [default: 2]
    #[arg(long)]
    pub delay: Option<u64>,

    /// Verbose mode (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Run the repo-migrate tool with the command line options
/// # Errors
/// Error on bad configuration or a missing repository list.
/// Failed repositories are only logged.
pub async fn repo_migrate_main() -> Result<(), MigrateError> {
    let _ = dotenv::dotenv();
    let args = RepoMigrateCli::parse();
    if args.show_config_path {
        match RepoMigrateConfig::get_config_path() {
            Some(path) => println!("{}", path.display()),
            None => println!("Unable to get your home dir"),
        }
        return Ok(());
    }
    let config = RepoMigrateConfig::try_new(args)?;
    let log_file = config.log_file();
    init_logger(&log_file, console_level(config.cli_args.verbose))?;
    main_migrate(&config).await
}

/// Migrate every repository of the list described by `config`
/// # Errors
/// Error if the destination account is unknown or the repository list is missing
pub async fn main_migrate(config: &RepoMigrateConfig) -> Result<(), MigrateError> {
    info!("Starting bulk repository migration...");
    if let Some(path) = &config.config_path {
        info!("Using configuration {}", path.display());
    }
    let destination = GithubConfig::get_plateform(config)?;
    let source = GitlabConfig::get_plateform(config);

    let repos_file = config.repos_file();
    let repo_urls = read_repo_list(&repos_file)?;
    if repo_urls.is_empty() {
        warn!("{} lists no repository", repos_file.display());
    }

    let migrator = Arc::new(Migrator::new(
        Arc::new(source),
        Arc::new(destination),
        Arc::new(SystemGit),
        config.work_dir(),
    ));
    let report = migrate_all(migrator, repo_urls, config.delay()).await;
    for (source_url, reason) in &report.failed {
        warn!("Not migrated: {source_url} ({reason})");
    }
    info!(
        "Bulk migration completed! {} migrated, {} failed. Check {} for details.",
        report.succeeded.len(),
        report.failed.len(),
        config.log_file().display()
    );
    Ok(())
}
