use log::{error, log_enabled, Level};
use repo_migrate::repo_migrate_main;
use std::process::exit;

#[tokio::main]
async fn main() {
    match repo_migrate_main().await {
        Ok(_) => {
            exit(0);
        }
        Err(e) => {
            if log_enabled!(Level::Error) {
                error!("Error: {e}");
            } else {
                eprintln!("Error: {e}");
            }
            exit(1);
        }
    };
}
