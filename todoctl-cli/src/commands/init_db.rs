//! Database initialization command

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use todoctl_server::db::create_database;

/// Arguments for the init-db command
#[derive(Parser, Debug)]
pub struct InitDbArgs {
    /// SQLite database file to create
    #[arg(long, env = "TODOCTL_DB_PATH", default_value = "todos.db")]
    pub db_path: PathBuf,
}

/// Create the database file and the todos table
pub async fn run_init_db(args: InitDbArgs) -> Result<()> {
    let pool = create_database(&args.db_path)
        .await
        .with_context(|| format!("failed to initialize {}", args.db_path.display()))?;
    pool.close().await;

    tracing::info!("Initialized database at {}", args.db_path.display());
    Ok(())
}
