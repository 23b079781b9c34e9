//! HTTP server command
//!
//! Opens the store once, serves until the listener fails, then closes it.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use todoctl_server::{close_pool, open_pool, run_server, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "TODOCTL_BIND", default_value = "0.0.0.0:8080")]
    pub bind: SocketAddr,

    /// SQLite database file (must already exist; see `init-db`)
    #[arg(long, env = "TODOCTL_DB_PATH", default_value = "todos.db")]
    pub db_path: PathBuf,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    tracing::info!("Opening connection to database at {}", args.db_path.display());

    let pool = match open_pool(&args.db_path).await {
        Ok(pool) => pool,
        Err(err) => {
            tracing::error!(error = %err, cause = %err.source, "Failed to connect to database");
            return Err(err).context("database unavailable");
        }
    };
    tracing::info!("Connected to database");

    let config = ServerConfig {
        bind_addr: args.bind,
    };
    tracing::info!("Starting server on {}", config.bind_addr);

    let result = run_server(pool.clone(), config).await;
    close_pool(pool).await;

    result.context("Server error")
}
