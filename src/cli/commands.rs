//! CLI command execution.
//!
//! Boot order: parse arguments, validate configuration, initialize
//! logging, build the store client, serve. Configuration failures abort
//! before any socket is opened.

use std::net::SocketAddr;

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::api::ApiServer;
use crate::config::AppConfig;
use crate::store::SupabaseStore;

use super::args::Cli;
use super::errors::{CliError, CliResult};

/// Parse arguments and run the server to completion.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    let config = AppConfig::from_parts(cli.supabase_url, cli.supabase_key, cli.port)?;

    init_tracing();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(serve(config))
}

/// Install the global subscriber; `RUST_LOG` overrides the info default.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

async fn serve(config: AppConfig) -> CliResult<()> {
    let addr: SocketAddr = config
        .socket_addr()
        .parse()
        .map_err(|_| CliError::InvalidAddr(config.socket_addr()))?;

    let store = SupabaseStore::new(&config)?;
    let server = ApiServer::new(store);

    info!("Server is running on http://localhost:{}", config.port);
    server.serve(addr).await?;

    Ok(())
}
