//! CLI argument definitions using clap
//!
//! Every option falls back to an environment variable, so the binary runs
//! unmodified under the same `.env`-style deployment as before:
//! `PORT`, `SUPABASE_URL`, `SUPABASE_KEY`.

use clap::Parser;

use crate::config::AppConfig;

/// shoplist - a shopping list CRUD API backed by a hosted Postgres service
#[derive(Parser, Debug)]
#[command(name = "shoplist")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = AppConfig::DEFAULT_PORT)]
    pub port: u16,

    /// Base URL of the hosted store project
    #[arg(long, env = "SUPABASE_URL")]
    pub supabase_url: Option<String>,

    /// Service key sent as apikey and bearer token
    #[arg(long, env = "SUPABASE_KEY", hide_env_values = true)]
    pub supabase_key: Option<String>,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
