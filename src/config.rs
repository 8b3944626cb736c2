//! # Runtime Configuration
//!
//! All environment-driven settings collected into one struct, validated
//! once at startup. Handlers never read the environment themselves.

use thiserror::Error;

/// Configuration errors are fatal: the process refuses to start.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// One or both persistence credentials are absent.
    #[error("Supabase URL or Key is missing. Set SUPABASE_URL and SUPABASE_KEY.")]
    MissingCredentials,
}

/// Runtime configuration for the API process.
///
/// Recognized options:
/// - `supabase_url`: base URL of the hosted store project (required)
/// - `supabase_key`: service key sent as `apikey` and bearer token (required)
/// - `port`: HTTP listen port (default: 3000)
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub supabase_url: String,
    pub supabase_key: String,
    pub port: u16,
}

impl AppConfig {
    /// Default HTTP listen port.
    pub const DEFAULT_PORT: u16 = 3000;

    /// Validate raw settings into a usable configuration.
    pub fn from_parts(
        supabase_url: Option<String>,
        supabase_key: Option<String>,
        port: u16,
    ) -> Result<Self, ConfigError> {
        match (supabase_url, supabase_key) {
            (Some(supabase_url), Some(supabase_key)) => Ok(Self {
                supabase_url,
                supabase_key,
                port,
            }),
            _ => Err(ConfigError::MissingCredentials),
        }
    }

    /// Get the socket address string to bind.
    pub fn socket_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
