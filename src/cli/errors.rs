//! CLI-specific error types
//!
//! Every CLI error is fatal; main prints it and exits non-zero.

use thiserror::Error;

use crate::config::ConfigError;
use crate::store::StoreError;

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Fatal startup errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration validation failed.
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// The store client could not be constructed.
    #[error("failed to initialize store client: {0}")]
    Store(#[from] StoreError),

    /// The configured listen address does not parse.
    #[error("invalid listen address: {0}")]
    InvalidAddr(String),

    /// Runtime construction or server I/O failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_message_passthrough() {
        let err = CliError::from(ConfigError::MissingCredentials);
        assert!(err.to_string().contains("SUPABASE_URL"));
    }
}
