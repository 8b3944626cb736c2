//! # CLI Module
//!
//! Argument and environment parsing plus process bootstrap: build the
//! configuration, initialize logging, construct the store client, and run
//! the HTTP server.

mod args;
mod commands;
mod errors;

pub use args::Cli;
pub use commands::run;
pub use errors::{CliError, CliResult};
