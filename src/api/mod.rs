//! # HTTP Resource Layer
//!
//! Translates HTTP requests for the shopping list collection into store
//! calls, and store results into HTTP responses.

pub mod error;
pub mod server;

pub use error::{ApiError, ApiResult};
pub use server::ApiServer;
