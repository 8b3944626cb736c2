//! # shoplist
//!
//! A minimal HTTP API exposing CRUD operations over a single shopping list
//! collection, backed by a hosted Postgres service reached through its REST
//! interface. Every route performs field extraction, one passthrough call to
//! the store, and translation of the result into an HTTP response.
//!
//! Modules:
//! - `api`: HTTP surface (axum router, handlers, error mapping)
//! - `cli`: argument and environment parsing, process bootstrap
//! - `config`: runtime configuration validated once at startup
//! - `model`: the shopping list item entity
//! - `store`: persistence clients (hosted store + in-memory)

pub mod api;
pub mod cli;
pub mod config;
pub mod model;
pub mod store;
