//! # shelfql - GraphQL over HTTP with two demo schemas
//!
//! shelfql serves two independent GraphQL schemas from one axum server:
//! a hello-world schema whose fields answer after a fixed delay, and a small
//! authors/books library kept in memory.
//!
//! ## Features
//!
//! - **Hello schema**: Four delayed string fields that resolve concurrently
//! - **Library schema**: Queries and mutations over seeded authors and books
//! - **GraphiQL**: Interactive console on `GET` of each schema path
//! - **CLI**: Run the server, execute a document in-process, or print the SDL
//!
//! ## Quick Start
//!
//! ```bash
//! # Start the server on port 5000
//! shelfql serve
//!
//! # Run a query without the server
//! shelfql query '{ authors { name books { name } } }'
//!
//! # Print the library schema
//! shelfql schema --schema library
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`config`]: Configuration loading
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schemas and resolvers
//! - [`logging`]: Tracing subscriber setup
//! - [`model`]: Author and book records
//! - [`server`]: HTTP routing and serving
//! - [`storage`]: In-memory record store

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading.
///
/// Handles `shelfql.toml` discovery and defaults.
pub mod config;

/// Error types and result aliases.
///
/// Defines `ShelfError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schemas and resolvers.
pub mod graphql;

/// Data models for the library schema.
pub mod model;

/// Logging setup.
///
/// Stderr output plus an optional daily-rotated JSON log file.
pub mod logging;

/// HTTP routing, binding and serving.
pub mod server;

/// In-memory storage layer.
pub mod storage;
