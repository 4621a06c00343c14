//! # blogql - a tiny in-memory GraphQL API
//!
//! blogql serves three related collections (users, posts and comments) over
//! GraphQL. Everything lives in process memory and is re-seeded with a few
//! demo records on every start.
//!
//! ## Quick Start
//!
//! ```bash
//! # Serve on http://127.0.0.1:4000/graphql
//! blogql serve
//!
//! # One-off query against a freshly seeded store
//! blogql query '{ users(query: "an") { name posts { title } } }'
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Configuration loading and management
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers and HTTP server
//! - [`model`]: Data models (User, Post, Comment)
//! - [`storage`]: The in-memory store and id generation
//! - [`logging`]: Tracing subscriber setup
//! - [`search`]: Query-string filtering

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.blogql.toml` configuration files and their discovery.
pub mod config;

/// Error types and result aliases.
///
/// Defines the `BlogError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema and resolvers.
///
/// Provides the async-graphql schema and the axum transport serving it.
pub mod graphql;

/// Data models for blogql.
pub mod model;

/// In-memory storage layer.
pub mod storage;

/// Tracing subscriber setup: stderr plus an optional rolling JSON file.
pub mod logging;

/// Case-insensitive substring filtering for the list queries.
pub mod search;
