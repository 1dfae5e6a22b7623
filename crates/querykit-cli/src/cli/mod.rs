//! # CLI Layer
//!
//! The CLI layer is the **only** place in the workspace that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Installs a tracing subscriber
//! - Handles argument parsing
//!
//! Every subcommand reads JSON, calls into the library and prints either JSON,
//! TOML or one line per validation error.

mod commands;
mod schema;
mod setup;

pub use commands::run;
