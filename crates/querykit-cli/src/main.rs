//! # Querykit CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, while this
//! file only invokes `cli::run()` and handles process termination.
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/querykit-cli/src/cli/)                   │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Logging, config loading, dispatch (commands.rs)          │
//! │  - Query-surface document (schema.rs)                       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Library (crates/querykit/)                                 │
//! │  - Validation, specifications, repositories, paging         │
//! │  - No knowledge of stdout/stderr or process exits           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Input files are JSON: filters are `ExtendedAttributePaginationFilter`
//! objects keyed by UUID entity ids, and record files are arrays of storage
//! rows (`ExtendedAttributeRecord`).

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
