// avtool-cli/src/lib.rs
//
// Library portion of the avtool CLI application.
// Contains the option table, the report routines and the output helpers.

pub mod commands;
pub mod error;
pub mod logging;
pub mod output;
pub mod table;

// Re-export items needed by the binary or integration tests
pub use error::CliResult;
pub use table::{build_registry, render_help, render_usage};
