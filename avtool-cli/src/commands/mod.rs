//! Command implementations for the CLI.
//!
//! Every informational option in the table resolves to a routine in this
//! module tree.

/// Module containing the report-and-exit routines behind the informational
/// flags (`-L`, `-h`, `-version`, `-formats`, ...).
pub mod show;
