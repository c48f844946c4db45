// ============================================================================
// avtool-cli/src/error.rs
// ============================================================================
//
// CLI ERROR HANDLING: Result alias for the CLI
//
// The CLI does not define its own error enum; every failure it can surface
// is already covered by the core taxonomy (unknown option, missing argument,
// invalid argument, rejected handler, registration, IO). This module only
// provides the alias so CLI signatures read consistently.

use avtool_core::CoreResult;

/// Type alias for CLI results using CoreError.
pub type CliResult<T> = CoreResult<T>;
