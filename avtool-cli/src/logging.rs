// ============================================================================
// avtool-cli/src/logging.rs
// ============================================================================
//
// LOGGING SETUP: env_logger initialization for the CLI
//
// The application logs through the standard `log` facade with `env_logger`
// as the backend. Initialization happens once at the top of main, before
// argument dispatch, so option handlers can already log.
//
// USAGE:
// The RUST_LOG environment variable selects the initial level:
// - RUST_LOG=info (default): Normal operation logs
// - RUST_LOG=debug: Detailed debugging information
// The -loglevel option then adjusts the global maximum level at runtime via
// avtool_core::logging::apply_level.

use env_logger::Env;

/// Initialize env_logger with an `info` default and a terse format.
pub fn init_logging() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .init();
}
