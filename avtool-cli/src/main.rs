// avtool-cli/src/main.rs
//
// Binary entry point for the avtool front end.
//
// Responsibilities:
// - Initializing logging before any option handler runs.
// - Building the process-wide option registry from the declarative table.
// - Handing the raw argument vector to the core dispatcher.
// - Translating the dispatch outcome into process termination: flush and
//   exit 0 after an informational (EXIT-category) option, exit 1 with a
//   diagnostic on any dispatch error.

use std::env;
use std::io::{self, Write};
use std::process;

use log::info;

use avtool_core::{dispatch, DispatchOutcome};
use avtool_cli::output::print_error;
use avtool_cli::{build_registry, logging, render_usage};

fn main() {
    logging::init_logging();

    // Raw argument vector, program name excluded.
    let args: Vec<String> = env::args().skip(1).collect();

    let registry = match build_registry() {
        Ok(registry) => registry,
        Err(e) => {
            // Authoring error in the option table; not reachable from user
            // input.
            print_error(&e);
            process::exit(1);
        }
    };

    if args.is_empty() {
        eprintln!("{}", render_usage());
        eprintln!("Try 'avtool -h' for the full option list.");
        process::exit(1);
    }

    match dispatch(&registry, &args) {
        Ok(DispatchOutcome::ExitRequested) => {
            // Informational handlers buffer through stdout; flush before the
            // zero-status exit so no report output is lost.
            let _ = io::stdout().flush();
            process::exit(0);
        }
        Ok(DispatchOutcome::Completed { positionals }) => {
            for input in &positionals {
                info!("queued input '{input}'");
            }
            if positionals.is_empty() {
                info!("nothing to do");
            }
        }
        Err(e) => {
            let _ = io::stdout().flush();
            print_error(&e);
            eprintln!("Try 'avtool -h' for the full option list.");
            process::exit(1);
        }
    }
}
