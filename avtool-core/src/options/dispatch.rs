//! The option dispatcher: a synchronous left-to-right fold over the raw
//! argument vector against a read-only [`OptionRegistry`].
//!
//! Dispatch never terminates the process itself. An EXIT-category option
//! reports [`DispatchOutcome::ExitRequested`] so the caller can flush
//! buffered output and exit with status 0; every error in the taxonomy is
//! unrecoverable at this level and propagates to the caller.

use log::debug;

use crate::error::{CoreError, CoreResult};
use crate::options::{Handler, OptionKind, OptionRegistry};

/// The option marker expected in front of every flag token.
pub const OPTION_MARKER: char = '-';

/// Terminal state of a dispatch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The argument vector was exhausted without a terminal option. Carries
    /// every positional (non-option) token in input order for downstream
    /// input handling.
    Completed { positionals: Vec<String> },
    /// An EXIT-category option ran. Remaining tokens were never examined;
    /// the caller should flush output streams and terminate with status 0.
    ExitRequested,
}

/// Strip exactly one leading marker from an option token.
///
/// Returns `None` for positionals, including the bare `-` token. Names that
/// themselves carry a leading dash (the `-help` alias serving `--help`) are
/// matched through registry entries spelled that way, so no second marker is
/// stripped here.
fn strip_marker(token: &str) -> Option<&str> {
    match token.strip_prefix(OPTION_MARKER) {
        Some(name) if !name.is_empty() => Some(name),
        _ => None,
    }
}

/// Walk `args` left to right, matching each token against `registry` and
/// invoking the bound handlers.
///
/// Tokens without the marker are collected as positionals and dispatch
/// continues. Option tokens consume a following value token when their kind
/// requires one. The first EXIT-category option short-circuits everything
/// after it, wherever it appears in the vector.
pub fn dispatch(registry: &OptionRegistry, args: &[String]) -> CoreResult<DispatchOutcome> {
    let mut positionals = Vec::new();
    let mut iter = args.iter();

    while let Some(token) = iter.next() {
        let Some(name) = strip_marker(token) else {
            positionals.push(token.clone());
            continue;
        };

        let Some(descriptor) = registry.lookup(name) else {
            return Err(CoreError::UnknownOption(name.to_string()));
        };

        match (descriptor.kind(), descriptor.handler()) {
            (OptionKind::Exit, Handler::Exit(run)) => {
                debug!("option '{name}' requests exit after reporting");
                run()?;
                return Ok(DispatchOutcome::ExitRequested);
            }
            (OptionKind::TakesValue, Handler::Set(set)) => {
                let value = iter
                    .next()
                    .ok_or_else(|| CoreError::MissingArgument(name.to_string()))?;
                set(value).map_err(|reason| CoreError::InvalidArgument {
                    name: name.to_string(),
                    reason,
                })?;
            }
            (OptionKind::FuncTakesValue, Handler::Func2(call)) => {
                let value = iter
                    .next()
                    .ok_or_else(|| CoreError::MissingArgument(name.to_string()))?;
                call(name, value).map_err(|reason| {
                    debug!("option '{name}' rejected '{value}': {reason}");
                    CoreError::HandlerRejected {
                        name: name.to_string(),
                        value: value.clone(),
                    }
                })?;
            }
            (OptionKind::Func, Handler::Func2(call)) => {
                call(name, "").map_err(|reason| {
                    debug!("option '{name}' rejected: {reason}");
                    CoreError::HandlerRejected {
                        name: name.to_string(),
                        value: String::new(),
                    }
                })?;
            }
            // The builder validates handler shapes at registration time;
            // reaching this arm means the registry was assembled by hand.
            (kind, handler) => {
                return Err(CoreError::Registration(format!(
                    "option '{name}' has a {handler:?} handler under {kind:?}"
                )));
            }
        }
    }

    Ok(DispatchOutcome::Completed { positionals })
}
