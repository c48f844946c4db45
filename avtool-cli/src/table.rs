// ============================================================================
// avtool-cli/src/table.rs
// ============================================================================
//
// OPTION TABLE: The declarative flag table of the avtool front end
//
// The table itself is inert data: each row binds a flag name (plus aliases)
// to its kind, an action and help text. `build_registry` turns the rows into
// an OptionRegistry by attaching the concrete handlers, and `render_help`
// formats the same rows into the usage text, so names, arg names and help
// strings have a single source of truth.

use std::rc::Rc;

use avtool_core::{Handler, OptionDescriptor, OptionKind, OptionRegistry};

use crate::commands::show;
use crate::error::CliResult;

/// What a table row does once dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    ShowLicense,
    ShowHelp,
    ShowVersion,
    ShowFormats,
    ShowCodecs,
    ShowBsfs,
    ShowProtocols,
    ShowFilters,
    SetLogLevel,
}

struct Row {
    names: &'static [&'static str],
    kind: OptionKind,
    action: Action,
    help: &'static str,
    arg_name: Option<&'static str>,
}

const fn exit_row(names: &'static [&'static str], action: Action, help: &'static str) -> Row {
    Row {
        names,
        kind: OptionKind::Exit,
        action,
        help,
        arg_name: None,
    }
}

/// The option table. An entry whose name carries an embedded leading dash
/// (`-help`) serves the double-dash spelling, since dispatch strips exactly
/// one marker.
const OPTIONS: &[Row] = &[
    exit_row(&["L"], Action::ShowLicense, "show license"),
    exit_row(&["h", "?", "help", "-help"], Action::ShowHelp, "show help"),
    exit_row(&["version"], Action::ShowVersion, "show version"),
    exit_row(&["formats"], Action::ShowFormats, "show available formats"),
    exit_row(&["codecs"], Action::ShowCodecs, "show available codecs"),
    exit_row(&["bsfs"], Action::ShowBsfs, "show available bit stream filters"),
    exit_row(&["protocols"], Action::ShowProtocols, "show available protocols"),
    exit_row(&["filters"], Action::ShowFilters, "show available filters"),
    Row {
        names: &["loglevel"],
        kind: OptionKind::FuncTakesValue,
        action: Action::SetLogLevel,
        help: "set logging level",
        arg_name: Some("loglevel"),
    },
];

/// Two-argument handler behind `-loglevel`: parse the value and install it
/// as the global maximum level.
fn opt_loglevel(_name: &str, value: &str) -> Result<(), String> {
    let filter = avtool_core::logging::parse_level(value)?;
    avtool_core::logging::apply_level(filter);
    Ok(())
}

fn handler_for(action: Action) -> Handler {
    match action {
        Action::ShowLicense => Handler::Exit(Rc::new(show::show_license)),
        Action::ShowHelp => Handler::Exit(Rc::new(show::show_help)),
        Action::ShowVersion => Handler::Exit(Rc::new(show::show_version)),
        Action::ShowFormats => Handler::Exit(Rc::new(show::show_formats)),
        Action::ShowCodecs => Handler::Exit(Rc::new(show::show_codecs)),
        Action::ShowBsfs => Handler::Exit(Rc::new(show::show_bsfs)),
        Action::ShowProtocols => Handler::Exit(Rc::new(show::show_protocols)),
        Action::ShowFilters => Handler::Exit(Rc::new(show::show_filters)),
        Action::SetLogLevel => Handler::Func2(Rc::new(opt_loglevel)),
    }
}

/// Assemble the process-wide registry from the table. Aliases of one row
/// share a single handler.
pub fn build_registry() -> CliResult<OptionRegistry> {
    let mut builder = OptionRegistry::builder();
    for row in OPTIONS {
        let mut descriptor =
            OptionDescriptor::new(row.names[0], row.kind, handler_for(row.action), row.help);
        if let Some(arg_name) = row.arg_name {
            descriptor = descriptor.with_arg_name(arg_name);
        }
        builder = builder.register_aliases(row.names, descriptor)?;
    }
    Ok(builder.build())
}

pub fn render_usage() -> String {
    "usage: avtool [options] [input ...]".to_string()
}

fn render_row_left(row: &Row) -> String {
    let mut left = row
        .names
        .iter()
        .map(|name| format!("-{name}"))
        .collect::<Vec<_>>()
        .join(", ");
    if let Some(arg_name) = row.arg_name {
        left.push_str(&format!(" <{arg_name}>"));
    }
    left
}

/// Render the full help text from the table rows, one line per logical
/// option with its aliases joined and the help column aligned.
pub fn render_help() -> String {
    let rows: Vec<(String, &str)> = OPTIONS
        .iter()
        .map(|row| (render_row_left(row), row.help))
        .collect();
    let width = rows.iter().map(|(left, _)| left.len()).max().unwrap_or(0);

    let mut out = String::new();
    out.push_str("avtool - multimedia toolchain front end\n");
    out.push('\n');
    out.push_str(&render_usage());
    out.push('\n');
    out.push_str("\nOptions:\n");
    for (left, help) in rows {
        out.push_str(&format!("  {left:width$}  {help}\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use avtool_core::dispatch;
    use avtool_core::DispatchOutcome;
    use log::LevelFilter;

    #[test]
    fn registry_builds_and_resolves_every_table_name() {
        let registry = build_registry().expect("table is well formed");
        for row in OPTIONS {
            for name in row.names {
                let entry = registry
                    .lookup(name)
                    .unwrap_or_else(|| panic!("'{name}' missing from registry"));
                assert_eq!(entry.kind(), row.kind, "kind mismatch for '{name}'");
                assert_eq!(entry.help(), row.help);
            }
        }
        // One entry per alias, none dropped or merged.
        let expected: usize = OPTIONS.iter().map(|row| row.names.len()).sum();
        assert_eq!(registry.len(), expected);
    }

    #[test]
    fn help_lists_every_spelling_and_the_arg_name() {
        let help = render_help();
        assert!(help.contains("usage: avtool"));
        for flag in [
            "-L", "-h", "-?", "-help", "--help", "-version", "-formats", "-codecs", "-bsfs",
            "-protocols", "-filters",
        ] {
            assert!(help.contains(flag), "help is missing '{flag}'");
        }
        assert!(help.contains("-loglevel <loglevel>"));
    }

    #[test]
    fn loglevel_option_updates_the_global_filter() {
        let registry = build_registry().unwrap();
        let args = vec!["-loglevel".to_string(), "verbose".to_string()];
        let outcome = dispatch(&registry, &args).unwrap();
        assert_eq!(outcome, DispatchOutcome::Completed { positionals: Vec::new() });
        assert_eq!(log::max_level(), LevelFilter::Debug);
    }

    #[test]
    fn loglevel_rejects_garbage_values() {
        let registry = build_registry().unwrap();
        let args = vec!["-loglevel".to_string(), "louder".to_string()];
        let err = dispatch(&registry, &args).unwrap_err();
        assert!(matches!(
            err,
            avtool_core::CoreError::HandlerRejected { .. }
        ));
    }
}
