// ============================================================================
// avtool-core/src/logging.rs
// ============================================================================
//
// LOG LEVEL PARSING: Vocabulary behind the -loglevel option
//
// The front end accepts the toolchain's historical level names alongside raw
// numeric values and buckets both onto the `log` facade's level filters. The
// CLI installs the parsed filter globally through `apply_level`; everything
// in the workspace logs through the `log` macros, so the change takes effect
// everywhere at once.

use log::LevelFilter;

/// Symbolic level names in ascending verbosity, with the numeric value each
/// name stands for.
const LEVELS: &[(&str, i32, LevelFilter)] = &[
    ("quiet", -8, LevelFilter::Off),
    ("panic", 0, LevelFilter::Error),
    ("fatal", 8, LevelFilter::Error),
    ("error", 16, LevelFilter::Error),
    ("warning", 24, LevelFilter::Warn),
    ("info", 32, LevelFilter::Info),
    ("verbose", 40, LevelFilter::Debug),
    ("debug", 48, LevelFilter::Trace),
];

/// Parse a `-loglevel` value: a symbolic name or a raw number.
///
/// Numeric values are bucketed onto the nearest filter at or below them, so
/// `-loglevel 32` and `-loglevel info` are equivalent. The reason string on
/// rejection feeds the dispatcher's invalid-argument reporting.
pub fn parse_level(value: &str) -> Result<LevelFilter, String> {
    if let Some(&(_, _, filter)) = LEVELS.iter().find(|(name, _, _)| *name == value) {
        return Ok(filter);
    }

    if let Ok(number) = value.parse::<i32>() {
        let mut chosen = LevelFilter::Off;
        for &(_, threshold, filter) in LEVELS {
            if number >= threshold {
                chosen = filter;
            }
        }
        return Ok(chosen);
    }

    Err(format!(
        "expected a level name ({}) or a number",
        level_names().join(", ")
    ))
}

/// Install `filter` as the global maximum log level.
pub fn apply_level(filter: LevelFilter) {
    log::set_max_level(filter);
}

/// The accepted symbolic names, in ascending verbosity (used by help text
/// and rejection messages).
pub fn level_names() -> Vec<&'static str> {
    LEVELS.iter().map(|(name, _, _)| *name).collect()
}
