use log::debug;
use once_cell::sync::Lazy;

use avtool_core::capabilities::{self, CapabilityKind};

use crate::error::CliResult;
use crate::output::{print_heading, print_info};
use crate::table;

/// Version banner, assembled once per process.
static VERSION_BANNER: Lazy<String> = Lazy::new(|| {
    format!("avtool version {}", env!("CARGO_PKG_VERSION"))
});

const LICENSE_TEXT: &str = "\
avtool is free software; you can redistribute it and/or modify it under the
terms of the MIT License. avtool is distributed in the hope that it will be
useful, but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the LICENSE file
shipped with the source tree for the full text.";

/// Execute the `-L` option: print the license text.
pub fn show_license() -> CliResult<()> {
    println!("{LICENSE_TEXT}");
    Ok(())
}

/// Execute the `-h`/`-?`/`-help`/`--help` option: print usage help rendered
/// from the option table.
pub fn show_help() -> CliResult<()> {
    print!("{}", table::render_help());
    Ok(())
}

/// Execute the `-version` option.
pub fn show_version() -> CliResult<()> {
    println!("{}", *VERSION_BANNER);
    print_info("configuration", "default");
    Ok(())
}

/// Shared listing body for the capability reports: heading, then one aligned
/// row per installed entry.
fn show_capability_set(heading: &str, legend: &str, kind: CapabilityKind) -> CliResult<()> {
    let table = capabilities::list(kind);
    debug!("listing {} {heading}", table.len());

    print_heading(heading);
    println!("{legend}");
    let width = table
        .iter()
        .map(|entry| entry.name.len())
        .max()
        .unwrap_or(0);
    for entry in table {
        println!(" {:3} {:width$}  {}", entry.tags, entry.name, entry.summary);
    }
    Ok(())
}

/// Execute the `-formats` option.
pub fn show_formats() -> CliResult<()> {
    show_capability_set(
        "File Formats",
        " D. = demuxing supported, .E = muxing supported",
        CapabilityKind::Formats,
    )
}

/// Execute the `-codecs` option.
pub fn show_codecs() -> CliResult<()> {
    show_capability_set(
        "Codecs",
        " D/E = decode/encode, V/A/S = video/audio/subtitle",
        CapabilityKind::Codecs,
    )
}

/// Execute the `-bsfs` option.
pub fn show_bsfs() -> CliResult<()> {
    show_capability_set(
        "Bitstream Filters",
        " V/A = video/audio packets",
        CapabilityKind::BitstreamFilters,
    )
}

/// Execute the `-protocols` option.
pub fn show_protocols() -> CliResult<()> {
    show_capability_set(
        "Protocols",
        " I/O = input/output supported",
        CapabilityKind::Protocols,
    )
}

/// Execute the `-filters` option.
pub fn show_filters() -> CliResult<()> {
    show_capability_set(
        "Filters",
        " V/A = video/audio streams",
        CapabilityKind::Filters,
    )
}
