pub mod args;
pub mod error;
pub mod model;
pub mod report;
pub mod sheet;
pub mod utils;

use std::path::Path;

use tracing::info;

use crate::{
    args::Args,
    error::RosterError,
    report::Reports,
    sheet::{reader::read_sheet, writer::write_outputs}
};

/// Reads, validates and ranks the sheet, then renders both reports.
/// Nothing is written to disk.
pub fn generate_reports(input: &Path, delimiter: u8) -> Result<Reports, RosterError> {
    let rows = read_sheet(input, delimiter)?;
    let roster = model::build_roster(&rows)?;

    report::render_all(&roster)
}

/// One full run: both reports are rendered before either file is written.
pub fn run(args: &Args) -> Result<(), RosterError> {
    let reports = generate_reports(&args.input, args.delimiter_byte())?;

    write_outputs(&[
        (args.pretty_output.as_path(), reports.pretty.as_str()),
        (args.importable_output.as_path(), reports.importable.as_str())
    ])?;
    info!(
        "Rosters written to {} and {}",
        args.pretty_output.display(),
        args.importable_output.display()
    );

    Ok(())
}
