//! Team sign-up model: sheet layout, row parsing, validation and ranking.

pub mod constants;
pub mod duplicates;
pub mod parser;
pub mod ranking;
pub mod schema;
pub mod structures;

use tracing::info;

use crate::{error::RosterError, model::structures::roster::Roster, sheet::SheetRow};

/// The whole model pass: duplicate check over every row first, then parsing,
/// then ranking. Nothing is built if the sheet has a duplicate tag.
pub fn build_roster(rows: &[SheetRow]) -> Result<Roster, RosterError> {
    info!("Checking {} rows for duplicate tags", rows.len());
    duplicates::check_duplicate_tags(rows)?;

    let mut roster = parser::parse_roster(rows)?;
    ranking::rank(&mut roster)?;

    Ok(roster)
}
