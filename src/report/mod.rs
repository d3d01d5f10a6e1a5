//! Text reports rendered from a ranked roster.

pub mod importable;
pub mod pretty;

use itertools::Itertools;

use crate::{
    error::RosterError,
    model::structures::{division::Division, roster::Roster, team::Team}
};

/// Both renderings of one roster, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reports {
    pub pretty: String,
    pub importable: String
}

pub fn render_all(roster: &Roster) -> Result<Reports, RosterError> {
    Ok(Reports {
        pretty: pretty::render(roster)?,
        importable: importable::render(roster)?
    })
}

/// Splits the roster into runs of consecutive teams sharing a division.
/// A new run starts whenever the division changes from the previous team.
pub fn division_runs(roster: &Roster) -> Result<Vec<(Division, Vec<&Team>)>, RosterError> {
    if roster.is_empty() {
        return Err(RosterError::EmptyRoster);
    }

    let runs = roster
        .teams()
        .iter()
        .chunk_by(|team| team.division())
        .into_iter()
        .map(|(division, teams)| (division, teams.collect()))
        .collect();

    Ok(runs)
}
