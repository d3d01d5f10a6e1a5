use std::fmt::Write;

use crate::{
    error::RosterError,
    model::{
        constants::TAG_COLUMN_WIDTH,
        structures::{division::Division, roster::Roster, team::Team}
    },
    report::division_runs
};

/// Human readable roster, one fenced block of players per team.
pub fn render(roster: &Roster) -> Result<String, RosterError> {
    let mut out = String::new();

    for (division, teams) in division_runs(roster)? {
        out.push_str(&banner(division));
        for team in teams {
            out.push_str(&team_block(team));
        }
    }

    Ok(out)
}

pub fn banner(division: Division) -> String {
    format!("\n========== {} =========\n", division)
}

fn team_block(team: &Team) -> String {
    let mut block = format!("{}\tTeam Captain: {}\n```", team.name(), team.captain());
    for player in team.players() {
        let _ = writeln!(
            block,
            "{:<width$}{}",
            player.tag(),
            player.identifier(),
            width = TAG_COLUMN_WIDTH
        );
    }
    block.push_str("```\n");

    block
}
