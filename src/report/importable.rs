use crate::{
    error::RosterError,
    model::structures::{division::Division, roster::Roster, team::Team},
    report::division_runs
};

/// Tab separated roster for importing into the bracket tooling.
pub fn render(roster: &Roster) -> Result<String, RosterError> {
    let mut out = String::new();

    for (division, teams) in division_runs(roster)? {
        out.push_str(&banner(division));
        for team in teams {
            out.push_str(&team_lines(team)?);
        }
    }

    Ok(out)
}

pub fn banner(division: Division) -> String {
    format!("\n~~~~~~~~~~~~~~~~ {} ~~~~~~~~~~~~~~~~\n", division)
}

fn team_lines(team: &Team) -> Result<String, RosterError> {
    // Halves round to even
    let average = team.skill_average()?.round_ties_even() as i64;

    let mut lines = format!(
        "{}\t{}\t{}\t{}\n",
        team.name(),
        team.captain(),
        average,
        team.division()
    );
    for player in team.players() {
        lines.push_str(&format!(
            "{}\t{}\t{}\n",
            player.tag(),
            player.identifier(),
            player.skill()
        ));
    }
    lines.push('\n');

    Ok(lines)
}
