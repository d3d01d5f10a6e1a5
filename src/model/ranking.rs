use std::cmp::Ordering;

use tracing::{debug, info};

use crate::{
    error::RosterError,
    model::structures::{roster::Roster, score_card::ScoreCard, team::Team}
};

/// `skill average + region offset + platform offset`
pub fn team_score(team: &Team, score_card: &ScoreCard) -> Result<f64, RosterError> {
    Ok(team.skill_average()? + score_card.offset(team.division()))
}

/// Scores every team that has not been scored yet, then orders the roster by
/// division (in report order) and by score within a division.
///
/// The sort is stable, so teams with equal scores keep their sheet order.
/// Ranking an already ranked roster changes nothing.
pub fn rank(roster: &mut Roster) -> Result<(), RosterError> {
    let score_card = roster.score_card().clone();

    for team in roster.teams_mut().iter_mut() {
        if team.score().is_none() {
            let score = team_score(team, &score_card)?;
            debug!("{} scored {:.2}", team.name(), score);
            team.set_score(score);
        }
    }

    roster.teams_mut().sort_by(compare_teams);
    info!("Ranked {} teams", roster.len());

    Ok(())
}

fn compare_teams(a: &Team, b: &Team) -> Ordering {
    a.division()
        .cmp(&b.division())
        .then_with(|| a.score().unwrap_or_default().total_cmp(&b.score().unwrap_or_default()))
}
