use crate::model::structures::{score_card::ScoreCard, team::Team};

/// All teams of one sign-up sheet, kept in insertion order until ranked.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    teams: Vec<Team>,
    score_card: ScoreCard
}

impl Roster {
    pub fn new() -> Roster {
        Roster::default()
    }

    pub fn with_score_card(score_card: ScoreCard) -> Roster {
        Roster {
            teams: Vec::new(),
            score_card
        }
    }

    pub fn push(&mut self, team: Team) {
        self.teams.push(team);
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub(crate) fn teams_mut(&mut self) -> &mut Vec<Team> {
        &mut self.teams
    }

    pub fn score_card(&self) -> &ScoreCard {
        &self.score_card
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}

impl FromIterator<Team> for Roster {
    fn from_iter<I: IntoIterator<Item = Team>>(iter: I) -> Self {
        Roster {
            teams: iter.into_iter().collect(),
            score_card: ScoreCard::default()
        }
    }
}
