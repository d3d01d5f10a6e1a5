use std::cell::OnceCell;

use crate::{
    error::RosterError,
    model::structures::{division::Division, platform::Platform, player::Player, region::Region}
};

#[derive(Debug, Clone)]
pub struct Team {
    name: String,
    division: Division,
    captain: String,
    /// Sign-up form order
    players: Vec<Player>,
    skill_average: OnceCell<f64>,
    score: Option<f64>
}

impl Team {
    pub fn new(
        name: impl Into<String>,
        region: Region,
        platform: Platform,
        captain: impl Into<String>,
        players: Vec<Player>
    ) -> Team {
        Team {
            name: name.into(),
            division: Division::new(region, platform),
            captain: captain.into(),
            players,
            skill_average: OnceCell::new(),
            score: None
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn captain(&self) -> &str {
        &self.captain
    }

    pub fn region(&self) -> Region {
        self.division.region
    }

    pub fn platform(&self) -> Platform {
        self.division.platform
    }

    pub fn division(&self) -> Division {
        self.division
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Mean skill rating of the roster, computed on first use and cached.
    pub fn skill_average(&self) -> Result<f64, RosterError> {
        if let Some(average) = self.skill_average.get() {
            return Ok(*average);
        }

        if self.players.is_empty() {
            return Err(RosterError::EmptyTeam {
                team: self.name.clone()
            });
        }

        let total: i64 = self.players.iter().map(|p| i64::from(p.skill())).sum();
        let average = total as f64 / self.players.len() as f64;

        Ok(*self.skill_average.get_or_init(|| average))
    }

    /// Ranking score, `None` until the roster has been ranked.
    pub fn score(&self) -> Option<f64> {
        self.score
    }

    pub(crate) fn set_score(&mut self, score: f64) {
        self.score = Some(score);
    }
}
