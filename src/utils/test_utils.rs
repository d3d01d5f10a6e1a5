use crate::{
    model::{
        constants::EXTRA_PLAYER_ANSWER,
        schema::{self, SlotGate, CAPTAIN, PLATFORM, REGION, TEAM_NAME},
        structures::{platform::Platform, player::Player, region::Region, team::Team}
    },
    sheet::SheetRow
};

/// Builds a team whose players are named after their position.
pub fn generate_team(name: &str, region: Region, platform: Platform, skills: &[i32]) -> Team {
    let players = skills
        .iter()
        .enumerate()
        .map(|(i, skill)| Player::new(format!("{}-disc{}", name, i + 1), format!("{}#{}", name, i + 1), *skill))
        .collect();

    Team::new(name, region, platform, "captain", players)
}

/// A full-width NA / PC team row with only the first player filled in.
pub fn generate_row(number: usize, team_name: &str, tag: &str, skill: i32) -> SheetRow {
    RowBuilder::new(team_name, "Americas", "PC (Battle.net)", &format!("{}-captain", team_name))
        .player(1, &format!("{}-disc", team_name), tag, &skill.to_string())
        .build(number)
}

/// Fills a sign-up row cell by cell through the sheet schema.
pub struct RowBuilder {
    cells: Vec<String>
}

impl RowBuilder {
    pub fn new(team_name: &str, region: &str, platform: &str, captain: &str) -> RowBuilder {
        let mut cells = vec![String::new(); schema::row_width()];
        cells[0] = "2020/05/09 10:00:00 AM".to_string();
        cells[TEAM_NAME.column] = team_name.to_string();
        cells[REGION.column] = region.to_string();
        cells[PLATFORM.column] = platform.to_string();
        cells[CAPTAIN.column] = captain.to_string();

        RowBuilder { cells }
    }

    /// Fills player slot `slot` (1-based). Flag gated slots are answered `Yes`.
    pub fn player(mut self, slot: usize, identifier: &str, tag: &str, skill: &str) -> RowBuilder {
        let slot = &schema::PLAYER_SLOTS[slot - 1];
        self.cells[slot.identifier.column] = identifier.to_string();
        self.cells[slot.tag.column] = tag.to_string();
        self.cells[slot.skill.column] = skill.to_string();
        if let SlotGate::Flag(flag) = slot.gate {
            self.cells[flag.column] = EXTRA_PLAYER_ANSWER.to_string();
        }

        self
    }

    pub fn flag(mut self, slot: usize, answer: &str) -> RowBuilder {
        if let SlotGate::Flag(flag) = schema::PLAYER_SLOTS[slot - 1].gate {
            self.cells[flag.column] = answer.to_string();
        }

        self
    }

    pub fn build(self, number: usize) -> SheetRow {
        SheetRow::new(number, self.cells)
    }

    /// The row as one comma separated line, quoting every cell.
    pub fn to_csv_line(&self) -> String {
        self.cells
            .iter()
            .map(|c| format!("\"{}\"", c.replace('"', "\"\"")))
            .collect::<Vec<_>>()
            .join(",")
    }
}
