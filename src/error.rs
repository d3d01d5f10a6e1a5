use thiserror::Error;

use crate::model::schema::CellRef;

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("Failed to access {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error
    },

    #[error("Failed to read sheet: {0}")]
    Csv(#[from] csv::Error),

    #[error("Character {character:?} cannot be written as latin-1")]
    Encoding { character: char },

    #[error("Row {row} has {width} columns, at least {expected} are required")]
    ShortRow { row: usize, width: usize, expected: usize },

    #[error("Invalid skill rating {value:?} in {cell}")]
    InvalidSkill { cell: CellRef, value: String },

    #[error("Duplicate battle tag {tag:?} in {first} and {second}")]
    DuplicateTag { tag: String, first: CellRef, second: CellRef },

    #[error("Team {team:?} has no players, cannot compute a skill average")]
    EmptyTeam { team: String },

    #[error("No teams found in the sheet, nothing to report")]
    EmptyRoster
}

impl RosterError {
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        RosterError::Io {
            path: path.into(),
            source
        }
    }
}
