use strum_macros::{Display, EnumIter};

use crate::model::constants::{PC_ANSWER, PLAYSTATION_ANSWER};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Platform {
    Pc,
    Ps,
    Xb
}

impl Platform {
    /// Exact match on the form answers, anything unrecognised is Xbox.
    pub fn from_answer(answer: &str) -> Platform {
        match answer {
            PC_ANSWER => Platform::Pc,
            PLAYSTATION_ANSWER => Platform::Ps,
            _ => Platform::Xb
        }
    }
}
