use strum_macros::{Display, EnumIter};

use crate::model::constants::AMERICAS_MARKER;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Region {
    Na,
    Eu
}

impl Region {
    /// Any answer mentioning the Americas is NA, everything else is EU.
    pub fn from_answer(answer: &str) -> Region {
        if answer.contains(AMERICAS_MARKER) {
            Region::Na
        } else {
            Region::Eu
        }
    }
}
