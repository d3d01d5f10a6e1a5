/// A single signed-up player. Never changes after the row is parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    identifier: String,
    tag: String,
    skill: i32
}

impl Player {
    pub fn new(identifier: impl Into<String>, tag: impl Into<String>, skill: i32) -> Player {
        Player {
            identifier: identifier.into(),
            tag: tag.into(),
            skill
        }
    }

    /// Discord handle
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Platform handle, e.g. a battle tag
    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn skill(&self) -> i32 {
        self.skill
    }
}
