//! Column layout of the sign-up sheet.
//!
//! Every cell the parser or the duplicate checker touches is looked up through
//! the tables in this module, so a column moving in the sign-up form is a
//! one-line change here.

use std::fmt;

/// Sheet rows are numbered from 1 and the header occupies row 1.
pub const FIRST_DATA_ROW: usize = 2;

/// A named column of the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub column: usize,
    pub required: bool
}

impl Field {
    const fn required(name: &'static str, column: usize) -> Field {
        Field {
            name,
            column,
            required: true
        }
    }

    const fn optional(name: &'static str, column: usize) -> Field {
        Field {
            name,
            column,
            required: false
        }
    }
}

/// Decides whether an optional player slot was filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotGate {
    /// Slot 1, always read.
    Always,
    /// Read only when both the tag and skill cells are non-empty.
    TagAndSkill,
    /// Read only when the flag cell is exactly `Yes`.
    Flag(Field)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerSlot {
    pub identifier: Field,
    pub tag: Field,
    pub skill: Field,
    pub gate: SlotGate
}

pub const TEAM_NAME: Field = Field::required("team_name", 2);
pub const REGION: Field = Field::required("region", 3);
pub const PLATFORM: Field = Field::required("platform", 4);
pub const CAPTAIN: Field = Field::required("captain", 5);

pub const PLAYER_SLOTS: [PlayerSlot; 8] = [
    PlayerSlot {
        identifier: Field::required("player1.identifier", 6),
        tag: Field::required("player1.tag", 7),
        skill: Field::required("player1.skill", 8),
        gate: SlotGate::Always
    },
    PlayerSlot {
        identifier: Field::optional("player2.identifier", 9),
        tag: Field::optional("player2.tag", 10),
        skill: Field::optional("player2.skill", 12),
        gate: SlotGate::TagAndSkill
    },
    PlayerSlot {
        identifier: Field::optional("player3.identifier", 13),
        tag: Field::optional("player3.tag", 14),
        skill: Field::optional("player3.skill", 16),
        gate: SlotGate::TagAndSkill
    },
    PlayerSlot {
        identifier: Field::optional("player4.identifier", 17),
        tag: Field::optional("player4.tag", 18),
        skill: Field::optional("player4.skill", 20),
        gate: SlotGate::TagAndSkill
    },
    PlayerSlot {
        identifier: Field::optional("player5.identifier", 21),
        tag: Field::optional("player5.tag", 22),
        skill: Field::optional("player5.skill", 24),
        gate: SlotGate::TagAndSkill
    },
    PlayerSlot {
        identifier: Field::optional("player6.identifier", 25),
        tag: Field::optional("player6.tag", 26),
        skill: Field::optional("player6.skill", 28),
        gate: SlotGate::TagAndSkill
    },
    PlayerSlot {
        identifier: Field::optional("player7.identifier", 30),
        tag: Field::optional("player7.tag", 31),
        skill: Field::optional("player7.skill", 33),
        gate: SlotGate::Flag(Field::optional("player7.flag", 29))
    },
    PlayerSlot {
        identifier: Field::optional("player8.identifier", 35),
        tag: Field::optional("player8.tag", 36),
        skill: Field::optional("player8.skill", 38),
        gate: SlotGate::Flag(Field::optional("player8.flag", 34))
    }
];

/// Every field the sheet is expected to carry, in column order of first use.
pub fn fields() -> Vec<Field> {
    let mut fields = vec![TEAM_NAME, REGION, PLATFORM, CAPTAIN];
    for slot in PLAYER_SLOTS.iter() {
        if let SlotGate::Flag(flag) = slot.gate {
            fields.push(flag);
        }
        fields.extend([slot.identifier, slot.tag, slot.skill]);
    }

    fields
}

/// Minimum number of cells a team row must have.
pub fn row_width() -> usize {
    fields().iter().map(|f| f.column).max().map_or(0, |c| c + 1)
}

/// The tag column of every player slot, in slot order.
pub fn tag_fields() -> impl Iterator<Item = Field> {
    PLAYER_SLOTS.iter().map(|slot| slot.tag)
}

/// Spreadsheet-style column letters: 0 -> `A`, 25 -> `Z`, 26 -> `AA`.
pub fn column_label(column: usize) -> String {
    let mut label = Vec::new();
    let mut n = column + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        label.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    label.reverse();

    String::from_utf8(label).unwrap_or_default()
}

/// Location of a single cell, as an operator would find it in the sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellRef {
    pub row: usize,
    pub field: Field
}

impl CellRef {
    pub fn new(row: usize, field: Field) -> CellRef {
        CellRef { row, field }
    }

    pub fn label(&self) -> String {
        format!("{}{}", column_label(self.field.column), self.row)
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label(), self.field.name)
    }
}
