use tracing::{debug, info, warn};

use crate::{
    error::RosterError,
    model::{
        constants::EXTRA_PLAYER_ANSWER,
        schema::{self, CellRef, Field, PlayerSlot, SlotGate, CAPTAIN, PLATFORM, REGION, TEAM_NAME},
        structures::{platform::Platform, player::Player, region::Region, roster::Roster, team::Team}
    },
    sheet::SheetRow,
    utils::progress_utils::progress_bar
};

/// Builds the roster from every team row, in sheet order.
/// Rows whose first cell is empty are skipped.
pub fn parse_roster(rows: &[SheetRow]) -> Result<Roster, RosterError> {
    let bar = progress_bar(rows.len() as u64, "Parsing teams".to_string());
    let mut roster = Roster::new();

    for row in rows {
        if row.is_team_row() {
            roster.push(parse_team(row)?);
        } else {
            debug!("Skipping row {}, first cell is empty", row.number);
        }
        bar.inc(1);
    }

    bar.finish_and_clear();
    info!("Parsed {} teams", roster.len());

    Ok(roster)
}

/// Maps one team row to a [`Team`] with between one and eight players.
pub fn parse_team(row: &SheetRow) -> Result<Team, RosterError> {
    let expected = schema::row_width();
    if row.width() < expected {
        return Err(RosterError::ShortRow {
            row: row.number,
            width: row.width(),
            expected
        });
    }

    let players = schema::PLAYER_SLOTS
        .iter()
        .filter(|slot| slot_filled(row, slot))
        .map(|slot| parse_player(row, slot))
        .collect::<Result<Vec<_>, _>>()?;

    let team = Team::new(
        row.cell(TEAM_NAME),
        Region::from_answer(row.cell(REGION)),
        Platform::from_answer(row.cell(PLATFORM)),
        row.cell(CAPTAIN),
        players
    );
    debug!(
        "Row {}: {} ({}) with {} players",
        row.number,
        team.name(),
        team.division(),
        team.players().len()
    );

    Ok(team)
}

fn slot_filled(row: &SheetRow, slot: &PlayerSlot) -> bool {
    match slot.gate {
        SlotGate::Always => true,
        SlotGate::TagAndSkill => !row.cell(slot.tag).is_empty() && !row.cell(slot.skill).is_empty(),
        SlotGate::Flag(flag) => row.cell(flag) == EXTRA_PLAYER_ANSWER
    }
}

fn parse_player(row: &SheetRow, slot: &PlayerSlot) -> Result<Player, RosterError> {
    for field in [slot.identifier, slot.tag] {
        if field.required && row.cell(field).is_empty() {
            warn!("{} is empty", CellRef::new(row.number, field));
        }
    }

    Ok(Player::new(
        row.cell(slot.identifier),
        row.cell(slot.tag),
        parse_skill(row, slot.skill)?
    ))
}

fn parse_skill(row: &SheetRow, field: Field) -> Result<i32, RosterError> {
    let value = row.cell(field);
    value.trim().parse::<i32>().map_err(|_| RosterError::InvalidSkill {
        cell: CellRef::new(row.number, field),
        value: value.to_string()
    })
}
