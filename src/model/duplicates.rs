use indexmap::IndexMap;
use tracing::info;

use crate::{
    error::RosterError,
    model::schema::{self, CellRef},
    sheet::SheetRow
};

/// Fails on the first tag that appears in two cells anywhere in the sheet.
///
/// Every tag column of every data row takes part, including rows the parser
/// will skip and player slots that are not filled in. Empty cells are ignored.
pub fn check_duplicate_tags(rows: &[SheetRow]) -> Result<(), RosterError> {
    let mut seen: IndexMap<&str, CellRef> = IndexMap::new();

    for row in rows {
        for field in schema::tag_fields() {
            let tag = row.cell(field);
            if tag.is_empty() {
                continue;
            }

            let cell = CellRef::new(row.number, field);
            if let Some(first) = seen.get(tag) {
                return Err(RosterError::DuplicateTag {
                    tag: tag.to_string(),
                    first: first.clone(),
                    second: cell
                });
            }
            seen.insert(tag, cell);
        }
    }

    info!("No duplicate tags among {} entries", seen.len());
    Ok(())
}
