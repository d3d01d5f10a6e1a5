use std::path::Path;

use csv::ReaderBuilder;
use tracing::{debug, info};

use crate::{
    error::RosterError,
    sheet::{encoding::decode_latin1, SheetRow}
};

/// Reads every data row of the sheet at `path`. The header row is dropped.
pub fn read_sheet(path: &Path, delimiter: u8) -> Result<Vec<SheetRow>, RosterError> {
    info!("Reading sign-up sheet {}", path.display());
    let bytes = std::fs::read(path).map_err(|e| RosterError::io(path.display().to_string(), e))?;

    let rows = parse_sheet(&decode_latin1(&bytes), delimiter)?;
    info!("Read {} data rows", rows.len());

    Ok(rows)
}

pub fn parse_sheet(text: &str, delimiter: u8) -> Result<Vec<SheetRow>, RosterError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        let row = SheetRow::from_index(index, record.iter().map(str::to_string).collect());
        debug!("Row {} has {} cells", row.number, row.width());
        rows.push(row);
    }

    Ok(rows)
}
