use std::path::Path;

use tracing::{info, warn};

use crate::{error::RosterError, sheet::encoding::encode_latin1};

/// Writes each `(path, contents)` pair as latin-1.
///
/// Every output is encoded before anything touches the disk, and if a later
/// write fails the files already written are removed again.
pub fn write_outputs(outputs: &[(&Path, &str)]) -> Result<(), RosterError> {
    let encoded = outputs
        .iter()
        .map(|(path, contents)| encode_latin1(contents).map(|bytes| (*path, bytes)))
        .collect::<Result<Vec<_>, _>>()?;

    let mut written: Vec<&Path> = Vec::with_capacity(encoded.len());
    for (path, bytes) in encoded {
        if let Err(e) = std::fs::write(path, bytes) {
            for done in written {
                if let Err(cleanup) = std::fs::remove_file(done) {
                    warn!("Could not remove partial output {}: {}", done.display(), cleanup);
                }
            }
            return Err(RosterError::io(path.display().to_string(), e));
        }

        info!("Wrote {}", path.display());
        written.push(path);
    }

    Ok(())
}
