//! Snapshot files: one JSON document holding a whole collection.

use std::{fs, io, path::Path};

use jiff::Timestamp;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::debug;

use super::Result;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Outgoing<'a, T> {
    saved_at: Timestamp,
    records: &'a [T],
}

/// Only the records are read back; the timestamp is informational.
#[derive(Deserialize)]
struct Incoming<T> {
    records: Vec<T>,
}

/// Overwrites `path` with a snapshot of `records`.
pub(super) fn write<T: Serialize>(path: &Path, records: &[T]) -> Result<()> {
    let snapshot = Outgoing {
        saved_at: Timestamp::now(),
        records,
    };
    let json = serde_json::to_string_pretty(&snapshot)?;
    fs::write(path, json)?;
    debug!(path = %path.display(), count = records.len(), "snapshot saved");
    Ok(())
}

/// Reads the snapshot at `path`. A missing file is an empty collection.
pub(super) fn read<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no snapshot yet, starting empty");
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    };
    let snapshot: Incoming<T> = serde_json::from_str(&json)?;
    Ok(snapshot.records)
}
