//! Load a snapshot override from a JSON file
//!
//! Fields left out of the file keep the default company's values.

use super::FinancialSnapshot;
use crate::error::SnapshotError;
use log::info;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Load and validate a snapshot from a JSON file
pub fn load_snapshot<P: AsRef<Path>>(path: P) -> Result<FinancialSnapshot, SnapshotError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let snapshot = load_snapshot_from_reader(BufReader::new(file))?;

    info!("Loaded snapshot override from {}", path.display());
    Ok(snapshot)
}

/// Load and validate a snapshot from any reader (e.g., string buffer, stdin)
pub fn load_snapshot_from_reader<R: std::io::Read>(reader: R) -> Result<FinancialSnapshot, SnapshotError> {
    let snapshot: FinancialSnapshot = serde_json::from_reader(reader)?;
    snapshot.validate()?;
    Ok(snapshot)
}

/// Use the override at `path` if given, otherwise the built-in company
pub fn load_snapshot_or_default(path: Option<&Path>) -> Result<FinancialSnapshot, SnapshotError> {
    match path {
        Some(p) => load_snapshot(p),
        None => Ok(FinancialSnapshot::default_company()),
    }
}
