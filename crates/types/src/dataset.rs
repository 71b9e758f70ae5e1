//! Embedded sample dataset and JSON loading for wallet records.

use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use thiserror::Error;

use crate::WalletRecord;

static EMBEDDED_JSON: &str = include_str!("../assets/wallets.json");

/// Built-in sample wallets, parsed once on first access.
pub static EMBEDDED_WALLETS: Lazy<Vec<WalletRecord>> =
    Lazy::new(|| serde_json::from_str(EMBEDDED_JSON).expect("embedded wallet dataset is valid JSON"));

/// Errors raised while loading a wallet dataset from disk.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read wallet data from {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse wallet data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Loads wallet records from a JSON file.
///
/// The file must contain a JSON array of objects with `id`, `balance`,
/// and `address` fields.
pub fn from_path(path: &Path) -> Result<Vec<WalletRecord>, DatasetError> {
    let raw = std::fs::read_to_string(path).map_err(|source| DatasetError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_dataset_contains_the_sample_wallets() {
        let records = &*EMBEDDED_WALLETS;
        assert_eq!(records.len(), 5);
        assert_eq!(records[0].id, "m5gr84i9");
        assert_eq!(records[0].balance, 316.0);
        assert_eq!(records[3].id, "5kma53ae");
        assert_eq!(records[3].balance, 874.0);
        assert!(records.iter().all(|record| record.address.starts_with("0x")));
    }

    #[test]
    fn from_path_reports_missing_files() {
        let error = from_path(Path::new("/nonexistent/wallets.json"))
            .expect_err("missing file should error");
        assert!(matches!(error, DatasetError::Read { .. }));
        assert!(error.to_string().contains("/nonexistent/wallets.json"));
    }
}
