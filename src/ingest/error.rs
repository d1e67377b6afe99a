//! Error types for spreadsheet ingestion

use std::path::PathBuf;
use thiserror::Error;

/// Failures that reject a whole batch
///
/// Problems confined to a single row are reported as
/// [`SkipReason`](super::SkipReason) instead.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The input file could not be opened
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input is not readable as CSV
    #[error("Invalid CSV: {0}")]
    Csv(#[from] csv::Error),

    /// The first row is missing or blank
    #[error("Sheet has no header row")]
    MissingHeader,

    /// The header is present but no data follows
    #[error("Sheet has no data rows")]
    NoRows,

    /// A required column was not found in the header
    #[error("Required column '{0}' not found in header")]
    MissingColumn(&'static str),
}
