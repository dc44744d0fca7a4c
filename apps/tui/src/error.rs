use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the data layer.
///
/// Shape problems inside individual documents are never errors; they resolve
/// to absent fields. Only unusable input files and invalid month selections
/// surface here.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("invalid month range {start}..{end}: months must be between 1 and 12")]
    InvalidRange { start: i64, end: i64 },
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse '{path}' as JSON: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T, E = DashboardError> = std::result::Result<T, E>;
