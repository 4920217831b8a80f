//! Record source errors.

use std::path::PathBuf;

/// Fatal conditions that abort a whole load.
///
/// Per-record problems (a bad year token, a malformed filename) are never
/// reported through this type; the loader drops the offending record and
/// keeps going.
#[derive(Debug, thiserror::Error)]
pub enum DataSourceError {
    #[error("Source not found: {path}. Check the path or run `qbank config show`.")]
    NotFound { path: PathBuf },

    #[error("Source {path} is present but contains no records.")]
    Empty { path: PathBuf },

    #[error("Source {path} is malformed: {message}")]
    Malformed { path: PathBuf, message: String },

    #[error("Source {path} is missing required column '{column}'. Expected header: topic,section,year,content")]
    MissingColumn { path: PathBuf, column: String },
}
