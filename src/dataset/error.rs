use std::path::PathBuf;
use thiserror::Error;

/// Fatal failures of a batch run. Per-row problems never surface here, they
/// are recovered while loading and only show up in the load summary.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("Source table {table} not found at {path:?}")]
    MissingTable { table: &'static str, path: PathBuf },

    #[error("Source table {table} has no data rows")]
    EmptyTable { table: &'static str },

    #[error("Could not read source table {table}: {source}")]
    UnreadableTable {
        table: &'static str,
        #[source]
        source: csv::Error,
    },

    #[error("Batch run aborted: {0}")]
    BatchAborted(String),
}
