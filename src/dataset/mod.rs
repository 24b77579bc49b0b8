mod error;
pub mod literal;
mod load;
mod record;

pub use error::DataError;
pub use load::{
    CsvDatasetSource, DatasetFiles, DatasetSource, LoadSummary, DEFAULT_CREDITS_FILE,
    DEFAULT_KEYWORDS_FILE, DEFAULT_MOVIES_FILE,
};
pub use record::{MovieRecord, RecordSet, MAX_YEAR, MIN_YEAR};

#[cfg(test)]
pub(crate) use record::fixtures;
