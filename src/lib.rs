//! Movie dashboard library
//!
//! Loads the movie tables, aggregates them and serves the dashboard charts.

pub mod aggregate;
pub mod chart;
pub mod config;
pub mod dashboard;
pub mod dataset;
pub mod server;

pub use dashboard::{run_batch, Dashboard};
pub use dataset::{CsvDatasetSource, DataError, DatasetFiles, DatasetSource};
pub use server::{run_server, RequestsLoggingLevel};
