//! Response-time statistics.
//!
//! Aggregation happens once per input file and produces a [`FileStats`];
//! [`merge_statistics`] then folds every file's result into a single ranked
//! [`Report`].

mod average;
mod merge;
mod types;


pub use average::*;
pub use merge::*;
pub use types::*;

use crate::error::ReportError;
use crate::record::Record;

/// Reduces one file's records to per-endpoint statistics.
pub trait StatsGenerator {
    /// Fails with an `InvalidArgument` error on an empty record sequence.
    fn generate(&self, records: &[Record]) -> Result<FileStats, ReportError>;
}
