mod date;


pub use date::*;

use crate::error::ReportError;
use crate::record::Record;

/// Narrows a record sequence to the records matching a criterion.
///
/// Filters never mutate their input. A criterion the filter cannot
/// interpret is an `InvalidArgument` error.
pub trait RecordFilter {
    /// Checks a criterion without touching any records.
    fn validate(&self, criterion: &str) -> Result<(), ReportError>;

    fn filter(&self, records: &[Record], criterion: &str) -> Result<Vec<Record>, ReportError>;
}
