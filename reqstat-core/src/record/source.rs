use crate::error::ReportError;
use crate::record::types::Record;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, warn};

/// Reads a log file into a sequence of records.
///
/// Implementations must report a missing file as [`ReportError::NotFound`]
/// and may skip individual lines they cannot decode.
pub trait RecordSource {
    fn read(&self, path: &Path) -> Result<Vec<Record>, ReportError>;
}

/// JSON Lines reader: one JSON object per line.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonLinesSource;

impl JsonLinesSource {
    pub fn new() -> Self {
        Self
    }

    /// Decodes records from any buffered reader. `path` is only used for
    /// diagnostics.
    pub fn read_from<R: BufRead>(&self, reader: R, path: &Path) -> Result<Vec<Record>, ReportError> {
        let mut records = Vec::new();
        let mut skipped = 0usize;

        for (i, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| ReportError::read_file(path, e))?;

            if line.trim().is_empty() {
                continue;
            }

            match serde_json::from_str::<Record>(&line) {
                Ok(record) => records.push(record),
                Err(e) => {
                    skipped += 1;
                    warn!(
                        path = %path.display(),
                        line = i + 1,
                        error = %e,
                        "skipping malformed log line"
                    );
                }
            }
        }

        debug!(
            path = %path.display(),
            records = records.len(),
            skipped,
            "read log file"
        );

        Ok(records)
    }
}

impl RecordSource for JsonLinesSource {
    fn read(&self, path: &Path) -> Result<Vec<Record>, ReportError> {
        let file = File::open(path).map_err(|e| ReportError::read_file(path, e))?;
        self.read_from(BufReader::new(file), path)
    }
}
