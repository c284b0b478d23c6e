use crate::error::ReportError;
use crate::record::{FieldNames, Record};
use crate::stats::StatsGenerator;
use crate::stats::types::{EndpointStat, FileStats, Handler, round3};
use indexmap::IndexMap;
use tracing::debug;

struct Accumulator {
    total: u64,
    sum: f64,
}

/// Mean response time per endpoint.
#[derive(Debug, Clone)]
pub struct AverageGenerator {
    endpoint_field: String,
    response_time_field: String,
}

impl AverageGenerator {
    pub fn new(fields: &FieldNames) -> Self {
        Self {
            endpoint_field: fields.endpoint.clone(),
            response_time_field: fields.response_time.clone(),
        }
    }
}

impl Default for AverageGenerator {
    fn default() -> Self {
        Self::new(&FieldNames::default())
    }
}

impl StatsGenerator for AverageGenerator {
    fn generate(&self, records: &[Record]) -> Result<FileStats, ReportError> {
        if records.is_empty() {
            return Err(ReportError::EmptyRecords);
        }

        let mut acc: IndexMap<Option<Handler>, Accumulator> = IndexMap::new();

        for (index, record) in records.iter().enumerate() {
            let response_time = record.get_f64(&self.response_time_field).ok_or_else(|| {
                ReportError::InvalidRecord {
                    index,
                    field: self.response_time_field.clone(),
                }
            })?;

            let entry = acc
                .entry(record.handler(&self.endpoint_field))
                .or_insert(Accumulator { total: 0, sum: 0.0 });
            entry.total += 1;
            entry.sum += response_time;
        }

        debug!(
            records = records.len(),
            endpoints = acc.len(),
            "aggregated average response times"
        );

        Ok(acc
            .into_iter()
            .map(|(handler, a)| EndpointStat {
                handler,
                total: a.total,
                avg_response_time: round3(a.sum / a.total as f64),
            })
            .collect())
    }
}
