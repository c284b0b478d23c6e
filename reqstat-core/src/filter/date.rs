use crate::error::ReportError;
use crate::filter::RecordFilter;
use crate::record::Record;
use chrono::NaiveDate;

/// Parses a `YYYY-MM-DD` criterion into a calendar date.
///
/// Each component is read as an integer, so `2023-1-5` is accepted and means
/// the same day as `2023-01-05`. Years outside `1..=9999` are rejected.
pub fn parse_date_criterion(value: &str) -> Result<NaiveDate, ReportError> {
    let parts: Vec<&str> = value.split('-').collect();
    let [year, month, day] = parts[..] else {
        return Err(ReportError::invalid_date(value));
    };

    let parse = |s: &str| s.parse::<u32>().map_err(|_| ReportError::invalid_date(value));
    let (year, month, day) = (parse(year)?, parse(month)?, parse(day)?);

    if !(1..=9999).contains(&year) {
        return Err(ReportError::invalid_date(value));
    }

    NaiveDate::from_ymd_opt(year as i32, month, day).ok_or_else(|| ReportError::invalid_date(value))
}

/// Keeps records whose timestamp contains the criterion date.
///
/// Matching is a substring test against the normalised date, so the time of
/// day is ignored. Records without a string timestamp never match.
#[derive(Debug, Clone)]
pub struct DateFilter {
    timestamp_field: String,
}

impl DateFilter {
    pub fn new(timestamp_field: impl Into<String>) -> Self {
        Self {
            timestamp_field: timestamp_field.into(),
        }
    }
}

impl Default for DateFilter {
    fn default() -> Self {
        Self::new("@timestamp")
    }
}

impl RecordFilter for DateFilter {
    fn validate(&self, criterion: &str) -> Result<(), ReportError> {
        parse_date_criterion(criterion).map(|_| ())
    }

    fn filter(&self, records: &[Record], criterion: &str) -> Result<Vec<Record>, ReportError> {
        let needle = parse_date_criterion(criterion)?
            .format("%Y-%m-%d")
            .to_string();

        Ok(records
            .iter()
            .filter(|r| {
                r.get_str(&self.timestamp_field)
                    .is_some_and(|ts| ts.contains(&needle))
            })
            .cloned()
            .collect())
    }
}
