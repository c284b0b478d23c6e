use indexmap::IndexMap;
use serde::Serialize;

pub use crate::record::Handler;

/// Per-file statistics for one endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EndpointStat {
    pub handler: Option<Handler>,
    pub total: u64,
    pub avg_response_time: f64,
}

/// Result of aggregating one file, keyed by handler in first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileStats {
    endpoints: IndexMap<Option<Handler>, EndpointStat>,
}

impl FileStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a stat, replacing any previous entry for the same handler
    /// without moving its position.
    pub fn insert(&mut self, stat: EndpointStat) {
        self.endpoints.insert(stat.handler.clone(), stat);
    }

    pub fn get(&self, handler: Option<&Handler>) -> Option<&EndpointStat> {
        self.endpoints.get(&handler.cloned())
    }

    pub fn iter(&self) -> impl Iterator<Item = &EndpointStat> {
        self.endpoints.values()
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }
}

impl FromIterator<EndpointStat> for FileStats {
    fn from_iter<T: IntoIterator<Item = EndpointStat>>(iter: T) -> Self {
        let mut stats = Self::new();
        for stat in iter {
            stats.insert(stat);
        }
        stats
    }
}

/// One ranked row of the final report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MergedStat {
    pub idx: usize,
    pub handler: Option<Handler>,
    pub total: u64,
    pub avg_response_time: f64,
}

/// Cross-file statistics ranked by `total`, highest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Report {
    entries: Vec<MergedStat>,
}

impl Report {
    pub(crate) fn new(entries: Vec<MergedStat>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[MergedStat] {
        &self.entries
    }

    pub fn get(&self, handler: Option<&Handler>) -> Option<&MergedStat> {
        self.entries.iter().find(|e| e.handler.as_ref() == handler)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Report {
    type Item = &'a MergedStat;
    type IntoIter = std::slice::Iter<'a, MergedStat>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Rounds to three decimal places based on the exact binary value of `value`.
///
/// Decimal formatting rounds the true value rather than a scaled copy, so
/// `1.2345` (stored just below the tie) becomes `1.234`. Exact ties go to the
/// even digit.
pub fn round3(value: f64) -> f64 {
    format!("{value:.3}").parse().unwrap_or(value)
}
