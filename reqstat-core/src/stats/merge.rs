use crate::error::ReportError;
use crate::stats::types::{FileStats, Handler, MergedStat, Report, round3};
use indexmap::IndexMap;
use tracing::debug;

struct Combined {
    total: u64,
    sum_time: f64,
}

/// Combines per-file statistics into one ranked report.
///
/// Each file's sum is rebuilt from its rounded average (`avg * total`), so the
/// merged mean inherits the per-file rounding. Endpoints are ranked by total,
/// highest first; equal totals keep the order in which the endpoints were
/// first seen while folding the files in sequence.
pub fn merge_statistics(per_file: &[FileStats]) -> Result<Report, ReportError> {
    if per_file.is_empty() {
        return Err(ReportError::EmptyMergeInput);
    }

    let mut combined: IndexMap<Option<Handler>, Combined> = IndexMap::new();

    for stats in per_file {
        for stat in stats.iter() {
            let entry = combined.entry(stat.handler.clone()).or_insert(Combined {
                total: 0,
                sum_time: 0.0,
            });
            entry.total += stat.total;
            entry.sum_time += stat.avg_response_time * stat.total as f64;
        }
    }

    if combined.is_empty() {
        return Err(ReportError::EmptyReport);
    }

    let mut ranked: Vec<(Option<Handler>, Combined)> = combined.into_iter().collect();
    // `sort_by` is stable: ties stay in first-seen order.
    ranked.sort_by(|(_, a), (_, b)| b.total.cmp(&a.total));

    let entries: Vec<MergedStat> = ranked
        .into_iter()
        .enumerate()
        .map(|(idx, (handler, c))| MergedStat {
            idx,
            handler,
            total: c.total,
            avg_response_time: round3(c.sum_time / c.total as f64),
        })
        .collect();

    debug!(
        files = per_file.len(),
        endpoints = entries.len(),
        "merged statistics"
    );

    Ok(Report::new(entries))
}
