mod table;


pub use table::*;

use crate::error::ReportError;
use crate::stats::Report;
use std::io::Write;

/// Writes a finished report to an output sink.
///
/// Renderers keep the report's order as-is and refuse an empty report.
pub trait ReportRenderer {
    fn render(&self, report: &Report, out: &mut dyn Write) -> Result<(), ReportError>;
}
