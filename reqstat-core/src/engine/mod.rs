//! Report pipeline orchestration.
//!
//! The overall data processing architecture is:
//!
//! files
//! RecordSource::read
//! RecordFilter::filter (only with a date criterion)
//! StatsGenerator::generate (once per file)
//! merge_statistics
//! ReportRenderer::render
//!

mod registry;
mod run;
mod state;


pub use registry::*;
pub use run::*;
pub use state::*;
