use crate::conf::ReportConfig;
use crate::engine::Registry;
use crate::filter::parse_date_criterion;
use crate::logging::LogFormat;
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Path(s) to the log file(s)
    #[arg(long = "file", value_name = "FILE", num_args = 1.., required = true)]
    pub files: Vec<PathBuf>,

    /// Report type to build (available: average)
    #[arg(long, value_name = "TYPE")]
    pub report: Option<String>,

    /// Only count records from this day
    #[arg(long, value_name = "YYYY-MM-DD", value_parser = parse_date_arg)]
    pub date: Option<String>,

    /// Path to a reqstat.toml config file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log output format on stderr (defaults to pretty on a terminal, json otherwise)
    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,
}

fn parse_date_arg(value: &str) -> Result<String, String> {
    parse_date_criterion(value)
        .map(|_| value.to_string())
        .map_err(|e| e.to_string())
}

pub fn run_report(args: ReportArgs) -> Result<()> {
    let cfg = match &args.config {
        Some(path) => ReportConfig::from_file(path)?,
        None => ReportConfig::default(),
    };

    // A missing --report is reported like an unknown one, with the available types.
    let report = args.report.as_deref().unwrap_or_default();
    let registry = Registry::builtin();
    let mut engine = registry.build_engine(&cfg, report)?;

    info!(report, files = args.files.len(), "building report");

    engine
        .run(&args.files, args.date.as_deref())
        .context("failed to build report")
}
