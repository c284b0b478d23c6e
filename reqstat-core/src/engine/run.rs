use crate::engine::state::EngineState;
use crate::error::ReportError;
use crate::filter::{RecordFilter, parse_date_criterion};
use crate::record::RecordSource;
use crate::render::ReportRenderer;
use crate::stats::{Report, StatsGenerator, merge_statistics};
use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, error, info};

/// Drives read → filter → aggregate → merge → render over a list of files.
///
/// Files are processed sequentially in the order given. Every file must
/// contribute at least one record; any failure aborts the run before
/// anything is rendered.
pub struct ReportEngine {
    source: Box<dyn RecordSource>,
    generator: Box<dyn StatsGenerator>,
    renderer: Box<dyn ReportRenderer>,
    filter: Option<Box<dyn RecordFilter>>,
    state: EngineState,
}

impl ReportEngine {
    pub fn new(
        source: Box<dyn RecordSource>,
        generator: Box<dyn StatsGenerator>,
        renderer: Box<dyn ReportRenderer>,
    ) -> Self {
        Self {
            source,
            generator,
            renderer,
            filter: None,
            state: EngineState::Idle,
        }
    }

    pub fn with_filter(mut self, filter: Box<dyn RecordFilter>) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn has_filter(&self) -> bool {
        self.filter.is_some()
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    /// Runs the pipeline and renders the report to stdout.
    pub fn run<P: AsRef<Path>>(&mut self, files: &[P], date: Option<&str>) -> Result<(), ReportError> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.run_with_output(files, date, &mut out)
    }

    pub fn run_with_output<P: AsRef<Path>>(
        &mut self,
        files: &[P],
        date: Option<&str>,
        out: &mut dyn Write,
    ) -> Result<(), ReportError> {
        info!(files = files.len(), date = date.unwrap_or("-"), "starting report run");

        let result = self
            .collect(files, date)
            .and_then(|report| self.render(&report, out));
        self.finish(result)
    }

    /// Runs every stage except rendering and hands back the merged report.
    pub fn build_report<P: AsRef<Path>>(
        &mut self,
        files: &[P],
        date: Option<&str>,
    ) -> Result<Report, ReportError> {
        let result = self.collect(files, date);
        self.finish(result)
    }

    //-------------------------------------------------------------------------
    // Stages
    //-------------------------------------------------------------------------

    fn validate(&self, file_count: usize, date: Option<&str>) -> Result<(), ReportError> {
        if file_count == 0 {
            return Err(ReportError::EmptyFileList);
        }

        if let Some(date) = date {
            parse_date_criterion(date)?;
            let filter = self
                .filter
                .as_ref()
                .ok_or(ReportError::FilterNotConfigured)?;
            filter.validate(date)?;
        }

        Ok(())
    }

    fn collect<P: AsRef<Path>>(
        &mut self,
        files: &[P],
        date: Option<&str>,
    ) -> Result<Report, ReportError> {
        self.enter(EngineState::Validating);
        self.validate(files.len(), date)?;

        let mut per_file = Vec::with_capacity(files.len());

        for file in files {
            let path = file.as_ref();

            self.enter(EngineState::Reading {
                file: path.to_path_buf(),
            });
            let mut records = self.source.read(path)?;

            if let Some(date) = date {
                self.enter(EngineState::Filtering {
                    file: path.to_path_buf(),
                });
                let filter = self
                    .filter
                    .as_ref()
                    .ok_or(ReportError::FilterNotConfigured)?;
                records = filter.filter(&records, date)?;
            }

            if records.is_empty() {
                return Err(ReportError::NoMatchingRecords {
                    path: path.to_path_buf(),
                });
            }

            self.enter(EngineState::Aggregating {
                file: path.to_path_buf(),
            });
            let stats = self.generator.generate(&records)?;

            debug!(
                path = %path.display(),
                records = records.len(),
                endpoints = stats.len(),
                "file aggregated"
            );
            per_file.push(stats);
        }

        self.enter(EngineState::Merging);
        merge_statistics(&per_file)
    }

    fn render(&mut self, report: &Report, out: &mut dyn Write) -> Result<(), ReportError> {
        self.enter(EngineState::Rendering);
        self.renderer.render(report, out)
    }

    //-------------------------------------------------------------------------
    // State tracking
    //-------------------------------------------------------------------------

    fn enter(&mut self, state: EngineState) {
        debug!(state = %state, "engine state");
        self.state = state;
    }

    fn finish<T>(&mut self, result: Result<T, ReportError>) -> Result<T, ReportError> {
        match result {
            Ok(value) => {
                self.enter(EngineState::Done);
                info!("report run finished");
                Ok(value)
            }
            Err(e) => {
                let stage = self.state.name();
                error!(stage, error = %e, "report run failed");
                self.state = EngineState::Failed {
                    stage,
                    cause: e.to_string(),
                };
                Err(e)
            }
        }
    }
}
