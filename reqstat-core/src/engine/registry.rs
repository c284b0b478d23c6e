use crate::conf::ReportConfig;
use crate::engine::ReportEngine;
use crate::error::ReportError;
use crate::filter::{DateFilter, RecordFilter};
use crate::record::{JsonLinesSource, RecordSource};
use crate::render::{ReportRenderer, TableRenderer};
use crate::stats::{AverageGenerator, StatsGenerator};
use std::collections::BTreeMap;

pub type SourceBuilder = fn(&ReportConfig) -> Box<dyn RecordSource>;
pub type FilterBuilder = fn(&ReportConfig) -> Box<dyn RecordFilter>;
pub type GeneratorBuilder = fn(&ReportConfig) -> Box<dyn StatsGenerator>;
pub type RendererBuilder = fn(&ReportConfig) -> Box<dyn ReportRenderer>;

fn build_json_source(_cfg: &ReportConfig) -> Box<dyn RecordSource> {
    Box::new(JsonLinesSource::new())
}

fn build_date_filter(cfg: &ReportConfig) -> Box<dyn RecordFilter> {
    Box::new(DateFilter::new(cfg.fields.timestamp.clone()))
}

fn build_average_generator(cfg: &ReportConfig) -> Box<dyn StatsGenerator> {
    Box::new(AverageGenerator::new(&cfg.fields))
}

fn build_table_renderer(_cfg: &ReportConfig) -> Box<dyn ReportRenderer> {
    Box::new(TableRenderer::new())
}

/// Pipeline components available to an engine, keyed by selector name.
///
/// New sources, filters, report types or renderers are added by registering a
/// builder; the engine itself does not change.
#[derive(Clone, Default)]
pub struct Registry {
    sources: BTreeMap<String, SourceBuilder>,
    filters: BTreeMap<String, FilterBuilder>,
    generators: BTreeMap<String, GeneratorBuilder>,
    renderers: BTreeMap<String, RendererBuilder>,
}

impl Registry {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Registry holding the built-in `json` source, `date` filter, `average`
    /// report and `table` renderer.
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        registry
            .register_source("json", build_json_source)
            .register_filter("date", build_date_filter)
            .register_generator("average", build_average_generator)
            .register_renderer("table", build_table_renderer);
        registry
    }

    pub fn register_source(&mut self, name: impl Into<String>, builder: SourceBuilder) -> &mut Self {
        self.sources.insert(name.into(), builder);
        self
    }

    pub fn register_filter(&mut self, name: impl Into<String>, builder: FilterBuilder) -> &mut Self {
        self.filters.insert(name.into(), builder);
        self
    }

    pub fn register_generator(
        &mut self,
        name: impl Into<String>,
        builder: GeneratorBuilder,
    ) -> &mut Self {
        self.generators.insert(name.into(), builder);
        self
    }

    pub fn register_renderer(
        &mut self,
        name: impl Into<String>,
        builder: RendererBuilder,
    ) -> &mut Self {
        self.renderers.insert(name.into(), builder);
        self
    }

    pub fn report_types(&self) -> Vec<&str> {
        self.generators.keys().map(String::as_str).collect()
    }

    pub fn supports_report(&self, name: &str) -> bool {
        self.generators.contains_key(name)
    }

    /// Assembles an engine for `report_type` from the selectors in `cfg`.
    pub fn build_engine(
        &self,
        cfg: &ReportConfig,
        report_type: &str,
    ) -> Result<ReportEngine, ReportError> {
        let generator = lookup(&self.generators, "report type", report_type)?;
        let source = lookup(&self.sources, "input format", &cfg.input.format)?;
        let renderer = lookup(&self.renderers, "output format", &cfg.output.format)?;

        let engine = ReportEngine::new(source(cfg), generator(cfg), renderer(cfg));

        if !cfg.filter.enabled {
            return Ok(engine);
        }

        let filter = lookup(&self.filters, "filter", &cfg.filter.kind)?;
        Ok(engine.with_filter(filter(cfg)))
    }
}

fn lookup<B: Copy>(
    builders: &BTreeMap<String, B>,
    kind: &'static str,
    name: &str,
) -> Result<B, ReportError> {
    builders
        .get(name)
        .copied()
        .ok_or_else(|| ReportError::UnsupportedComponent {
            kind,
            requested: name.to_string(),
            available: builders
                .keys()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", "),
        })
}
