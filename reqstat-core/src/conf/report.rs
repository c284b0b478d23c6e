use crate::conf::error::ConfigError;
use crate::record::FieldNames;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputConfig {
    /// Source selector, e.g. "json"
    pub format: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            format: "json".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterConfig {
    /// When false the engine runs without a filter and rejects `--date`.
    pub enabled: bool,

    /// Filter selector, e.g. "date"
    pub kind: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            kind: "date".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Renderer selector, e.g. "table"
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "table".to_string(),
        }
    }
}

/// Optional `reqstat.toml`. Every section and key falls back to its default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    pub input: InputConfig,
    pub fields: FieldNames,
    pub filter: FilterConfig,
    pub output: OutputConfig,
}

impl ReportConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        let cfg: Self = toml::from_str(&contents).map_err(|e| ConfigError::parse(path, e))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("input.format", &self.input.format),
            ("filter.kind", &self.filter.kind),
            ("output.format", &self.output.format),
            ("fields.timestamp", &self.fields.timestamp),
            ("fields.endpoint", &self.fields.endpoint),
            ("fields.response_time", &self.fields.response_time),
        ];

        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::invalid(field, "must not be empty"));
            }
        }

        Ok(())
    }
}

impl FromStr for ReportConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: Self = toml::from_str(s).map_err(|e| ConfigError::parse("<inline>", e))?;
        cfg.validate()?;
        Ok(cfg)
    }
}
