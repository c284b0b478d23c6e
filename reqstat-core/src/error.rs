use std::path::PathBuf;
use thiserror::Error;

/// Coarse classification of a [`ReportError`], used by callers that only care
/// about the category of a failure (exit codes, retries, test assertions).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Io,
    InvalidArgument,
}

#[derive(Debug, Error)]
pub enum ReportError {
    //-------------------------------------------------------------------------
    // IO
    //-------------------------------------------------------------------------
    #[error("log file not found: {path}")]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read log file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write report: {source}")]
    Render {
        #[source]
        source: std::io::Error,
    },

    //-------------------------------------------------------------------------
    // Run preconditions
    //-------------------------------------------------------------------------
    #[error("no input files provided")]
    EmptyFileList,

    #[error("invalid date format '{value}': expected YYYY-MM-DD")]
    InvalidDate { value: String },

    #[error("date filter provided but no filter implementation configured")]
    FilterNotConfigured,

    #[error("{kind} '{requested}' is not supported. Available: {available}")]
    UnsupportedComponent {
        kind: &'static str,
        requested: String,
        available: String,
    },

    //-------------------------------------------------------------------------
    // Stage inputs
    //-------------------------------------------------------------------------
    #[error("cannot aggregate an empty record sequence")]
    EmptyRecords,

    #[error("record {index} has no numeric '{field}' field")]
    InvalidRecord { index: usize, field: String },

    #[error("no records left to aggregate in {path}")]
    NoMatchingRecords { path: PathBuf },

    #[error("no statistics to merge")]
    EmptyMergeInput,

    #[error("report is empty")]
    EmptyReport,
}

impl ReportError {
    /// Maps an open/read failure to `NotFound` or `Io` depending on the cause.
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound { path, source },
            _ => Self::Io { path, source },
        }
    }

    pub fn invalid_date(value: impl Into<String>) -> Self {
        Self::InvalidDate {
            value: value.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Io { .. } | Self::Render { .. } => ErrorKind::Io,
            Self::EmptyFileList
            | Self::InvalidDate { .. }
            | Self::FilterNotConfigured
            | Self::UnsupportedComponent { .. }
            | Self::EmptyRecords
            | Self::InvalidRecord { .. }
            | Self::NoMatchingRecords { .. }
            | Self::EmptyMergeInput
            | Self::EmptyReport => ErrorKind::InvalidArgument,
        }
    }
}
