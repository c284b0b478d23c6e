use std::fmt;
use std::path::PathBuf;

/// Where a [`ReportEngine`](super::ReportEngine) is in its run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EngineState {
    #[default]
    Idle,
    Validating,
    Reading {
        file: PathBuf,
    },
    Filtering {
        file: PathBuf,
    },
    Aggregating {
        file: PathBuf,
    },
    Merging,
    Rendering,
    Done,
    Failed {
        stage: &'static str,
        cause: String,
    },
}

impl EngineState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Validating => "validating",
            Self::Reading { .. } => "reading",
            Self::Filtering { .. } => "filtering",
            Self::Aggregating { .. } => "aggregating",
            Self::Merging => "merging",
            Self::Rendering => "rendering",
            Self::Done => "done",
            Self::Failed { .. } => "failed",
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

impl fmt::Display for EngineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reading { file } | Self::Filtering { file } | Self::Aggregating { file } => {
                write!(f, "{} {}", self.name(), file.display())
            }
            Self::Failed { stage, cause } => write!(f, "failed while {stage}: {cause}"),
            _ => f.write_str(self.name()),
        }
    }
}
