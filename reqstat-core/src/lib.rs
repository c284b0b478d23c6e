pub mod cli;
pub mod conf;
pub mod engine;
pub mod error;
pub mod filter;
pub mod logging;
pub mod record;
pub mod render;
pub mod stats;

pub use error::{ErrorKind, ReportError};
