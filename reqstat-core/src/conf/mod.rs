mod error;
mod report;


pub use error::ConfigError;
pub use report::*;
