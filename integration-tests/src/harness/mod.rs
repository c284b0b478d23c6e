pub mod fixtures;
pub mod tracing;

pub use fixtures::LogDir;
pub use tracing::{CapturedEvent, capture_events};
