mod source;
mod types;


pub use source::*;
pub use types::*;
