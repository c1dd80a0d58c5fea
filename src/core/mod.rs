pub mod emitter;
pub mod engine;
pub mod parser;
pub mod pipeline;
pub mod sorter;

pub use crate::domain::model::{NameRecord, ParsedNames, RunSummary, SkippedLine};
pub use crate::domain::ports::Pipeline;
pub use crate::utils::error::Result;
