#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::core::{
    emitter::{Emitter, DEFAULT_OUTPUT_FILE},
    engine::SortEngine,
    parser::{load_names, NameParser},
    pipeline::NamePipeline,
    sorter::sort_names,
};
pub use crate::domain::model::{NameRecord, ParsedNames, RunSummary, SkippedLine};
pub use crate::domain::ports::Pipeline;
pub use crate::utils::error::{ErrorKind, NameSortError, Result};
pub use crate::utils::validation::check_parameters;
