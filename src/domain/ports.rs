use crate::domain::model::{NameRecord, ParsedNames};
use crate::utils::error::Result;
use std::path::PathBuf;

/// The three stages driven by [`crate::SortEngine`].
pub trait Pipeline {
    /// Read and parse the input into records, in input order.
    fn extract(&self) -> Result<ParsedNames>;
    /// Order the records.
    fn transform(&self, records: Vec<NameRecord>) -> Result<Vec<NameRecord>>;
    /// Emit the records and return where the output file was written.
    fn load(&mut self, records: Vec<NameRecord>) -> Result<PathBuf>;
}
