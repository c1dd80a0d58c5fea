use crate::domain::model::NameRecord;
use crate::utils::error::{NameSortError, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub const DEFAULT_OUTPUT_FILE: &str = "sorted-names-list.txt";
pub const CONSOLE_HEADER: &str = "The sorted names are below:";

/// Writes sorted names to the console and to the output file.
#[derive(Debug, Clone)]
pub struct Emitter {
    output_path: PathBuf,
}

impl Emitter {
    /// Emitter writing `sorted-names-list.txt` in the current directory.
    pub fn new() -> Self {
        Self::with_output_path(DEFAULT_OUTPUT_FILE)
    }

    pub fn with_output_path<P: Into<PathBuf>>(output_path: P) -> Self {
        Self {
            output_path: output_path.into(),
        }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Emits one `given_name ++ last_name` line per record, in order.
    ///
    /// The output file is truncated, never appended to. It is created before
    /// anything reaches `console`.
    pub fn emit<W: Write>(&self, records: &[NameRecord], console: &mut W) -> Result<PathBuf> {
        if records.is_empty() {
            return Err(NameSortError::invalid_param("name list to emit is empty"));
        }

        let mut file = BufWriter::new(File::create(&self.output_path)?);

        writeln!(console, "{}", CONSOLE_HEADER)?;
        for record in records {
            writeln!(console, "{}", record)?;
            writeln!(file, "{}", record)?;
        }

        file.flush()?;
        console.flush()?;

        tracing::debug!(
            "Wrote {} names to {}",
            records.len(),
            self.output_path.display()
        );
        Ok(self.output_path.clone())
    }
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new()
    }
}
