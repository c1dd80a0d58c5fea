use crate::core::emitter::Emitter;
use crate::core::parser::NameParser;
use crate::core::sorter::sort_names;
use crate::core::{NameRecord, ParsedNames, Pipeline};
use crate::utils::error::Result;
use std::io::{Stdout, Write};
use std::path::{Path, PathBuf};

/// File-backed pipeline: parse `input_path`, sort, emit to `console` and
/// the emitter's output file.
pub struct NamePipeline<W: Write> {
    input_path: PathBuf,
    parser: NameParser,
    emitter: Emitter,
    console: W,
}

impl NamePipeline<Stdout> {
    pub fn new<P: Into<PathBuf>>(input_path: P) -> Result<Self> {
        Self::with_parts(input_path, Emitter::new(), std::io::stdout())
    }
}

impl<W: Write> NamePipeline<W> {
    pub fn with_parts<P: Into<PathBuf>>(
        input_path: P,
        emitter: Emitter,
        console: W,
    ) -> Result<Self> {
        Ok(Self {
            input_path: input_path.into(),
            parser: NameParser::new()?,
            emitter,
            console,
        })
    }

    pub fn input_path(&self) -> &Path {
        &self.input_path
    }

    pub fn into_console(self) -> W {
        self.console
    }
}

impl<W: Write> Pipeline for NamePipeline<W> {
    fn extract(&self) -> Result<ParsedNames> {
        tracing::debug!("Reading names from: {}", self.input_path.display());
        self.parser.load_file(&self.input_path)
    }

    fn transform(&self, records: Vec<NameRecord>) -> Result<Vec<NameRecord>> {
        sort_names(records)
    }

    fn load(&mut self, records: Vec<NameRecord>) -> Result<PathBuf> {
        self.emitter.emit(&records, &mut self.console)
    }
}
