use crate::domain::model::{NameRecord, ParsedNames, SkippedLine};
use crate::utils::error::{NameSortError, Result};
use regex::Regex;
use std::path::Path;

const UTF8_BOM: char = '\u{feff}';

/// Result of looking at one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    Blank,
    Name(NameRecord),
    Invalid(String),
}

/// Turns lines of text into [`NameRecord`]s.
///
/// A valid line is one to three given names followed by one last name,
/// ASCII letters only, separated by whitespace.
pub struct NameParser {
    whitespace: Regex,
    name_line: Regex,
}

impl NameParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            whitespace: Regex::new(r"\s+")?,
            name_line: Regex::new(r"^((?:[A-Za-z]+ ){1,3})([A-Za-z]+)$")?,
        })
    }

    /// Trims the line and collapses interior whitespace runs to one space.
    pub fn normalize(&self, line: &str) -> String {
        self.whitespace.replace_all(line.trim(), " ").into_owned()
    }

    pub fn parse_line(&self, line: &str) -> LineOutcome {
        let normalized = self.normalize(line);
        if normalized.is_empty() {
            return LineOutcome::Blank;
        }

        match self.name_line.captures(&normalized) {
            Some(caps) => LineOutcome::Name(NameRecord::new(&caps[1], &caps[2])),
            None => LineOutcome::Invalid(normalized),
        }
    }

    /// Parses a whole document. Records keep their input order.
    pub fn parse_str(&self, content: &str) -> ParsedNames {
        let content = content.strip_prefix(UTF8_BOM).unwrap_or(content);
        let mut parsed = ParsedNames::default();

        for (index, line) in split_lines(content).enumerate() {
            match self.parse_line(line) {
                LineOutcome::Blank => {}
                LineOutcome::Name(record) => parsed.records.push(record),
                LineOutcome::Invalid(normalized) => parsed.skipped.push(SkippedLine {
                    line_number: index + 1,
                    content: normalized,
                }),
            }
        }

        parsed
    }

    /// Reads `path` and parses it. Fails with `NoValidData` when no line
    /// holds a valid name.
    pub fn load_file(&self, path: &Path) -> Result<ParsedNames> {
        if path.as_os_str().is_empty() {
            return Err(NameSortError::invalid_param("input path is absent"));
        }

        let bytes = std::fs::read(path)?;
        let parsed = self.parse_str(&String::from_utf8_lossy(&bytes));

        if parsed.records.is_empty() {
            return Err(NameSortError::NoValidData {
                path: path.display().to_string(),
                skipped: parsed.skipped,
            });
        }

        Ok(parsed)
    }
}

/// Reads the names in `path`, see [`NameParser::load_file`].
pub fn load_names<P: AsRef<Path>>(path: P) -> Result<ParsedNames> {
    NameParser::new()?.load_file(path.as_ref())
}

/// Splits on `\n`, `\r\n` and lone `\r`, keeping line numbers stable.
fn split_lines(content: &str) -> impl Iterator<Item = &str> {
    content
        .split('\n')
        .flat_map(|line| {
            let line = line.strip_suffix('\r').unwrap_or(line);
            line.split('\r')
        })
}
