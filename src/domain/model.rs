use std::fmt;
use std::path::PathBuf;

/// One parsed name.
///
/// `given_name` keeps the separator that preceded the last name in the
/// source line ("Adonis Julius "), so the display form is a plain
/// concatenation of the two fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameRecord {
    given_name: String,
    last_name: String,
}

impl NameRecord {
    pub fn new(given_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            given_name: given_name.into(),
            last_name: last_name.into(),
        }
    }

    pub fn given_name(&self) -> &str {
        &self.given_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }
}

impl fmt::Display for NameRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.given_name, self.last_name)
    }
}

/// A non-blank input line that did not have the shape of a name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the input file.
    pub line_number: usize,
    /// The line after whitespace normalization.
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedNames {
    pub records: Vec<NameRecord>,
    pub skipped: Vec<SkippedLine>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub names_sorted: usize,
    pub lines_skipped: usize,
    pub output_path: PathBuf,
}
