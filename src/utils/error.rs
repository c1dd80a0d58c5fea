use crate::domain::model::SkippedLine;
use thiserror::Error;

/// Failure classification surfaced by every pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidParam,
    MissingInputFileName,
    InputFileNotFound,
    NoValidData,
    IoFailure,
}

#[derive(Error, Debug)]
pub enum NameSortError {
    #[error("Invalid parameter: {message}")]
    InvalidParam { message: String },

    #[error("Name pattern error: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Expected exactly one input file, got {count} arguments")]
    MissingInputFileName { count: usize },

    #[error("The file {path} does not exist")]
    InputFileNotFound { path: String },

    /// Carries the lines that were rejected so they can still be reported.
    #[error("There are no valid names in the file {path}")]
    NoValidData {
        path: String,
        skipped: Vec<SkippedLine>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl NameSortError {
    pub fn invalid_param(message: impl Into<String>) -> Self {
        Self::InvalidParam {
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidParam { .. } | Self::Pattern(_) => ErrorKind::InvalidParam,
            Self::MissingInputFileName { .. } => ErrorKind::MissingInputFileName,
            Self::InputFileNotFound { .. } => ErrorKind::InputFileNotFound,
            Self::NoValidData { .. } => ErrorKind::NoValidData,
            Self::Io(_) => ErrorKind::IoFailure,
        }
    }

    /// Process exit code for this failure. `0` is reserved for success.
    pub fn exit_code(&self) -> i32 {
        match self.kind() {
            ErrorKind::InvalidParam => 1,
            ErrorKind::MissingInputFileName => 2,
            ErrorKind::InputFileNotFound => 3,
            ErrorKind::NoValidData => 4,
            ErrorKind::IoFailure => 5,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidParam { message } => format!("Program Error: INVALID_PARAM ({})", message),
            Self::Pattern(_) => "Program Error: INVALID_PARAM (name pattern)".to_string(),
            Self::MissingInputFileName { .. } => {
                "Usage: name-sorter <FilePath> (name-sorter -- <FilePath> if it starts with '-')"
                    .to_string()
            }
            Self::InputFileNotFound { path } => format!("The file {} does not exist", path),
            Self::NoValidData { .. } => "There are no valid names in the file.".to_string(),
            Self::Io(e) => format!("File operation failed: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.kind() {
            ErrorKind::InvalidParam => "This is a program error, please report it",
            ErrorKind::MissingInputFileName => "Pass exactly one input file path",
            ErrorKind::InputFileNotFound => "Check the path and the file permissions",
            ErrorKind::NoValidData => {
                "Put one name per line: 1 to 3 given names followed by a last name, letters only"
            }
            ErrorKind::IoFailure => {
                "Check disk space and write permission for the current directory"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, NameSortError>;
