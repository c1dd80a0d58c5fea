use crate::utils::error::{NameSortError, Result};
use std::fs::File;
use std::path::{Path, PathBuf};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Checks the command line shape: exactly one argument naming a readable file.
///
/// `None` stands for an absent argument list and is a caller error.
pub fn check_parameters(args: Option<&[PathBuf]>) -> Result<()> {
    let args = args.ok_or_else(|| NameSortError::invalid_param("argument list is absent"))?;

    // Only single-file invocation is supported.
    if args.len() != 1 {
        return Err(NameSortError::MissingInputFileName { count: args.len() });
    }

    let path = &args[0];
    if !is_readable_file(path) {
        return Err(NameSortError::InputFileNotFound {
            path: path.display().to_string(),
        });
    }

    Ok(())
}

fn is_readable_file(path: &Path) -> bool {
    let raw = path.as_os_str();
    if raw.is_empty() || raw.as_encoded_bytes().contains(&0) {
        return false;
    }

    path.is_file() && File::open(path).is_ok()
}
