use crate::utils::error::Result;
use crate::utils::validation::{check_parameters, Validate};
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Parser)]
#[command(name = "name-sorter")]
#[command(about = "Sort a list of names by last name, then given names")]
#[command(after_help = "Use `name-sorter -- <FILE_PATH>` when the path starts with '-'.")]
pub struct CliConfig {
    /// Input file, one name per line
    #[arg(value_name = "FILE_PATH")]
    pub files: Vec<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// The input file, once [`Validate::validate`] has passed.
    pub fn input_path(&self) -> Option<&Path> {
        match self.files.as_slice() {
            [path] => Some(path.as_path()),
            _ => None,
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        check_parameters(Some(self.files.as_slice()))
    }
}
