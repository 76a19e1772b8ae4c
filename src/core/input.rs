//! Input collaborator: read raw duty-log lines from a file or stdin.

use crate::errors::AppResult;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Where the log comes from. `-` on the command line means stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(String),
}

impl InputSource {
    pub fn resolve(cli_input: Option<&str>, default_input: Option<&str>) -> Self {
        match cli_input.or(default_input) {
            None | Some("-") => InputSource::Stdin,
            Some(path) => InputSource::File(path.to_string()),
        }
    }

    pub fn read_lines(&self) -> AppResult<Vec<String>> {
        match self {
            InputSource::Stdin => read_lines_from(io::stdin().lock()),
            InputSource::File(path) => {
                debug!(path = %path, "reading log file");
                let file = File::open(Path::new(path))?;
                read_lines_from(BufReader::new(file))
            }
        }
    }
}

pub fn read_lines_from<R: BufRead>(reader: R) -> AppResult<Vec<String>> {
    let lines = reader.lines().collect::<Result<Vec<_>, _>>()?;
    debug!(count = lines.len(), "lines read");
    Ok(lines)
}
