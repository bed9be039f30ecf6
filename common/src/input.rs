//! # Input Resolution
//!
//! Builds the ordered candidate list for a run from either an inline,
//! comma separated argument or a newline separated file.
//!
//! Nothing is validated here beyond "is there anything at all". Deciding
//! what a candidate *is* belongs to [`crate::network::candidate`].

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::InputError;

/// Everything a run needs from the command line, fixed once parsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunInput {
    pub addresses: Vec<String>,
    pub output: Option<PathBuf>,
}

/// Where the candidate addresses come from.
#[derive(Clone, Copy, Debug)]
pub enum InputSource<'a> {
    /// `-i 10.0.0.1,10.0.0.2`
    Inline(&'a str),
    /// `-iF hosts.txt`
    File(&'a Path),
}

impl<'a> InputSource<'a> {
    /// Picks the source to use. Inline input wins when both are given.
    pub fn select(inline: Option<&'a str>, file: Option<&'a Path>) -> Result<Self, InputError> {
        match (inline, file) {
            (Some(list), _) => Ok(Self::Inline(list)),
            (None, Some(path)) => Ok(Self::File(path)),
            (None, None) => Err(InputError::Usage),
        }
    }

    /// Reads the source into trimmed candidates, keeping their order.
    ///
    /// Inline input keeps empty tokens (`a,,b` is three candidates) while
    /// blank file lines are skipped. Either way, a source with no non-empty
    /// candidate is [`InputError::EmptyInput`].
    pub fn load(self) -> Result<Vec<String>, InputError> {
        let addresses: Vec<String> = match self {
            Self::Inline(list) => split_inline(list),
            Self::File(path) => read_lines(path)?,
        };

        if addresses.iter().all(String::is_empty) {
            return Err(InputError::EmptyInput);
        }

        debug!(count = addresses.len(), "loaded candidate addresses");
        Ok(addresses)
    }
}

/// Resolves the command line into a [`RunInput`].
pub fn resolve(
    inline: Option<&str>,
    file: Option<&Path>,
    output: Option<PathBuf>,
) -> Result<RunInput, InputError> {
    let addresses = InputSource::select(inline, file)?.load()?;
    Ok(RunInput { addresses, output })
}

fn split_inline(list: &str) -> Vec<String> {
    list.split(',').map(|token| token.trim().to_string()).collect()
}

fn read_lines(path: &Path) -> Result<Vec<String>, InputError> {
    if !path.exists() {
        return Err(InputError::FileNotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}
