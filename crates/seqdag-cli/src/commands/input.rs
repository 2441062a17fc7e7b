//! Reading word lists and stored graphs.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use seqdag_core::{PersistError, SequenceGraph};

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("failed to read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to load graph '{path}': {source}")]
    Graph {
        path: String,
        #[source]
        source: PersistError,
    },
}

/// Read a word list from `path`, or stdin for `-`.
pub fn load_words(path: &Path) -> Result<Vec<Vec<char>>, InputError> {
    let text = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|source| InputError::Read {
                path: "<stdin>".to_string(),
                source,
            })?;
        buf
    } else {
        fs::read_to_string(path).map_err(|source| InputError::Read {
            path: path.display().to_string(),
            source,
        })?
    };
    Ok(parse_words(&text))
}

/// One word per line, surrounding whitespace dropped and blank lines
/// skipped. The result is sorted and free of duplicates, ready for
/// `SequenceGraph::from_sorted`.
pub fn parse_words(text: &str) -> Vec<Vec<char>> {
    let mut words: Vec<Vec<char>> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| line.chars().collect())
        .collect();
    words.sort_unstable();
    words.dedup();
    words
}

pub fn load_graph(path: &Path) -> Result<SequenceGraph<char>, InputError> {
    SequenceGraph::load(path).map_err(|source| InputError::Graph {
        path: path.display().to_string(),
        source,
    })
}
