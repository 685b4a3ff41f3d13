//! Word list files for the dictionary provider.
//!
//! One entry per line. Blank lines and lines starting with `#` are skipped;
//! surrounding whitespace is trimmed but inner spaces are kept, so entries
//! may be phrases. Order is preserved because lookups prefer earlier entries.

use std::fs;
use std::path::{Path, PathBuf};

use predictive_engine::WordListProvider;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum WordListError {
    #[error("failed to read word list {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Parse word list contents.
pub fn parse_word_list(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Read `path` into a provider.
pub fn load_word_list(path: &Path) -> Result<WordListProvider, WordListError> {
    let contents = fs::read_to_string(path).map_err(|source| WordListError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let provider = WordListProvider::new(parse_word_list(&contents));
    debug!(path = %path.display(), entries = provider.len(), "loaded word list");
    Ok(provider)
}

/// Built-in list used when no file is configured.
pub fn default_word_list() -> WordListProvider {
    WordListProvider::new(parse_word_list(include_str!("default_words.txt")))
}
