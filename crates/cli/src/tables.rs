//! Loading configuration tables for the driver.

use lexkit_lexer::{Tables, TablesError};
use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// The tables used when no `--tables` file is given.
pub fn demo_tables() -> Tables {
    Tables::new()
        .with_punctuation(["+", "*", "==", "(", ")", "{", "}", ";"])
        .with_keywords(["if", "return"])
        .with_line_comments(["//", "#"])
        .with_block_comments([("/*", "*/")])
}

/// An error that occurred while loading a table file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("couldn't read {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("couldn't parse tables in {}: {source}", path.display())]
    Json { path: PathBuf, source: serde_json::Error },
    #[error("invalid tables in {}: {source}", path.display())]
    Invalid { path: PathBuf, source: TablesError },
}

/// Reads, parses and validates the JSON table file at `path`.
pub fn load_tables(path: &Path) -> Result<Tables, LoadError> {
    let path_buf = || path.to_path_buf();
    let json =
        fs::read_to_string(path).map_err(|source| LoadError::Io { path: path_buf(), source })?;
    let tables: Tables = serde_json::from_str(&json)
        .map_err(|source| LoadError::Json { path: path_buf(), source })?;
    tables.validate().map_err(|source| LoadError::Invalid { path: path_buf(), source })?;
    debug!(
        punctuation = tables.punctuation.len(),
        keywords = tables.keywords.len(),
        "loaded tables from {}",
        path.display()
    );
    Ok(tables)
}

/// Returns `(shadowed, by)` index pairs of punctuation entries that can never be produced,
/// because an earlier entry `by` is a prefix of entry `shadowed`.
pub fn shadowed_punctuation(tables: &Tables) -> Vec<(usize, usize)> {
    let puncts = &tables.punctuation;
    puncts
        .iter()
        .enumerate()
        .filter(|(_, p)| !p.is_empty())
        .filter_map(|(i, p)| {
            puncts[..i]
                .iter()
                .position(|earlier| !earlier.is_empty() && p.starts_with(earlier.as_str()))
                .map(|by| (i, by))
        })
        .collect()
}
