//! Configuration tables.

use std::fmt;

/// A multi-line comment delimiter pair, e.g. `/*` and `*/`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockComment {
    /// The opening delimiter.
    pub open: String,
    /// The closing delimiter.
    pub close: String,
}

impl BlockComment {
    /// Creates a new delimiter pair.
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self { open: open.into(), close: close.into() }
    }
}

impl fmt::Display for BlockComment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ... {}", self.open, self.close)
    }
}

/// The caller-supplied spellings the lexer matches against.
///
/// All four lists are ordered. The lexer tests entries in order and the first match wins, so
/// overlapping spellings must be listed longest first (`==` before `=`). The index of the
/// matching punctuation or keyword entry becomes part of the token's [`TokenId`](crate::TokenId).
///
/// Tables are only read while scanning.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct Tables {
    /// Punctuation spellings.
    pub punctuation: Vec<String>,
    /// Keyword spellings.
    pub keywords: Vec<String>,
    /// Single-line comment start markers.
    pub line_comments: Vec<String>,
    /// Multi-line comment delimiter pairs.
    pub block_comments: Vec<BlockComment>,
}

/// Empty tables: only integers, symbols and invalid bytes are produced.
pub(crate) static EMPTY: Tables = Tables::new();

impl Tables {
    /// Creates empty tables.
    pub const fn new() -> Self {
        Self {
            punctuation: Vec::new(),
            keywords: Vec::new(),
            line_comments: Vec::new(),
            block_comments: Vec::new(),
        }
    }

    /// Appends punctuation spellings.
    pub fn with_punctuation<I, S>(mut self, iter: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.punctuation.extend(iter.into_iter().map(Into::into));
        self
    }

    /// Appends keyword spellings.
    pub fn with_keywords<I, S>(mut self, iter: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords.extend(iter.into_iter().map(Into::into));
        self
    }

    /// Appends single-line comment markers.
    pub fn with_line_comments<I, S>(mut self, iter: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.line_comments.extend(iter.into_iter().map(Into::into));
        self
    }

    /// Appends multi-line comment delimiter pairs.
    pub fn with_block_comments<I, O, C>(mut self, iter: I) -> Self
    where
        I: IntoIterator<Item = (O, C)>,
        O: Into<String>,
        C: Into<String>,
    {
        let pairs = iter.into_iter().map(|(open, close)| BlockComment::new(open, close));
        self.block_comments.extend(pairs);
        self
    }

    /// Returns the punctuation spelling at `index`.
    #[inline]
    pub fn punct(&self, index: u32) -> Option<&str> {
        self.punctuation.get(index as usize).map(String::as_str)
    }

    /// Returns the keyword spelling at `index`.
    #[inline]
    pub fn keyword(&self, index: u32) -> Option<&str> {
        self.keywords.get(index as usize).map(String::as_str)
    }

    /// Checks that no entry is empty.
    ///
    /// An empty spelling would match without consuming any input. The lexer skips such entries,
    /// but they are almost certainly a configuration mistake.
    pub fn validate(&self) -> Result<(), TablesError> {
        fn check<'a>(
            table: TableKind,
            entries: impl IntoIterator<Item = &'a str>,
        ) -> Result<(), TablesError> {
            match entries.into_iter().position(str::is_empty) {
                Some(index) => Err(TablesError::EmptyEntry { table, index }),
                None => Ok(()),
            }
        }

        check(TableKind::Punctuation, self.punctuation.iter().map(String::as_str))?;
        check(TableKind::Keywords, self.keywords.iter().map(String::as_str))?;
        check(TableKind::LineComments, self.line_comments.iter().map(String::as_str))?;
        match self.block_comments.iter().position(|c| c.open.is_empty() || c.close.is_empty()) {
            Some(index) => Err(TablesError::EmptyEntry { table: TableKind::BlockComments, index }),
            None => Ok(()),
        }
    }
}

/// One of the four configuration tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum TableKind {
    Punctuation,
    Keywords,
    LineComments,
    BlockComments,
}

/// An invalid configuration table.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TablesError {
    /// An entry has an empty spelling.
    #[error("entry {index} of the `{table}` table is empty")]
    EmptyEntry { table: TableKind, index: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(feature = "serde"))]
    use serde_json as _;

    #[test]
    fn builder() {
        let tables = Tables::new()
            .with_punctuation(["+", "=="])
            .with_keywords([String::from("if")])
            .with_line_comments(["//", "#"])
            .with_block_comments([("/*", "*/")]);
        assert_eq!(tables.punct(1), Some("=="));
        assert_eq!(tables.punct(2), None);
        assert_eq!(tables.keyword(0), Some("if"));
        assert_eq!(tables.block_comments, [BlockComment::new("/*", "*/")]);
        assert_eq!(tables.block_comments[0].to_string(), "/* ... */");
        assert_eq!(tables.validate(), Ok(()));
        assert_eq!(EMPTY.validate(), Ok(()));
    }

    #[test]
    fn empty_entries() {
        let cases = [
            (Tables::new().with_punctuation(["+", ""]), TableKind::Punctuation, 1),
            (Tables::new().with_keywords([""]), TableKind::Keywords, 0),
            (Tables::new().with_line_comments(["#", "//", ""]), TableKind::LineComments, 2),
            (Tables::new().with_block_comments([("", "*/")]), TableKind::BlockComments, 0),
            (
                Tables::new().with_block_comments([("(*", "*)"), ("/*", "")]),
                TableKind::BlockComments,
                1,
            ),
        ];
        for (tables, table, index) in cases {
            assert_eq!(tables.validate(), Err(TablesError::EmptyEntry { table, index }));
        }

        let err = Tables::new().with_line_comments([""]).validate().unwrap_err();
        assert_eq!(err.to_string(), "entry 0 of the `line_comments` table is empty");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_shape() {
        let json = r#"{
            "punctuation": ["==", "="],
            "block_comments": [{ "open": "/*", "close": "*/" }]
        }"#;
        let tables: Tables = serde_json::from_str(json).unwrap();
        assert_eq!(
            tables,
            Tables::new().with_punctuation(["==", "="]).with_block_comments([("/*", "*/")])
        );
        assert!(tables.keywords.is_empty());
        assert!(tables.line_comments.is_empty());
    }
}
