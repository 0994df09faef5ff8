use std::{borrow::Cow, fmt};

/// A byte offset into a source buffer.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BytePos(pub usize);

impl fmt::Debug for BytePos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BytePos({})", self.0)
    }
}

impl BytePos {
    #[inline(always)]
    pub const fn to_usize(self) -> usize {
        self.0
    }
}

/// A human-readable source location: file name, 1-based line and 1-based column.
///
/// Columns are counted in bytes from the start of the line.
///
/// Displays as `<file>:<line>:<col>`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct Loc<'a> {
    /// The file name, as given by the caller.
    pub file: Cow<'a, str>,
    /// The 1-based line number.
    pub line: usize,
    /// The 1-based column number.
    #[cfg_attr(feature = "json", serde(rename = "column"))]
    pub col: usize,
}

impl fmt::Display for Loc<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.col)
    }
}

impl<'a> Loc<'a> {
    /// Creates a new location.
    #[inline]
    pub fn new(file: impl Into<Cow<'a, str>>, line: usize, col: usize) -> Self {
        Self { file: file.into(), line, col }
    }

    /// Returns an owned version of this location, detached from the file name's lifetime.
    pub fn into_owned(self) -> Loc<'static> {
        Loc { file: Cow::Owned(self.file.into_owned()), line: self.line, col: self.col }
    }

    /// Returns an owned copy of this location.
    pub fn to_static(&self) -> Loc<'static> {
        self.clone().into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_pos_debug() {
        assert_eq!(format!("{:?}", BytePos(5)), "BytePos(5)");
        assert_eq!(BytePos(5).to_usize(), 5);
    }

    #[test]
    fn loc_display() {
        let loc = Loc::new("example.input", 2, 17);
        assert_eq!(loc.to_string(), "example.input:2:17");

        let owned = loc.to_static();
        assert_eq!(owned, loc);
        assert!(matches!(owned.file, Cow::Owned(_)));
    }
}
