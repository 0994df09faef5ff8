use crate::BytePos;
use std::ops::Range;

/// A half-open byte range `lo..hi` into a source buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    lo: BytePos,
    hi: BytePos,
}

impl Span {
    #[inline]
    pub fn new(mut lo: BytePos, mut hi: BytePos) -> Self {
        if lo > hi {
            std::mem::swap(&mut lo, &mut hi);
        }
        Self { lo, hi }
    }

    /// Returns the span as a `usize` range, suitable for indexing the source buffer.
    #[inline]
    pub fn to_range(self) -> Range<usize> {
        self.lo.to_usize()..self.hi.to_usize()
    }
}

impl From<Range<usize>> for Span {
    #[inline]
    fn from(range: Range<usize>) -> Self {
        Self::new(BytePos(range.start), BytePos(range.end))
    }
}
