//! Pluggable byte classification for symbols.

/// Decides which bytes may start and continue a symbol.
///
/// The lexer holds a `&dyn CharClass`, set with
/// [`Lexer::with_char_class`](crate::Lexer::with_char_class).
pub trait CharClass {
    /// Returns `true` if `b` may start a symbol.
    fn is_symbol_start(&self, b: u8) -> bool;

    /// Returns `true` if `b` may appear in a symbol after its first byte.
    fn is_symbol_continue(&self, b: u8) -> bool;
}

/// The default classification: `[A-Za-z_][A-Za-z0-9_]*`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AsciiIdent;

impl CharClass for AsciiIdent {
    #[inline]
    fn is_symbol_start(&self, b: u8) -> bool {
        b.is_ascii_alphabetic() || b == b'_'
    }

    #[inline]
    fn is_symbol_continue(&self, b: u8) -> bool {
        b.is_ascii_alphanumeric() || b == b'_'
    }
}

/// A [`CharClass`] built from two closures.
///
/// ```
/// use lexkit_lexer::{CharClass, FnCharClass};
///
/// // Allow `$` anywhere in a symbol and `-` after the first byte.
/// let class = FnCharClass::new(
///     |b: u8| b.is_ascii_alphabetic() || b == b'$',
///     |b: u8| b.is_ascii_alphanumeric() || matches!(b, b'$' | b'-'),
/// );
/// assert!(class.is_symbol_start(b'$'));
/// assert!(!class.is_symbol_start(b'-'));
/// assert!(class.is_symbol_continue(b'-'));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct FnCharClass<S, C> {
    start: S,
    cont: C,
}

impl<S, C> FnCharClass<S, C>
where
    S: Fn(u8) -> bool,
    C: Fn(u8) -> bool,
{
    /// Creates a new classification from a start predicate and a continuation predicate.
    pub const fn new(start: S, cont: C) -> Self {
        Self { start, cont }
    }
}

impl<S, C> CharClass for FnCharClass<S, C>
where
    S: Fn(u8) -> bool,
    C: Fn(u8) -> bool,
{
    #[inline]
    fn is_symbol_start(&self, b: u8) -> bool {
        (self.start)(b)
    }

    #[inline]
    fn is_symbol_continue(&self, b: u8) -> bool {
        (self.cont)(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_ident() {
        let class = AsciiIdent;
        for b in [b'a', b'Z', b'_'] {
            assert!(class.is_symbol_start(b), "{}", b as char);
            assert!(class.is_symbol_continue(b), "{}", b as char);
        }
        assert!(!class.is_symbol_start(b'7'));
        assert!(class.is_symbol_continue(b'7'));
        for b in [b'$', b'-', b' ', 0xC3] {
            assert!(!class.is_symbol_start(b));
            assert!(!class.is_symbol_continue(b));
        }
    }
}
