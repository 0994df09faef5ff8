//! Tokens and token identities.

use crate::Tables;
use lexkit_interface::{Loc, Span};
use std::{borrow::Cow, fmt};

/// The coarse category of a token.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::IntoStaticStr,
    strum::FromRepr,
    strum::EnumIter,
)]
#[strum(serialize_all = "UPPERCASE")]
#[repr(u32)]
pub enum TokenKind {
    /// A byte that matched no rule. Always one byte wide.
    Invalid = 0,
    /// End of input. Always zero bytes wide.
    End = 1,
    /// A run of decimal digits.
    Int = 2,
    /// A symbol that is not in the keyword table.
    Symbol = 3,
    /// A symbol that exactly matches a keyword table entry.
    Keyword = 4,
    /// A punctuation table entry.
    Punct = 5,
    /// Reserved. Never produced by the lexer.
    String = 6,
}

impl TokenKind {
    /// Returns the display name of the kind, e.g. `"PUNCT"`.
    #[inline]
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Returns `true` if tokens of this kind carry a table index.
    #[inline]
    pub fn is_indexed(self) -> bool {
        matches!(self, Self::Keyword | Self::Punct)
    }
}

/// The identity of a token: its kind plus, for keywords and punctuation, the index of the
/// matching table entry.
///
/// Two identities are equal iff both the kind and the index are equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TokenId {
    Invalid,
    End,
    Int,
    Symbol,
    /// Index into [`Tables::keywords`].
    Keyword(u32),
    /// Index into [`Tables::punctuation`].
    Punct(u32),
    String,
}

impl TokenId {
    /// Returns the kind of this identity.
    pub const fn kind(self) -> TokenKind {
        match self {
            Self::Invalid => TokenKind::Invalid,
            Self::End => TokenKind::End,
            Self::Int => TokenKind::Int,
            Self::Symbol => TokenKind::Symbol,
            Self::Keyword(_) => TokenKind::Keyword,
            Self::Punct(_) => TokenKind::Punct,
            Self::String => TokenKind::String,
        }
    }

    /// Returns the table index of a keyword or punctuation identity.
    pub const fn index(self) -> Option<u32> {
        match self {
            Self::Keyword(index) | Self::Punct(index) => Some(index),
            _ => None,
        }
    }

    /// Packs the identity into a single integer: the kind in the low 32 bits and the table
    /// index in the high 32 bits.
    pub const fn to_bits(self) -> u64 {
        let index = match self.index() {
            Some(index) => index,
            None => 0,
        };
        (self.kind() as u32 as u64) | ((index as u64) << 32)
    }

    /// Unpacks an identity produced by [`to_bits`](Self::to_bits).
    ///
    /// Returns `None` if the kind is unknown, or if a kind without a table carries a non-zero
    /// index.
    pub fn from_bits(bits: u64) -> Option<Self> {
        let kind = TokenKind::from_repr(bits as u32)?;
        let index = (bits >> 32) as u32;
        Some(match kind {
            TokenKind::Keyword => Self::Keyword(index),
            TokenKind::Punct => Self::Punct(index),
            _ if index != 0 => return None,
            TokenKind::Invalid => Self::Invalid,
            TokenKind::End => Self::End,
            TokenKind::Int => Self::Int,
            TokenKind::Symbol => Self::Symbol,
            TokenKind::String => Self::String,
        })
    }

    /// Returns a displayable form of the identity: `KIND`, or ``KIND `spelling` `` for keywords
    /// and punctuation.
    pub fn display(self, tables: &Tables) -> IdDisplay<'_> {
        IdDisplay { id: self, tables }
    }
}

/// Display adapter returned by [`TokenId::display`].
#[derive(Clone, Copy, Debug)]
pub struct IdDisplay<'t> {
    id: TokenId,
    tables: &'t Tables,
}

impl fmt::Display for IdDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = self.id.kind().name();
        match spelling(self.id, self.tables) {
            Some(spelling) => write!(f, "{kind} `{spelling}`"),
            None => f.write_str(kind),
        }
    }
}

/// Resolves the table spelling of a keyword or punctuation identity.
fn spelling(id: TokenId, tables: &Tables) -> Option<&str> {
    match id {
        TokenId::Keyword(index) => tables.keyword(index),
        TokenId::Punct(index) => tables.punct(index),
        _ => None,
    }
}

/// A token produced by the [`Lexer`](crate::Lexer).
///
/// Borrows its text from the source buffer.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token<'a> {
    /// The identity of the token.
    pub id: TokenId,
    /// The location of the first byte of the token.
    pub loc: Loc<'a>,
    /// The byte range of the token in the source buffer.
    pub span: Span,
    /// The matched bytes.
    pub text: &'a [u8],
    /// The value of an [`Int`](TokenKind::Int) token; zero otherwise.
    pub int_value: u64,
}

impl<'a> Token<'a> {
    /// Returns the kind of the token.
    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.id.kind()
    }

    /// Returns `true` if this is the end-of-input token.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.id == TokenId::End
    }

    /// Returns `true` if this is an invalid token.
    #[inline]
    pub fn is_invalid(&self) -> bool {
        self.id == TokenId::Invalid
    }

    /// Returns `true` if scanning may simply continue after this token.
    ///
    /// This is `false` for both [`End`](TokenId::End) and [`Invalid`](TokenId::Invalid); inspect
    /// the kind to tell them apart.
    #[inline]
    pub fn can_continue(&self) -> bool {
        !matches!(self.id, TokenId::End | TokenId::Invalid)
    }

    /// Returns `true` if both tokens matched the same bytes.
    #[inline]
    pub fn text_eq(&self, other: &Token<'_>) -> bool {
        self.text == other.text
    }

    /// Returns `true` if the token matched exactly `s`.
    #[inline]
    pub fn is_text(&self, s: &str) -> bool {
        self.text == s.as_bytes()
    }

    /// Returns the matched text, replacing invalid UTF-8 with `U+FFFD`.
    #[inline]
    pub fn text_lossy(&self) -> Cow<'a, str> {
        String::from_utf8_lossy(self.text)
    }

    /// Returns a displayable form of the token: ``KIND `text` ``, with the table spelling for
    /// keywords and punctuation.
    pub fn display<'t>(&'t self, tables: &'t Tables) -> TokenDisplay<'t> {
        TokenDisplay { token: self, tables }
    }
}

/// Display adapter returned by [`Token::display`].
#[derive(Clone, Copy, Debug)]
pub struct TokenDisplay<'t> {
    token: &'t Token<'t>,
    tables: &'t Tables,
}

impl fmt::Display for TokenDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = self.token.kind().name();
        match spelling(self.token.id, self.tables) {
            Some(spelling) => write!(f, "{kind} `{spelling}`"),
            None => write!(f, "{kind} `{}`", self.token.text_lossy()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn kind_names() {
        let names = TokenKind::iter().map(TokenKind::name).collect::<Vec<_>>();
        assert_eq!(names, ["INVALID", "END", "INT", "SYMBOL", "KEYWORD", "PUNCT", "STRING"]);
        assert_eq!(TokenKind::Punct.to_string(), "PUNCT");
    }

    #[test]
    fn bits() {
        let ids = [
            TokenId::Invalid,
            TokenId::End,
            TokenId::Int,
            TokenId::Symbol,
            TokenId::String,
            TokenId::Keyword(0),
            TokenId::Keyword(7),
            TokenId::Punct(0),
            TokenId::Punct(u32::MAX),
        ];
        for id in ids {
            assert_eq!(TokenId::from_bits(id.to_bits()), Some(id), "{id:?}");
        }

        assert_eq!(TokenId::Punct(3).to_bits(), 5 | (3_u64 << 32));
        assert_eq!(TokenId::End.to_bits(), 1);
        assert_ne!(TokenId::Punct(1).to_bits(), TokenId::Keyword(1).to_bits());
        assert_ne!(TokenId::Punct(1).to_bits(), TokenId::Punct(2).to_bits());

        assert_eq!(TokenId::from_bits(7), None);
        assert_eq!(TokenId::from_bits(u64::from(u32::MAX)), None);
        assert_eq!(TokenId::from_bits(2 | (1_u64 << 32)), None);
    }

    #[test]
    fn id_display() {
        let tables = Tables::new().with_punctuation(["+", "=="]).with_keywords(["if"]);
        assert_eq!(TokenId::Symbol.display(&tables).to_string(), "SYMBOL");
        assert_eq!(TokenId::End.display(&tables).to_string(), "END");
        assert_eq!(TokenId::Punct(1).display(&tables).to_string(), "PUNCT `==`");
        assert_eq!(TokenId::Keyword(0).display(&tables).to_string(), "KEYWORD `if`");
        // Out-of-range indices fall back to the kind name.
        assert_eq!(TokenId::Keyword(9).display(&tables).to_string(), "KEYWORD");
    }

    #[test]
    fn token_helpers() {
        let src = b"foo foo \xFF";
        let token = |id, range: std::ops::Range<usize>| Token {
            id,
            loc: Loc::new("t", 1, range.start + 1),
            span: Span::from(range.clone()),
            text: &src[range],
            int_value: 0,
        };
        let a = token(TokenId::Symbol, 0..3);
        let b = token(TokenId::Symbol, 4..7);
        let bad = token(TokenId::Invalid, 8..9);

        assert!(a.text_eq(&b));
        assert!(!a.text_eq(&bad));
        assert!(a.is_text("foo"));
        assert!(!a.is_text("fo"));
        assert!(a.can_continue());
        assert!(!bad.can_continue());
        assert!(bad.is_invalid());

        let tables = Tables::new();
        assert_eq!(a.display(&tables).to_string(), "SYMBOL `foo`");
        assert_eq!(bad.display(&tables).to_string(), "INVALID `\u{FFFD}`");
    }
}
