//! The scanning engine.

use crate::{AsciiIdent, CharClass, Cursor, LexerState, Tables, Token, TokenId, tables::EMPTY};
use lexkit_interface::{Loc, Span, diagnostics::DiagCtxt};

mod expect;


/// Table-driven lexer.
///
/// Each call to [`next_token`](Self::next_token) skips whitespace and comments, then classifies
/// and consumes exactly one token. The classification order is fixed:
///
/// 1. end of input: an [`End`](TokenId::End) token of zero width;
/// 2. punctuation: the first [`Tables::punctuation`] entry the input starts with;
/// 3. integer: a maximal run of ASCII digits;
/// 4. symbol: a byte accepted by [`CharClass::is_symbol_start`] followed by a maximal run of
///    bytes accepted by [`CharClass::is_symbol_continue`], reclassified as a keyword if it
///    exactly matches a [`Tables::keywords`] entry;
/// 5. otherwise a single [`Invalid`](TokenId::Invalid) byte.
///
/// Scanning never fails: end of input and unrecognized bytes are tokens. Scanning may resume
/// after an invalid token.
pub struct Lexer<'a> {
    /// The file name used in locations.
    file: &'a str,

    /// Cursor over the source buffer.
    cursor: Cursor<'a>,

    tables: &'a Tables,
    char_class: &'a dyn CharClass,

    /// The diagnostics sink used by the expectation checks.
    dcx: DiagCtxt,
}

impl<'a> Lexer<'a> {
    /// Creates a new `Lexer` over `src`, reporting locations in `file`.
    ///
    /// The lexer starts with empty [`Tables`], the [`AsciiIdent`] symbol classification and a
    /// diagnostics context that writes to stderr.
    pub fn new<S: AsRef<[u8]> + ?Sized>(file: &'a str, src: &'a S) -> Self {
        Self {
            file,
            cursor: Cursor::new(src.as_ref()),
            tables: &EMPTY,
            char_class: &AsciiIdent,
            dcx: DiagCtxt::with_stderr_emitter(),
        }
    }

    /// Sets the configuration tables.
    pub fn with_tables(mut self, tables: &'a Tables) -> Self {
        self.tables = tables;
        self
    }

    /// Sets the symbol classification.
    pub fn with_char_class(mut self, char_class: &'a dyn CharClass) -> Self {
        self.char_class = char_class;
        self
    }

    /// Sets the diagnostics context.
    pub fn with_dcx(mut self, dcx: DiagCtxt) -> Self {
        self.dcx = dcx;
        self
    }

    /// Returns the file name.
    #[inline]
    pub fn file(&self) -> &'a str {
        self.file
    }

    /// Returns the whole source buffer.
    #[inline]
    pub fn src(&self) -> &'a [u8] {
        self.cursor.src()
    }

    /// Returns the configuration tables.
    #[inline]
    pub fn tables(&self) -> &'a Tables {
        self.tables
    }

    /// Returns a reference to the diagnostic context.
    #[inline]
    pub fn dcx(&self) -> &DiagCtxt {
        &self.dcx
    }

    /// Consumes the lexer, returning its diagnostic context.
    pub fn into_dcx(self) -> DiagCtxt {
        self.dcx
    }

    /// Returns the location of the cursor.
    #[inline]
    pub fn loc(&self) -> Loc<'a> {
        Loc::new(self.file, self.cursor.line(), self.cursor.column())
    }

    /// Returns `true` if all input has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.cursor.is_eof()
    }

    /// Consumes one raw byte. Returns `false` at end of input.
    #[inline]
    pub fn bump(&mut self) -> bool {
        self.cursor.bump().is_some()
    }

    /// Consumes up to `n` raw bytes, stopping early at end of input.
    #[inline]
    pub fn bump_n(&mut self, n: usize) {
        self.cursor.bump_n(n);
    }

    /// Skips whitespace.
    #[inline]
    pub fn skip_whitespace(&mut self) {
        self.cursor.eat_whitespace();
    }

    /// Skips up to and including the next newline.
    #[inline]
    pub fn skip_line(&mut self) {
        self.cursor.eat_line();
    }

    /// Skips whitespace and comments until neither is at the cursor.
    pub fn skip_comments(&mut self) {
        let tables = self.tables;
        loop {
            self.cursor.eat_whitespace();
            if self.cursor.is_eof() {
                break;
            }

            if tables.line_comments.iter().any(|m| !m.is_empty() && self.starts_with(m)) {
                self.cursor.eat_line();
                continue;
            }

            let mut blocks = tables.block_comments.iter();
            if let Some(block) = blocks.find(|c| !c.open.is_empty() && self.starts_with(&c.open)) {
                let start = self.loc();
                self.cursor.bump_n(block.open.len());
                if self.cursor.eat_until(block.close.as_bytes()) {
                    self.cursor.bump_n(block.close.len());
                } else {
                    debug!(%start, open = %block.open, "unterminated block comment");
                }
                continue;
            }

            break;
        }
    }

    /// Returns the next token, advancing the lexer.
    ///
    /// At end of input this keeps returning [`End`](TokenId::End) tokens.
    pub fn next_token(&mut self) -> Token<'a> {
        self.skip_comments();

        let loc = self.loc();
        let start = self.cursor.pos();
        let (id, int_value) = match self.cursor.first() {
            None => (TokenId::End, 0),
            Some(first) => self.classify(first),
        };

        let end = self.cursor.pos();
        let token = Token {
            id,
            loc,
            span: Span::from(start..end),
            text: &self.cursor.src()[start..end],
            int_value,
        };
        trace!(kind = %token.kind(), span = ?token.span, "token");
        token
    }

    /// Consumes the token starting with `first`.
    fn classify(&mut self, first: u8) -> (TokenId, u64) {
        let tables = self.tables;

        if let Some((index, punct)) =
            (0u32..).zip(&tables.punctuation).find(|(_, p)| !p.is_empty() && self.starts_with(p))
        {
            self.cursor.bump_n(punct.len());
            return (TokenId::Punct(index), 0);
        }

        if first.is_ascii_digit() {
            return (TokenId::Int, self.integer());
        }

        let class = self.char_class;
        if class.is_symbol_start(first) {
            let start = self.cursor.pos();
            self.cursor.bump();
            self.cursor.eat_while(|b| class.is_symbol_continue(b));
            let text = &self.cursor.src()[start..self.cursor.pos()];
            let id = match (0u32..).zip(&tables.keywords).find(|(_, kw)| kw.as_bytes() == text) {
                Some((index, _)) => TokenId::Keyword(index),
                None => TokenId::Symbol,
            };
            return (id, 0);
        }

        self.cursor.bump();
        (TokenId::Invalid, 0)
    }

    /// Consumes a run of decimal digits, returning its value.
    ///
    /// Values that do not fit in a `u64` saturate to `u64::MAX`.
    fn integer(&mut self) -> u64 {
        let digits = self.cursor.eat_while(|b| b.is_ascii_digit());
        let value = digits.iter().try_fold(0u64, |acc, &d| {
            acc.checked_mul(10)?.checked_add(u64::from(d - b'0'))
        });
        value.unwrap_or_else(|| {
            debug!(len = digits.len(), "integer literal saturated");
            u64::MAX
        })
    }

    #[inline]
    fn starts_with(&self, s: &str) -> bool {
        self.cursor.starts_with(s.as_bytes())
    }

    /// Returns the next token without consuming it.
    pub fn peek_token(&mut self) -> Token<'a> {
        let state = self.save();
        let token = self.next_token();
        self.rewind(state);
        token
    }

    /// Saves the scanning state.
    #[inline]
    pub fn save(&self) -> LexerState {
        self.cursor.state()
    }

    /// Restores a state returned by [`save`](Self::save) on this lexer.
    ///
    /// Subsequent scanning behaves exactly as if nothing had been consumed since the state was
    /// saved. Diagnostics emitted in the meantime are not rolled back.
    #[inline]
    pub fn rewind(&mut self, state: LexerState) {
        self.cursor.set_state(state);
    }

    /// Consumes the lexer and collects all tokens before end of input into a vector.
    ///
    /// Invalid tokens are included.
    #[instrument(name = "lex", level = "debug", skip_all, fields(file = self.file))]
    pub fn into_tokens(mut self) -> Vec<Token<'a>> {
        // This is an estimate of the number of tokens in the source.
        let mut tokens = Vec::with_capacity(self.src().len() / 4);
        loop {
            let token = self.next_token();
            if token.is_end() {
                break;
            }
            tokens.push(token);
        }
        trace!(src.len = self.src().len(), tokens.len = tokens.len(), "lexed");
        tokens
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    #[inline]
    fn next(&mut self) -> Option<Token<'a>> {
        let token = self.next_token();
        if token.is_end() { None } else { Some(token) }
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}
