use super::Lexer;
use crate::{Tables, Token, TokenId};

/// Expectation checks.
impl Lexer<'_> {
    /// Returns `true` if `token` has identity `id`.
    ///
    /// Otherwise emits one `Expected <id> but got <token>` error at the token's location and
    /// returns `false`.
    pub fn expect(&self, token: &Token<'_>, id: TokenId) -> bool {
        self.expect_one_of(token, &[id])
    }

    /// Returns `true` if `token` has any of the identities in `ids`.
    ///
    /// Otherwise emits one `Expected <ids> but got <token>` error at the token's location, with
    /// the expected identities separated by commas, and returns `false`.
    pub fn expect_one_of(&self, token: &Token<'_>, ids: &[TokenId]) -> bool {
        if ids.contains(&token.id) {
            return true;
        }
        let msg = expected_message(self.tables, token, ids);
        self.dcx.err(msg).loc(token.loc.clone()).emit();
        false
    }
}

fn expected_message(tables: &Tables, token: &Token<'_>, ids: &[TokenId]) -> String {
    let expected: Vec<_> = ids.iter().map(|id| id.display(tables).to_string()).collect();
    format!("Expected {} but got {}", expected.join(", "), token.display(tables))
}
