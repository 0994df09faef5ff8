#![no_main]

use libfuzzer_sys::fuzz_target;

use lexkit_interface::diagnostics::DiagCtxt;
use lexkit_lexer::{Lexer, Tables};

fuzz_target!(|data: &[u8]| {
    let tables = Tables::new()
        .with_punctuation(["==", "=", "+", "(", ")", "{", "}", ";"])
        .with_keywords(["if", "return"])
        .with_line_comments(["//", "#"])
        .with_block_comments([("/*", "*/")]);
    let mut lexer =
        Lexer::new("fuzz", data).with_tables(&tables).with_dcx(DiagCtxt::with_silent_emitter());

    // Every token other than END consumes at least one byte.
    for _ in 0..=data.len() {
        let state = lexer.save();
        let token = lexer.next_token();
        if token.is_end() {
            assert!(token.text.is_empty());
            return;
        }
        assert!(!token.text.is_empty());

        lexer.rewind(state);
        assert_eq!(lexer.next_token(), token);
    }
    panic!("lexer did not reach END");
});
