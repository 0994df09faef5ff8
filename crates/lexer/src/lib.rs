#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

#[macro_use]
extern crate tracing;

// Re-export the interface crate so callers can build a `DiagCtxt` without another dependency.
pub use lexkit_interface as interface;

mod char_class;
pub use char_class::{AsciiIdent, CharClass, FnCharClass};

pub mod cursor;
pub use cursor::{Cursor, LexerState};

mod lexer;
pub use lexer::Lexer;

mod tables;
pub use tables::{BlockComment, TableKind, Tables, TablesError};

mod token;
pub use token::{IdDisplay, Token, TokenDisplay, TokenId, TokenKind};
