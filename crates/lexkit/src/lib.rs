#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

#[doc(inline)]
pub use lexkit_config as config;
#[doc(inline)]
pub use lexkit_interface as interface;
#[doc(inline)]
pub use lexkit_lexer as lexer;

#[cfg(feature = "cli")]
#[doc(inline)]
pub use lexkit_cli as cli;

// Used in integration tests. See `../tests.rs`.
#[cfg(test)]
use {snapbox as _, tempfile as _};
