#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

#[macro_use]
extern crate tracing;

/// Pluralize a word based on a count.
#[macro_export]
#[rustfmt::skip]
macro_rules! pluralize {
    // Pluralize based on count (e.g., apples)
    ($x:expr) => {
        if $x == 1 { "" } else { "s" }
    };
}

pub mod diagnostics;
use diagnostics::ErrorGuaranteed;

mod pos;
pub use pos::{BytePos, Loc};

mod span;
pub use span::Span;

pub use anstream::ColorChoice;

/// Result type. The error is a proof that a diagnostic has already been emitted.
pub type Result<T = (), E = ErrorGuaranteed> = std::result::Result<T, E>;
