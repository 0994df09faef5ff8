#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

use strum::EnumIs;

#[macro_use]
mod macros;

mod opts;
pub use opts::Opts;

mod utils;

pub mod version;

str_enum! {
    /// How errors and other messages are produced.
    #[derive(Default)]
    #[derive(EnumIs)]
    #[strum(serialize_all = "kebab-case")]
    pub enum ErrorFormat {
        /// Human-readable output: `<file>:<row>:<col>: LEVEL: message`.
        #[default]
        Human,
        /// One JSON object per line.
        Json,
    }
}
