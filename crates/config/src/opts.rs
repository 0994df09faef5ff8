//! lexkit CLI arguments.

use crate::ErrorFormat;
use std::path::PathBuf;

#[cfg(feature = "clap")]
use clap::{ColorChoice, Parser, ValueHint};

/// Configurable lexical scanner: prints the tokens of a file.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "clap", derive(Parser))]
#[cfg_attr(feature = "clap", command(
    name = "lexkit",
    version = crate::version::SHORT_VERSION,
    long_version = crate::version::LONG_VERSION,
))]
#[allow(clippy::manual_non_exhaustive)]
pub struct Opts {
    /// File to scan.
    ///
    /// `-` specifies standard input.
    #[cfg_attr(feature = "clap", arg(value_hint = ValueHint::FilePath, default_value = "-"))]
    pub input: PathBuf,
    /// JSON file with the punctuation, keyword and comment tables.
    ///
    /// Uses the built-in demonstration tables if not specified.
    #[cfg_attr(
        feature = "clap",
        arg(help_heading = "Input options", long, short = 't', value_hint = ValueHint::FilePath)
    )]
    pub tables: Option<PathBuf>,
    /// Keep scanning after an invalid character instead of stopping.
    #[cfg_attr(feature = "clap", arg(help_heading = "Input options", long, short = 'k'))]
    pub keep_going: bool,

    /// Coloring.
    #[cfg(feature = "clap")]
    #[cfg_attr(
        feature = "clap",
        arg(help_heading = "Display options", long, value_enum, default_value = "auto")
    )]
    pub color: ColorChoice,
    /// Do not print the scanned tokens, only errors.
    #[cfg_attr(feature = "clap", arg(help_heading = "Display options", long, short))]
    pub quiet: bool,
    /// How errors and other messages are produced.
    #[cfg_attr(
        feature = "clap",
        arg(help_heading = "Display options", long, value_enum, default_value_t)
    )]
    pub error_format: ErrorFormat,
    /// Pretty-print error JSON output.
    #[cfg_attr(feature = "clap", arg(help_heading = "Display options", long))]
    pub pretty_json_err: bool,
    /// Whether to disable warnings.
    #[cfg_attr(feature = "clap", arg(help_heading = "Display options", long))]
    pub no_warnings: bool,

    // Allows `Opts { x: y, ..Default::default() }`.
    #[doc(hidden)]
    #[cfg_attr(feature = "clap", arg(skip))]
    pub _non_exhaustive: (),
}

impl Opts {
    /// Returns `true` if the input should be read from standard input.
    pub fn is_stdin(&self) -> bool {
        self.input.as_os_str() == "-"
    }
}

#[cfg(all(test, feature = "clap"))]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Opts::command().debug_assert();
        let _ = Opts::default();
        let _ = Opts { quiet: true, ..Default::default() };
    }

    #[test]
    fn parse() {
        let opts = Opts::try_parse_from(["lexkit"]).unwrap();
        assert!(opts.is_stdin());
        assert!(opts.tables.is_none());
        assert_eq!(opts.error_format, ErrorFormat::Human);

        let opts = Opts::try_parse_from([
            "lexkit",
            "a.txt",
            "--tables",
            "t.json",
            "-k",
            "--error-format",
            "json",
        ])
        .unwrap();
        assert!(!opts.is_stdin());
        assert_eq!(opts.tables.as_deref(), Some("t.json".as_ref()));
        assert!(opts.keep_going);
        assert_eq!(opts.error_format, ErrorFormat::Json);

        assert!(Opts::try_parse_from(["lexkit", "--error-format", "xml"]).is_err());
    }
}
