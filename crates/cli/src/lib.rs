#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

#[macro_use]
extern crate tracing;

use clap::Parser as _;
use lexkit_config::{ErrorFormat, Opts};
use lexkit_interface::{
    Result,
    diagnostics::{DiagCtxt, DynEmitter, HumanEmitter, JsonEmitter, Level},
};
use lexkit_lexer::{Lexer, TokenId};
use std::io::{self, Read};

mod tables;
pub use tables::{LoadError, demo_tables, load_tables, shadowed_punctuation};

pub mod utils;

/// Parses command line arguments.
pub fn parse_args<I, T>(itr: I) -> Result<Opts, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Opts::try_parse_from(itr)
}

/// Runs the scanner with the given options, reading the input named by `opts.input`.
pub fn run_with_args(opts: Opts) -> Result {
    Driver::new(opts).run()
}

/// The token dump driver.
pub struct Driver {
    pub dcx: DiagCtxt,
    pub opts: Opts,
}

impl Driver {
    /// Creates a new driver, selecting the diagnostics emitter from `opts`.
    pub fn new(opts: Opts) -> Self {
        let emitter: Box<DynEmitter> = match opts.error_format {
            ErrorFormat::Human => {
                let color = match opts.color {
                    clap::ColorChoice::Always => lexkit_interface::ColorChoice::Always,
                    clap::ColorChoice::Auto => lexkit_interface::ColorChoice::Auto,
                    clap::ColorChoice::Never => lexkit_interface::ColorChoice::Never,
                };
                Box::new(HumanEmitter::stderr(color))
            }
            ErrorFormat::Json => {
                let writer = Box::new(io::BufWriter::new(io::stderr()));
                Box::new(JsonEmitter::new(writer).pretty(opts.pretty_json_err))
            }
        };
        Self::with_dcx(DiagCtxt::new(emitter), opts)
    }

    /// Creates a new driver that reports to `dcx`.
    pub fn with_dcx(dcx: DiagCtxt, opts: Opts) -> Self {
        let dcx = if opts.no_warnings { dcx.disable_warnings() } else { dcx };
        Self { dcx, opts }
    }

    /// Reads the input and scans it.
    pub fn run(self) -> Result {
        let (file, src) = if self.opts.is_stdin() {
            let mut buf = Vec::new();
            ("<stdin>".to_string(), io::stdin().lock().read_to_end(&mut buf).map(|_| buf))
        } else {
            (self.opts.input.display().to_string(), std::fs::read(&self.opts.input))
        };
        match src {
            Ok(src) => self.run_on(&file, &src),
            Err(e) => {
                self.dcx.err(format!("couldn't read {file}: {e}")).emit();
                self.dcx.print_error_count()
            }
        }
    }

    /// Scans `src`, reporting locations against the file name `file`.
    ///
    /// Every token is reported as an `INFO` diagnostic unless `--quiet` is set. Scanning stops at
    /// the first invalid character unless `--keep-going` is set, and the last token must be the
    /// end of input.
    #[instrument(name = "run", level = "debug", skip_all, fields(file = file))]
    pub fn run_on(self, file: &str, src: &[u8]) -> Result {
        let Self { dcx, opts } = self;

        let tables = match &opts.tables {
            Some(path) => match load_tables(path) {
                Ok(tables) => tables,
                Err(e) => {
                    dcx.err(e.to_string()).emit();
                    return dcx.print_error_count();
                }
            },
            None => demo_tables(),
        };
        for (shadowed, by) in shadowed_punctuation(&tables) {
            let puncts = &tables.punctuation;
            let msg =
                format!("punctuation `{}` (entry {shadowed}) can never be matched", puncts[shadowed]);
            let note = format!("entry {by} `{}` is a prefix of it and is tried first", puncts[by]);
            dcx.warn(msg).note(note).emit();
        }

        let mut lexer = Lexer::new(file, src).with_tables(&tables).with_dcx(dcx);
        let mut token = lexer.next_token();
        while token.can_continue() || (opts.keep_going && token.is_invalid()) {
            if !opts.quiet {
                let msg = format!("{}: {}", token.kind(), token.text_lossy());
                lexer.dcx().report(token.loc.clone(), Level::Info, msg);
            }
            if token.is_invalid() {
                lexer.expect(&token, TokenId::End);
            }
            token = lexer.next_token();
        }
        lexer.expect(&token, TokenId::End);

        lexer.into_dcx().print_error_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{
        io::Write,
        path::PathBuf,
        sync::{Arc, Mutex},
    };

    const DEMO: &str = "\
#include <stdio.h>
if (a == 180*2 + 50) { // single line comment
    /* multi
     * line
     * comment
     */
    return b;
}
";

    #[derive(Clone, Default)]
    struct Output(Arc<Mutex<Vec<u8>>>);

    impl Write for Output {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Output {
        fn take(&self) -> String {
            String::from_utf8(std::mem::take(&mut *self.0.lock().unwrap())).unwrap()
        }
    }

    fn run(opts: Opts, src: &str) -> (Result, String) {
        let out = Output::default();
        let emitter = HumanEmitter::new(out.clone(), lexkit_interface::ColorChoice::Never);
        let driver = Driver::with_dcx(DiagCtxt::new(Box::new(emitter)), opts);
        let result = driver.run_on("example.input", src.as_bytes());
        (result, out.take())
    }

    #[test]
    fn args() {
        let opts = parse_args(["lexkit", "-q", "input.txt"]).unwrap();
        assert!(opts.quiet);
        assert_eq!(opts.input, PathBuf::from("input.txt"));
        assert!(parse_args(["lexkit", "--bogus"]).is_err());
    }

    #[test]
    fn demo_program() {
        let (result, out) = run(Opts::default(), DEMO);
        assert!(result.is_ok());
        assert_eq!(
            out,
            "\
example.input:2:1: INFO: KEYWORD: if
example.input:2:4: INFO: PUNCT: (
example.input:2:5: INFO: SYMBOL: a
example.input:2:7: INFO: PUNCT: ==
example.input:2:10: INFO: INT: 180
example.input:2:13: INFO: PUNCT: *
example.input:2:14: INFO: INT: 2
example.input:2:16: INFO: PUNCT: +
example.input:2:18: INFO: INT: 50
example.input:2:20: INFO: PUNCT: )
example.input:2:22: INFO: PUNCT: {
example.input:7:5: INFO: KEYWORD: return
example.input:7:12: INFO: SYMBOL: b
example.input:7:13: INFO: PUNCT: ;
example.input:8:1: INFO: PUNCT: }
"
        );
    }

    #[test]
    fn stops_at_invalid() {
        let (result, out) = run(Opts::default(), "a @ b");
        assert!(result.is_err());
        assert_eq!(
            out,
            "\
example.input:1:1: INFO: SYMBOL: a
example.input:1:3: ERROR: Expected END but got INVALID `@`
ERROR: aborting due to 1 previous error
"
        );
    }

    #[test]
    fn keep_going() {
        let opts = Opts { keep_going: true, quiet: true, ..Default::default() };
        let (result, out) = run(opts, "a @ b\n$");
        assert!(result.is_err());
        assert_eq!(
            out,
            "\
example.input:1:3: ERROR: Expected END but got INVALID `@`
example.input:2:1: ERROR: Expected END but got INVALID `$`
ERROR: aborting due to 2 previous errors
"
        );
    }

    #[test]
    fn quiet() {
        let opts = Opts { quiet: true, ..Default::default() };
        let (result, out) = run(opts, DEMO);
        assert!(result.is_ok());
        assert_eq!(out, "");
    }

    #[test]
    fn custom_tables() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = r#"{"punctuation": ["=", "=="], "keywords": ["let"], "line_comments": ["--"]}"#;
        file.write_all(json.as_bytes()).unwrap();
        let opts = Opts { tables: Some(file.path().to_path_buf()), ..Default::default() };
        let (result, out) = run(opts, "let x = 1 -- one\n");
        assert!(result.is_ok());
        assert_eq!(
            out,
            "\
WARNING: punctuation `==` (entry 1) can never be matched
NOTE: entry 0 `=` is a prefix of it and is tried first
example.input:1:1: INFO: KEYWORD: let
example.input:1:5: INFO: SYMBOL: x
example.input:1:7: INFO: PUNCT: =
example.input:1:9: INFO: INT: 1
"
        );

        let opts = Opts {
            tables: Some(file.path().to_path_buf()),
            no_warnings: true,
            quiet: true,
            ..Default::default()
        };
        let (result, out) = run(opts, "let x = 1 -- one\n");
        assert!(result.is_ok());
        assert_eq!(out, "");
    }

    #[test]
    fn bad_tables() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"punctuation": ["+", ""]}"#).unwrap();
        let opts = Opts { tables: Some(file.path().to_path_buf()), ..Default::default() };
        let (result, out) = run(opts, "1 + 2");
        assert!(result.is_err());
        let expected = format!(
            "ERROR: invalid tables in {}: entry 1 of the `punctuation` table is empty\n\
             ERROR: aborting due to 1 previous error\n",
            file.path().display()
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn missing_input() {
        let opts = Opts { input: "/definitely/not/here.input".into(), ..Default::default() };
        let out = Output::default();
        let emitter = HumanEmitter::new(out.clone(), lexkit_interface::ColorChoice::Never);
        let driver = Driver::with_dcx(DiagCtxt::new(Box::new(emitter)), opts);
        assert!(driver.run().is_err());
        let out = out.take();
        assert!(out.starts_with("ERROR: couldn't read /definitely/not/here.input: "), "{out}");
        assert!(out.ends_with("ERROR: aborting due to 1 previous error\n"), "{out}");
    }
}
