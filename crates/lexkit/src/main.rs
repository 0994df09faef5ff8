//! The main entry point for the lexkit scanner.

use lexkit_cli::{
    parse_args, run_with_args,
    utils::{self, LogDestination},
};
use std::process::ExitCode;

// Used through `lexkit_cli`.
use lexkit_config as _;
use lexkit_interface as _;
use lexkit_lexer as _;

// Used in integration tests. See `../tests.rs`.
#[cfg(test)]
use {snapbox as _, tempfile as _};

fn main() -> ExitCode {
    utils::init_logger(LogDestination::default());
    let opts = match parse_args(std::env::args_os()) {
        Ok(opts) => opts,
        Err(e) => e.exit(),
    };
    match run_with_args(opts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
