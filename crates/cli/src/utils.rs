//! Utility functions used by the lexkit CLI.

use lexkit_interface::diagnostics::DiagCtxt;
#[cfg(feature = "tracing")]
use std::io;

/// Where log output is written.
#[derive(Clone, Copy, Debug, Default)]
pub enum LogDestination {
    #[default]
    Stdout,
    Stderr,
}

#[cfg(feature = "tracing")]
impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for LogDestination {
    type Writer = Box<dyn io::Write>;

    fn make_writer(&'a self) -> Self::Writer {
        match self {
            Self::Stdout => Box::new(io::stdout().lock()),
            Self::Stderr => Box::new(io::stderr().lock()),
        }
    }
}

/// Initialize the tracing logger.
///
/// Filtering is controlled by the `RUST_LOG` environment variable. A failure to install the
/// logger is reported as an error and scanning continues without logging.
pub fn init_logger(dst: LogDestination) {
    #[cfg(not(feature = "tracing"))]
    {
        let _ = dst;
        if std::env::var_os("RUST_LOG").is_some() {
            let msg = "`RUST_LOG` is set, but \"tracing\" support was not enabled at compile time";
            DiagCtxt::with_stderr_emitter().warn(msg).emit();
        }
    }

    #[cfg(feature = "tracing")]
    if let Err(e) = try_init_logger(dst) {
        DiagCtxt::with_stderr_emitter().err(format!("failed to initialize logger: {e}")).emit();
    }
}

#[cfg(feature = "tracing")]
fn try_init_logger(dst: LogDestination) -> Result<(), String> {
    use tracing_subscriber::prelude::*;

    tracing_subscriber::Registry::default()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(dst))
        .try_init()
        .map_err(|e| e.to_string())
}
