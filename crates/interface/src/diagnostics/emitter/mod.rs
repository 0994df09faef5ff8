use super::Diag;
use std::any::Any;

mod human;
pub use human::{HumanBufferEmitter, HumanEmitter};

#[cfg(feature = "json")]
mod json;
#[cfg(feature = "json")]
pub use json::JsonEmitter;

/// Dynamic diagnostic emitter. See [`Emitter`].
pub type DynEmitter = dyn Emitter + Send;

/// Diagnostic emitter.
///
/// This is the sink every diagnostic ends up in. Implementations decide how (and whether) a
/// diagnostic is rendered.
pub trait Emitter: Any {
    /// Emits a diagnostic.
    fn emit_diagnostic(&mut self, diagnostic: &Diag);

    /// Returns `true` if we can use colors in the current output stream.
    #[inline]
    fn supports_color(&self) -> bool {
        false
    }
}

impl DynEmitter {
    pub(crate) fn local_buffer(&self) -> Option<&str> {
        (self as &dyn Any).downcast_ref::<HumanBufferEmitter>().map(HumanBufferEmitter::buffer)
    }
}

/// Diagnostic emitter that drops every diagnostic.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentEmitter(());

impl SilentEmitter {
    /// Creates a new `SilentEmitter`.
    pub fn new() -> Self {
        Self(())
    }
}

impl Emitter for SilentEmitter {
    #[inline]
    fn emit_diagnostic(&mut self, _diagnostic: &Diag) {}
}

#[cold]
#[inline(never)]
fn io_panic(error: std::io::Error) -> ! {
    panic!("failed to emit diagnostic: {error}");
}
