use super::{
    Diag, DiagBuilder, DiagMsg, DynEmitter, EmissionGuarantee, ErrorGuaranteed, HumanBufferEmitter,
    HumanEmitter, Level, SilentEmitter,
};
use crate::Loc;
use anstream::ColorChoice;
use parking_lot::Mutex;

/// A handler deals with errors and other scanner output.
///
/// Every diagnostic is handed to the configured [`Emitter`](super::Emitter); the context itself
/// only keeps counts.
pub struct DiagCtxt {
    inner: Mutex<DiagCtxtInner>,
}

struct DiagCtxtInner {
    emitter: Box<DynEmitter>,

    /// The number of errors that have been emitted.
    err_count: usize,
    /// The number of warnings that have been emitted.
    warn_count: usize,

    can_emit_warnings: bool,
}

impl Default for DiagCtxt {
    fn default() -> Self {
        Self::with_stderr_emitter()
    }
}

impl DiagCtxt {
    /// Creates a new `DiagCtxt` with the given diagnostics emitter.
    pub fn new(emitter: Box<DynEmitter>) -> Self {
        Self {
            inner: Mutex::new(DiagCtxtInner {
                emitter,
                err_count: 0,
                warn_count: 0,
                can_emit_warnings: true,
            }),
        }
    }

    /// Creates a new `DiagCtxt` with a stderr emitter.
    pub fn with_stderr_emitter() -> Self {
        Self::with_stderr_emitter_and_color(ColorChoice::Auto)
    }

    /// Creates a new `DiagCtxt` with a stderr emitter and a color choice.
    pub fn with_stderr_emitter_and_color(color_choice: ColorChoice) -> Self {
        Self::new(Box::new(HumanEmitter::stderr(color_choice)))
    }

    /// Creates a new `DiagCtxt` with a silent emitter.
    ///
    /// Diagnostics are still counted.
    pub fn with_silent_emitter() -> Self {
        Self::new(Box::new(SilentEmitter::new()))
    }

    /// Creates a new `DiagCtxt` with a human emitter that emits diagnostics to a local buffer.
    ///
    /// The rendered output can be retrieved with
    /// [`emitted_diagnostics`](Self::emitted_diagnostics).
    pub fn with_buffer_emitter(color_choice: ColorChoice) -> Self {
        Self::new(Box::new(HumanBufferEmitter::new(color_choice)))
    }

    /// Disables emitting warnings.
    pub fn disable_warnings(mut self) -> Self {
        self.inner.get_mut().can_emit_warnings = false;
        self
    }

    /// Emits the given diagnostic with this context.
    ///
    /// Returns `Some` if the diagnostic is an error.
    pub fn emit_diagnostic(&self, diagnostic: Diag) -> Option<ErrorGuaranteed> {
        self.inner.lock().emit_diagnostic(diagnostic)
    }

    /// Returns the number of errors that have been emitted.
    #[inline]
    pub fn err_count(&self) -> usize {
        self.inner.lock().err_count
    }

    /// Returns the number of warnings that have been emitted.
    #[inline]
    pub fn warn_count(&self) -> usize {
        self.inner.lock().warn_count
    }

    /// Returns `Err` if any errors have been emitted.
    pub fn has_errors(&self) -> Result<(), ErrorGuaranteed> {
        if self.inner.lock().has_errors() {
            #[allow(deprecated)]
            Err(ErrorGuaranteed::new_unchecked())
        } else {
            Ok(())
        }
    }

    /// Returns the rendered diagnostics if the emitter is a [`HumanBufferEmitter`].
    pub fn emitted_diagnostics(&self) -> Option<String> {
        self.inner.lock().emitter.local_buffer().map(ToString::to_string)
    }

    /// Emits the final error count, if any.
    ///
    /// Returns `Err` if any errors have been emitted.
    pub fn print_error_count(&self) -> Result<(), ErrorGuaranteed> {
        let err_count = self.err_count();
        if err_count == 0 {
            return Ok(());
        }
        let msg = format!("aborting due to {err_count} previous error{}", pluralize!(err_count));
        let mut inner = self.inner.lock();
        inner.emitter.emit_diagnostic(&Diag::new(Level::Error, msg));
        #[allow(deprecated)]
        Err(ErrorGuaranteed::new_unchecked())
    }
}

/// Diagnostic constructors.
impl DiagCtxt {
    /// Creates a builder at the given `level` with the given `msg`.
    pub fn diag<G: EmissionGuarantee>(
        &self,
        level: Level,
        msg: impl Into<DiagMsg>,
    ) -> DiagBuilder<'_, G> {
        DiagBuilder::new(self, level, msg)
    }

    /// Creates a builder at the `Error` level with the given `msg`.
    pub fn err(&self, msg: impl Into<DiagMsg>) -> DiagBuilder<'_, ErrorGuaranteed> {
        self.diag(Level::Error, msg)
    }

    /// Creates a builder at the `Warning` level with the given `msg`.
    ///
    /// Attempting to `.emit()` the builder will only emit if `can_emit_warnings` is `true`.
    pub fn warn(&self, msg: impl Into<DiagMsg>) -> DiagBuilder<'_, ()> {
        self.diag(Level::Warning, msg)
    }

    /// Creates a builder at the `Help` level with the given `msg`.
    pub fn help(&self, msg: impl Into<DiagMsg>) -> DiagBuilder<'_, ()> {
        self.diag(Level::Help, msg)
    }

    /// Creates a builder at the `Note` level with the given `msg`.
    pub fn note(&self, msg: impl Into<DiagMsg>) -> DiagBuilder<'_, ()> {
        self.diag(Level::Note, msg)
    }

    /// Creates a builder at the `Info` level with the given `msg`.
    pub fn info(&self, msg: impl Into<DiagMsg>) -> DiagBuilder<'_, ()> {
        self.diag(Level::Info, msg)
    }

    /// Emits a message at `level` anchored to `loc` in one call.
    pub fn report(&self, loc: Loc<'_>, level: Level, msg: impl Into<DiagMsg>) {
        self.diag::<()>(level, msg).loc(loc).emit();
    }
}

impl DiagCtxtInner {
    fn emit_diagnostic(&mut self, diagnostic: Diag) -> Option<ErrorGuaranteed> {
        if diagnostic.level == Level::Warning && !self.can_emit_warnings {
            trace!(msg = %diagnostic.msg, "suppressed warning");
            return None;
        }

        // Every call is forwarded: identical diagnostics are not deduplicated.
        self.emitter.emit_diagnostic(&diagnostic);

        if diagnostic.is_error() {
            self.err_count += 1;
            #[allow(deprecated)]
            Some(ErrorGuaranteed::new_unchecked())
        } else {
            if diagnostic.level == Level::Warning {
                self.warn_count += 1;
            }
            None
        }
    }

    fn has_errors(&self) -> bool {
        self.err_count > 0
    }
}
