use super::{Diag, Emitter, io_panic};
use crate::{Loc, diagnostics::Level};
use anstream::{AutoStream, ColorChoice};
use std::{
    io::{self, Write},
    sync::OnceLock,
};

type Writer = dyn Write + Send + 'static;

/// Diagnostic emitter that emits to an arbitrary [`io::Write`] writer in human-readable format.
///
/// Every diagnostic is rendered as `<file>:<line>:<col>: <LEVEL>: <message>`, one line per
/// diagnostic and attached sub-diagnostic. The location prefix is omitted when the diagnostic
/// has none.
pub struct HumanEmitter {
    writer: AutoStream<Box<Writer>>,
}

impl Emitter for HumanEmitter {
    fn emit_diagnostic(&mut self, diagnostic: &Diag) {
        let rendered = render(diagnostic, true);
        emit_to_destination(&rendered, &mut self.writer).unwrap_or_else(|e| io_panic(e));
    }

    fn supports_color(&self) -> bool {
        match self.writer.current_choice() {
            ColorChoice::AlwaysAnsi | ColorChoice::Always => true,
            ColorChoice::Auto | ColorChoice::Never => false,
        }
    }
}

impl HumanEmitter {
    /// Creates a new `HumanEmitter` that writes to given writer.
    ///
    /// Note that a color choice of `Auto` will be treated as `Never` because the writer opaque
    /// at this point. Prefer calling [`AutoStream::choice`] on the writer if it is known
    /// before-hand.
    pub fn new<W: Write + Send + 'static>(writer: W, color: ColorChoice) -> Self {
        Self { writer: AutoStream::new(Box::new(writer), color) }
    }

    /// Creates a new `HumanEmitter` that writes to stderr.
    pub fn stderr(color_choice: ColorChoice) -> Self {
        // `io::Stderr` is not buffered.
        Self::new(io::BufWriter::new(io::stderr()), stderr_choice(color_choice))
    }
}

/// Diagnostic emitter that emits diagnostics in human-readable format to a local buffer.
pub struct HumanBufferEmitter {
    buffer: String,
    styled: bool,
}

impl Emitter for HumanBufferEmitter {
    fn emit_diagnostic(&mut self, diagnostic: &Diag) {
        self.buffer.push_str(&render(diagnostic, self.styled));
    }

    #[inline]
    fn supports_color(&self) -> bool {
        self.styled
    }
}

impl HumanBufferEmitter {
    /// Creates a new `HumanBufferEmitter` that writes to a local buffer.
    ///
    /// A buffer is never a terminal, so `Auto` disables styling.
    pub fn new(color_choice: ColorChoice) -> Self {
        let styled = matches!(color_choice, ColorChoice::Always | ColorChoice::AlwaysAnsi);
        Self { buffer: String::new(), styled }
    }

    /// Returns a reference to the buffer.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }
}

/// Renders a diagnostic and its children, one line each.
pub(crate) fn render(diag: &Diag, styled: bool) -> String {
    let mut out = String::new();
    render_line(&mut out, diag.loc.as_ref(), diag.level, diag.label(), styled);
    for child in &diag.children {
        render_line(&mut out, diag.loc.as_ref(), child.level, child.msg.as_str(), styled);
    }
    out
}

fn render_line(out: &mut String, loc: Option<&Loc<'_>>, level: Level, msg: &str, styled: bool) {
    if let Some(loc) = loc {
        if styled {
            let style = anstyle::Style::new().bold();
            out.push_str(&format!("{}{loc}{}: ", style.render(), style.render_reset()));
        } else {
            out.push_str(&format!("{loc}: "));
        }
    }
    if styled {
        let style = level.style();
        out.push_str(&format!("{}{level}{}: ", style.render(), style.render_reset()));
    } else {
        out.push_str(&format!("{level}: "));
    }
    out.push_str(msg);
    out.push('\n');
}

fn stderr_choice(color_choice: ColorChoice) -> ColorChoice {
    static AUTO: OnceLock<ColorChoice> = OnceLock::new();
    if color_choice == ColorChoice::Auto {
        *AUTO.get_or_init(|| anstream::AutoStream::choice(&std::io::stderr()))
    } else {
        color_choice
    }
}

fn emit_to_destination(rendered: &str, dst: &mut impl Write) -> io::Result<()> {
    dst.write_all(rendered.as_bytes())?;
    dst.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_plain() {
        let mut diag = Diag::new(Level::Error, "Expected SYMBOL but got INT `5`");
        diag.loc(Loc::new("example.input", 2, 17));
        assert_eq!(
            render(&diag, false),
            "example.input:2:17: ERROR: Expected SYMBOL but got INT `5`\n"
        );
    }

    #[test]
    fn render_without_loc() {
        let mut diag = Diag::new(Level::Warning, "no input");
        diag.help("pass a file name");
        assert_eq!(render(&diag, false), "WARNING: no input\nHELP: pass a file name\n");
    }

    #[test]
    fn render_styled() {
        let mut diag = Diag::new(Level::Error, "bad");
        diag.loc(Loc::new("f", 1, 1));
        let out = render(&diag, true);
        assert!(out.contains('\u{1b}'), "{out:?}");
        assert!(out.ends_with("bad\n"));
    }

    #[test]
    fn writer_strips_styles() {
        #[derive(Clone, Default)]
        struct Shared(std::sync::Arc<parking_lot::Mutex<Vec<u8>>>);

        impl Write for Shared {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                self.0.lock().extend_from_slice(buf);
                Ok(buf.len())
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let sink = Shared::default();
        let mut emitter = HumanEmitter::new(sink.clone(), ColorChoice::Never);
        let mut diag = Diag::new(Level::Info, "INT: 180");
        diag.loc(Loc::new("example.input", 1, 10));
        emitter.emit_diagnostic(&diag);
        assert!(!emitter.supports_color());
        let written = String::from_utf8(sink.0.lock().clone()).unwrap();
        assert_eq!(written, "example.input:1:10: INFO: INT: 180\n");
    }
}
