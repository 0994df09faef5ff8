use super::{Emitter, human::render, io_panic};
use crate::{Loc, diagnostics::Diag};
use serde::Serialize;
use std::io;

/// Diagnostic emitter that emits diagnostics as JSON, one object per line.
pub struct JsonEmitter {
    writer: Box<dyn io::Write + Send>,
    pretty: bool,
}

impl Emitter for JsonEmitter {
    fn emit_diagnostic(&mut self, diagnostic: &Diag) {
        let diagnostic = Diagnostic::from_diag(diagnostic);
        self.emit(&diagnostic).unwrap_or_else(|e| io_panic(e));
    }
}

impl JsonEmitter {
    /// Creates a new `JsonEmitter` that writes to given writer.
    pub fn new(writer: Box<dyn io::Write + Send>) -> Self {
        Self { writer, pretty: false }
    }

    /// Sets whether to pretty print the JSON.
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    fn emit<T: ?Sized + Serialize>(&mut self, value: &T) -> io::Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut *self.writer, value)
        } else {
            serde_json::to_writer(&mut *self.writer, value)
        }?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()
    }
}

#[derive(Serialize)]
struct Diagnostic<'a> {
    level: &'static str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<&'a Loc<'static>>,
    children: Vec<SubDiagnostic<'a>>,
    rendered: String,
}

#[derive(Serialize)]
struct SubDiagnostic<'a> {
    level: &'static str,
    message: &'a str,
}

impl<'a> Diagnostic<'a> {
    fn from_diag(diag: &'a Diag) -> Self {
        Self {
            level: diag.level.to_str(),
            message: diag.label(),
            location: diag.loc.as_ref(),
            children: diag
                .children
                .iter()
                .map(|sub| SubDiagnostic { level: sub.level.to_str(), message: sub.msg.as_str() })
                .collect(),
            rendered: render(diag, false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Level;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct Shared(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Shared {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn one_object_per_line() {
        let sink = Shared::default();
        let mut emitter = JsonEmitter::new(Box::new(sink.clone()));

        let mut diag = Diag::new(Level::Error, "Expected SYMBOL but got END");
        diag.loc(Loc::new("in.txt", 3, 1));
        emitter.emit_diagnostic(&diag);
        emitter.emit_diagnostic(&Diag::new(Level::Info, "done"));

        let out = String::from_utf8(sink.0.lock().clone()).unwrap();
        let lines = out.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["level"], "ERROR");
        assert_eq!(first["message"], "Expected SYMBOL but got END");
        assert_eq!(first["location"]["file"], "in.txt");
        assert_eq!(first["location"]["line"], 3);
        assert_eq!(first["location"]["column"], 1);
        assert_eq!(first["rendered"], "in.txt:3:1: ERROR: Expected SYMBOL but got END\n");

        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert!(second.get("location").is_none());
    }
}
