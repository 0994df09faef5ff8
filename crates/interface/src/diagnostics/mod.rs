//! Diagnostics implementation.
//!
//! A [`Diag`] is a single message at a [`Level`], optionally anchored to a source [`Loc`].
//! Diagnostics are built through a [`DiagCtxt`] and handed to its [`Emitter`].

use crate::Loc;
use anstyle::{AnsiColor, Color};
use std::{borrow::Cow, fmt};

mod builder;
pub use builder::{DiagBuilder, EmissionGuarantee};

mod context;
pub use context::DiagCtxt;

mod emitter;
#[cfg(feature = "json")]
pub use emitter::JsonEmitter;
pub use emitter::{DynEmitter, Emitter, HumanBufferEmitter, HumanEmitter, SilentEmitter};

/// Useful type to use with [`Result`] indicate that an error has already been reported to the user,
/// so no need to continue checking.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ErrorGuaranteed(());

impl fmt::Display for ErrorGuaranteed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an error has already been reported")
    }
}

impl std::error::Error for ErrorGuaranteed {}

impl ErrorGuaranteed {
    /// Creates a new `ErrorGuaranteed`.
    ///
    /// Use of this method is discouraged.
    #[inline]
    #[deprecated = "`ErrorGuaranteed` must only be constructed by `DiagCtxt::emit_diagnostic`"]
    pub const fn new_unchecked() -> Self {
        Self(())
    }
}

/// A diagnostic message.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DiagMsg {
    inner: Cow<'static, str>,
}

impl From<&'static str> for DiagMsg {
    fn from(value: &'static str) -> Self {
        Self { inner: Cow::Borrowed(value) }
    }
}

impl From<String> for DiagMsg {
    fn from(value: String) -> Self {
        Self { inner: Cow::Owned(value) }
    }
}

impl From<Cow<'static, str>> for DiagMsg {
    fn from(value: Cow<'static, str>) -> Self {
        Self { inner: value }
    }
}

impl fmt::Display for DiagMsg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner)
    }
}

impl DiagMsg {
    /// Returns the message as a string.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.inner
    }
}

/// Diagnostic level.
///
/// The level is the severity label printed in front of the message, e.g. `ERROR` or `INFO`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Level {
    /// A problem in the scanned input. Counted by [`DiagCtxt::err_count`].
    ///
    /// Its `EmissionGuarantee` is `ErrorGuaranteed`.
    Error,

    /// A suspicious construct that does not prevent scanning from continuing.
    ///
    /// Its `EmissionGuarantee` is `()`.
    Warning,

    /// A message giving additional context, usually attached to another diagnostic.
    ///
    /// Its `EmissionGuarantee` is `()`.
    Note,

    /// A message suggesting how to fix something.
    ///
    /// Its `EmissionGuarantee` is `()`.
    Help,

    /// Plain informational output, such as a token listing.
    ///
    /// Its `EmissionGuarantee` is `()`.
    Info,
}

impl Level {
    /// Returns the string representation of the level.
    pub fn to_str(self) -> &'static str {
        match self {
            Self::Error => "ERROR",
            Self::Warning => "WARNING",
            Self::Note => "NOTE",
            Self::Help => "HELP",
            Self::Info => "INFO",
        }
    }

    /// Returns whether this level is an error.
    #[inline]
    pub fn is_error(self) -> bool {
        matches!(self, Self::Error)
    }

    /// Returns the style of this level.
    #[inline]
    pub const fn style(self) -> anstyle::Style {
        anstyle::Style::new().fg_color(self.color()).bold()
    }

    /// Returns the color of this level.
    #[inline]
    pub const fn color(self) -> Option<Color> {
        match self.ansi_color() {
            Some(c) => Some(Color::Ansi(c)),
            None => None,
        }
    }

    /// Returns the ANSI color of this level.
    pub const fn ansi_color(self) -> Option<AnsiColor> {
        match self {
            Self::Error => Some(AnsiColor::BrightRed),
            Self::Warning => Some(AnsiColor::BrightYellow),
            Self::Note => Some(AnsiColor::BrightGreen),
            Self::Help => Some(AnsiColor::BrightCyan),
            Self::Info => None,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

/// A diagnostic: a leveled message, an optional source location and any attached sub-diagnostics.
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Diag {
    pub(crate) level: Level,
    pub msg: DiagMsg,
    pub loc: Option<Loc<'static>>,
    pub children: Vec<SubDiagnostic>,
}

/// A "sub"-diagnostic attached to a parent diagnostic.
/// For example, a note attached to an error.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SubDiagnostic {
    pub level: Level,
    pub msg: DiagMsg,
}

impl Diag {
    /// Creates a new `Diag` with a single message.
    pub fn new<M: Into<DiagMsg>>(level: Level, msg: M) -> Self {
        Self { level, msg: msg.into(), loc: None, children: Vec::new() }
    }

    /// Returns whether this diagnostic is an error.
    #[inline]
    pub fn is_error(&self) -> bool {
        self.level.is_error()
    }

    /// Returns the level of this diagnostic.
    #[inline]
    pub fn level(&self) -> Level {
        self.level
    }

    /// Returns the message of this diagnostic.
    #[inline]
    pub fn label(&self) -> &str {
        self.msg.as_str()
    }

    /// Sets the location of this diagnostic.
    pub fn loc(&mut self, loc: Loc<'_>) -> &mut Self {
        self.loc = Some(loc.into_owned());
        self
    }

    /// Add a note to this diagnostic.
    pub fn note(&mut self, msg: impl Into<DiagMsg>) -> &mut Self {
        self.sub(Level::Note, msg)
    }

    /// Add a help message attached to this diagnostic.
    pub fn help(&mut self, msg: impl Into<DiagMsg>) -> &mut Self {
        self.sub(Level::Help, msg)
    }

    fn sub(&mut self, level: Level, msg: impl Into<DiagMsg>) -> &mut Self {
        self.children.push(SubDiagnostic { level, msg: msg.into() });
        self
    }
}
