//! Public error types for the crispy API.
//!
//! Evaluation never fails at this level: runtime failures are error values.
//! What can fail is turning source text into a program.

use core::fmt;

use thiserror::Error;

use crate::parser::{ParseError, Span};

/// Public error type for all crispy operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The source text could not be parsed.
    ///
    /// Carries the source so that diagnostics can be rendered against it.
    #[error("Parse failed with {} error(s)", .diagnostics.len())]
    Parse {
        src: String,
        diagnostics: Vec<Diagnostic>,
    },
}

impl Error {
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            Error::Parse { diagnostics, .. } => diagnostics,
        }
    }

    pub fn source_text(&self) -> &str {
        match self {
            Error::Parse { src, .. } => src,
        }
    }
}

/// A diagnostic message with a source location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity level.
    pub severity: Severity,

    /// Primary diagnostic message.
    pub message: String,

    /// Source location of the primary issue.
    pub span: Span,

    /// Optional help text suggesting how to fix the issue.
    pub help: Option<String>,

    /// Optional error code (e.g., "P001") for documentation lookup.
    pub code: Option<String>,
}

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

impl ParseError {
    /// Convert to a Diagnostic for API boundary
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic {
            severity: Severity::Error,
            message: self.kind.to_string(),
            span: self.span.clone(),
            help: self.help().map(str::to_string),
            code: Some(self.code().to_string()),
        }
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        let diagnostics = vec![err.to_diagnostic()];
        Error::Parse {
            src: err.src,
            diagnostics,
        }
    }
}
