//! Error types for reading and querying ASCII schematic documents.
//!
//! Parse failures abort the whole read and carry enough location data for a
//! miette report. Query failures are local: callers recover with defaults or
//! by matching on the variant.

use miette::{Diagnostic, LabeledSpan, NamedSource, SourceSpan};
use std::fmt;
use std::io;
use std::sync::Arc;
use thiserror::Error;

// ============================================================================
// PARSE ERRORS
// ============================================================================

/// Where the character source ran dry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EofContext {
    /// Inside a `"..."` literal.
    QuotedText,
    /// Reading the name token right after `(`.
    GroupName,
    /// Inside an open group, before its closing `)`.
    List,
}

impl fmt::Display for EofContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EofContext::QuotedText => write!(f, "quoted text"),
            EofContext::GroupName => write!(f, "group name"),
            EofContext::List => write!(f, "list"),
        }
    }
}

/// What went wrong while reading.
#[derive(Error, Debug)]
pub enum ParseErrorKind {
    #[error("unexpected end of input inside {context}")]
    UnexpectedEof { context: EofContext },

    #[error("unexpected ')' with no open group")]
    UnexpectedClose,

    #[error("invalid UTF-8 sequence starting with byte 0x{byte:02x}")]
    InvalidUtf8 { byte: u8 },

    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
}

impl ParseErrorKind {
    pub const fn code_suffix(&self) -> &'static str {
        match self {
            Self::UnexpectedEof { .. } => "unexpected_eof",
            Self::UnexpectedClose => "unexpected_close",
            Self::InvalidUtf8 { .. } => "invalid_utf8",
            Self::Io(_) => "io",
        }
    }
}

/// A failed parse: the kind, the byte offset at which the source failed, and
/// optionally the source text for rendering.
#[derive(Debug)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub offset: usize,
    source: Option<Arc<NamedSource<String>>>,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, offset: usize) -> Self {
        Self {
            kind,
            offset,
            source: None,
        }
    }

    pub fn unexpected_eof(context: EofContext, offset: usize) -> Self {
        Self::new(ParseErrorKind::UnexpectedEof { context }, offset)
    }

    /// Attaches the document text so the error renders with a labelled snippet.
    pub fn with_source(mut self, name: impl AsRef<str>, content: impl Into<String>) -> Self {
        self.source = Some(Arc::new(NamedSource::new(name, content.into())));
        self
    }

    pub fn is_unexpected_eof(&self) -> bool {
        matches!(self.kind, ParseErrorKind::UnexpectedEof { .. })
    }

    fn label(&self) -> &'static str {
        match self.kind {
            ParseErrorKind::UnexpectedEof { .. } => "input ends here",
            ParseErrorKind::UnexpectedClose => "unmatched ')'",
            ParseErrorKind::InvalidUtf8 { .. } => "invalid byte",
            ParseErrorKind::Io(_) => "read failed here",
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parse error: {}", self.kind)
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ParseErrorKind::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl Diagnostic for ParseError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = format!("dipascii::parse::{}", self.kind.code_suffix());
        Some(Box::new(code) as Box<dyn fmt::Display>)
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self.kind {
            ParseErrorKind::UnexpectedEof {
                context: EofContext::QuotedText,
            } => "a closing '\"' is missing",
            ParseErrorKind::UnexpectedEof { .. } => {
                "a closing ')' is missing; the file may be truncated"
            }
            ParseErrorKind::UnexpectedClose => "remove the extra ')' or add the missing '('",
            _ => return None,
        };
        Some(Box::new(help) as Box<dyn fmt::Display>)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        // Labels without source code make miette's graphical handler complain.
        self.source.as_ref()?;
        let span = SourceSpan::from(self.offset..self.offset);
        Some(Box::new(std::iter::once(LabeledSpan::new_with_span(
            Some(self.label().to_string()),
            span,
        ))))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        self.source
            .as_deref()
            .map(|src| src as &dyn miette::SourceCode)
    }
}

// ============================================================================
// QUERY ERRORS
// ============================================================================

/// Failures of the `(Name Value)` attribute accessors on [`crate::ast::List`].
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum QueryError {
    #[error("missing attribute '{name}'")]
    #[diagnostic(
        code(dipascii::query::missing),
        help("supply a default with `get_or` or check the document structure")
    )]
    MissingAttribute { name: String },

    #[error("malformed attribute '{name}': expected exactly one item, found {found}")]
    #[diagnostic(code(dipascii::query::malformed))]
    MalformedAttribute { name: String, found: usize },

    #[error("attribute '{name}' is {found}, expected {expected}")]
    #[diagnostic(code(dipascii::query::type_mismatch))]
    TypeMismatch {
        name: String,
        expected: &'static str,
        found: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eof_display_names_context() {
        let err = ParseError::unexpected_eof(EofContext::QuotedText, 7);
        assert_eq!(
            err.to_string(),
            "Parse error: unexpected end of input inside quoted text"
        );
        assert!(err.is_unexpected_eof());
    }

    #[test]
    fn labels_only_with_source() {
        let err = ParseError::unexpected_eof(EofContext::List, 3);
        assert!(err.labels().is_none());
        assert!(err.source_code().is_none());

        let err = err.with_source("doc.asc", "(A 1");
        let labels: Vec<_> = err.labels().unwrap().collect();
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].offset(), 3);
        assert!(err.source_code().is_some());
    }

    #[test]
    fn code_includes_kind() {
        let err = ParseError::new(ParseErrorKind::InvalidUtf8 { byte: 0xff }, 0);
        let code = err.code().unwrap().to_string();
        assert_eq!(code, "dipascii::parse::invalid_utf8");
    }

    #[test]
    fn unexpected_close_has_own_code_and_help() {
        let err = ParseError::new(ParseErrorKind::UnexpectedClose, 4).with_source("doc.asc", "(A) )");
        assert_eq!(err.to_string(), "Parse error: unexpected ')' with no open group");
        assert_eq!(err.code().unwrap().to_string(), "dipascii::parse::unexpected_close");
        assert!(err.help().unwrap().to_string().contains("extra ')'"));
        let labels: Vec<_> = err.labels().unwrap().collect();
        assert_eq!(labels[0].offset(), 4);
        assert_eq!(labels[0].label(), Some("unmatched ')'"));
        assert!(!err.is_unexpected_eof());
    }
}
