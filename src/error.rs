//! Error types for the formatting pipeline.
//!
//! Every fallible boundary in this crate reports through one of the enums
//! here rather than `Box<dyn Error>` or a string, following the hand-rolled
//! `Display`/`Error` style used throughout this codebase's phase boundaries.

use std::fmt;

/// Top-level error returned by [`crate::Formatter::format`].
#[derive(Debug)]
pub enum FormatError {
    /// The supplied parser failed to produce an AST.
    Parse(String),
    /// An internal invariant was violated while building or rewriting the
    /// token stream. This indicates a bug in a style rule or the stream
    /// builder, not a malformed input.
    Invariant(InvariantViolation),
    /// An option value was invalid. Also returned directly from
    /// `Formatter::new`.
    Option(OptionError),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::Parse(msg) => write!(f, "parse error: {}", msg),
            FormatError::Invariant(err) => write!(f, "internal invariant violated: {}", err),
            FormatError::Option(err) => write!(f, "invalid option: {}", err),
        }
    }
}

impl std::error::Error for FormatError {}

impl From<OptionError> for FormatError {
    fn from(err: OptionError) -> Self {
        FormatError::Option(err)
    }
}

impl From<InvariantViolation> for FormatError {
    fn from(err: InvariantViolation) -> Self {
        FormatError::Invariant(err)
    }
}

/// An internal consistency failure in the ordered set or token stream.
#[derive(Debug, Clone)]
pub enum InvariantViolation {
    /// A handle was looked up that is not a member of the set/stream.
    NotFound(String),
    /// An insert targeted a handle already present in the set.
    DuplicateItem(String),
    /// A node lookup found no recorded boundary parts.
    MissingBoundary { start: usize, end: usize },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantViolation::NotFound(what) => write!(f, "not found: {}", what),
            InvariantViolation::DuplicateItem(what) => write!(f, "duplicate item: {}", what),
            InvariantViolation::MissingBoundary { start, end } => write!(
                f,
                "no boundary parts recorded for node range ({}, {})",
                start, end
            ),
        }
    }
}

impl std::error::Error for InvariantViolation {}

/// Raised at `Formatter` construction when an `Options` value is invalid.
#[derive(Debug, Clone)]
pub enum OptionError {
    NegativeMaxEmptyLines(i64),
    ZeroIndentWidth,
    UnknownQuoteStyle(String),
    ZeroMaxLineLength,
    /// A literal indent unit (`Options.indent` as a string rather than a
    /// column count) contained something other than spaces/tabs.
    InvalidIndentLiteral(String),
}

impl fmt::Display for OptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionError::NegativeMaxEmptyLines(n) => {
                write!(f, "maxEmptyLines must be non-negative, got {}", n)
            }
            OptionError::ZeroIndentWidth => write!(f, "indent width must be at least 1"),
            OptionError::UnknownQuoteStyle(s) => write!(f, "unknown quote style: {}", s),
            OptionError::ZeroMaxLineLength => write!(f, "maxLineLength must be at least 1"),
            OptionError::InvalidIndentLiteral(s) => {
                write!(f, "indent literal must contain only spaces/tabs, got {:?}", s)
            }
        }
    }
}

impl std::error::Error for OptionError {}

/// A non-fatal anomaly recorded while building a token stream: a position in
/// the source text that was neither a token, a comment, nor a whitespace run.
/// The builder advances past it and keeps going; a caller that cares can
/// inspect `Layout::warnings()`.
#[derive(Debug, Clone)]
pub struct BuildWarning {
    pub offset: usize,
    pub message: String,
}

impl fmt::Display for BuildWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "at offset {}: {}", self.offset, self.message)
    }
}
