//! Formatting options.
//!
//! An `Options` value is validated once, at `Formatter` construction
//! (see [`Options::validate`]), and is immutable for the formatter's
//! lifetime. It carries no file-system or environment lookups: discovering
//! an options file is a concern of the (out-of-scope) CLI layer, not this
//! crate.

use serde::{Deserialize, Serialize};

use crate::error::OptionError;

/// Matches a literal indent unit that is entirely spaces and/or tabs.
/// `indent` as a literal string (`"\t"`, `"  "`) is meant to stand in for a
/// column-based indent, not to smuggle arbitrary text into every
/// indentation slot, so this is checked once at construction the same way
/// the teacher's lexer validates marker text against a fixed pattern
/// before accepting it.
fn indent_literal_pattern() -> &'static regex::Regex {
    static PATTERN: std::sync::OnceLock<regex::Regex> = std::sync::OnceLock::new();
    PATTERN.get_or_init(|| regex::Regex::new(r"^[ \t]*$").expect("static pattern is valid"))
}

/// String-quoting style to normalize to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStyle {
    Single,
    Double,
}

impl QuoteStyle {
    pub fn quote_char(self) -> char {
        match self {
            QuoteStyle::Single => '\'',
            QuoteStyle::Double => '"',
        }
    }

    pub fn other_char(self) -> char {
        match self {
            QuoteStyle::Single => '"',
            QuoteStyle::Double => '\'',
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "single" => Some(QuoteStyle::Single),
            "double" => Some(QuoteStyle::Double),
            _ => None,
        }
    }
}

/// The indent unit: either a column count (expanded to spaces) or a literal
/// string such as `"\t"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IndentUnit {
    Width(usize),
    Literal(String),
}

impl IndentUnit {
    pub fn as_str(&self, scratch: &mut String) -> String {
        match self {
            IndentUnit::Width(n) => {
                scratch.clear();
                scratch.push_str(&" ".repeat(*n));
                scratch.clone()
            }
            IndentUnit::Literal(s) => s.clone(),
        }
    }
}

/// Full set of style options the formatter honors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Options {
    pub indent: IndentUnit,
    pub tab_width: usize,
    pub line_endings: String,
    pub quotes: QuoteStyle,
    pub semicolons: bool,
    pub collapse_whitespace: bool,
    pub max_empty_lines: usize,
    pub trailing_commas: bool,
    pub max_line_length: usize,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            indent: IndentUnit::Width(2),
            tab_width: 2,
            line_endings: "\n".to_string(),
            quotes: QuoteStyle::Double,
            semicolons: true,
            collapse_whitespace: true,
            max_empty_lines: 1,
            trailing_commas: false,
            max_line_length: 80,
        }
    }
}

impl Options {
    /// Validate field values that can't be expressed in the type system
    /// alone (e.g. a zero-width indent). Called once by `Formatter::new`.
    pub fn validate(&self) -> Result<(), OptionError> {
        if let IndentUnit::Width(0) = self.indent {
            return Err(OptionError::ZeroIndentWidth);
        }
        if self.max_line_length == 0 {
            return Err(OptionError::ZeroMaxLineLength);
        }
        if let IndentUnit::Literal(s) = &self.indent {
            if !indent_literal_pattern().is_match(s) {
                return Err(OptionError::InvalidIndentLiteral(s.clone()));
            }
        }
        Ok(())
    }

    /// The indent unit rendered as a string (one level's worth).
    pub fn indent_str(&self) -> String {
        match &self.indent {
            IndentUnit::Width(n) => " ".repeat(*n),
            IndentUnit::Literal(s) => s.clone(),
        }
    }
}
