//! scriptfmt
//!
//! A source-preserving code formatter. Given source text and a set of style
//! options, produces equivalent source text laid out according to those
//! options: quote style, semicolon policy, indentation, punctuator spacing,
//! and single-line vs. multi-line layout for aggregates, calls, and control
//! flow.
//!
//! The formatter never reparses its own output to "guess" structure: it
//! keeps the full source text as a token stream (see [`token_stream`]) and
//! rewrites that stream under the guidance of an AST supplied by an external
//! parser (see [`parser_api`]). The [`layout`] module is the seam between
//! the two: it owns the stream plus a map from AST node to stream position,
//! and exposes the primitive operations every style rule is built from.
//!
//! ```rust,ignore
//! use scriptfmt::{Formatter, Options};
//!
//! let formatter = Formatter::new(Box::new(my_parser), Options::default(), vec![])?;
//! let output = formatter.format(source_text, None)?;
//! ```

pub mod debug;
pub mod error;
pub mod layout;
pub mod options;
pub mod ordered_set;
pub mod parser_api;
pub mod passes;
pub mod token_stream;
pub mod visitor;
pub mod wrapper;

mod formatter;

pub use error::{BuildWarning, FormatError, OptionError};
pub use formatter::Formatter;
pub use options::{Options, QuoteStyle};
pub use parser_api::{ParseOptions, ParsedProgram, Parser, RawComment, RawToken, VisitorKeys};
