//! The boundary to the (out-of-scope) lexical/grammar parser.
//!
//! This crate never implements a grammar. It consumes one through this
//! module's contract: a flat array of tokens, a flat array of comments, a
//! root AST node, and a visitor-key table describing which fields of each
//! node kind hold child nodes. The contract is expressed in terms of
//! `serde_json::Value` because the dominant convention for this language's
//! tooling is an estree-shaped JSON AST — any conforming parser can be
//! wrapped in a [`Parser`] impl without an intermediate adapter type.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::FormatError;

/// A single token as reported by the parser: `type`, `value`, and the byte
/// range `[start, end)` into the original source text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawToken {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
    pub range: (usize, usize),
}

/// A single comment as reported by the parser. `kind` is `"Line"`,
/// `"Block"`, or `"Hashbang"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawComment {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
    pub range: (usize, usize),
}

/// Maps a node kind (the value of its `type` field) to the ordered list of
/// field names on that node whose values are themselves nodes, or arrays of
/// nodes. Traversal falls back to reflective child discovery for any kind
/// absent from this table (see [`crate::visitor::Visitor`]).
pub type VisitorKeys = HashMap<String, Vec<String>>;

/// Everything a parse produces: the root AST, the flat token/comment arrays,
/// and the visitor-key table needed to walk the AST generically.
#[derive(Debug, Clone)]
pub struct ParsedProgram {
    pub ast: Value,
    pub tokens: Vec<RawToken>,
    pub comments: Vec<RawComment>,
    pub visitor_keys: VisitorKeys,
}

/// Flags requested of the parser. Mirrors the fixed option set this crate
/// always asks for (`SPEC_FULL.md` §6): comments, tokens, ranges, and
/// locations are mandatory inputs to the token-stream builder, so they are
/// not user-configurable the way `Options` is.
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    pub jsx: bool,
    pub global_return: bool,
}

/// A pluggable grammar implementation. Production code supplies a real
/// parser; tests supply a hand-built [`ParsedProgram`] via a fixture-backed
/// implementation, so the rest of the crate can be exercised without any
/// concrete grammar.
pub trait Parser {
    fn parse(&self, text: &str, options: &ParseOptions) -> Result<ParsedProgram, FormatError>;
}

/// Read a node's own `type` field, if present.
pub fn node_kind(node: &Value) -> Option<&str> {
    node.get("type").and_then(Value::as_str)
}

/// Read a node's `range` field as `(start, end)`, if present and well-formed.
pub fn node_range(node: &Value) -> Option<(usize, usize)> {
    let range = node.get("range")?.as_array()?;
    let start = range.first()?.as_u64()? as usize;
    let end = range.get(1)?.as_u64()? as usize;
    Some((start, end))
}
