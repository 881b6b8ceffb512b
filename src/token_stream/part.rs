//! The atomic elements of the token stream, and the arena handle that
//! identifies them.
//!
//! A `ScannerToken` in the teacher codebase is a flat enum of span-carrying
//! variants held in a tree structure; a `Part` plays the same role here but
//! lives in a flat, mutable, doubly-linked arena (see
//! [`super::token_list::TokenList`]) since this crate's central data
//! structure is the stream itself, not a parse tree over it.

use serde::{Deserialize, Serialize};

/// A byte range into the original source text. Parts inserted by a rewrite
/// (never present in the original token/comment arrays) carry
/// [`SYNTHETIC_RANGE`] instead of a fabricated span.
pub type Range = (usize, usize);

pub const SYNTHETIC_RANGE: Range = (usize::MAX, usize::MAX);

pub fn is_synthetic(range: Range) -> bool {
    range == SYNTHETIC_RANGE
}

/// The lexical category of a `Part::Token`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenKind {
    Keyword,
    Identifier,
    Punctuator,
    String,
    Numeric,
    Boolean,
    Null,
    Template,
    RegExp,
}

/// One element of the token stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Part {
    Token {
        kind: TokenKind,
        value: String,
        range: Range,
    },
    LineComment {
        value: String,
        range: Range,
    },
    BlockComment {
        value: String,
        range: Range,
    },
    HashbangComment {
        value: String,
        range: Range,
    },
    LineBreak {
        value: String,
        range: Range,
    },
    Whitespace {
        value: String,
        range: Range,
    },
}

impl Part {
    pub fn value(&self) -> &str {
        match self {
            Part::Token { value, .. } => value,
            Part::LineComment { value, .. } => value,
            Part::BlockComment { value, .. } => value,
            Part::HashbangComment { value, .. } => value,
            Part::LineBreak { value, .. } => value,
            Part::Whitespace { value, .. } => value,
        }
    }

    pub fn set_value(&mut self, new_value: String) {
        match self {
            Part::Token { value, .. } => *value = new_value,
            Part::LineComment { value, .. } => *value = new_value,
            Part::BlockComment { value, .. } => *value = new_value,
            Part::HashbangComment { value, .. } => *value = new_value,
            Part::LineBreak { value, .. } => *value = new_value,
            Part::Whitespace { value, .. } => *value = new_value,
        }
    }

    pub fn range(&self) -> Range {
        match self {
            Part::Token { range, .. } => *range,
            Part::LineComment { range, .. } => *range,
            Part::BlockComment { range, .. } => *range,
            Part::HashbangComment { range, .. } => *range,
            Part::LineBreak { range, .. } => *range,
            Part::Whitespace { range, .. } => *range,
        }
    }

    pub fn is_synthetic(&self) -> bool {
        is_synthetic(self.range())
    }

    pub fn is_whitespace(&self) -> bool {
        matches!(self, Part::Whitespace { .. })
    }

    pub fn is_line_break(&self) -> bool {
        matches!(self, Part::LineBreak { .. })
    }

    pub fn is_comment(&self) -> bool {
        matches!(
            self,
            Part::LineComment { .. } | Part::BlockComment { .. } | Part::HashbangComment { .. }
        )
    }

    pub fn is_line_comment(&self) -> bool {
        matches!(self, Part::LineComment { .. })
    }

    pub fn is_block_comment(&self) -> bool {
        matches!(self, Part::BlockComment { .. })
    }

    pub fn is_token(&self) -> bool {
        matches!(self, Part::Token { .. })
    }

    pub fn is_punctuator(&self, expect: &str) -> bool {
        matches!(self, Part::Token { kind: TokenKind::Punctuator, value, .. } if value == expect)
    }

    pub fn is_any_punctuator(&self) -> bool {
        matches!(self, Part::Token { kind: TokenKind::Punctuator, .. })
    }

    pub fn is_template(&self) -> bool {
        matches!(self, Part::Token { kind: TokenKind::Template, .. })
    }

    pub fn is_template_open(&self) -> bool {
        self.is_template() && (self.value().ends_with("${") || self.value() == "`")
    }

    pub fn is_template_close(&self) -> bool {
        self.is_template() && (self.value().starts_with('}') || self.value() == "`")
    }

    pub fn is_keyword(&self, expect: &str) -> bool {
        matches!(self, Part::Token { kind: TokenKind::Keyword, value, .. } if value == expect)
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Part::Token { kind: TokenKind::String, .. })
    }
}

/// Identity of a `Part` within a `TokenList`'s arena. A `Copy` handle rather
/// than a shared reference: the arena owns every `Part`, and every other
/// structure (the `OrderedSet`, the boundary map) refers to parts only by
/// handle. The generation counter distinguishes a deleted-and-reused slot
/// from the handle a caller might still be holding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Handle {
    pub(crate) index: usize,
    pub(crate) generation: u32,
}
