//! Whitespace, line-break, semicolon, comma, and indent primitives.
//!
//! Every primitive here is written to be idempotent: a second call with the
//! same handle leaves the stream unchanged. That is what lets the
//! style-rule passes run in a single fixed order without a fixpoint loop
//! (`SPEC_FULL.md` §4.4, "Idempotence").

use serde_json::Value;

use crate::token_stream::part::{Handle, Part, TokenKind, SYNTHETIC_RANGE};

use super::Layout;

impl Layout {
    pub fn space_before(&mut self, h: Handle) {
        if let Some(prev) = self.list.previous(h) {
            if self.list.is_whitespace(prev) || self.list.is_line_break(prev) {
                return;
            }
        }
        let _ = self.list.insert_before(whitespace(" "), h);
    }

    pub fn space_after(&mut self, h: Handle) {
        if let Some(next) = self.list.next(h) {
            if self.list.is_whitespace(next) || self.list.is_line_break(next) {
                return;
            }
        }
        let _ = self.list.insert_after(whitespace(" "), h);
    }

    pub fn no_space_before(&mut self, h: Handle) {
        if let Some(prev) = self.list.previous(h) {
            if self.list.is_whitespace(prev) {
                let _ = self.list.delete(prev);
            }
        }
    }

    pub fn no_space_after(&mut self, h: Handle) {
        if let Some(next) = self.list.next(h) {
            if self.list.is_whitespace(next) {
                let _ = self.list.delete(next);
            }
        }
    }

    pub fn spaces(&mut self, h: Handle) {
        self.space_before(h);
        self.space_after(h);
    }

    pub fn no_spaces(&mut self, h: Handle) {
        self.no_space_before(h);
        self.no_space_after(h);
    }

    pub fn line_break_before(&mut self, h: Handle) {
        if let Some(prev) = self.list.previous(h) {
            if self.list.is_line_break(prev) {
                return;
            }
            if self.list.is_whitespace(prev) {
                let _ = self.list.delete(prev);
            }
        }
        let value = self.options.line_endings.clone();
        let _ = self
            .list
            .insert_before(Part::LineBreak { value, range: SYNTHETIC_RANGE }, h);
    }

    pub fn line_break_after(&mut self, h: Handle) {
        if let Some(next) = self.list.next(h) {
            if self.list.is_line_break(next) {
                return;
            }
            if self.list.is_whitespace(next) {
                let _ = self.list.delete(next);
            }
        }
        let value = self.options.line_endings.clone();
        let _ = self
            .list
            .insert_after(Part::LineBreak { value, range: SYNTHETIC_RANGE }, h);
    }

    pub fn no_line_break_before(&mut self, h: Handle) {
        if let Some(prev) = self.list.previous(h) {
            if self.list.is_whitespace(prev) {
                let before = self.list.previous(prev);
                let _ = self.list.delete(prev);
                if let Some(lb) = before {
                    if self.list.is_line_break(lb) {
                        let _ = self.list.delete(lb);
                    }
                }
            } else if self.list.is_line_break(prev) {
                let _ = self.list.delete(prev);
            }
        }
    }

    pub fn no_line_break_after(&mut self, h: Handle) {
        if let Some(next) = self.list.next(h) {
            if self.list.is_line_break(next) {
                let _ = self.list.delete(next);
            } else if self.list.is_whitespace(next) {
                if let Some(after) = self.list.next(next) {
                    if self.list.is_line_break(after) {
                        let _ = self.list.delete(after);
                        let _ = self.list.delete(next);
                    }
                }
            }
        }
    }

    /// Collapses a run of consecutive `LineBreak` parts after `h` down to
    /// at most one, i.e. removes extra blank lines.
    pub fn no_empty_line_after(&mut self, h: Handle) {
        let mut seen_break = false;
        let mut cur = self.list.next(h);
        while let Some(c) = cur {
            if self.list.is_line_break(c) {
                if seen_break {
                    let next = self.list.next(c);
                    let _ = self.list.delete(c);
                    cur = next;
                    continue;
                }
                seen_break = true;
                cur = self.list.next(c);
                continue;
            }
            if self.list.is_whitespace(c) {
                cur = self.list.next(c);
                continue;
            }
            break;
        }
    }

    pub fn semicolon_after(&mut self, h: Handle) {
        let next_syntactic = self
            .list
            .find_next(Some(h), |c| !self.list.is_whitespace(c) && !self.list.is_line_break(c));
        if let Some(n) = next_syntactic {
            if self.list.is_punctuator(n, ";") {
                return;
            }
        }
        let _ = self
            .list
            .insert_after(punctuator(";"), h);
    }

    pub fn no_semicolon_after(&mut self, h: Handle) {
        if let Some(next) = self.list.find_next(Some(h), |c| !self.list.is_whitespace(c)) {
            if self.list.is_punctuator(next, ";") {
                let _ = self.list.delete(next);
            }
        }
    }

    pub fn comma_after(&mut self, h: Handle) {
        let next_syntactic = self
            .list
            .find_next(Some(h), |c| !self.list.is_whitespace(c) && !self.list.is_line_break(c));
        if let Some(n) = next_syntactic {
            if self.list.is_punctuator(n, ",") {
                return;
            }
        }
        let _ = self.list.insert_after(punctuator(","), h);
    }

    pub fn no_comma_after(&mut self, h: Handle) {
        if let Some(next) = self.list.find_next(Some(h), |c| !self.list.is_whitespace(c)) {
            if self.list.is_punctuator(next, ",") {
                let _ = self.list.delete(next);
            }
        }
    }

    /// Sets the indentation of the line containing `h` to `n` repeats of
    /// the configured indent unit, replacing (or inserting, if absent) the
    /// whitespace immediately after the preceding line break.
    pub fn indent_level(&mut self, h: Handle, n: usize) {
        let value = self.options.indent_str().repeat(n);
        let line_start_ws = self.list.previous(h).filter(|&prev| self.list.is_indent(prev));
        match line_start_ws {
            Some(ws) => {
                if let Some(part) = self.list.get_mut(ws) {
                    part.set_value(value);
                }
            }
            None if !value.is_empty() => {
                let _ = self.list.insert_before(whitespace(&value), h);
            }
            None => {}
        }
    }

    pub fn get_indent_level(&self, h: Handle) -> usize {
        let unit_len = self.options.indent_str().len().max(1);
        match self.list.previous(h).filter(|&prev| self.list.is_indent(prev)) {
            Some(ws) => self
                .list
                .get(ws)
                .map(|p| p.value().len() / unit_len)
                .unwrap_or(0),
            None => 0,
        }
    }

    pub fn indent(&mut self, h: Handle) {
        let level = self.get_indent_level(h) + 1;
        self.indent_level(h, level);
    }

    /// Applies `indent_level(_, n)` to the first token of every line from
    /// `a`'s line through `b`'s line, inclusive.
    pub fn indent_level_between(&mut self, a: Handle, b: Handle, n: usize) {
        self.indent_level(a, n);
        let mut cur = Some(a);
        while let Some(h) = cur {
            if self.list.is_line_break(h) {
                if let Some(next) = self.list.next(h) {
                    self.indent_level(next, n);
                }
            }
            if h == b {
                break;
            }
            cur = self.list.next(h);
        }
    }
}

/// Convenience: resolve a node to its last boundary part, run `op`, and
/// return whether the node had a boundary at all (nodes with no recorded
/// boundary, e.g. produced by a parser that omits `range`, are skipped
/// rather than panicking).
impl Layout {
    pub fn on_last(&mut self, node: &Value, op: impl FnOnce(&mut Layout, Handle)) {
        if let Some(h) = self.last_token(node) {
            op(self, h);
        }
    }

    pub fn on_first(&mut self, node: &Value, op: impl FnOnce(&mut Layout, Handle)) {
        if let Some(h) = self.first_token(node) {
            op(self, h);
        }
    }
}

fn whitespace(value: &str) -> Part {
    Part::Whitespace {
        value: value.to_string(),
        range: SYNTHETIC_RANGE,
    }
}

fn punctuator(value: &str) -> Part {
    Part::Token {
        kind: TokenKind::Punctuator,
        value: value.to_string(),
        range: SYNTHETIC_RANGE,
    }
}
