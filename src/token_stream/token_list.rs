//! `TokenList`: a domain-aware `OrderedSet` of token-stream parts.
//!
//! Parts are owned in a slab (`arena`); the `OrderedSet` orders their
//! `Handle`s. A `range_index` plus a sorted `starts` vector let
//! [`crate::layout::Layout`] resolve "the part at or after byte offset N"
//! with a binary search rather than a linear scan, which is what makes
//! building the AST-to-part boundary map for every node affordable. This
//! inverts the teacher's `Detokenizer`, which only ever walks a token tree
//! forward to *produce* text; here the stream itself is the mutable
//! artifact, queried and rewritten from both directions.

use crate::error::InvariantViolation;
use crate::ordered_set::OrderedSet;
use crate::token_stream::part::{is_synthetic, Handle, Part, Range};

struct Slot {
    part: Option<Part>,
    generation: u32,
}

pub struct TokenList {
    arena: Vec<Slot>,
    free: Vec<usize>,
    order: OrderedSet<Handle>,
    range_index: std::collections::HashMap<usize, Handle>,
    starts: Vec<usize>,
}

impl Default for TokenList {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenList {
    pub fn new() -> Self {
        TokenList {
            arena: Vec::new(),
            free: Vec::new(),
            order: OrderedSet::new(),
            range_index: std::collections::HashMap::new(),
            starts: Vec::new(),
        }
    }

    fn reserve_slot(&mut self, part: Part) -> Handle {
        if let Some(index) = self.free.pop() {
            let slot = &mut self.arena[index];
            slot.generation += 1;
            slot.part = Some(part);
            Handle {
                index,
                generation: slot.generation,
            }
        } else {
            let index = self.arena.len();
            self.arena.push(Slot {
                part: Some(part),
                generation: 0,
            });
            Handle {
                index,
                generation: 0,
            }
        }
    }

    fn index_range(&mut self, handle: Handle, range: Range) {
        if !is_synthetic(range) {
            self.range_index.insert(range.0, handle);
            let pos = self.starts.partition_point(|&s| s < range.0);
            self.starts.insert(pos, range.0);
        }
    }

    fn unindex_range(&mut self, range: Range) {
        if !is_synthetic(range) {
            self.range_index.remove(&range.0);
            if let Ok(pos) = self.starts.binary_search(&range.0) {
                self.starts.remove(pos);
            }
        }
    }

    /// Append `part` at the tail of the stream.
    pub fn push(&mut self, part: Part) -> Handle {
        let range = part.range();
        let handle = self.reserve_slot(part);
        self.order.add(handle).expect("fresh handle cannot collide");
        self.index_range(handle, range);
        handle
    }

    pub fn insert_after(
        &mut self,
        part: Part,
        rel: Handle,
    ) -> Result<Handle, InvariantViolation> {
        let range = part.range();
        let handle = self.reserve_slot(part);
        self.order.insert_after(handle, rel)?;
        self.index_range(handle, range);
        Ok(handle)
    }

    pub fn insert_before(
        &mut self,
        part: Part,
        rel: Handle,
    ) -> Result<Handle, InvariantViolation> {
        let range = part.range();
        let handle = self.reserve_slot(part);
        self.order.insert_before(handle, rel)?;
        self.index_range(handle, range);
        Ok(handle)
    }

    pub fn delete(&mut self, handle: Handle) -> Result<Part, InvariantViolation> {
        self.order.delete(handle)?;
        let slot = &mut self.arena[handle.index];
        let part = slot
            .part
            .take()
            .ok_or_else(|| InvariantViolation::NotFound(format!("{:?}", handle)))?;
        self.unindex_range(part.range());
        self.free.push(handle.index);
        Ok(part)
    }

    pub fn get(&self, handle: Handle) -> Option<&Part> {
        let slot = self.arena.get(handle.index)?;
        if slot.generation != handle.generation {
            return None;
        }
        slot.part.as_ref()
    }

    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut Part> {
        let slot = self.arena.get_mut(handle.index)?;
        if slot.generation != handle.generation {
            return None;
        }
        slot.part.as_mut()
    }

    pub fn has(&self, handle: Handle) -> bool {
        self.order.has(handle)
    }

    pub fn size(&self) -> usize {
        self.order.size()
    }

    pub fn first(&self) -> Option<Handle> {
        self.order.first()
    }

    pub fn last(&self) -> Option<Handle> {
        self.order.last()
    }

    pub fn next(&self, handle: Handle) -> Option<Handle> {
        self.order.next(handle)
    }

    pub fn previous(&self, handle: Handle) -> Option<Handle> {
        self.order.previous(handle)
    }

    pub fn find_next(&self, start: Option<Handle>, pred: impl FnMut(Handle) -> bool) -> Option<Handle> {
        self.order.find_next(start, pred)
    }

    pub fn find_previous(
        &self,
        start: Option<Handle>,
        pred: impl FnMut(Handle) -> bool,
    ) -> Option<Handle> {
        self.order.find_previous(start, pred)
    }

    pub fn iter(&self) -> impl Iterator<Item = Handle> + '_ {
        self.order.iter()
    }

    /// The first part whose range starts at or after `offset`, via binary
    /// search over the sorted `starts` index.
    pub fn part_at_or_after(&self, offset: usize) -> Option<Handle> {
        let pos = self.starts.partition_point(|&s| s < offset);
        let start = *self.starts.get(pos)?;
        self.range_index.get(&start).copied()
    }

    /// The last indexed part whose range starts strictly before `offset`.
    pub fn part_before(&self, offset: usize) -> Option<Handle> {
        let pos = self.starts.partition_point(|&s| s < offset);
        if pos == 0 {
            return None;
        }
        let start = self.starts[pos - 1];
        self.range_index.get(&start).copied()
    }

    // --- classification predicates, delegating to the referenced Part ---

    pub fn is_whitespace(&self, h: Handle) -> bool {
        self.get(h).is_some_and(Part::is_whitespace)
    }

    pub fn is_line_break(&self, h: Handle) -> bool {
        self.get(h).is_some_and(Part::is_line_break)
    }

    pub fn is_whitespace_or_line_break(&self, h: Handle) -> bool {
        self.is_whitespace(h) || self.is_line_break(h)
    }

    pub fn is_comment(&self, h: Handle) -> bool {
        self.get(h).is_some_and(Part::is_comment)
    }

    pub fn is_line_comment(&self, h: Handle) -> bool {
        self.get(h).is_some_and(Part::is_line_comment)
    }

    pub fn is_block_comment(&self, h: Handle) -> bool {
        self.get(h).is_some_and(Part::is_block_comment)
    }

    pub fn is_punctuator(&self, h: Handle, expect: &str) -> bool {
        self.get(h).is_some_and(|p| p.is_punctuator(expect))
    }

    pub fn is_keyword(&self, h: Handle, expect: &str) -> bool {
        self.get(h).is_some_and(|p| p.is_keyword(expect))
    }

    pub fn is_any_punctuator(&self, h: Handle) -> bool {
        self.get(h).is_some_and(Part::is_any_punctuator)
    }

    pub fn is_template(&self, h: Handle) -> bool {
        self.get(h).is_some_and(Part::is_template)
    }

    pub fn is_template_open(&self, h: Handle) -> bool {
        self.get(h).is_some_and(Part::is_template_open)
    }

    pub fn is_template_close(&self, h: Handle) -> bool {
        self.get(h).is_some_and(Part::is_template_close)
    }

    /// An indent is a `Whitespace` part with no predecessor, or whose
    /// predecessor is a `LineBreak`.
    pub fn is_indent(&self, h: Handle) -> bool {
        if !self.is_whitespace(h) {
            return false;
        }
        match self.previous(h) {
            None => true,
            Some(prev) => self.is_line_break(prev),
        }
    }

    /// `{`, `(`, `[`, or a template-open, followed immediately by a line
    /// break.
    pub fn is_indent_increaser(&self, h: Handle) -> bool {
        let is_opener = self.is_punctuator(h, "{")
            || self.is_punctuator(h, "(")
            || self.is_punctuator(h, "[")
            || self.is_template_open(h);
        if !is_opener {
            return false;
        }
        self.next(h).is_some_and(|n| self.is_line_break(n))
    }

    /// `}`, `)`, `]`, or a template-close, where either no preceding line
    /// break exists on this line, or it is the first syntactic token after
    /// the preceding line break.
    pub fn is_indent_decreaser(&self, h: Handle) -> bool {
        let is_closer = self.is_punctuator(h, "}")
            || self.is_punctuator(h, ")")
            || self.is_punctuator(h, "]")
            || self.is_template_close(h);
        if !is_closer {
            return false;
        }
        let mut cur = self.previous(h);
        while let Some(c) = cur {
            if self.is_line_break(c) {
                return true;
            }
            if !self.is_whitespace(c) && !self.is_comment(c) {
                return false;
            }
            cur = self.previous(c);
        }
        true
    }

    /// Concatenate every part's value in stream order.
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        let mut cur = self.first();
        while let Some(h) = cur {
            if let Some(part) = self.get(h) {
                out.push_str(part.value());
            }
            cur = self.next(h);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token_stream::part::TokenKind;

    fn tok(value: &str, start: usize) -> Part {
        Part::Token {
            kind: TokenKind::Identifier,
            value: value.to_string(),
            range: (start, start + value.len()),
        }
    }

    #[test]
    fn push_and_serialize_round_trips() {
        let mut list = TokenList::new();
        list.push(tok("a", 0));
        list.push(Part::Whitespace {
            value: " ".into(),
            range: (1, 2),
        });
        list.push(tok("b", 2));
        assert_eq!(list.serialize(), "a b");
    }

    #[test]
    fn part_at_or_after_binary_search() {
        let mut list = TokenList::new();
        let a = list.push(tok("foo", 0));
        let _ws = list.push(Part::Whitespace {
            value: " ".into(),
            range: (3, 4),
        });
        let b = list.push(tok("bar", 4));
        assert_eq!(list.part_at_or_after(0), Some(a));
        assert_eq!(list.part_at_or_after(2), Some(b));
        assert_eq!(list.part_at_or_after(4), Some(b));
        assert_eq!(list.part_at_or_after(100), None);
    }

    #[test]
    fn delete_removes_from_range_index() {
        let mut list = TokenList::new();
        let a = list.push(tok("foo", 0));
        list.delete(a).unwrap();
        assert_eq!(list.part_at_or_after(0), None);
        assert!(!list.has(a));
    }

    #[test]
    fn synthetic_parts_are_not_range_indexed() {
        let mut list = TokenList::new();
        let a = list.push(tok("foo", 0));
        let synth = Part::Whitespace {
            value: " ".into(),
            range: crate::token_stream::part::SYNTHETIC_RANGE,
        };
        list.insert_after(synth, a).unwrap();
        // only "foo" is indexed; looking past its end finds nothing
        assert_eq!(list.part_at_or_after(10), None);
    }

    #[test]
    fn indent_increaser_and_decreaser() {
        let mut list = TokenList::new();
        let open = list.push(Part::Token {
            kind: TokenKind::Punctuator,
            value: "{".into(),
            range: (0, 1),
        });
        list.push(Part::LineBreak {
            value: "\n".into(),
            range: (1, 2),
        });
        let close = list.push(Part::Token {
            kind: TokenKind::Punctuator,
            value: "}".into(),
            range: (2, 3),
        });
        assert!(list.is_indent_increaser(open));
        assert!(list.is_indent_decreaser(close));
    }
}
