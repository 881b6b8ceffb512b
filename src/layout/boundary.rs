//! The AST-to-stream cross-index: for every AST node, the pair of parts
//! that bound its rendering in the token stream.
//!
//! Node identity here is the node's own `(start, end)` byte range rather
//! than an object reference, following the pattern in the pack's
//! `nova-format` comment-store file (`other_examples/`), which keys its
//! own token/comment association by text range rather than holding onto a
//! tree-library handle. A rare collision — two distinct nodes sharing an
//! exact range, e.g. an `ExpressionStatement` wrapping a single
//! `CallExpression` with no other punctuation — is resolved by letting the
//! later write win: pre-order traversal visits the parent before the
//! child, so the child (the more specific node) overwrites the parent's
//! entry, and a lookup through either node's own range reaches the same
//! pair of parts regardless.

use std::collections::HashMap;

use serde_json::Value;

use crate::parser_api::{node_range, VisitorKeys};
use crate::token_stream::part::Handle;
use crate::token_stream::token_list::TokenList;
use crate::visitor::Visitor;

pub type NodeKey = (usize, usize);

#[derive(Debug, Clone, Copy)]
pub struct NodeBoundary {
    pub first: Handle,
    pub last: Handle,
}

#[derive(Default)]
pub struct BoundaryMap {
    entries: HashMap<NodeKey, NodeBoundary>,
}

impl BoundaryMap {
    pub fn build(ast: &Value, visitor_keys: &VisitorKeys, list: &TokenList) -> Self {
        let mut map = BoundaryMap::default();
        let visitor = Visitor::new(visitor_keys);
        visitor.visit(ast, |node, _parent| {
            let Some(range) = node_range(node) else {
                return;
            };
            if let (Some(first), Some(last)) =
                (first_part(list, range.0), last_part_excluding_semicolon(list, range.1))
            {
                map.entries.insert(range, NodeBoundary { first, last });
            }
        });
        map
    }

    pub fn get(&self, key: NodeKey) -> Option<NodeBoundary> {
        self.entries.get(&key).copied()
    }
}

fn first_part(list: &TokenList, start: usize) -> Option<Handle> {
    list.part_at_or_after(start)
}

fn skip_insignificant_back(list: &TokenList, mut cur: Handle) -> Option<Handle> {
    loop {
        let part = list.get(cur)?;
        if part.is_whitespace() || part.is_line_break() {
            cur = list.previous(cur)?;
            continue;
        }
        return Some(cur);
    }
}

/// The last syntactic part strictly inside `end`, stepping back over a
/// single trailing statement-terminating semicolon so that "the part
/// after the node" reliably names the semicolon slot.
fn last_part_excluding_semicolon(list: &TokenList, end: usize) -> Option<Handle> {
    let candidate = list.part_before(end)?;
    let last = skip_insignificant_back(list, candidate)?;
    if list.is_punctuator(last, ";") {
        if let Some(prev) = list.previous(last) {
            if let Some(resolved) = skip_insignificant_back(list, prev) {
                return Some(resolved);
            }
        }
    }
    Some(last)
}
