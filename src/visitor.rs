//! Generic pre-order traversal over a JSON-shaped AST.
//!
//! Grounded on the teacher's `ast/query/traversal.rs`, which drives a
//! stack-based depth-first walk over its own tree type rather than
//! hard-coding which fields hold children. Here the tree is a
//! `serde_json::Value` supplied by an external parser, so the "which
//! fields hold children" question is answered by a
//! [`crate::parser_api::VisitorKeys`] table the parser also supplies, with
//! a reflective fallback for node kinds the table omits.

use serde_json::Value;

use crate::parser_api::{node_kind, VisitorKeys};

/// A node is anything with a string `type` field. Arrays of nodes and
/// single nodes are both valid child values.
fn is_node(value: &Value) -> bool {
    matches!(value, Value::Object(map) if map.get("type").is_some_and(Value::is_string))
}

/// The ordered list of child-bearing field names for `kind`. Falls back to
/// every object/array-of-object field, in the JSON's own (insertion) field
/// order — which is why `serde_json`'s `preserve_order` feature is load
/// bearing for deterministic traversal of unknown node kinds.
fn child_fields<'a>(node: &'a Value, kind: &str, keys: &'a VisitorKeys) -> Vec<String> {
    if let Some(fields) = keys.get(kind) {
        return fields.clone();
    }
    let mut fallback = Vec::new();
    if let Value::Object(map) = node {
        for (field, value) in map.iter() {
            match value {
                Value::Object(_) if is_node(value) => fallback.push(field.clone()),
                Value::Array(items) if items.iter().any(is_node) => fallback.push(field.clone()),
                _ => {}
            }
        }
    }
    fallback
}

/// Depth-first pre-order traversal, calling `callback(node, parent)` at
/// every node including the root (whose `parent` is `None`).
pub struct Visitor<'a> {
    visitor_keys: &'a VisitorKeys,
}

impl<'a> Visitor<'a> {
    pub fn new(visitor_keys: &'a VisitorKeys) -> Self {
        Visitor { visitor_keys }
    }

    pub fn visit(&self, root: &Value, mut callback: impl FnMut(&Value, Option<&Value>)) {
        self.visit_inner(root, None, &mut callback);
    }

    fn visit_inner(
        &self,
        node: &Value,
        parent: Option<&Value>,
        callback: &mut impl FnMut(&Value, Option<&Value>),
    ) {
        if !is_node(node) {
            return;
        }
        callback(node, parent);

        let kind = match node_kind(node) {
            Some(k) => k,
            None => return,
        };
        for field in child_fields(node, kind, self.visitor_keys) {
            let Some(value) = node.get(&field) else {
                continue;
            };
            match value {
                Value::Object(_) if is_node(value) => self.visit_inner(value, Some(node), callback),
                Value::Array(items) => {
                    for item in items {
                        if is_node(item) {
                            self.visit_inner(item, Some(node), callback);
                        }
                    }
                }
                _ => {}
            }
        }
    }
}

/// `fn` pointer handler, not a closure: avoids aliasing `&mut Layout` across
/// captured state the borrow checker can't see through (`SPEC_FULL.md`,
/// design notes on rule composition).
pub type Handler<Ctx> = fn(&mut Ctx, &Value, Option<&Value>);
pub type HandlerMap<Ctx> = std::collections::HashMap<&'static str, Vec<Handler<Ctx>>>;

/// Composes several passes' handler maps into a single traversal: at each
/// node, every handler registered for that node's kind runs, across all
/// passes, in pass-registration order, before descending into children.
pub struct TaskVisitor<'a, Ctx> {
    visitor: Visitor<'a>,
    passes: Vec<HandlerMap<Ctx>>,
}

impl<'a, Ctx> TaskVisitor<'a, Ctx> {
    pub fn new(visitor_keys: &'a VisitorKeys) -> Self {
        TaskVisitor {
            visitor: Visitor::new(visitor_keys),
            passes: Vec::new(),
        }
    }

    pub fn add_pass(&mut self, handlers: HandlerMap<Ctx>) {
        self.passes.push(handlers);
    }

    pub fn run(&self, root: &Value, ctx: &mut Ctx) {
        let passes = &self.passes;
        self.visitor.visit(root, |node, parent| {
            let Some(kind) = node_kind(node) else {
                return;
            };
            for pass in passes {
                if let Some(handlers) = pass.get(kind) {
                    for handler in handlers {
                        handler(ctx, node, parent);
                    }
                }
            }
        });
    }
}
