//! The multi-line/wrap decision pass (`SPEC_FULL.md` §4.6, third bullet).
//!
//! Runs before semicolons/spaces in the fixed pass order (§4.4) because
//! later passes' node-local spacing rules (e.g. "space before each element
//! after the first" on a single-line array) depend on whether a node ended
//! up wrapped.

use serde_json::Value;

use crate::layout::Layout;
use crate::parser_api::node_kind;
use crate::visitor::{Handler, HandlerMap};
use crate::wrapper::elements_of;

/// Node kinds with an element list whose emptiness makes `noWrap` the only
/// valid decision, and the field that list lives in. Kinds absent from
/// this table (binaries, conditionals, members, statements) have no
/// "empty aggregate" shape at all.
fn element_field(kind: &str) -> Option<&'static str> {
    match kind {
        "ArrayExpression" | "ArrayPattern" => Some("elements"),
        "ObjectExpression" | "ObjectPattern" => Some("properties"),
        "CallExpression" | "NewExpression" => Some("arguments"),
        "TemplateLiteral" => Some("expressions"),
        _ => None,
    }
}

fn is_empty_aggregate(node: &Value, kind: &str) -> bool {
    match kind {
        "ImportDeclaration" => named_import_specifiers(node).is_empty(),
        _ => match element_field(kind) {
            Some(field) => elements_of(node, field).is_empty(),
            None => false,
        },
    }
}

fn named_import_specifiers(node: &Value) -> Vec<Value> {
    elements_of(node, "specifiers")
        .iter()
        .filter(|s| s.get("type").and_then(Value::as_str) == Some("ImportSpecifier"))
        .cloned()
        .collect()
}

/// Chained member/call expressions propagate their immediate same-kind
/// parent's wrap decision: `a.b.c.d` wraps entirely once any link
/// overflows, not just the overflowing one.
fn propagates_from_parent(layout: &Layout, kind: &str, parent: Option<&Value>) -> bool {
    let is_chainable = kind == "MemberExpression" || kind == "CallExpression";
    if !is_chainable {
        return false;
    }
    let Some(parent) = parent else { return false };
    if node_kind(parent) != Some(kind) {
        return false;
    }
    layout.is_multi_line(parent)
}

/// The token whose line length/position decides whether a node needs
/// wrapping. `DoWhileStatement` uses the `while` clause's opening `(`
/// rather than the statement's own first token (`do`), per `SPEC_FULL.md`
/// §4.6.
fn measuring_point(layout: &Layout, node: &Value, kind: &str) -> Option<crate::token_stream::part::Handle> {
    if kind == "DoWhileStatement" {
        let close = layout.last_token(node)?;
        return layout.find_previous(Some(close), |h| layout.list.is_punctuator(h, "("));
    }
    layout.first_token(node)
}

fn decide(layout: &mut Layout, node: &Value, parent: Option<&Value>) {
    let Some(kind) = node_kind(node) else { return };

    if is_empty_aggregate(node, kind) {
        layout.no_wrap(node, parent);
        return;
    }

    let overflow_or_multiline = measuring_point(layout, node, kind)
        .is_some_and(|h| layout.is_line_too_long(h))
        || layout.is_multi_line(node);

    if overflow_or_multiline || propagates_from_parent(layout, kind, parent) {
        layout.wrap(node, parent);
    } else {
        layout.no_wrap(node, parent);
    }
}

pub fn pass() -> HandlerMap<Layout> {
    let mut handlers = HandlerMap::new();
    for kind in [
        "ArrayExpression",
        "ArrayPattern",
        "ObjectExpression",
        "ObjectPattern",
        "CallExpression",
        "NewExpression",
        "ConditionalExpression",
        "BinaryExpression",
        "LogicalExpression",
        "FunctionDeclaration",
        "FunctionExpression",
        "ArrowFunctionExpression",
        "ImportDeclaration",
        "TemplateLiteral",
        "MemberExpression",
        "IfStatement",
        "WhileStatement",
        "DoWhileStatement",
        "ForStatement",
    ] {
        handlers.insert(kind, vec![decide as Handler<Layout>]);
    }
    handlers
}
