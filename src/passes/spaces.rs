//! Per-node spacing adjustments.
//!
//! The punctuator-level linear scan (comma/semicolon/`=`-bearing operators)
//! lives in [`super::punctuator_spacing`] and runs earlier in the fixed
//! pass order (`SPEC_FULL.md` §4.4); everything here is the node-aware
//! half of §4.6's "Spaces pass" that a linear scan can't express on its
//! own — it needs to know which punctuator belongs to which AST node.

use serde_json::Value;

use crate::layout::Layout;
use crate::parser_api::node_kind;
use crate::visitor::{Handler, HandlerMap};
use crate::wrapper::elements_of;

fn unary_prefix(layout: &mut Layout, node: &Value, _parent: Option<&Value>) {
    if node_kind(node) == Some("UpdateExpression") && node.get("prefix") != Some(&Value::Bool(true))
    {
        return;
    }
    if let Some(op) = layout.first_token(node) {
        layout.no_space_after(op);
    }
}

fn binary_logical(layout: &mut Layout, node: &Value, _parent: Option<&Value>) {
    let Some(left) = node.get("left") else { return };
    let Some(left_last) = layout.last_token(left) else {
        return;
    };
    if let Some(op) = layout.next_token(left_last) {
        layout.spaces(op);
    }
}

fn conditional_spacing(layout: &mut Layout, node: &Value, _parent: Option<&Value>) {
    let (Some(test), Some(consequent)) = (node.get("test"), node.get("consequent")) else {
        return;
    };
    if let Some(test_last) = layout.last_token(test) {
        if let Some(q) = layout.find_next(Some(test_last), |h| layout.list.is_punctuator(h, "?")) {
            layout.spaces(q);
        }
    }
    if let Some(cons_last) = layout.last_token(consequent) {
        if let Some(colon) =
            layout.find_next(Some(cons_last), |h| layout.list.is_punctuator(h, ":"))
        {
            layout.spaces(colon);
        }
    }
}

fn keyword_space(layout: &mut Layout, node: &Value, _parent: Option<&Value>) {
    if let Some(first) = layout.first_token(node) {
        layout.space_after(first);
    }
}

fn return_space(layout: &mut Layout, node: &Value, _parent: Option<&Value>) {
    if node.get("argument").map(|a| !a.is_null()).unwrap_or(false) {
        keyword_space(layout, node, None);
    }
}

fn try_space(layout: &mut Layout, node: &Value, _parent: Option<&Value>) {
    keyword_space(layout, node, None);
    let Some(finalizer) = node.get("finalizer").filter(|f| !f.is_null()) else {
        return;
    };
    let Some(handler_or_block_end) = node
        .get("handler")
        .filter(|h| !h.is_null())
        .and_then(|h| layout.last_token(h))
        .or_else(|| node.get("block").and_then(|b| layout.last_token(b)))
    else {
        return;
    };
    if let Some(finally_kw) = layout
        .find_next(Some(handler_or_block_end), |h| layout.list.is_keyword(h, "finally"))
    {
        layout.space_after(finally_kw);
    }
}

/// `no_wrap(node)` plus the single-line-only element-spacing rules for
/// arrays/objects that are NOT being wrapped this pass. By the time the
/// spaces pass runs, the wrap-decisions pass has already fixed every
/// wrappable node's single- vs. multi-line layout.
fn single_line_aggregate(layout: &mut Layout, node: &Value, _parent: Option<&Value>) {
    if layout.is_multi_line(node) {
        return;
    }
    let kind = node_kind(node).unwrap_or_default();
    let field = if kind == "ObjectExpression" || kind == "ObjectPattern" {
        "properties"
    } else {
        "elements"
    };
    let elements = elements_of(node, field).to_vec();
    for (i, element) in elements.iter().enumerate() {
        if i > 0 {
            if let Some(first) = layout.first_token(element) {
                layout.space_before(first);
            }
        }
        if let Some(last) = layout.last_token(element) {
            layout.no_space_after(last);
        }
    }
}

fn property_spacing(layout: &mut Layout, node: &Value, _parent: Option<&Value>) {
    let (Some(key), Some(value)) = (node.get("key"), node.get("value")) else {
        return;
    };
    let Some(key_last) = layout.last_token(key) else {
        return;
    };
    let Some(colon) = layout.find_next(Some(key_last), |h| layout.list.is_punctuator(h, ":"))
    else {
        return;
    };
    layout.no_space_before(colon);
    layout.space_after(colon);
    let _ = value;

    if node.get("computed") == Some(&Value::Bool(true)) {
        computed_key_spacing(layout, key);
    }
}

fn computed_method_name(layout: &mut Layout, node: &Value, _parent: Option<&Value>) {
    if node.get("computed") != Some(&Value::Bool(true)) {
        return;
    }
    let Some(key) = node.get("key") else { return };
    computed_key_spacing(layout, key);
}

fn computed_key_spacing(layout: &mut Layout, key: &Value) {
    let (Some(first), Some(last)) = (layout.first_token(key), layout.last_token(key)) else {
        return;
    };
    if let Some(open) = layout.find_previous(Some(first), |h| layout.list.is_punctuator(h, "[")) {
        layout.no_space_after(open);
    }
    if let Some(close) = layout.find_next(Some(last), |h| layout.list.is_punctuator(h, "]")) {
        layout.no_space_before(close);
    }
}

fn specifier_brace_spacing(layout: &mut Layout, node: &Value, _parent: Option<&Value>) {
    let specifiers = elements_of(node, "specifiers")
        .iter()
        .filter(|s| {
            matches!(
                s.get("type").and_then(Value::as_str),
                Some("ImportSpecifier") | Some("ExportSpecifier")
            )
        })
        .cloned()
        .collect::<Vec<_>>();
    if specifiers.is_empty() {
        return;
    }
    let Some(first) = layout.first_token(&specifiers[0]) else {
        return;
    };
    let Some(open) = layout.find_previous(Some(first), |h| layout.list.is_punctuator(h, "{"))
    else {
        return;
    };
    let Some(last) = layout.last_token(specifiers.last().unwrap()) else {
        return;
    };
    let Some(close) = layout.find_next(Some(last), |h| layout.list.is_punctuator(h, "}")) else {
        return;
    };
    layout.space_after(open);
    layout.space_before(close);
}

fn function_header(layout: &mut Layout, node: &Value, _parent: Option<&Value>) {
    let kind = node_kind(node).unwrap_or_default();
    let start = if kind == "ArrowFunctionExpression" {
        layout.first_token(node)
    } else {
        node.get("id")
            .filter(|id| !id.is_null())
            .and_then(|id| layout.last_token(id))
            .or_else(|| layout.first_token(node))
    };
    let Some(start) = start else { return };
    let Some(marker) = layout.find_next(Some(start), |h| {
        layout.list.is_punctuator(h, "(") || layout.list.is_punctuator(h, "=>")
    }) else {
        return;
    };
    if !layout.list.is_punctuator(marker, "(") {
        return;
    }
    layout.no_space_before(marker);
    layout.no_space_after(marker);

    let params = elements_of(node, "params");
    let close = if let Some(last_param) = params.last() {
        layout
            .last_token(last_param)
            .and_then(|lp| layout.find_next(Some(lp), |h| layout.list.is_punctuator(h, ")")))
    } else {
        layout.find_next(Some(marker), |h| layout.list.is_punctuator(h, ")"))
    };
    if let Some(close) = close {
        layout.no_space_before(close);
    }
}

fn block_body_space(layout: &mut Layout, node: &Value, _parent: Option<&Value>) {
    if let Some(open) = layout.first_token(node) {
        layout.space_before(open);
    }
}

/// Build the spaces pass's handler map.
pub fn pass() -> HandlerMap<Layout> {
    let mut handlers = HandlerMap::new();
    handlers.insert("UnaryExpression", vec![unary_prefix as Handler<Layout>]);
    handlers.insert("UpdateExpression", vec![unary_prefix]);
    handlers.insert("BinaryExpression", vec![binary_logical]);
    handlers.insert("LogicalExpression", vec![binary_logical]);
    handlers.insert("ConditionalExpression", vec![conditional_spacing]);
    for kind in [
        "IfStatement",
        "WhileStatement",
        "DoWhileStatement",
        "ForStatement",
        "SwitchStatement",
        "ThrowStatement",
        "VariableDeclaration",
        "AwaitExpression",
        "YieldExpression",
    ] {
        handlers.insert(kind, vec![keyword_space]);
    }
    handlers.insert("ReturnStatement", vec![return_space]);
    handlers.insert("TryStatement", vec![try_space]);
    handlers.insert("CatchClause", vec![keyword_space]);
    handlers.insert("BlockStatement", vec![block_body_space]);
    handlers.insert("ArrayExpression", vec![single_line_aggregate]);
    handlers.insert("ObjectExpression", vec![single_line_aggregate]);
    handlers.insert("Property", vec![property_spacing]);
    handlers.insert("MethodDefinition", vec![computed_method_name]);
    handlers.insert("ImportDeclaration", vec![specifier_brace_spacing]);
    handlers.insert("ExportNamedDeclaration", vec![specifier_brace_spacing]);
    handlers.insert("FunctionDeclaration", vec![function_header]);
    handlers.insert("FunctionExpression", vec![function_header]);
    handlers.insert("ArrowFunctionExpression", vec![function_header]);
    handlers
}
