//! Function (declaration, expression, arrow) wrap strategy: the body block
//! and, if the parameter list overflows, the parameter list too.

use serde_json::Value;

use crate::layout::Layout;

use super::elements_of;

pub fn wrap(layout: &mut Layout, node: &Value, _parent: Option<&Value>) {
    wrap_body(layout, node);
    if let Some(first) = layout.first_token(node) {
        if layout.is_line_too_long(first) {
            wrap_params(layout, node);
        }
    }
}

pub fn no_wrap(layout: &mut Layout, node: &Value, _parent: Option<&Value>) {
    no_wrap_body(layout, node);
    no_wrap_params(layout, node);
}

fn wrap_body(layout: &mut Layout, node: &Value) {
    let Some(body) = node.get("body") else { return };
    let Some((open, close)) = layout.boundary_tokens(body) else {
        return;
    };
    if !layout.list.is_punctuator(open, "{") {
        return;
    }
    // Whether this function is the first declarator's init in a
    // multi-declarator `VariableDeclaration` was decided once, top-down, in
    // `Layout::build` (`SPEC_FULL.md` §4.5.1); `open` here is the body's
    // own opening brace, the handle that walk records for function kinds.
    let correction = if layout.is_indent_correction_open(open) {
        1
    } else {
        0
    };
    let indent_level = layout.get_indent_level(open) + 1 + correction;
    layout.line_break_after(open);
    layout.line_break_before(close);

    if let Some(statements) = body.get("body").and_then(Value::as_array) {
        for stmt in statements {
            if let Some(first) = layout.first_token(stmt) {
                layout.indent_level(first, indent_level);
            }
        }
    }
}

fn no_wrap_body(layout: &mut Layout, node: &Value) {
    let Some(body) = node.get("body") else { return };
    let Some((open, close)) = layout.boundary_tokens(body) else {
        return;
    };
    if !layout.list.is_punctuator(open, "{") {
        return;
    }
    layout.space_before(open);
    layout.no_line_break_after(open);
    layout.no_line_break_before(close);
}

fn wrap_params(layout: &mut Layout, node: &Value) {
    let params = elements_of(node, "params").to_vec();
    if params.is_empty() {
        return;
    }
    let Some(first_param) = layout.first_token(&params[0]) else {
        return;
    };
    let Some(open) = layout.find_previous(Some(first_param), |h| layout.list.is_punctuator(h, "("))
    else {
        return;
    };
    let Some(last_param) = layout.last_token(params.last().unwrap()) else {
        return;
    };
    let Some(close) = layout.find_next(Some(last_param), |h| layout.list.is_punctuator(h, ")"))
    else {
        return;
    };

    let indent_level = layout.get_indent_level(open) + 1;
    layout.line_break_after(open);
    layout.line_break_before(close);
    for param in &params {
        if let Some(first) = layout.first_token(param) {
            layout.indent_level(first, indent_level);
        }
        if let Some(last) = layout.last_token(param) {
            if let Some(next) = layout.find_next(Some(last), |_| true) {
                if layout.list.is_punctuator(next, ",") {
                    layout.line_break_after(next);
                }
            }
        }
    }
}

fn no_wrap_params(layout: &mut Layout, node: &Value) {
    let params = elements_of(node, "params").to_vec();
    let Some(name_or_paren) = layout.first_token(node) else {
        return;
    };
    let Some(open) = layout.find_next(Some(name_or_paren), |h| layout.list.is_punctuator(h, "("))
        .or(Some(name_or_paren))
    else {
        return;
    };
    layout.no_line_break_after(open);
    layout.no_space_after(open);
    for param in &params {
        if let Some(last) = layout.last_token(param) {
            if let Some(next) = layout.find_next(Some(last), |_| true) {
                if layout.list.is_punctuator(next, ",") {
                    layout.no_line_break_after(next);
                }
            }
        }
    }
}
