//! Call/new-expression argument-list wrap strategy.

use serde_json::Value;

use crate::layout::Layout;

use super::elements_of;

pub fn wrap(layout: &mut Layout, node: &Value, _parent: Option<&Value>) {
    let args = elements_of(node, "arguments").to_vec();
    if args.len() < 2 {
        return;
    }
    let Some(open) = find_arg_paren_open(layout, node, &args) else {
        return;
    };
    let Some((_, close)) = layout.boundary_tokens(node) else {
        return;
    };

    let indent_level = layout.get_indent_level(open) + 1;
    layout.line_break_after(open);
    layout.line_break_before(close);

    for arg in &args {
        if let Some(first) = layout.first_token(arg) {
            layout.indent_level(first, indent_level);
        }
        if let Some(last) = layout.last_token(arg) {
            if let Some(next) = layout.find_next(Some(last), |_| true) {
                if layout.list.is_punctuator(next, ",") {
                    layout.line_break_after(next);
                }
            }
        }
    }
}

pub fn no_wrap(layout: &mut Layout, node: &Value, _parent: Option<&Value>) {
    let args = elements_of(node, "arguments").to_vec();
    let Some(open) = find_arg_paren_open(layout, node, &args) else {
        return;
    };
    let Some((_, close)) = layout.boundary_tokens(node) else {
        return;
    };
    layout.no_space_after(open);
    layout.no_space_before(close);
    layout.no_line_break_after(open);
    layout.no_line_break_before(close);

    for arg in &args {
        if let Some(last) = layout.last_token(arg) {
            if let Some(next) = layout.find_next(Some(last), |_| true) {
                if layout.list.is_punctuator(next, ",") {
                    layout.no_line_break_after(next);
                    layout.no_space_before(next);
                    layout.space_after(next);
                }
            }
        }
    }
}

/// The `(` that opens the argument list: the first `(` following the end
/// of the callee.
fn find_arg_paren_open(
    layout: &Layout,
    node: &Value,
    _args: &[Value],
) -> Option<crate::token_stream::part::Handle> {
    let callee_end = node
        .get("callee")
        .and_then(|c| layout.last_token(c))
        .or_else(|| layout.first_token(node))?;
    layout.find_next(Some(callee_end), |h| layout.list.is_punctuator(h, "("))
}
