//! Binary/logical-expression wrap strategy: break after the operator,
//! indent the right operand.

use serde_json::Value;

use crate::layout::Layout;
use crate::parser_api::node_kind;

pub fn wrap(layout: &mut Layout, node: &Value, _parent: Option<&Value>) {
    let Some(left) = node.get("left") else { return };
    let Some(right) = node.get("right") else { return };
    let Some(left_last) = layout.last_token(left) else { return };
    let Some(right_first) = layout.first_token(right) else { return };

    let Some(op) = layout.find_next(Some(left_last), |h| layout.list.is_any_punctuator(h))
    else {
        return;
    };
    let _ = right_first;

    let base_indent = layout.get_indent_level(left_last);
    let indent_level = base_indent + 1;

    layout.line_break_after(op);
    if let Some(first) = layout.first_token(right) {
        layout.indent_level(first, indent_level);
    }
}

pub fn no_wrap(layout: &mut Layout, node: &Value, _parent: Option<&Value>) {
    let Some(left) = node.get("left") else { return };
    let Some(left_last) = layout.last_token(left) else { return };
    let Some(op) = layout.find_next(Some(left_last), |h| layout.list.is_any_punctuator(h))
    else {
        return;
    };
    layout.no_line_break_after(op);
    layout.spaces(op);
    let _ = node_kind(node);
}
