//! Template-literal placeholder wrap strategy.

use serde_json::Value;

use crate::layout::Layout;

use super::elements_of;

pub fn wrap(layout: &mut Layout, node: &Value, _parent: Option<&Value>) {
    let expressions = elements_of(node, "expressions").to_vec();
    if expressions.is_empty() {
        return;
    }
    for expr in &expressions {
        let (Some(first), Some(last)) = (layout.first_token(expr), layout.last_token(expr)) else {
            continue;
        };
        let indent_level = layout.get_indent_level(first) + 1;
        layout.line_break_before(first);
        layout.indent_level(first, indent_level);
        layout.line_break_after(last);
    }
}

pub fn no_wrap(layout: &mut Layout, node: &Value, _parent: Option<&Value>) {
    let expressions = elements_of(node, "expressions").to_vec();
    for expr in &expressions {
        let (Some(first), Some(last)) = (layout.first_token(expr), layout.last_token(expr)) else {
            continue;
        };
        layout.no_line_break_before(first);
        layout.no_line_break_after(last);
    }
}
