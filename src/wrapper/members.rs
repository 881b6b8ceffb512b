//! Member-expression chain wrap strategy: break before `.`, never around a
//! computed `[…]` access.

use serde_json::Value;

use crate::layout::Layout;

pub fn wrap(layout: &mut Layout, node: &Value, _parent: Option<&Value>) {
    if node.get("computed").and_then(Value::as_bool) == Some(true) {
        return;
    }
    let Some(object) = node.get("object") else { return };
    let Some(object_last) = layout.last_token(object) else {
        return;
    };
    let Some(dot) = layout.find_next(Some(object_last), |h| layout.list.is_punctuator(h, "."))
    else {
        return;
    };

    let indent_level = layout.get_indent_level(object_last) + 1;
    layout.line_break_before(dot);
    layout.indent_level(dot, indent_level);
}

pub fn no_wrap(layout: &mut Layout, node: &Value, _parent: Option<&Value>) {
    if node.get("computed").and_then(Value::as_bool) == Some(true) {
        return;
    }
    let Some(object) = node.get("object") else { return };
    let Some(object_last) = layout.last_token(object) else {
        return;
    };
    if let Some(dot) = layout.find_next(Some(object_last), |h| layout.list.is_punctuator(h, "."))
    {
        layout.no_line_break_before(dot);
        layout.no_space_before(dot);
    }
}
