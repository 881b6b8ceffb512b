//! Ternary (`test ? consequent : alternate`) wrap strategy.

use serde_json::Value;

use crate::layout::Layout;

pub fn wrap(layout: &mut Layout, node: &Value, _parent: Option<&Value>) {
    let Some(test) = node.get("test") else { return };
    let Some(consequent) = node.get("consequent") else { return };
    let Some(alternate) = node.get("alternate") else { return };

    let Some(test_last) = layout.last_token(test) else { return };
    let Some(cons_first) = layout.first_token(consequent) else { return };
    let Some(cons_last) = layout.last_token(consequent) else { return };
    let Some(alt_first) = layout.first_token(alternate) else { return };

    let Some(q) = layout.find_next(Some(test_last), |h| layout.list.is_punctuator(h, "?")) else {
        return;
    };
    let Some(colon) =
        layout.find_next(Some(cons_last), |h| layout.list.is_punctuator(h, ":"))
    else {
        return;
    };

    let indent_level = layout.get_indent_level(test_last) + 1;
    layout.line_break_before(q);
    layout.indent_level(q, indent_level);
    layout.line_break_before(colon);
    layout.indent_level(colon, indent_level);
    let _ = cons_first;
    let _ = alt_first;
}

pub fn no_wrap(layout: &mut Layout, node: &Value, _parent: Option<&Value>) {
    let Some(test) = node.get("test") else { return };
    let Some(consequent) = node.get("consequent") else { return };

    let Some(test_last) = layout.last_token(test) else { return };
    let Some(cons_last) = layout.last_token(consequent) else { return };

    if let Some(q) = layout.find_next(Some(test_last), |h| layout.list.is_punctuator(h, "?")) {
        layout.no_line_break_before(q);
        layout.spaces(q);
    }
    if let Some(colon) = layout.find_next(Some(cons_last), |h| layout.list.is_punctuator(h, ":")) {
        layout.no_line_break_before(colon);
        layout.spaces(colon);
    }
}
