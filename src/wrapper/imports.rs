//! Import-declaration specifier-list wrap strategy.

use serde_json::Value;

use crate::layout::Layout;

use super::elements_of;

fn named_specifiers(node: &Value) -> Vec<Value> {
    elements_of(node, "specifiers")
        .iter()
        .filter(|s| s.get("type").and_then(Value::as_str) == Some("ImportSpecifier"))
        .cloned()
        .collect()
}

pub fn wrap(layout: &mut Layout, node: &Value, _parent: Option<&Value>) {
    let specifiers = named_specifiers(node);
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

    let indent_level = layout.get_indent_level(open) + 1;
    layout.line_break_after(open);
    layout.line_break_before(close);
    for specifier in &specifiers {
        if let Some(first) = layout.first_token(specifier) {
            layout.indent_level(first, indent_level);
        }
        if let Some(last) = layout.last_token(specifier) {
            if let Some(next) = layout.find_next(Some(last), |_| true) {
                if layout.list.is_punctuator(next, ",") {
                    layout.line_break_after(next);
                }
            }
        }
    }
}

pub fn no_wrap(layout: &mut Layout, node: &Value, _parent: Option<&Value>) {
    let specifiers = named_specifiers(node);
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
    layout.no_line_break_after(open);
    layout.no_line_break_before(close);
    layout.space_after(open);
    layout.space_before(close);
    for specifier in &specifiers {
        if let Some(last) = layout.last_token(specifier) {
            if let Some(next) = layout.find_next(Some(last), |_| true) {
                if layout.list.is_punctuator(next, ",") {
                    layout.no_line_break_after(next);
                }
            }
        }
    }
}
