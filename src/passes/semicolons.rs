//! Semicolon insertion/removal pass.
//!
//! `SPEC_FULL.md` §4.6: a fixed list of statement kinds always get a
//! trailing-semicolon decision; a few kinds carry an exception that turns
//! the decision off for one specific shape of that kind.

use serde_json::Value;

use crate::layout::Layout;
use crate::parser_api::node_range;
use crate::visitor::HandlerMap;

fn adjust(layout: &mut Layout, node: &Value) {
    let Some(last) = layout.last_token(node) else {
        return;
    };
    if layout.options.semicolons {
        layout.semicolon_after(last);
    } else {
        layout.no_semicolon_after(last);
    }
}

fn always(layout: &mut Layout, node: &Value, _parent: Option<&Value>) {
    adjust(layout, node);
}

fn export_named(layout: &mut Layout, node: &Value, _parent: Option<&Value>) {
    if node.get("declaration").map(Value::is_null).unwrap_or(true) {
        adjust(layout, node);
    }
}

fn export_default(layout: &mut Layout, node: &Value, _parent: Option<&Value>) {
    let declares_class_or_function = node
        .get("declaration")
        .and_then(|d| d.get("type"))
        .and_then(Value::as_str)
        .is_some_and(|t| t == "ClassDeclaration" || t == "FunctionDeclaration");
    if !declares_class_or_function {
        adjust(layout, node);
    }
}

fn variable_declaration(layout: &mut Layout, node: &Value, parent: Option<&Value>) {
    let Some(parent) = parent else {
        adjust(layout, node);
        return;
    };
    let parent_kind = parent.get("type").and_then(Value::as_str);
    let is_for_in_or_of = matches!(parent_kind, Some("ForInStatement") | Some("ForOfStatement"));
    let is_parents_left = parent
        .get("left")
        .and_then(node_range)
        .zip(node_range(node))
        .is_some_and(|(l, n)| l == n);
    if is_for_in_or_of && is_parents_left {
        return;
    }
    adjust(layout, node);
}

/// Build the semicolons pass's handler map. Matches `SPEC_FULL.md` §4.6's
/// "each pass is a pure factory" shape, taking no `context` argument
/// because nothing here varies across a single `format` call beyond what
/// `Layout` (the `Ctx` type parameter) already carries.
pub fn pass() -> HandlerMap<Layout> {
    let mut handlers = HandlerMap::new();
    for kind in [
        "ExpressionStatement",
        "ReturnStatement",
        "ThrowStatement",
        "DoWhileStatement",
        "DebuggerStatement",
        "BreakStatement",
        "ContinueStatement",
        "ImportDeclaration",
        "ExportAllDeclaration",
    ] {
        handlers.insert(kind, vec![always as crate::visitor::Handler<Layout>]);
    }
    handlers.insert("ExportNamedDeclaration", vec![export_named]);
    handlers.insert("ExportDefaultDeclaration", vec![export_default]);
    handlers.insert("VariableDeclaration", vec![variable_declaration]);
    handlers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Options;
    use crate::parser_api::{ParsedProgram, RawToken};
    use crate::visitor::TaskVisitor;

    fn run_pass(text: &str, tokens: Vec<RawToken>, ast: Value, semicolons: bool) -> String {
        let program = ParsedProgram {
            ast: ast.clone(),
            tokens,
            comments: vec![],
            visitor_keys: Default::default(),
        };
        let mut options = Options::default();
        options.semicolons = semicolons;
        let mut layout = Layout::build(&program, text, options);
        let keys = Default::default();
        let mut tv: TaskVisitor<Layout> = TaskVisitor::new(&keys);
        tv.add_pass(pass());
        tv.run(&ast, &mut layout);
        layout.list.serialize()
    }

    #[test]
    fn inserts_semicolon_after_expression_statement() {
        let text = "a";
        let tokens = vec![RawToken {
            kind: "Identifier".into(),
            value: "a".into(),
            range: (0, 1),
        }];
        let ast = serde_json::json!({
            "type": "Program",
            "range": [0, 1],
            "body": [{
                "type": "ExpressionStatement",
                "range": [0, 1],
                "expression": {"type": "Identifier", "range": [0, 1]}
            }]
        });
        assert_eq!(run_pass(text, tokens, ast, true), "a;");
    }

    #[test]
    fn removes_semicolon_when_disabled() {
        let text = "a;";
        let tokens = vec![
            RawToken { kind: "Identifier".into(), value: "a".into(), range: (0, 1) },
            RawToken { kind: "Punctuator".into(), value: ";".into(), range: (1, 2) },
        ];
        let ast = serde_json::json!({
            "type": "Program",
            "range": [0, 2],
            "body": [{
                "type": "ExpressionStatement",
                "range": [0, 2],
                "expression": {"type": "Identifier", "range": [0, 1]}
            }]
        });
        assert_eq!(run_pass(text, tokens, ast, false), "a");
    }

    #[test]
    fn export_default_function_gets_no_semicolon() {
        let text = "export default function f(){}";
        let tokens = vec![
            RawToken { kind: "Keyword".into(), value: "export".into(), range: (0, 6) },
            RawToken { kind: "Keyword".into(), value: "default".into(), range: (7, 14) },
            RawToken { kind: "Keyword".into(), value: "function".into(), range: (15, 23) },
            RawToken { kind: "Identifier".into(), value: "f".into(), range: (24, 25) },
            RawToken { kind: "Punctuator".into(), value: "(".into(), range: (25, 26) },
            RawToken { kind: "Punctuator".into(), value: ")".into(), range: (26, 27) },
            RawToken { kind: "Punctuator".into(), value: "{".into(), range: (28, 29) },
            RawToken { kind: "Punctuator".into(), value: "}".into(), range: (29, 30) },
        ];
        let ast = serde_json::json!({
            "type": "Program",
            "range": [0, 30],
            "body": [{
                "type": "ExportDefaultDeclaration",
                "range": [0, 30],
                "declaration": {
                    "type": "FunctionDeclaration",
                    "range": [15, 30],
                    "id": {"type": "Identifier", "range": [24, 25]},
                    "params": [],
                    "body": {"type": "BlockStatement", "range": [28, 30], "body": []}
                }
            }]
        });
        assert_eq!(run_pass(text, tokens, ast, true), text);
    }

    #[test]
    fn variable_declaration_in_for_of_left_is_skipped() {
        let text = "for (let x of xs) {}";
        let tokens = vec![
            RawToken { kind: "Keyword".into(), value: "for".into(), range: (0, 3) },
            RawToken { kind: "Punctuator".into(), value: "(".into(), range: (4, 5) },
            RawToken { kind: "Keyword".into(), value: "let".into(), range: (5, 8) },
            RawToken { kind: "Identifier".into(), value: "x".into(), range: (9, 10) },
            RawToken { kind: "Keyword".into(), value: "of".into(), range: (11, 13) },
            RawToken { kind: "Identifier".into(), value: "xs".into(), range: (14, 16) },
            RawToken { kind: "Punctuator".into(), value: ")".into(), range: (16, 17) },
            RawToken { kind: "Punctuator".into(), value: "{".into(), range: (18, 19) },
            RawToken { kind: "Punctuator".into(), value: "}".into(), range: (19, 20) },
        ];
        let left = serde_json::json!({
            "type": "VariableDeclaration",
            "range": [5, 10],
            "kind": "let",
            "declarations": [{
                "type": "VariableDeclarator",
                "range": [9, 10],
                "id": {"type": "Identifier", "range": [9, 10]}
            }]
        });
        let ast = serde_json::json!({
            "type": "Program",
            "range": [0, 20],
            "body": [{
                "type": "ForOfStatement",
                "range": [0, 20],
                "left": left,
                "right": {"type": "Identifier", "range": [14, 16]},
                "body": {"type": "BlockStatement", "range": [18, 20], "body": []}
            }]
        });
        assert_eq!(run_pass(text, tokens, ast, true), text);
    }
}
