//! Wrap strategy for statements with a parenthesized test clause
//! (`if`/`while`/`do...while`/`for`): break before the test's closing `)`.

use serde_json::Value;

use crate::layout::Layout;
use crate::parser_api::node_kind;
use crate::token_stream::part::Handle;

/// The `)` closing the test/condition clause. For `DoWhileStatement` this is
/// the `)` of the trailing `while (...)`, found by scanning forward from the
/// node's own last token (the teacher's measurement point for this node, per
/// `SPEC_FULL.md` §4.6).
fn test_close_paren(layout: &Layout, node: &Value) -> Option<Handle> {
    match node_kind(node) {
        Some("DoWhileStatement") => {
            // The node's own last boundary token is already the `while`
            // clause's closing `)` (the boundary map excludes only a
            // trailing semicolon, which sits after it).
            layout.last_token(node)
        }
        _ => {
            let test = node.get("test")?;
            let test_last = layout.last_token(test)?;
            layout.find_next(Some(test_last), |h| layout.list.is_punctuator(h, ")"))
        }
    }
}

fn test_open_paren(layout: &Layout, node: &Value, close: Handle) -> Option<Handle> {
    match node_kind(node) {
        Some("DoWhileStatement") => {
            layout.find_previous(Some(close), |h| layout.list.is_punctuator(h, "("))
        }
        _ => {
            let test = node.get("test")?;
            let test_first = layout.first_token(test)?;
            layout.find_previous(Some(test_first), |h| layout.list.is_punctuator(h, "("))
        }
    }
}

pub fn wrap(layout: &mut Layout, node: &Value, _parent: Option<&Value>) {
    let Some(close) = test_close_paren(layout, node) else {
        return;
    };
    let indent_level = layout.get_indent_level(close) + 1;
    layout.line_break_before(close);
    layout.indent_level(close, indent_level);
}

pub fn no_wrap(layout: &mut Layout, node: &Value, _parent: Option<&Value>) {
    let Some(close) = test_close_paren(layout, node) else {
        return;
    };
    layout.no_line_break_before(close);
    layout.no_space_before(close);
    if let Some(open) = test_open_paren(layout, node, close) {
        layout.no_space_after(open);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Options;
    use crate::parser_api::{ParsedProgram, RawToken};

    fn layout_for(text: &str, tokens: Vec<RawToken>, ast: Value) -> Layout {
        let program = ParsedProgram {
            ast,
            tokens,
            comments: vec![],
            visitor_keys: Default::default(),
        };
        Layout::build(&program, text, Options::default())
    }

    #[test]
    fn wrap_if_breaks_before_closing_paren() {
        let text = "if (x) {}";
        let tokens = vec![
            RawToken { kind: "Keyword".into(), value: "if".into(), range: (0, 2) },
            RawToken { kind: "Punctuator".into(), value: "(".into(), range: (3, 4) },
            RawToken { kind: "Identifier".into(), value: "x".into(), range: (4, 5) },
            RawToken { kind: "Punctuator".into(), value: ")".into(), range: (5, 6) },
            RawToken { kind: "Punctuator".into(), value: "{".into(), range: (7, 8) },
            RawToken { kind: "Punctuator".into(), value: "}".into(), range: (8, 9) },
        ];
        let ast = serde_json::json!({
            "type": "IfStatement",
            "range": [0, 9],
            "test": {"type": "Identifier", "range": [4, 5]},
            "consequent": {"type": "BlockStatement", "range": [7, 9], "body": []}
        });
        let mut layout = layout_for(text, tokens, ast.clone());
        wrap(&mut layout, &ast, None);
        assert!(layout.list.serialize().contains("x\n"));
    }
}
