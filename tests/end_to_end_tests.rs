//! End-to-end fixture scenarios (`SPEC_FULL.md` §8, "Concrete end-to-end
//! scenarios"), exercised through the public `Formatter` API against a
//! hand-built `ParsedProgram`, matching `SPEC_FULL.md` §4.8's "this is how
//! the engine is tested in isolation from the (out-of-scope) parser."

mod support;

use rstest::rstest;
use scriptfmt::{Formatter, Options, ParsedProgram, QuoteStyle, RawToken};

use support::FixtureParser;

fn format_with(program: ParsedProgram, options: Options, text: &str) -> String {
    let formatter = Formatter::new(Box::new(FixtureParser { program }), options, vec![]).unwrap();
    formatter.format(text, None).unwrap()
}

#[test]
fn quote_conversion() {
    let text = "a = 'x';";
    let program = ParsedProgram {
        ast: serde_json::json!({
            "type": "Program",
            "range": [0, 8],
            "body": [{
                "type": "ExpressionStatement",
                "range": [0, 8],
                "expression": {
                    "type": "AssignmentExpression",
                    "range": [0, 7],
                    "operator": "=",
                    "left": {"type": "Identifier", "range": [0, 1]},
                    "right": {"type": "Literal", "range": [4, 7]}
                }
            }]
        }),
        tokens: vec![
            RawToken { kind: "Identifier".into(), value: "a".into(), range: (0, 1) },
            RawToken { kind: "Punctuator".into(), value: "=".into(), range: (2, 3) },
            RawToken { kind: "String".into(), value: "'x'".into(), range: (4, 7) },
            RawToken { kind: "Punctuator".into(), value: ";".into(), range: (7, 8) },
        ],
        comments: vec![],
        visitor_keys: Default::default(),
    };
    let mut options = Options::default();
    options.quotes = QuoteStyle::Double;
    options.semicolons = true;
    assert_eq!(format_with(program, options, text), "a = \"x\";");
}

#[test]
fn empty_line_cap() {
    let text = "a;\n\n\n\nb;";
    let program = ParsedProgram {
        ast: serde_json::json!({
            "type": "Program",
            "range": [0, 8],
            "body": [
                {
                    "type": "ExpressionStatement",
                    "range": [0, 2],
                    "expression": {"type": "Identifier", "range": [0, 1]}
                },
                {
                    "type": "ExpressionStatement",
                    "range": [6, 8],
                    "expression": {"type": "Identifier", "range": [6, 7]}
                }
            ]
        }),
        tokens: vec![
            RawToken { kind: "Identifier".into(), value: "a".into(), range: (0, 1) },
            RawToken { kind: "Punctuator".into(), value: ";".into(), range: (1, 2) },
            RawToken { kind: "Identifier".into(), value: "b".into(), range: (6, 7) },
            RawToken { kind: "Punctuator".into(), value: ";".into(), range: (7, 8) },
        ],
        comments: vec![],
        visitor_keys: Default::default(),
    };
    let mut options = Options::default();
    options.max_empty_lines = 1;
    assert_eq!(format_with(program, options, text), "a;\n\nb;");
}

#[test]
fn punctuator_spacing_in_call_arguments() {
    let text = "f(a ,b ,c)";
    let program = ParsedProgram {
        ast: serde_json::json!({
            "type": "CallExpression",
            "range": [0, 10],
            "callee": {"type": "Identifier", "range": [0, 1]},
            "arguments": [
                {"type": "Identifier", "range": [2, 3]},
                {"type": "Identifier", "range": [5, 6]},
                {"type": "Identifier", "range": [8, 9]}
            ]
        }),
        tokens: vec![
            RawToken { kind: "Identifier".into(), value: "f".into(), range: (0, 1) },
            RawToken { kind: "Punctuator".into(), value: "(".into(), range: (1, 2) },
            RawToken { kind: "Identifier".into(), value: "a".into(), range: (2, 3) },
            RawToken { kind: "Punctuator".into(), value: ",".into(), range: (4, 5) },
            RawToken { kind: "Identifier".into(), value: "b".into(), range: (5, 6) },
            RawToken { kind: "Punctuator".into(), value: ",".into(), range: (7, 8) },
            RawToken { kind: "Identifier".into(), value: "c".into(), range: (8, 9) },
            RawToken { kind: "Punctuator".into(), value: ")".into(), range: (9, 10) },
        ],
        comments: vec![],
        visitor_keys: Default::default(),
    };
    assert_eq!(
        format_with(program, Options::default(), text),
        "f(a, b, c)"
    );
}

#[test]
fn array_on_one_line_spacing() {
    let text = "[1,2,3]";
    let program = ParsedProgram {
        ast: serde_json::json!({
            "type": "ArrayExpression",
            "range": [0, 7],
            "elements": [
                {"type": "Literal", "range": [1, 2]},
                {"type": "Literal", "range": [3, 4]},
                {"type": "Literal", "range": [5, 6]}
            ]
        }),
        tokens: vec![
            RawToken { kind: "Punctuator".into(), value: "[".into(), range: (0, 1) },
            RawToken { kind: "Numeric".into(), value: "1".into(), range: (1, 2) },
            RawToken { kind: "Punctuator".into(), value: ",".into(), range: (2, 3) },
            RawToken { kind: "Numeric".into(), value: "2".into(), range: (3, 4) },
            RawToken { kind: "Punctuator".into(), value: ",".into(), range: (4, 5) },
            RawToken { kind: "Numeric".into(), value: "3".into(), range: (5, 6) },
            RawToken { kind: "Punctuator".into(), value: "]".into(), range: (6, 7) },
        ],
        comments: vec![],
        visitor_keys: Default::default(),
    };
    assert_eq!(
        format_with(program, Options::default(), text),
        "[1, 2, 3]"
    );
}

#[test]
fn wraps_array_on_overflow_with_trailing_comma() {
    let text = "const xs = [1, 2, 3, 4, 5, 6, 7];";
    let elements: Vec<serde_json::Value> = [(12, 13), (15, 16), (18, 19), (21, 22), (24, 25), (27, 28), (30, 31)]
        .into_iter()
        .map(|(start, end)| serde_json::json!({"type": "Literal", "range": [start, end]}))
        .collect();
    let mut tokens = vec![
        RawToken { kind: "Keyword".into(), value: "const".into(), range: (0, 5) },
        RawToken { kind: "Identifier".into(), value: "xs".into(), range: (6, 8) },
        RawToken { kind: "Punctuator".into(), value: "=".into(), range: (9, 10) },
        RawToken { kind: "Punctuator".into(), value: "[".into(), range: (11, 12) },
    ];
    let numbers = ["1", "2", "3", "4", "5", "6", "7"];
    let starts = [12, 15, 18, 21, 24, 27, 30];
    for (i, (&n, &start)) in numbers.iter().zip(starts.iter()).enumerate() {
        tokens.push(RawToken { kind: "Numeric".into(), value: n.into(), range: (start, start + 1) });
        if i < numbers.len() - 1 {
            tokens.push(RawToken { kind: "Punctuator".into(), value: ",".into(), range: (start + 1, start + 2) });
        }
    }
    tokens.push(RawToken { kind: "Punctuator".into(), value: "]".into(), range: (31, 32) });
    tokens.push(RawToken { kind: "Punctuator".into(), value: ";".into(), range: (32, 33) });

    let program = ParsedProgram {
        ast: serde_json::json!({
            "type": "VariableDeclaration",
            "range": [0, 33],
            "kind": "const",
            "declarations": [{
                "type": "VariableDeclarator",
                "range": [6, 32],
                "id": {"type": "Identifier", "range": [6, 8]},
                "init": {
                    "type": "ArrayExpression",
                    "range": [11, 32],
                    "elements": elements
                }
            }]
        }),
        tokens,
        comments: vec![],
        visitor_keys: Default::default(),
    };
    let mut options = Options::default();
    options.max_line_length = 20;
    options.trailing_commas = true;
    let expected = "const xs = [\n  1,\n  2,\n  3,\n  4,\n  5,\n  6,\n  7,\n];";
    assert_eq!(format_with(program, options, text), expected);
}

#[rstest]
#[case(false)]
#[case(true)]
fn export_named_declaration_semicolon_exception(#[case] has_inline_declaration: bool) {
    use scriptfmt::layout::Layout;
    use scriptfmt::visitor::TaskVisitor;

    if has_inline_declaration {
        let text = "export function f(){}";
        let ast = serde_json::json!({
            "type": "ExportNamedDeclaration",
            "range": [0, 21],
            "declaration": {
                "type": "FunctionDeclaration",
                "range": [7, 21],
                "id": {"type": "Identifier", "range": [16, 17]},
                "params": [],
                "body": {"type": "BlockStatement", "range": [19, 21], "body": []}
            },
            "specifiers": []
        });
        let program = ParsedProgram {
            ast: ast.clone(),
            tokens: vec![
                RawToken { kind: "Keyword".into(), value: "export".into(), range: (0, 6) },
                RawToken { kind: "Keyword".into(), value: "function".into(), range: (7, 15) },
                RawToken { kind: "Identifier".into(), value: "f".into(), range: (16, 17) },
                RawToken { kind: "Punctuator".into(), value: "(".into(), range: (17, 18) },
                RawToken { kind: "Punctuator".into(), value: ")".into(), range: (18, 19) },
                RawToken { kind: "Punctuator".into(), value: "{".into(), range: (19, 20) },
                RawToken { kind: "Punctuator".into(), value: "}".into(), range: (20, 21) },
            ],
            comments: vec![],
            visitor_keys: Default::default(),
        };
        let mut options = Options::default();
        options.semicolons = true;
        let mut layout = Layout::build(&program, text, options);
        let keys = Default::default();
        let mut tv: TaskVisitor<Layout> = TaskVisitor::new(&keys);
        tv.add_pass(scriptfmt::passes::semicolons::pass());
        tv.run(&ast, &mut layout);
        assert_eq!(layout.list.serialize(), text);
    } else {
        let text = "export { a } from \"m\"";
        let ast = serde_json::json!({
            "type": "ExportNamedDeclaration",
            "range": [0, 21],
            "declaration": null,
            "specifiers": [{
                "type": "ExportSpecifier",
                "range": [9, 10],
                "local": {"type": "Identifier", "range": [9, 10]},
                "exported": {"type": "Identifier", "range": [9, 10]}
            }],
            "source": {"type": "Literal", "range": [18, 21]}
        });
        let program = ParsedProgram {
            ast: ast.clone(),
            tokens: vec![
                RawToken { kind: "Keyword".into(), value: "export".into(), range: (0, 6) },
                RawToken { kind: "Punctuator".into(), value: "{".into(), range: (7, 8) },
                RawToken { kind: "Identifier".into(), value: "a".into(), range: (9, 10) },
                RawToken { kind: "Punctuator".into(), value: "}".into(), range: (11, 12) },
                RawToken { kind: "Keyword".into(), value: "from".into(), range: (13, 17) },
                RawToken { kind: "String".into(), value: "\"m\"".into(), range: (18, 21) },
            ],
            comments: vec![],
            visitor_keys: Default::default(),
        };
        let mut options = Options::default();
        options.semicolons = true;
        let mut layout = Layout::build(&program, text, options);
        let keys = Default::default();
        let mut tv: TaskVisitor<Layout> = TaskVisitor::new(&keys);
        tv.add_pass(scriptfmt::passes::semicolons::pass());
        tv.run(&ast, &mut layout);
        assert_eq!(layout.list.serialize(), "export { a } from \"m\";");
    }
}
