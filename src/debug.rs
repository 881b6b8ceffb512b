//! Renders a [`crate::token_stream::token_list::TokenList`] as an indented,
//! multi-line tree for use in test assertions and `insta` snapshots.
//!
//! Grounded on the teacher's `tools/treeviz`/`ast_debug`, generalized from an
//! AST-node visualizer to a part-stream visualizer: this crate's
//! tree-shaped artifact under test is the token stream, not the AST
//! (`SPEC_FULL.md` §4.9).

use std::fmt::Write as _;

use crate::token_stream::part::Part;
use crate::token_stream::token_list::TokenList;

fn kind_label(part: &Part) -> &'static str {
    match part {
        Part::Token { .. } => "Token",
        Part::LineComment { .. } => "LineComment",
        Part::BlockComment { .. } => "BlockComment",
        Part::HashbangComment { .. } => "HashbangComment",
        Part::LineBreak { .. } => "LineBreak",
        Part::Whitespace { .. } => "Whitespace",
    }
}

/// Escapes control characters so one part renders on exactly one line.
fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}

/// One line per part: `<kind> "<escaped value>"`, with a trailing
/// `(synthetic)` marker for parts inserted by a rewrite rather than present
/// in the original source.
pub fn render(list: &TokenList) -> String {
    let mut out = String::new();
    let mut cur = list.first();
    while let Some(h) = cur {
        if let Some(part) = list.get(h) {
            let _ = write!(
                out,
                "{} \"{}\"{}\n",
                kind_label(part),
                escape(part.value()),
                if part.is_synthetic() { " (synthetic)" } else { "" }
            );
        }
        cur = list.next(h);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token_stream::part::{TokenKind, SYNTHETIC_RANGE};

    #[test]
    fn renders_one_line_per_part_with_escaping() {
        let mut list = TokenList::new();
        list.push(Part::Token {
            kind: TokenKind::Identifier,
            value: "a".into(),
            range: (0, 1),
        });
        list.push(Part::LineBreak {
            value: "\n".into(),
            range: SYNTHETIC_RANGE,
        });
        let rendered = render(&list);
        assert_eq!(
            rendered,
            "Token \"a\"\nLineBreak \"\\n\" (synthetic)\n"
        );
    }

    #[test]
    fn marks_synthetic_parts() {
        let mut list = TokenList::new();
        list.push(Part::Whitespace {
            value: " ".into(),
            range: SYNTHETIC_RANGE,
        });
        assert!(render(&list).contains("(synthetic)"));
    }
}
