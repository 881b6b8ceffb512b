//! Builds a [`TokenList`] from a parser's flat token/comment arrays plus
//! the original source text, so that every character of the input is
//! accounted for by some part (invariant I2 in `SPEC_FULL.md` §3).
//!
//! Mirrors the indent-run handling in the teacher's
//! `lexer/core/indentation.rs` `IndentationTracker`: a run of non-newline
//! whitespace immediately following a line break (or at the very start of
//! the file) is the line's indentation and is preserved verbatim; any other
//! inline whitespace run is a candidate for collapsing to a single space.

use std::collections::HashMap;

use crate::error::BuildWarning;
use crate::options::Options;
use crate::parser_api::ParsedProgram;
use crate::token_stream::part::{Handle, Part, TokenKind};
use crate::token_stream::quotes::normalize_quotes;
use crate::token_stream::token_list::TokenList;

/// Leading whitespace recorded for a comment at build time, keyed by the
/// comment's handle, so a later indent-normalization pass can tell a
/// comment's *original* indentation from one synthesized during a rewrite
/// (`SPEC_FULL.md` §9, "Comment indentation preservation").
pub type OriginalIndents = HashMap<Handle, String>;

pub struct BuildResult {
    pub list: TokenList,
    pub warnings: Vec<BuildWarning>,
    pub original_indents: OriginalIndents,
}

pub fn build(program: &ParsedProgram, text: &str, options: &Options) -> BuildResult {
    let mut list = TokenList::new();
    let mut warnings = Vec::new();
    let mut original_indents = OriginalIndents::new();

    let mut tokens = program.tokens.clone();
    tokens.sort_by_key(|t| t.range.0);
    let mut comments = program.comments.clone();
    comments.sort_by_key(|c| c.range.0);

    let len = text.len();
    let mut pos = 0usize;
    let mut token_idx = 0usize;
    let mut comment_idx = 0usize;
    let mut consecutive_line_breaks = 0usize;

    while pos < len {
        if comment_idx < comments.len() && comments[comment_idx].range.0 == pos {
            let raw = &comments[comment_idx];
            let preceding_indent = list
                .last()
                .filter(|&h| list.is_indent(h))
                .and_then(|h| list.get(h))
                .map(|p| p.value().to_string());

            let part = match raw.kind.as_str() {
                "Line" => Part::LineComment {
                    value: raw.value.clone(),
                    range: raw.range,
                },
                "Block" => Part::BlockComment {
                    value: raw.value.clone(),
                    range: raw.range,
                },
                _ => Part::HashbangComment {
                    value: raw.value.clone(),
                    range: raw.range,
                },
            };
            let handle = list.push(part);
            if let Some(indent) = preceding_indent {
                original_indents.insert(handle, indent);
            }

            pos = raw.range.1;
            comment_idx += 1;
            consecutive_line_breaks = 0;
            continue;
        }

        if token_idx < tokens.len() && tokens[token_idx].range.0 == pos {
            let raw = &tokens[token_idx];
            let kind = map_token_kind(&raw.kind);
            let value = if kind == TokenKind::String {
                normalize_quotes(&raw.value, options.quotes)
            } else {
                raw.value.clone()
            };
            list.push(Part::Token {
                kind,
                value,
                range: raw.range,
            });

            pos = raw.range.1;
            token_idx += 1;
            consecutive_line_breaks = 0;
            continue;
        }

        let ch = match text[pos..].chars().next() {
            Some(c) => c,
            None => break,
        };

        if ch == '\n' || ch == '\r' {
            if let Some(last) = list.last() {
                if list.is_whitespace(last) {
                    let _ = list.delete(last);
                }
            }
            let end = if ch == '\r' && text[pos..].starts_with("\r\n") {
                pos + 2
            } else {
                pos + ch.len_utf8()
            };
            if consecutive_line_breaks < options.max_empty_lines + 1 {
                list.push(Part::LineBreak {
                    value: text[pos..end].to_string(),
                    range: (pos, end),
                });
                consecutive_line_breaks += 1;
            }
            pos = end;
            continue;
        }

        if ch.is_whitespace() {
            let start = pos;
            let mut end = pos;
            for c in text[pos..].chars() {
                if c == '\n' || c == '\r' || !c.is_whitespace() {
                    break;
                }
                end += c.len_utf8();
            }
            let raw_run = &text[start..end];
            let is_indent_position = match list.last() {
                None => true,
                Some(h) => list.is_line_break(h),
            };
            let value = if is_indent_position {
                raw_run.to_string()
            } else if options.collapse_whitespace {
                " ".to_string()
            } else {
                raw_run.to_string()
            };
            list.push(Part::Whitespace {
                value,
                range: (start, end),
            });
            pos = end;
            consecutive_line_breaks = 0;
            continue;
        }

        warnings.push(BuildWarning {
            offset: pos,
            message: format!(
                "position not covered by any token, comment, or whitespace run: '{}'",
                ch
            ),
        });
        pos += ch.len_utf8();
    }

    BuildResult {
        list,
        warnings,
        original_indents,
    }
}

fn map_token_kind(raw: &str) -> TokenKind {
    match raw {
        "Keyword" => TokenKind::Keyword,
        "Identifier" | "PrivateIdentifier" | "JSXIdentifier" => TokenKind::Identifier,
        "Punctuator" | "JSXText" => TokenKind::Punctuator,
        "String" => TokenKind::String,
        "Numeric" => TokenKind::Numeric,
        "Boolean" => TokenKind::Boolean,
        "Null" => TokenKind::Null,
        "Template" => TokenKind::Template,
        "RegularExpression" => TokenKind::RegExp,
        _ => TokenKind::Identifier,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Options;
    use crate::parser_api::{ParsedProgram, RawToken};

    fn program(tokens: Vec<RawToken>) -> ParsedProgram {
        ParsedProgram {
            ast: serde_json::json!({"type": "Program", "range": [0, 0]}),
            tokens,
            comments: vec![],
            visitor_keys: Default::default(),
        }
    }

    #[test]
    fn covers_every_character() {
        let text = "a = 1;\n";
        let tokens = vec![
            RawToken {
                kind: "Identifier".into(),
                value: "a".into(),
                range: (0, 1),
            },
            RawToken {
                kind: "Punctuator".into(),
                value: "=".into(),
                range: (2, 3),
            },
            RawToken {
                kind: "Numeric".into(),
                value: "1".into(),
                range: (4, 5),
            },
            RawToken {
                kind: "Punctuator".into(),
                value: ";".into(),
                range: (5, 6),
            },
        ];
        let result = build(&program(tokens), text, &Options::default());
        assert!(result.warnings.is_empty());
        assert_eq!(result.list.serialize(), text);
    }

    #[test]
    fn preserves_leading_indent() {
        let text = "if (x) {\n  y();\n}";
        let tokens = vec![
            RawToken { kind: "Keyword".into(), value: "if".into(), range: (0, 2) },
            RawToken { kind: "Punctuator".into(), value: "(".into(), range: (3, 4) },
            RawToken { kind: "Identifier".into(), value: "x".into(), range: (4, 5) },
            RawToken { kind: "Punctuator".into(), value: ")".into(), range: (5, 6) },
            RawToken { kind: "Punctuator".into(), value: "{".into(), range: (7, 8) },
            RawToken { kind: "Identifier".into(), value: "y".into(), range: (11, 12) },
            RawToken { kind: "Punctuator".into(), value: "(".into(), range: (12, 13) },
            RawToken { kind: "Punctuator".into(), value: ")".into(), range: (13, 14) },
            RawToken { kind: "Punctuator".into(), value: ";".into(), range: (14, 15) },
            RawToken { kind: "Punctuator".into(), value: "}".into(), range: (16, 17) },
        ];
        let result = build(&program(tokens), text, &Options::default());
        assert_eq!(result.list.serialize(), text);
    }

    #[test]
    fn caps_consecutive_line_breaks() {
        let text = "a;\n\n\n\nb;";
        let tokens = vec![
            RawToken { kind: "Identifier".into(), value: "a".into(), range: (0, 1) },
            RawToken { kind: "Punctuator".into(), value: ";".into(), range: (1, 2) },
            RawToken { kind: "Identifier".into(), value: "b".into(), range: (6, 7) },
            RawToken { kind: "Punctuator".into(), value: ";".into(), range: (7, 8) },
        ];
        let mut options = Options::default();
        options.max_empty_lines = 1;
        let result = build(&program(tokens), text, &options);
        assert_eq!(result.list.serialize(), "a;\n\nb;");
    }

    #[test]
    fn normalizes_string_quotes() {
        let text = "'x'";
        let tokens = vec![RawToken {
            kind: "String".into(),
            value: "'x'".into(),
            range: (0, 3),
        }];
        let mut options = Options::default();
        options.quotes = crate::options::QuoteStyle::Double;
        let result = build(&program(tokens), text, &options);
        assert_eq!(result.list.serialize(), "\"x\"");
    }
}
