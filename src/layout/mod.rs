//! `Layout`: the stream plus the AST binding, and the primitive operation
//! surface every style rule is built from.
//!
//! Grounded on the teacher's `tools/detokenizer`, which reconstructs text by
//! walking and mutating a token tree — the same shape of problem, inverted:
//! instead of producing text from an immutable tree, `Layout` rewrites a
//! mutable stream under instruction from an immutable tree.

pub mod boundary;
pub mod metrics;
mod primitives;

use serde_json::Value;

use std::collections::HashSet;

use crate::error::BuildWarning;
use crate::options::Options;
use crate::parser_api::{node_kind, node_range, ParsedProgram};
use crate::token_stream::builder::{self, OriginalIndents};
use crate::token_stream::part::Handle;
use crate::token_stream::token_list::TokenList;
use crate::visitor::Visitor;

use boundary::{BoundaryMap, NodeBoundary};

pub struct Layout {
    pub list: TokenList,
    pub options: Options,
    boundaries: BoundaryMap,
    warnings: Vec<BuildWarning>,
    original_indents: OriginalIndents,
    /// Opening-bracket handles of nodes the variable-declaration indent
    /// correction applies to (`SPEC_FULL.md` §4.5.1): the sole case where a
    /// node's wrap depth depends on its parent, which the final bracket-depth
    /// indent pass (`passes::indent`) would otherwise recompute from scratch
    /// and silently undo.
    indent_correction_opens: HashSet<Handle>,
}

/// Node kinds the variable-declaration indent correction is ever applied to
/// ("an aggregate or function", `SPEC_FULL.md` §4.5.1).
fn is_correction_eligible_kind(kind: &str) -> bool {
    matches!(
        kind,
        "ArrayExpression"
            | "ArrayPattern"
            | "ObjectExpression"
            | "ObjectPattern"
            | "FunctionDeclaration"
            | "FunctionExpression"
            | "ArrowFunctionExpression"
    )
}

/// The part whose indent level the correction actually adjusts: for a
/// function that is its own body's `{`, since the function node's own
/// range starts at the `function` keyword (or the parameter list), not at
/// the brace `passes::indent` tracks nesting against; for an aggregate
/// literal it is the node's own opening bracket.
fn correction_open_handle(candidate: &Value, boundaries: &BoundaryMap) -> Option<Handle> {
    let kind = node_kind(candidate)?;
    let target = match kind {
        "FunctionDeclaration" | "FunctionExpression" | "ArrowFunctionExpression" => {
            candidate.get("body")?
        }
        _ => candidate,
    };
    let range = node_range(target)?;
    boundaries.get(range).map(|b| b.first)
}

/// Walks top-down from every `VariableDeclaration` node rather than
/// bottom-up from a candidate's immediate parent: `Visitor` only ever hands
/// a callback its immediate parent, which for an aggregate/function `init`
/// is the `VariableDeclarator`, not the `VariableDeclaration` this check
/// needs (`SPEC_FULL.md` §4.5.1, §9 "AST↔stream cross-index"). Starting
/// from the declaration itself sidesteps that entirely: `declarations` and
/// each declarator's `init` are both reachable directly, no parent lookup
/// required.
fn find_indent_correction_opens(
    ast: &Value,
    visitor_keys: &crate::parser_api::VisitorKeys,
    boundaries: &BoundaryMap,
) -> HashSet<Handle> {
    let mut opens = HashSet::new();
    let visitor = Visitor::new(visitor_keys);
    visitor.visit(ast, |node, _parent| {
        if node_kind(node) != Some("VariableDeclaration") {
            return;
        }
        let Some(declarations) = node.get("declarations").and_then(Value::as_array) else {
            return;
        };
        let Some(first) = declarations.first() else {
            return;
        };
        let Some(init) = first.get("init") else {
            return;
        };
        if !crate::wrapper::is_variable_declaration_indent_correction_target(node, init) {
            return;
        }
        let Some(init_kind) = node_kind(init) else {
            return;
        };
        if !is_correction_eligible_kind(init_kind) {
            return;
        }
        if let Some(handle) = correction_open_handle(init, boundaries) {
            opens.insert(handle);
        }
    });
    opens
}

impl Layout {
    /// Builds the token stream from `program`/`text` and the AST-to-stream
    /// boundary map. Does not run any style-rule pass; that is the
    /// Formatter's job once a `Layout` exists.
    pub fn build(program: &ParsedProgram, text: &str, options: Options) -> Layout {
        let result = builder::build(program, text, &options);
        let boundaries = BoundaryMap::build(&program.ast, &program.visitor_keys, &result.list);
        let indent_correction_opens =
            find_indent_correction_opens(&program.ast, &program.visitor_keys, &boundaries);
        Layout {
            list: result.list,
            options,
            boundaries,
            warnings: result.warnings,
            original_indents: result.original_indents,
            indent_correction_opens,
        }
    }

    pub fn warnings(&self) -> &[BuildWarning] {
        &self.warnings
    }

    pub fn original_indent_of(&self, comment: Handle) -> Option<&str> {
        self.original_indents.get(&comment).map(String::as_str)
    }

    /// Whether `h` is the opening bracket/brace of a node the
    /// variable-declaration indent correction applies to.
    pub fn is_indent_correction_open(&self, h: Handle) -> bool {
        self.indent_correction_opens.contains(&h)
    }

    pub fn boundary_of(&self, node: &Value) -> Option<NodeBoundary> {
        let range = node_range(node)?;
        self.boundaries.get(range)
    }

    pub fn first_token(&self, node: &Value) -> Option<Handle> {
        self.boundary_of(node).map(|b| b.first)
    }

    pub fn last_token(&self, node: &Value) -> Option<Handle> {
        self.boundary_of(node).map(|b| b.last)
    }

    pub fn boundary_tokens(&self, node: &Value) -> Option<(Handle, Handle)> {
        self.boundary_of(node).map(|b| (b.first, b.last))
    }

    // --- queries ---

    pub fn find_next(&self, start: Option<Handle>, pred: impl FnMut(Handle) -> bool) -> Option<Handle> {
        self.list.find_next(start, pred)
    }

    pub fn find_previous(&self, start: Option<Handle>, pred: impl FnMut(Handle) -> bool) -> Option<Handle> {
        self.list.find_previous(start, pred)
    }

    pub fn next_token(&self, h: Handle) -> Option<Handle> {
        self.list
            .find_next(Some(h), |c| self.list.get(c).is_some_and(|p| p.is_token()))
    }

    pub fn previous_token(&self, h: Handle) -> Option<Handle> {
        self.list
            .find_previous(Some(h), |c| self.list.get(c).is_some_and(|p| p.is_token()))
    }

    pub fn next_token_or_comment(&self, h: Handle) -> Option<Handle> {
        self.list.find_next(Some(h), |c| {
            self.list
                .get(c)
                .is_some_and(|p| p.is_token() || p.is_comment())
        })
    }

    pub fn previous_token_or_comment(&self, h: Handle) -> Option<Handle> {
        self.list.find_previous(Some(h), |c| {
            self.list
                .get(c)
                .is_some_and(|p| p.is_token() || p.is_comment())
        })
    }

    // --- metrics ---

    pub fn is_same_line(&self, a: Handle, b: Handle) -> bool {
        metrics::is_same_line(&self.list, a, b)
    }

    pub fn is_multi_line(&self, node: &Value) -> bool {
        match self.boundary_of(node) {
            Some(b) => metrics::is_multi_line(&self.list, b),
            None => false,
        }
    }

    pub fn get_length(&self, from: Handle, to: Handle) -> usize {
        metrics::get_length(&self.list, from, to, self.options.tab_width)
    }

    pub fn get_line_length(&self, handle: Handle) -> usize {
        metrics::get_line_length(&self.list, handle, self.options.tab_width)
    }

    pub fn is_line_too_long(&self, handle: Handle) -> bool {
        metrics::is_line_too_long(
            &self.list,
            handle,
            self.options.tab_width,
            self.options.max_line_length,
        )
    }

    // --- wrap delegation ---

    pub fn wrap(&mut self, node: &Value, parent: Option<&Value>) {
        crate::wrapper::wrap(self, node, parent);
    }

    pub fn no_wrap(&mut self, node: &Value, parent: Option<&Value>) {
        crate::wrapper::no_wrap(self, node, parent);
    }
}
