//! Linear-scan indent normalization (`SPEC_FULL.md` §4.4 step (e)), the last
//! pass before serialization.
//!
//! Tracks nesting depth across `{`/`(`/`[`/template-open and their closing
//! counterparts via [`crate::token_stream::token_list::TokenList::is_indent_increaser`]
//! /`is_indent_decreaser`, then sets every line-leading token's column to
//! that depth. This is a plain stream scan like [`super::punctuator_spacing`]:
//! by the time it runs, wrap/no_wrap has already decided which lines exist,
//! so depth tracking only needs to follow bracket nesting, not re-derive it
//! from the AST.
//!
//! Also caps consecutive blank lines to `options.max_empty_lines`, since
//! that is likewise a property of the raw line-break run rather than of any
//! single AST node.

use crate::layout::Layout;
use crate::token_stream::part::Handle;

fn is_line_leading(layout: &Layout, h: Handle) -> bool {
    match layout.list.previous(h) {
        None => true,
        Some(prev) => {
            layout.list.is_line_break(prev)
                || (layout.list.is_whitespace(prev) && layout.list.is_indent(prev))
        }
    }
}

/// A comment that preserved its own original indentation (`SPEC_FULL.md`
/// §9, "Comment indentation preservation") is left untouched; every other
/// line-leading part is set to the tracked depth.
fn apply_indent(layout: &mut Layout, h: Handle, depth: usize) {
    if layout.list.is_comment(h) && layout.original_indent_of(h).is_some() {
        return;
    }
    layout.indent_level(h, depth);
}

/// Depth-tracking state. `extra` mirrors `depth`'s bracket-nesting stack but
/// only records, per nesting level, whether that level's opener was the
/// opening bracket of a node the variable-declaration indent correction
/// applies to (`SPEC_FULL.md` §4.5.1) — the one case a pure bracket count
/// can't express on its own, since two sibling declarators aren't bracket
/// nesting at all.
pub fn run(layout: &mut Layout) {
    let mut depth = 0usize;
    let mut extra_opens: Vec<bool> = Vec::new();
    let mut extra = 0usize;
    let mut cur = layout.list.first();
    while let Some(h) = cur {
        let next = layout.list.next(h);

        if layout.list.is_indent_decreaser(h) {
            depth = depth.saturating_sub(1);
            if extra_opens.pop() == Some(true) {
                extra = extra.saturating_sub(1);
            }
        }

        let is_content = layout
            .list
            .get(h)
            .is_some_and(|p| p.is_token() || p.is_comment());
        if is_content && is_line_leading(layout, h) {
            apply_indent(layout, h, depth + extra);
        }

        if layout.list.is_indent_increaser(h) {
            let is_correction_open = layout.is_indent_correction_open(h);
            extra_opens.push(is_correction_open);
            depth += 1;
            if is_correction_open {
                extra += 1;
            }
        }

        cur = next;
    }
    cap_empty_lines(layout);
}

/// Collapses a run of consecutive line breaks down to at most
/// `max_empty_lines + 1` (the one that ends the current line, plus that
/// many fully blank lines).
fn cap_empty_lines(layout: &mut Layout) {
    let allowed = layout.options.max_empty_lines + 1;
    let mut cur = layout.list.first();
    while let Some(h) = cur {
        if !layout.list.is_line_break(h) {
            cur = layout.list.next(h);
            continue;
        }

        let mut count = 1usize;
        let mut scan = layout.list.next(h);
        while let Some(s) = scan {
            if layout.list.is_line_break(s) {
                count += 1;
                scan = layout.list.next(s);
            } else if layout.list.is_whitespace(s) {
                scan = layout.list.next(s);
            } else {
                break;
            }
        }

        if count > allowed {
            let mut remaining = count - allowed;
            let mut d = layout.list.next(h);
            while remaining > 0 {
                let Some(dh) = d else { break };
                let after = layout.list.next(dh);
                if layout.list.is_line_break(dh) {
                    let _ = layout.list.delete(dh);
                    remaining -= 1;
                }
                d = after;
            }
        }

        cur = layout.list.next(h);
    }
}
