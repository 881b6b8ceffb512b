//! Linear punctuator-spacing normalization: the first thing run on a fresh
//! stream (`SPEC_FULL.md` §4.4 step (a)), so that every later pass measures
//! line lengths against text that already has sane comma/semicolon/`=`
//! spacing rather than whatever the original source happened to contain.
//!
//! This is a plain stream scan, not a `HandlerMap` — it needs no AST at
//! all, only the classification predicates already on `TokenList`.

use crate::layout::Layout;

/// `,` and `;`: no space before, a space after. Any punctuator containing
/// `=` (`=`, `==`, `===`, `+=`, `=>`, …): spaces on both sides.
pub fn run(layout: &mut Layout) {
    let mut cur = layout.list.first();
    while let Some(h) = cur {
        let next = layout.list.next(h);
        if layout.list.is_any_punctuator(h) {
            let value = layout
                .list
                .get(h)
                .map(|p| p.value().to_string())
                .unwrap_or_default();
            if value == "," || value == ";" {
                layout.no_space_before(h);
                layout.space_after(h);
            } else if value.contains('=') {
                layout.spaces(h);
            }
        }
        cur = next;
    }
}
