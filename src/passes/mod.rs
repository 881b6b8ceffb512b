//! Style-rule passes.
//!
//! Each pass is a pure factory `Layout-agnostic fn() -> HandlerMap<Layout>`,
//! matching `SPEC_FULL.md` §4.6 ("Each pass is a pure factory `(context) →
//! map<NodeKind, handler>`"). [`punctuator_spacing`] and [`indent`] are the
//! two exceptions: they need no AST at all, only a linear scan of the
//! stream, so they are plain `fn(&mut Layout)` rather than handler maps —
//! the Rust rendering of "a pass that happens not to need per-node
//! dispatch," not a different kind of pass.
//!
//! `Formatter` runs them in the fixed order `SPEC_FULL.md` §4.4/§4.6
//! prescribe: punctuator spacing, wrap decisions, semicolons, spaces,
//! indent normalization.

pub mod indent;
pub mod punctuator_spacing;
pub mod semicolons;
pub mod spaces;
pub mod wrap_decisions;
