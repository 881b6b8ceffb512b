//! `Formatter`: the top-level glue (`SPEC_FULL.md` §4.7).
//!
//! A pure function of `(options, tasks) × input text`. All mutable state
//! (the TokenList, the AST-to-parts boundary map) is owned by a single
//! [`Layout`] built per `format` call and discarded on return, which is what
//! makes `Formatter` itself `Send + Sync` despite running passes that freely
//! mutate a stream.

use crate::error::{FormatError, OptionError};
use crate::layout::Layout;
use crate::options::Options;
use crate::parser_api::{ParseOptions, Parser};
use crate::passes::{indent, punctuator_spacing, semicolons, spaces, wrap_decisions};
use crate::visitor::{HandlerMap, TaskVisitor};

/// Source text options requested of the configured parser on every call.
/// Fixed, not user-configurable: the builder's shape depends on `comment`,
/// `tokens`, `range`, and `loc` always being present.
fn parse_options() -> ParseOptions {
    ParseOptions {
        jsx: true,
        global_return: true,
    }
}

pub struct Formatter {
    parser: Box<dyn Parser + Send + Sync>,
    options: Options,
    tasks: Vec<HandlerMap<Layout>>,
}

impl Formatter {
    /// Validates `options` once, here, never again for the formatter's
    /// lifetime (`SPEC_FULL.md` §7, `OptionError`).
    pub fn new(
        parser: Box<dyn Parser + Send + Sync>,
        options: Options,
        tasks: Vec<HandlerMap<Layout>>,
    ) -> Result<Formatter, OptionError> {
        options.validate()?;
        Ok(Formatter {
            parser,
            options,
            tasks,
        })
    }

    /// `file_path` is accepted for parity with tooling that wants it
    /// threaded through to the parser/error messages (e.g. for source maps
    /// or diagnostics); this crate's own parser contract has no use for it
    /// beyond that.
    pub fn format(&self, text: &str, file_path: Option<&str>) -> Result<String, FormatError> {
        let program = self
            .parser
            .parse(text, &parse_options())
            .map_err(|err| match (err, file_path) {
                (FormatError::Parse(msg), Some(path)) => {
                    FormatError::Parse(format!("{}: {}", path, msg))
                }
                (other, _) => other,
            })?;

        let mut layout = Layout::build(&program, text, self.options.clone());

        punctuator_spacing::run(&mut layout);

        let mut tv: TaskVisitor<Layout> = TaskVisitor::new(&program.visitor_keys);
        tv.add_pass(wrap_decisions::pass());
        tv.add_pass(semicolons::pass());
        tv.add_pass(spaces::pass());
        for task in self.tasks.clone() {
            tv.add_pass(task);
        }
        tv.run(&program.ast, &mut layout);

        indent::run(&mut layout);

        Ok(layout.list.serialize())
    }
}
