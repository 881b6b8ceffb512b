pub mod fixture;

use scriptfmt::{FormatError, ParseOptions, ParsedProgram, Parser};

/// A [`Parser`] that returns a pre-built [`ParsedProgram`] regardless of the
/// text it is asked to parse — the "hand-built fixture `ParsedProgram`"
/// `SPEC_FULL.md` §4.8 names as how this crate's engine is tested in
/// isolation from any real grammar.
pub struct FixtureParser {
    pub program: ParsedProgram,
}

impl Parser for FixtureParser {
    fn parse(&self, _text: &str, _options: &ParseOptions) -> Result<ParsedProgram, FormatError> {
        Ok(self.program.clone())
    }
}
