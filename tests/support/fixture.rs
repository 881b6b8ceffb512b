//! Loader for the three-section fixture file format (`SPEC_FULL.md` §6):
//! a JSON options block, input source, and expected output, separated by
//! lines consisting solely of `---`. Test-only scaffolding, not part of the
//! library's public surface.

use std::path::Path;

pub struct Fixture {
    pub options: serde_json::Value,
    pub input: String,
    pub expected: String,
}

/// Trims each section and normalizes line endings to `\n`.
pub fn parse(contents: &str) -> Fixture {
    let normalized = contents.replace("\r\n", "\n");
    let sections: Vec<&str> = normalized.split("\n---\n").collect();
    assert_eq!(
        sections.len(),
        3,
        "fixture must have exactly three sections separated by lines of `---`"
    );
    let options = serde_json::from_str(sections[0].trim())
        .unwrap_or_else(|e| panic!("invalid options JSON in fixture: {}", e));
    Fixture {
        options,
        input: sections[1].trim().to_string(),
        expected: sections[2].trim().to_string(),
    }
}

pub fn load(path: &Path) -> Fixture {
    let contents = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("could not read fixture {}: {}", path.display(), e));
    parse(&contents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_three_sections() {
        let raw = "{\"semicolons\": true}\n---\na = 1\n---\na = 1;\n";
        let fixture = parse(raw);
        assert_eq!(fixture.options, serde_json::json!({"semicolons": true}));
        assert_eq!(fixture.input, "a = 1");
        assert_eq!(fixture.expected, "a = 1;");
    }

    #[test]
    fn trims_whitespace_and_normalizes_line_endings() {
        let raw = "{}\r\n---\r\n  a\r\n---\r\n  a;\r\n";
        let fixture = parse(raw);
        assert_eq!(fixture.input, "a");
        assert_eq!(fixture.expected, "a;");
    }

    #[test]
    #[should_panic(expected = "exactly three sections")]
    fn rejects_wrong_section_count() {
        parse("{}\n---\nonly one divider\n");
    }

    #[test]
    fn loads_from_an_arbitrary_file_path() {
        use std::io::Write;
        let mut file = tempfile::NamedTempFile::new().expect("create temp fixture file");
        write!(file, "{{\"quotes\": \"double\"}}\n---\na = 'x'\n---\na = \"x\"\n")
            .expect("write temp fixture contents");
        let fixture = load(file.path());
        assert_eq!(fixture.options, serde_json::json!({"quotes": "double"}));
        assert_eq!(fixture.input, "a = 'x'");
        assert_eq!(fixture.expected, "a = \"x\"");
    }
}
