//! Expected-output files for decode fixtures.
//!
//! ```text
//! # format: charref-decoded-v1
//! text: "a & b"
//! error: missing-semicolon-after-character-reference@2
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use charref::CharRefError;

use crate::{DECODED_FORMAT_V1, escape_text};

pub fn parse_expected_decoded(path: &Path) -> Vec<String> {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|err| panic!("failed to read expected decode file {path:?}: {err}"));
    let mut headers = BTreeMap::<String, String>::new();
    let mut lines = Vec::new();

    for raw_line in content.lines() {
        let line = raw_line.trim_end();
        if line.is_empty() {
            continue;
        }
        if let Some(stripped) = line.strip_prefix('#') {
            let Some((key, value)) = stripped.trim().split_once(':') else {
                continue;
            };
            let key = key.trim().to_ascii_lowercase();
            assert_eq!(key, "format", "unsupported header '{key}' in {path:?}");
            if headers.insert(key.clone(), value.trim().to_string()).is_some() {
                panic!("duplicate header '{key}' in {path:?}");
            }
            continue;
        }
        lines.push(line.to_string());
    }

    assert_eq!(
        headers.get("format").map(String::as_str),
        Some(DECODED_FORMAT_V1),
        "unsupported or missing format in {path:?}"
    );
    assert!(
        lines.first().is_some_and(|line| line.starts_with("text: ")),
        "expected decode file {path:?} must start with a text line"
    );
    lines
}

/// Render decoder output in the expected-file line format.
pub fn format_decoded(text: &str, errors: &[CharRefError]) -> Vec<String> {
    let mut lines = Vec::with_capacity(1 + errors.len());
    lines.push(format!("text: \"{}\"", escape_text(text)));
    for error in errors {
        lines.push(format!("error: {}@{}", error.code, error.position));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use charref::CharRefErrorCode;

    #[test]
    fn format_decoded_lists_text_then_errors() {
        let errors = [CharRefError {
            code: CharRefErrorCode::MissingSemicolon,
            position: 3,
        }];
        assert_eq!(
            format_decoded("a\nb", &errors),
            vec![
                "text: \"a\\nb\"".to_string(),
                "error: missing-semicolon-after-character-reference@3".to_string(),
            ]
        );
    }
}
