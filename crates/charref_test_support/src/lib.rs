//! Shared helpers for the fixture-directory tests of `charref`.

pub mod expected;
pub mod manifest;
pub mod runner;
pub mod skips;
pub mod whatwg;

pub const FIXTURES_FORMAT_V1: &str = "charref-fixtures-v1";
pub const DECODED_FORMAT_V1: &str = "charref-decoded-v1";
pub const SKIPS_FORMAT_V1: &str = "charref-fixture-skips-v1";

pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            ch if ch < ' ' => {
                use std::fmt::Write;
                let _ = write!(&mut out, "\\u{{{:02X}}}", ch as u32);
            }
            _ => out.push(ch),
        }
    }
    out
}

pub fn diff_lines(expected: &[String], actual: &[String]) -> String {
    let max = expected.len().max(actual.len());
    let mut out = String::new();
    use std::fmt::Write;
    let missing = "<missing>";
    let mismatch = (0..max).find(|&i| expected.get(i) != actual.get(i));
    if let Some(i) = mismatch {
        let start = i.saturating_sub(2);
        let end = (i + 3).min(max);
        let _ = writeln!(
            &mut out,
            "first mismatch at line {} (showing {}..={}):",
            i + 1,
            start + 1,
            end
        );
        for line_idx in start..end {
            let left = expected
                .get(line_idx)
                .map(String::as_str)
                .unwrap_or(missing);
            let right = actual.get(line_idx).map(String::as_str).unwrap_or(missing);
            let marker = if line_idx == i { ">" } else { " " };
            let _ = writeln!(&mut out, "{marker} {:>4}  expected: {left}", line_idx + 1);
            let _ = writeln!(&mut out, "{marker} {:>4}    actual: {right}", line_idx + 1);
        }
    }
    let _ = writeln!(
        &mut out,
        "expected {} lines, actual {} lines",
        expected.len(),
        actual.len()
    );
    out
}

pub fn parse_env_bool(key: &str) -> bool {
    match std::env::var(key).ok().as_deref() {
        Some("1") | Some("true") | Some("yes") | Some("on") => true,
        Some("0") | Some("false") | Some("no") | Some("off") | Some("") | None => false,
        Some(other) => panic!("unsupported {key} value '{other}'; use 1/0 or true/false"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_text_escapes_controls_and_quotes() {
        assert_eq!(escape_text("a\"b\\c\n\r\t\u{1}"), "a\\\"b\\\\c\\n\\r\\t\\u{01}");
        assert_eq!(escape_text("\u{00AC}"), "\u{00AC}");
    }

    #[test]
    fn diff_lines_points_at_first_mismatch() {
        let expected = vec!["a".to_string(), "b".to_string()];
        let actual = vec!["a".to_string(), "c".to_string()];
        let diff = diff_lines(&expected, &actual);
        assert!(diff.starts_with("first mismatch at line 2"), "{diff}");
        assert!(diff.contains(">    2  expected: b"), "{diff}");
    }

    #[test]
    fn diff_lines_reports_length_difference() {
        let expected = vec!["a".to_string()];
        let actual = vec!["a".to_string(), "b".to_string()];
        let diff = diff_lines(&expected, &actual);
        assert!(diff.contains("expected: <missing>"), "{diff}");
        assert!(diff.ends_with("expected 1 lines, actual 2 lines\n"), "{diff}");
    }
}
