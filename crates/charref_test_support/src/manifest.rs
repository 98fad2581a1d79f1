//! Fixture manifest: blank-line separated blocks of `key: value` lines.
//!
//! ```text
//! format: charref-fixtures-v1
//!
//! id: longest-match
//! path: decode/longest-match.txt
//! expected: decode/longest-match.decoded.txt
//! context: data
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use charref::DecodeTextConfig;

use crate::FIXTURES_FORMAT_V1;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FixtureStatus {
    Active,
    Xfail,
    Skip,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FixtureContext {
    Data,
    Attribute,
}

#[derive(Clone, Debug)]
pub struct FixtureCase {
    pub id: String,
    pub path: PathBuf,
    pub expected: PathBuf,
    pub context: FixtureContext,
    pub decode_numeric: bool,
    pub status: FixtureStatus,
    pub reason: Option<String>,
}

impl FixtureCase {
    pub fn config(&self) -> DecodeTextConfig {
        DecodeTextConfig {
            in_attribute: self.context == FixtureContext::Attribute,
            decode_numeric: self.decode_numeric,
        }
    }

    /// Fixture inputs end with one newline that is not part of the case.
    pub fn read_input(&self) -> String {
        let mut input = fs::read_to_string(&self.path)
            .unwrap_or_else(|err| panic!("failed to read fixture input {:?}: {err}", self.path));
        if input.ends_with('\n') {
            input.pop();
        }
        input
    }
}

pub fn load_manifest(path: &Path) -> Vec<FixtureCase> {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|err| panic!("failed to read fixture manifest {path:?}: {err}"));
    let root = path
        .parent()
        .unwrap_or_else(|| panic!("manifest has no parent directory"));
    let mut format = None::<String>;
    let mut current: BTreeMap<String, String> = BTreeMap::new();
    let mut cases = Vec::new();

    for raw_line in content.lines().chain(std::iter::once("")) {
        let line = raw_line.trim();
        if line.starts_with('#') {
            continue;
        }
        if line.is_empty() {
            if !current.is_empty() {
                if format.is_none() {
                    format = current.remove("format");
                    assert!(
                        current.is_empty(),
                        "format block must stand alone in {path:?}"
                    );
                } else {
                    cases.push(parse_case(&mut current, root, path));
                }
                current.clear();
            }
            continue;
        }
        let (key, value) = line
            .split_once(':')
            .unwrap_or_else(|| panic!("malformed manifest line '{line}' in {path:?}"));
        let key = key.trim().to_string();
        if current.insert(key.clone(), value.trim().to_string()).is_some() {
            panic!("duplicate key '{key}' in {path:?}");
        }
    }

    assert_eq!(
        format.as_deref(),
        Some(FIXTURES_FORMAT_V1),
        "unsupported or missing format in {path:?}"
    );
    let mut seen = BTreeSet::new();
    for case in &cases {
        assert!(
            seen.insert(case.id.clone()),
            "duplicate case id '{}' in {path:?}",
            case.id
        );
    }
    cases
}

fn parse_case(current: &mut BTreeMap<String, String>, root: &Path, path: &Path) -> FixtureCase {
    let id = current
        .remove("id")
        .unwrap_or_else(|| panic!("missing id in fixture manifest {path:?}"));
    let rel_path = current
        .remove("path")
        .unwrap_or_else(|| panic!("missing path for '{id}' in fixture manifest {path:?}"));
    let expected = current
        .remove("expected")
        .unwrap_or_else(|| panic!("missing expected for '{id}' in fixture manifest {path:?}"));
    let context = match current.remove("context").as_deref() {
        Some("attribute") => FixtureContext::Attribute,
        Some("data") | None => FixtureContext::Data,
        Some(other) => panic!("unsupported context '{other}' for '{id}' in {path:?}"),
    };
    let decode_numeric = match current.remove("numeric").as_deref() {
        Some("off") => false,
        Some("on") | None => true,
        Some(other) => panic!("unsupported numeric '{other}' for '{id}' in {path:?}"),
    };
    let status = match current.remove("status").as_deref() {
        Some("xfail") => FixtureStatus::Xfail,
        Some("skip") => FixtureStatus::Skip,
        Some("active") | None => FixtureStatus::Active,
        Some(other) => panic!("unsupported status '{other}' for '{id}' in {path:?}"),
    };
    let reason = current.remove("reason");
    match status {
        FixtureStatus::Active => {
            if reason.is_some() {
                panic!("case '{id}' has reason but is not xfail/skip in {path:?}");
            }
        }
        FixtureStatus::Xfail | FixtureStatus::Skip => {
            if reason.as_deref().unwrap_or("").is_empty() {
                panic!("case '{id}' with status '{status:?}' missing reason in {path:?}");
            }
        }
    }
    if !current.is_empty() {
        let keys = current.keys().cloned().collect::<Vec<_>>();
        panic!("unknown keys for '{id}' in {path:?}: {keys:?}");
    }

    let input_path = root.join(rel_path);
    let expected_path = root.join(expected);
    if !input_path.is_file() {
        panic!("fixture input missing for '{id}': {input_path:?}");
    }
    if !expected_path.is_file() {
        panic!("fixture expected file missing for '{id}': {expected_path:?}");
    }
    let expected_name = expected_path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_else(|| panic!("expected filename is not valid UTF-8: {expected_path:?}"));
    if !expected_name.ends_with(".decoded.txt") {
        panic!("case '{id}' must use a .decoded.txt expected file: {expected_path:?}");
    }

    FixtureCase {
        id,
        path: input_path,
        expected: expected_path,
        context,
        decode_numeric,
        status,
        reason,
    }
}
