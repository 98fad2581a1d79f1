//! Skip/xfail overrides kept outside the manifest, in TOML and JSON twins.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::SKIPS_FORMAT_V1;
use crate::manifest::FixtureStatus;

#[derive(Clone, Debug)]
pub struct SkipOverride {
    pub status: FixtureStatus,
    pub reason: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
struct SkipManifest {
    format: String,
    cases: Vec<SkipCase>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
struct SkipCase {
    id: String,
    status: SkipCaseStatus,
    reason: String,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
enum SkipCaseStatus {
    Skip,
    Xfail,
}

pub fn load_skip_overrides(root: &Path) -> BTreeMap<String, SkipOverride> {
    let toml_path = root.join("skips.toml");
    let json_path = root.join("skips.json");

    let toml_manifest: SkipManifest = {
        let content = fs::read_to_string(&toml_path)
            .unwrap_or_else(|err| panic!("failed to read skip TOML {toml_path:?}: {err}"));
        toml::from_str(&content)
            .unwrap_or_else(|err| panic!("failed to parse skip TOML {toml_path:?}: {err}"))
    };
    let json_manifest: SkipManifest = {
        let content = fs::read_to_string(&json_path)
            .unwrap_or_else(|err| panic!("failed to read skip JSON {json_path:?}: {err}"));
        serde_json::from_str(&content)
            .unwrap_or_else(|err| panic!("failed to parse skip JSON {json_path:?}: {err}"))
    };

    for (manifest, path) in [(&toml_manifest, &toml_path), (&json_manifest, &json_path)] {
        assert_eq!(
            manifest.format, SKIPS_FORMAT_V1,
            "unsupported skip manifest format in {path:?}"
        );
        for case in &manifest.cases {
            assert!(
                !case.reason.trim().is_empty(),
                "skip entry '{}' in {path:?} needs a reason",
                case.id
            );
        }
    }

    let mut toml_sorted = toml_manifest.cases.clone();
    let mut json_sorted = json_manifest.cases.clone();
    toml_sorted.sort_by(|a, b| a.id.cmp(&b.id));
    json_sorted.sort_by(|a, b| a.id.cmp(&b.id));
    assert_eq!(
        toml_sorted, json_sorted,
        "skip manifests diverged: {toml_path:?} vs {json_path:?}"
    );

    let mut out = BTreeMap::new();
    for entry in toml_sorted {
        let status = match entry.status {
            SkipCaseStatus::Skip => FixtureStatus::Skip,
            SkipCaseStatus::Xfail => FixtureStatus::Xfail,
        };
        let inserted = out.insert(
            entry.id.clone(),
            SkipOverride {
                status,
                reason: entry.reason,
            },
        );
        assert!(
            inserted.is_none(),
            "duplicate skip id in {toml_path:?}: {}",
            entry.id
        );
    }
    out
}

pub fn validate_skip_override_ids(
    overrides: &BTreeMap<String, SkipOverride>,
    case_ids: &BTreeSet<String>,
    manifest_path: &Path,
) {
    for id in overrides.keys() {
        assert!(
            case_ids.contains(id),
            "skip manifest names unknown case id '{id}' (not present in {manifest_path:?})"
        );
    }
}
