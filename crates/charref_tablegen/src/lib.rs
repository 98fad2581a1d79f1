//! Generator for the entity table compiled into `charref`.
//!
//! Input is the WHATWG `entities.json` list, whose keys carry the leading `&`
//! and usually the trailing `;`. Rows are emitted per bare name; a name that
//! also appears without `;` is a legacy reference.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

const HEADER: &[&str] = &[
    "// @generated by charref-tablegen from crates/charref_tablegen/data/entities.json. Do not edit by hand.",
    "//",
    "// WHATWG named character references, sorted by name (byte order).",
    "// Names omit the trailing `;`. `semicolon_required = false` marks the",
    "// legacy references that also match without one.",
    "",
    "use crate::record::EntityRecord;",
    "",
];

#[derive(Deserialize)]
struct RawEntity {
    codepoints: Vec<u32>,
}

/// One row of the generated table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableEntry {
    pub name: String,
    pub codepoints: Vec<u32>,
    pub semicolon_required: bool,
}

impl TableEntry {
    pub fn is_legacy(&self) -> bool {
        !self.semicolon_required
    }
}

/// Parse `entities.json` into rows sorted by name.
pub fn parse_entities_json(json: &str) -> Result<Vec<TableEntry>> {
    let raw: BTreeMap<String, RawEntity> =
        serde_json::from_str(json).context("failed to parse entities JSON")?;

    let mut terminated = BTreeMap::new();
    let mut bare = BTreeMap::new();
    for (key, entity) in raw {
        let Some(name) = key.strip_prefix('&') else {
            bail!("entity key {key:?} lacks the leading '&'");
        };
        if !(1..=2).contains(&entity.codepoints.len()) {
            bail!(
                "entity key {key:?} maps to {} codepoints; expected 1 or 2",
                entity.codepoints.len()
            );
        }
        match name.strip_suffix(';') {
            Some(name) => terminated.insert(name.to_string(), entity.codepoints),
            None => bare.insert(name.to_string(), entity.codepoints),
        };
    }

    let names = terminated.keys().chain(bare.keys()).collect::<BTreeSet<_>>();
    let mut entries = Vec::with_capacity(names.len());
    for name in names {
        let codepoints = match (terminated.get(name), bare.get(name)) {
            (Some(with), Some(without)) if with != without => {
                bail!("entity '{name}' decodes differently with and without ';'")
            }
            (Some(codepoints), _) | (None, Some(codepoints)) => codepoints.clone(),
            (None, None) => continue,
        };
        if name.is_empty() {
            bail!("entity key with an empty name");
        }
        entries.push(TableEntry {
            name: name.clone(),
            codepoints,
            semicolon_required: !bare.contains_key(name),
        });
    }
    Ok(entries)
}

/// Render `table.rs` for `entries`, which must already be sorted by name.
pub fn render_table(entries: &[TableEntry]) -> String {
    let legacy = entries.iter().filter(|entry| entry.is_legacy()).count();
    let mut out = String::with_capacity(64 * entries.len());
    for line in HEADER {
        out.push_str(line);
        out.push('\n');
    }
    let _ = writeln!(out, "pub(crate) const ENTITY_COUNT: usize = {};", entries.len());
    out.push('\n');
    out.push_str("pub(crate) static ENTITIES: [EntityRecord; ENTITY_COUNT] = [\n");
    for entry in entries {
        let codepoints = entry
            .codepoints
            .iter()
            .map(|cp| format!("0x{cp:04X}"))
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(
            out,
            "    EntityRecord::new(\"{}\", &[{codepoints}], {}),",
            entry.name, entry.semicolon_required
        );
    }
    out.push_str("];\n\n");
    let _ = writeln!(out, "pub(crate) const LEGACY_COUNT: usize = {legacy};");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    const SAMPLE: &str = r#"{
        "&not": { "codepoints": [172], "characters": "¬" },
        "&not;": { "codepoints": [172], "characters": "¬" },
        "&notin;": { "codepoints": [8713], "characters": "∉" },
        "&NotEqualTilde;": { "codepoints": [8770, 824], "characters": "≂̸" }
    }"#;

    #[test]
    fn rows_merge_terminated_and_bare_keys() {
        let entries = parse_entities_json(SAMPLE).expect("valid sample");
        let names = entries.iter().map(|e| e.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, ["NotEqualTilde", "not", "notin"]);
        assert!(entries[1].is_legacy());
        assert!(entries[2].semicolon_required);
        assert_eq!(entries[0].codepoints, [0x2242, 0x0338]);
    }

    #[test]
    fn rendered_rows_use_hex_codepoints() {
        let table = render_table(&parse_entities_json(SAMPLE).expect("valid sample"));
        assert!(table.contains("pub(crate) const ENTITY_COUNT: usize = 3;\n"));
        assert!(table.contains("    EntityRecord::new(\"NotEqualTilde\", &[0x2242, 0x0338], true),\n"));
        assert!(table.contains("    EntityRecord::new(\"not\", &[0x00AC], false),\n"));
        assert!(table.ends_with("];\n\npub(crate) const LEGACY_COUNT: usize = 1;\n"));
    }

    #[test]
    fn malformed_keys_are_rejected() {
        let err = parse_entities_json(r#"{"amp;": {"codepoints": [38]}}"#).unwrap_err();
        assert!(err.to_string().contains("lacks the leading '&'"), "{err}");

        let err = parse_entities_json(r#"{"&x;": {"codepoints": [1, 2, 3]}}"#).unwrap_err();
        assert!(err.to_string().contains("expected 1 or 2"), "{err}");

        let err = parse_entities_json(
            r#"{"&x;": {"codepoints": [1]}, "&x": {"codepoints": [2]}}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("differently"), "{err}");
    }

    #[test]
    fn checked_in_table_is_current() {
        let root = Path::new(env!("CARGO_MANIFEST_DIR"));
        let json = std::fs::read_to_string(root.join("data/entities.json"))
            .expect("read entities.json");
        let entries = parse_entities_json(&json).expect("WHATWG list parses");
        assert_eq!(entries.len(), 2125);
        assert_eq!(entries.iter().filter(|e| e.is_legacy()).count(), 106);

        let checked_in = std::fs::read_to_string(root.join("../charref/src/table.rs"))
            .expect("read table.rs");
        assert!(
            checked_in == render_table(&entries),
            "crates/charref/src/table.rs is stale; run `cargo run -p charref-tablegen`"
        );
    }
}
