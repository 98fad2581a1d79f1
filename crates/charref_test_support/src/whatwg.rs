//! Loader for the WHATWG `entities.json` format.
//!
//! Keys carry the leading `&` and, for most names, the trailing `;`:
//! `{"&amp;": {"codepoints": [38], "characters": "&"}}`.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct WhatwgEntity {
    pub codepoints: Vec<u32>,
    pub characters: String,
}

/// One WHATWG key, split into the bare name and whether it had a `;`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WhatwgKey {
    pub name: String,
    pub with_semicolon: bool,
    pub entity: WhatwgEntity,
}

pub fn load_entities_json(path: &Path) -> Vec<WhatwgKey> {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|err| panic!("failed to read entities JSON {path:?}: {err}"));
    let raw: BTreeMap<String, WhatwgEntity> = serde_json::from_str(&content)
        .unwrap_or_else(|err| panic!("failed to parse entities JSON {path:?}: {err}"));
    raw.into_iter()
        .map(|(key, entity)| {
            let bare = key
                .strip_prefix('&')
                .unwrap_or_else(|| panic!("entity key '{key}' lacks '&' in {path:?}"));
            let (name, with_semicolon) = match bare.strip_suffix(';') {
                Some(name) => (name.to_string(), true),
                None => (bare.to_string(), false),
            };
            assert_eq!(
                entity.characters.chars().map(|c| c as u32).collect::<Vec<_>>(),
                entity.codepoints,
                "characters and codepoints disagree for '{key}' in {path:?}"
            );
            WhatwgKey {
                name,
                with_semicolon,
                entity,
            }
        })
        .collect()
}
