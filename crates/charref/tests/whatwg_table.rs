use std::collections::BTreeSet;
use std::path::Path;

use charref::{ENTITY_COUNT, LEGACY_COUNT, Emit, entities, lookup, match_longest};
use charref_test_support::whatwg::load_entities_json;

fn expected_chars(codepoints: &[u32]) -> Vec<char> {
    codepoints
        .iter()
        .map(|&cp| char::from_u32(cp).expect("table values are scalar values"))
        .collect()
}

#[test]
fn table_has_every_whatwg_name() {
    assert_eq!(ENTITY_COUNT, 2125);
    assert_eq!(LEGACY_COUNT, 106);
    // WHATWG lists legacy names twice: with and without `;`.
    assert_eq!(ENTITY_COUNT + LEGACY_COUNT, 2231);
    assert_eq!(entities().len(), ENTITY_COUNT);
    assert_eq!(
        entities().filter(|record| record.is_legacy()).count(),
        LEGACY_COUNT
    );
    let names = entities().map(|record| record.name).collect::<BTreeSet<_>>();
    assert_eq!(names.len(), ENTITY_COUNT, "names are unique");
}

#[test]
fn every_name_resolves_with_semicolon() {
    for record in entities() {
        let input = format!("{};", record.name);
        let result = match_longest(&input, false);
        assert!(result.matched, "{input} did not match");
        assert_eq!(result.consumed_length, record.name.len() + 1, "{input}");
        assert!(result.used_semicolon, "{input}");
        assert_eq!(
            result.codepoints.as_slice(),
            expected_chars(record.codepoints).as_slice(),
            "{input}"
        );
    }
}

#[test]
fn every_legacy_name_resolves_without_semicolon() {
    for record in entities().filter(|record| record.is_legacy()) {
        for in_attribute in [false, true] {
            let result = match_longest(record.name, in_attribute);
            assert!(result.matched, "{} did not match", record.name);
            assert_eq!(result.consumed_length, record.name.len());
            assert!(!result.used_semicolon);
            assert_eq!(
                result.codepoints.as_slice(),
                expected_chars(record.codepoints).as_slice()
            );
        }
    }
}

#[test]
fn every_required_name_without_semicolon_never_resolves_to_itself() {
    for record in entities().filter(|record| !record.is_legacy()) {
        let result = match_longest(record.name, false);
        if result.matched {
            // Only a shorter legacy prefix may resolve.
            assert!(result.consumed_length < record.name.len(), "{}", record.name);
            let prefix = &record.name[..result.consumed_length];
            let legacy = lookup(prefix).expect("fallback is a registered name");
            assert!(legacy.is_legacy(), "{prefix} is not legacy");
        }
    }
}

#[test]
fn tokenizer_reference_examples() {
    let notin = match_longest("notin;", false);
    assert_eq!(notin.codepoints.as_slice(), &['\u{2209}']);
    assert_eq!(notin.consumed_length, 6);

    assert!(!match_longest("notit=5", true).matched);
    assert!(!match_longest("zzzznotreal;", false).matched);

    let tilde = match_longest("NotEqualTilde;", false);
    assert_eq!(tilde.codepoints.as_slice(), &['\u{2242}', '\u{0338}']);
    assert_eq!(tilde.consumed_length, 14);

    let decoded = charref::decode("&NotEqualTilde;", false);
    assert!(matches!(decoded.emit, Emit::Codepoints(cps) if cps.len() == 2));
    assert_eq!(decoded.advance_by, 15);
}

#[test]
fn table_agrees_with_whatwg_json() {
    let path =
        Path::new(env!("CARGO_MANIFEST_DIR")).join("../charref_tablegen/data/entities.json");
    let keys = load_entities_json(&path);
    assert_eq!(keys.len(), 2231);
    for key in keys {
        let terminal = lookup(&key.name)
            .unwrap_or_else(|| panic!("WHATWG name '{}' missing from table", key.name));
        let (values, len) = terminal.codepoints.to_u32s();
        assert_eq!(&values[..len], key.entity.codepoints.as_slice(), "{}", key.name);
        if !key.with_semicolon {
            assert!(terminal.is_legacy(), "'{}' should be legacy", key.name);
        }
    }
}

#[test]
fn longest_name_fits_the_documented_bound() {
    let longest = entities().map(|record| record.name.len()).max();
    assert_eq!(longest, Some(31));
    assert_eq!(charref::load().max_depth(), 31);
}
