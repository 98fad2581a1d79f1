use std::collections::BTreeSet;

use super::*;
use crate::record::EntityRecord;
use crate::table::{ENTITIES, ENTITY_COUNT, LEGACY_COUNT};

fn small_table() -> Vec<EntityRecord> {
    vec![
        EntityRecord::new("not", &[0xAC], false),
        EntityRecord::new("notin", &[0x2209], true),
        EntityRecord::new("notinva", &[0x2209], true),
        EntityRecord::new("amp", &[0x26], false),
        EntityRecord::new("NotEqualTilde", &[0x2242, 0x0338], true),
    ]
}

#[test]
fn shared_prefixes_are_merged() {
    let trie = build(&small_table()).expect("valid table");
    // root + n,o,t,i,n,v,a + a,m,p + N,o,t,E,q,u,a,l,T,i,l,d,e
    assert_eq!(trie.node_count(), 1 + 7 + 3 + 13);
    assert_eq!(trie.stats().terminals, 5);
    assert_eq!(trie.stats().legacy_terminals, 2);
    assert_eq!(trie.max_depth(), "NotEqualTilde".len());
}

#[test]
fn lookup_resolves_exact_names_only() {
    let trie = build(&small_table()).expect("valid table");
    let not = trie.lookup("not").expect("not is registered");
    assert_eq!(not.codepoints, Codepoints::one('\u{00AC}'));
    assert!(not.is_legacy());
    assert!(trie.lookup("noti").is_none());
    assert!(trie.lookup("").is_none());
    assert!(trie.lookup("notinvb").is_none());
    assert_eq!(
        trie.lookup("NotEqualTilde").map(|t| t.codepoints),
        Some(Codepoints::two('\u{2242}', '\u{0338}'))
    );
}

#[test]
fn children_are_sorted_and_contiguous() {
    let trie = build(&ENTITIES).expect("canonical table");
    for index in 0..trie.node_count() {
        let node = trie.nodes[index];
        let start = node.first_child as usize;
        let run = &trie.labels[start..start + node.child_count as usize];
        assert!(
            run.windows(2).all(|w| w[0] < w[1]),
            "children of node {index} are not strictly sorted: {run:?}"
        );
    }
}

#[test]
fn child_finds_every_label_in_long_runs() {
    let trie = build(&ENTITIES).expect("canonical table");
    // The root has one child per distinct first byte.
    let first_bytes = ENTITIES
        .iter()
        .map(|r| r.name.as_bytes()[0])
        .collect::<BTreeSet<_>>();
    assert_eq!(trie.nodes[0].child_count as usize, first_bytes.len());
    for byte in first_bytes {
        let child = trie.child(Trie::ROOT, byte).expect("first byte has a child");
        assert_eq!(trie.label(child), Some(byte));
    }
    assert!(trie.child(Trie::ROOT, b';').is_none());
    assert!(trie.child(Trie::ROOT, 0xC3).is_none());
}

#[test]
fn canonical_table_builds_with_expected_shape() {
    let trie = build(&ENTITIES).expect("canonical table");
    let prefixes = ENTITIES
        .iter()
        .flat_map(|r| (1..=r.name.len()).map(move |end| &r.name[..end]))
        .collect::<BTreeSet<_>>();
    let stats = trie.stats();
    assert_eq!(stats.nodes, prefixes.len() + 1);
    assert_eq!(stats.terminals, ENTITY_COUNT);
    assert_eq!(stats.legacy_terminals, LEGACY_COUNT);
    assert_eq!(stats.max_depth, 31);
    assert!(trie.terminal(Trie::ROOT).is_none());
    assert!(trie.label(Trie::ROOT).is_none());
}

#[test]
fn every_terminal_matches_its_record() {
    let trie = build(&ENTITIES).expect("canonical table");
    for record in ENTITIES.iter() {
        let terminal = trie
            .lookup(record.name)
            .unwrap_or_else(|| panic!("missing {}", record.name));
        let (values, len) = terminal.codepoints.to_u32s();
        assert_eq!(&values[..len], record.codepoints, "codepoints for {}", record.name);
        assert_eq!(terminal.semicolon_required, record.semicolon_required);
    }
}

#[test]
fn exact_duplicates_are_merged() {
    let mut table = small_table();
    table.push(EntityRecord::new("amp", &[0x26], false));
    let trie = build(&table).expect("identical duplicates are allowed");
    assert_eq!(trie.stats().terminals, 5);
}

#[test]
fn conflicting_duplicates_are_rejected() {
    let mut table = small_table();
    table.push(EntityRecord::new("amp", &[0x27], false));
    assert_eq!(
        build(&table).unwrap_err(),
        BuildError::ConflictingDuplicate {
            name: "amp".to_string()
        }
    );

    let mut table = small_table();
    table.push(EntityRecord::new("amp", &[0x26], true));
    assert!(matches!(
        build(&table),
        Err(BuildError::ConflictingDuplicate { .. })
    ));
}

#[test]
fn malformed_records_are_rejected() {
    let cases: [(EntityRecord, BuildError); 5] = [
        (
            EntityRecord::new("", &[0x26], true),
            BuildError::EmptyName { index: 0 },
        ),
        (
            EntityRecord::new("am;p", &[0x26], true),
            BuildError::InvalidNameByte {
                name: "am;p".to_string(),
                byte: b';',
            },
        ),
        (
            EntityRecord::new("none", &[], true),
            BuildError::CodepointCount {
                name: "none".to_string(),
                count: 0,
            },
        ),
        (
            EntityRecord::new("three", &[0x41, 0x42, 0x43], true),
            BuildError::CodepointCount {
                name: "three".to_string(),
                count: 3,
            },
        ),
        (
            EntityRecord::new("surrogate", &[0xD800], true),
            BuildError::InvalidScalar {
                name: "surrogate".to_string(),
                value: 0xD800,
            },
        ),
    ];
    for (record, expected) in cases {
        assert_eq!(build(&[record]).unwrap_err(), expected);
    }
}

#[test]
fn build_error_messages_name_the_entity() {
    let err = BuildError::CodepointCount {
        name: "three".to_string(),
        count: 3,
    };
    assert_eq!(
        err.to_string(),
        "entity 'three' maps to 3 codepoints; expected 1 or 2"
    );
}

#[test]
fn empty_table_builds_a_lone_root() {
    let trie = build(&[]).expect("empty table is structurally valid");
    assert_eq!(trie.node_count(), 1);
    assert!(!trie.has_children(Trie::ROOT));
    assert!(trie.lookup("amp").is_none());
}

#[test]
fn node_ids_from_a_larger_trie_resolve_to_nothing() {
    let small = build(&small_table()).expect("valid table");
    let large = build(&ENTITIES).expect("canonical table");
    let mut foreign = Trie::ROOT;
    for &byte in b"NotEqualTilde" {
        foreign = large.child(foreign, byte).expect("canonical path");
    }
    assert!(foreign.index() >= small.node_count());
    assert_eq!(small.child(foreign, b'x'), None);
    assert!(small.terminal(foreign).is_none());
    assert!(!small.has_children(foreign));
    assert_eq!(small.label(foreign), None);
}
