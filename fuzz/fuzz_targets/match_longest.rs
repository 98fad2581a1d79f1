#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    let trie = charref::load();
    for in_attribute in [false, true] {
        let result = trie.match_longest(input, in_attribute);
        if result.matched {
            assert!(result.consumed_length <= input.len());
            assert!(input.is_char_boundary(result.consumed_length));
            assert!(matches!(result.codepoints.len(), 1 | 2));
            let name = &input[..result.consumed_length - result.used_semicolon as usize];
            assert!(trie.lookup(name).is_some(), "matched unregistered name {name:?}");
        }
        assert_eq!(trie.match_longest(input, in_attribute), result);
    }
});
