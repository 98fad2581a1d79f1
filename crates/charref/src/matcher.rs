//! Longest-match walk over the entity trie.
//!
//! Mirrors the HTML tokenizer's named character reference state: consume the
//! longest run of input that spells a registered name, then apply the
//! semicolon and attribute-value rules to decide whether it resolves.

use crate::record::Codepoints;
use crate::trie::{NodeId, Terminal, Trie};

/// Outcome of a single longest-match walk.
///
/// When `matched` is false the other fields carry no meaning and are zeroed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchResult {
    pub matched: bool,
    /// Bytes consumed after the `&`, including the `;` when `used_semicolon`.
    pub consumed_length: usize,
    pub codepoints: Codepoints,
    pub used_semicolon: bool,
}

impl MatchResult {
    pub const NO_MATCH: MatchResult = MatchResult {
        matched: false,
        consumed_length: 0,
        codepoints: Codepoints::empty(),
        used_semicolon: false,
    };

    fn accept(candidate: Candidate, used_semicolon: bool) -> Self {
        MatchResult {
            matched: true,
            consumed_length: candidate.len + used_semicolon as usize,
            codepoints: candidate.terminal.codepoints,
            used_semicolon,
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct Candidate {
    len: usize,
    terminal: Terminal,
}

/// Per-call walk state. Lives on the stack only.
struct MatchState {
    node: NodeId,
    consumed: usize,
    best: Option<Candidate>,
    best_legacy: Option<Candidate>,
}

impl MatchState {
    fn new() -> Self {
        Self {
            node: Trie::ROOT,
            consumed: 0,
            best: None,
            best_legacy: None,
        }
    }

    fn record(&mut self, terminal: Terminal) {
        let candidate = Candidate {
            len: self.consumed,
            terminal,
        };
        self.best = Some(candidate);
        if terminal.is_legacy() {
            self.best_legacy = Some(candidate);
        }
    }
}

impl Trie {
    /// Walk as far as `bytes` spells a path from the root.
    fn walk(&self, bytes: &[u8]) -> MatchState {
        let mut state = MatchState::new();
        while let Some(&byte) = bytes.get(state.consumed) {
            let Some(next) = self.child(state.node, byte) else {
                break;
            };
            state.node = next;
            state.consumed += 1;
            if let Some(terminal) = self.terminal(next) {
                state.record(*terminal);
            }
        }
        state
    }

    /// Resolve the longest registered name at the start of `input`.
    ///
    /// `input` is the text immediately after `&`. A semicolon-required name
    /// resolves only when followed by `;`; otherwise the walk falls back to
    /// the longest legacy name it passed. In attribute values an unterminated
    /// legacy match followed by `=` or an ASCII alphanumeric is rejected.
    pub fn match_longest(&self, input: &str, in_attribute: bool) -> MatchResult {
        let bytes = input.as_bytes();
        let state = self.walk(bytes);
        let Some(best) = state.best else {
            return MatchResult::NO_MATCH;
        };

        if bytes.get(best.len) == Some(&b';') {
            return MatchResult::accept(best, true);
        }

        let candidate = if best.terminal.semicolon_required {
            match state.best_legacy {
                Some(legacy) => legacy,
                None => return MatchResult::NO_MATCH,
            }
        } else {
            best
        };

        if in_attribute
            && bytes
                .get(candidate.len)
                .is_some_and(|&b| b == b'=' || b.is_ascii_alphanumeric())
        {
            return MatchResult::NO_MATCH;
        }

        MatchResult::accept(candidate, false)
    }

    /// Whether more input could change the result for `input`.
    ///
    /// True when the walk consumed all of `input`: a following byte could
    /// extend the name, supply the `;`, or trigger the attribute rule. Every
    /// reachable node is a name or the prefix of one, so reaching the end of
    /// input on a path is sufficient.
    pub fn needs_more_input(&self, input: &str) -> bool {
        self.walk(input.as_bytes()).consumed == input.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::load;

    fn chars(result: &MatchResult) -> Vec<char> {
        result.codepoints.as_slice().to_vec()
    }

    #[test]
    fn semicolon_terminated_name_consumes_semicolon() {
        let result = load().match_longest("amp;rest", false);
        assert!(result.matched);
        assert_eq!(result.consumed_length, 4);
        assert!(result.used_semicolon);
        assert_eq!(chars(&result), vec!['&']);
    }

    #[test]
    fn legacy_name_matches_at_end_of_input() {
        let result = load().match_longest("copy", false);
        assert!(result.matched);
        assert_eq!(result.consumed_length, 4);
        assert!(!result.used_semicolon);
        assert_eq!(chars(&result), vec!['\u{00A9}']);
    }

    #[test]
    fn longest_name_wins_over_legacy_prefix() {
        let result = load().match_longest("notin;", false);
        assert!(result.matched);
        assert_eq!(result.consumed_length, 6);
        assert_eq!(chars(&result), vec!['\u{2209}']);
    }

    #[test]
    fn required_name_without_semicolon_falls_back_to_legacy_prefix() {
        let result = load().match_longest("notin", false);
        assert!(result.matched);
        assert_eq!(result.consumed_length, 3);
        assert!(!result.used_semicolon);
        assert_eq!(chars(&result), vec!['\u{00AC}']);
    }

    #[test]
    fn required_name_without_semicolon_and_no_legacy_prefix_is_rejected() {
        assert_eq!(load().match_longest("alpha", false), MatchResult::NO_MATCH);
        assert_eq!(load().match_longest("alpha ", false), MatchResult::NO_MATCH);
    }

    #[test]
    fn attribute_context_rejects_legacy_followed_by_alnum_or_equals() {
        let trie = load();
        assert!(!trie.match_longest("notit=5", true).matched);
        assert!(!trie.match_longest("not=5", true).matched);
        assert!(!trie.match_longest("amp2", true).matched);
        // Same inputs decode outside attributes.
        assert!(trie.match_longest("notit=5", false).matched);
        assert!(trie.match_longest("not=5", false).matched);
    }

    #[test]
    fn attribute_context_accepts_legacy_followed_by_other_bytes() {
        let trie = load();
        let result = trie.match_longest("not 5", true);
        assert!(result.matched);
        assert_eq!(result.consumed_length, 3);
        assert!(trie.match_longest("amp&", true).matched);
        assert!(trie.match_longest("amp", true).matched);
        // Only ASCII alphanumerics suppress.
        assert!(trie.match_longest("not\u{00E9}", true).matched);
    }

    #[test]
    fn attribute_context_does_not_affect_semicolon_terminated_names() {
        let result = load().match_longest("notin;x", true);
        assert!(result.matched);
        assert_eq!(result.consumed_length, 6);
    }

    #[test]
    fn unknown_names_do_not_match() {
        assert!(!load().match_longest("zzzznotreal;", false).matched);
        assert!(!load().match_longest("", false).matched);
        assert!(!load().match_longest(";", false).matched);
        assert!(!load().match_longest("#123;", false).matched);
    }

    #[test]
    fn two_codepoint_entity() {
        let result = load().match_longest("NotEqualTilde;", false);
        assert!(result.matched);
        assert_eq!(result.consumed_length, 14);
        assert_eq!(chars(&result), vec!['\u{2242}', '\u{0338}']);
    }

    #[test]
    fn names_are_case_sensitive() {
        let trie = load();
        assert_eq!(chars(&trie.match_longest("AMP;", false)), vec!['&']);
        assert!(!trie.match_longest("aMp;", false).matched);
    }

    #[test]
    fn walk_stops_at_first_unmatched_byte() {
        // "noti" is a path but not a name; the legacy "not" still resolves.
        let result = load().match_longest("noti;", false);
        assert!(result.matched);
        assert_eq!(result.consumed_length, 3);
        assert!(!result.used_semicolon);
    }

    #[test]
    fn repeated_calls_are_identical() {
        let trie = load();
        let inputs = ["notin;", "notit=5", "amp", "NotEqualTilde;", "zz;"];
        for input in inputs {
            for ctx in [false, true] {
                let first = trie.match_longest(input, ctx);
                for _ in 0..4 {
                    assert_eq!(trie.match_longest(input, ctx), first, "input {input:?}");
                }
            }
        }
    }

    #[test]
    fn needs_more_input_tracks_open_paths() {
        let trie = load();
        assert!(trie.needs_more_input(""));
        assert!(trie.needs_more_input("no"));
        assert!(trie.needs_more_input("not"));
        assert!(trie.needs_more_input("notin"));
        assert!(!trie.needs_more_input("not "));
        assert!(!trie.needs_more_input("notin;"));
        assert!(!trie.needs_more_input("zz"));
    }
}
