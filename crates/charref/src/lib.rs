//! Named character reference resolution for HTML tokenizers.
//!
//! The WHATWG named character reference table is compiled into a compact,
//! read-only prefix trie on first use and shared by every caller for the
//! rest of the process. Matching walks that trie with the longest-match rule
//! of the HTML tokenizer's named character reference state.
//!
//! Invariants:
//! - The trie is built at most once per process and never mutated; concurrent
//!   readers need no synchronization after `load()` returns.
//! - `match_longest` and `decode` are pure and allocation-free.
//! - "No match" is a normal result, never an error.

pub mod decoder;
pub mod matcher;
pub mod numeric;
pub mod record;
pub mod text;
pub mod trie;

mod error;
mod table;

use std::sync::OnceLock;

pub use crate::decoder::{DecodeResult, DecodeStep, Emit, decode, decode_streaming};
pub use crate::error::{CharRefError, CharRefErrorCode};
pub use crate::matcher::MatchResult;
pub use crate::numeric::{NumericMatch, parse_numeric};
pub use crate::record::{Codepoints, EntityRecord};
pub use crate::text::{DecodeTextConfig, TextDecoder, decode_text, decode_text_with_errors};
pub use crate::trie::{BuildError, NodeId, Terminal, Trie, TrieStats};

/// Number of distinct names in the canonical table.
pub const ENTITY_COUNT: usize = table::ENTITY_COUNT;

/// Number of names that also match without a trailing `;`.
pub const LEGACY_COUNT: usize = table::LEGACY_COUNT;

static TRIE: OnceLock<Trie> = OnceLock::new();

/// Build the shared trie if needed and return it.
///
/// Idempotent: every call returns the same instance. Memory harnesses call
/// this once and sample resident memory before and after.
///
/// # Panics
///
/// Panics if the compiled-in table is malformed. The table is generated and
/// checked by tests, so this only fires on a broken regeneration.
pub fn load() -> &'static Trie {
    TRIE.get_or_init(|| {
        let trie = trie::build(&table::ENTITIES)
            .unwrap_or_else(|err| panic!("named character reference table is invalid: {err}"));
        let stats = trie.stats();
        log::debug!(
            target: "charref.trie",
            "built entity trie: names={} nodes={} legacy={} max_depth={} heap_bytes={}",
            stats.terminals,
            stats.nodes,
            stats.legacy_terminals,
            stats.max_depth,
            stats.heap_bytes
        );
        trie
    })
}

/// Whether the shared trie has been built yet.
pub fn is_loaded() -> bool {
    TRIE.get().is_some()
}

/// The canonical table, sorted by name.
pub fn entities() -> impl ExactSizeIterator<Item = &'static EntityRecord> {
    table::ENTITIES.iter()
}

/// Resolve an exact name (without `&` or `;`) through the shared trie.
pub fn lookup(name: &str) -> Option<Terminal> {
    load().lookup(name)
}

/// Longest-match a reference against the shared trie.
///
/// `input` is the text right after the `&`.
pub fn match_longest(input: &str, in_attribute: bool) -> MatchResult {
    load().match_longest(input, in_attribute)
}
