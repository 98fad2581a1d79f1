//! Tokenizer-facing decode step.
//!
//! The tokenizer hands over control after it sees `&` outside raw text and
//! comments. The decoder resolves one reference (or nothing) and reports how
//! far the tokenizer's cursor moves. Ambiguous-ampersand handling stays with
//! the tokenizer: an unresolved `&` is returned as a literal and the bytes
//! after it are left in place.

use crate::matcher::MatchResult;
use crate::record::Codepoints;
use crate::trie::Trie;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Emit {
    Codepoints(Codepoints),
    /// The `&` itself, as literal text.
    Ampersand,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodeResult {
    pub emit: Emit,
    /// Bytes to advance past, counted from the `&`.
    pub advance_by: usize,
    /// Set when a reference resolved without its `;`.
    pub missing_semicolon: bool,
}

impl DecodeResult {
    const AMPERSAND: DecodeResult = DecodeResult {
        emit: Emit::Ampersand,
        advance_by: 1,
        missing_semicolon: false,
    };

    fn from_match(result: MatchResult) -> Self {
        if !result.matched {
            return Self::AMPERSAND;
        }
        DecodeResult {
            emit: Emit::Codepoints(result.codepoints),
            advance_by: 1 + result.consumed_length,
            missing_semicolon: !result.used_semicolon,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self.emit, Emit::Codepoints(_))
    }

    /// Append the emitted text to `out`.
    pub fn push_to(&self, out: &mut String) {
        match self.emit {
            Emit::Codepoints(codepoints) => codepoints.push_to(out),
            Emit::Ampersand => out.push('&'),
        }
    }
}

/// Result of a decode attempt on possibly incomplete input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeStep {
    Resolved(DecodeResult),
    /// The input ended while a longer name was still possible.
    NeedMoreInput,
}

impl Trie {
    /// Decode the reference at the start of `input`, which begins at `&`.
    ///
    /// Input that does not start with `&` resolves to a literal ampersand
    /// step so the caller always makes progress.
    pub fn decode(&self, input: &str, in_attribute: bool) -> DecodeResult {
        let Some(rest) = input.strip_prefix('&') else {
            return DecodeResult::AMPERSAND;
        };
        DecodeResult::from_match(self.match_longest(rest, in_attribute))
    }

    /// Like `decode`, but reports `NeedMoreInput` instead of committing when
    /// `input` is a chunk that ends inside a possible name and `at_eof` is
    /// false.
    pub fn decode_streaming(&self, input: &str, in_attribute: bool, at_eof: bool) -> DecodeStep {
        if !at_eof {
            if let Some(rest) = input.strip_prefix('&') {
                if self.needs_more_input(rest) {
                    return DecodeStep::NeedMoreInput;
                }
            }
        }
        DecodeStep::Resolved(self.decode(input, in_attribute))
    }
}

/// `Trie::decode` against the shared trie.
pub fn decode(input: &str, in_attribute: bool) -> DecodeResult {
    crate::load().decode(input, in_attribute)
}

/// `Trie::decode_streaming` against the shared trie.
pub fn decode_streaming(input: &str, in_attribute: bool, at_eof: bool) -> DecodeStep {
    crate::load().decode_streaming(input, in_attribute, at_eof)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolved_reference_advances_past_ampersand_and_name() {
        let result = decode("&amp;tail", false);
        assert_eq!(result.emit, Emit::Codepoints(Codepoints::one('&')));
        assert_eq!(result.advance_by, 5);
        assert!(!result.missing_semicolon);
    }

    #[test]
    fn unresolved_reference_emits_literal_ampersand() {
        let result = decode("&zzzz;", false);
        assert_eq!(result.emit, Emit::Ampersand);
        assert_eq!(result.advance_by, 1);
    }

    #[test]
    fn legacy_reference_without_semicolon_is_flagged() {
        let result = decode("&not in", false);
        assert!(result.is_resolved());
        assert_eq!(result.advance_by, 4);
        assert!(result.missing_semicolon);
    }

    #[test]
    fn attribute_suppression_leaves_text_for_tokenizer() {
        let result = decode("&notit=5", true);
        assert_eq!(result.emit, Emit::Ampersand);
        assert_eq!(result.advance_by, 1);
    }

    #[test]
    fn input_without_ampersand_still_progresses() {
        assert_eq!(decode("amp;", false).advance_by, 1);
        assert_eq!(decode("", false).emit, Emit::Ampersand);
    }

    #[test]
    fn push_to_writes_emitted_text() {
        let mut out = String::new();
        decode("&NotEqualTilde;", false).push_to(&mut out);
        decode("&bogus;", false).push_to(&mut out);
        assert_eq!(out, "\u{2242}\u{0338}&");
    }

    #[test]
    fn streaming_waits_for_possible_longer_name() {
        assert_eq!(decode_streaming("&no", false, false), DecodeStep::NeedMoreInput);
        assert_eq!(decode_streaming("&", false, false), DecodeStep::NeedMoreInput);
        assert_eq!(
            decode_streaming("&not", false, false),
            DecodeStep::NeedMoreInput
        );
        let DecodeStep::Resolved(result) = decode_streaming("&not", false, true) else {
            panic!("at EOF the decoder must resolve");
        };
        assert_eq!(result.advance_by, 4);
        let DecodeStep::Resolved(result) = decode_streaming("&not ", false, false) else {
            panic!("a terminating byte settles the match");
        };
        assert_eq!(result.advance_by, 4);
    }
}
