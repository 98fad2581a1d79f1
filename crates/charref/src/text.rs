//! Whole-text and chunked character reference decoding.
//!
//! Contract:
//! - Named references resolve through the shared trie with the tokenizer's
//!   longest-match rules; numeric references follow the WHATWG numeric states.
//! - Unresolved `&` is kept literally, along with everything after it.
//! - Output never depends on how the input was split into chunks: a
//!   `TextDecoder` holds back a trailing reference until the bytes that could
//!   change its resolution have arrived.
//! - Error positions are byte offsets of the `&` in the whole stream.

use std::borrow::Cow;

use memchr::memchr;

use crate::error::{CharRefError, CharRefErrorCode};
use crate::numeric::{DigitRun, parse_numeric};
use crate::trie::Trie;

/// Configuration for text decoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodeTextConfig {
    /// Apply attribute-value rules to unterminated legacy references.
    pub in_attribute: bool,
    /// Decode `&#...;` references. When false they stay literal.
    pub decode_numeric: bool,
}

impl Default for DecodeTextConfig {
    fn default() -> Self {
        Self {
            in_attribute: false,
            decode_numeric: true,
        }
    }
}

impl DecodeTextConfig {
    pub fn attribute() -> Self {
        Self {
            in_attribute: true,
            ..Self::default()
        }
    }
}

/// Decode all character references in `s`.
///
/// Returns `Cow::Borrowed` when `s` contains no `&`.
pub fn decode_text(s: &str, config: DecodeTextConfig) -> Cow<'_, str> {
    let mut errors = Vec::new();
    decode_text_with_errors(s, config, &mut errors)
}

/// Like `decode_text`, also appending parse errors to `errors`.
pub fn decode_text_with_errors<'a>(
    s: &'a str,
    config: DecodeTextConfig,
    errors: &mut Vec<CharRefError>,
) -> Cow<'a, str> {
    if memchr(b'&', s.as_bytes()).is_none() {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len());
    let (processed, _) = decode_segment(crate::load(), s, 0, config, true, &mut out, errors);
    debug_assert_eq!(processed, s.len());
    Cow::Owned(out)
}

/// Chunked decoder instrumentation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextDecoderStats {
    pub chunks: u64,
    pub held_back: u64,
    /// Never exceeds `1 + Trie::max_depth()`.
    pub max_pending_bytes: usize,
    /// Chunks that ended inside a reference run carried to the next chunk.
    pub open_runs: u64,
}

/// A reference run that reached the end of a chunk after its resolution was
/// already fixed. Only constant-size state survives the chunk boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum OpenRun {
    /// Unmatched alphanumeric run after `&`, already emitted literally.
    /// Closing it with `;` is an unknown named reference.
    Named { position: usize, report_unknown: bool },
    /// Digit run of a numeric reference. Nothing emitted yet.
    Numeric { position: usize, run: DigitRun },
}

/// What a trailing reference at the end of a chunk needs from the next one.
enum Tail {
    Settled,
    /// Resolution can still change; hold the bytes back.
    Incomplete,
    Open(OpenRun),
}

/// Streaming decoder fed with `&str` chunks.
pub struct TextDecoder {
    config: DecodeTextConfig,
    pending: String,
    open: Option<OpenRun>,
    offset: usize,
    errors: Vec<CharRefError>,
    finished: bool,
    stats: TextDecoderStats,
}

impl TextDecoder {
    pub fn new(config: DecodeTextConfig) -> Self {
        Self {
            config,
            pending: String::new(),
            open: None,
            offset: 0,
            errors: Vec::new(),
            finished: false,
            stats: TextDecoderStats::default(),
        }
    }

    /// Decode `chunk`, appending everything that is settled to `out`.
    pub fn push_str(&mut self, chunk: &str, out: &mut String) {
        assert!(
            !self.finished,
            "TextDecoder::push_str called after finish(); this violates end-of-stream contract"
        );
        self.stats.chunks = self.stats.chunks.saturating_add(1);
        let trie = crate::load();

        let mut chunk = chunk;
        if let Some(open) = self.open.take() {
            let taken = self.continue_open(open, chunk, out);
            self.offset += taken;
            chunk = &chunk[taken..];
            if self.open.is_some() {
                self.stats.open_runs = self.stats.open_runs.saturating_add(1);
                return;
            }
        }

        let (processed, open) = if self.pending.is_empty() {
            let (processed, open) = decode_segment(
                trie,
                chunk,
                self.offset,
                self.config,
                false,
                out,
                &mut self.errors,
            );
            self.pending.push_str(&chunk[processed..]);
            (processed, open)
        } else {
            let mut buffer = std::mem::take(&mut self.pending);
            buffer.push_str(chunk);
            let (processed, open) = decode_segment(
                trie,
                &buffer,
                self.offset,
                self.config,
                false,
                out,
                &mut self.errors,
            );
            buffer.drain(..processed);
            self.pending = buffer;
            (processed, open)
        };
        self.offset += processed;
        self.open = open;

        if self.open.is_some() {
            self.stats.open_runs = self.stats.open_runs.saturating_add(1);
        }
        if !self.pending.is_empty() {
            self.stats.held_back = self.stats.held_back.saturating_add(1);
            self.stats.max_pending_bytes = self.stats.max_pending_bytes.max(self.pending.len());
            #[cfg(any(test, feature = "debug-stats"))]
            log::trace!(
                target: "charref.text",
                "holding back {} bytes at offset {} across chunk boundary",
                self.pending.len(),
                self.offset
            );
        }
    }

    /// Flush any held-back reference, treating the stream as ended.
    pub fn finish(&mut self, out: &mut String) {
        if self.finished {
            return;
        }
        self.finished = true;
        // An open named run was never closed by `;`, so it reports nothing.
        if let Some(OpenRun::Numeric { position, run }) = self.open.take() {
            emit_numeric(&run, true, position, out, &mut self.errors);
        }
        let pending = std::mem::take(&mut self.pending);
        let (processed, _) = decode_segment(
            crate::load(),
            &pending,
            self.offset,
            self.config,
            true,
            out,
            &mut self.errors,
        );
        self.offset += processed;
    }

    pub fn errors(&self) -> &[CharRefError] {
        &self.errors
    }

    pub fn take_errors(&mut self) -> Vec<CharRefError> {
        std::mem::take(&mut self.errors)
    }

    pub fn stats(&self) -> TextDecoderStats {
        self.stats
    }

    /// Bytes of input settled so far.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Feed the start of `chunk` to an open run and return the bytes it took.
    /// Leaves `self.open` set when the run covers the whole chunk.
    fn continue_open(&mut self, open: OpenRun, chunk: &str, out: &mut String) -> usize {
        let bytes = chunk.as_bytes();
        match open {
            OpenRun::Named {
                position,
                report_unknown,
            } => {
                let run = bytes.iter().take_while(|b| b.is_ascii_alphanumeric()).count();
                out.push_str(&chunk[..run]);
                match bytes.get(run) {
                    None => self.open = Some(open),
                    Some(b';') if report_unknown => self.errors.push(CharRefError {
                        code: CharRefErrorCode::UnknownNamedReference,
                        position,
                    }),
                    Some(_) => {}
                }
                run
            }
            OpenRun::Numeric { position, mut run } => {
                let taken = run.push(bytes);
                let Some(&next) = bytes.get(taken) else {
                    self.open = Some(OpenRun::Numeric { position, run });
                    return taken;
                };
                let missing_semicolon = next != b';';
                emit_numeric(&run, missing_semicolon, position, out, &mut self.errors);
                taken + usize::from(!missing_semicolon)
            }
        }
    }
}

/// Decode `buf` into `out` and return how many bytes were settled.
///
/// With `at_eof == false`, stops at the first `&` whose resolution could still
/// change with more input; the returned length then points at that `&`. A
/// reference whose resolution is fixed but whose run reaches the end of `buf`
/// is consumed and returned as an `OpenRun`.
fn decode_segment(
    trie: &Trie,
    buf: &str,
    base: usize,
    config: DecodeTextConfig,
    at_eof: bool,
    out: &mut String,
    errors: &mut Vec<CharRefError>,
) -> (usize, Option<OpenRun>) {
    let bytes = buf.as_bytes();
    let mut i = 0;
    let mut copy_start = 0;

    while let Some(rel) = memchr(b'&', &bytes[i..]) {
        let amp = i + rel;
        // Flush bytes up to '&' unchanged (preserves UTF-8).
        out.push_str(&buf[copy_start..amp]);
        let rest = &buf[amp + 1..];
        if !at_eof {
            match classify_tail(trie, rest, base + amp, config) {
                Tail::Settled => {}
                Tail::Incomplete => return (amp, None),
                Tail::Open(open) => {
                    if let OpenRun::Named { .. } = open {
                        out.push_str(&buf[amp..]);
                    }
                    return (buf.len(), Some(open));
                }
            }
        }
        let consumed = decode_reference(trie, rest, base + amp, config, out, errors);
        i = amp + 1 + consumed;
        copy_start = i;
    }

    out.push_str(&buf[copy_start..]);
    (buf.len(), None)
}

/// Resolve the reference after one `&`, returning the bytes consumed after it.
/// Zero means the `&` was emitted literally.
fn decode_reference(
    trie: &Trie,
    rest: &str,
    position: usize,
    config: DecodeTextConfig,
    out: &mut String,
    errors: &mut Vec<CharRefError>,
) -> usize {
    if let Some(numeric) = rest.strip_prefix('#') {
        if config.decode_numeric {
            match parse_numeric(numeric) {
                Some(m) => {
                    out.push(m.value);
                    if m.missing_semicolon {
                        errors.push(CharRefError {
                            code: CharRefErrorCode::MissingSemicolon,
                            position,
                        });
                    }
                    if let Some(code) = m.error {
                        errors.push(CharRefError { code, position });
                    }
                    return 1 + m.consumed_length;
                }
                None => errors.push(CharRefError {
                    code: CharRefErrorCode::AbsenceOfDigits,
                    position,
                }),
            }
        }
        out.push('&');
        return 0;
    }

    let result = trie.match_longest(rest, config.in_attribute);
    if result.matched {
        result.codepoints.push_to(out);
        if !result.used_semicolon {
            errors.push(CharRefError {
                code: CharRefErrorCode::MissingSemicolon,
                position,
            });
        }
        return result.consumed_length;
    }

    if is_unknown_named(trie, rest, config) {
        errors.push(CharRefError {
            code: CharRefErrorCode::UnknownNamedReference,
            position,
        });
    }
    out.push('&');
    0
}

/// Emit a finished digit run the way `decode_reference` does.
fn emit_numeric(
    run: &DigitRun,
    missing_semicolon: bool,
    position: usize,
    out: &mut String,
    errors: &mut Vec<CharRefError>,
) {
    let (value, error) = run.resolve();
    out.push(value);
    if missing_semicolon {
        errors.push(CharRefError {
            code: CharRefErrorCode::MissingSemicolon,
            position,
        });
    }
    if let Some(code) = error {
        errors.push(CharRefError { code, position });
    }
}

/// An alphanumeric run closed by `;` that names nothing. Attribute-value
/// suppression of a legacy match is not an unknown reference.
fn is_unknown_named(trie: &Trie, rest: &str, config: DecodeTextConfig) -> bool {
    let bytes = rest.as_bytes();
    let run = bytes.iter().take_while(|b| b.is_ascii_alphanumeric()).count();
    if run == 0 || bytes.get(run) != Some(&b';') {
        return false;
    }
    !is_suppressed_legacy(trie, rest, config)
}

/// A legacy name the attribute-value rule rejected.
fn is_suppressed_legacy(trie: &Trie, rest: &str, config: DecodeTextConfig) -> bool {
    config.in_attribute && trie.match_longest(rest, false).matched
}

/// Classify the reference after a `&` that may continue into the next chunk.
///
/// Named references hold back at most `max_depth` bytes: past that the walk
/// has stopped and only the unknown-reference diagnostic is still open.
fn classify_tail(trie: &Trie, rest: &str, position: usize, config: DecodeTextConfig) -> Tail {
    if let Some(numeric) = rest.strip_prefix('#') {
        if !config.decode_numeric {
            return Tail::Settled;
        }
        let bytes = numeric.as_bytes();
        let (mut run, digits) = match bytes.first() {
            None => return Tail::Incomplete,
            Some(b'x' | b'X') => (DigitRun::new(true), &bytes[1..]),
            Some(_) => (DigitRun::new(false), bytes),
        };
        if run.push(digits) < digits.len() {
            return Tail::Settled;
        }
        if !run.has_digits() {
            return Tail::Incomplete;
        }
        return Tail::Open(OpenRun::Numeric { position, run });
    }

    if trie.needs_more_input(rest) {
        return Tail::Incomplete;
    }
    let all_alnum = rest.bytes().all(|b| b.is_ascii_alphanumeric());
    if !all_alnum || trie.match_longest(rest, config.in_attribute).matched {
        return Tail::Settled;
    }
    Tail::Open(OpenRun::Named {
        position,
        report_unknown: !is_suppressed_legacy(trie, rest, config),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(s: &str) -> String {
        decode_text(s, DecodeTextConfig::default()).into_owned()
    }

    fn decode_attr(s: &str) -> String {
        decode_text(s, DecodeTextConfig::attribute()).into_owned()
    }

    fn codes(s: &str, config: DecodeTextConfig) -> Vec<(CharRefErrorCode, usize)> {
        let mut errors = Vec::new();
        let _ = decode_text_with_errors(s, config, &mut errors);
        errors.into_iter().map(|e| (e.code, e.position)).collect()
    }

    fn decode_chunked(
        s: &str,
        config: DecodeTextConfig,
        splits: &[usize],
    ) -> (String, Vec<CharRefError>) {
        let mut decoder = TextDecoder::new(config);
        let mut out = String::new();
        let mut start = 0;
        for &split in splits {
            decoder.push_str(&s[start..split], &mut out);
            start = split;
        }
        decoder.push_str(&s[start..], &mut out);
        decoder.finish(&mut out);
        (out, decoder.take_errors())
    }

    #[test]
    fn text_without_ampersand_is_borrowed() {
        let input = "plain text, 120×32";
        assert!(matches!(
            decode_text(input, DecodeTextConfig::default()),
            Cow::Borrowed(_)
        ));
    }

    #[test]
    fn decodes_common_named_references() {
        assert_eq!(decode("a &amp; b"), "a & b");
        assert_eq!(decode("&lt;tag&gt;"), "<tag>");
        assert_eq!(decode("&quot;x&quot; &apos;y&apos;"), "\"x\" 'y'");
        assert_eq!(decode("a&nbsp;b"), "a\u{00A0}b");
    }

    #[test]
    fn decodes_full_table_names() {
        assert_eq!(decode("&NotEqualTilde;"), "\u{2242}\u{0338}");
        assert_eq!(decode("&notin;"), "\u{2209}");
        assert_eq!(decode("I'm &notit; I tell you"), "I'm \u{00AC}it; I tell you");
        assert_eq!(decode("&fjlig;"), "fj");
    }

    #[test]
    fn decodes_numeric_references() {
        assert_eq!(decode("&#123;"), "{");
        assert_eq!(decode("&#x1F4A9;"), "\u{1F4A9}");
        assert_eq!(decode("&#128;"), "\u{20AC}");
        assert_eq!(decode("&#0;"), "\u{FFFD}");
    }

    #[test]
    fn numeric_references_stay_literal_when_disabled() {
        let config = DecodeTextConfig {
            decode_numeric: false,
            ..DecodeTextConfig::default()
        };
        assert_eq!(decode_text("&#65; &amp;", config), "&#65; &");
    }

    #[test]
    fn unknown_and_bare_ampersands_are_literal() {
        assert_eq!(decode("a & b"), "a & b");
        assert_eq!(decode("&unknown;"), "&unknown;");
        assert_eq!(decode("&#;"), "&#;");
        assert_eq!(decode("&"), "&");
        assert_eq!(decode("&&amp;"), "&&");
    }

    #[test]
    fn attribute_values_keep_suppressed_legacy_references() {
        assert_eq!(decode_attr("?a=1&not=2"), "?a=1&not=2");
        assert_eq!(decode_attr("x&copyright"), "x&copyright");
        assert_eq!(decode_attr("&copy 2024"), "\u{00A9} 2024");
        assert_eq!(decode("x&copyright"), "x\u{00A9}right");
    }

    #[test]
    fn preserves_utf8_around_references() {
        assert_eq!(decode("é&amp;ü"), "é&ü");
        assert_eq!(decode("&not€"), "\u{00AC}€");
    }

    #[test]
    fn reports_parse_errors_with_positions() {
        let config = DecodeTextConfig::default();
        assert_eq!(
            codes("ab&not x", config),
            vec![(CharRefErrorCode::MissingSemicolon, 2)]
        );
        assert_eq!(
            codes("&bogus; &#; &#0;", config),
            vec![
                (CharRefErrorCode::UnknownNamedReference, 0),
                (CharRefErrorCode::AbsenceOfDigits, 8),
                (CharRefErrorCode::NullCharacterReference, 12),
            ]
        );
        assert_eq!(
            codes("&#x80", config),
            vec![
                (CharRefErrorCode::MissingSemicolon, 0),
                (CharRefErrorCode::ControlCharacterReference, 0),
            ]
        );
        assert!(codes("&amp; &#65;", config).is_empty());
    }

    #[test]
    fn attribute_suppression_is_not_an_unknown_reference() {
        assert!(codes("&notit;", DecodeTextConfig::attribute()).is_empty());
        assert_eq!(
            codes("&notit;", DecodeTextConfig::default()),
            vec![(CharRefErrorCode::MissingSemicolon, 0)]
        );
    }

    #[test]
    fn chunked_decoding_matches_whole_input_at_every_split() {
        let samples = [
            "a &amp; b &notin; c &notit; d",
            "&NotEqualTilde;&#x1F4A9;&#128&copy",
            "x&copyright=&not=1&#;&#xZ",
            "tail ends in a reference &no",
            "é&amp;ü&#233;&bogus;",
            "&abcdefghijklmnopqrstuvwxyzABCDEFGHIJ; &#00000000000065 &zzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzz",
            "&notitxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx; &#x00000000001F4A9;",
        ];
        for config in [DecodeTextConfig::default(), DecodeTextConfig::attribute()] {
            for sample in samples {
                let mut expected_errors = Vec::new();
                let expected = decode_text_with_errors(sample, config, &mut expected_errors)
                    .into_owned();
                for split in 0..=sample.len() {
                    if !sample.is_char_boundary(split) {
                        continue;
                    }
                    let (out, errors) = decode_chunked(sample, config, &[split]);
                    assert_eq!(out, expected, "sample {sample:?} split at {split}");
                    assert_eq!(errors, expected_errors, "sample {sample:?} split at {split}");
                }
            }
        }
    }

    #[test]
    fn chunked_decoding_one_char_at_a_time() {
        let sample = "&notin;&not;&notit;&#x41;&#66&amp";
        let splits = sample.char_indices().map(|(i, _)| i).skip(1).collect::<Vec<_>>();
        let (out, _) = decode_chunked(sample, DecodeTextConfig::default(), &splits);
        assert_eq!(out, decode(sample));
    }

    #[test]
    fn decoder_holds_back_open_reference_until_finish() {
        let mut decoder = TextDecoder::new(DecodeTextConfig::default());
        let mut out = String::new();
        decoder.push_str("x &no", &mut out);
        assert_eq!(out, "x ");
        assert_eq!(decoder.offset(), 2);
        decoder.push_str("t", &mut out);
        assert_eq!(out, "x ");
        decoder.finish(&mut out);
        assert_eq!(out, "x \u{00AC}");
        let stats = decoder.stats();
        assert_eq!(stats.chunks, 2);
        assert_eq!(stats.held_back, 2);
        assert_eq!(stats.max_pending_bytes, 4);
    }

    fn decode_byte_at_a_time(input: &str, config: DecodeTextConfig) -> TextDecoder {
        let mut decoder = TextDecoder::new(config);
        let mut out = String::new();
        for (i, ch) in input.char_indices() {
            decoder.push_str(&input[i..i + ch.len_utf8()], &mut out);
        }
        decoder.finish(&mut out);
        let mut expected_errors = Vec::new();
        let expected = decode_text_with_errors(input, config, &mut expected_errors).into_owned();
        assert!(out == expected, "chunked output differs from whole decode");
        assert_eq!(decoder.errors(), expected_errors.as_slice());
        decoder
    }

    #[test]
    fn long_alphanumeric_run_streams_with_bounded_state() {
        let input = format!("x &{}; y", "a".repeat(100_000));
        let mut decoder = TextDecoder::new(DecodeTextConfig::default());
        let mut out = String::new();
        for i in 0..input.len() / 2 {
            decoder.push_str(&input[i..i + 1], &mut out);
        }
        // Past the longest name the run is already emitted.
        assert!(out.len() + crate::load().max_depth() >= input.len() / 2);

        let decoder = decode_byte_at_a_time(&input, DecodeTextConfig::default());
        assert_eq!(
            decoder.errors(),
            &[CharRefError {
                code: CharRefErrorCode::UnknownNamedReference,
                position: 2,
            }]
        );
        let stats = decoder.stats();
        assert!(stats.max_pending_bytes <= 1 + crate::load().max_depth(), "{stats:?}");
        assert!(stats.open_runs > 0);
    }

    #[test]
    fn long_digit_runs_stream_with_bounded_state() {
        let zeros = format!("&#{}65;", "0".repeat(100_000));
        let decoder = decode_byte_at_a_time(&zeros, DecodeTextConfig::default());
        assert!(decoder.errors().is_empty());
        assert!(decoder.stats().max_pending_bytes <= 3);

        let hex = format!("&#x{}", "f".repeat(10_000));
        let decoder = decode_byte_at_a_time(&hex, DecodeTextConfig::default());
        assert_eq!(
            decoder.errors(),
            &[
                CharRefError {
                    code: CharRefErrorCode::MissingSemicolon,
                    position: 0,
                },
                CharRefError {
                    code: CharRefErrorCode::OutsideUnicodeRange,
                    position: 0,
                },
            ]
        );
        assert_eq!(decode(&hex), "\u{FFFD}");
    }

    #[test]
    fn suppressed_legacy_run_in_attribute_reports_nothing() {
        let input = format!("&notit{}; tail", "x".repeat(1_000));
        let decoder = decode_byte_at_a_time(&input, DecodeTextConfig::attribute());
        assert!(decoder.errors().is_empty());
    }

    #[test]
    #[should_panic(expected = "after finish")]
    fn push_after_finish_panics() {
        let mut decoder = TextDecoder::new(DecodeTextConfig::default());
        let mut out = String::new();
        decoder.finish(&mut out);
        decoder.push_str("x", &mut out);
    }
}
