//! Numeric character references (`&#123;`, `&#x1F4A9;`).

use crate::error::CharRefErrorCode;

/// Values past this saturate; anything above it is out of range anyway.
const SATURATED: u32 = 0x11_0000;

/// Windows-1252 remapping for references into the C1 control range.
const C1_REPLACEMENTS: [(u32, char); 27] = [
    (0x80, '\u{20AC}'),
    (0x82, '\u{201A}'),
    (0x83, '\u{0192}'),
    (0x84, '\u{201E}'),
    (0x85, '\u{2026}'),
    (0x86, '\u{2020}'),
    (0x87, '\u{2021}'),
    (0x88, '\u{02C6}'),
    (0x89, '\u{2030}'),
    (0x8A, '\u{0160}'),
    (0x8B, '\u{2039}'),
    (0x8C, '\u{0152}'),
    (0x8E, '\u{017D}'),
    (0x91, '\u{2018}'),
    (0x92, '\u{2019}'),
    (0x93, '\u{201C}'),
    (0x94, '\u{201D}'),
    (0x95, '\u{2022}'),
    (0x96, '\u{2013}'),
    (0x97, '\u{2014}'),
    (0x98, '\u{02DC}'),
    (0x99, '\u{2122}'),
    (0x9A, '\u{0161}'),
    (0x9B, '\u{203A}'),
    (0x9C, '\u{0153}'),
    (0x9E, '\u{017E}'),
    (0x9F, '\u{0178}'),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NumericMatch {
    /// Bytes consumed after `&#`, including `x` and `;` when present.
    pub consumed_length: usize,
    pub value: char,
    pub missing_semicolon: bool,
    /// Range/class error for the referenced value, if any.
    pub error: Option<CharRefErrorCode>,
}

/// Parse a numeric reference; `input` starts right after `&#`.
///
/// Returns `None` when no digits follow (absence of digits): the caller keeps
/// `&#` (and any `x`) as literal text.
pub fn parse_numeric(input: &str) -> Option<NumericMatch> {
    let bytes = input.as_bytes();
    let (mut run, prefix) = match bytes.first() {
        Some(b'x' | b'X') => (DigitRun::new(true), 1),
        _ => (DigitRun::new(false), 0),
    };

    let mut i = prefix + run.push(&bytes[prefix..]);
    if !run.has_digits() {
        return None;
    }

    let missing_semicolon = bytes.get(i) != Some(&b';');
    if !missing_semicolon {
        i += 1;
    }

    let (value, error) = run.resolve();
    Some(NumericMatch {
        consumed_length: i,
        value,
        missing_semicolon,
        error,
    })
}

/// Saturating accumulator for the digits of one numeric reference.
///
/// Holds a fixed amount of state however long the digit run is, so a run
/// split across chunks can be resumed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct DigitRun {
    radix: u32,
    value: u32,
    digits: usize,
}

impl DigitRun {
    pub(crate) fn new(hex: bool) -> Self {
        Self {
            radix: if hex { 16 } else { 10 },
            value: 0,
            digits: 0,
        }
    }

    /// Accumulate the leading digits of `bytes`; returns how many were taken.
    pub(crate) fn push(&mut self, bytes: &[u8]) -> usize {
        let mut taken = 0;
        while let Some(digit) = bytes
            .get(taken)
            .and_then(|&b| (b as char).to_digit(self.radix))
        {
            self.value = self
                .value
                .saturating_mul(self.radix)
                .saturating_add(digit)
                .min(SATURATED);
            taken += 1;
        }
        self.digits += taken;
        taken
    }

    pub(crate) fn has_digits(&self) -> bool {
        self.digits > 0
    }

    pub(crate) fn resolve(&self) -> (char, Option<CharRefErrorCode>) {
        resolve_value(self.value)
    }
}

fn resolve_value(value: u32) -> (char, Option<CharRefErrorCode>) {
    if value == 0 {
        return ('\u{FFFD}', Some(CharRefErrorCode::NullCharacterReference));
    }
    if value > 0x10_FFFF {
        return ('\u{FFFD}', Some(CharRefErrorCode::OutsideUnicodeRange));
    }
    let Some(ch) = char::from_u32(value) else {
        return ('\u{FFFD}', Some(CharRefErrorCode::SurrogateCharacterReference));
    };
    if is_noncharacter(value) {
        return (ch, Some(CharRefErrorCode::NoncharacterCharacterReference));
    }
    if value == 0x0D || (is_control(value) && !is_ascii_whitespace(value)) {
        let replaced = C1_REPLACEMENTS
            .iter()
            .find(|(from, _)| *from == value)
            .map_or(ch, |&(_, to)| to);
        return (replaced, Some(CharRefErrorCode::ControlCharacterReference));
    }
    (ch, None)
}

fn is_noncharacter(value: u32) -> bool {
    (0xFDD0..=0xFDEF).contains(&value) || (value & 0xFFFE) == 0xFFFE
}

fn is_control(value: u32) -> bool {
    value <= 0x1F || (0x7F..=0x9F).contains(&value)
}

fn is_ascii_whitespace(value: u32) -> bool {
    matches!(value, 0x09 | 0x0A | 0x0C | 0x0D | 0x20)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> NumericMatch {
        parse_numeric(input).unwrap_or_else(|| panic!("expected digits in {input:?}"))
    }

    #[test]
    fn decimal_and_hex_references() {
        let dec = parse("65;");
        assert_eq!(dec.value, 'A');
        assert_eq!(dec.consumed_length, 3);
        assert!(!dec.missing_semicolon);
        assert_eq!(dec.error, None);

        let hex = parse("x1F4A9;");
        assert_eq!(hex.value, '\u{1F4A9}');
        assert_eq!(hex.consumed_length, 7);

        let upper = parse("XaB;");
        assert_eq!(upper.value, '\u{00AB}');
    }

    #[test]
    fn missing_semicolon_is_reported_but_decodes() {
        let m = parse("38 tail");
        assert_eq!(m.value, '&');
        assert_eq!(m.consumed_length, 2);
        assert!(m.missing_semicolon);
    }

    #[test]
    fn absence_of_digits_returns_none() {
        assert_eq!(parse_numeric(""), None);
        assert_eq!(parse_numeric(";"), None);
        assert_eq!(parse_numeric("x;"), None);
        assert_eq!(parse_numeric("xg"), None);
    }

    #[test]
    fn out_of_range_and_null_become_replacement_character() {
        let null = parse("0;");
        assert_eq!(null.value, '\u{FFFD}');
        assert_eq!(null.error, Some(CharRefErrorCode::NullCharacterReference));

        let big = parse("x110000;");
        assert_eq!(big.value, '\u{FFFD}');
        assert_eq!(big.error, Some(CharRefErrorCode::OutsideUnicodeRange));

        let huge = parse("99999999999999999999999;");
        assert_eq!(huge.value, '\u{FFFD}');
        assert_eq!(huge.consumed_length, 24);
    }

    #[test]
    fn surrogates_are_replaced() {
        let m = parse("xD800;");
        assert_eq!(m.value, '\u{FFFD}');
        assert_eq!(m.error, Some(CharRefErrorCode::SurrogateCharacterReference));
    }

    #[test]
    fn noncharacters_are_kept_with_error() {
        let m = parse("xFFFF;");
        assert_eq!(m.value, '\u{FFFF}');
        assert_eq!(m.error, Some(CharRefErrorCode::NoncharacterCharacterReference));
    }

    #[test]
    fn c1_controls_are_remapped() {
        let euro = parse("x80;");
        assert_eq!(euro.value, '\u{20AC}');
        assert_eq!(euro.error, Some(CharRefErrorCode::ControlCharacterReference));

        // No table entry: kept as-is.
        let unmapped = parse("x81;");
        assert_eq!(unmapped.value, '\u{0081}');
        assert_eq!(unmapped.error, Some(CharRefErrorCode::ControlCharacterReference));
    }

    #[test]
    fn carriage_return_is_a_control_error_but_tab_is_not() {
        let cr = parse("13;");
        assert_eq!(cr.value, '\r');
        assert_eq!(cr.error, Some(CharRefErrorCode::ControlCharacterReference));
        assert_eq!(parse("9;").error, None);
    }

    #[test]
    fn digit_run_resumes_across_slices() {
        let mut run = DigitRun::new(false);
        assert_eq!(run.push(b"0000"), 4);
        assert!(run.has_digits());
        assert_eq!(run.push(b"0006"), 4);
        assert_eq!(run.push(b"5;"), 1);
        assert_eq!(run.resolve(), ('A', None));

        let mut hex = DigitRun::new(true);
        for _ in 0..64 {
            assert_eq!(hex.push(b"f"), 1);
        }
        assert_eq!(
            hex.resolve(),
            ('\u{FFFD}', Some(CharRefErrorCode::OutsideUnicodeRange))
        );
        assert_eq!(DigitRun::new(true).push(b"g"), 0);
    }
}
