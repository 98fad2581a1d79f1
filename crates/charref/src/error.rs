//! Character reference parse errors.
//!
//! These are tokenizer diagnostics, not failures: decoding always produces
//! output, and errors are reported alongside it.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharRefErrorCode {
    MissingSemicolon,
    UnknownNamedReference,
    AbsenceOfDigits,
    NullCharacterReference,
    OutsideUnicodeRange,
    SurrogateCharacterReference,
    NoncharacterCharacterReference,
    ControlCharacterReference,
}

impl CharRefErrorCode {
    /// The WHATWG parse error name.
    pub fn as_str(self) -> &'static str {
        match self {
            CharRefErrorCode::MissingSemicolon => "missing-semicolon-after-character-reference",
            CharRefErrorCode::UnknownNamedReference => "unknown-named-character-reference",
            CharRefErrorCode::AbsenceOfDigits => "absence-of-digits-in-numeric-character-reference",
            CharRefErrorCode::NullCharacterReference => "null-character-reference",
            CharRefErrorCode::OutsideUnicodeRange => "character-reference-outside-unicode-range",
            CharRefErrorCode::SurrogateCharacterReference => "surrogate-character-reference",
            CharRefErrorCode::NoncharacterCharacterReference => "noncharacter-character-reference",
            CharRefErrorCode::ControlCharacterReference => "control-character-reference",
        }
    }
}

impl std::fmt::Display for CharRefErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharRefError {
    pub code: CharRefErrorCode,
    /// Byte offset of the `&` that started the reference.
    pub position: usize,
}

impl std::fmt::Display for CharRefError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at byte {}", self.code, self.position)
    }
}
