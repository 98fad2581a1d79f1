//! Entity records and their resolved codepoints.

/// One row of the canonical named character reference table.
///
/// `name` omits the trailing `;`. `codepoints` is raw data; it is validated
/// (count and scalar range) when the trie is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EntityRecord {
    pub name: &'static str,
    pub codepoints: &'static [u32],
    pub semicolon_required: bool,
}

impl EntityRecord {
    pub const fn new(
        name: &'static str,
        codepoints: &'static [u32],
        semicolon_required: bool,
    ) -> Self {
        Self {
            name,
            codepoints,
            semicolon_required,
        }
    }

    /// Legacy references also match without a trailing `;`.
    pub fn is_legacy(&self) -> bool {
        !self.semicolon_required
    }
}

/// One or two Unicode scalar values, stored inline.
///
/// Invariant: `len` is 1 or 2 and slots past `len` hold `'\0'`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Codepoints {
    chars: [char; 2],
    len: u8,
}

impl Codepoints {
    pub const fn one(ch: char) -> Self {
        Self {
            chars: [ch, '\0'],
            len: 1,
        }
    }

    pub const fn two(first: char, second: char) -> Self {
        Self {
            chars: [first, second],
            len: 2,
        }
    }

    /// Placeholder used by non-matching results; never observable through
    /// a `matched: true` result.
    pub(crate) const fn empty() -> Self {
        Self {
            chars: ['\0', '\0'],
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_slice(&self) -> &[char] {
        &self.chars[..self.len as usize]
    }

    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, char>> {
        self.as_slice().iter().copied()
    }

    pub fn push_to(&self, out: &mut String) {
        for ch in self.iter() {
            out.push(ch);
        }
    }

    /// Scalar values as `u32`, matching the table's raw representation.
    pub fn to_u32s(&self) -> ([u32; 2], usize) {
        ([self.chars[0] as u32, self.chars[1] as u32], self.len())
    }
}

impl std::fmt::Debug for Codepoints {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[")?;
        for (i, ch) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "U+{:04X}", ch as u32)?;
        }
        f.write_str("]")
    }
}

impl<'a> IntoIterator for &'a Codepoints {
    type Item = char;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, char>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codepoints_slice_respects_len() {
        let one = Codepoints::one('&');
        assert_eq!(one.as_slice(), &['&']);
        let two = Codepoints::two('\u{2242}', '\u{0338}');
        assert_eq!(two.as_slice(), &['\u{2242}', '\u{0338}']);
        assert!(Codepoints::empty().is_empty());
    }

    #[test]
    fn codepoints_debug_uses_scalar_notation() {
        let two = Codepoints::two('\u{2242}', '\u{0338}');
        assert_eq!(format!("{two:?}"), "[U+2242, U+0338]");
    }

    #[test]
    fn push_to_appends_all_scalars() {
        let mut out = String::from("x");
        Codepoints::two('a', 'b').push_to(&mut out);
        assert_eq!(out, "xab");
    }
}
