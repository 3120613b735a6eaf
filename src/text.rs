use std::fmt;
use std::ops::Range;

/// Ordinal used by the suffix sorter when looking at a single position.
pub type Symbol = u32;

/// The out-of-band terminator read one past the last character.
///
/// Characters map to `c as Symbol + 1`, so the sentinel sorts below every
/// `char`, `'\0'` included, and never collides with real input.
pub const SENTINEL: Symbol = 0;

/// An immutable sequence of decoded characters with an implicit trailing
/// sentinel.
///
/// Offsets are `char` positions, not byte offsets into the source string.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Text {
    chars: Box<[char]>,
}

impl Text {
    pub fn new(src: &str) -> Self {
        Text {
            chars: src.chars().collect(),
        }
    }

    pub fn from_chars<S>(src: S) -> Self
    where
        S: Into<Box<[char]>>,
    {
        Text { chars: src.into() }
    }

    /// Number of characters, not counting the sentinel.
    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Returns the symbol at `pos`, which is the sentinel for `pos == len`.
    ///
    /// # Panics
    ///
    /// Panics if `pos > self.len()`.
    #[inline]
    pub fn symbol(&self, pos: usize) -> Symbol {
        if pos == self.chars.len() {
            SENTINEL
        } else {
            self.chars[pos] as Symbol + 1
        }
    }

    /// Returns the suffix starting at `pos`. `pos == len` yields the empty
    /// suffix, i.e. the one made of the sentinel alone.
    #[inline]
    pub fn suffix(&self, pos: usize) -> &[char] {
        &self.chars[pos..]
    }

    #[inline]
    pub fn slice(&self, range: Range<usize>) -> &[char] {
        &self.chars[range]
    }

    /// Length of the common prefix of the suffixes starting at `i` and `j`.
    pub fn common_prefix(&self, i: usize, j: usize) -> usize {
        self.suffix(i)
            .iter()
            .zip(self.suffix(j))
            .take_while(|(l, r)| l == r)
            .count()
    }
}

impl From<&str> for Text {
    fn from(value: &str) -> Self {
        Text::new(value)
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chars.iter().try_for_each(|c| write!(f, "{}", c))
    }
}

impl fmt::Debug for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Text({:?})", self.to_string())
    }
}
