use std::cmp::Ordering;
use std::fmt;
use std::time::Instant;

use log::debug;

use crate::sort;
use crate::text::Text;

/// A suffix array is the sequence of suffix start offsets of a text in
/// lexicographic order of the suffixes.
///
/// The text is terminated by an out-of-band sentinel that sorts below every
/// character. The suffix made of the sentinel alone always ranks first and is
/// not stored, so a text of `n` characters has exactly `n` ranked suffixes.
#[derive(Clone, PartialEq, Eq)]
pub struct SuffixArray {
    text: Text,
    table: Box<[usize]>,
}

impl SuffixArray {
    /// Creates a new suffix array for `src` using 3-way string quicksort.
    ///
    /// Expected `O(n log n)` character comparisons, `O(n²)` on highly
    /// repetitive input.
    pub fn new(src: &str) -> Self {
        Self::from_text(Text::new(src))
    }

    pub fn from_chars<S>(src: S) -> Self
    where
        S: Into<Box<[char]>>,
    {
        Self::from_text(Text::from_chars(src))
    }

    pub fn from_text(text: Text) -> Self {
        let start = Instant::now();
        let mut table: Vec<_> = (0..text.len()).collect();
        sort::sort_suffixes(&text, &mut table);
        debug!("sorted {} suffixes in {:?}", table.len(), start.elapsed());

        SuffixArray {
            text,
            table: table.into(),
        }
    }

    /// Creates a suffix array with the standard library comparison sort.
    /// Only useful for checking the quicksort.
    pub fn new_naive(src: &str) -> Self {
        let text = Text::new(src);
        let mut table: Vec<_> = (0..text.len()).collect();
        sort::naive(&text, &mut table);

        SuffixArray {
            text,
            table: table.into(),
        }
    }

    pub fn text(&self) -> &Text {
        &self.text
    }

    pub fn table(&self) -> &[usize] {
        &self.table
    }

    /// Returns the number of suffixes in the table.
    ///
    /// Alternatively, this is the number of *characters* in the text.
    #[inline]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` iff `self.len() == 0`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Checks if the suffix table is lexicographically sorted. This is always
    /// true for valid suffix arrays.
    pub fn is_sorted(&self) -> bool {
        self.table
            .windows(2)
            .all(|pair| self.text.suffix(pair[0]) <= self.text.suffix(pair[1]))
    }

    /// Returns the suffix of rank `i`.
    #[inline]
    pub fn suffix(&self, i: usize) -> &[char] {
        self.text.suffix(self.table[i])
    }

    /// Returns the offset into the original text of the `i`th smallest
    /// suffix.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.len()`.
    #[inline]
    pub fn index(&self, i: usize) -> usize {
        self.table[i]
    }

    /// Returns the length of the longest common prefix of the `i`th smallest
    /// suffix and the `i - 1`st smallest suffix.
    ///
    /// # Panics
    ///
    /// Panics unless `1 <= i < self.len()`.
    pub fn longest_common_prefix(&self, i: usize) -> usize {
        assert!(
            i >= 1 && i < self.len(),
            "rank {} out of range 1..{}",
            i,
            self.len()
        );
        self.text.common_prefix(self.table[i], self.table[i - 1])
    }

    /// Returns the `i`th smallest suffix as a string. Takes time proportional
    /// to the length of the suffix.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.len()`.
    pub fn select(&self, i: usize) -> String {
        self.suffix(i).iter().collect()
    }

    /// Returns the number of suffixes strictly less than `query`.
    ///
    /// This runs in `O(m log n)` time, where `m == query.len()`. If `query` is
    /// itself a suffix, its rank is returned, so `rank(&select(i)) == i`.
    pub fn rank(&self, query: &str) -> usize {
        let query: Vec<char> = query.chars().collect();
        let (mut lo, mut hi) = (0, self.len());
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            match compare(&query, self.suffix(mid)) {
                Ordering::Less => hi = mid,
                Ordering::Greater => lo = mid + 1,
                Ordering::Equal => return mid,
            }
        }
        lo
    }

    /// Returns true if and only if `query` is in text. The empty query is
    /// never found.
    pub fn contains(&self, query: &str) -> bool {
        let query: Vec<char> = query.chars().collect();
        !query.is_empty()
            && self
                .table
                .binary_search_by(|&sufi| {
                    self.text
                        .suffix(sufi)
                        .iter()
                        .take(query.len())
                        .cmp(query.iter())
                })
                .is_ok()
    }

    /// Returns the offsets at which `query` starts in the text, in rank
    /// order of the suffixes.
    ///
    /// Offsets are character positions.
    pub fn positions(&self, query: &str) -> &[usize] {
        let query: Vec<char> = query.chars().collect();
        if query.is_empty() {
            return &[];
        }

        let start = binary_search(&self.table, |&sufi| &query[..] <= self.text.suffix(sufi));
        let end = start
            + binary_search(&self.table[start..], |&sufi| {
                !self.text.suffix(sufi).starts_with(&query)
            });
        &self.table[start..end]
    }
}

/// Compares `query` with `suffix` character by character. The first
/// mismatching pair decides; otherwise the shorter sequence is less.
fn compare(query: &[char], suffix: &[char]) -> Ordering {
    for (q, s) in query.iter().zip(suffix) {
        match q.cmp(s) {
            Ordering::Equal => continue,
            ord => return ord,
        }
    }
    query.len().cmp(&suffix.len())
}

impl fmt::Debug for SuffixArray {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "\n-----------------------------------------")?;
        writeln!(f, "SUFFIX ARRAY")?;
        for (rank, &sufstart) in self.table.iter().enumerate() {
            writeln!(f, "suffix[{}] {}", rank, sufstart)?;
        }
        writeln!(f, "-----------------------------------------")
    }
}

/// Binary search to find first element such that `pred(T) == true`.
///
/// Assumes that if `pred(xs[i]) == true` then `pred(xs[i+1]) == true`.
///
/// If all elements yield `pred(T) == false`, then `xs.len()` is returned.
fn binary_search<T, F>(xs: &[T], mut pred: F) -> usize
where
    F: FnMut(&T) -> bool,
{
    let (mut left, mut right) = (0, xs.len());
    while left < right {
        let mid = (left + right) / 2;
        if pred(&xs[mid]) {
            right = mid;
        } else {
            left = mid + 1;
        }
    }
    left
}
