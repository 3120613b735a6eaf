use std::ops::Range;

use log::trace;

use crate::table::SuffixArray;

impl SuffixArray {
    /// Returns the longest substring that occurs at least twice in the text,
    /// occurrences possibly overlapping.
    ///
    /// Among several repeats of maximal length, the one reached first in rank
    /// order wins. Empty when nothing repeats.
    pub fn longest_repeating_substring(&self) -> String {
        self.text()
            .slice(self.longest_repeat())
            .iter()
            .collect()
    }

    /// Returns the longest substring with two occurrences that do not
    /// overlap.
    ///
    /// Starting from the longest repeat, the candidate is repeatedly cut down
    /// by its own longest repeat, as long as the cut piece is the candidate's
    /// tail and the shortened candidate occurs twice back to back in the text.
    pub fn longest_repeating_non_overlapping_substring(&self) -> String {
        let mut candidate = self.longest_repeat();
        while !candidate.is_empty() {
            let chars = self.text().slice(candidate.clone());
            let inner = SuffixArray::from_chars(chars);
            let repeat = inner.text().slice(inner.longest_repeat());
            if repeat.is_empty() {
                break;
            }

            let (head, tail) = chars.split_at(chars.len() - repeat.len());
            let doubled: String = head.iter().chain(head).collect();
            trace!("candidate {:?}, inner repeat of {}", candidate, repeat.len());
            if tail != repeat || !self.contains(&doubled) {
                break;
            }
            candidate.end -= repeat.len();
        }

        self.text().slice(candidate).iter().collect()
    }

    /// Text range of the longest repeat.
    fn longest_repeat(&self) -> Range<usize> {
        let mut best = 0..0;
        for i in 1..self.len() {
            let length = self.longest_common_prefix(i);
            if length > best.len() {
                let start = self.index(i);
                best = start..start + length;
            }
        }
        best
    }
}
