use std::cmp::Ordering;
use std::mem;

use crate::text::{Text, SENTINEL};

/// Ranges spanning at most `CUTOFF + 1` suffixes are insertion sorted.
pub const CUTOFF: usize = 5;

/// Sorts `table`, a list of suffix offsets into `text`, in lexicographic
/// order of the suffixes, using 3-way string quicksort.
///
/// Every offset must be `<= text.len()`.
pub fn sort_suffixes(text: &Text, table: &mut [usize]) {
    quicksort(text, table, 0);
}

/// Reference implementation: a plain comparison sort over suffix slices.
pub fn naive(text: &Text, table: &mut [usize]) {
    table.sort_by(|&l, &r| text.suffix(l).cmp(text.suffix(r)));
}

// All suffixes in `table` share their first `depth` characters, none of
// which is the sentinel.
//
// Only the two smaller partitions are sorted recursively and the largest one
// is handled by the loop, so the stack holds at most log2(n) frames however
// long the shared prefixes get.
fn quicksort(text: &Text, mut table: &mut [usize], mut depth: usize) {
    loop {
        if table.len() <= CUTOFF + 1 {
            insertion(text, table, depth);
            return;
        }

        let pivot = text.symbol(table[0] + depth);
        let (mut lt, mut gt, mut i) = (0, table.len() - 1, 1);
        while i <= gt {
            match text.symbol(table[i] + depth).cmp(&pivot) {
                Ordering::Less => {
                    table.swap(lt, i);
                    lt += 1;
                    i += 1;
                }
                Ordering::Greater => {
                    table.swap(i, gt);
                    gt -= 1;
                }
                Ordering::Equal => i += 1,
            }
        }

        // table[..lt] < pivot == table[lt..=gt] < table[gt + 1..]
        let (less, rest) = mem::take(&mut table).split_at_mut(lt);
        let (equal, greater) = rest.split_at_mut(gt + 1 - lt);
        // A sentinel pivot ends the suffix, nothing is left to compare.
        let equal = if pivot == SENTINEL {
            <&mut [usize]>::default()
        } else {
            equal
        };

        let mut parts = [(less, depth), (equal, depth + 1), (greater, depth)];
        parts.sort_unstable_by_key(|(part, _)| part.len());
        let [(smallest, d0), (middle, d1), (largest, d2)] = parts;
        quicksort(text, smallest, d0);
        quicksort(text, middle, d1);
        table = largest;
        depth = d2;
    }
}

fn insertion(text: &Text, table: &mut [usize], depth: usize) {
    for i in 1..table.len() {
        let mut j = i;
        while j > 0 && less(text, table[j], table[j - 1], depth) {
            table.swap(j, j - 1);
            j -= 1;
        }
    }
}

/// Is `text[i + depth..]` strictly less than `text[j + depth..]`?
fn less(text: &Text, i: usize, j: usize, depth: usize) -> bool {
    i != j && text.suffix(i + depth) < text.suffix(j + depth)
}
