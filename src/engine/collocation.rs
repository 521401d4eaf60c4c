//! Collocation queries: frequent words on one side of a base word.

use super::word_stats::{Tally, WordStatistics};

impl WordStatistics {
    /// The words strictly before (`precede = true`) or strictly after the
    /// first occurrence of `base_word`.
    ///
    /// Only the first occurrence marks the boundary. When `base_word` never
    /// appears, the preceding window is the whole input and the following
    /// window is empty.
    pub fn collocation_window(&self, base_word: &str, precede: bool) -> &[String] {
        let words = self.word_list();
        let first = words.iter().position(|w| w == base_word);
        log::trace!(
            "collocation window for {base_word:?} (precede={precede}): first occurrence {first:?}"
        );
        match (first, precede) {
            (Some(at), true) => &words[..at],
            (Some(at), false) => &words[at + 1..],
            (None, true) => words,
            (None, false) => &[],
        }
    }

    /// The `k` most frequent words in the collocation window of
    /// `base_word`, most frequent first, ties in order of first appearance
    /// within the window. Frequencies are counted over the window only.
    pub fn most_common_collocations(&self, k: usize, base_word: &str, precede: bool) -> Vec<String> {
        let window = self.collocation_window(base_word, precede);
        if window.is_empty() || k == 0 {
            return Vec::new();
        }
        Tally::build(window, self.base_capacity).most_common(k)
    }
}
