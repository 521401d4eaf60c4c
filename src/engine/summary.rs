//! Serializable overview of a [`WordStatistics`].

use serde::Serialize;

use super::word_stats::{Order, WordFrequency, WordStatistics};

/// Totals plus the head and tail of the frequency ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsSummary {
    pub total_words: usize,
    pub distinct_words: usize,
    /// Most frequent first.
    pub most_common: Vec<WordFrequency>,
    /// Least frequent first.
    pub least_common: Vec<WordFrequency>,
}

impl WordStatistics {
    /// Summarize with up to `k` words at each end of the ordering.
    pub fn summary(&self, k: usize) -> StatsSummary {
        StatsSummary {
            total_words: self.total_words(),
            distinct_words: self.distinct_words(),
            most_common: self.take_frequencies(Order::Descending, k),
            least_common: self.take_frequencies(Order::Ascending, k),
        }
    }
}
