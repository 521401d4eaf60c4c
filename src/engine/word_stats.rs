//! Word frequency and ranking engine.
//!
//! Built once from a [`Tokenizer`]; every query afterwards is a read of
//! tables materialized during construction:
//!
//! - `counts`: word -> index of its first appearance, with the entry's
//!   occurrence counter holding the word's frequency.
//! - `distinct`: one [`WordFrequency`] per word in first-appearance order.
//! - `ascending` / `descending`: stable frequency orderings of `distinct`,
//!   so ties always fall back to first appearance.
//! - `ranks`: word -> competition rank (1, 2, 2, 4).

use std::cmp::Reverse;
use std::path::Path;

use serde::Serialize;

use crate::engine::tokenizer::Tokenizer;
use crate::index::{Entry, HashMap};
use crate::types::{WordStatConfig, WordStatError, WsResult, DEFAULT_CAPACITY};

/// A distinct word with its number of occurrences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordFrequency {
    pub word: String,
    pub count: usize,
}

/// Frequency, rank and collocation statistics over a fixed text.
#[derive(Debug, Clone)]
pub struct WordStatistics {
    tokenizer: Tokenizer,
    counts: HashMap<usize>,
    distinct: Vec<WordFrequency>,
    ascending: Vec<usize>,
    descending: Vec<usize>,
    ranks: HashMap<usize>,
    pub(crate) base_capacity: usize,
}

impl WordStatistics {
    /// Statistics over a text file.
    pub fn from_file(path: impl AsRef<Path>) -> WsResult<Self> {
        let tokenizer = Tokenizer::from_file(path)?;
        Ok(Self::from_tokenizer(tokenizer, DEFAULT_CAPACITY))
    }

    /// Like [`WordStatistics::from_file`], using `config` for tokenizing and table sizing.
    pub fn from_file_with_config(
        path: impl AsRef<Path>,
        config: &WordStatConfig,
    ) -> WsResult<Self> {
        let capacity = config.table.capacity()?;
        let tokenizer = Tokenizer::from_file_with_config(path, &config.tokenizer)?;
        Ok(Self::from_tokenizer(tokenizer, capacity))
    }

    /// Statistics over an ordered collection of strings.
    pub fn from_strings<I, S>(strings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_tokenizer(Tokenizer::from_strings(strings), DEFAULT_CAPACITY)
    }

    /// Like [`WordStatistics::from_strings`], using `config` for tokenizing and table sizing.
    pub fn from_strings_with_config<I, S>(strings: I, config: &WordStatConfig) -> WsResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let capacity = config.table.capacity()?;
        let tokenizer = Tokenizer::from_strings_with_config(strings, &config.tokenizer);
        Ok(Self::from_tokenizer(tokenizer, capacity))
    }

    /// Build every table from an existing tokenizer. `base_capacity` is
    /// the minimum bucket count of the internal maps.
    pub fn from_tokenizer(tokenizer: Tokenizer, base_capacity: usize) -> Self {
        let tally = Tally::build(tokenizer.word_list(), base_capacity);

        let mut ranks = HashMap::with_capacity(table_capacity(base_capacity, tally.distinct.len()));
        let mut rank = 0;
        let mut previous = None;
        for (position, &index) in tally.descending.iter().enumerate() {
            let entry = &tally.distinct[index];
            if previous != Some(entry.count) {
                rank = position + 1;
                previous = Some(entry.count);
            }
            ranks.put(&entry.word, rank);
        }

        let stats = Self {
            tokenizer,
            counts: tally.counts,
            distinct: tally.distinct,
            ascending: tally.ascending,
            descending: tally.descending,
            ranks,
            base_capacity,
        };
        log::info!(
            "word statistics built: {} words, {} distinct, top word {:?}",
            stats.total_words(),
            stats.distinct_words(),
            stats.descending.first().map(|&i| &stats.distinct[i].word)
        );
        stats
    }

    /// Occurrences of `word` in the input, or 0 if it never appeared.
    pub fn word_count(&self, word: &str) -> usize {
        // Absence is a legitimate answer here, not an error.
        self.counts.get_entry(word).map_or(0, Entry::occurrences)
    }

    /// Competition rank of `word` by frequency, 1 being the most frequent.
    pub fn word_rank(&self, word: &str) -> WsResult<usize> {
        self.ranks.get(word).copied()
    }

    /// The `k` most frequent distinct words, most frequent first. Ties keep
    /// first-appearance order. `k` is clamped to the number of distinct
    /// words.
    pub fn most_common_words(&self, k: usize) -> Vec<String> {
        self.take_words(&self.descending, k)
    }

    /// The `k` least frequent distinct words, least frequent first. Ties
    /// keep first-appearance order.
    pub fn least_common_words(&self, k: usize) -> Vec<String> {
        self.take_words(&self.ascending, k)
    }

    /// Validate a signed `k` from untrusted input.
    pub fn checked_k(k: i64) -> WsResult<usize> {
        usize::try_from(k)
            .map_err(|_| WordStatError::InvalidArgument(format!("k must be non-negative, got {k}")))
    }

    /// Number of words in the input, duplicates included.
    pub fn total_words(&self) -> usize {
        self.tokenizer.len()
    }

    /// Number of distinct words.
    pub fn distinct_words(&self) -> usize {
        self.distinct.len()
    }

    /// The normalized input, in order.
    pub fn word_list(&self) -> &[String] {
        self.tokenizer.word_list()
    }

    /// Every distinct word with its count, most frequent first.
    pub fn frequencies(&self) -> Vec<WordFrequency> {
        self.descending
            .iter()
            .map(|&i| self.distinct[i].clone())
            .collect()
    }

    pub(crate) fn take_frequencies(&self, order: Order, k: usize) -> Vec<WordFrequency> {
        let indices = match order {
            Order::Descending => &self.descending,
            Order::Ascending => &self.ascending,
        };
        indices
            .iter()
            .take(k)
            .map(|&i| self.distinct[i].clone())
            .collect()
    }

    fn take_words(&self, indices: &[usize], k: usize) -> Vec<String> {
        indices
            .iter()
            .take(k)
            .map(|&i| self.distinct[i].word.clone())
            .collect()
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) enum Order {
    Descending,
    Ascending,
}

/// Bucket count that keeps `entries` puts below a load factor of 1.0, so
/// occurrence counters are never reset by a rehash mid-count.
pub(crate) fn table_capacity(base: usize, entries: usize) -> usize {
    base.max(entries + 1)
}

/// Frequency tables over one run of words.
pub(crate) struct Tally {
    pub(crate) counts: HashMap<usize>,
    pub(crate) distinct: Vec<WordFrequency>,
    pub(crate) ascending: Vec<usize>,
    pub(crate) descending: Vec<usize>,
}

impl Tally {
    pub(crate) fn build(words: &[String], base_capacity: usize) -> Self {
        let mut counts = HashMap::with_capacity(table_capacity(base_capacity, words.len()));
        for (position, word) in words.iter().enumerate() {
            counts.put(word, position);
        }

        // A word's stored value is the position of its first appearance.
        let distinct: Vec<WordFrequency> = words
            .iter()
            .enumerate()
            .filter_map(|(position, word)| {
                let entry = counts.get_entry(word).ok()?;
                (*entry.value() == position).then(|| WordFrequency {
                    word: word.clone(),
                    count: entry.occurrences(),
                })
            })
            .collect();

        let mut ascending: Vec<usize> = (0..distinct.len()).collect();
        ascending.sort_by_key(|&i| distinct[i].count);
        let mut descending: Vec<usize> = (0..distinct.len()).collect();
        descending.sort_by_key(|&i| Reverse(distinct[i].count));

        Self {
            counts,
            distinct,
            ascending,
            descending,
        }
    }

    pub(crate) fn most_common(&self, k: usize) -> Vec<String> {
        self.descending
            .iter()
            .take(k)
            .map(|&i| self.distinct[i].word.clone())
            .collect()
    }
}
