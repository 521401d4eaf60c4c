//! Tokenization and the statistics engine built on top of it.

pub mod collocation;
pub mod summary;
pub mod tokenizer;
pub mod word_stats;

pub use summary::StatsSummary;
pub use tokenizer::Tokenizer;
pub use word_stats::{WordFrequency, WordStatistics};
