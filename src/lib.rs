//! Word frequency, ranking and collocation statistics over plain text.
//!
//! Text flows one way: raw characters go through the [`Tokenizer`] into an
//! ordered list of lowercase words, and [`WordStatistics`] counts and ranks
//! that list using the chained [`HashMap`].
//!
//! ```
//! use wordstat::WordStatistics;
//!
//! let stats = WordStatistics::from_strings(["the cat saw the dog"]);
//! assert_eq!(stats.word_count("the"), 2);
//! assert_eq!(stats.word_rank("the").unwrap(), 1);
//! assert_eq!(stats.most_common_collocations(1, "saw", false), vec!["the"]);
//! ```

pub mod engine;
pub mod index;
pub mod types;

pub use engine::{StatsSummary, Tokenizer, WordFrequency, WordStatistics};
pub use index::{Entry, HashMap};
pub use types::{TableConfig, TokenizerConfig, WordStatConfig, WordStatError, WsResult};
