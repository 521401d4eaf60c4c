//! TOML configuration for tokenization and table sizing.
//!
//! Every field has a default, so an empty document (or no document at all)
//! yields the standard behaviour: apostrophes and hyphens are elided inside
//! words, array elements are concatenated without a boundary, and tables
//! start with 500 buckets.

use std::path::Path;

use serde::Deserialize;

use super::error::{WordStatError, WsResult};

/// Default bucket count for [`crate::HashMap::new`].
pub const DEFAULT_CAPACITY: usize = 500;

/// Characters that are dropped from the middle of a word without ending it.
pub const DEFAULT_INTRA_WORD: &[char] = &['\'', '-'];

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WordStatConfig {
    pub tokenizer: TokenizerConfig,
    pub table: TableConfig,
}

/// Word normalization settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TokenizerConfig {
    /// Characters skipped inside a word (`isn't` -> `isnt`).
    pub intra_word: Vec<char>,
    /// When true, the end of each string in the array form ends the
    /// current word. When false, strings are joined end to end.
    pub segment_boundary: bool,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            intra_word: DEFAULT_INTRA_WORD.to_vec(),
            segment_boundary: false,
        }
    }
}

impl TokenizerConfig {
    /// Whether `c` is elided inside a word.
    pub fn is_intra_word(&self, c: char) -> bool {
        self.intra_word.contains(&c)
    }
}

/// Hash table sizing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TableConfig {
    /// Signed so that a negative value in the file is reported rather
    /// than rejected by the parser with a less useful message.
    pub default_capacity: i64,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            default_capacity: DEFAULT_CAPACITY as i64,
        }
    }
}

impl TableConfig {
    /// The validated capacity.
    pub fn capacity(&self) -> WsResult<usize> {
        usize::try_from(self.default_capacity).map_err(|_| {
            WordStatError::InvalidArgument(format!(
                "default_capacity must be non-negative, got {}",
                self.default_capacity
            ))
        })
    }
}

impl WordStatConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> WsResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> WsResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Check value ranges that the TOML schema cannot express.
    pub fn validate(&self) -> WsResult<()> {
        for &c in &self.tokenizer.intra_word {
            if c.is_alphabetic() || c.is_whitespace() {
                return Err(WordStatError::InvalidArgument(format!(
                    "intra_word character {c:?} must not be a letter or whitespace"
                )));
            }
        }
        self.table.capacity()?;
        Ok(())
    }
}
