//! Word normalization: raw characters in, lowercase alphabetic words out.

use std::io::Read;
use std::path::Path;

use crate::types::{TokenizerConfig, WsResult};

/// Ordered list of normalized words produced from one input.
///
/// Letters are lowercased and accumulated; intra-word characters
/// (apostrophe and hyphen by default) are skipped without ending the word;
/// every other character ends the current word. Words are never empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokenizer {
    words: Vec<String>,
}

impl Tokenizer {
    /// Tokenize a single string.
    pub fn from_text(text: &str) -> Self {
        Self::from_strings([text])
    }

    /// Tokenize an ordered collection of strings, joined end to end.
    pub fn from_strings<I, S>(strings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_strings_with_config(strings, &TokenizerConfig::default())
    }

    /// Like [`Tokenizer::from_strings`], with explicit normalization settings.
    pub fn from_strings_with_config<I, S>(strings: I, config: &TokenizerConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut buffer = WordBuffer::new(config);
        let mut segments = 0usize;
        for segment in strings {
            buffer.feed(segment.as_ref());
            if config.segment_boundary {
                buffer.flush();
            }
            segments += 1;
        }
        let tokenizer = buffer.finish();
        log::debug!(
            "tokenized {} string(s) into {} words",
            segments,
            tokenizer.len()
        );
        tokenizer
    }

    /// Read a text file to the end and tokenize it. The file is closed
    /// before this returns.
    pub fn from_file(path: impl AsRef<Path>) -> WsResult<Self> {
        Self::from_file_with_config(path, &TokenizerConfig::default())
    }

    /// Like [`Tokenizer::from_file`], with explicit normalization settings.
    pub fn from_file_with_config(
        path: impl AsRef<Path>,
        config: &TokenizerConfig,
    ) -> WsResult<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let tokenizer = Self::from_reader_with_config(file, config)?;
        log::debug!("tokenized {} into {} words", path.display(), tokenizer.len());
        Ok(tokenizer)
    }

    /// Tokenize everything a reader yields. Invalid UTF-8 is replaced with
    /// U+FFFD, which acts as a word separator.
    pub fn from_reader(reader: impl Read) -> WsResult<Self> {
        Self::from_reader_with_config(reader, &TokenizerConfig::default())
    }

    /// Like [`Tokenizer::from_reader`], with explicit normalization settings.
    pub fn from_reader_with_config(
        mut reader: impl Read,
        config: &TokenizerConfig,
    ) -> WsResult<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        let text = String::from_utf8_lossy(&bytes);
        let mut buffer = WordBuffer::new(config);
        buffer.feed(&text);
        Ok(buffer.finish())
    }

    /// The words in production order, duplicates included.
    pub fn word_list(&self) -> &[String] {
        &self.words
    }

    /// Number of words, duplicates included.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the input held no words at all.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Take ownership of the word list.
    pub fn into_words(self) -> Vec<String> {
        self.words
    }
}

/// Single-pass normalizer state.
struct WordBuffer<'a> {
    config: &'a TokenizerConfig,
    current: String,
    words: Vec<String>,
}

impl<'a> WordBuffer<'a> {
    fn new(config: &'a TokenizerConfig) -> Self {
        Self {
            config,
            current: String::new(),
            words: Vec::new(),
        }
    }

    fn feed(&mut self, text: &str) {
        for c in text.chars() {
            if c.is_alphabetic() {
                // Some letters lowercase to a letter plus a combining mark.
                self.current
                    .extend(c.to_lowercase().filter(|l| l.is_alphabetic()));
            } else if !self.config.is_intra_word(c) {
                self.flush();
            }
        }
    }

    fn flush(&mut self) {
        if !self.current.is_empty() {
            self.words.push(std::mem::take(&mut self.current));
        }
    }

    fn finish(mut self) -> Tokenizer {
        self.flush();
        Tokenizer { words: self.words }
    }
}
