use crate::error::{Error, Result};
use regex::{Regex, RegexBuilder};
use tracing::trace;

/// Finds example sentences containing a word.
///
/// Matching is whole-word and case-insensitive.
#[derive(Debug, Clone)]
pub struct SentenceSampler {
    word: String,
    pattern: Regex,
}

impl SentenceSampler {
    /// Creates a sampler for `word`.
    ///
    /// # Errors
    ///
    /// Returns an error if the word pattern exceeds the regex size limit.
    pub fn new(word: &str) -> Result<Self> {
        let pattern = RegexBuilder::new(&format!(r"\b{}\b", regex::escape(word)))
            .case_insensitive(true)
            .build()
            .map_err(|e| Error::config(format!("Cannot search for word '{word}': {e}")))?;

        Ok(Self {
            word: word.to_string(),
            pattern,
        })
    }

    /// Returns true if `sentence` contains the word.
    #[must_use]
    pub fn matches(&self, sentence: &str) -> bool {
        self.pattern.is_match(sentence)
    }

    /// Collects the first `limit` sentences containing the word, in order.
    ///
    /// Scanning stops as soon as `limit` matches are found.
    #[must_use]
    pub fn sample<'a>(&self, sentences: &[&'a str], limit: usize) -> Vec<&'a str> {
        let found: Vec<&'a str> = sentences
            .iter()
            .copied()
            .filter(|sentence| self.matches(sentence))
            .take(limit)
            .collect();

        trace!("Sampled {} sentences for '{}'", found.len(), self.word);
        found
    }
}
