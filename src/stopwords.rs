//! Stopword list loading and lookup.

use crate::error::{Error, Result};
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

/// An immutable set of lowercase words excluded from frequency analysis.
#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// Creates a stopword set from a list of words.
    ///
    /// Words are lowercased.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words.into_iter().map(|w| w.as_ref().to_lowercase()).collect(),
        }
    }

    /// Parses a newline-delimited stopword list.
    ///
    /// Lines end at `\n`, `\r\n`, a lone `\r`, or any other Unicode line
    /// separator, and are otherwise kept as written. An empty line is kept
    /// as the empty word, so only a list with no lines at all is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyStopwords`] if `content` has no lines.
    pub fn parse(content: &str, source: &Path) -> Result<Self> {
        let set = Self::from_words(split_lines(content));
        if set.is_empty() {
            return Err(Error::empty_stopwords(source));
        }

        Ok(set)
    }

    /// Loads a stopword list from disk.
    ///
    /// # Errors
    ///
    /// Returns an IO error if the file is missing or unreadable, and
    /// [`Error::EmptyStopwords`] if it is empty.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::read(path, e))?;
        let set = Self::parse(&content, path)?;

        debug!("Loaded {} stopwords from {}", set.len(), path.display());
        Ok(set)
    }

    /// Returns true if the lowercase `word` is a stopword.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of distinct stopwords.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the set holds no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Characters that end a line, besides `\r\n`.
const LINE_BREAKS: [char; 10] = [
    '\n', '\r', '\u{0b}', '\u{0c}', '\u{1c}', '\u{1d}', '\u{1e}', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Splits `content` into lines without their terminators.
///
/// A trailing terminator does not start an extra empty line.
fn split_lines(content: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = content;

    while !rest.is_empty() {
        let Some(at) = rest.find(LINE_BREAKS) else {
            lines.push(rest);
            break;
        };
        lines.push(&rest[..at]);

        let tail = &rest[at..];
        let width = if tail.starts_with("\r\n") {
            2
        } else {
            tail.chars().next().map_or(1, char::len_utf8)
        };
        rest = &tail[width..];
    }

    lines
}
