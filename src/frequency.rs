use std::collections::HashMap;

/// A word and its number of occurrences within one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordFrequency {
    /// Lowercase token
    pub word: String,

    /// Occurrences after stopword removal (always >= 1)
    pub count: usize,
}

impl WordFrequency {
    /// Creates a new word frequency pair.
    #[must_use]
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

/// Frequency distribution over a token sequence.
///
/// Remembers the order in which each distinct token first appeared so that
/// ties between equal counts resolve deterministically.
#[derive(Debug, Default, Clone)]
pub struct FrequencyDistribution {
    counts: HashMap<String, usize>,
    order: Vec<String>,
}

impl FrequencyDistribution {
    /// Counts every token in the sequence.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dist = Self::default();
        for token in tokens {
            dist.add(token.as_ref());
        }
        dist
    }

    /// Records one occurrence of `token`.
    pub fn add(&mut self, token: &str) {
        if let Some(count) = self.counts.get_mut(token) {
            *count += 1;
        } else {
            self.counts.insert(token.to_string(), 1);
            self.order.push(token.to_string());
        }
    }

    /// Returns the count for `token`, or zero if it never appeared.
    #[must_use]
    pub fn get(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Total number of tokens counted.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Number of distinct tokens.
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.order.len()
    }

    /// Returns up to `n` most frequent tokens, highest count first.
    ///
    /// Equal counts keep first-appearance order.
    #[must_use]
    pub fn most_common(&self, n: usize) -> Vec<WordFrequency> {
        let mut ranked: Vec<WordFrequency> = self
            .order
            .iter()
            .map(|word| WordFrequency::new(word.clone(), self.counts[word]))
            .collect();

        // stable sort preserves first-appearance order within a count
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked.truncate(n);
        ranked
    }
}
