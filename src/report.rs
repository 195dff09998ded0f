use crate::{error::Result, frequency::WordFrequency, sampler::SentenceSampler};

/// Separator placed between sentences in the display string.
pub const SENTENCE_SEPARATOR: &str = "\n\n";

/// One (word, document, example sentences) entry of the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    /// Word and its count within the document
    pub frequency: WordFrequency,

    /// File name of the source document
    pub document: String,

    /// Example sentences in document order
    pub sentences: Vec<String>,
}

impl ReportRow {
    /// Creates a new report row.
    #[must_use]
    pub fn new(frequency: WordFrequency, document: impl Into<String>, sentences: Vec<String>) -> Self {
        Self {
            frequency,
            document: document.into(),
            sentences,
        }
    }

    /// Word cell text, `"<word> (<count>)"`.
    #[must_use]
    pub fn word_label(&self) -> String {
        format!("{} ({})", self.frequency.word, self.frequency.count)
    }

    /// Sentences joined with a blank line between them.
    #[must_use]
    pub fn sentences_text(&self) -> String {
        self.sentences.join(SENTENCE_SEPARATOR)
    }
}

/// Builds the rows for one document.
///
/// Produces one row per entry of `top_words`, pairing it with up to
/// `sentences_per_word` sentences that contain the word.
///
/// # Errors
///
/// Returns an error if a word cannot be turned into a search pattern.
pub fn rows_for_document(
    top_words: Vec<WordFrequency>,
    document: &str,
    sentences: &[&str],
    sentences_per_word: usize,
) -> Result<Vec<ReportRow>> {
    top_words
        .into_iter()
        .map(|frequency| -> Result<ReportRow> {
            let sampled = SentenceSampler::new(&frequency.word)?
                .sample(sentences, sentences_per_word)
                .into_iter()
                .map(str::to_string)
                .collect();
            Ok(ReportRow::new(frequency, document, sampled))
        })
        .collect()
}

/// Ordered, append-only collection of report rows.
///
/// Rows of one document stay contiguous in the order they were appended.
#[derive(Debug, Clone, Default)]
pub struct Report {
    rows: Vec<ReportRow>,
}

impl Report {
    /// Creates an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the rows of one document.
    pub fn extend(&mut self, rows: impl IntoIterator<Item = ReportRow>) {
        self.rows.extend(rows);
    }

    /// All rows in order.
    #[must_use]
    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the report has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Total number of sampled sentences across all rows.
    #[must_use]
    pub fn sentence_count(&self) -> usize {
        self.rows.iter().map(|r| r.sentences.len()).sum()
    }
}

impl FromIterator<ReportRow> for Report {
    fn from_iter<I: IntoIterator<Item = ReportRow>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_label() {
        let row = ReportRow::new(WordFrequency::new("cat", 2), "doc1.txt", vec![]);
        assert_eq!(row.word_label(), "cat (2)");
    }

    #[test]
    fn test_sentences_text_blank_line_separator() {
        let row = ReportRow::new(
            WordFrequency::new("cat", 2),
            "doc1.txt",
            vec!["The cat sat.".to_string(), "The cat ran.".to_string()],
        );
        assert_eq!(row.sentences_text(), "The cat sat.\n\nThe cat ran.");
    }

    #[test]
    fn test_sentences_text_empty() {
        let row = ReportRow::new(WordFrequency::new("cat", 1), "doc1.txt", vec![]);
        assert_eq!(row.sentences_text(), "");
    }

    #[test]
    fn test_rows_for_document() {
        let sentences = ["The cat sat.", "The cat ran.", "The dog slept."];
        let top = vec![WordFrequency::new("cat", 2), WordFrequency::new("dog", 1)];

        let rows = rows_for_document(top, "doc1.txt", &sentences, 3).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].document, "doc1.txt");
        assert_eq!(rows[0].sentences, vec!["The cat sat.", "The cat ran."]);
        assert_eq!(rows[1].word_label(), "dog (1)");
        assert_eq!(rows[1].sentences, vec!["The dog slept."]);
    }

    #[test]
    fn test_rows_respect_sentence_limit() {
        let sentences = ["cat a.", "cat b.", "cat c.", "cat d."];
        let rows =
            rows_for_document(vec![WordFrequency::new("cat", 4)], "d.txt", &sentences, 3).unwrap();

        assert_eq!(rows[0].sentences.len(), 3);
    }

    #[test]
    fn test_report_keeps_document_groups_contiguous() {
        let mut report = Report::new();
        report.extend(vec![
            ReportRow::new(WordFrequency::new("cat", 2), "a.txt", vec!["cat.".to_string()]),
            ReportRow::new(WordFrequency::new("dog", 1), "a.txt", vec![]),
        ]);
        report.extend(vec![ReportRow::new(WordFrequency::new("sun", 3), "b.txt", vec![])]);

        let docs: Vec<_> = report.rows().iter().map(|r| r.document.as_str()).collect();
        assert_eq!(docs, vec!["a.txt", "a.txt", "b.txt"]);
        assert_eq!(report.len(), 3);
        assert_eq!(report.sentence_count(), 1);
    }
}
