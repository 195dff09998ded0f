use crate::stopwords::StopwordSet;
use once_cell::sync::Lazy;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

/// Runs of Unicode word characters (letters, digits, underscore).
static WORD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\w+").expect("word pattern is a valid regex"));

/// Splits text into lowercase word tokens, dropping stopwords.
///
/// Tokens keep their source order and duplicates are retained.
#[must_use]
pub fn tokenize(text: &str, stopwords: &StopwordSet) -> Vec<String> {
    WORD_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .filter(|token| !stopwords.contains(token))
        .collect()
}

/// Characters that end a sentence.
const SENTENCE_TERMINATORS: [char; 3] = ['.', '?', '!'];

/// Closing quotes and brackets allowed after a terminator.
const CLOSING_PUNCTUATION: [char; 8] = ['"', '\'', ')', ']', '}', '\u{201d}', '\u{2019}', '\u{bb}'];

/// Splits raw text into sentences on Unicode sentence boundaries.
///
/// A boundary is kept only after a sentence terminator (optionally followed
/// by closing quotes or brackets) or at a blank line, so hard-wrapped lines
/// stay within their sentence. Each sentence is the raw text between two
/// boundaries, trimmed of outer whitespace. Whitespace-only pieces are
/// dropped.
#[must_use]
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for (offset, segment) in text.split_sentence_bound_indices() {
        let end = offset + segment.len();
        let pending = &text[start..end];

        if ends_sentence(pending) || ends_paragraph(pending) {
            push_trimmed(&mut sentences, pending);
            start = end;
        }
    }
    push_trimmed(&mut sentences, &text[start..]);

    sentences
}

fn ends_sentence(span: &str) -> bool {
    span.trim_end()
        .trim_end_matches(CLOSING_PUNCTUATION)
        .ends_with(SENTENCE_TERMINATORS)
}

/// True if the trailing whitespace of `span` holds two or more line breaks.
fn ends_paragraph(span: &str) -> bool {
    let trailing = &span[span.trim_end().len()..];
    let breaks = trailing.matches('\n').count() + trailing.matches('\r').count()
        - trailing.matches("\r\n").count();
    breaks >= 2
}

fn push_trimmed<'a>(sentences: &mut Vec<&'a str>, span: &'a str) {
    let sentence = span.trim();
    if !sentence.is_empty() {
        sentences.push(sentence);
    }
}
