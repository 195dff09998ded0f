//! # interesting-words
//!
//! Summarizes a directory of plain-text documents into a spreadsheet of
//! their most frequent words, each with a few example sentences.
//!
//! ## Quick Start
//!
//! ```no_run
//! use interesting_words::{Config, Pipeline};
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = Config::builder()
//!     .input_dir("./test_docs")
//!     .stopwords_path("./stopwords.txt")
//!     .output_file("InterestingWords")
//!     .build()?;
//!
//! Pipeline::new(config)?.run()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! The library follows a linear pipeline:
//! 1. **Stopwords**: Loads the newline-delimited exclusion list
//! 2. **Scanner**: Lists and reads every `*.txt` file in the input directory
//! 3. **Analysis**: Tokenizes, counts, and picks the top words per document
//! 4. **Sampler**: Finds the first example sentences for each top word
//! 5. **Writer**: Saves the report as a single-sheet `.xlsx` table

#![warn(
    missing_docs,
    rust_2018_idioms,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery
)]
#![allow(clippy::module_name_repetitions)]

mod config;
mod document;
mod error;
mod frequency;
mod pipeline;
mod report;
mod sampler;
mod scanner;
mod stopwords;
mod token;
mod writer;

pub use config::{with_xlsx_extension, Config, ConfigBuilder};
pub use document::Document;
pub use error::{Error, Result};
pub use frequency::{FrequencyDistribution, WordFrequency};
pub use pipeline::{Pipeline, PipelineStats};
pub use report::{rows_for_document, Report, ReportRow, SENTENCE_SEPARATOR};
pub use sampler::SentenceSampler;
pub use stopwords::StopwordSet;
pub use token::{split_sentences, tokenize};
pub use writer::{HEADERS, MAX_CELL_CHARS, WORKSHEET_NAME};

/// Runs the complete analysis pipeline with the given configuration.
///
/// This is the main entry point for the library.
///
/// # Errors
///
/// Returns an error if:
/// - Configuration is invalid
/// - The stopword file is missing or empty
/// - The input directory is missing or holds no matching files
/// - A document cannot be read
/// - The spreadsheet cannot be written
///
/// # Examples
///
/// ```no_run
/// use interesting_words::{Config, run};
///
/// # fn main() -> anyhow::Result<()> {
/// let stats = run(Config::builder().build()?)?;
/// println!("{} rows written", stats.rows);
/// # Ok(())
/// # }
/// ```
pub fn run(config: Config) -> Result<PipelineStats> {
    Pipeline::new(config)?.run()
}
