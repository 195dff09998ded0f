use crate::error::{Error, Result};
use globset::Glob;
use std::path::PathBuf;

const DEFAULT_INPUT_DIR: &str = "test_docs";
const DEFAULT_FILE_PATTERN: &str = "*.txt";
const DEFAULT_STOPWORDS_PATH: &str = "stopwords.txt";
const DEFAULT_OUTPUT_FILE: &str = "InterestingWords.xlsx";
const DEFAULT_TOP_WORDS: usize = 5;
const DEFAULT_SENTENCES_PER_WORD: usize = 3;
const XLSX_EXTENSION: &str = ".xlsx";

/// Configuration for the interesting-words pipeline.
///
/// Use [`Config::builder()`] to construct a new configuration.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Config {
    /// Directory holding the documents to analyze
    pub input_dir: PathBuf,

    /// Glob matched against file names inside `input_dir`
    pub file_pattern: String,

    /// Newline-delimited stopword list
    pub stopwords_path: PathBuf,

    /// Workbook to write, always ending in `.xlsx`
    pub output_file: PathBuf,

    /// Number of most frequent words reported per document
    pub top_words: usize,

    /// Maximum number of example sentences per word
    pub sentences_per_word: usize,

    /// Copy an existing report aside before replacing it
    pub backup_existing: bool,

    /// Dry run mode (no file writes)
    pub dry_run: bool,
}

impl Config {
    /// Creates a new configuration builder.
    ///
    /// # Examples
    ///
    /// ```
    /// use interesting_words::Config;
    ///
    /// let config = Config::builder()
    ///     .input_dir("./corpus")
    ///     .output_file("Summary")
    ///     .build()
    ///     .expect("valid configuration");
    ///
    /// assert!(config.output_file.ends_with("Summary.xlsx"));
    /// ```
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Validates the configuration.
    ///
    /// Existence of the input directory and stopword file is checked by the
    /// pipeline stage that reads them.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `top_words` or `sentences_per_word` is zero
    /// - The file pattern is not a valid glob
    /// - The output file name is empty
    pub fn validate(&self) -> Result<()> {
        if self.top_words == 0 {
            return Err(Error::config("top_words must be greater than 0"));
        }

        if self.sentences_per_word == 0 {
            return Err(Error::config("sentences_per_word must be greater than 0"));
        }

        Glob::new(&self.file_pattern).map_err(|e| {
            Error::config(format!("Invalid file pattern '{}': {}", self.file_pattern, e))
        })?;

        let stem = self
            .output_file
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();
        if stem.is_empty() || stem.eq_ignore_ascii_case(XLSX_EXTENSION) {
            return Err(Error::config(format!(
                "Output file name is empty: '{}'",
                self.output_file.display()
            )));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            file_pattern: DEFAULT_FILE_PATTERN.to_string(),
            stopwords_path: PathBuf::from(DEFAULT_STOPWORDS_PATH),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            top_words: DEFAULT_TOP_WORDS,
            sentences_per_word: DEFAULT_SENTENCES_PER_WORD,
            backup_existing: false,
            dry_run: false,
        }
    }
}

/// Appends `.xlsx` to `path` unless it already ends with it (ignoring case).
#[must_use]
pub fn with_xlsx_extension(path: impl Into<PathBuf>) -> PathBuf {
    let path = path.into();
    let has_extension = path
        .to_string_lossy()
        .to_lowercase()
        .ends_with(XLSX_EXTENSION);

    if has_extension {
        path
    } else {
        let mut raw = path.into_os_string();
        raw.push(XLSX_EXTENSION);
        PathBuf::from(raw)
    }
}

/// Builder for creating a [`Config`].
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    input_dir: Option<PathBuf>,
    file_pattern: Option<String>,
    stopwords_path: Option<PathBuf>,
    output_file: Option<PathBuf>,
    top_words: Option<usize>,
    sentences_per_word: Option<usize>,
    backup_existing: bool,
    dry_run: bool,
}

impl ConfigBuilder {
    /// Sets the directory holding the documents.
    #[must_use]
    pub fn input_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_dir = Some(path.into());
        self
    }

    /// Sets the file-name glob for documents (default `*.txt`).
    #[must_use]
    pub fn file_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.file_pattern = Some(pattern.into());
        self
    }

    /// Sets the stopword file.
    #[must_use]
    pub fn stopwords_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.stopwords_path = Some(path.into());
        self
    }

    /// Sets the output workbook. `.xlsx` is appended if missing.
    #[must_use]
    pub fn output_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_file = Some(path.into());
        self
    }

    /// Sets how many words are reported per document.
    #[must_use]
    pub fn top_words(mut self, count: usize) -> Self {
        self.top_words = Some(count);
        self
    }

    /// Sets the maximum number of example sentences per word.
    #[must_use]
    pub fn sentences_per_word(mut self, count: usize) -> Self {
        self.sentences_per_word = Some(count);
        self
    }

    /// Enables or disables backup of an existing report.
    #[must_use]
    pub fn backup_existing(mut self, enabled: bool) -> Self {
        self.backup_existing = enabled;
        self
    }

    /// Enables dry run mode (no file writes).
    #[must_use]
    pub fn dry_run(mut self, enabled: bool) -> Self {
        self.dry_run = enabled;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails.
    pub fn build(self) -> Result<Config> {
        let config = Config {
            input_dir: self
                .input_dir
                .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_DIR)),
            file_pattern: self
                .file_pattern
                .unwrap_or_else(|| DEFAULT_FILE_PATTERN.to_string()),
            stopwords_path: self
                .stopwords_path
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STOPWORDS_PATH)),
            output_file: with_xlsx_extension(
                self.output_file
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILE)),
            ),
            top_words: self.top_words.unwrap_or(DEFAULT_TOP_WORDS),
            sentences_per_word: self
                .sentences_per_word
                .unwrap_or(DEFAULT_SENTENCES_PER_WORD),
            backup_existing: self.backup_existing,
            dry_run: self.dry_run,
        };

        config.validate()?;
        Ok(config)
    }
}
