use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using the library's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the interesting-words library.
#[derive(Error, Debug, Clone)]
#[non_exhaustive]
pub enum Error {
    /// IO error with context about the file path.
    #[error("IO error accessing '{path}': {message}")]
    Io {
        /// Path where the error occurred
        path: PathBuf,
        /// Error message
        message: String,
        /// Kind of the underlying IO error
        kind: std::io::ErrorKind,
    },

    /// Configuration validation error.
    #[error("Invalid configuration: {message}")]
    Config {
        /// Detailed error message
        message: String,
    },

    /// Input path is missing or is not a directory.
    #[error("'{path}' is not a directory.")]
    NotADirectory {
        /// Path that was expected to be a directory
        path: PathBuf,
    },

    /// No documents matched the file pattern.
    #[error("No {pattern} files in '{path}' directory.")]
    NoFiles {
        /// Directory that was scanned
        path: PathBuf,
        /// File-name pattern that was matched against
        pattern: String,
    },

    /// Stopword file contained no entries.
    #[error("Stopword file '{path}' may be missing or empty.")]
    EmptyStopwords {
        /// Path to the stopword file
        path: PathBuf,
    },

    /// Invalid UTF-8 encountered in a document.
    #[error("Invalid UTF-8 encoding in file '{path}'. File may be binary or use unsupported encoding.")]
    InvalidUtf8 {
        /// Path to file with encoding issues
        path: PathBuf,
    },

    /// Workbook could not be built or saved.
    #[error("Failed to write spreadsheet '{path}': {message}")]
    Spreadsheet {
        /// Target workbook path
        path: PathBuf,
        /// Error message
        message: String,
    },
}

impl Error {
    /// Creates an IO error with path context.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
            kind: source.kind(),
        }
    }

    /// Creates an IO error, mapping `InvalidData` to [`Error::InvalidUtf8`].
    #[must_use]
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::InvalidData {
            Self::invalid_utf8(path)
        } else {
            Self::io(path, source)
        }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Creates a not-a-directory error.
    #[must_use]
    pub fn not_a_directory(path: impl Into<PathBuf>) -> Self {
        Self::NotADirectory { path: path.into() }
    }

    /// Creates a no files error.
    #[must_use]
    pub fn no_files(path: impl Into<PathBuf>, pattern: impl Into<String>) -> Self {
        Self::NoFiles {
            path: path.into(),
            pattern: pattern.into(),
        }
    }

    /// Creates an empty stopword list error.
    #[must_use]
    pub fn empty_stopwords(path: impl Into<PathBuf>) -> Self {
        Self::EmptyStopwords { path: path.into() }
    }

    /// Creates an invalid UTF-8 error.
    #[must_use]
    pub fn invalid_utf8(path: impl Into<PathBuf>) -> Self {
        Self::InvalidUtf8 { path: path.into() }
    }

    /// Creates a spreadsheet error.
    #[must_use]
    pub fn spreadsheet(path: impl Into<PathBuf>, source: rust_xlsxwriter::XlsxError) -> Self {
        Self::Spreadsheet {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Returns true if this is an IO error.
    #[must_use]
    pub const fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Returns true if this is a configuration error.
    #[must_use]
    pub const fn is_config(&self) -> bool {
        matches!(self, Self::Config { .. })
    }

    /// Returns true if an input the run depends on could not be found.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotADirectory { .. } | Self::NoFiles { .. } => true,
            Self::Io { kind, .. } => *kind == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = Error::config("test message");
        assert!(err.is_config());
        assert!(err.to_string().contains("test message"));
    }

    #[test]
    fn test_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = Error::io("/tmp/stopwords.txt", io_err);
        assert!(err.is_io());
        assert!(err.is_not_found());
        assert!(err.to_string().contains("/tmp/stopwords.txt"));
    }

    #[test]
    fn test_read_maps_invalid_data() {
        let io_err = std::io::Error::new(std::io::ErrorKind::InvalidData, "stream did not contain valid UTF-8");
        let err = Error::read("doc.txt", io_err);
        assert!(matches!(err, Error::InvalidUtf8 { .. }));
    }

    #[test]
    fn test_not_found_conditions() {
        assert!(Error::not_a_directory("test_docs").is_not_found());
        assert!(Error::no_files("test_docs", "*.txt").is_not_found());
        assert!(!Error::empty_stopwords("stopwords.txt").is_not_found());

        let denied = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert!(!Error::io("out.xlsx", denied).is_not_found());
    }

    #[test]
    fn test_no_files_message() {
        let err = Error::no_files("test_docs", "*.txt");
        assert_eq!(err.to_string(), "No *.txt files in 'test_docs' directory.");
    }

    #[test]
    fn test_error_clone() {
        let err = Error::empty_stopwords("stopwords.txt");
        let cloned = err.clone();
        assert_eq!(err.to_string(), cloned.to_string());
    }
}
