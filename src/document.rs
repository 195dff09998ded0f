use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// A text document loaded from the corpus directory.
#[derive(Debug, Clone)]
pub struct Document {
    /// Full path to the file
    pub path: PathBuf,

    /// File name, used to identify the document in the report
    pub name: String,

    /// Raw UTF-8 content
    pub content: String,
}

impl Document {
    /// Creates a document from already loaded content.
    #[must_use]
    pub fn new(path: PathBuf, name: String, content: String) -> Self {
        Self {
            path,
            name,
            content,
        }
    }

    /// Reads a document from disk.
    ///
    /// The file is read fully and closed before this returns.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUtf8`] if the file is not valid UTF-8, or an
    /// IO error if it cannot be read.
    pub fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::read(path, e))?;

        let name = path
            .file_name()
            .map_or_else(|| path.to_string_lossy(), |n| n.to_string_lossy())
            .to_string();

        Ok(Self::new(path.to_path_buf(), name, content))
    }

    /// Returns the size of the content in bytes.
    #[must_use]
    pub fn size_bytes(&self) -> u64 {
        self.content.len() as u64
    }

    /// Returns true if the document has no content.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    #[test]
    fn test_read_document() {
        let temp = assert_fs::TempDir::new().unwrap();
        let file = temp.child("doc1.txt");
        file.write_str("The cat sat.").unwrap();

        let doc = Document::read(file.path()).unwrap();

        assert_eq!(doc.name, "doc1.txt");
        assert_eq!(doc.content, "The cat sat.");
        assert_eq!(doc.size_bytes(), 12);
        assert!(!doc.is_empty());
    }

    #[test]
    fn test_read_missing_document() {
        let temp = assert_fs::TempDir::new().unwrap();
        let err = Document::read(&temp.path().join("missing.txt")).unwrap_err();

        assert!(err.is_io());
        assert!(err.is_not_found());
    }

    #[test]
    fn test_read_invalid_utf8() {
        let temp = assert_fs::TempDir::new().unwrap();
        let file = temp.child("bad.txt");
        file.write_binary(&[0xff, 0xfe, 0xfd]).unwrap();

        let err = Document::read(file.path()).unwrap_err();
        assert!(matches!(err, Error::InvalidUtf8 { .. }));
    }

    #[test]
    fn test_empty_document() {
        let doc = Document::new(PathBuf::from("e.txt"), "e.txt".to_string(), String::new());
        assert!(doc.is_empty());
    }
}
