use crate::{
    config::Config,
    document::Document,
    error::{Error, Result},
};
use globset::{Glob, GlobMatcher};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};
use walkdir::WalkDir;

/// Statistics collected during scanning.
#[derive(Debug, Default, Clone)]
pub(crate) struct ScanStats {
    /// Entries found directly in the input directory
    pub total_entries: usize,

    /// Files matching the pattern
    pub matched_files: usize,

    /// Entries skipped (directories, non-matching or unreadable names)
    pub skipped_entries: usize,
}

/// Lists and loads the documents of a corpus directory.
pub(crate) struct Scanner {
    input_dir: PathBuf,
    pattern: String,
    matcher: GlobMatcher,
}

impl Scanner {
    /// Creates a new scanner from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file pattern is not a valid glob.
    pub(crate) fn new(config: &Config) -> Result<Self> {
        let matcher = Glob::new(&config.file_pattern)
            .map_err(|e| {
                Error::config(format!(
                    "Invalid file pattern '{}': {}",
                    config.file_pattern, e
                ))
            })?
            .compile_matcher();

        Ok(Self {
            input_dir: config.input_dir.clone(),
            pattern: config.file_pattern.clone(),
            matcher,
        })
    }

    /// Returns the paths of all matching files, sorted by file name.
    ///
    /// Only the top level of the input directory is listed.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input path is not a directory
    /// - No file matches the pattern
    pub(crate) fn list(&self) -> Result<Vec<PathBuf>> {
        if !self.input_dir.is_dir() {
            return Err(Error::not_a_directory(&self.input_dir));
        }

        debug!("Listing {} in {}", self.pattern, self.input_dir.display());

        let mut stats = ScanStats::default();
        let mut paths = Vec::new();

        for entry in WalkDir::new(&self.input_dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    stats.total_entries += 1;
                    self.entry_error(e)?;
                    stats.skipped_entries += 1;
                    continue;
                }
            };
            stats.total_entries += 1;

            if entry.file_type().is_file() && self.matcher.is_match(entry.file_name()) {
                trace!("Matched document: {}", entry.path().display());
                stats.matched_files += 1;
                paths.push(entry.into_path());
            } else {
                stats.skipped_entries += 1;
            }
        }

        debug!(
            "Scan complete: {} entries, {} matched, {} skipped",
            stats.total_entries, stats.matched_files, stats.skipped_entries
        );

        if paths.is_empty() {
            return Err(Error::no_files(&self.input_dir, &self.pattern));
        }

        Ok(paths)
    }

    /// Decides whether an unreadable entry aborts the listing.
    ///
    /// Only entries whose name matches the pattern are fatal; anything else
    /// would have been skipped anyway.
    fn entry_error(&self, e: walkdir::Error) -> Result<()> {
        let path = e
            .path()
            .map_or_else(|| self.input_dir.clone(), Path::to_path_buf);

        let matches = path
            .file_name()
            .is_some_and(|name| self.matcher.is_match(name));
        if !matches {
            debug!("Skipping unreadable entry {}: {}", path.display(), e);
            return Ok(());
        }

        Err(match e.into_io_error() {
            Some(io) => Error::io(path, io),
            None => Error::config(format!("Filesystem loop at {}", path.display())),
        })
    }

    /// Lists the corpus and reads every document into memory.
    ///
    /// # Errors
    ///
    /// Returns an error if listing fails or any document cannot be read.
    pub(crate) fn scan(&self) -> Result<Vec<Document>> {
        self.list()?
            .iter()
            .map(|path| Document::read(path))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    fn create_test_config(root: &Path) -> Config {
        Config::builder().input_dir(root).build().unwrap()
    }

    #[test]
    fn test_scanner_finds_text_files() {
        let temp = assert_fs::TempDir::new().unwrap();
        temp.child("b.txt").write_str("Second document.").unwrap();
        temp.child("a.txt").write_str("First document.").unwrap();
        temp.child("notes.md").write_str("Not a text file.").unwrap();

        let scanner = Scanner::new(&create_test_config(temp.path())).unwrap();
        let docs = scanner.scan().unwrap();

        let names: Vec<_> = docs.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
        assert_eq!(docs[0].content, "First document.");
    }

    #[test]
    fn test_scanner_is_not_recursive() {
        let temp = assert_fs::TempDir::new().unwrap();
        temp.child("top.txt").write_str("Top.").unwrap();
        temp.child("nested/deep.txt").write_str("Deep.").unwrap();

        let scanner = Scanner::new(&create_test_config(temp.path())).unwrap();
        let paths = scanner.list().unwrap();

        assert_eq!(paths.len(), 1);
        assert!(paths[0].ends_with("top.txt"));
    }

    #[test]
    fn test_scanner_skips_directories_named_like_documents() {
        let temp = assert_fs::TempDir::new().unwrap();
        temp.child("folder.txt").create_dir_all().unwrap();
        temp.child("real.txt").write_str("Real.").unwrap();

        let scanner = Scanner::new(&create_test_config(temp.path())).unwrap();
        let paths = scanner.list().unwrap();

        assert_eq!(paths.len(), 1);
        assert!(paths[0].ends_with("real.txt"));
    }

    #[test]
    fn test_scanner_empty_directory() {
        let temp = assert_fs::TempDir::new().unwrap();
        temp.child("readme.md").write_str("nothing").unwrap();

        let scanner = Scanner::new(&create_test_config(temp.path())).unwrap();
        let err = scanner.scan().unwrap_err();

        assert!(err.is_not_found());
        assert!(matches!(err, Error::NoFiles { .. }));
    }

    #[test]
    fn test_scanner_missing_directory() {
        let temp = assert_fs::TempDir::new().unwrap();
        let config = create_test_config(&temp.path().join("test_docs"));

        let err = Scanner::new(&config).unwrap().scan().unwrap_err();

        assert!(err.is_not_found());
        assert!(matches!(err, Error::NotADirectory { .. }));
    }

    #[test]
    fn test_scanner_path_is_a_file() {
        let temp = assert_fs::TempDir::new().unwrap();
        let file = temp.child("test_docs");
        file.write_str("not a directory").unwrap();

        let err = Scanner::new(&create_test_config(file.path()))
            .unwrap()
            .list()
            .unwrap_err();

        assert!(matches!(err, Error::NotADirectory { .. }));
    }

    #[test]
    fn test_scanner_custom_pattern() {
        let temp = assert_fs::TempDir::new().unwrap();
        temp.child("a.txt").write_str("A.").unwrap();
        temp.child("b.text").write_str("B.").unwrap();

        let config = Config::builder()
            .input_dir(temp.path())
            .file_pattern("*.text")
            .build()
            .unwrap();
        let paths = Scanner::new(&config).unwrap().list().unwrap();

        assert_eq!(paths.len(), 1);
        assert!(paths[0].ends_with("b.text"));
    }

    #[cfg(unix)]
    #[test]
    fn test_scanner_ignores_broken_link_with_other_name() {
        let temp = assert_fs::TempDir::new().unwrap();
        temp.child("a.txt").write_str("A.").unwrap();
        std::os::unix::fs::symlink("/nonexistent/target", temp.path().join("notes.md")).unwrap();

        let paths = Scanner::new(&create_test_config(temp.path()))
            .unwrap()
            .list()
            .unwrap();

        assert_eq!(paths.len(), 1);
        assert!(paths[0].ends_with("a.txt"));
    }

    #[cfg(unix)]
    #[test]
    fn test_scanner_fails_on_broken_document_link() {
        let temp = assert_fs::TempDir::new().unwrap();
        temp.child("a.txt").write_str("A.").unwrap();
        std::os::unix::fs::symlink("/nonexistent/target", temp.path().join("b.txt")).unwrap();

        let err = Scanner::new(&create_test_config(temp.path()))
            .unwrap()
            .list()
            .unwrap_err();

        assert!(err.is_io());
    }
}
