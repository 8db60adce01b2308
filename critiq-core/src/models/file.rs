//! Fetched file types.
//!
//! This module contains the types produced by the repository walk:
//! - [`SourceFile`] - One fetched file (path and content)
//! - [`FileList`] - Ordered collection of fetched files

// ============================================================================
// Source File
// ============================================================================

/// One file fetched from a repository.
///
/// Immutable once constructed; `name` is the repository-relative path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Repository-relative path of the file.
    pub name: String,
    /// Full text content of the file.
    pub content: String,
}

impl SourceFile {
    /// Creates a new source file.
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

// ============================================================================
// File List
// ============================================================================

/// An ordered collection of fetched files.
///
/// Insertion order is directory-traversal order and is preserved by every
/// accessor. An empty list is a valid value; whether "no files" is an error
/// is decided by the caller, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileList {
    files: Vec<SourceFile>,
}

impl FileList {
    /// Creates an empty file list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a file, keeping insertion order.
    pub fn push(&mut self, file: SourceFile) {
        self.files.push(file);
    }

    /// Returns the number of files.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Returns `true` when no files were collected.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Iterates over the files in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, SourceFile> {
        self.files.iter()
    }

    /// Returns the file names in insertion order.
    pub fn names(&self) -> Vec<String> {
        self.files.iter().map(|file| file.name.clone()).collect()
    }
}

impl From<Vec<SourceFile>> for FileList {
    fn from(files: Vec<SourceFile>) -> Self {
        Self { files }
    }
}

impl FromIterator<SourceFile> for FileList {
    fn from_iter<I: IntoIterator<Item = SourceFile>>(iter: I) -> Self {
        Self {
            files: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for FileList {
    type Item = SourceFile;
    type IntoIter = std::vec::IntoIter<SourceFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.into_iter()
    }
}

impl<'a> IntoIterator for &'a FileList {
    type Item = &'a SourceFile;
    type IntoIter = std::slice::Iter<'a, SourceFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}

// ============================================================================
// Tests
// ============================================================================
