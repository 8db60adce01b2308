//! Wire format of the GitHub contents API.

use serde::Deserialize;

/// One entry in a directory listing.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentEntry {
    /// Entry kind as reported by the API.
    #[serde(rename = "type")]
    pub kind: EntryKind,
    /// Path of the entry relative to the repository root.
    pub path: String,
    /// API URL of the entry; for a directory, its listing.
    pub url: String,
    /// Raw-content URL; present for files, null for directories.
    pub download_url: Option<String>,
}

/// Entry kinds the walk distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// A regular file.
    File,
    /// A subdirectory.
    Dir,
    /// Anything else the API may report, such as symlinks or submodules.
    #[serde(other)]
    Other,
}
