//! Core data types shared across the pipeline

use serde::{Deserialize, Serialize};

/// One discovered leaf file, as reported by the listing API
///
/// Produced once per file during the metadata walk and consumed exactly once
/// by the download coordinator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileMetadata {
    /// Repository-absolute, `/`-separated path of the file
    pub path: String,
    /// Direct-download endpoint for the file's raw bytes
    pub source_url: String,
}

/// The outcome of one file's content download
///
/// `content` is `None` when that file's download failed; such entries are
/// filtered out before archive assembly and never appear in the final zip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DownloadedFile {
    /// Repository-absolute path, carried over from [`FileMetadata`]
    pub path: String,
    /// Raw file bytes, or `None` if the download failed
    pub content: Option<Vec<u8>>,
}

/// One entry of a directory listing returned by the contents API
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ContentEntry {
    /// Entry kind (file, directory, or something we skip)
    #[serde(rename = "type")]
    pub kind: EntryKind,
    /// Repository-absolute path of the entry
    pub path: String,
    /// Listing endpoint for this entry (used to descend into directories)
    pub url: String,
    /// Direct-download endpoint; present for files, null for directories
    #[serde(default)]
    pub download_url: Option<String>,
}

/// Kind of a listing entry
///
/// The contents API also reports `symlink` and `submodule` entries; those are
/// mapped to [`EntryKind::Other`] and skipped during traversal.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// A leaf file with downloadable content
    File,
    /// A directory with its own listing
    Dir,
    /// Any other entry kind (symlink, submodule); skipped
    #[serde(other)]
    Other,
}
