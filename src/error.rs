//! Error types for gh-folder-zip
//!
//! The pipeline distinguishes fatal errors (anything that prevents knowing or
//! assembling the folder tree) from per-file download losses, which are
//! tolerated and never appear here. Every variant in this module terminates
//! the pipeline and surfaces as a single plain-text 500 response.

use thiserror::Error;

/// Result type alias for gh-folder-zip operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for gh-folder-zip
///
/// Each variant includes contextual information to help diagnose issues.
/// Note the deliberate asymmetry with per-file download failures: a listing
/// failure means the folder tree cannot be known and is fatal, while a single
/// content download failure only drops that file from the archive and is
/// handled inside the download coordinator without ever constructing an
/// [`Error`].
#[derive(Debug, Error)]
pub enum Error {
    /// An upstream call returned a non-200 status
    ///
    /// When the failing URL is a listing endpoint this aborts the whole walk;
    /// when it is a content download the coordinator swallows it and drops
    /// that one file.
    #[error("request failed with status {status}: {url}")]
    Status {
        /// HTTP status returned by the upstream endpoint
        status: u16,
        /// The URL that failed
        url: String,
    },

    /// Network error from the underlying HTTP client
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A listing response body was not valid JSON
    #[error("listing response was not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The walk completed but discovered zero files
    #[error("folder is empty or does not exist")]
    EmptyFolder,

    /// Every discovered file failed to download
    #[error("all {total} file downloads failed")]
    AllDownloadsFailed {
        /// Number of files that were discovered and attempted
        total: usize,
    },

    /// Zip assembly failed
    #[error("archive assembly failed: {0}")]
    Archive(String),

    /// Failed to construct the HTTP client
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(String),
}
