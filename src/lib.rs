//! # gh-folder-zip
//!
//! Library that synthesizes, on the fly, a downloadable zip archive of a
//! single folder inside a GitHub repository at a given branch.
//!
//! It is driven by one specially-formatted URL,
//! `https://github.com/<owner>/<repo>/tree/<branch>/<folder>.zip`, and
//! produces exactly one outcome per matching URL: a 200 response carrying
//! the archive, or a plain-text 500 describing the failure. Non-matching
//! URLs are an explicit no-op so an interception host can pass its traffic
//! through untouched.
//!
//! ## Design Philosophy
//!
//! - **Library-first** - No CLI or server, purely a Rust crate for embedding
//!   in whatever host intercepts the triggering request
//! - **Sensible defaults** - Works with zero configuration; a token is only
//!   needed for private repositories or higher rate limits
//! - **Injected transport** - All network access goes through the
//!   [`Transport`] trait, so the pipeline is testable without a network
//! - **Fail where it matters** - A listing failure aborts the run, a single
//!   lost file download only shrinks the archive
//!
//! ## Quick Start
//!
//! ```no_run
//! use gh_folder_zip::{Config, FolderZipper};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let zipper = FolderZipper::new(Config::default())?;
//!
//!     let url = "https://github.com/octo/repo/tree/main/docs/guide.zip";
//!     match zipper.handle(url).await {
//!         Some(response) => println!("{} ({} bytes)", response.status, response.body.len()),
//!         None => println!("not a folder-archive URL, pass through"),
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Zip assembly
pub mod archive;
/// Configuration types
pub mod config;
/// Concurrent file-content downloads
pub mod downloader;
/// Error types
pub mod error;
/// Trigger-URL matching
pub mod matcher;
/// Response composition
pub mod response;
/// Injected HTTP fetch capability
pub mod transport;
/// Core types
pub mod types;
/// Path helpers
pub mod utils;
/// Directory-metadata discovery
pub mod walker;
/// Pipeline orchestration
pub mod zipper;

#[cfg(test)]
mod test_helpers;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
pub use matcher::FolderRequest;
pub use response::HttpResponse;
pub use transport::{HttpTransport, Transport};
pub use types::{ContentEntry, DownloadedFile, EntryKind, FileMetadata};
pub use walker::MetadataWalker;
pub use zipper::FolderZipper;
