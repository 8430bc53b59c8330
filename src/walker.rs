//! Recursive directory-metadata discovery
//!
//! Walks the contents API starting at the requested folder and flattens the
//! subtree into an ordered list of downloadable files. Traversal is
//! deliberately sequential: one listing fetch is in flight at a time, and
//! concurrency is deferred to the leaf-download stage. This bounds
//! simultaneous metadata calls at the cost of serial latency on deep or wide
//! trees.

use crate::error::Result;
use crate::transport::Transport;
use crate::types::{ContentEntry, EntryKind, FileMetadata};

/// Walks directory listings and collects leaf-file metadata
pub struct MetadataWalker<'a> {
    transport: &'a dyn Transport,
    token: Option<&'a str>,
}

/// One pending unit of traversal work
///
/// Discovered files and not-yet-fetched listings share one worklist so the
/// flat output preserves subtree order exactly: each listing's entries are
/// pushed in reverse, making the stack pop them in listing order, with a
/// directory's entire subtree expanding in place before its next sibling.
enum WalkItem {
    File(FileMetadata),
    Listing(String),
}

impl<'a> MetadataWalker<'a> {
    /// Create a walker over the given transport
    ///
    /// When `token` is set it is attached as `Authorization: token <value>`
    /// to every listing call.
    pub fn new(transport: &'a dyn Transport, token: Option<&'a str>) -> Self {
        Self { transport, token }
    }

    /// Discover every file under `root_listing_url`, depth first
    ///
    /// Any listing failure at any level aborts the entire walk. An empty
    /// result is a valid outcome here; rejecting it is the caller's job.
    pub async fn walk(&self, root_listing_url: &str) -> Result<Vec<FileMetadata>> {
        let mut worklist = vec![WalkItem::Listing(root_listing_url.to_string())];
        let mut files = Vec::new();

        while let Some(item) = worklist.pop() {
            match item {
                WalkItem::File(metadata) => files.push(metadata),
                WalkItem::Listing(url) => {
                    let entries = self.fetch_listing(&url).await?;
                    for entry in entries.into_iter().rev() {
                        match entry.kind {
                            EntryKind::File => match entry.download_url {
                                Some(source_url) => worklist.push(WalkItem::File(FileMetadata {
                                    path: entry.path,
                                    source_url,
                                })),
                                None => {
                                    tracing::warn!(
                                        path = %entry.path,
                                        "file entry has no download URL, skipping"
                                    );
                                }
                            },
                            EntryKind::Dir => worklist.push(WalkItem::Listing(entry.url)),
                            EntryKind::Other => {
                                tracing::debug!(path = %entry.path, "skipping non-file entry");
                            }
                        }
                    }
                }
            }
        }

        tracing::debug!(count = files.len(), "metadata walk complete");
        Ok(files)
    }

    /// Fetch and parse one directory listing
    async fn fetch_listing(&self, url: &str) -> Result<Vec<ContentEntry>> {
        let auth;
        let mut headers: Vec<(&str, &str)> = Vec::new();
        if let Some(token) = self.token {
            auth = format!("token {}", token);
            headers.push(("Authorization", &auth));
        }

        let body = self.transport.get(url, &headers).await?;
        let entries = serde_json::from_slice(&body)?;
        Ok(entries)
    }
}
