//! Concurrent file-content downloads
//!
//! Fan-out/fan-in over the whole discovered file list: every download is
//! issued together and the coordinator waits for all of them to settle.
//! Results are correlated by input index, never by arrival order.

use crate::transport::Transport;
use crate::types::{DownloadedFile, FileMetadata};
use futures::future::join_all;

/// Download every file's raw content concurrently
///
/// The returned list has the same length and index order as the input. A
/// failed download (transport error or non-200 status) yields `content:
/// None` for that item only; it never aborts or affects the other in-flight
/// downloads. This is the deliberate asymmetry with the metadata walk: a
/// listing failure means the tree cannot be known and is fatal, a lost file
/// is tolerable.
///
/// Downloads carry no Authorization header; raw content endpoints are
/// fetched anonymously.
pub async fn download_all(
    transport: &dyn Transport,
    files: Vec<FileMetadata>,
) -> Vec<DownloadedFile> {
    let fetches = files.into_iter().map(|file| async move {
        match transport.get(&file.source_url, &[]).await {
            Ok(content) => DownloadedFile {
                path: file.path,
                content: Some(content),
            },
            Err(error) => {
                tracing::warn!(path = %file.path, error = %error, "file download failed");
                DownloadedFile {
                    path: file.path,
                    content: None,
                }
            }
        }
    });

    join_all(fetches).await
}
