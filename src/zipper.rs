//! Pipeline orchestration
//!
//! [`FolderZipper`] wires the matcher, walker, download coordinator, and
//! archive builder together and folds every outcome into a single response.
//! Once a URL matches, the pipeline always runs to exactly one terminal
//! outcome; there is no mid-flight cancellation and no end-to-end deadline.

use crate::archive::build_zip;
use crate::config::Config;
use crate::downloader::download_all;
use crate::error::{Error, Result};
use crate::matcher::FolderRequest;
use crate::response::HttpResponse;
use crate::transport::{HttpTransport, Transport};
use crate::utils::strip_folder_prefix;
use crate::walker::MetadataWalker;
use std::collections::HashMap;
use std::sync::Arc;

/// On-the-fly GitHub folder archiver
///
/// Holds the configuration and the shared transport; one instance serves any
/// number of triggering URLs.
pub struct FolderZipper {
    config: Config,
    transport: Arc<dyn Transport>,
}

impl FolderZipper {
    /// Create a zipper backed by a real HTTP client
    pub fn new(config: Config) -> Result<Self> {
        let transport = Arc::new(HttpTransport::new(&config)?);
        Ok(Self { config, transport })
    }

    /// Create a zipper over an injected transport (used by tests)
    pub fn with_transport(config: Config, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    /// Handle one triggering URL
    ///
    /// Returns `None` when the URL does not match the trigger pattern: the
    /// pipeline performs no work and the host must leave the original
    /// traffic untouched. Otherwise always returns a response, folding any
    /// pipeline failure into the plain-text 500 here at the top level.
    pub async fn handle(&self, url: &str) -> Option<HttpResponse> {
        let request = FolderRequest::parse(url)?;
        tracing::info!(
            owner = %request.owner,
            repo = %request.repo,
            branch = %request.branch,
            folder = %request.folder_path,
            "building folder archive"
        );

        let response = match self.run(&request).await {
            Ok(response) => response,
            Err(error) => {
                tracing::warn!(error = %error, "pipeline failed");
                HttpResponse::failure(&error)
            }
        };
        Some(response)
    }

    /// Run the retrieval-and-packaging pipeline for a matched request
    async fn run(&self, request: &FolderRequest) -> Result<HttpResponse> {
        let walker = MetadataWalker::new(self.transport.as_ref(), self.config.token.as_deref());
        let files = walker.walk(&request.listing_url()).await?;
        if files.is_empty() {
            return Err(Error::EmptyFolder);
        }

        let total = files.len();
        tracing::debug!(count = total, "downloading file contents");
        let downloaded = download_all(self.transport.as_ref(), files).await;

        // Single sequential pass after the fan-in barrier; failed downloads
        // are dropped here and never reach the archive.
        let mut entries: HashMap<String, Vec<u8>> = HashMap::new();
        for file in downloaded {
            if let Some(content) = file.content {
                let relative = strip_folder_prefix(&file.path, &request.folder_path);
                entries.insert(relative.to_string(), content);
            }
        }

        if entries.is_empty() {
            return Err(Error::AllDownloadsFailed { total });
        }

        let entry_count = entries.len();
        let archive = build_zip(&entries)?;
        tracing::info!(
            entries = entry_count,
            bytes = archive.len(),
            "archive built"
        );
        Ok(HttpResponse::archive(&request.archive_file_name(), archive))
    }
}
