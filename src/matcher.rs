//! Trigger-URL matching
//!
//! The pipeline is armed by URLs of the shape
//! `https://github.com/<owner>/<repo>/tree/<branch>/<folder>.zip`. Anything
//! else is an explicit no-op: the caller leaves the original traffic alone.

use regex::Regex;
use std::sync::OnceLock;
use url::Url;

/// Fixed trigger pattern; `<owner>`, `<repo>` and `<branch>` contain no `/`,
/// the folder path may, and the trailing `.zip` is not part of the path.
const TRIGGER_PATTERN: &str = r"^https://github\.com/([^/]+)/([^/]+)/tree/([^/]+)/(.+)\.zip$";

/// Root of the contents API; owner, repo, and folder segments are appended
/// per request.
const API_BASE: &str = "https://api.github.com/repos";

fn trigger_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    // The pattern is a compile-time constant; it cannot fail to parse.
    #[allow(clippy::expect_used)]
    REGEX.get_or_init(|| Regex::new(TRIGGER_PATTERN).expect("trigger pattern is valid"))
}

fn api_base() -> &'static Url {
    static BASE: OnceLock<Url> = OnceLock::new();
    // The base is a compile-time constant; it cannot fail to parse.
    #[allow(clippy::expect_used)]
    BASE.get_or_init(|| Url::parse(API_BASE).expect("API base URL is valid"))
}

/// A parsed folder-archive request
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FolderRequest {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Branch (or any ref without `/`)
    pub branch: String,
    /// `/`-separated folder path inside the repository, without the `.zip`
    pub folder_path: String,
}

impl FolderRequest {
    /// Parse a triggering URL, returning `None` when it does not match
    ///
    /// `None` is not an error; it means the pipeline must not run at all.
    #[must_use]
    pub fn parse(url: &str) -> Option<Self> {
        let captures = trigger_regex().captures(url)?;
        Some(Self {
            owner: captures[1].to_string(),
            repo: captures[2].to_string(),
            branch: captures[3].to_string(),
            folder_path: captures[4].to_string(),
        })
    }

    /// The contents-API listing endpoint for the requested folder root
    ///
    /// Built segment by segment so folder paths with characters that need
    /// percent-encoding still produce a valid endpoint.
    #[must_use]
    pub fn listing_url(&self) -> String {
        let mut url = api_base().clone();
        // An https URL is always a valid base; path_segments_mut cannot fail.
        #[allow(clippy::expect_used)]
        url.path_segments_mut()
            .expect("https URL has path segments")
            .extend([self.owner.as_str(), self.repo.as_str(), "contents"])
            .extend(self.folder_path.split('/'));
        url.query_pairs_mut().append_pair("ref", &self.branch);
        url.into()
    }

    /// External file name of the produced archive: the last path segment
    /// suffixed with `.zip`
    #[must_use]
    pub fn archive_file_name(&self) -> String {
        let last = self
            .folder_path
            .rsplit('/')
            .next()
            .unwrap_or(&self.folder_path);
        format!("{}.zip", last)
    }
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_worked_example() {
        let request =
            FolderRequest::parse("https://github.com/octo/repo/tree/main/docs/guide.zip").unwrap();
        assert_eq!(request.owner, "octo");
        assert_eq!(request.repo, "repo");
        assert_eq!(request.branch, "main");
        assert_eq!(request.folder_path, "docs/guide");
        assert_eq!(request.archive_file_name(), "guide.zip");
    }

    #[test]
    fn test_parse_single_segment_folder() {
        let request =
            FolderRequest::parse("https://github.com/octo/repo/tree/main/src.zip").unwrap();
        assert_eq!(request.folder_path, "src");
        assert_eq!(request.archive_file_name(), "src.zip");
    }

    #[test]
    fn test_listing_url() {
        let request =
            FolderRequest::parse("https://github.com/octo/repo/tree/dev/docs/guide.zip").unwrap();
        assert_eq!(
            request.listing_url(),
            "https://api.github.com/repos/octo/repo/contents/docs/guide?ref=dev"
        );
    }

    #[test]
    fn test_listing_url_percent_encodes_odd_segments() {
        let request = FolderRequest {
            owner: "octo".to_string(),
            repo: "repo".to_string(),
            branch: "main".to_string(),
            folder_path: "docs/my guide".to_string(),
        };
        assert_eq!(
            request.listing_url(),
            "https://api.github.com/repos/octo/repo/contents/docs/my%20guide?ref=main"
        );
    }

    #[test]
    fn test_no_match_outcomes() {
        // Plain repository page
        assert!(FolderRequest::parse("https://github.com/octo/repo").is_none());
        // Missing .zip suffix
        assert!(FolderRequest::parse("https://github.com/octo/repo/tree/main/docs").is_none());
        // Blob URL, not tree
        assert!(
            FolderRequest::parse("https://github.com/octo/repo/blob/main/docs.zip").is_none()
        );
        // Wrong host
        assert!(
            FolderRequest::parse("https://gitlab.com/octo/repo/tree/main/docs.zip").is_none()
        );
        // http, not https
        assert!(
            FolderRequest::parse("http://github.com/octo/repo/tree/main/docs.zip").is_none()
        );
        // Empty folder path
        assert!(FolderRequest::parse("https://github.com/octo/repo/tree/main/.zip").is_none());
    }
}
