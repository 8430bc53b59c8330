//! Outbound response composition
//!
//! The pipeline has exactly two terminal responses: a 200 carrying the zip
//! archive, or a plain-text 500 describing the failure. Per-file download
//! losses are invisible here; they only manifest as missing entries in an
//! otherwise successful archive.

use crate::error::Error;

/// A host-agnostic HTTP response
///
/// The interception host owns the actual wire format; this struct is the
/// complete description it needs to answer the triggering request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code (200 or 500)
    pub status: u16,
    /// Response headers as (name, value) pairs
    pub headers: Vec<(String, String)>,
    /// Response body
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Compose the success response carrying a finished archive
    #[must_use]
    pub fn archive(file_name: &str, bytes: Vec<u8>) -> Self {
        Self {
            status: 200,
            headers: vec![
                ("Content-Type".to_string(), "application/zip".to_string()),
                (
                    "Content-Disposition".to_string(),
                    format!("attachment; filename=\"{}\"", file_name),
                ),
            ],
            body: bytes,
        }
    }

    /// Compose the single terminal failure response
    #[must_use]
    pub fn failure(error: &Error) -> Self {
        Self {
            status: 500,
            headers: vec![(
                "Content-Type".to_string(),
                "text/plain; charset=utf-8".to_string(),
            )],
            body: error.to_string().into_bytes(),
        }
    }
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    fn header<'a>(response: &'a HttpResponse, name: &str) -> &'a str {
        response
            .headers
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
            .unwrap()
    }

    #[test]
    fn test_archive_response() {
        let response = HttpResponse::archive("guide.zip", vec![1, 2, 3]);
        assert_eq!(response.status, 200);
        assert_eq!(header(&response, "Content-Type"), "application/zip");
        assert_eq!(
            header(&response, "Content-Disposition"),
            "attachment; filename=\"guide.zip\""
        );
        assert_eq!(response.body, vec![1, 2, 3]);
    }

    #[test]
    fn test_failure_response() {
        let response = HttpResponse::failure(&Error::EmptyFolder);
        assert_eq!(response.status, 500);
        assert_eq!(header(&response, "Content-Type"), "text/plain; charset=utf-8");
        assert_eq!(response.body, b"folder is empty or does not exist".to_vec());
    }

    #[test]
    fn test_failure_response_carries_status_context() {
        let response = HttpResponse::failure(&Error::Status {
            status: 403,
            url: "https://api.github.com/repos/o/r/contents/x?ref=main".to_string(),
        });
        let body = String::from_utf8(response.body).unwrap();
        assert!(body.contains("403"));
    }
}
