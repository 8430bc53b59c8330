//! Path helpers for archive-relative naming

/// Strip the requested folder prefix from a repository path
///
/// If `path` begins with `folder_path` followed by a `/`, returns the
/// remainder after that separator; otherwise returns `path` unchanged. The
/// fallback covers any path the listing API reports without the expected
/// prefix and guarantees this function never fails.
///
/// # Examples
///
/// ```
/// use gh_folder_zip::utils::strip_folder_prefix;
///
/// assert_eq!(strip_folder_prefix("a/b/c/d.txt", "a/b"), "c/d.txt");
/// assert_eq!(strip_folder_prefix("other/e.txt", "a/b"), "other/e.txt");
/// ```
#[must_use]
pub fn strip_folder_prefix<'a>(path: &'a str, folder_path: &str) -> &'a str {
    match path
        .strip_prefix(folder_path)
        .and_then(|rest| rest.strip_prefix('/'))
    {
        Some(relative) => relative,
        None => path,
    }
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_exact_prefix() {
        assert_eq!(strip_folder_prefix("a/b/c/d.txt", "a/b"), "c/d.txt");
        assert_eq!(strip_folder_prefix("docs/guide/intro.md", "docs/guide"), "intro.md");
    }

    #[test]
    fn test_fallback_keeps_path_unchanged() {
        assert_eq!(strip_folder_prefix("x/y/z.txt", "a/b"), "x/y/z.txt");
    }

    #[test]
    fn test_partial_segment_is_not_a_prefix() {
        // "a/bc" shares the leading characters of "a/b" but is a different
        // directory; the separator check must prevent stripping.
        assert_eq!(strip_folder_prefix("a/bc/d.txt", "a/b"), "a/bc/d.txt");
    }

    #[test]
    fn test_path_equal_to_folder_is_unchanged() {
        // No trailing separator, so the prefix rule does not apply.
        assert_eq!(strip_folder_prefix("a/b", "a/b"), "a/b");
    }
}
