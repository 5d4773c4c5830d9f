//! Parsing of repository directory-view URLs.

use once_cell::sync::Lazy;
use percent_encoding::percent_decode_str;
use regex::Regex;
use url::Url;

/// The components of a parsed directory-view URL.
///
/// Parsed once, immutable afterward. Everything downstream (metadata lookup,
/// tree filtering, raw-content URLs) is derived from these four fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoLocator {
    /// Repository owner (user or organization).
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// Branch, tag, or commit id. `"HEAD"` designates the default branch;
    /// both the trees API and the raw-content host accept it as-is.
    pub git_ref: String,
    /// Path of the target subdirectory within the repository, without a
    /// trailing slash.
    pub subdirectory: String,
}

/// Regex for the path component of folder URLs: `/owner/repo/tree/ref/path`
static TREE_URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^/([^/]+)/([^/]+)/tree/([^/]+)/(.+)$").unwrap());

impl RepoLocator {
    /// Parses a directory-view URL into its constituent parts.
    ///
    /// Only the URL's path component is inspected, so GitHub Enterprise hosts
    /// work as well as `github.com`. The subdirectory is percent-decoded; no
    /// further normalization (of `..` or redundant slashes) is applied.
    ///
    /// # Returns
    /// `Some(RepoLocator)` if the path matches `/{owner}/{repo}/tree/{ref}/{path}`,
    /// otherwise `None`. Root repository URLs and blob (single file) URLs do
    /// not match.
    ///
    /// # Examples
    /// ```
    /// use dirfetch::RepoLocator;
    ///
    /// let parsed =
    ///     RepoLocator::parse("https://github.com/rust-lang/cargo/tree/master/src/cargo").unwrap();
    /// assert_eq!(parsed.owner, "rust-lang");
    /// assert_eq!(parsed.repo, "cargo");
    /// assert_eq!(parsed.git_ref, "master");
    /// assert_eq!(parsed.subdirectory, "src/cargo");
    ///
    /// // A root repository URL is not a folder URL.
    /// assert!(RepoLocator::parse("https://github.com/rust-lang/cargo").is_none());
    /// ```
    pub fn parse(url: &str) -> Option<RepoLocator> {
        let parsed = Url::parse(url).ok()?;
        let caps = TREE_URL_RE.captures(parsed.path())?;

        let owner = caps.get(1).unwrap().as_str().to_string();
        let repo = caps.get(2).unwrap().as_str().to_string();
        let git_ref = caps.get(3).unwrap().as_str().to_string();
        // Browsers percent-encode spaces and non-ASCII segments in the
        // address bar; decode so the tree prefix matches the API's paths.
        let subdirectory = percent_decode_str(caps.get(4).unwrap().as_str())
            .decode_utf8()
            .ok()?
            .trim_end_matches('/')
            .to_string();
        // A trailing-slash-only capture would leave an empty subdirectory,
        // which would match every blob in the repository.
        if subdirectory.is_empty() {
            return None;
        }

        Some(RepoLocator {
            owner,
            repo,
            git_ref,
            subdirectory,
        })
    }

    /// The slash-terminated tree prefix used for filtering blob entries and
    /// for deriving relative output paths.
    pub fn prefix(&self) -> String {
        let trimmed = self.subdirectory.trim_matches('/');
        if trimmed.is_empty() {
            String::new()
        } else {
            format!("{}/", trimmed)
        }
    }

    /// The last segment of the subdirectory, used as the default output
    /// directory name.
    pub fn dir_name(&self) -> &str {
        self.subdirectory
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or(&self.subdirectory)
    }
}
