// src/github/types.rs

use serde::Deserialize;

/// Repository metadata from `GET /repos/{owner}/{repo}`, reduced to the
/// fields the downloader cares about.
#[derive(Debug, Deserialize)]
pub struct RepoInfo {
    /// Whether the repository is private (raw fetches then require the token).
    #[serde(default)]
    pub private: bool,
}

/// Response from the Git Trees API:
/// `GET /repos/{owner}/{repo}/git/trees/{ref}?recursive=1`
#[derive(Debug, Deserialize)]
pub struct TreeResponse {
    pub sha: String,
    pub tree: Vec<TreeEntry>,
    /// Set by the API when the listing was too large to return in full.
    #[serde(default)]
    pub truncated: bool,
}

/// A single entry in the recursive tree listing.
#[derive(Debug, Clone, Deserialize)]
pub struct TreeEntry {
    /// Full repo-relative path.
    pub path: String,
    /// `"blob"` for files, `"tree"` for directories.
    #[serde(rename = "type")]
    pub entry_type: String,
    /// Blob size in bytes; absent for tree entries.
    #[serde(default)]
    pub size: Option<u64>,
    pub sha: String,
}

impl TreeEntry {
    pub fn is_blob(&self) -> bool {
        self.entry_type == "blob"
    }

    /// The file's base name, matched against the exclusion list.
    pub fn basename(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }
}

/// Composed metadata for one download run: the filtered file manifest plus
/// repository visibility. Fixed once fetched; never re-queried mid-download.
#[derive(Debug)]
pub struct RepoMeta {
    /// Blob entries under the target subdirectory, in API order.
    pub files: Vec<TreeEntry>,
    pub private: bool,
    pub truncated: bool,
}
