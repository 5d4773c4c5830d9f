//! Runtime configuration for a download run.
//!
//! `DownloadOptions` consolidates the recognized settings (token, concurrency,
//! log muting, endpoint hosts) into one structured object handed to
//! [`crate::download`]. Output-directory resolution also lives here.

use crate::constants::{DEFAULT_API_BASE, DEFAULT_RAW_BASE, DEFAULT_REQUESTS};
use crate::errors::{io_error_with_path, Error};
use crate::locator::RepoLocator;
use std::path::PathBuf;

/// Options recognized by [`crate::download`].
#[derive(Debug, Clone)]
pub struct DownloadOptions {
    /// Bearer credential for private-repo/API access.
    pub token: Option<String>,
    /// Concurrency slot count: at most this many file fetches in flight.
    pub requests: usize,
    /// Suppress all console diagnostics emitted by the library.
    pub mute_log: bool,
    /// Base URL of the REST API. Override for GitHub Enterprise hosts or tests.
    pub api_base: String,
    /// Base URL of the raw file content host.
    pub raw_base: String,
}

impl Default for DownloadOptions {
    fn default() -> Self {
        Self {
            token: None,
            requests: DEFAULT_REQUESTS,
            mute_log: false,
            api_base: DEFAULT_API_BASE.to_string(),
            raw_base: DEFAULT_RAW_BASE.to_string(),
        }
    }
}

impl DownloadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(self, token: Option<String>) -> Self {
        Self { token, ..self }
    }

    /// Sets the concurrency slot count. Values below 1 are clamped to 1.
    pub fn with_requests(self, requests: usize) -> Self {
        Self {
            requests: requests.max(1),
            ..self
        }
    }

    pub fn with_mute_log(self, mute_log: bool) -> Self {
        Self { mute_log, ..self }
    }

    /// Points the client at a different API and raw-content host pair.
    pub fn with_hosts(self, api_base: impl Into<String>, raw_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            raw_base: raw_base.into(),
            ..self
        }
    }
}

/// Resolves the output directory to an absolute path.
///
/// When `destination` is `None`, a directory named after the last segment of
/// the target subdirectory is used. Relative paths are resolved against the
/// current working directory. The directory itself is created lazily by the
/// transfer stage, so the path does not have to exist yet.
pub fn resolve_output_dir(
    destination: Option<&str>,
    locator: &RepoLocator,
) -> Result<PathBuf, Error> {
    let raw = match destination {
        Some(dest) => PathBuf::from(dest),
        None => PathBuf::from(locator.dir_name()),
    };
    if raw.is_absolute() {
        return Ok(raw);
    }
    let cwd = std::env::current_dir().map_err(|e| io_error_with_path(e, "."))?;
    Ok(cwd.join(raw))
}
