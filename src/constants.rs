// src/constants.rs

use std::time::Duration;

/// Base URL of the GitHub REST API. Overridable via `DownloadOptions::api_base`.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Base URL of the raw file content host. Overridable via `DownloadOptions::raw_base`.
pub const DEFAULT_RAW_BASE: &str = "https://raw.githubusercontent.com";

/// Default number of concurrency slots for file downloads.
pub const DEFAULT_REQUESTS: usize = 10;

/// Delay before the single retry of the metadata fetch.
pub const METADATA_RETRY_DELAY: Duration = Duration::from_secs(3);

/// Delay before the single retry of a per-file content fetch.
pub const FILE_RETRY_DELAY: Duration = Duration::from_secs(2);

/// Metadata and per-file fetches are attempted at most this many times.
pub const FETCH_ATTEMPTS: usize = 2;

/// User-Agent sent on every request. The GitHub API rejects requests without one.
pub const USER_AGENT: &str = concat!("dirfetch/", env!("CARGO_PKG_VERSION"));
