//! Defines application-specific error types.
//!
//! This module provides the `Error` enum, which categorizes the failure modes
//! of a download run, offering more context than generic I/O or `anyhow`
//! errors. Metadata-phase variants abort the whole run; `Http` and `Io` are
//! per-file and are absorbed by the transfer loop.

use thiserror::Error;

/// Application-specific errors used throughout `dirfetch`.
#[derive(Error, Debug)]
pub enum Error {
    /// The input URL does not match the `/{owner}/{repo}/tree/{ref}/{path}` shape.
    #[error("Unrecognized repository directory URL: '{0}'")]
    InvalidUrl(String),

    /// The API rejected the supplied bearer token (HTTP 401).
    #[error("Invalid or expired access token")]
    InvalidToken,

    /// The API rate limit is exhausted (HTTP 403 with zero remaining requests).
    #[error("API rate limit exceeded")]
    RateLimitExceeded,

    /// The repository (or the requested ref) does not exist or is not visible (HTTP 404).
    #[error("Repository not found")]
    RepositoryNotFound,

    /// Generic metadata failure: unexpected status, transport error, or an
    /// API-reported error message on an otherwise well-shaped response.
    #[error("API request failed: {0}")]
    Fetch(String),

    /// A response body failed mid-stream while being written to disk.
    #[error("Transfer of '{path}' interrupted: {message}")]
    Stream {
        /// The local destination that was being written.
        path: String,
        /// The underlying transport error text.
        message: String,
    },

    /// A per-file raw-content fetch returned a non-success status.
    #[error("HTTP {status} fetching '{path}'")]
    Http {
        /// The HTTP status code returned by the raw-content host.
        status: u16,
        /// The repo-relative path of the file that failed.
        path: String,
    },

    /// Error occurring during directory creation or while writing a file.
    #[error("I/O error accessing path '{path}': {source}")]
    Io {
        /// The path that caused the I/O error.
        path: String, // Use String to avoid lifetime issues if PathBuf is dropped
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// Invalid runtime configuration (e.g. a token that cannot form a valid header).
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Helper function to create an `Error::Io` with path context.
pub fn io_error_with_path<P: AsRef<std::path::Path>>(source: std::io::Error, path: P) -> Error {
    Error::Io {
        path: path.as_ref().display().to_string(),
        source,
    }
}
