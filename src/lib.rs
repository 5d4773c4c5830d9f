//! `dirfetch` is a library and command-line tool for downloading a single
//! subdirectory of a GitHub repository without cloning the whole repository.
//!
//! It resolves a directory-view URL to `{owner, repo, ref, subdirectory}`,
//! lists the repository's recursive file tree via the GitHub REST API,
//! filters to the files under the target path, and fetches each file's raw
//! bytes over HTTP, writing them to a local directory tree that mirrors the
//! remote layout. Downloads run with a bounded number of concurrency slots,
//! and each fetch gets a single fixed-delay retry.
//!
//! # Example: Library Usage
//!
//! ```no_run
//! use dirfetch::{download, DownloadOptions};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let options = DownloadOptions::new().with_requests(5);
//! let summary = download(
//!     "https://github.com/rust-lang/cargo/tree/master/src/doc",
//!     Some("cargo-docs"),
//!     &[],
//!     &options,
//! )
//! .await;
//!
//! println!(
//!     "{}/{} files downloaded (success: {})",
//!     summary.downloaded, summary.files_found, summary.success
//! );
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod errors;
pub mod github;
pub mod locator;
pub mod retry;
pub mod transfer;

// Re-export key public types for easier use as a library
pub use config::DownloadOptions;
pub use errors::Error;
pub use github::{RepoMeta, TreeEntry};
pub use locator::RepoLocator;
pub use transfer::DownloadSummary;

use crate::config::resolve_output_dir;
use crate::constants::{FETCH_ATTEMPTS, METADATA_RETRY_DELAY};
use crate::github::ApiClient;
use crate::retry::with_retry;

/// Downloads one repository subdirectory to a local directory tree.
///
/// This is the top-level entry point. It never returns an error: all failure
/// is communicated through the returned [`DownloadSummary`] (and, unless
/// `options.mute_log` is set, through log diagnostics).
///
/// # Arguments
/// * `url` - A directory-view URL of the form
///   `https://<host>/{owner}/{repo}/tree/{ref}/{path}`.
/// * `destination` - Output directory. Defaults to the last URL path segment
///   under the current working directory; relative paths are resolved against
///   the current working directory.
/// * `excluded` - File basenames to skip entirely.
/// * `options` - Token, concurrency, log muting, and endpoint hosts.
///
/// # Behavior
/// The metadata phase (repository visibility plus recursive tree listing) is
/// all-or-nothing: it is retried once after a fixed delay and aborts the whole
/// run on the second failure, with the cause in `DownloadSummary::error`.
/// Per-file faults are retried once and then isolated; they mark the run as
/// unsuccessful but never abort it. Zero matching files is a no-op success.
pub async fn download(
    url: &str,
    destination: Option<&str>,
    excluded: &[String],
    options: &DownloadOptions,
) -> DownloadSummary {
    let mute = options.mute_log;

    let locator = match RepoLocator::parse(url) {
        Some(locator) => locator,
        None => {
            if !mute {
                log::error!("Unrecognized repository directory URL: '{}'", url);
            }
            return DownloadSummary::aborted(Error::InvalidUrl(url.to_string()));
        }
    };

    let dest_root = match resolve_output_dir(destination, &locator) {
        Ok(path) => path,
        Err(err) => {
            if !mute {
                log::error!("Could not resolve output directory: {}", err);
            }
            return DownloadSummary::aborted(err);
        }
    };

    let client = match ApiClient::new(options) {
        Ok(client) => client,
        Err(err) => {
            if !mute {
                log::error!("{}", err);
            }
            return DownloadSummary::aborted(err);
        }
    };

    // All-or-nothing precondition: one retry, then the whole run aborts.
    let meta = match with_retry(FETCH_ATTEMPTS, METADATA_RETRY_DELAY, || {
        client.repo_meta(&locator)
    })
    .await
    {
        Ok(meta) => meta,
        Err(err) => {
            if !mute {
                log::error!(
                    "Failed to list '{}/{}' at ref '{}': {}",
                    locator.owner,
                    locator.repo,
                    locator.git_ref,
                    err
                );
            }
            return DownloadSummary::aborted(err);
        }
    };

    if !mute {
        if meta.private {
            log::debug!("Repository {}/{} is private", locator.owner, locator.repo);
        }
        if meta.truncated {
            log::warn!("The API truncated the tree listing; some files may be missing");
        }
    }

    let files_found = meta.files.len();
    if files_found == 0 {
        if !mute {
            log::info!("No files found under '{}'", locator.subdirectory);
        }
        return DownloadSummary::empty();
    }

    if !mute {
        log::info!(
            "Found {} file(s) under '{}', downloading to '{}'",
            files_found,
            locator.subdirectory,
            dest_root.display()
        );
    }

    let (downloaded, failed) =
        transfer::fetch_all(&client, &locator, meta.files, &dest_root, excluded, options).await;

    if failed > 0 && !mute {
        log::warn!("{} file(s) could not be downloaded", failed);
    }

    DownloadSummary {
        files_found,
        downloaded,
        success: failed == 0,
        error: None,
    }
}
