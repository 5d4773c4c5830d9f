//! Bounded-concurrency file transfer.
//!
//! Files are assigned to a fixed number of concurrency slots in round-robin
//! order by their index in the manifest. Within a slot, files run strictly
//! sequentially; across slots, fully in parallel. A fast-finishing slot does
//! not steal work that was assigned to another slot.

use crate::config::DownloadOptions;
use crate::constants::{FETCH_ATTEMPTS, FILE_RETRY_DELAY};
use crate::errors::{io_error_with_path, Error};
use crate::github::{ApiClient, TreeEntry};
use crate::locator::RepoLocator;
use crate::retry::with_retry;
use futures::future::join_all;
use futures::StreamExt;
use std::future::Future;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::io::AsyncWriteExt;

/// Aggregate result of one download run.
///
/// `downloaded` counts successful fetches: it is incremented as soon as a
/// file's HTTP fetch succeeds, before its bytes reach the disk. A write that
/// fails after a successful fetch therefore still counts, matching the
/// original tool's accounting. `success` is stricter: it is only `true` when
/// every non-excluded file was both fetched and written.
#[derive(Debug)]
pub struct DownloadSummary {
    /// Total blob entries matched under the target subdirectory.
    pub files_found: usize,
    /// Count of files whose content fetch succeeded.
    pub downloaded: usize,
    /// Whether the run completed without a permanent per-file failure.
    pub success: bool,
    /// The error that aborted the run before any file download, if any.
    pub error: Option<Error>,
}

impl DownloadSummary {
    /// A run that aborted before any file was downloaded.
    pub(crate) fn aborted(error: Error) -> Self {
        Self {
            files_found: 0,
            downloaded: 0,
            success: false,
            error: Some(error),
        }
    }

    /// The zero-files case: a no-op success.
    pub(crate) fn empty() -> Self {
        Self {
            files_found: 0,
            downloaded: 0,
            success: true,
            error: None,
        }
    }
}

/// Runs `worker` over `items` with at most `slots` workers in flight.
///
/// Item `i` is assigned to slot `i % slots`; each slot awaits its previous
/// item before starting the next one. All slots are awaited before returning.
pub(crate) async fn run_in_slots<T, F, Fut>(items: Vec<T>, slots: usize, worker: F)
where
    F: Fn(usize, T) -> Fut,
    Fut: Future<Output = ()>,
{
    let slots = slots.max(1);
    let mut lanes: Vec<Vec<(usize, T)>> = (0..slots).map(|_| Vec::new()).collect();
    for (index, item) in items.into_iter().enumerate() {
        lanes[index % slots].push((index, item));
    }

    let worker = &worker;
    join_all(lanes.into_iter().map(|lane| async move {
        for (index, item) in lane {
            worker(index, item).await;
        }
    }))
    .await;
}

/// Fetches every file in `files` and writes it under `dest_root`.
///
/// Returns `(downloaded, failed)`: the count of successful fetches and the
/// count of files permanently lost to a fetch or write fault. Excluded files
/// appear in neither count.
pub(crate) async fn fetch_all(
    client: &ApiClient,
    locator: &RepoLocator,
    files: Vec<TreeEntry>,
    dest_root: &Path,
    excluded: &[String],
    options: &DownloadOptions,
) -> (usize, usize) {
    let downloaded = AtomicUsize::new(0);
    let failed = AtomicUsize::new(0);
    let prefix = locator.prefix();

    let downloaded_ref = &downloaded;
    let failed_ref = &failed;
    let prefix_ref = prefix.as_str();
    run_in_slots(files, options.requests, move |_, entry| async move {
        fetch_one(
            client,
            locator,
            entry,
            dest_root,
            prefix_ref,
            excluded,
            options,
            downloaded_ref,
            failed_ref,
        )
        .await;
    })
    .await;

    (
        downloaded.load(Ordering::Relaxed),
        failed.load(Ordering::Relaxed),
    )
}

/// The per-file pipeline: exclusion check, fetch with one retry, then write.
/// Every fault is absorbed here; a failing file never affects its siblings.
#[allow(clippy::too_many_arguments)]
async fn fetch_one(
    client: &ApiClient,
    locator: &RepoLocator,
    entry: TreeEntry,
    dest_root: &Path,
    prefix: &str,
    excluded: &[String],
    options: &DownloadOptions,
    downloaded: &AtomicUsize,
    failed: &AtomicUsize,
) {
    if excluded.iter().any(|name| name == entry.basename()) {
        if !options.mute_log {
            log::info!("Skipping excluded file '{}'", entry.path);
        }
        return;
    }

    let response = match with_retry(FETCH_ATTEMPTS, FILE_RETRY_DELAY, || {
        client.fetch_raw(locator, &entry.path)
    })
    .await
    {
        Ok(response) => response,
        Err(err) => {
            failed.fetch_add(1, Ordering::Relaxed);
            if !options.mute_log {
                log::warn!("Giving up on '{}': {}", entry.path, err);
            }
            return;
        }
    };

    // Counts successful fetches, not successful writes. See DownloadSummary.
    downloaded.fetch_add(1, Ordering::Relaxed);

    let relative = entry.path.strip_prefix(prefix).unwrap_or(&entry.path);
    let destination = dest_root.join(relative);

    match write_entry(response, &destination).await {
        Ok(()) => {
            if !options.mute_log {
                log::info!("Downloaded '{}'", entry.path);
            }
        }
        Err(err) => {
            failed.fetch_add(1, Ordering::Relaxed);
            if !options.mute_log {
                log::warn!("Failed to write '{}': {}", destination.display(), err);
            }
        }
    }
}

/// Streams a response body into `destination`, creating missing parent
/// directories first. An already-existing directory is fine.
async fn write_entry(response: reqwest::Response, destination: &Path) -> Result<(), Error> {
    if let Some(parent) = destination.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| io_error_with_path(e, parent))?;
    }

    let mut file = tokio::fs::File::create(destination)
        .await
        .map_err(|e| io_error_with_path(e, destination))?;

    let mut body = response.bytes_stream();
    while let Some(chunk) = body.next().await {
        let chunk = chunk.map_err(|e| Error::Stream {
            path: destination.display().to_string(),
            message: e.to_string(),
        })?;
        file.write_all(&chunk)
            .await
            .map_err(|e| io_error_with_path(e, destination))?;
    }
    file.flush()
        .await
        .map_err(|e| io_error_with_path(e, destination))?;
    Ok(())
}
