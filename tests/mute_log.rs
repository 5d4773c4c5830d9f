//! Verifies that `mute_log` silences every diagnostic the library emits,
//! including per-request debug lines, even under a debug-level logger.
//!
//! Lives in its own test binary because the global logger can only be
//! installed once per process.

use dirfetch::{download, DownloadOptions};
use log::{LevelFilter, Metadata, Record};
use std::sync::Mutex;
use tempfile::tempdir;

static RECORDS: Mutex<Vec<(String, String)>> = Mutex::new(Vec::new());

struct CapturingLogger;

impl log::Log for CapturingLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        RECORDS
            .lock()
            .unwrap()
            .push((record.target().to_string(), record.args().to_string()));
    }

    fn flush(&self) {}
}

static LOGGER: CapturingLogger = CapturingLogger;

#[tokio::test]
async fn test_mute_log_silences_all_library_diagnostics() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Debug);

    let mut server = mockito::Server::new_async().await;
    let _repo = server
        .mock("GET", "/repos/octo/widgets")
        .with_status(200)
        .with_body(r#"{"private": false}"#)
        .create_async()
        .await;
    let _tree = server
        .mock("GET", "/repos/octo/widgets/git/trees/main?recursive=1")
        .with_status(200)
        .with_body(
            r#"{
                "sha": "abc",
                "tree": [
                    {"path": "docs/manual/intro.md", "type": "blob", "sha": "b1", "size": 12}
                ]
            }"#,
        )
        .create_async()
        .await;
    let _raw = server
        .mock("GET", "/octo/widgets/main/docs/manual/intro.md")
        .with_status(200)
        .with_body("# Welcome\n")
        .create_async()
        .await;

    let dest = tempdir().unwrap();
    let options = DownloadOptions::new()
        .with_hosts(server.url(), server.url())
        .with_mute_log(true);

    let summary = download(
        "https://github.com/octo/widgets/tree/main/docs/manual",
        Some(dest.path().to_str().unwrap()),
        &[],
        &options,
    )
    .await;

    assert!(summary.success);
    assert_eq!(summary.downloaded, 1);

    // Records from the HTTP stack are fine; the library itself must be silent.
    let leaked: Vec<(String, String)> = RECORDS
        .lock()
        .unwrap()
        .iter()
        .filter(|(target, _)| target.starts_with("dirfetch"))
        .cloned()
        .collect();
    assert!(leaked.is_empty(), "library logged despite mute: {:?}", leaked);
}
