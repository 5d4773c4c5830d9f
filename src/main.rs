// src/main.rs

use clap::Parser;
use dirfetch::cli::Cli;
use dirfetch::{download, DownloadOptions};
use std::env;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging. Default to 'info' if RUST_LOG is not set; --quiet
    // silences everything, leaving the exit code as the only signal.
    let default_filter = if cli.quiet { "off" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .format_target(false)
        .init();

    log::debug!("Starting dirfetch v{}", env!("CARGO_PKG_VERSION"));

    let token = cli.token.or_else(|| env::var("GITHUB_TOKEN").ok());
    let options = DownloadOptions::new()
        .with_token(token)
        .with_requests(cli.requests.get())
        .with_mute_log(cli.quiet);
    let excluded = cli.exclude.unwrap_or_default();

    let summary = download(&cli.url, cli.output.as_deref(), &excluded, &options).await;

    if !cli.quiet {
        log::info!(
            "{} of {} file(s) downloaded",
            summary.downloaded,
            summary.files_found
        );
    }

    std::process::exit(if summary.success { 0 } else { 1 });
}
