// src/cli.rs

use clap::Parser;
use std::num::NonZeroUsize;

/// Download a single directory of a GitHub repository without cloning the
/// whole thing.
///
/// dirfetch resolves a directory-view URL, lists the repository's recursive
/// file tree through the GitHub API, and fetches the raw content of every
/// file under the target path into a local directory tree mirroring the
/// remote layout.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory-view URL: https://github.com/{owner}/{repo}/tree/{ref}/{path}
    pub url: String,

    /// Output directory. Defaults to the last segment of the URL path,
    /// created under the current directory.
    #[arg(short = 'o', long, value_name = "DIR")]
    pub output: Option<String>,

    /// File basenames to skip entirely (repeatable).
    #[arg(short = 'x', long = "exclude", value_name = "NAME", num_args = 1..)]
    pub exclude: Option<Vec<String>>,

    /// Bearer token for private repositories and higher API rate limits.
    /// Falls back to the GITHUB_TOKEN environment variable.
    #[arg(long, value_name = "TOKEN")]
    pub token: Option<String>,

    /// Maximum number of file downloads in flight at once.
    #[arg(short = 'r', long, value_name = "COUNT", default_value = "10")]
    pub requests: NonZeroUsize,

    /// Suppress all console diagnostics.
    #[arg(short = 'q', long, action = clap::ArgAction::SetTrue)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["dirfetch", "https://github.com/u/r/tree/main/docs"]);
        assert_eq!(cli.requests.get(), 10);
        assert!(!cli.quiet);
        assert!(cli.output.is_none());
        assert!(cli.exclude.is_none());
    }

    #[test]
    fn test_cli_rejects_zero_requests() {
        let result = Cli::try_parse_from([
            "dirfetch",
            "https://github.com/u/r/tree/main/docs",
            "--requests",
            "0",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_collects_repeated_excludes() {
        let cli = Cli::parse_from([
            "dirfetch",
            "https://github.com/u/r/tree/main/docs",
            "-x",
            ".gitignore",
            "-x",
            "OWNERS",
        ]);
        assert_eq!(
            cli.exclude,
            Some(vec![".gitignore".to_string(), "OWNERS".to_string()])
        );
    }
}
