// src/github/client.rs
//! HTTP client for the GitHub API and the raw-content host.

use super::types::{RepoInfo, RepoMeta, TreeResponse};
use crate::config::DownloadOptions;
use crate::constants::USER_AGENT as DIRFETCH_USER_AGENT;
use crate::errors::Error;
use crate::locator::RepoLocator;
use reqwest::header::{HeaderMap, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{Client, Response};
use serde_json::Value;

/// A thin wrapper over `reqwest::Client` carrying the endpoint hosts and
/// default headers for one download run.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    api_base: String,
    raw_base: String,
    mute_log: bool,
}

impl ApiClient {
    /// Builds a client with the standard GitHub API headers, attaching the
    /// bearer token from `options` when one is supplied.
    pub fn new(options: &DownloadOptions) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            "application/vnd.github.v3+json"
                .parse()
                .map_err(|_| Error::Config("invalid Accept header".to_string()))?,
        );
        headers.insert(
            USER_AGENT,
            DIRFETCH_USER_AGENT
                .parse()
                .map_err(|_| Error::Config("invalid User-Agent header".to_string()))?,
        );
        if let Some(token) = &options.token {
            headers.insert(
                AUTHORIZATION,
                format!("Bearer {}", token)
                    .parse()
                    .map_err(|_| Error::Config("token is not a valid header value".to_string()))?,
            );
        }

        let http = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| Error::Config(e.to_string()))?;

        Ok(Self {
            http,
            api_base: options.api_base.trim_end_matches('/').to_string(),
            raw_base: options.raw_base.trim_end_matches('/').to_string(),
            mute_log: options.mute_log,
        })
    }

    /// Performs a GET against the REST API and returns the parsed JSON body.
    ///
    /// Status contract: 401 maps to [`Error::InvalidToken`], 403 with an
    /// exhausted `x-ratelimit-remaining` header to [`Error::RateLimitExceeded`],
    /// 404 to [`Error::RepositoryNotFound`], and any other non-success status
    /// to [`Error::Fetch`].
    pub async fn fetch_info(&self, resource: &str) -> Result<Value, Error> {
        let url = format!("{}/{}", self.api_base, resource.trim_start_matches('/'));
        if !self.mute_log {
            log::debug!("GET {}", url);
        }

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Fetch(e.to_string()))?;

        let status = response.status();
        match status.as_u16() {
            401 => return Err(Error::InvalidToken),
            403 if rate_limit_exhausted(&response) => return Err(Error::RateLimitExceeded),
            404 => return Err(Error::RepositoryNotFound),
            _ if !status.is_success() => {
                return Err(Error::Fetch(format!(
                    "unexpected HTTP {} from '{}'",
                    status.as_u16(),
                    url
                )))
            }
            _ => {}
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| Error::Fetch(e.to_string()))
    }

    /// Composes the repository visibility check and the filtered recursive
    /// tree listing into a [`RepoMeta`].
    pub async fn repo_meta(&self, locator: &RepoLocator) -> Result<RepoMeta, Error> {
        let info = self
            .fetch_info(&format!("repos/{}/{}", locator.owner, locator.repo))
            .await?;
        let repo: RepoInfo =
            serde_json::from_value(info).map_err(|e| Error::Fetch(e.to_string()))?;

        let tree_value = self
            .fetch_info(&format!(
                "repos/{}/{}/git/trees/{}?recursive=1",
                locator.owner, locator.repo, locator.git_ref
            ))
            .await?;

        // The trees endpoint can report errors (e.g. an oversized tree) in a
        // `message` field on an otherwise well-shaped response.
        if let Some(message) = tree_value.get("message").and_then(Value::as_str) {
            return Err(Error::Fetch(message.to_string()));
        }

        let listing: TreeResponse =
            serde_json::from_value(tree_value).map_err(|e| Error::Fetch(e.to_string()))?;

        let prefix = locator.prefix();
        let files = listing
            .tree
            .into_iter()
            .filter(|entry| entry.is_blob() && entry.path.starts_with(&prefix))
            .collect();

        Ok(RepoMeta {
            files,
            private: repo.private,
            truncated: listing.truncated,
        })
    }

    /// Fetches the raw bytes of one file. The body is returned unread so the
    /// caller can stream it to disk.
    pub async fn fetch_raw(&self, locator: &RepoLocator, path: &str) -> Result<Response, Error> {
        let url = format!(
            "{}/{}/{}/{}/{}",
            self.raw_base, locator.owner, locator.repo, locator.git_ref, path
        );
        if !self.mute_log {
            log::debug!("GET {}", url);
        }

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Http {
                status: status.as_u16(),
                path: path.to_string(),
            });
        }
        Ok(response)
    }
}

/// True when a 403 response says the rate-limit quota is spent.
fn rate_limit_exhausted(response: &Response) -> bool {
    response
        .headers()
        .get("x-ratelimit-remaining")
        .and_then(|v| v.to_str().ok())
        .map(|v| v.trim() == "0")
        .unwrap_or(false)
}
