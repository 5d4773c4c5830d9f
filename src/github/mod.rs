//! GitHub REST API access: metadata, recursive tree listing, raw contents.

mod client;
mod types;

pub use client::ApiClient;
pub use types::{RepoInfo, RepoMeta, TreeEntry, TreeResponse};
