//! GitHub repository fetcher.

use std::sync::Arc;

use async_trait::async_trait;

use super::convert::to_records;
use super::error::{GitHubError, short_error_message};
use super::types::GitHubRepoPayload;
use crate::http::reqwest_transport::ReqwestTransport;
use crate::http::{HttpRequest, HttpResponse, HttpTransport};
use crate::listing::RepositorySource;
use crate::record::RepositoryRecord;

/// The account whose repositories the gallery shows.
pub const GITHUB_ACCOUNT: &str = "ysathyasai";

/// Public GitHub REST API root.
pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";

/// Number of repositories requested, most recently updated first.
pub const PAGE_SIZE: u32 = 10;

const USER_AGENT: &str = "folio";

/// Read `x-ratelimit-remaining` from a response, if present and numeric.
fn rate_limit_remaining(response: &HttpResponse) -> Option<u32> {
    response
        .header("x-ratelimit-remaining")
        .and_then(|v| v.trim().parse().ok())
}

/// Unauthenticated GitHub client for the fixed portfolio account.
///
/// Every call performs a fresh request: no caching, no retry, no timeout
/// beyond what the transport imposes.
#[derive(Clone)]
pub struct GitHubClient {
    transport: Arc<dyn HttpTransport>,
    api_base_url: String,
}

impl Default for GitHubClient {
    fn default() -> Self {
        Self::new()
    }
}

impl GitHubClient {
    /// Create a client backed by a default reqwest transport.
    pub fn new() -> Self {
        Self::with_transport(Arc::new(ReqwestTransport::default()))
    }

    /// Create a client over an arbitrary transport.
    pub fn with_transport(transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            transport,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }

    /// Point the client at a different API root (mirror or test double).
    ///
    /// The account and query parameters are unaffected.
    #[must_use]
    pub fn with_base_url(mut self, api_base_url: impl Into<String>) -> Self {
        self.api_base_url = api_base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// The account this client lists.
    #[inline]
    pub fn account(&self) -> &'static str {
        GITHUB_ACCOUNT
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// URL of the repository listing request.
    pub fn repos_url(&self) -> String {
        format!(
            "{}/users/{}/repos?sort=updated&per_page={}",
            self.api_base_url, GITHUB_ACCOUNT, PAGE_SIZE
        )
    }

    /// Human-facing profile page, linked under the gallery.
    pub fn profile_url(&self) -> String {
        format!("https://github.com/{}", GITHUB_ACCOUNT)
    }

    /// Fetch and normalize the listing, surfacing any failure.
    ///
    /// Prefer [`GitHubClient::fetch_repositories`] for rendering; this
    /// variant exists for diagnostics.
    pub async fn try_fetch_repositories(&self) -> Result<Vec<RepositoryRecord>, GitHubError> {
        let url = self.repos_url();
        tracing::debug!(url = %url, "Fetching repositories");

        let request = HttpRequest::get(url)
            .header("Accept", "application/vnd.github+json")
            .header("User-Agent", USER_AGENT);

        let response = self.transport.send(request).await?;

        if !response.is_success() {
            return Err(GitHubError::Status {
                status: response.status,
                rate_limit_remaining: rate_limit_remaining(&response),
            });
        }

        let payloads: Vec<GitHubRepoPayload> = serde_json::from_slice(&response.body)?;
        let fetched = payloads.len();
        let records = to_records(payloads);

        tracing::debug!(fetched, kept = records.len(), "Fetched repositories");
        Ok(records)
    }

    /// Fetch the listing, containing every failure as an empty list.
    ///
    /// Failures are logged and never returned.
    pub async fn fetch_repositories(&self) -> Vec<RepositoryRecord> {
        match self.try_fetch_repositories().await {
            Ok(records) => records,
            Err(e) => {
                tracing::error!(
                    account = GITHUB_ACCOUNT,
                    kind = e.kind(),
                    rate_limited = e.is_rate_limited(),
                    error = %short_error_message(&e),
                    "Failed to fetch GitHub repositories"
                );
                Vec::new()
            }
        }
    }
}

#[async_trait]
impl RepositorySource for GitHubClient {
    async fn fetch_repositories(&self) -> Vec<RepositoryRecord> {
        GitHubClient::fetch_repositories(self).await
    }
}
