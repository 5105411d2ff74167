//! GitHub API error types.

use thiserror::Error;

use crate::http::HttpError;

/// Errors that can occur when fetching the repository listing.
///
/// These never reach the listing presenter; the contained fetch logs them
/// and yields an empty list instead.
#[derive(Debug, Error)]
pub enum GitHubError {
    #[error("GitHub request failed: {0}")]
    Transport(#[from] HttpError),

    #[error("GitHub API returned HTTP {status}")]
    Status {
        status: u16,
        /// Value of `x-ratelimit-remaining`, when the response carried it.
        rate_limit_remaining: Option<u32>,
    },

    #[error("GitHub response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

impl GitHubError {
    /// Short label for structured logging.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Transport(_) => "transport",
            Self::Status { .. } => "status",
            Self::Decode(_) => "decode",
        }
    }

    /// Whether this failure looks like the unauthenticated rate limit.
    ///
    /// Purely diagnostic: a rate-limited response is contained like any
    /// other failure.
    #[must_use]
    pub fn is_rate_limited(&self) -> bool {
        match self {
            Self::Status { status: 429, .. } => true,
            Self::Status {
                status: 403,
                rate_limit_remaining,
            } => *rate_limit_remaining == Some(0),
            _ => false,
        }
    }
}

/// Extract a short error message suitable for a single log line.
///
/// Takes the first line of an error message, which matters for transport
/// errors that embed multi-line source chains.
#[inline]
pub fn short_error_message(e: &impl std::error::Error) -> String {
    let full = e.to_string();
    full.lines().next().unwrap_or(&full).to_string()
}
