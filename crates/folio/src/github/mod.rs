//! GitHub repository fetcher for the projects gallery.
//!
//! # Module Structure
//!
//! - [`error`] - Error types for the listing request
//! - [`types`] - Wire types decoded from the API
//! - [`client`] - The fetcher and its failure containment
//! - [`convert`] - Normalization into [`RepositoryRecord`](crate::RepositoryRecord)
//!
//! ```ignore
//! use folio::github::GitHubClient;
//!
//! let client = GitHubClient::new();
//! let repos = client.fetch_repositories().await; // never errors
//! ```

mod client;
mod convert;
mod error;
mod types;

pub use client::{DEFAULT_API_BASE_URL, GITHUB_ACCOUNT, GitHubClient, PAGE_SIZE};
pub use convert::{to_record, to_records};
pub use error::{GitHubError, short_error_message};
pub use types::GitHubRepoPayload;
