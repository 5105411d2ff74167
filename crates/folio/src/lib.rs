//! Folio - the repository listing behind a portfolio's projects gallery.
//!
//! The library fetches the most recently updated public repositories of a
//! fixed GitHub account, normalizes them into [`RepositoryRecord`]s, maps
//! each repository's language to a color token, and drives the gallery's
//! `Loading → Populated | Empty` state.
//!
//! # Features
//!
//! - `github` (default) - The GitHub fetcher and its reqwest transport.
//!
//! # Example
//!
//! ```ignore
//! use folio::{ProjectListing, github::GitHubClient};
//!
//! let client = GitHubClient::new();
//! let mut listing = ProjectListing::new();
//! for card in listing.mount(&client).await.cards() {
//!     println!("{} ({})", card.name, card.color);
//! }
//! ```

pub mod http;
pub mod language;
pub mod listing;
pub mod record;

#[cfg(feature = "github")]
pub mod github;

pub use language::{FALLBACK_COLOR, color_for};
pub use listing::{ListingState, MountHandle, ProjectCard, ProjectListing, RepositorySource};
pub use record::RepositoryRecord;
