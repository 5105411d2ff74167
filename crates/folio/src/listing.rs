//! Projects gallery view state.
//!
//! A [`ProjectListing`] starts in [`ListingState::Loading`], performs one
//! fetch when mounted, and settles into `Populated` or `Empty` exactly once.
//! A failed fetch and an account without repositories both settle into
//! `Empty`; the listing cannot tell them apart.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use serde::Serialize;

use crate::language::color_for;
use crate::record::RepositoryRecord;

/// Number of skeleton cards shown while the fetch is in flight.
pub const LOADING_PLACEHOLDER_CARDS: usize = 6;

/// Message shown when the listing settles empty.
pub const EMPTY_MESSAGE: &str = "No repositories found. Check back later!";

/// Card text for repositories without a description.
pub const NO_DESCRIPTION: &str = "No description provided.";

/// Card text for repositories without a detected language.
pub const NO_LANGUAGE: &str = "No language detected";

/// Anything that can produce the repository list for the gallery.
///
/// Implementations contain their own failures and return an empty list
/// instead of erroring.
#[async_trait]
pub trait RepositorySource: Send + Sync {
    async fn fetch_repositories(&self) -> Vec<RepositoryRecord>;
}

/// Observable state of the projects gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingState {
    Loading,
    Populated(Vec<RepositoryRecord>),
    Empty,
}

impl ListingState {
    /// Settle a fetch result into a terminal state.
    #[must_use]
    pub fn settle(records: Vec<RepositoryRecord>) -> Self {
        if records.is_empty() {
            Self::Empty
        } else {
            Self::Populated(records)
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Records to render; empty unless populated.
    #[must_use]
    pub fn records(&self) -> &[RepositoryRecord] {
        match self {
            Self::Populated(records) => records,
            Self::Loading | Self::Empty => &[],
        }
    }

    /// Card view models for the populated state.
    #[must_use]
    pub fn cards(&self) -> Vec<ProjectCard> {
        self.records().iter().map(ProjectCard::from).collect()
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Populated(_) => "populated",
            Self::Empty => "empty",
        }
    }
}

/// Display-ready projection of one [`RepositoryRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectCard {
    pub name: String,
    /// Repository description, or [`NO_DESCRIPTION`].
    pub description: String,
    pub language: Option<String>,
    /// Language name, or [`NO_LANGUAGE`].
    pub language_label: String,
    pub color: &'static str,
    pub stars: u32,
    pub forks: u32,
    pub repo_url: String,
    pub demo_url: Option<String>,
}

impl From<&RepositoryRecord> for ProjectCard {
    fn from(record: &RepositoryRecord) -> Self {
        Self {
            name: record.name.clone(),
            description: record
                .description
                .clone()
                .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            language: record.language.clone(),
            language_label: record
                .language
                .clone()
                .unwrap_or_else(|| NO_LANGUAGE.to_string()),
            color: color_for(record.language.as_deref()),
            stars: record.star_count,
            forks: record.fork_count,
            repo_url: record.html_url.clone(),
            demo_url: record.homepage.clone(),
        }
    }
}

/// Shared "still mounted" flag for a listing.
///
/// Cloned out of the listing so whoever owns the view lifecycle can tear it
/// down while a fetch is still in flight.
#[derive(Debug, Clone)]
pub struct MountHandle(Arc<AtomicBool>);

impl MountHandle {
    fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    #[inline]
    pub fn is_mounted(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    #[inline]
    pub fn unmount(&self) {
        self.0.store(false, Ordering::Release);
    }
}

/// View state owned by the projects gallery.
#[derive(Debug)]
pub struct ProjectListing {
    state: ListingState,
    mount: MountHandle,
    fetch_started: bool,
}

impl Default for ProjectListing {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectListing {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: ListingState::Loading,
            mount: MountHandle::new(),
            fetch_started: false,
        }
    }

    #[must_use]
    pub fn state(&self) -> &ListingState {
        &self.state
    }

    #[must_use]
    pub fn mount_handle(&self) -> MountHandle {
        self.mount.clone()
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mount.is_mounted()
    }

    /// Tear the view down. A fetch that settles afterwards is discarded.
    pub fn teardown(&self) {
        self.mount.unmount();
    }

    /// Run the one fetch for this view and settle the state.
    ///
    /// Only the first call fetches; later calls return the current state.
    /// If the view is torn down before the fetch settles, the result is
    /// dropped and the state stays `Loading`.
    pub async fn mount<S>(&mut self, source: &S) -> &ListingState
    where
        S: RepositorySource + ?Sized,
    {
        if self.fetch_started {
            tracing::debug!(state = self.state.label(), "Listing already fetched");
            return &self.state;
        }
        if !self.mount.is_mounted() {
            tracing::debug!("Listing torn down before mount, skipping fetch");
            return &self.state;
        }
        self.fetch_started = true;

        let records = source.fetch_repositories().await;

        if !self.mount.is_mounted() {
            tracing::debug!(
                count = records.len(),
                "Listing torn down while fetching, discarding result"
            );
            return &self.state;
        }

        self.state = ListingState::settle(records);
        tracing::info!(
            state = self.state.label(),
            count = self.state.records().len(),
            "Project listing settled"
        );
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::sync::atomic::AtomicUsize;

    use super::*;
    use crate::language::FALLBACK_COLOR;

    fn record(id: u64, name: &str, language: Option<&str>) -> RepositoryRecord {
        RepositoryRecord {
            id,
            name: name.to_string(),
            description: None,
            html_url: format!("https://x/{name}"),
            homepage: None,
            language: language.map(String::from),
            star_count: 5,
            fork_count: 2,
        }
    }

    /// Source returning a fixed list and counting invocations.
    struct FixedSource {
        records: Vec<RepositoryRecord>,
        calls: AtomicUsize,
        on_fetch: Mutex<Option<MountHandle>>,
    }

    impl FixedSource {
        fn new(records: Vec<RepositoryRecord>) -> Self {
            Self {
                records,
                calls: AtomicUsize::new(0),
                on_fetch: Mutex::new(None),
            }
        }

        /// Unmount the given view while the fetch is in flight.
        fn unmounting(self, handle: MountHandle) -> Self {
            *self.on_fetch.lock().unwrap() = Some(handle);
            self
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl RepositorySource for FixedSource {
        async fn fetch_repositories(&self) -> Vec<RepositoryRecord> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(handle) = self.on_fetch.lock().unwrap().as_ref() {
                handle.unmount();
            }
            self.records.clone()
        }
    }

    #[test]
    fn new_listing_is_loading_and_mounted() {
        let listing = ProjectListing::new();
        assert!(listing.state().is_loading());
        assert!(listing.is_mounted());
        assert!(listing.state().records().is_empty());
        assert!(listing.state().cards().is_empty());
    }

    #[test]
    fn settle_picks_state_from_length() {
        assert_eq!(ListingState::settle(Vec::new()), ListingState::Empty);
        let records = vec![record(1, "a", None)];
        assert_eq!(
            ListingState::settle(records.clone()),
            ListingState::Populated(records)
        );
    }

    #[tokio::test]
    async fn mount_populates_from_source() {
        let source = FixedSource::new(vec![record(1, "a", Some("Rust")), record(2, "b", None)]);
        let mut listing = ProjectListing::new();

        let state = listing.mount(&source).await;

        assert_eq!(state.label(), "populated");
        assert_eq!(state.records().len(), 2);
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn mount_with_no_records_is_empty() {
        let source = FixedSource::new(Vec::new());
        let mut listing = ProjectListing::new();

        assert_eq!(listing.mount(&source).await, &ListingState::Empty);
    }

    #[tokio::test]
    async fn second_mount_does_not_refetch() {
        let source = FixedSource::new(vec![record(1, "a", None)]);
        let mut listing = ProjectListing::new();

        listing.mount(&source).await;
        let state = listing.mount(&source).await.clone();

        assert_eq!(source.calls(), 1);
        assert_eq!(state.records().len(), 1);
    }

    #[tokio::test]
    async fn teardown_during_fetch_discards_result() {
        let mut listing = ProjectListing::new();
        let source =
            FixedSource::new(vec![record(1, "a", None)]).unmounting(listing.mount_handle());

        let state = listing.mount(&source).await;

        assert!(state.is_loading());
        assert_eq!(source.calls(), 1);
        assert!(!listing.is_mounted());
    }

    #[tokio::test]
    async fn teardown_before_mount_skips_fetch() {
        let source = FixedSource::new(vec![record(1, "a", None)]);
        let mut listing = ProjectListing::new();
        listing.teardown();

        assert!(listing.mount(&source).await.is_loading());
        assert_eq!(source.calls(), 0);
    }

    #[test]
    fn card_uses_placeholders_for_absent_fields() {
        let card = ProjectCard::from(&record(1, "plain", None));

        assert_eq!(card.description, NO_DESCRIPTION);
        assert_eq!(card.language, None);
        assert_eq!(card.language_label, NO_LANGUAGE);
        assert_eq!(card.color, FALLBACK_COLOR);
        assert_eq!(card.demo_url, None);
    }

    #[test]
    fn card_carries_record_fields_and_color() {
        let mut rec = record(1, "site", Some("TypeScript"));
        rec.description = Some("A site".to_string());
        rec.homepage = Some("https://site.example".to_string());

        let card = ProjectCard::from(&rec);

        assert_eq!(card.name, "site");
        assert_eq!(card.description, "A site");
        assert_eq!(card.language_label, "TypeScript");
        assert_eq!(card.color, "bg-blue-500");
        assert_eq!(card.stars, 5);
        assert_eq!(card.forks, 2);
        assert_eq!(card.repo_url, "https://x/site");
        assert_eq!(card.demo_url.as_deref(), Some("https://site.example"));
    }
}
