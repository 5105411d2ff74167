use serde::Serialize;

/// One externally hosted repository as surfaced to the projects gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryRecord {
    /// Upstream identifier, unique within one fetched list.
    pub id: u64,
    /// Display name. Never empty.
    pub name: String,
    /// `None` means no description was provided.
    pub description: Option<String>,
    /// Absolute URL of the repository page.
    pub html_url: String,
    /// Live demo URL. `None` hides the demo link.
    pub homepage: Option<String>,
    /// Dominant language. `None` means undetermined.
    pub language: Option<String>,
    pub star_count: u32,
    pub fork_count: u32,
}

impl RepositoryRecord {
    /// Whether a live demo link should be shown.
    #[inline]
    #[must_use]
    pub fn has_demo(&self) -> bool {
        self.homepage.is_some()
    }
}
