use folio::github::GitHubClient;
use folio::listing::{EMPTY_MESSAGE, LOADING_PLACEHOLDER_CARDS};
use folio::{ListingState, ProjectCard, ProjectListing};
use serde::Serialize;

use super::{OutputFormat, table};
use crate::config::Config;
use crate::progress::LoadingIndicator;
use crate::shutdown;

/// One project card as a table row.
#[derive(Debug, Clone, tabled::Tabled)]
pub(crate) struct ProjectRow {
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Language")]
    pub language: String,
    #[tabled(rename = "Color")]
    pub color: String,
    #[tabled(rename = "Stars")]
    pub stars: u32,
    #[tabled(rename = "Forks")]
    pub forks: u32,
    #[tabled(rename = "Description")]
    pub description: String,
    #[tabled(rename = "Links")]
    pub links: String,
}

impl From<&ProjectCard> for ProjectRow {
    fn from(card: &ProjectCard) -> Self {
        let links = match &card.demo_url {
            Some(demo) => format!("{}\n{}", card.repo_url, demo),
            None => card.repo_url.clone(),
        };
        Self {
            name: card.name.clone(),
            language: card.language_label.clone(),
            // Only languages get a swatch.
            color: card
                .language
                .as_ref()
                .map(|_| card.color.to_string())
                .unwrap_or_default(),
            stars: card.stars,
            forks: card.forks,
            description: card.description.clone(),
            links,
        }
    }
}

/// JSON shape of a rendered listing.
#[derive(Debug, Serialize)]
struct ListingView<'a> {
    state: &'static str,
    profile_url: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'static str>,
    projects: Vec<ProjectCard>,
}

/// Build the client from configuration.
pub(crate) fn client_from_config(config: &Config) -> GitHubClient {
    let client = GitHubClient::new();
    match &config.api.url {
        Some(url) => {
            tracing::debug!(api_url = %url, "Using configured API root");
            client.with_base_url(url)
        }
        None => client,
    }
}

/// Mount the listing once and print whatever it settles into.
pub(crate) async fn handle_projects(
    output: OutputFormat,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let client = client_from_config(config);
    let mut listing = ProjectListing::new();
    let mount = listing.mount_handle();

    let indicator = LoadingIndicator::start(client.account());

    let state = tokio::select! {
        state = listing.mount(&client) => state.clone(),
        _ = shutdown::interrupted() => {
            mount.unmount();
            indicator.finish(&ListingState::Loading);
            return Ok(());
        }
    };

    indicator.finish(&state);
    println!("{}", render_listing(&state, &client.profile_url(), output)?);
    Ok(())
}

/// Render a listing state in the requested format.
pub(crate) fn render_listing(
    state: &ListingState,
    profile_url: &str,
    output: OutputFormat,
) -> Result<String, serde_json::Error> {
    match output {
        OutputFormat::Json => {
            let message = matches!(state, ListingState::Empty).then_some(EMPTY_MESSAGE);
            serde_json::to_string_pretty(&ListingView {
                state: state.label(),
                profile_url,
                message,
                projects: state.cards(),
            })
        }
        OutputFormat::Table => Ok(match state {
            ListingState::Loading => format!(
                "Loading projects... ({} placeholders)",
                LOADING_PLACEHOLDER_CARDS
            ),
            ListingState::Empty => {
                format!("{}\n\nView all projects: {}", EMPTY_MESSAGE, profile_url)
            }
            ListingState::Populated(_) => {
                let rows: Vec<ProjectRow> = state.cards().iter().map(ProjectRow::from).collect();
                format!("{}\n\nView all projects: {}", table(rows), profile_url)
            }
        }),
    }
}
