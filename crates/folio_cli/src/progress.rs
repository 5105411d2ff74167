//! Loading indicator for the projects listing.
//!
//! Two modes, picked by TTY detection:
//! - Interactive (TTY): an indicatif spinner while the fetch is in flight
//! - Logging (non-TTY): structured tracing events

use std::time::Duration;

use console::Term;
use folio::ListingState;
use folio::listing::LOADING_PLACEHOLDER_CARDS;
use indicatif::{ProgressBar, ProgressStyle};

/// Reports the listing's `Loading` state and its settlement.
pub enum LoadingIndicator {
    /// Spinner on stderr for TTY.
    Interactive(ProgressBar),
    /// Structured logging for non-TTY (CI, pipes).
    Logging,
}

impl LoadingIndicator {
    /// Start reporting, auto-detecting TTY mode.
    pub fn start(account: &str) -> Self {
        if Term::stderr().is_term() {
            let bar = ProgressBar::new_spinner();
            bar.set_style(Self::spinner_style());
            bar.set_prefix(account.to_string());
            bar.set_message(format!(
                "Loading projects ({} placeholders)",
                LOADING_PLACEHOLDER_CARDS
            ));
            bar.enable_steady_tick(Duration::from_millis(100));
            Self::Interactive(bar)
        } else {
            tracing::info!(account, "Loading projects");
            Self::Logging
        }
    }

    /// Report how the listing settled.
    ///
    /// A listing still `Loading` here was abandoned before the fetch settled.
    pub fn finish(&self, state: &ListingState) {
        let count = state.records().len();
        match self {
            Self::Interactive(bar) => match state {
                ListingState::Populated(_) => {
                    bar.finish_with_message(format!("✓ {} projects", count));
                }
                ListingState::Empty => bar.finish_with_message("✓ no projects"),
                ListingState::Loading => bar.abandon_with_message("✗ interrupted"),
            },
            Self::Logging => match state {
                ListingState::Loading => tracing::info!("Fetch interrupted"),
                _ => tracing::debug!(state = state.label(), count, "Listing ready to render"),
            },
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{prefix:.bold.cyan} {spinner:.green} {msg}")
            .expect("Invalid template")
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
    }
}
