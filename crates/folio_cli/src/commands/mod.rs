use clap::ValueEnum;
use serde::Deserialize;

pub(crate) mod colors;
pub(crate) mod meta;

#[cfg(feature = "github")]
pub(crate) mod projects;

/// Output format for listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum OutputFormat {
    /// Display as a formatted table (default)
    #[default]
    Table,
    /// Display as JSON
    Json,
}

/// Render rows as a rounded table.
pub(crate) fn table<T: tabled::Tabled>(rows: Vec<T>) -> String {
    let mut table = tabled::Table::new(rows);
    table.with(tabled::settings::Style::rounded());
    table.to_string()
}
