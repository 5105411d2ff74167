use folio::language::{FALLBACK_COLOR, color_for, known_languages};
use serde::Serialize;

use super::{OutputFormat, table};

/// One language/token pair for display.
#[derive(Debug, Clone, Serialize, tabled::Tabled)]
pub(crate) struct ColorRow {
    #[tabled(rename = "Language")]
    pub language: String,
    #[tabled(rename = "Token")]
    pub token: &'static str,
}

/// Print the token for a single language.
pub(crate) fn handle_color(language: &str) {
    println!("{}", color_for(Some(language)));
}

/// Print the whole language table, fallback last.
pub(crate) fn handle_colors(output: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", render_colors(output)?);
    Ok(())
}

fn color_rows() -> Vec<ColorRow> {
    known_languages()
        .map(|(language, token)| ColorRow {
            language: language.to_string(),
            token,
        })
        .chain(std::iter::once(ColorRow {
            language: "(other)".to_string(),
            token: FALLBACK_COLOR,
        }))
        .collect()
}

pub(crate) fn render_colors(output: OutputFormat) -> Result<String, serde_json::Error> {
    let rows = color_rows();
    match output {
        OutputFormat::Table => Ok(table(rows)),
        OutputFormat::Json => serde_json::to_string_pretty(&rows),
    }
}
