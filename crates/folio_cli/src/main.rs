//! Folio CLI - terminal front-end for the portfolio projects gallery.

mod commands;
mod config;
#[cfg(feature = "github")]
mod progress;
#[cfg(feature = "github")]
mod shutdown;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::commands::OutputFormat;

#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Projects gallery for a personal portfolio site")]
#[command(
    long_about = "Folio lists the most recently updated public GitHub repositories of the \
portfolio account, the same listing the portfolio's projects gallery renders, and \
resolves the color token used for each repository's language."
)]
#[command(after_long_help = r#"EXAMPLES
    Show the projects gallery:
        $ folio projects

    Emit the gallery as JSON:
        $ folio projects --output json

    Look up a language color:
        $ folio color TypeScript

CONFIGURATION
    Folio reads configuration from:
      1. ~/.config/folio/config.toml (or $XDG_CONFIG_HOME/folio/config.toml)
      2. ./folio.toml
      3. Environment variables (FOLIO_* prefix)
      4. .env file in current directory

ENVIRONMENT VARIABLES
    FOLIO_API_URL        GitHub API root (default: https://api.github.com)
    FOLIO_OUTPUT_FORMAT  Default output format: table or json
    FOLIO_LOG_FILTER     Log filter when RUST_LOG is unset
"#)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch and show the projects gallery
    #[cfg(feature = "github")]
    Projects {
        /// Output format (default from config or table)
        #[arg(short, long, value_enum)]
        output: Option<OutputFormat>,
    },
    /// Print the color token for a language
    Color {
        /// Language name, matched exactly (e.g. "TypeScript", "C#")
        language: String,
    },
    /// Print every known language and its color token
    Colors {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        output: OutputFormat,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
    /// Generate man page(s)
    Man {
        /// Output directory for man pages (prints to stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let (config, config_error) = match config::Config::try_load() {
        Ok(config) => (config, None),
        Err(e) => (config::Config::default(), Some(e)),
    };

    // Logs go to stderr; stdout carries the rendered output.
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(config.log_filter())
            .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_FILTER)),
    };
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Some(e) = config_error {
        tracing::warn!("Failed to load config, using defaults: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        #[cfg(feature = "github")]
        Commands::Projects { output } => {
            let output = output.unwrap_or(config.output.format);
            commands::projects::handle_projects(output, &config).await?;
        }
        Commands::Color { language } => commands::colors::handle_color(&language),
        Commands::Colors { output } => commands::colors::handle_colors(output)?,
        Commands::Completions { shell } => commands::meta::handle_completions(shell)?,
        Commands::Man { output } => commands::meta::handle_man(output)?,
    }

    Ok(())
}
