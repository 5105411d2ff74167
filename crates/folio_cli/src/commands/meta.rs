//! Shell completions and man pages.

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::CommandFactory;

use crate::Cli;

const BIN_NAME: &str = "folio";

/// Write the completion script for `shell` into `out`.
fn write_completions(shell: clap_complete::Shell, out: &mut impl Write) {
    clap_complete::generate(shell, &mut Cli::command(), BIN_NAME, out);
}

/// Write the top-level man page into `out`.
fn write_man_page(out: &mut impl Write) -> std::io::Result<()> {
    clap_mangen::Man::new(Cli::command()).render(out)
}

/// Write man pages for the binary and every subcommand into `dir`.
fn write_man_pages(dir: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(dir)?;
    clap_mangen::generate_to(Cli::command(), dir)
}

pub(crate) fn handle_completions(
    shell: clap_complete::Shell,
) -> Result<(), Box<dyn std::error::Error>> {
    write_completions(shell, &mut std::io::stdout().lock());
    Ok(())
}

pub(crate) fn handle_man(output: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    match output {
        Some(dir) => {
            write_man_pages(&dir)?;
            println!("Generated man pages in: {}", dir.display());
        }
        None => write_man_page(&mut std::io::stdout().lock())?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zsh_completions_name_the_binary_and_subcommands() {
        let mut out = Vec::new();
        write_completions(clap_complete::Shell::Zsh, &mut out);
        let script = String::from_utf8(out).expect("completion output should be UTF-8");

        assert!(script.contains("#compdef folio"));
        assert!(script.contains("colors"));
    }

    #[test]
    fn man_page_has_title_and_about() {
        let mut out = Vec::new();
        write_man_page(&mut out).expect("man rendering should succeed");
        let page = String::from_utf8(out).expect("man output should be UTF-8");

        assert!(page.to_lowercase().contains(".th folio"));
        assert!(page.contains("portfolio"));
    }

    #[test]
    fn man_pages_are_written_per_subcommand() {
        let dir = std::env::temp_dir().join(format!("folio-man-{}", std::process::id()));

        write_man_pages(&dir).expect("man page generation should succeed");

        let pages = std::fs::read_dir(&dir)
            .expect("output directory should exist")
            .count();
        assert!(pages > 1, "expected one page per subcommand, got {pages}");

        std::fs::remove_dir_all(&dir).expect("test output directory should be removable");
    }
}
