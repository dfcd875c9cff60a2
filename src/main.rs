//! CLI tool to list tokens, print style buffers, and dump syntax trees.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "synlens")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Highlight and parse C-like source files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List classified tokens, one `Kind: text` line each
    Tokens {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Print the per-byte style letters for each file
    Highlight {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Print the syntax tree as an indented outline
    Tree {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let files = cli.command.files();
    let mut had_error = false;

    for path in files {
        let content = match synlens::read_source(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("{e}");
                had_error = true;
                continue;
            }
        };

        debug!(path = %path.display(), bytes = content.len(), "read source");
        if files.len() > 1 {
            println!("==> {} <==", path.display());
        }
        print!("{}", cli.command.render(&content));
    }

    if had_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

impl Command {
    fn files(&self) -> &[PathBuf] {
        match self {
            Self::Tokens { files } | Self::Highlight { files } | Self::Tree { files } => files,
        }
    }

    fn render(&self, content: &str) -> String {
        match self {
            Self::Tokens { .. } => synlens::format_tokens(content, &synlens::classify(content)),
            Self::Highlight { .. } => {
                let mut out = synlens::style_string(&synlens::highlight_str(content));
                out.push('\n');
                out
            }
            Self::Tree { .. } => synlens::format_tree(&synlens::parse(content)),
        }
    }
}
