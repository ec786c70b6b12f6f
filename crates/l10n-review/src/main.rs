use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use l10n_config::Preferences;
use l10n_diff::{AlignOptions, SplitMethod};
use std::path::PathBuf;

mod commands;
mod logger;
mod view;

use commands::{
    compare::CompareArgs, pending::PendingArgs, pr::PrArgs, search::SearchArgs, Context,
};

const DEFAULT_WIDTH: usize = 120;

/// Review localized documentation side by side with its English source
#[derive(Parser, Debug)]
#[command(name = "l10n-review", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Split content per line (`single`) or per paragraph (`double`)
    #[arg(long, global = true)]
    split: Option<SplitMethod>,

    /// Do not split Markdown list items into separate rows
    #[arg(long, global = true)]
    no_md_lists: bool,

    /// Do not split blockquotes on their empty `>` lines
    #[arg(long, global = true)]
    no_md_blockquotes: bool,

    /// Total output width (defaults to $COLUMNS, then 120)
    #[arg(long, global = true)]
    width: Option<usize>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Preferences file to use instead of the default lookup
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compare a translated entry with its source
    Compare(CompareArgs),
    /// List the localized files of a pull request, or compare one of them
    Pr(PrArgs),
    /// Search open pull requests of the translation repository
    Search(SearchArgs),
    /// List labels of the translation repository
    Labels,
    /// Review pending local changes from the companion backend
    Pending(PendingArgs),
}

impl Cli {
    /// Command line flags layered over the preference file settings
    fn align_options(&self, base: &AlignOptions) -> AlignOptions {
        AlignOptions {
            split_method: self.split.unwrap_or(base.split_method),
            markdown_lists: base.markdown_lists && !self.no_md_lists,
            markdown_blockquotes: base.markdown_blockquotes && !self.no_md_blockquotes,
        }
    }

    fn output_width(&self) -> usize {
        self.width
            .or_else(|| std::env::var("COLUMNS").ok()?.trim().parse().ok())
            .unwrap_or(DEFAULT_WIDTH)
    }
}

/// Load a `.env` file unless a token is already in the environment
fn load_dotenv() {
    if std::env::var("GITHUB_TOKEN").is_err() {
        match dotenvy::dotenv() {
            Ok(path) => {
                log::debug!("Loaded .env file from: {:?}", path);
            }
            Err(_) => {
                log::debug!(".env file not found, will rely on environment variables");
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init();
    load_dotenv();

    let preferences = match &cli.config {
        Some(path) => Preferences::load_from(path)
            .with_context(|| format!("Failed to load preferences from {}", path.display()))?,
        None => Preferences::load(),
    };

    let ctx = Context {
        options: cli.align_options(&preferences.compare),
        width: cli.output_width(),
        json: cli.json,
        preferences,
    };
    log::debug!("Alignment options: {:?}", ctx.options);

    match cli.command {
        Command::Compare(args) => commands::compare::run(&ctx, args).await,
        Command::Pr(args) => commands::pr::run(&ctx, args).await,
        Command::Search(args) => commands::search::run(&ctx, args).await,
        Command::Labels => commands::labels::run(&ctx).await,
        Command::Pending(args) => commands::pending::run(&ctx, args).await,
    }
}
