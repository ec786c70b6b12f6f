use super::{resolve_target, Context};
use anyhow::{bail, Result};
use clap::Args;
use l10n_client::{fetch_entry, EntryLocation, RepoRef};

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Owner of the translation repository (a fork owner for unmerged work)
    #[arg(long)]
    pub owner: Option<String>,

    /// Branch of the translation repository
    #[arg(long, default_value = "main")]
    pub branch: String,

    /// Entry path, e.g. `web/api/fetch` or `files/zh-cn/web/api/fetch/index.md`
    #[arg(long)]
    pub path: String,

    /// Locale of the translation
    #[arg(long)]
    pub locale: Option<String>,
}

/// Fetch a translation and its source concurrently and show them side by side
pub async fn run(ctx: &Context, args: CompareArgs) -> Result<()> {
    let (path, locale) = resolve_target(&args.path, args.locale.as_deref(), &ctx.preferences.locale);
    if path.is_empty() || locale.is_empty() {
        bail!("Both a path and a locale are required");
    }

    let translation = ctx.translation_repo();
    let owner = args.owner.unwrap_or(translation.owner);
    let localized_location =
        EntryLocation::new(RepoRef::new(owner, translation.repo), args.branch, &path, &locale);
    let source_location = ctx.source_location(&path);

    let client = ctx.github()?;
    let (localized, source) = tokio::join!(
        fetch_entry(&client, &localized_location),
        fetch_entry(&client, &source_location)
    );

    match (localized, source) {
        (Ok(localized), Ok(source)) => {
            log::info!("Entries fetched for {} ({})", path, locale);
            ctx.print_comparison(&locale, &path, &localized, &source)
        }
        (localized, source) => {
            if let Err(e) = &localized {
                eprintln!(
                    "Failed to fetch localized entry {}: {}",
                    localized_location.file_path(),
                    e
                );
            }
            if let Err(e) = &source {
                eprintln!(
                    "Failed to fetch source entry {}: {}",
                    source_location.file_path(),
                    e
                );
            }
            bail!("Could not compare {} ({})", path, locale)
        }
    }
}
