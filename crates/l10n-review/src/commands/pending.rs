use super::{print_json, resolve_target, Context};
use crate::view;
use anyhow::{Context as _, Result};
use clap::Args;
use l10n_client::BackendClient;

#[derive(Debug, Args)]
pub struct PendingArgs {
    /// Locale of the pending changes
    #[arg(long)]
    pub locale: Option<String>,

    /// Compare this pending change instead of listing all of them
    #[arg(long)]
    pub path: Option<String>,
}

/// Review pending local changes served by the companion backend
pub async fn run(ctx: &Context, args: PendingArgs) -> Result<()> {
    let backend = BackendClient::new(Some(&ctx.preferences.backend_url));
    log::debug!("Using backend at {}", backend.base_url());

    let Some(path) = args.path else {
        let locale = args.locale.unwrap_or_else(|| ctx.preferences.locale.clone());
        let changes = backend
            .fetch_changes(&locale)
            .await
            .with_context(|| format!("Backend at {} unavailable", backend.base_url()))?;

        if ctx.json {
            return print_json(&changes);
        }
        if changes.is_empty() {
            println!("No pending changes for {}", locale);
            return Ok(());
        }
        print!("{}", view::render_changes(&changes));
        return Ok(());
    };

    let (path, locale) = resolve_target(&path, args.locale.as_deref(), &ctx.preferences.locale);
    let diff = backend
        .fetch_diff(&locale, &path)
        .await
        .with_context(|| format!("Backend at {} unavailable", backend.base_url()))?;

    if !diff.translation.exists {
        eprintln!("Translation of {} does not exist yet", path);
    }
    if !diff.source.exists {
        eprintln!("Source of {} does not exist", path);
    }

    let (localized, source) = diff.into_entries();
    ctx.print_comparison(&locale, &path, &localized, &source)
}
