use super::{print_json, Context};
use crate::view;
use anyhow::{Context as _, Result};
use l10n_client::fetch_labels;

/// List every label of the translation repository
pub async fn run(ctx: &Context) -> Result<()> {
    let client = ctx.github()?;
    let repo = ctx.translation_repo();

    let labels = fetch_labels(&client, &repo)
        .await
        .with_context(|| format!("Failed to fetch labels of {}", repo))?;

    if ctx.json {
        return print_json(&labels);
    }
    print!("{}", view::render_labels(&labels));
    Ok(())
}
