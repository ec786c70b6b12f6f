use super::{print_json, resolve_target, Context};
use crate::view;
use anyhow::{Context as _, Result};
use clap::Args;
use l10n_client::{fetch_entry, fetch_pull_request, Entry, EntryLocation, PullRequest, RepoRef};

#[derive(Debug, Args)]
pub struct PrArgs {
    /// Pull request number in the translation repository
    pub number: u64,

    /// Only show files of this locale (defaults to the locale of the first file)
    #[arg(long)]
    pub locale: Option<String>,

    /// Compare this file of the pull request against its source
    #[arg(long)]
    pub path: Option<String>,
}

/// Locale to review when none was requested
fn default_locale(pr: &PullRequest, fallback: &str) -> String {
    pr.files
        .first()
        .map(|f| f.locale.clone())
        .unwrap_or_else(|| fallback.to_string())
}

pub async fn run(ctx: &Context, args: PrArgs) -> Result<()> {
    let client = ctx.github()?;
    let repo = ctx.translation_repo();
    let pr = fetch_pull_request(&client, &repo, args.number)
        .await
        .with_context(|| format!("Failed to fetch PR #{} of {}", args.number, repo))?;

    let Some(path) = args.path else {
        let locale = args
            .locale
            .unwrap_or_else(|| default_locale(&pr, &ctx.preferences.locale));
        let files: Vec<_> = pr.files_for_locale(&locale).collect();

        if ctx.json {
            return print_json(&files);
        }

        println!("#{} {}", pr.pr_id, pr.title);
        println!("{}:{} · {} files for {}", pr.owner, pr.branch, files.len(), locale);
        println!();
        print!("{}", view::render_changed_files(&files));
        return Ok(());
    };

    let fallback = default_locale(&pr, &ctx.preferences.locale);
    let (path, locale) = resolve_target(&path, args.locale.as_deref(), &fallback);

    let localized_location = EntryLocation::new(
        RepoRef::new(pr.owner.clone(), repo.repo.clone()),
        pr.branch.clone(),
        &path,
        &locale,
    );
    let source_location = ctx.source_location(&path);

    let (localized, source) = tokio::join!(
        fetch_entry(&client, &localized_location),
        fetch_entry(&client, &source_location)
    );

    let mut problems = Vec::new();
    let localized = localized.unwrap_or_else(|e| {
        problems.push(format!("Localized file not found: {}", e));
        Entry::missing()
    });
    let source = source.unwrap_or_else(|e| {
        problems.push(format!("Source file not found: {}", e));
        Entry::missing()
    });
    if !problems.is_empty() {
        log::warn!("Some files not found for {}: {}", path, problems.join(", "));
        eprintln!("Some files not found: {}", problems.join(", "));
    }

    ctx.print_comparison(&locale, &path, &localized, &source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use l10n_client::ChangedFile;

    fn pr(locales: &[&str]) -> PullRequest {
        PullRequest {
            title: "t".to_string(),
            pr_id: 1,
            owner: "o".to_string(),
            branch: "b".to_string(),
            files: locales
                .iter()
                .map(|locale| ChangedFile {
                    path: "web/html".to_string(),
                    locale: locale.to_string(),
                    status: "modified".to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_default_locale_from_first_file() {
        assert_eq!(default_locale(&pr(&["ja", "zh-cn"]), "zh-cn"), "ja");
    }

    #[test]
    fn test_default_locale_without_files() {
        assert_eq!(default_locale(&pr(&[]), "zh-cn"), "zh-cn");
    }
}
