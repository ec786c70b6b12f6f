use super::{print_json, Context};
use crate::view;
use anyhow::{Context as _, Result};
use clap::{Args, ValueEnum};
use l10n_client::{search_open_pull_requests, SearchOptions, SearchSort, SortOrder};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SortArg {
    Created,
    Updated,
}

impl From<SortArg> for SearchSort {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Created => SearchSort::Created,
            SortArg::Updated => SearchSort::Updated,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OrderArg {
    Asc,
    Desc,
}

impl From<OrderArg> for SortOrder {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Asc => SortOrder::Asc,
            OrderArg::Desc => SortOrder::Desc,
        }
    }
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Only pull requests opened by this user
    #[arg(long)]
    pub author: Option<String>,

    /// Only pull requests carrying this label (repeatable)
    #[arg(long = "label")]
    pub labels: Vec<String>,

    #[arg(long, value_enum, default_value_t = SortArg::Updated)]
    pub sort: SortArg,

    #[arg(long, value_enum, default_value_t = OrderArg::Desc)]
    pub order: OrderArg,

    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,

    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u32).range(1..=100))]
    pub per_page: u32,
}

impl From<SearchArgs> for SearchOptions {
    fn from(args: SearchArgs) -> Self {
        Self {
            author: args.author,
            labels: args.labels,
            sort: args.sort.into(),
            order: args.order.into(),
            page: args.page,
            per_page: args.per_page,
        }
    }
}

/// List open pull requests of the translation repository
pub async fn run(ctx: &Context, args: SearchArgs) -> Result<()> {
    let client = ctx.github()?;
    let repo = ctx.translation_repo();
    let options = SearchOptions::from(args);

    let results = search_open_pull_requests(&client, &repo, &options)
        .await
        .with_context(|| format!("Failed to search pull requests of {}", repo))?;

    if ctx.json {
        return print_json(&results);
    }

    if results.is_empty() {
        println!("No open pull requests found (page {})", options.page);
        return Ok(());
    }
    print!("{}", view::render_search_results(&results));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_args_into_options() {
        let args = SearchArgs {
            author: Some("alice".to_string()),
            labels: vec!["l10n-zh".to_string()],
            sort: SortArg::Created,
            order: OrderArg::Asc,
            page: 3,
            per_page: 50,
        };
        let options = SearchOptions::from(args);
        assert_eq!(options.author.as_deref(), Some("alice"));
        assert_eq!(options.sort, SearchSort::Created);
        assert_eq!(options.order, SortOrder::Asc);
        assert_eq!(options.page, 3);
        assert_eq!(options.per_page, 50);
    }
}
