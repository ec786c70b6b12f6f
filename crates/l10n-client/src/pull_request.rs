//! Pull request retrieval, search and labels
//!
//! Only the parts of a pull request that matter for translation review are
//! kept: where the head lives (owner and branch) and which localized entries
//! it touches.

use crate::client::{GitHubApi, SearchRequest};
use crate::error::GitHubError;
use crate::path::decompose;
use crate::types::{Label, RepoRef, SearchItem, SearchSort, SortOrder};
use chrono::{DateTime, Utc};
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Page size used for the changed-file listing (one request, no paging)
pub const PR_FILES_PAGE_SIZE: u32 = 3000;

/// Page size for label listing
pub const LABELS_PAGE_SIZE: u32 = 100;

/// Upper bound on label pages fetched
pub const MAX_LABEL_PAGES: u32 = 10;

/// A changed localized entry of a pull request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangedFile {
    /// Logical path below the locale
    pub path: String,
    pub locale: String,
    /// GitHub file status (`added`, `modified`, `removed`, ...)
    pub status: String,
}

/// A pull request reduced to what translation review needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequest {
    pub title: String,
    pub pr_id: u64,
    /// Owner of the head repository
    pub owner: String,
    /// Head branch
    pub branch: String,
    /// Localized entries touched by the PR; other files are dropped
    pub files: Vec<ChangedFile>,
}

impl PullRequest {
    /// Files of one locale, compared ASCII case-insensitively
    pub fn files_for_locale<'a>(&'a self, locale: &'a str) -> impl Iterator<Item = &'a ChangedFile> {
        self.files
            .iter()
            .filter(move |f| f.locale.eq_ignore_ascii_case(locale))
    }
}

/// Search result projection of an open pull request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrSummary {
    pub number: u64,
    pub title: String,
    /// Author login, empty when GitHub reports no user
    pub author: String,
    pub labels: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<SearchItem> for PrSummary {
    fn from(item: SearchItem) -> Self {
        Self {
            number: item.number,
            title: item.title,
            author: item.user.map(|u| u.login).unwrap_or_default(),
            labels: item.labels.iter().map(|l| l.name().to_string()).collect(),
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}

/// Filters and paging for [`search_open_pull_requests`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    pub author: Option<String>,
    pub labels: Vec<String>,
    pub sort: SearchSort,
    pub order: SortOrder,
    pub page: u32,
    pub per_page: u32,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            author: None,
            labels: Vec::new(),
            sort: SearchSort::Updated,
            order: SortOrder::Desc,
            page: 1,
            per_page: 30,
        }
    }
}

/// Fetch a pull request and classify its changed files
pub async fn fetch_pull_request<C>(
    client: &C,
    repo: &RepoRef,
    pr_id: u64,
) -> Result<PullRequest, GitHubError>
where
    C: GitHubApi + ?Sized,
{
    let details = client.get_pull_request(repo, pr_id).await?;
    let owner = details
        .head
        .repo
        .map(|r| r.owner.login)
        .ok_or_else(|| GitHubError::Unknown("head repository of the pull request is gone".into()))?;

    let changed = client
        .list_pull_request_files(repo, pr_id, PR_FILES_PAGE_SIZE)
        .await?;
    let total = changed.len();

    let files: Vec<ChangedFile> = changed
        .into_iter()
        .filter_map(|file| {
            let decomposed = decompose(&file.filename);
            if decomposed.is_none() {
                debug!("Skipping non-content file {}", file.filename);
            }
            decomposed.map(|d| ChangedFile {
                path: d.path,
                locale: d.locale,
                status: file.status,
            })
        })
        .collect();

    info!(
        "PR #{} in {}: {} of {} changed files are localized entries",
        pr_id,
        repo,
        files.len(),
        total
    );

    Ok(PullRequest {
        title: details.title,
        pr_id,
        owner,
        branch: details.head.ref_field,
        files,
    })
}

/// Build the issue search query for open pull requests of `repo`
pub fn build_search_query(repo: &RepoRef, options: &SearchOptions) -> String {
    let mut query = format!("repo:{} is:pr is:open", repo);

    if let Some(author) = options.author.as_deref().map(str::trim) {
        if !author.is_empty() {
            query.push_str(&format!(" author:{}", author));
        }
    }

    for label in options.labels.iter().map(|l| l.trim()) {
        if label.is_empty() {
            continue;
        }
        if label.chars().any(char::is_whitespace) {
            query.push_str(&format!(" label:\"{}\"", label));
        } else {
            query.push_str(&format!(" label:{}", label));
        }
    }

    query
}

/// Search open pull requests; returns exactly one page of results
pub async fn search_open_pull_requests<C>(
    client: &C,
    repo: &RepoRef,
    options: &SearchOptions,
) -> Result<Vec<PrSummary>, GitHubError>
where
    C: GitHubApi + ?Sized,
{
    let request = SearchRequest {
        query: build_search_query(repo, options),
        sort: options.sort,
        order: options.order,
        page: options.page,
        per_page: options.per_page,
    };

    let items = client.search_issues(&request).await?;
    debug!("Search '{}' returned {} items", request.query, items.len());
    Ok(items.into_iter().map(PrSummary::from).collect())
}

/// Fetch every label of `repo`, sorted by name ignoring case
pub async fn fetch_labels<C>(client: &C, repo: &RepoRef) -> Result<Vec<Label>, GitHubError>
where
    C: GitHubApi + ?Sized,
{
    let mut all = Vec::new();

    for page in 1..=MAX_LABEL_PAGES {
        let batch = client.list_labels(repo, page, LABELS_PAGE_SIZE).await?;
        let short_page = batch.len() < LABELS_PAGE_SIZE as usize;
        all.extend(batch);
        if short_page {
            break;
        }
    }

    all.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.name.cmp(&b.name))
    });
    debug!("Fetched {} labels for {}", all.len(), repo);
    Ok(all)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::FakeGitHub;
    use crate::types::{Account, HeadRepository, PullDetails, PullFile, PullHead, SearchLabel};
    use pretty_assertions::assert_eq;

    fn repo() -> RepoRef {
        RepoRef::new("mdn", "translated-content")
    }

    fn details(number: u64, owner: Option<&str>) -> PullDetails {
        PullDetails {
            number,
            title: "[zh-cn]: sync fetch docs".to_string(),
            head: PullHead {
                ref_field: "sync-fetch".to_string(),
                repo: owner.map(|login| HeadRepository {
                    owner: Account {
                        login: login.to_string(),
                    },
                }),
            },
        }
    }

    fn file(name: &str, status: &str) -> PullFile {
        PullFile {
            filename: name.to_string(),
            status: status.to_string(),
        }
    }

    #[tokio::test]
    async fn test_fetch_pull_request_keeps_only_content_files() {
        let fake = FakeGitHub::default().with_pull(
            &repo(),
            details(101, Some("translator")),
            vec![
                file("files/zh-cn/web/api/fetch/index.md", "modified"),
                file("README.md", "modified"),
                file("files/zh-cn/web/api/fetch/diagram.svg", "added"),
                file("files/ja/glossary/api/index.md", "added"),
            ],
        );

        let pr = fetch_pull_request(&fake, &repo(), 101).await.unwrap();

        assert_eq!(pr.title, "[zh-cn]: sync fetch docs");
        assert_eq!(pr.pr_id, 101);
        assert_eq!(pr.owner, "translator");
        assert_eq!(pr.branch, "sync-fetch");
        assert_eq!(
            pr.files,
            vec![
                ChangedFile {
                    path: "web/api/fetch".to_string(),
                    locale: "zh-cn".to_string(),
                    status: "modified".to_string(),
                },
                ChangedFile {
                    path: "glossary/api".to_string(),
                    locale: "ja".to_string(),
                    status: "added".to_string(),
                },
            ]
        );
        assert_eq!(fake.file_page_sizes(), vec![PR_FILES_PAGE_SIZE]);
    }

    #[tokio::test]
    async fn test_fetch_pull_request_not_found() {
        let fake = FakeGitHub::default();
        assert_eq!(
            fetch_pull_request(&fake, &repo(), 1).await,
            Err(GitHubError::NotFound)
        );
    }

    #[tokio::test]
    async fn test_fetch_pull_request_forbidden() {
        let fake = FakeGitHub::default().failing_with(GitHubError::Forbidden);
        assert_eq!(
            fetch_pull_request(&fake, &repo(), 1).await,
            Err(GitHubError::Forbidden)
        );
    }

    #[tokio::test]
    async fn test_fetch_pull_request_deleted_fork() {
        let fake = FakeGitHub::default().with_pull(&repo(), details(5, None), vec![]);
        assert!(matches!(
            fetch_pull_request(&fake, &repo(), 5).await,
            Err(GitHubError::Unknown(_))
        ));
    }

    #[test]
    fn test_files_for_locale_ignores_case() {
        let pr = PullRequest {
            title: String::new(),
            pr_id: 1,
            owner: "o".to_string(),
            branch: "b".to_string(),
            files: vec![
                ChangedFile {
                    path: "a".to_string(),
                    locale: "zh-CN".to_string(),
                    status: "added".to_string(),
                },
                ChangedFile {
                    path: "b".to_string(),
                    locale: "ja".to_string(),
                    status: "added".to_string(),
                },
            ],
        };
        let paths: Vec<&str> = pr.files_for_locale("zh-cn").map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["a"]);
    }

    #[test]
    fn test_build_search_query_minimal() {
        assert_eq!(
            build_search_query(&repo(), &SearchOptions::default()),
            "repo:mdn/translated-content is:pr is:open"
        );
    }

    #[test]
    fn test_build_search_query_with_filters() {
        let options = SearchOptions {
            author: Some("  someone ".to_string()),
            labels: vec![
                "l10n-zh".to_string(),
                " needs review ".to_string(),
                "   ".to_string(),
            ],
            ..SearchOptions::default()
        };
        assert_eq!(
            build_search_query(&repo(), &options),
            "repo:mdn/translated-content is:pr is:open author:someone label:l10n-zh label:\"needs review\""
        );
    }

    #[test]
    fn test_build_search_query_blank_author() {
        let options = SearchOptions {
            author: Some("   ".to_string()),
            ..SearchOptions::default()
        };
        assert_eq!(
            build_search_query(&repo(), &options),
            "repo:mdn/translated-content is:pr is:open"
        );
    }

    #[tokio::test]
    async fn test_search_open_pull_requests() {
        let created = "2025-03-01T10:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let updated = "2025-03-02T10:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let fake = FakeGitHub::default().with_search_items(vec![
            SearchItem {
                number: 12,
                title: "[ja]: fix typo".to_string(),
                user: Some(Account {
                    login: "alice".to_string(),
                }),
                labels: vec![SearchLabel::Object {
                    name: "l10n-ja".to_string(),
                }],
                created_at: created,
                updated_at: updated,
            },
            SearchItem {
                number: 13,
                title: "ghost".to_string(),
                user: None,
                labels: vec![SearchLabel::Name("plain".to_string())],
                created_at: created,
                updated_at: updated,
            },
        ]);
        let options = SearchOptions {
            author: Some("alice".to_string()),
            sort: SearchSort::Created,
            order: SortOrder::Asc,
            page: 2,
            per_page: 50,
            ..SearchOptions::default()
        };

        let results = search_open_pull_requests(&fake, &repo(), &options)
            .await
            .unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].author, "alice");
        assert_eq!(results[0].labels, vec!["l10n-ja".to_string()]);
        assert_eq!(results[1].author, "");
        assert_eq!(results[1].labels, vec!["plain".to_string()]);

        let searches = fake.searches();
        assert_eq!(searches.len(), 1);
        assert_eq!(
            searches[0],
            SearchRequest {
                query: "repo:mdn/translated-content is:pr is:open author:alice".to_string(),
                sort: SearchSort::Created,
                order: SortOrder::Asc,
                page: 2,
                per_page: 50,
            }
        );
    }

    fn labels(count: usize) -> Vec<Label> {
        (0..count)
            .map(|i| Label {
                name: format!("label-{:04}", count - i),
                color: "ededed".to_string(),
            })
            .collect()
    }

    #[tokio::test]
    async fn test_fetch_labels_stops_on_short_page() {
        let fake = FakeGitHub::default().with_labels(labels(150));

        let all = fetch_labels(&fake, &repo()).await.unwrap();

        assert_eq!(all.len(), 150);
        assert_eq!(fake.label_pages(), vec![1, 2]);
        assert_eq!(all.first().unwrap().name, "label-0001");
        assert_eq!(all.last().unwrap().name, "label-0150");
    }

    #[tokio::test]
    async fn test_fetch_labels_exact_page_boundary() {
        let fake = FakeGitHub::default().with_labels(labels(200));

        let all = fetch_labels(&fake, &repo()).await.unwrap();

        assert_eq!(all.len(), 200);
        // the empty third page is what ends the loop
        assert_eq!(fake.label_pages(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_fetch_labels_page_bound() {
        let fake = FakeGitHub::default().with_labels(labels(1500));

        let all = fetch_labels(&fake, &repo()).await.unwrap();

        assert_eq!(all.len(), 1000);
        assert_eq!(fake.label_pages(), (1..=10).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn test_fetch_labels_sorted_by_name() {
        let fake = FakeGitHub::default().with_labels(vec![
            Label {
                name: "zh".to_string(),
                color: "1".to_string(),
            },
            Label {
                name: "Ja".to_string(),
                color: "2".to_string(),
            },
            Label {
                name: "de".to_string(),
                color: "3".to_string(),
            },
            Label {
                name: "ja".to_string(),
                color: "4".to_string(),
            },
        ]);

        let names: Vec<String> = fetch_labels(&fake, &repo())
            .await
            .unwrap()
            .into_iter()
            .map(|l| l.name)
            .collect();
        assert_eq!(names, vec!["de", "Ja", "ja", "zh"]);
    }
}
