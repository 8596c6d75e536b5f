use super::client::{Client, HostingApiResult};
use crate::Result;
use crate::facts::snapshot::{CommunityProfile, Commit, ContentEntry, Contributor, Issue, PullRequest, RepoInfo, RepoSnapshot};
use crate::facts::{FetchError, Progress, ProviderResult, RepoSpec};
use core::sync::atomic::{AtomicU64, Ordering};
use core::time::Duration;
use ohno::EnrichableExt;
use serde::de::DeserializeOwned;
use std::sync::Arc;

const LOG_TARGET: &str = "   hosting";

/// The repository record plus the six optional sections.
const TOTAL_REQUESTS: u64 = 7;

/// Fetches everything needed to score one GitHub repository.
#[derive(Debug, Clone)]
pub struct Provider {
    client: Client,
    page_size: u8,
}

impl Provider {
    pub fn new(github_token: Option<&str>, base_url: &str, page_size: u8, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: Client::new(github_token, base_url, timeout)?,
            page_size,
        })
    }

    /// Assemble a snapshot of the repository.
    ///
    /// Only the repository record is mandatory. The other sections are fetched
    /// concurrently and any of them that fail are recorded as missing.
    pub async fn get_snapshot(&self, repo_spec: &RepoSpec, progress: &dyn Progress) -> Result<RepoSnapshot, FetchError> {
        let completed = Arc::new(AtomicU64::new(0));
        let name = repo_spec.full_name();

        progress.set_phase("Fetching");
        progress.set_determinate({
            let completed = Arc::clone(&completed);
            Box::new(move || (TOTAL_REQUESTS, completed.load(Ordering::Relaxed), name.clone()))
        });

        log::info!(target: LOG_TARGET, "Querying GitHub for information on repository '{repo_spec}'");

        let repo = self.get_repo_info(repo_spec).await?;
        let _ = completed.fetch_add(1, Ordering::Relaxed);

        let page = self.page_size;
        let issues_query = format!("/issues?state=all&per_page={page}");
        let pulls_query = format!("/pulls?state=all&per_page={page}");
        let commits_query = format!("/commits?per_page={page}");
        let contributors_query = format!("/contributors?per_page={page}");

        let (contents, issues, pulls, commits, contributors, community) = tokio::join!(
            self.fetch_section::<Vec<ContentEntry>>(repo_spec, "contents", "/contents", &completed),
            self.fetch_section::<Vec<Issue>>(repo_spec, "issues", &issues_query, &completed),
            self.fetch_section::<Vec<PullRequest>>(repo_spec, "pull requests", &pulls_query, &completed),
            self.fetch_section::<Vec<Commit>>(repo_spec, "commits", &commits_query, &completed),
            self.fetch_section::<Vec<Contributor>>(repo_spec, "contributors", &contributors_query, &completed),
            self.fetch_section::<CommunityProfile>(repo_spec, "community profile", "/community/profile", &completed),
        );

        log::debug!(
            target: LOG_TARGET,
            "Completed {} GitHub API request(s) for repository '{repo_spec}'",
            completed.load(Ordering::Relaxed)
        );

        Ok(RepoSnapshot {
            repo: ProviderResult::Found(repo),
            contents,
            issues,
            pulls,
            commits,
            contributors,
            community,
        })
    }

    /// Construct API URL for a repository with optional path suffix
    fn repo_url(&self, repo_spec: &RepoSpec, suffix: &str) -> String {
        format!("{}/repos/{}/{}{suffix}", self.client.base_url(), repo_spec.owner(), repo_spec.repo())
    }

    async fn get_repo_info(&self, repo_spec: &RepoSpec) -> Result<RepoInfo, FetchError> {
        let url = self.repo_url(repo_spec, "");

        match self.client.get_json::<RepoInfo>(&url).await {
            HostingApiResult::Success(info) => Ok(info),
            HostingApiResult::NotFound => {
                log::debug!(target: LOG_TARGET, "Repository '{repo_spec}' not found");
                Err(FetchError::NotFound(repo_spec.clone()))
            }
            HostingApiResult::RateLimited(rate_limit) => {
                log::warn!(target: LOG_TARGET, "Hit GitHub rate limit for repository '{repo_spec}'");
                Err(FetchError::AccessDenied {
                    reset_at: rate_limit.map(|rl| rl.reset_at),
                })
            }
            HostingApiResult::Failed(e) => Err(FetchError::Failed(
                e.enrich_with(|| format!("fetching core info for repository '{repo_spec}'")),
            )),
        }
    }

    async fn fetch_section<T: DeserializeOwned>(
        &self,
        repo_spec: &RepoSpec,
        section: &str,
        suffix: &str,
        completed: &AtomicU64,
    ) -> ProviderResult<T> {
        let url = self.repo_url(repo_spec, suffix);
        let result = self.client.get_json::<T>(&url).await;
        let _ = completed.fetch_add(1, Ordering::Relaxed);

        match result {
            HostingApiResult::Success(data) => ProviderResult::Found(data),
            HostingApiResult::NotFound => {
                log::warn!(target: LOG_TARGET, "No {section} available for '{repo_spec}'");
                ProviderResult::Unavailable(format!("{section} not found").into())
            }
            HostingApiResult::RateLimited(_) => {
                log::warn!(target: LOG_TARGET, "Hit GitHub rate limit while fetching {section} for '{repo_spec}'");
                ProviderResult::Error(Arc::new(ohno::app_err!("rate limited while fetching {section}")))
            }
            HostingApiResult::Failed(e) => {
                log::warn!(target: LOG_TARGET, "Could not fetch {section} for '{repo_spec}': {e:#}");
                ProviderResult::Error(Arc::new(e.enrich_with(|| format!("fetching {section} for repository '{repo_spec}'"))))
            }
        }
    }
}
