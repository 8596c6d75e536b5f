//! The point-in-time bundle of repository facts consumed by the scoring engine.
//!
//! Field names follow the GitHub REST API so that responses deserialize directly
//! into these types. Every field the API may omit or null out is an `Option`.

use super::ProviderResult;
use chrono::{DateTime, Utc};
use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// The descriptive repository record (`GET /repos/{owner}/{repo}`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoInfo {
    pub full_name: Option<CompactString>,
    pub description: Option<String>,
    pub stargazers_count: Option<u64>,
    pub forks_count: Option<u64>,
    pub watchers_count: Option<u64>,
    pub pushed_at: Option<DateTime<Utc>>,
    pub has_wiki: Option<bool>,
}

/// A top-level entry of the repository's default branch (`GET /repos/{owner}/{repo}/contents`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentEntry {
    pub name: CompactString,
    #[serde(default)]
    pub size: u64,
}

impl ContentEntry {
    #[must_use]
    pub fn new(name: impl Into<CompactString>, size: u64) -> Self {
        Self { name: name.into(), size }
    }
}

/// Issue and pull request state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueState {
    Open,
    Closed,
}

/// Marker present on issues that are backed by a pull request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestMarker {
    pub merged_at: Option<DateTime<Utc>>,
}

/// An entry of `GET /repos/{owner}/{repo}/issues`, which also lists pull requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub state: IssueState,
    pub created_at: Option<DateTime<Utc>>,
    pub pull_request: Option<PullRequestMarker>,
}

impl Issue {
    /// Whether this entry is a pull request surfaced through the issues endpoint.
    #[must_use]
    pub const fn is_pull_request(&self) -> bool {
        self.pull_request.is_some()
    }
}

/// An entry of `GET /repos/{owner}/{repo}/pulls`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequest {
    pub state: IssueState,
    pub created_at: Option<DateTime<Utc>>,
    pub merged_at: Option<DateTime<Utc>>,
}

impl PullRequest {
    #[must_use]
    pub const fn is_merged(&self) -> bool {
        self.merged_at.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitAuthor {
    pub date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitDetail {
    pub author: Option<CommitAuthor>,
}

/// An entry of `GET /repos/{owner}/{repo}/commits`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    #[serde(default)]
    pub commit: CommitDetail,
}

impl Commit {
    /// A commit authored at the given time.
    #[must_use]
    pub const fn authored(date: DateTime<Utc>) -> Self {
        Self {
            commit: CommitDetail {
                author: Some(CommitAuthor { date: Some(date) }),
            },
        }
    }

    #[must_use]
    pub fn authored_at(&self) -> Option<DateTime<Utc>> {
        self.commit.author.as_ref().and_then(|author| author.date)
    }
}

/// An entry of `GET /repos/{owner}/{repo}/contributors`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributor {
    pub login: Option<CompactString>,
}

/// The community profile (`GET /repos/{owner}/{repo}/community/profile`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunityProfile {
    pub health_percentage: Option<u32>,
}

/// Everything known about one repository at one point in time.
///
/// Each section records whether it was fetched. Accessors present missing
/// sections as empty lists or `None` so that scoring never has to care why
/// something is absent.
#[derive(Debug, Clone, Default)]
pub struct RepoSnapshot {
    pub repo: ProviderResult<RepoInfo>,
    pub contents: ProviderResult<Vec<ContentEntry>>,
    pub issues: ProviderResult<Vec<Issue>>,
    pub pulls: ProviderResult<Vec<PullRequest>>,
    pub commits: ProviderResult<Vec<Commit>>,
    pub contributors: ProviderResult<Vec<Contributor>>,
    pub community: ProviderResult<CommunityProfile>,
}

impl RepoSnapshot {
    #[must_use]
    pub const fn repo(&self) -> Option<&RepoInfo> {
        self.repo.as_ref()
    }

    #[must_use]
    pub fn contents(&self) -> &[ContentEntry] {
        self.contents.items()
    }

    #[must_use]
    pub fn issues(&self) -> &[Issue] {
        self.issues.items()
    }

    #[must_use]
    pub fn pulls(&self) -> &[PullRequest] {
        self.pulls.items()
    }

    #[must_use]
    pub fn commits(&self) -> &[Commit] {
        self.commits.items()
    }

    #[must_use]
    pub fn contributors(&self) -> &[Contributor] {
        self.contributors.items()
    }

    #[must_use]
    pub const fn community(&self) -> Option<&CommunityProfile> {
        self.community.as_ref()
    }

    /// Find a top-level entry by name, ignoring ASCII case.
    #[must_use]
    pub fn find_entry(&self, name: &str) -> Option<&ContentEntry> {
        self.contents().iter().find(|entry| entry.name.eq_ignore_ascii_case(name))
    }

    #[must_use]
    pub fn has_entry(&self, name: &str) -> bool {
        self.find_entry(name).is_some()
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.repo().and_then(|repo| repo.description.as_deref())
    }

    #[must_use]
    pub fn pushed_at(&self) -> Option<DateTime<Utc>> {
        self.repo().and_then(|repo| repo.pushed_at)
    }

    /// Issues that are not backed by a pull request.
    pub fn true_issues(&self) -> impl Iterator<Item = &Issue> {
        self.issues().iter().filter(|issue| !issue.is_pull_request())
    }
}
