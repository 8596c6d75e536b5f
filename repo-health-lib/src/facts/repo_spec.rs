use super::FetchError;
use core::fmt::{Display, Formatter};
use std::sync::Arc;
use url::Url;

const GITHUB_HOSTS: &[&str] = &["github.com", "www.github.com"];

/// An owner/repository pair on GitHub, resolved from a user-supplied reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoSpec {
    url: Arc<Url>,
    owner: Arc<str>,
    repo: Arc<str>,
}

impl RepoSpec {
    /// Resolve a repository reference such as `https://github.com/owner/repo`.
    ///
    /// The scheme and host are optional (`owner/repo` is accepted), a trailing
    /// `.git` is dropped and any path beyond the repository name
    /// (`/tree/main/...`) is ignored.
    pub fn parse(reference: &str) -> Result<Self, FetchError> {
        let invalid = || FetchError::InvalidReference(reference.to_string());

        let trimmed = reference.trim();
        let first_segment = trimmed.split('/').next().unwrap_or_default();
        let Ok(url) = (if trimmed.contains("://") {
            Url::parse(trimmed)
        } else if first_segment.contains('.') {
            Url::parse(&format!("https://{trimmed}"))
        } else {
            // Bare `owner/repo` shorthand
            Url::parse(&format!("https://github.com/{trimmed}"))
        }) else {
            return Err(invalid());
        };

        let host = url.host_str().unwrap_or_default().to_ascii_lowercase();
        if !GITHUB_HOSTS.contains(&host.as_str()) {
            return Err(invalid());
        }

        let path_segments: Vec<_> = url.path_segments().map(Iterator::collect).unwrap_or_default();
        let [owner, repo, ..] = path_segments.as_slice() else {
            return Err(invalid());
        };

        let repo = repo.strip_suffix(".git").unwrap_or(*repo);
        if owner.is_empty() || repo.is_empty() {
            return Err(invalid());
        }

        let Ok(clean_url) = Url::parse(&format!("https://github.com/{owner}/{repo}")) else {
            return Err(invalid());
        };

        Ok(Self {
            url: Arc::new(clean_url),
            owner: Arc::from(*owner),
            repo: Arc::from(repo),
        })
    }

    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    #[must_use]
    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// `owner/repo`, the form GitHub uses for `full_name`.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}

impl Display for RepoSpec {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.url)
    }
}
