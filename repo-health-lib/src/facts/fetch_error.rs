use super::RepoSpec;
use chrono::{DateTime, Utc};
use core::fmt::{Display, Formatter};

/// Conditions that prevent a repository snapshot from being assembled at all.
///
/// Failures of individual snapshot sections never surface here; they degrade to
/// missing data inside the snapshot instead.
#[derive(Debug)]
pub enum FetchError {
    /// The user-supplied reference does not name a GitHub repository.
    InvalidReference(String),

    /// The repository does not exist or is not visible with the supplied credentials.
    NotFound(RepoSpec),

    /// The API refused the request, typically because the rate limit was exhausted.
    AccessDenied {
        reset_at: Option<DateTime<Utc>>,
    },

    /// Any other failure while retrieving the repository record.
    Failed(ohno::AppError),
}

impl FetchError {
    /// Details suitable for diagnostics, beyond the user-facing message.
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            Self::InvalidReference(reference) => format!("unable to parse repository reference '{reference}'"),
            Self::NotFound(spec) => format!("repository '{}' was not found", spec.full_name()),
            Self::AccessDenied { reset_at: Some(reset_at) } => format!("access denied, rate limit resets at {}", reset_at.format("%F %T UTC")),
            Self::AccessDenied { reset_at: None } => "access denied".to_string(),
            Self::Failed(e) => format!("{e:#}"),
        }
    }
}

impl Display for FetchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let message = match self {
            Self::InvalidReference(_) => "Invalid GitHub URL. Format: https://github.com/owner/repo",
            Self::NotFound(_) => "Repository not found. Please check the URL.",
            Self::AccessDenied { .. } => "API rate limit exceeded. Please try again later or add a GitHub token.",
            Self::Failed(_) => "Failed to fetch repository data. Please try again.",
        };

        write!(f, "{message}")
    }
}

impl core::error::Error for FetchError {}
