//! Data collection for GitHub repositories
//!
//! This module gathers the facts the scoring engine works from. The core type is
//! [`RepoSnapshot`], a point-in-time bundle of the repository record, its top-level
//! entries, issues, pull requests, commits, contributors and community profile.
//!
//! Each section is wrapped in a [`ProviderResult`] which can be `Found`, `Unavailable`,
//! or `Error`, allowing scoring to proceed with whatever data could be retrieved.
//! Only failing to obtain the repository record itself is fatal, reported as a
//! [`FetchError`].
//!
//! The [`Provider`] resolves a [`RepoSpec`] against the GitHub API and issues the
//! section requests concurrently.

mod fetch_error;
pub mod hosting;
mod progress;
mod provider_result;
mod repo_spec;
pub mod snapshot;

pub use fetch_error::FetchError;
pub use hosting::Provider;
pub use progress::Progress;
pub use provider_result::ProviderResult;
pub use repo_spec::RepoSpec;
pub use snapshot::RepoSnapshot;
