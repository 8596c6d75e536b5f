//! Activity: issues, pull requests and commits created during the trailing month.

use super::points::{finish, is_after, month_before, tier_at_least};
use crate::facts::RepoSnapshot;
use chrono::{DateTime, Utc};

const ISSUE_TIERS: &[(usize, f64)] = &[(10, 40.0), (5, 30.0), (1, 20.0), (0, 10.0)];
const PULL_TIERS: &[(usize, f64)] = &[(5, 30.0), (2, 20.0), (1, 10.0)];
const COMMIT_TIERS: &[(usize, f64)] = &[(20, 30.0), (10, 20.0), (5, 10.0)];

pub fn score(snapshot: &RepoSnapshot, now: DateTime<Utc>) -> u8 {
    let cutoff = month_before(now);

    let issues = snapshot.issues().iter().filter(|i| is_after(i.created_at, cutoff)).count();
    let pulls = snapshot.pulls().iter().filter(|p| is_after(p.created_at, cutoff)).count();
    let commits = snapshot.commits().iter().filter(|c| is_after(c.authored_at(), cutoff)).count();

    finish(tier_at_least(issues, ISSUE_TIERS) + tier_at_least(pulls, PULL_TIERS) + tier_at_least(commits, COMMIT_TIERS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facts::ProviderResult;
    use crate::facts::snapshot::{Commit, Issue, IssueState, PullRequest, PullRequestMarker};
    use crate::metrics::points::test_support::{days_ago, now};

    fn issue(days: i64, is_pull: bool) -> Issue {
        Issue {
            state: IssueState::Open,
            created_at: Some(days_ago(days)),
            pull_request: is_pull.then(PullRequestMarker::default),
        }
    }

    fn pull(days: i64) -> PullRequest {
        PullRequest {
            state: IssueState::Open,
            created_at: Some(days_ago(days)),
            merged_at: None,
        }
    }

    #[test]
    fn test_empty_snapshot_has_floor() {
        assert_eq!(score(&RepoSnapshot::default(), now()), 10);
    }

    #[test]
    fn test_busy_repository_scores_full() {
        let snapshot = RepoSnapshot {
            issues: ProviderResult::Found((0..10).map(|_| issue(3, false)).collect()),
            pulls: ProviderResult::Found((0..5).map(|_| pull(3)).collect()),
            commits: ProviderResult::Found((0..20).map(|_| Commit::authored(days_ago(2))).collect()),
            ..RepoSnapshot::default()
        };

        assert_eq!(score(&snapshot, now()), 100);
    }

    #[test]
    fn test_old_items_are_not_recent() {
        let snapshot = RepoSnapshot {
            issues: ProviderResult::Found((0..10).map(|_| issue(40, false)).collect()),
            pulls: ProviderResult::Found((0..5).map(|_| pull(40)).collect()),
            commits: ProviderResult::Found((0..20).map(|_| Commit::authored(days_ago(40))).collect()),
            ..RepoSnapshot::default()
        };

        assert_eq!(score(&snapshot, now()), 10);
    }

    #[test]
    fn test_pull_backed_issues_count_as_issues() {
        let snapshot = RepoSnapshot {
            issues: ProviderResult::Found((0..5).map(|_| issue(1, true)).collect()),
            ..RepoSnapshot::default()
        };

        assert_eq!(score(&snapshot, now()), 30);
    }

    #[test]
    fn test_item_on_cutoff_is_not_recent() {
        let snapshot = RepoSnapshot {
            issues: ProviderResult::Found(vec![Issue {
                state: IssueState::Open,
                created_at: Some(month_before(now())),
                pull_request: None,
            }]),
            ..RepoSnapshot::default()
        };

        assert_eq!(score(&snapshot, now()), 10);
    }

    #[test]
    fn test_missing_timestamps_are_not_recent() {
        let snapshot = RepoSnapshot {
            issues: ProviderResult::Found(vec![Issue {
                state: IssueState::Open,
                created_at: None,
                pull_request: None,
            }]),
            commits: ProviderResult::Found(vec![Commit::default(); 25]),
            ..RepoSnapshot::default()
        };

        assert_eq!(score(&snapshot, now()), 10);
    }

    #[test]
    fn test_middle_tiers() {
        let snapshot = RepoSnapshot {
            issues: ProviderResult::Found((0..5).map(|_| issue(1, false)).collect()),
            pulls: ProviderResult::Found((0..2).map(|_| pull(1)).collect()),
            commits: ProviderResult::Found((0..10).map(|_| Commit::authored(days_ago(1))).collect()),
            ..RepoSnapshot::default()
        };

        assert_eq!(score(&snapshot, now()), 70);
    }
}
