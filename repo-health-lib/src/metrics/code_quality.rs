//! Code quality: how issues and pull requests are handled, plus collaboration templates.

use super::points::{finish, ratio};
use crate::facts::RepoSnapshot;
use crate::facts::snapshot::IssueState;
use chrono::{DateTime, Utc};

pub fn score(snapshot: &RepoSnapshot, _now: DateTime<Utc>) -> u8 {
    let mut points = 0.0;

    let (open, closed) = snapshot.true_issues().fold((0, 0), |(open, closed), issue| match issue.state {
        IssueState::Open => (open + 1, closed),
        IssueState::Closed => (open, closed + 1),
    });

    let total_issues = open + closed;
    points += if total_issues > 0 { 50.0 * ratio(closed, total_issues) } else { 40.0 };

    let pulls = snapshot.pulls();
    let merged = pulls.iter().filter(|pull| pull.is_merged()).count();
    points += if pulls.is_empty() { 20.0 } else { 30.0 * ratio(merged, pulls.len()) };

    if snapshot.has_entry(".github") {
        points += 20.0;
    }

    finish(points)
}
