//! Community: stars, forks, watchers and GitHub's own community health rating.

use super::points::{finish, tier_at_least};
use crate::facts::RepoSnapshot;
use chrono::{DateTime, Utc};

const STAR_TIERS: &[(u64, f64)] = &[(1000, 30.0), (100, 20.0), (10, 10.0), (1, 5.0)];
const FORK_TIERS: &[(u64, f64)] = &[(100, 20.0), (10, 15.0), (1, 10.0)];
const WATCHER_TIERS: &[(u64, f64)] = &[(50, 20.0), (10, 10.0), (1, 5.0)];

pub fn score(snapshot: &RepoSnapshot, _now: DateTime<Utc>) -> u8 {
    let repo = snapshot.repo();
    let stars = repo.and_then(|r| r.stargazers_count).unwrap_or(0);
    let forks = repo.and_then(|r| r.forks_count).unwrap_or(0);
    let watchers = repo.and_then(|r| r.watchers_count).unwrap_or(0);

    let mut points = tier_at_least(stars, STAR_TIERS) + tier_at_least(forks, FORK_TIERS) + tier_at_least(watchers, WATCHER_TIERS);

    if let Some(health) = snapshot.community().and_then(|c| c.health_percentage) {
        points += f64::from(health) / 100.0 * 30.0;
    }

    finish(points)
}
