//! Maintenance: push freshness, commit volume and the size of the contributor pool.

use super::points::{days_since, finish, tier_at_least, tier_below};
use crate::facts::RepoSnapshot;
use chrono::{DateTime, Utc};

const FRESHNESS_TIERS: &[(i64, f64)] = &[(7, 40.0), (30, 30.0), (90, 20.0), (180, 10.0)];
const COMMIT_TIERS: &[(usize, f64)] = &[(50, 30.0), (20, 20.0), (5, 10.0)];
const CONTRIBUTOR_TIERS: &[(usize, f64)] = &[(10, 30.0), (5, 20.0), (2, 10.0), (1, 5.0)];

pub fn score(snapshot: &RepoSnapshot, now: DateTime<Utc>) -> u8 {
    let freshness = snapshot
        .pushed_at()
        .map_or(0.0, |pushed_at| tier_below(days_since(pushed_at, now), FRESHNESS_TIERS));

    let commits = tier_at_least(snapshot.commits().len(), COMMIT_TIERS);
    let contributors = tier_at_least(snapshot.contributors().len(), CONTRIBUTOR_TIERS);

    finish(freshness + commits + contributors)
}
