//! Documentation: README depth, essential project files and discoverability.

use super::points::{finish, tier_at_least};
use crate::facts::RepoSnapshot;
use chrono::{DateTime, Utc};

const README: &str = "README.md";
const MIN_DESCRIPTION_CHARS: usize = 20;

/// README size thresholds in bytes mapped to a 0..=100 quality rating.
const README_QUALITY_TIERS: &[(u64, f64)] = &[(5001, 100.0), (2001, 75.0), (501, 50.0), (0, 25.0)];

pub fn score(snapshot: &RepoSnapshot, _now: DateTime<Utc>) -> u8 {
    let mut points = readme_quality(snapshot) * 0.4;

    if snapshot.has_entry("LICENSE") {
        points += 15.0;
    }

    if snapshot.has_entry("CONTRIBUTING.md") {
        points += 15.0;
    }

    if snapshot.has_entry(".github") {
        points += 10.0;
    }

    if snapshot.description().is_some_and(|d| d.chars().count() > MIN_DESCRIPTION_CHARS) {
        points += 10.0;
    }

    let has_wiki = snapshot.repo().and_then(|repo| repo.has_wiki).unwrap_or(false);
    if has_wiki || snapshot.has_entry("docs") {
        points += 10.0;
    }

    finish(points)
}

/// Rate the README by size: 0 when absent, otherwise 25 to 100.
pub fn readme_quality(snapshot: &RepoSnapshot) -> f64 {
    snapshot
        .find_entry(README)
        .map_or(0.0, |readme| tier_at_least(readme.size, README_QUALITY_TIERS))
}
