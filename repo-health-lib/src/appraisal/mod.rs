//! Overall scoring and improvement advice
//!
//! [`aggregate`] folds the per-category scores into a single weighted score and
//! runs the recommendation rules over the same snapshot. [`appraise`] is the
//! one-call entry point that also computes the category scores.
//!
//! Everything here is pure: the same snapshot, evaluation time and scores always
//! produce the same [`HealthReport`].

mod grade;
mod health_report;
mod priority;
mod recommendation;
mod rules;

pub use grade::Grade;
pub use health_report::HealthReport;
pub use priority::Priority;
pub use recommendation::Recommendation;
pub use rules::{RULES, Rule};

use crate::facts::RepoSnapshot;
use crate::metrics::{CATEGORY_DEFINITIONS, CategoryScores};
use chrono::{DateTime, Utc};

/// Upper bound on the number of recommendations in a report.
pub const MAX_RECOMMENDATIONS: usize = 5;

/// Score the snapshot in every category and aggregate the results.
#[must_use]
pub fn appraise(snapshot: &RepoSnapshot, now: DateTime<Utc>) -> HealthReport {
    aggregate(CategoryScores::compute(snapshot, now), snapshot, now)
}

/// Combine category scores into a report with an overall score and recommendations.
///
/// Recommendations keep the order in which the rules produce them and are cut
/// off after [`MAX_RECOMMENDATIONS`].
#[must_use]
pub fn aggregate(scores: CategoryScores, snapshot: &RepoSnapshot, now: DateTime<Utc>) -> HealthReport {
    let mut recommendations = rules::evaluate(&scores, snapshot, now);
    recommendations.truncate(MAX_RECOMMENDATIONS);

    HealthReport {
        overall: overall_score(&scores),
        categories: scores,
        recommendations,
    }
}

/// The weighted sum of the category scores, rounded half up.
#[must_use]
pub fn overall_score(scores: &CategoryScores) -> u8 {
    let weighted: u32 = CATEGORY_DEFINITIONS
        .iter()
        .map(|def| u32::from(scores.get(def.category)) * u32::from(def.weight_pct))
        .sum();

    u8::try_from(((weighted + 50) / 100).min(100)).unwrap_or(100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facts::ProviderResult;
    use crate::facts::snapshot::{
        Commit, CommunityProfile, ContentEntry, Contributor, Issue, IssueState, PullRequest, RepoInfo,
    };
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 15, 12, 0, 0).unwrap()
    }

    fn healthy() -> RepoSnapshot {
        let recent = now() - Duration::days(2);

        RepoSnapshot {
            repo: ProviderResult::Found(RepoInfo {
                full_name: Some("owner/healthy".into()),
                description: Some("A well kept repository with plenty going on".to_string()),
                stargazers_count: Some(5000),
                forks_count: Some(400),
                watchers_count: Some(300),
                pushed_at: Some(recent),
                has_wiki: Some(true),
            }),
            contents: ProviderResult::Found(vec![
                ContentEntry::new("README.md", 12_000),
                ContentEntry::new("LICENSE", 1_000),
                ContentEntry::new("CONTRIBUTING.md", 2_000),
                ContentEntry::new(".github", 0),
            ]),
            issues: ProviderResult::Found(
                (0..12)
                    .map(|i| Issue {
                        state: if i < 10 { IssueState::Closed } else { IssueState::Open },
                        created_at: Some(recent),
                        pull_request: None,
                    })
                    .collect(),
            ),
            pulls: ProviderResult::Found(vec![
                PullRequest {
                    state: IssueState::Closed,
                    created_at: Some(recent),
                    merged_at: Some(recent),
                };
                6
            ]),
            commits: ProviderResult::Found(vec![Commit::authored(recent); 60]),
            contributors: ProviderResult::Found(vec![Contributor::default(); 15]),
            community: ProviderResult::Found(CommunityProfile { health_percentage: Some(100) }),
        }
    }

    #[test]
    fn test_empty_snapshot() {
        let report = appraise(&RepoSnapshot::default(), now());

        assert_eq!(report.categories.documentation, 0);
        assert_eq!(report.categories.code_quality, 60);
        assert_eq!(report.categories.maintenance, 0);
        assert_eq!(report.categories.community, 0);
        assert_eq!(report.categories.activity, 10);
        assert_eq!(report.overall, 14);
        assert_eq!(report.grade(), Grade::NeedsImprovement);
    }

    #[test]
    fn test_empty_snapshot_recommendations_are_capped_in_order() {
        let report = appraise(&RepoSnapshot::default(), now());

        insta::assert_debug_snapshot!(
            report.recommendations.iter().map(|r| (r.category, r.priority)).collect::<Vec<_>>(),
            @r"
        [
            (
                Documentation,
                High,
            ),
            (
                Documentation,
                High,
            ),
            (
                Documentation,
                Medium,
            ),
            (
                CodeQuality,
                Medium,
            ),
            (
                Maintenance,
                Low,
            ),
        ]
        "
        );
    }

    #[test]
    fn test_healthy_repository() {
        let report = appraise(&healthy(), now());

        assert_eq!(report.overall, overall_score(&report.categories));
        assert!(report.overall >= 80, "overall was {}", report.overall);
        assert_eq!(report.grade(), Grade::Excellent);
        assert!(report.recommendations.is_empty());
    }

    #[test]
    fn test_aggregate_is_deterministic() {
        let snapshot = healthy();
        let scores = CategoryScores::compute(&snapshot, now());

        assert_eq!(aggregate(scores, &snapshot, now()), aggregate(scores, &snapshot, now()));
    }

    #[test]
    fn test_overall_score_weights() {
        let scores = CategoryScores {
            documentation: 100,
            code_quality: 0,
            maintenance: 0,
            community: 0,
            activity: 0,
        };
        assert_eq!(overall_score(&scores), 25);

        let scores = CategoryScores {
            documentation: 0,
            code_quality: 50,
            maintenance: 0,
            community: 10,
            activity: 0,
        };
        assert_eq!(overall_score(&scores), 12);
    }

    #[test]
    fn test_overall_score_rounds_half_up() {
        let scores = CategoryScores {
            documentation: 0,
            code_quality: 0,
            maintenance: 0,
            community: 10,
            activity: 0,
        };
        assert_eq!(overall_score(&scores), 2);
    }

    #[test]
    fn test_overall_score_bounds() {
        let all = |score| CategoryScores {
            documentation: score,
            code_quality: score,
            maintenance: score,
            community: score,
            activity: score,
        };

        for score in [0, 1, 37, 50, 99, 100] {
            assert_eq!(overall_score(&all(score)), score);
        }
    }

    #[test]
    fn test_aggregate_respects_given_scores() {
        let scores = CategoryScores {
            documentation: 90,
            code_quality: 90,
            maintenance: 90,
            community: 90,
            activity: 10,
        };

        let report = aggregate(scores, &RepoSnapshot::default(), now());
        assert_eq!(report.categories, scores);
        assert_eq!(report.recommendations.len(), 1);
        assert_eq!(report.recommendations[0].priority, Priority::Medium);
    }

    #[test]
    fn test_report_json_shape() {
        let report = aggregate(
            CategoryScores {
                documentation: 90,
                code_quality: 90,
                maintenance: 90,
                community: 40,
                activity: 90,
            },
            &healthy(),
            now(),
        );

        insta::assert_snapshot!(serde_json::to_string_pretty(&report).unwrap(), @r#"
        {
          "overall": 83,
          "categories": {
            "documentation": 90,
            "codeQuality": 90,
            "maintenance": 90,
            "community": 40,
            "activity": 90
          },
          "recommendations": [
            {
              "category": "community",
              "priority": "low",
              "message": "Promote your project on social media, dev.to, or Reddit to increase visibility."
            }
          ]
        }
        "#);
    }
}
