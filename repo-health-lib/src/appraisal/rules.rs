use super::{Priority, Recommendation};
use crate::facts::RepoSnapshot;
use crate::facts::snapshot::IssueState;
use crate::metrics::{CategoryScores, ScoreCategory, days_since};
use chrono::{DateTime, Utc};

const MANY_OPEN_ISSUES: usize = 10;
const STALE_PUSH_DAYS: i64 = 90;
const MIN_CONTRIBUTORS: usize = 2;

/// A recommendation that applies when a category scores below a threshold and
/// the snapshot shows the specific gap the advice addresses.
#[derive(Debug)]
pub struct Rule {
    pub category: ScoreCategory,
    pub below: u8,
    pub priority: Priority,

    /// Produces the message when the gap is present.
    pub advise: fn(&RepoSnapshot, DateTime<Utc>) -> Option<String>,
}

macro_rules! rule {
    ($category:ident < $below:expr, $priority:ident, $advise:expr) => {
        Rule {
            category: ScoreCategory::$category,
            below: $below,
            priority: Priority::$priority,
            advise: $advise,
        }
    };
}

fn unless_present(snapshot: &RepoSnapshot, name: &str, message: &str) -> Option<String> {
    (!snapshot.has_entry(name)).then(|| message.to_string())
}

/// Evaluated in order; the order is the order recommendations are reported in.
pub const RULES: &[Rule] = &[
    rule!(Documentation < 70, High, |s, _| unless_present(
        s,
        "README.md",
        "Add a comprehensive README.md file with project description, installation, and usage instructions."
    )),
    rule!(Documentation < 70, High, |s, _| unless_present(
        s,
        "LICENSE",
        "Add a LICENSE file to clarify how others can use your code."
    )),
    rule!(Documentation < 70, Medium, |s, _| unless_present(
        s,
        "CONTRIBUTING.md",
        "Add CONTRIBUTING.md to guide potential contributors."
    )),
    rule!(CodeQuality < 70, Medium, |s, _| {
        let open = s.true_issues().filter(|issue| issue.state == IssueState::Open).count();
        (open > MANY_OPEN_ISSUES).then(|| format!("You have {open} open issues. Consider triaging and closing resolved ones."))
    }),
    rule!(CodeQuality < 70, Medium, |s, _| unless_present(
        s,
        ".github",
        "Add issue and PR templates in .github folder for better collaboration."
    )),
    rule!(Maintenance < 70, High, |s, now| {
        let days = days_since(s.pushed_at()?, now);
        (days > STALE_PUSH_DAYS)
            .then(|| format!("Last commit was {days} days ago. Consider updating dependencies or archiving if inactive."))
    }),
    rule!(Maintenance < 70, Low, |s, _| {
        (s.contributors().len() < MIN_CONTRIBUTORS).then(|| "Encourage community contributions to share maintenance responsibilities.".to_string())
    }),
    rule!(Community < 50, Low, |_, _| Some(
        "Promote your project on social media, dev.to, or Reddit to increase visibility.".to_string()
    )),
    rule!(Community < 50, Medium, |s, _| {
        s.description()
            .is_none_or(str::is_empty)
            .then(|| "Add a clear, compelling repository description to attract contributors.".to_string())
    }),
    rule!(Activity < 60, Medium, |_, _| Some(
        "Increase project activity by addressing issues, reviewing PRs, or adding new features.".to_string()
    )),
];

/// Every recommendation that applies, in rule order.
pub fn evaluate(scores: &CategoryScores, snapshot: &RepoSnapshot, now: DateTime<Utc>) -> Vec<Recommendation> {
    RULES
        .iter()
        .filter(|rule| scores.get(rule.category) < rule.below)
        .filter_map(|rule| {
            (rule.advise)(snapshot, now).map(|message| Recommendation {
                category: rule.category,
                priority: rule.priority,
                message,
            })
        })
        .collect()
}
