//! Common utilities shared across report generators.

use crate::appraisal::{Grade, Priority};
use chrono::{DateTime, Utc};

/// Number of cells in a score bar.
pub const BAR_WIDTH: usize = 20;

/// Format a count with comma thousands separators.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }

    result
}

/// Format a timestamp as a short US-style date, e.g. `Jan 15, 2024`.
pub fn format_date(dt: DateTime<Utc>) -> String {
    dt.format("%b %-d, %Y").to_string()
}

/// Render a score as a fixed-width bar.
pub fn score_bar(score: u8) -> String {
    let filled = (usize::from(score.min(100)) * BAR_WIDTH + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

/// Format a priority as a consistent label.
pub const fn format_priority(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "HIGH",
        Priority::Medium => "MEDIUM",
        Priority::Low => "LOW",
    }
}

/// Format a grade as a consistent label.
pub const fn format_grade(grade: Grade) -> &'static str {
    match grade {
        Grade::Excellent => "Excellent",
        Grade::Good => "Good",
        Grade::Fair => "Fair",
        Grade::NeedsImprovement => "Needs Improvement",
    }
}
