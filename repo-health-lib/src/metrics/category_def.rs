use super::{ScoreCategory, activity, code_quality, community, documentation, maintenance};
use crate::facts::RepoSnapshot;
use chrono::{DateTime, Utc};

/// A scored category together with its presentation text and weight.
#[derive(Debug)]
pub struct CategoryDef {
    pub category: ScoreCategory,
    pub title: &'static str,
    pub description: &'static str,

    /// Share of the overall score, in percent.
    pub weight_pct: u8,
    pub scorer: fn(&RepoSnapshot, DateTime<Utc>) -> u8,
}

impl CategoryDef {
    /// The weight as a fraction of 1.0.
    #[must_use]
    pub fn weight(&self) -> f64 {
        f64::from(self.weight_pct) / 100.0
    }
}

macro_rules! category_def {
    ($category:ident, $title:expr, $description:expr, $weight_pct:expr, $scorer:expr) => {
        CategoryDef {
            category: ScoreCategory::$category,
            title: $title,
            description: $description,
            weight_pct: $weight_pct,
            scorer: $scorer,
        }
    };
}

pub const CATEGORY_DEFINITIONS: &[CategoryDef] = &[
    category_def!(Documentation, "Documentation", "README, LICENSE, and guides", 25, documentation::score),
    category_def!(CodeQuality, "Code Quality", "Issues and PR management", 20, code_quality::score),
    category_def!(Maintenance, "Maintenance", "Recent activity and updates", 25, maintenance::score),
    category_def!(Community, "Community", "Stars, forks, and engagement", 15, community::score),
    category_def!(Activity, "Activity", "Recent contributions", 15, activity::score),
];

/// Look up the definition of a category.
#[must_use]
pub fn definition(category: ScoreCategory) -> &'static CategoryDef {
    CATEGORY_DEFINITIONS
        .iter()
        .find(|def| def.category == category)
        .unwrap_or(&CATEGORY_DEFINITIONS[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    #[test]
    fn test_weights_sum_to_one() {
        let total: u32 = CATEGORY_DEFINITIONS.iter().map(|def| u32::from(def.weight_pct)).sum();
        assert_eq!(total, 100);

        let fractional: f64 = CATEGORY_DEFINITIONS.iter().map(CategoryDef::weight).sum();
        assert!((fractional - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_every_category_defined_once() {
        let defined: HashSet<_> = CATEGORY_DEFINITIONS.iter().map(|def| def.category).collect();

        assert_eq!(defined.len(), CATEGORY_DEFINITIONS.len());
        for category in ScoreCategory::iter() {
            assert!(defined.contains(&category), "{category} has no definition");
        }
    }

    #[test]
    fn test_definitions_follow_category_order() {
        let order: Vec<_> = CATEGORY_DEFINITIONS.iter().map(|def| def.category).collect();
        assert_eq!(order, ScoreCategory::iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_all_categories_have_text() {
        for def in CATEGORY_DEFINITIONS {
            assert!(!def.title.is_empty());
            assert!(!def.description.is_empty());
        }
    }

    #[test]
    fn test_definition_lookup() {
        assert_eq!(definition(ScoreCategory::Maintenance).weight_pct, 25);
        assert_eq!(definition(ScoreCategory::Activity).title, "Activity");
    }
}
