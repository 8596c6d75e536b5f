use super::{CATEGORY_DEFINITIONS, ScoreCategory};
use crate::facts::RepoSnapshot;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One 0..=100 score per category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScores {
    pub documentation: u8,
    pub code_quality: u8,
    pub maintenance: u8,
    pub community: u8,
    pub activity: u8,
}

impl CategoryScores {
    /// Run every registered scorer over the snapshot.
    #[must_use]
    pub fn compute(snapshot: &RepoSnapshot, now: DateTime<Utc>) -> Self {
        let mut scores = Self::default();
        for def in CATEGORY_DEFINITIONS {
            scores.set(def.category, (def.scorer)(snapshot, now));
        }

        scores
    }

    #[must_use]
    pub const fn get(&self, category: ScoreCategory) -> u8 {
        match category {
            ScoreCategory::Documentation => self.documentation,
            ScoreCategory::CodeQuality => self.code_quality,
            ScoreCategory::Maintenance => self.maintenance,
            ScoreCategory::Community => self.community,
            ScoreCategory::Activity => self.activity,
        }
    }

    /// Store a score, capping it at 100.
    pub fn set(&mut self, category: ScoreCategory, score: u8) {
        let score = score.min(100);
        match category {
            ScoreCategory::Documentation => self.documentation = score,
            ScoreCategory::CodeQuality => self.code_quality = score,
            ScoreCategory::Maintenance => self.maintenance = score,
            ScoreCategory::Community => self.community = score,
            ScoreCategory::Activity => self.activity = score,
        }
    }

    /// Scores in category table order.
    pub fn iter(&self) -> impl Iterator<Item = (ScoreCategory, u8)> + '_ {
        CATEGORY_DEFINITIONS.iter().map(|def| (def.category, self.get(def.category)))
    }
}
