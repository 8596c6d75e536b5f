use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// A coarse label for an overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display, Serialize, Deserialize)]
pub enum Grade {
    Excellent,
    Good,
    Fair,
    #[strum(serialize = "Needs Improvement")]
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
}

impl Grade {
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        match score {
            80.. => Self::Excellent,
            60..=79 => Self::Good,
            40..=59 => Self::Fair,
            _ => Self::NeedsImprovement,
        }
    }
}
