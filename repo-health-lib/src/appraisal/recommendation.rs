use super::Priority;
use crate::metrics::ScoreCategory;
use serde::{Deserialize, Serialize};

/// A suggested improvement, tied to the category it would raise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub category: ScoreCategory,
    pub priority: Priority,
    pub message: String,
}
