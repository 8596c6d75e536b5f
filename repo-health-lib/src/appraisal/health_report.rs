use super::{Grade, Recommendation};
use crate::metrics::CategoryScores;
use serde::{Deserialize, Serialize};

/// The outcome of appraising one repository snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReport {
    pub overall: u8,
    pub categories: CategoryScores,
    pub recommendations: Vec<Recommendation>,
}

impl HealthReport {
    #[must_use]
    pub const fn grade(&self) -> Grade {
        Grade::from_score(self.overall)
    }
}
