use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// How urgently a recommendation should be acted upon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}
