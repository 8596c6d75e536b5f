use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// The five independently scored aspects of repository health.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum ScoreCategory {
    Documentation,
    CodeQuality,
    Maintenance,
    Community,
    Activity,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_camel_case() {
        assert_eq!(ScoreCategory::CodeQuality.to_string(), "codeQuality");
        assert_eq!(ScoreCategory::Documentation.to_string(), "documentation");
    }

    #[test]
    fn test_serialize_matches_display() {
        let json = serde_json::to_string(&ScoreCategory::CodeQuality).unwrap();
        assert_eq!(json, r#""codeQuality""#);
    }
}
