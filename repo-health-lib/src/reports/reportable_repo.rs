use crate::appraisal::HealthReport;
use crate::facts::RepoSpec;
use crate::facts::snapshot::RepoInfo;
use chrono::{DateTime, Utc};

/// An appraised repository, ready for reporting.
#[derive(Debug, Clone)]
pub struct ReportableRepo {
    pub spec: RepoSpec,
    pub info: RepoInfo,
    pub evaluated_at: DateTime<Utc>,
    pub report: HealthReport,
}

impl ReportableRepo {
    #[must_use]
    #[expect(clippy::missing_const_for_fn, reason = "Cannot be const due to non-const parameter types")]
    pub fn new(spec: RepoSpec, info: RepoInfo, evaluated_at: DateTime<Utc>, report: HealthReport) -> Self {
        Self {
            spec,
            info,
            evaluated_at,
            report,
        }
    }

    /// The display name, preferring what GitHub reports over the parsed reference.
    #[must_use]
    pub fn name(&self) -> String {
        self.info
            .full_name
            .as_ref()
            .map_or_else(|| self.spec.full_name(), ToString::to_string)
    }
}
