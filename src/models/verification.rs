use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::report::QualityReport;
use crate::models::testcase::Verdict;

/// Result of one full verification run: one verdict per synthesized test
/// case plus a single quality report
#[derive(Debug, Clone, Serialize)]
pub struct VerificationOutcome {
    pub verdicts: Vec<Verdict>,
    pub report: QualityReport,
    pub started_at: DateTime<Utc>,
    pub elapsed: Duration,
}

impl VerificationOutcome {
    pub fn passed_count(&self) -> usize {
        self.verdicts.iter().filter(|v| v.passed).count()
    }

    pub fn total_count(&self) -> usize {
        self.verdicts.len()
    }

    pub fn all_passed(&self) -> bool {
        self.verdicts.iter().all(|v| v.passed)
    }
}

impl fmt::Display for VerificationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} test cases passed, overall quality {:.1}/10",
            self.passed_count(),
            self.total_count(),
            self.report.overall()
        )
    }
}
