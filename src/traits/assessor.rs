use async_trait::async_trait;

use crate::errors::HarnessResult;
use crate::models::report::QualityReport;

/// Seam for scoring code quality across the nine fixed review criteria.
///
/// A reply that violates the report schema is a `SchemaParse` error; the
/// report is never default-filled.
#[async_trait]
pub trait QualityAssessor: Send + Sync {
    async fn assess(
        &self,
        problem_statement: &str,
        source_code: &str,
        stdin: Option<&str>,
    ) -> HarnessResult<QualityReport>;
}
