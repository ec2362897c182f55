use async_trait::async_trait;

use crate::errors::HarnessResult;
use crate::models::testcase::TestCase;

/// Seam for generating structured test data for a problem.
///
/// The returned sequence preserves the order the cases were produced in. A
/// reply that cannot be parsed strictly is a `SchemaParse` error; no partial
/// sequence is ever returned.
#[async_trait]
pub trait TestSynthesizer: Send + Sync {
    async fn synthesize(
        &self,
        problem_statement: &str,
        source_code: &str,
    ) -> HarnessResult<Vec<TestCase>>;
}
