use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{HarnessError, HarnessResult};

/// The nine fixed criteria every quality report must cover
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Criterion {
    Correctness,
    Efficiency,
    #[serde(rename = "Readability & Code Quality")]
    Readability,
    Scalability,
    Robustness,
    Maintainability,
    Security,
    #[serde(rename = "Test Coverage")]
    TestCoverage,
    #[serde(rename = "Adherence to Standards")]
    AdherenceToStandards,
}

impl Criterion {
    pub const ALL: [Criterion; 9] = [
        Criterion::Correctness,
        Criterion::Efficiency,
        Criterion::Readability,
        Criterion::Scalability,
        Criterion::Robustness,
        Criterion::Maintainability,
        Criterion::Security,
        Criterion::TestCoverage,
        Criterion::AdherenceToStandards,
    ];

    /// Key used in the model's JSON reply
    pub fn wire_name(&self) -> &'static str {
        match self {
            Criterion::Correctness => "Correctness",
            Criterion::Efficiency => "Efficiency",
            Criterion::Readability => "Readability & Code Quality",
            Criterion::Scalability => "Scalability",
            Criterion::Robustness => "Robustness",
            Criterion::Maintainability => "Maintainability",
            Criterion::Security => "Security",
            Criterion::TestCoverage => "Test Coverage",
            Criterion::AdherenceToStandards => "Adherence to Standards",
        }
    }

    fn from_wire_name(name: &str) -> Option<Criterion> {
        Criterion::ALL.into_iter().find(|c| c.wire_name() == name)
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.wire_name())
    }
}

/// Score and justification for a single criterion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CriterionScore {
    pub score: u8,
    pub explanation: String,
}

/// Multi-criterion scoring result. Can only be built by `from_json`, so a
/// value always carries exactly the nine criteria with scores in [0,10].
#[derive(Debug, Clone, Serialize)]
pub struct QualityReport {
    scores: BTreeMap<Criterion, CriterionScore>,
}

impl QualityReport {
    /// Strict construction from the model's JSON reply. Fails closed: every
    /// criterion must be present with an integer score in [0,10] and an
    /// explanation, and unknown keys are rejected.
    pub fn from_json(value: &Value) -> HarnessResult<QualityReport> {
        let object = value.as_object().ok_or_else(|| {
            HarnessError::SchemaParse("quality report is not a JSON object".to_string())
        })?;

        let mut scores = BTreeMap::new();
        for (key, entry) in object {
            let criterion = Criterion::from_wire_name(key).ok_or_else(|| {
                HarnessError::SchemaParse(format!("unknown criterion '{}'", key))
            })?;

            let score = entry.get("score").and_then(Value::as_u64).ok_or_else(|| {
                HarnessError::SchemaParse(format!("criterion '{}' has no integer score", key))
            })?;
            if score > 10 {
                return Err(HarnessError::SchemaParse(format!(
                    "criterion '{}' score {} is outside 0-10",
                    key, score
                )));
            }

            let explanation = entry
                .get("explanation")
                .and_then(Value::as_str)
                .ok_or_else(|| {
                    HarnessError::SchemaParse(format!("criterion '{}' has no explanation", key))
                })?
                .to_string();

            scores.insert(
                criterion,
                CriterionScore {
                    score: score as u8,
                    explanation,
                },
            );
        }

        for criterion in Criterion::ALL {
            if !scores.contains_key(&criterion) {
                return Err(HarnessError::SchemaParse(format!(
                    "missing criterion '{}'",
                    criterion
                )));
            }
        }

        Ok(QualityReport { scores })
    }

    pub fn get(&self, criterion: Criterion) -> &CriterionScore {
        &self.scores[&criterion]
    }

    /// Criteria in their fixed display order
    pub fn iter(&self) -> impl Iterator<Item = (Criterion, &CriterionScore)> {
        Criterion::ALL.iter().map(move |c| (*c, &self.scores[c]))
    }

    /// Mean score across the nine criteria
    pub fn overall(&self) -> f32 {
        let total: u32 = self.scores.values().map(|s| s.score as u32).sum();
        total as f32 / Criterion::ALL.len() as f32
    }
}
