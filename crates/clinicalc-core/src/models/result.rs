use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::risk::{Priority, RiskTier};

/// The output of a single formula evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreResult {
    /// Score on the formula's own scale, `0 <= score <= max_score`.
    pub score: f64,
    pub max_score: f64,
    pub risk_tier: RiskTier,
    /// Published outcome rate (mortality, complication, ...) for this
    /// score or tier. Not a derived probability.
    pub risk_percentage: f64,
    pub interpretation: String,
    pub recommendations: Vec<String>,
    pub management_steps: Vec<ManagementStep>,
    /// Unclamped value for formulas whose output is a measured quantity
    /// (mL/min, fibrosis index). `None` for point scores.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub measured: Option<f64>,
}

impl ScoreResult {
    /// True when neither the score nor the measured value is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        self.score.is_finite()
            && self.risk_percentage.is_finite()
            && self.measured.is_none_or(f64::is_finite)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ManagementStep {
    pub priority: Priority,
    pub action: String,
    pub rationale: String,
}

impl ManagementStep {
    pub fn new(priority: Priority, action: impl Into<String>, rationale: impl Into<String>) -> Self {
        Self {
            priority,
            action: action.into(),
            rationale: rationale.into(),
        }
    }
}
