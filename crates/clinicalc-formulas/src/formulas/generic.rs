//! Fallback scorer for calculators without a dedicated formula.

use clinicalc_core::models::result::{ManagementStep, ScoreResult};
use clinicalc_core::models::risk::{Priority, RiskTier};

use super::lines;
use crate::classifier::{band, Cut, TierRates};

pub const GENERIC_MAX_SCORE: f64 = 10.0;

const GENERIC_RISK: TierRates = TierRates {
    low: 5.0,
    moderate: 25.0,
    high: 75.0,
    critical: 75.0,
};

/// Sum every contribution (true flags count as 1) and band the total at
/// 0 / ≤2 / above.
///
/// The raw sum is kept in `measured`; `score` is the sum held to
/// `[0, 10]`, and the tier is read from that clamped score.
pub fn generic(contributions: &[f64]) -> ScoreResult {
    let sum: f64 = contributions.iter().sum();
    let score = sum.clamp(0.0, GENERIC_MAX_SCORE);
    let risk_tier = band(
        score,
        &[(Cut::AtMost(0.0), RiskTier::Low), (Cut::AtMost(2.0), RiskTier::Moderate)],
        RiskTier::High,
    );

    ScoreResult {
        score,
        max_score: GENERIC_MAX_SCORE,
        risk_tier,
        risk_percentage: GENERIC_RISK.rate(risk_tier),
        interpretation: format!("Score: {score} - {risk_tier} RISK"),
        recommendations: lines(&[
            "Clinical assessment required",
            "Specialist consultation if indicated",
        ]),
        management_steps: vec![ManagementStep::new(
            if risk_tier == RiskTier::High { Priority::Urgent } else { Priority::Routine },
            "Risk-based management",
            "Score-based risk stratification",
        )],
        measured: Some(sum),
    }
}
