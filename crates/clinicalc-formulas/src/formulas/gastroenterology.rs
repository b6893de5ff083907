//! Upper GI bleeding and acute pancreatitis: Glasgow-Blatchford, BISAP.

use clinicalc_core::models::result::{ManagementStep, ScoreResult};
use clinicalc_core::models::risk::{Priority, RiskTier};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::lines;
use crate::classifier::{band, indexed_rate, weighted_sum, Cut, TierRates};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GlasgowBlatchfordInput {
    /// mmol/L.
    pub blood_urea: f64,
    /// g/dL.
    pub hemoglobin: f64,
    /// mmHg.
    pub systolic_bp: f64,
    /// Beats per minute.
    pub pulse: f64,
    pub female: bool,
    pub melena: bool,
    pub syncope: bool,
    pub hepatic_disease: bool,
    pub cardiac_failure: bool,
}

pub fn glasgow_blatchford_points(input: &GlasgowBlatchfordInput) -> u32 {
    use Cut::{AtLeast, Below};

    let urea = band(
        input.blood_urea,
        &[(AtLeast(25.0), 6), (AtLeast(10.0), 4), (AtLeast(8.0), 3), (AtLeast(6.5), 2)],
        0,
    );
    let hemoglobin = if input.female {
        band(input.hemoglobin, &[(Below(10.0), 6), (Below(12.0), 1)], 0)
    } else {
        band(input.hemoglobin, &[(Below(10.0), 6), (Below(12.0), 3), (Below(13.0), 1)], 0)
    };
    let systolic = band(
        input.systolic_bp,
        &[(Below(90.0), 3), (Below(100.0), 2), (Below(110.0), 1)],
        0,
    );

    urea + hemoglobin
        + systolic
        + weighted_sum(&[
            (input.pulse >= 100.0, 1),
            (input.melena, 1),
            (input.syncope, 2),
            (input.hepatic_disease, 2),
            (input.cardiac_failure, 2),
        ])
}

/// Approximate share (%) needing transfusion, endoscopic therapy or
/// surgery in each band.
const GBS_INTERVENTION: TierRates = TierRates {
    low: 1.0,
    moderate: 20.0,
    high: 55.0,
    critical: 85.0,
};

/// Glasgow-Blatchford bleeding score. A score of 0 or 1 identifies
/// patients who may be managed without admission.
pub fn glasgow_blatchford(input: &GlasgowBlatchfordInput) -> ScoreResult {
    let score = glasgow_blatchford_points(input);
    let risk_tier = band(
        f64::from(score),
        &[
            (Cut::AtLeast(12.0), RiskTier::Critical),
            (Cut::AtLeast(7.0), RiskTier::High),
            (Cut::AtLeast(2.0), RiskTier::Moderate),
        ],
        RiskTier::Low,
    );
    let rate = GBS_INTERVENTION.rate(risk_tier);

    let (recommendations, step) = match risk_tier {
        RiskTier::Low => (
            lines(&["Consider outpatient management", "Outpatient endoscopy"]),
            ManagementStep::new(Priority::Routine, "Early discharge with outpatient endoscopy", "Very low risk of needing intervention"),
        ),
        RiskTier::Moderate => (
            lines(&["Admit for observation", "Endoscopy within 24 hours"]),
            ManagementStep::new(Priority::Urgent, "Inpatient endoscopy within 24 hours", "Intervention may be needed"),
        ),
        _ => (
            lines(&[
                "Resuscitate and transfuse to target hemoglobin",
                "Urgent endoscopy",
                "Consider high-dependency care",
            ]),
            ManagementStep::new(Priority::Immediate, "Resuscitation and urgent endoscopy", "High likelihood of needing intervention"),
        ),
    };

    ScoreResult {
        score: f64::from(score),
        max_score: 23.0,
        risk_tier,
        risk_percentage: rate,
        interpretation: format!(
            "Glasgow-Blatchford Score: {score} - {risk_tier} RISK (~{rate}% need intervention)"
        ),
        recommendations,
        management_steps: vec![step],
        measured: None,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BisapInput {
    /// BUN > 25 mg/dL.
    pub bun: bool,
    pub impaired_mental: bool,
    /// Two or more SIRS criteria.
    pub sirs: bool,
    /// Age > 60.
    pub age: bool,
    pub pleural_effusion: bool,
}

/// In-hospital mortality (%) by score 0–5.
const BISAP_MORTALITY: [f64; 6] = [0.1, 0.4, 1.6, 3.6, 7.4, 9.5];

/// Bedside Index for Severity in Acute Pancreatitis.
pub fn bisap(input: &BisapInput) -> ScoreResult {
    let score = weighted_sum(&[
        (input.bun, 1),
        (input.impaired_mental, 1),
        (input.sirs, 1),
        (input.age, 1),
        (input.pleural_effusion, 1),
    ]);
    let mortality = indexed_rate(f64::from(score), &BISAP_MORTALITY);
    let risk_tier = band(
        f64::from(score),
        &[(Cut::AtLeast(3.0), RiskTier::High), (Cut::AtLeast(2.0), RiskTier::Moderate)],
        RiskTier::Low,
    );
    let severe = risk_tier == RiskTier::High;

    ScoreResult {
        score: f64::from(score),
        max_score: 5.0,
        risk_tier,
        risk_percentage: mortality,
        interpretation: format!("BISAP Score: {score} - {mortality}% in-hospital mortality"),
        recommendations: if severe {
            lines(&[
                "High risk of severe pancreatitis and organ failure",
                "Consider ICU or high-dependency admission",
                "Aggressive fluid resuscitation with close monitoring",
            ])
        } else {
            lines(&["Ward-based supportive care", "Reassess at 24-48 hours"])
        },
        management_steps: vec![ManagementStep::new(
            if severe { Priority::Urgent } else { Priority::Routine },
            if severe { "Escalate level of care" } else { "Supportive care" },
            format!("BISAP {score} carries {mortality}% mortality"),
        )],
        measured: None,
    }
}
