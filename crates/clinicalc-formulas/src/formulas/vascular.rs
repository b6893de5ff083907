//! Venous thromboembolism pretest probability: Wells DVT and Wells PE.

use clinicalc_core::models::result::{ManagementStep, ScoreResult};
use clinicalc_core::models::risk::{Priority, RiskTier};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::lines;
use crate::classifier::{band, weighted_sum, Cut, TierRates};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WellsDvtInput {
    /// Treatment ongoing or within 6 months, or palliative.
    pub active_cancer: bool,
    /// Paralysis, paresis or recent plaster cast of the leg.
    pub paralysis_immobilization: bool,
    /// Bedridden > 3 days or major surgery within 12 weeks.
    pub bedridden_surgery: bool,
    pub localized_tenderness: bool,
    pub entire_leg_swelling: bool,
    /// > 3 cm larger than the other side, 10 cm below the tibial tuberosity.
    pub calf_swelling: bool,
    pub pitting_edema: bool,
    pub collateral_veins: bool,
    pub previous_dvt: bool,
    /// An alternative diagnosis is at least as likely as DVT.
    pub alternative_diagnosis: bool,
}

pub const WELLS_DVT_MAX_SCORE: f64 = 9.0;

/// DVT prevalence (%) per probability group.
const WELLS_DVT_PREVALENCE: TierRates = TierRates {
    low: 3.0,
    moderate: 17.0,
    high: 75.0,
    critical: 75.0,
};

/// Raw Wells DVT points, -2 to 9.
pub fn wells_dvt_points(input: &WellsDvtInput) -> f64 {
    let points = weighted_sum(&[
        (input.active_cancer, 1),
        (input.paralysis_immobilization, 1),
        (input.bedridden_surgery, 1),
        (input.localized_tenderness, 1),
        (input.entire_leg_swelling, 1),
        (input.calf_swelling, 1),
        (input.pitting_edema, 1),
        (input.collateral_veins, 1),
        (input.previous_dvt, 1),
    ]);
    let deduction = if input.alternative_diagnosis { 2.0 } else { 0.0 };
    f64::from(points) - deduction
}

/// Wells criteria for deep vein thrombosis.
///
/// The alternative-diagnosis criterion subtracts two points, so the raw
/// total can be negative; it is reported in `measured` and `score` is held
/// at zero or above. The tier is read from the raw total.
pub fn wells_dvt(input: &WellsDvtInput) -> ScoreResult {
    let points = wells_dvt_points(input);
    let risk_tier = band(
        points,
        &[(Cut::AtLeast(3.0), RiskTier::High), (Cut::AtLeast(1.0), RiskTier::Moderate)],
        RiskTier::Low,
    );
    let prevalence = WELLS_DVT_PREVALENCE.rate(risk_tier);

    let (probability, workup) = match risk_tier {
        RiskTier::Low => ("Low probability", "D-dimer; no imaging if negative"),
        RiskTier::Moderate => ("Moderate probability", "High-sensitivity D-dimer or compression ultrasound"),
        _ => ("High probability", "Compression ultrasound of the proximal veins"),
    };

    ScoreResult {
        score: points.clamp(0.0, WELLS_DVT_MAX_SCORE),
        max_score: WELLS_DVT_MAX_SCORE,
        risk_tier,
        risk_percentage: prevalence,
        interpretation: format!("Wells DVT Score: {points} - {probability} ({prevalence}% DVT prevalence)"),
        recommendations: vec![
            workup.to_string(),
            if risk_tier == RiskTier::High {
                "Consider anticoagulation while awaiting imaging".to_string()
            } else {
                "Reassess if symptoms progress".to_string()
            },
        ],
        management_steps: vec![ManagementStep::new(
            if risk_tier == RiskTier::High { Priority::Urgent } else { Priority::Routine },
            workup,
            format!("Wells DVT {points}: {probability}"),
        )],
        measured: Some(points),
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WellsPeInput {
    /// Leg swelling and pain on palpation of the deep veins.
    pub clinical_dvt: bool,
    /// PE is the most likely diagnosis.
    pub pe_likely: bool,
    /// Heart rate > 100.
    pub heart_rate: bool,
    /// Immobilization >= 3 days or surgery in the previous 4 weeks.
    pub immobilization: bool,
    pub previous_vte: bool,
    pub hemoptysis: bool,
    /// Treatment within 6 months or palliative.
    pub malignancy: bool,
}

pub const WELLS_PE_MAX_SCORE: f64 = 12.5;

/// PE prevalence (%) in the three-tier model.
const WELLS_PE_PREVALENCE: TierRates = TierRates {
    low: 1.3,
    moderate: 16.2,
    high: 40.6,
    critical: 40.6,
};

/// Wells criteria for pulmonary embolism.
pub fn wells_pe(input: &WellsPeInput) -> ScoreResult {
    // Half-point weights, summed in halves.
    let halves = weighted_sum(&[
        (input.clinical_dvt, 6),
        (input.pe_likely, 6),
        (input.heart_rate, 3),
        (input.immobilization, 3),
        (input.previous_vte, 3),
        (input.hemoptysis, 2),
        (input.malignancy, 2),
    ]);
    let score = f64::from(halves) / 2.0;
    let risk_tier = band(
        score,
        &[(Cut::Above(6.0), RiskTier::High), (Cut::AtLeast(2.0), RiskTier::Moderate)],
        RiskTier::Low,
    );
    let prevalence = WELLS_PE_PREVALENCE.rate(risk_tier);
    let likely = score > 4.0;

    let mut recommendations = if likely {
        lines(&["PE likely: CT pulmonary angiography", "Start anticoagulation if no contraindication"])
    } else {
        lines(&["PE unlikely: D-dimer", "CT pulmonary angiography only if D-dimer is positive"])
    };
    if risk_tier == RiskTier::Low {
        recommendations.push("Apply PERC rule to avoid testing".to_string());
    }

    ScoreResult {
        score,
        max_score: WELLS_PE_MAX_SCORE,
        risk_tier,
        risk_percentage: prevalence,
        interpretation: format!(
            "Wells PE Score: {score} - {} ({prevalence}% PE prevalence)",
            if likely { "PE likely" } else { "PE unlikely" }
        ),
        recommendations,
        management_steps: vec![ManagementStep::new(
            if likely { Priority::Immediate } else { Priority::Routine },
            if likely { "CT pulmonary angiography" } else { "D-dimer testing" },
            format!("Wells PE {score} in the {} probability group", risk_tier.as_str()),
        )],
        measured: None,
    }
}
