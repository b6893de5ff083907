//! Renal function: Cockcroft-Gault creatinine clearance and CKD-EPI eGFR.

use clinicalc_core::models::result::{ManagementStep, ScoreResult};
use clinicalc_core::models::risk::{Priority, RiskTier};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::classifier::{band, Cut};

/// Filtration bands shared by both estimates, mL/min.
fn filtration_tier(value: f64) -> RiskTier {
    band(
        value,
        &[
            (Cut::AtLeast(90.0), RiskTier::Low),
            (Cut::AtLeast(60.0), RiskTier::Moderate),
            (Cut::AtLeast(30.0), RiskTier::High),
        ],
        RiskTier::Critical,
    )
}

fn filtration_risk(tier: RiskTier) -> f64 {
    match tier {
        RiskTier::Low => 0.0,
        RiskTier::Moderate => 10.0,
        RiskTier::High => 50.0,
        RiskTier::Critical => 90.0,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CreatinineClearanceInput {
    pub age: f64,
    /// kg.
    pub weight: f64,
    /// Serum creatinine, mg/dL.
    pub creatinine: f64,
    pub female: bool,
}

/// Raw Cockcroft-Gault estimate in mL/min.
pub fn cockcroft_gault(input: &CreatinineClearanceInput) -> f64 {
    let crcl = (140.0 - input.age) * input.weight / (72.0 * input.creatinine);
    if input.female { crcl * 0.85 } else { crcl }
}

pub const CRCL_MAX_SCORE: f64 = 120.0;

/// Creatinine clearance by Cockcroft-Gault. Lower is worse.
pub fn creatinine_clearance(input: &CreatinineClearanceInput) -> ScoreResult {
    let crcl = cockcroft_gault(input);
    let rounded = crcl.round();
    let risk_tier = filtration_tier(crcl);
    let stage = match risk_tier {
        RiskTier::Low => "Stage 1 (Normal)",
        RiskTier::Moderate => "Stage 2 (Mild)",
        RiskTier::High => "Stage 3 (Moderate)",
        RiskTier::Critical => "Stage 4 (Severe)",
    };
    let severe = risk_tier == RiskTier::Critical;

    ScoreResult {
        score: rounded.clamp(0.0, CRCL_MAX_SCORE),
        max_score: CRCL_MAX_SCORE,
        risk_tier,
        risk_percentage: filtration_risk(risk_tier),
        interpretation: format!("Creatinine Clearance: {rounded} mL/min - {stage}"),
        recommendations: vec![
            format!("CKD Stage: {stage}"),
            "Adjust medication doses accordingly".to_string(),
            "Monitor renal function regularly".to_string(),
            if severe { "Consider nephrology referral" } else { "Routine monitoring" }.to_string(),
        ],
        management_steps: vec![ManagementStep::new(
            if severe { Priority::Urgent } else { Priority::Routine },
            format!("Medication dosing adjustment (CrCl {rounded})"),
            "Prevent drug accumulation and toxicity",
        )],
        measured: Some(crcl),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EgfrInput {
    /// Serum creatinine, mg/dL.
    pub creatinine: f64,
    pub age: f64,
    pub female: bool,
}

/// CKD-EPI style estimate, rounded to whole mL/min/1.73m².
///
/// `142 × (Scr/κ)^α × (age/100)^-1.209 × 1.018 [female]` with κ = 0.7/0.9
/// and α = -0.329/-0.411 for female/male.
pub fn estimate_gfr(creatinine: f64, age: f64, female: bool) -> f64 {
    let (kappa, alpha, sex_factor) = if female {
        (0.7, -0.329, 1.018)
    } else {
        (0.9, -0.411, 1.0)
    };
    let gfr = 142.0 * (creatinine / kappa).powf(alpha) * (age / 100.0).powf(-1.209) * sex_factor;
    gfr.round()
}

pub const EGFR_MAX_SCORE: f64 = 150.0;

/// KDIGO G-stage label for an eGFR.
pub fn gfr_stage(gfr: f64) -> &'static str {
    use Cut::AtLeast;
    band(
        gfr,
        &[
            (AtLeast(90.0), "G1 (Normal or high)"),
            (AtLeast(60.0), "G2 (Mildly decreased)"),
            (AtLeast(45.0), "G3a (Mildly to moderately decreased)"),
            (AtLeast(30.0), "G3b (Moderately to severely decreased)"),
            (AtLeast(15.0), "G4 (Severely decreased)"),
        ],
        "G5 (Kidney failure)",
    )
}

/// CKD-EPI estimated GFR. Lower is worse.
pub fn ckd_epi(input: &EgfrInput) -> ScoreResult {
    let gfr = estimate_gfr(input.creatinine, input.age, input.female);
    let risk_tier = filtration_tier(gfr);
    let stage = gfr_stage(gfr);
    let refer = gfr < 30.0;

    ScoreResult {
        score: gfr.clamp(0.0, EGFR_MAX_SCORE),
        max_score: EGFR_MAX_SCORE,
        risk_tier,
        risk_percentage: filtration_risk(risk_tier),
        interpretation: format!("eGFR: {gfr} mL/min/1.73m² - {stage}"),
        recommendations: vec![
            format!("CKD category: {stage}"),
            "Use eGFR to guide renally cleared drug dosing".to_string(),
            if refer { "Nephrology referral" } else { "Annual renal function monitoring" }
                .to_string(),
        ],
        management_steps: vec![ManagementStep::new(
            if refer { Priority::Urgent } else { Priority::Routine },
            "Review renally cleared medications",
            format!("eGFR {gfr} places the patient in {stage}"),
        )],
        measured: Some(gfr),
    }
}
