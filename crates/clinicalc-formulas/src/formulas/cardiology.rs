//! Atrial fibrillation and chest-pain scores (CHA₂DS₂-VASc, HAS-BLED,
//! HEART, TIMI) and 10-year cardiovascular risk (Framingham, pooled cohort
//! ASCVD).

use clinicalc_core::models::result::{ManagementStep, ScoreResult};
use clinicalc_core::models::risk::{Priority, RiskTier};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::classifier::{band, indexed_rate, weighted_sum, Cut, TierRates};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Cha2ds2VascInput {
    pub chf: bool,
    pub hypertension: bool,
    pub age_75: bool,
    pub diabetes: bool,
    pub stroke_tia: bool,
    pub vascular_disease: bool,
    pub age_65_74: bool,
    pub female: bool,
}

/// Annual stroke risk (%) by score 0–9.
const CHA2DS2_VASC_STROKE_RISK: [f64; 10] = [0.0, 1.3, 2.2, 3.2, 4.0, 6.7, 9.6, 15.7, 15.2, 17.4];

pub fn cha2ds2_vasc(input: &Cha2ds2VascInput) -> ScoreResult {
    let score = weighted_sum(&[
        (input.chf, 1),
        (input.hypertension, 1),
        (input.age_75, 2),
        (input.diabetes, 1),
        (input.stroke_tia, 2),
        (input.vascular_disease, 1),
        // The two age bands are exclusive; 75+ takes precedence.
        (input.age_65_74 && !input.age_75, 1),
        (input.female, 1),
    ]);
    let risk = indexed_rate(f64::from(score), &CHA2DS2_VASC_STROKE_RISK);
    let risk_tier = band(
        f64::from(score),
        &[(Cut::AtLeast(5.0), RiskTier::High), (Cut::AtLeast(2.0), RiskTier::Moderate)],
        RiskTier::Low,
    );

    let anticoagulation = match risk_tier {
        RiskTier::High | RiskTier::Critical => "Anticoagulation strongly recommended",
        RiskTier::Moderate => "Anticoagulation recommended",
        RiskTier::Low => "Anticoagulation may be considered",
    };

    ScoreResult {
        score: f64::from(score),
        max_score: 9.0,
        risk_tier,
        risk_percentage: risk,
        interpretation: format!("CHA₂DS₂-VASc Score: {score} - Annual stroke risk: {risk}%"),
        recommendations: vec![
            anticoagulation.to_string(),
            "Assess bleeding risk (HAS-BLED score)".to_string(),
            "Patient education on AF management".to_string(),
            "Rate control strategy".to_string(),
        ],
        management_steps: vec![ManagementStep::new(
            if risk_tier == RiskTier::High { Priority::Urgent } else { Priority::Routine },
            format!("Anticoagulation decision ({risk}% annual stroke risk)"),
            "CHA₂DS₂-VASc predicts stroke risk in AF",
        )],
        measured: None,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HasBledInput {
    /// Uncontrolled, systolic > 160 mmHg.
    pub hypertension: bool,
    pub abnormal_renal_function: bool,
    pub abnormal_liver_function: bool,
    pub stroke: bool,
    pub bleeding: bool,
    pub labile_inr: bool,
    /// Age > 65.
    pub elderly: bool,
    /// Antiplatelet agents or NSAIDs.
    pub drugs: bool,
    /// >= 8 drinks a week.
    pub alcohol: bool,
}

/// Major bleeds per 100 patient-years by score 0..=5 (5+ shares the last
/// entry).
const HAS_BLED_BLEEDING_RATE: [f64; 6] = [1.13, 1.02, 1.88, 3.74, 8.70, 12.50];

pub fn has_bled(input: &HasBledInput) -> ScoreResult {
    let score = weighted_sum(&[
        (input.hypertension, 1),
        (input.abnormal_renal_function, 1),
        (input.abnormal_liver_function, 1),
        (input.stroke, 1),
        (input.bleeding, 1),
        (input.labile_inr, 1),
        (input.elderly, 1),
        (input.drugs, 1),
        (input.alcohol, 1),
    ]);
    let rate = indexed_rate(f64::from(score), &HAS_BLED_BLEEDING_RATE);
    let risk_tier = band(
        f64::from(score),
        &[(Cut::AtLeast(3.0), RiskTier::High), (Cut::AtLeast(2.0), RiskTier::Moderate)],
        RiskTier::Low,
    );

    let mut recommendations = vec![
        "Address modifiable bleeding risk factors".to_string(),
        "A high score alone is not a reason to withhold anticoagulation".to_string(),
    ];
    if risk_tier == RiskTier::High {
        recommendations.insert(0, "Close follow-up and regular review".to_string());
    }

    ScoreResult {
        score: f64::from(score),
        max_score: 9.0,
        risk_tier,
        risk_percentage: rate,
        interpretation: format!(
            "HAS-BLED Score: {score} - {rate} major bleeds per 100 patient-years"
        ),
        recommendations,
        management_steps: vec![ManagementStep::new(
            if risk_tier == RiskTier::High { Priority::Urgent } else { Priority::Routine },
            "Review uncontrolled hypertension, labile INR, concomitant drugs and alcohol",
            format!("HAS-BLED {score} predicts {rate}% annual major bleeding"),
        )],
        measured: None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HeartInput {
    /// 0 slightly, 1 moderately, 2 highly suspicious.
    pub history: f64,
    /// 0 normal, 1 non-specific repolarization, 2 significant ST deviation.
    pub ecg: f64,
    pub age: f64,
    /// 0 none, 1 one or two, 2 three or more or known atherosclerosis.
    pub risk_factors: f64,
    /// 0 normal, 1 one to three times, 2 over three times the limit.
    pub troponin: f64,
}

const HEART_MACE: TierRates = TierRates {
    low: 1.7,
    moderate: 20.3,
    high: 72.7,
    critical: 72.7,
};

pub fn heart(input: &HeartInput) -> ScoreResult {
    let age_points = band(input.age, &[(Cut::Below(45.0), 0.0), (Cut::Below(65.0), 1.0)], 2.0);
    let score = input.history + input.ecg + input.troponin + input.risk_factors + age_points;

    let risk_tier = band(
        score,
        &[(Cut::AtMost(3.0), RiskTier::Low), (Cut::AtMost(6.0), RiskTier::Moderate)],
        RiskTier::High,
    );
    let mace = HEART_MACE.rate(risk_tier);
    let discharge = score <= 3.0;

    let priority = if score >= 7.0 {
        Priority::Immediate
    } else if score >= 4.0 {
        Priority::Urgent
    } else {
        Priority::Routine
    };

    ScoreResult {
        score,
        max_score: 10.0,
        risk_tier,
        risk_percentage: mace,
        interpretation: format!("HEART Score: {score} - {risk_tier} RISK ({mace}% 6-week MACE)"),
        recommendations: vec![
            if discharge { "Low risk - Safe for discharge" } else { "Admission recommended" }
                .to_string(),
            if discharge {
                "Outpatient follow-up in 24-72 hours"
            } else {
                "Continuous cardiac monitoring"
            }
            .to_string(),
            "Serial troponins if indicated".to_string(),
            "Stress testing or coronary imaging as needed".to_string(),
        ],
        management_steps: vec![ManagementStep::new(
            priority,
            if discharge {
                "Discharge with outpatient follow-up"
            } else {
                "Admission and monitoring"
            },
            format!("HEART {score} predicts {mace}% MACE risk"),
        )],
        measured: None,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TimiInput {
    pub age_65: bool,
    /// Three or more CAD risk factors.
    pub risk_factors: bool,
    /// Known coronary stenosis >= 50%.
    pub known_stenosis: bool,
    /// Aspirin use in the past 7 days.
    pub aspirin: bool,
    /// Two or more anginal episodes in 24 hours.
    pub severe_angina: bool,
    pub st_deviation: bool,
    pub positive_marker: bool,
}

/// 14-day death, MI or urgent revascularization (%) by score 0..=7.
const TIMI_EVENT_RATE: [f64; 8] = [4.7, 4.7, 8.3, 13.2, 19.9, 26.2, 40.9, 40.9];

/// TIMI risk score for UA/NSTEMI.
pub fn timi(input: &TimiInput) -> ScoreResult {
    let score = weighted_sum(&[
        (input.age_65, 1),
        (input.risk_factors, 1),
        (input.known_stenosis, 1),
        (input.aspirin, 1),
        (input.severe_angina, 1),
        (input.st_deviation, 1),
        (input.positive_marker, 1),
    ]);
    let rate = indexed_rate(f64::from(score), &TIMI_EVENT_RATE);
    let risk_tier = band(
        f64::from(score),
        &[(Cut::AtMost(2.0), RiskTier::Low), (Cut::AtMost(4.0), RiskTier::Moderate)],
        RiskTier::High,
    );

    ScoreResult {
        score: f64::from(score),
        max_score: 7.0,
        risk_tier,
        risk_percentage: rate,
        interpretation: format!("TIMI Score: {score} - {rate}% 14-day adverse event risk"),
        recommendations: vec![
            if risk_tier == RiskTier::Low {
                "Conservative strategy reasonable".to_string()
            } else {
                "Early invasive strategy favoured".to_string()
            },
            "Dual antiplatelet therapy per guideline".to_string(),
            "Serial ECG and troponin".to_string(),
        ],
        management_steps: vec![ManagementStep::new(
            match risk_tier {
                RiskTier::Low => Priority::Routine,
                RiskTier::Moderate => Priority::Urgent,
                _ => Priority::Immediate,
            },
            "Cardiology review for invasive strategy",
            format!("TIMI {score} predicts {rate}% 14-day events"),
        )],
        measured: None,
    }
}

/// Shared risk-factor profile for the 10-year cardiovascular models.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CardiovascularProfile {
    /// Years.
    pub age: f64,
    pub female: bool,
    /// mg/dL.
    pub total_cholesterol: f64,
    /// mg/dL.
    pub hdl: f64,
    /// mmHg.
    pub systolic_bp: f64,
    pub bp_treated: bool,
    pub smoker: bool,
    pub diabetes: bool,
}

impl CardiovascularProfile {
    fn logs(&self) -> (f64, f64, f64, f64) {
        (
            self.age.ln(),
            self.total_cholesterol.ln(),
            self.hdl.ln(),
            self.systolic_bp.ln(),
        )
    }
}

/// Cox model event probability (%) from a baseline survival, the
/// individual linear sum and the cohort mean.
fn cox_risk(baseline_survival: f64, sum: f64, mean: f64) -> f64 {
    100.0 * (1.0 - baseline_survival.powf((sum - mean).exp()))
}

fn flag(value: bool) -> f64 {
    if value { 1.0 } else { 0.0 }
}

/// 10-year risk (%) of general cardiovascular disease, sex-specific Cox
/// model from the Framingham Heart Study.
pub fn framingham_risk(input: &CardiovascularProfile) -> f64 {
    let (age, chol, hdl, sbp) = input.logs();
    if input.female {
        let sbp_coeff = if input.bp_treated { 2.82263 } else { 2.76157 };
        let sum = 2.32888 * age + 1.20904 * chol - 0.70833 * hdl
            + sbp_coeff * sbp
            + 0.52873 * flag(input.smoker)
            + 0.69154 * flag(input.diabetes);
        cox_risk(0.95012, sum, 26.1931)
    } else {
        let sbp_coeff = if input.bp_treated { 1.99881 } else { 1.93303 };
        let sum = 3.06117 * age + 1.12370 * chol - 0.93263 * hdl
            + sbp_coeff * sbp
            + 0.65451 * flag(input.smoker)
            + 0.57367 * flag(input.diabetes);
        cox_risk(0.88936, sum, 23.9802)
    }
}

/// Framingham 10-year cardiovascular risk.
///
/// `score` and `risk_percentage` are both the modelled risk, held to
/// `[0, 100]`; below 10% is low, below 20% intermediate, above that high.
pub fn framingham(input: &CardiovascularProfile) -> ScoreResult {
    let risk = framingham_risk(input);
    let risk_tier = band(
        risk,
        &[(Cut::Below(10.0), RiskTier::Low), (Cut::Below(20.0), RiskTier::Moderate)],
        RiskTier::High,
    );
    let statin = match risk_tier {
        RiskTier::Low => "Lifestyle modification; statin not routinely indicated",
        RiskTier::Moderate => "Discuss moderate-intensity statin",
        _ => "High-intensity statin therapy",
    };
    ten_year_result("Framingham", risk, risk_tier, statin)
}

/// Race group used by the pooled cohort equations. Groups without their
/// own equations use the white coefficients.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AscvdRace {
    #[default]
    White,
    AfricanAmerican,
    Hispanic,
    Asian,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AscvdInput {
    pub profile: CardiovascularProfile,
    pub race: AscvdRace,
}

/// 10-year risk (%) of a first hard ASCVD event by the pooled cohort
/// equations.
pub fn ascvd_risk(input: &AscvdInput) -> f64 {
    let p = &input.profile;
    let (age, chol, hdl, sbp) = p.logs();
    let smoker = flag(p.smoker);
    let diabetes = flag(p.diabetes);
    let african_american = input.race == AscvdRace::AfricanAmerican;

    match (p.female, african_american) {
        (true, false) => {
            let sbp_term = if p.bp_treated { 2.019 * sbp } else { 1.957 * sbp };
            let sum = -29.799 * age + 4.884 * age * age + 13.540 * chol - 3.114 * age * chol
                - 13.578 * hdl
                + 3.149 * age * hdl
                + sbp_term
                + 7.574 * smoker
                - 1.665 * age * smoker
                + 0.661 * diabetes;
            cox_risk(0.9665, sum, -29.18)
        }
        (true, true) => {
            let sbp_term = if p.bp_treated {
                29.291 * sbp - 6.432 * age * sbp
            } else {
                27.820 * sbp - 6.087 * age * sbp
            };
            let sum = 17.114 * age + 0.940 * chol - 18.920 * hdl + 4.475 * age * hdl
                + sbp_term
                + 0.691 * smoker
                + 0.874 * diabetes;
            cox_risk(0.9533, sum, 86.61)
        }
        (false, false) => {
            let sbp_term = if p.bp_treated { 1.797 * sbp } else { 1.764 * sbp };
            let sum = 12.344 * age + 11.853 * chol - 2.664 * age * chol - 7.990 * hdl
                + 1.769 * age * hdl
                + sbp_term
                + 7.837 * smoker
                - 1.795 * age * smoker
                + 0.658 * diabetes;
            cox_risk(0.9144, sum, 61.18)
        }
        (false, true) => {
            let sbp_term = if p.bp_treated { 1.916 * sbp } else { 1.809 * sbp };
            let sum = 2.469 * age + 0.302 * chol - 0.307 * hdl
                + sbp_term
                + 0.549 * smoker
                + 0.645 * diabetes;
            cox_risk(0.8954, sum, 19.54)
        }
    }
}

/// Pooled cohort 10-year ASCVD risk: below 5% low, below 7.5% borderline,
/// below 20% intermediate, otherwise high.
pub fn ascvd(input: &AscvdInput) -> ScoreResult {
    let risk = ascvd_risk(input);
    let risk_tier = band(
        risk,
        &[(Cut::Below(7.5), RiskTier::Low), (Cut::Below(20.0), RiskTier::Moderate)],
        RiskTier::High,
    );
    let statin = match risk_tier {
        RiskTier::Low if risk >= 5.0 => "Borderline risk: discuss statin if risk enhancers present",
        RiskTier::Low => "Lifestyle modification; statin not routinely indicated",
        RiskTier::Moderate => "Moderate-intensity statin; consider coronary calcium score if uncertain",
        _ => "High-intensity statin therapy",
    };
    ten_year_result("ASCVD", risk, risk_tier, statin)
}

fn ten_year_result(model: &str, risk: f64, risk_tier: RiskTier, statin: &str) -> ScoreResult {
    let shown = (risk * 10.0).round() / 10.0;
    ScoreResult {
        score: shown.clamp(0.0, 100.0),
        max_score: 100.0,
        risk_tier,
        risk_percentage: shown.clamp(0.0, 100.0),
        interpretation: format!("{model} 10-year risk: {shown}% - {risk_tier} RISK"),
        recommendations: vec![
            statin.to_string(),
            "Blood pressure and glycaemic control to target".to_string(),
            "Smoking cessation if applicable".to_string(),
        ],
        management_steps: vec![ManagementStep::new(
            if risk_tier == RiskTier::High { Priority::Urgent } else { Priority::Routine },
            statin,
            format!("{model} 10-year risk {shown}%"),
        )],
        measured: Some(risk),
    }
}
