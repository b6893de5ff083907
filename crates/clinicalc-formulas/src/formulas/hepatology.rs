//! Liver disease severity and fibrosis: MELD, MELD-Na, Child-Pugh, FIB-4,
//! APRI.

use clinicalc_core::models::result::{ManagementStep, ScoreResult};
use clinicalc_core::models::risk::{Priority, RiskTier};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::classifier::{band, Cut, TierRates};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MeldInput {
    pub inr: f64,
    /// mg/dL.
    pub bilirubin: f64,
    /// mg/dL.
    pub creatinine: f64,
}

/// 3-month mortality (%) by tier.
const MELD_MORTALITY: TierRates = TierRates {
    low: 2.0,
    moderate: 10.0,
    high: 40.0,
    critical: 80.0,
};

const MELD_MIN: f64 = 6.0;
const MELD_MAX: f64 = 40.0;

fn meld_linear(inr: f64, bilirubin: f64, creatinine: f64) -> f64 {
    3.78 * inr.ln() + 11.2 * bilirubin.ln() + 9.57 * creatinine.ln() - 6.43
}

/// Clamp into the published range. `f64::max`/`min` discard NaN, so a
/// degenerate log (e.g. an input of 0) lands on the floor instead of
/// poisoning the result.
fn clamp_meld(value: f64) -> f64 {
    value.max(MELD_MIN).min(MELD_MAX)
}

fn meld_tier(score: f64) -> RiskTier {
    use Cut::Below;
    band(
        score,
        &[
            (Below(10.0), RiskTier::Low),
            (Below(20.0), RiskTier::Moderate),
            (Below(30.0), RiskTier::High),
        ],
        RiskTier::Critical,
    )
}

fn meld_result(label: &str, score: f64) -> ScoreResult {
    let risk_tier = meld_tier(score);
    let mortality = MELD_MORTALITY.rate(risk_tier);
    let transplant = score >= 20.0;

    ScoreResult {
        score,
        max_score: MELD_MAX,
        risk_tier,
        risk_percentage: mortality,
        interpretation: format!(
            "{label} Score: {score} - {risk_tier} RISK ({mortality}% 3-month mortality)"
        ),
        recommendations: vec![
            format!("Predicted 3-month mortality: {mortality}%"),
            if transplant { "Liver transplant evaluation recommended" } else { "Medical management" }
                .to_string(),
            "Avoid hepatotoxic medications".to_string(),
            "Monitor for complications".to_string(),
        ],
        management_steps: vec![ManagementStep::new(
            if score >= 30.0 {
                Priority::Immediate
            } else if transplant {
                Priority::Urgent
            } else {
                Priority::Routine
            },
            if transplant { "Transplant evaluation" } else { "Medical management" },
            format!("{label} {score} predicts {mortality}% mortality"),
        )],
        measured: None,
    }
}

/// Model for End-Stage Liver Disease, rounded and clamped to [6, 40].
pub fn meld(input: &MeldInput) -> ScoreResult {
    let raw = meld_linear(input.inr, input.bilirubin, input.creatinine);
    meld_result("MELD", clamp_meld(raw.round()))
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MeldNaInput {
    pub inr: f64,
    pub bilirubin: f64,
    pub creatinine: f64,
    /// mmol/L.
    pub sodium: f64,
    /// Dialysis at least twice in the past week.
    pub dialysis: bool,
}

/// MELD with the serum sodium correction.
///
/// Lab values below 1.0 are floored at 1.0, creatinine is fixed at 4.0 on
/// dialysis and sodium is held to [125, 137] before the correction.
pub fn meld_na(input: &MeldNaInput) -> ScoreResult {
    let inr = input.inr.max(1.0);
    let bilirubin = input.bilirubin.max(1.0);
    let creatinine = if input.dialysis { 4.0 } else { input.creatinine.max(1.0) };
    let sodium = input.sodium.clamp(125.0, 137.0);

    let meld = meld_linear(inr, bilirubin, creatinine);
    let deficit = 137.0 - sodium;
    let corrected = meld + 1.32 * deficit - 0.033 * meld * deficit;
    meld_result("MELD-Na", clamp_meld(corrected.round()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Ascites {
    None,
    Slight,
    ModerateSevere,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Encephalopathy {
    None,
    Grade1To2,
    Grade3To4,
}

impl Ascites {
    pub fn points(self) -> u32 {
        match self {
            Self::None => 1,
            Self::Slight => 2,
            Self::ModerateSevere => 3,
        }
    }
}

impl Encephalopathy {
    pub fn points(self) -> u32 {
        match self {
            Self::None => 1,
            Self::Grade1To2 => 2,
            Self::Grade3To4 => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChildPughInput {
    /// mg/dL.
    pub bilirubin: f64,
    /// g/dL.
    pub albumin: f64,
    pub inr: f64,
    pub ascites: Ascites,
    pub encephalopathy: Encephalopathy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ChildPughClass {
    A,
    B,
    C,
}

impl ChildPughClass {
    pub fn from_score(score: u32) -> Self {
        match score {
            0..=6 => Self::A,
            7..=9 => Self::B,
            _ => Self::C,
        }
    }

    /// (1-year, 2-year) survival, %.
    pub fn survival(self) -> (f64, f64) {
        match self {
            Self::A => (100.0, 85.0),
            Self::B => (80.0, 60.0),
            Self::C => (45.0, 35.0),
        }
    }

    /// Perioperative mortality for abdominal surgery, %.
    pub fn perioperative_mortality(self) -> f64 {
        match self {
            Self::A => 10.0,
            Self::B => 30.0,
            Self::C => 82.0,
        }
    }

    pub fn tier(self) -> RiskTier {
        match self {
            Self::A => RiskTier::Low,
            Self::B => RiskTier::Moderate,
            Self::C => RiskTier::High,
        }
    }

    /// Dose multiplier for hepatically cleared drugs.
    pub fn dose_factor(self) -> f64 {
        match self {
            Self::A => 1.0,
            Self::B => 0.75,
            Self::C => 0.5,
        }
    }
}

pub fn child_pugh_points(input: &ChildPughInput) -> u32 {
    use Cut::{Above, AtLeast, AtMost, Below};
    let bilirubin = band(input.bilirubin, &[(Below(2.0), 1), (AtMost(3.0), 2)], 3);
    let albumin = band(input.albumin, &[(Above(3.5), 1), (AtLeast(2.8), 2)], 3);
    let inr = band(input.inr, &[(Below(1.7), 1), (AtMost(2.3), 2)], 3);
    bilirubin + albumin + inr + input.ascites.points() + input.encephalopathy.points()
}

/// Child-Pugh (Child-Turcotte-Pugh) classification of cirrhosis.
pub fn child_pugh(input: &ChildPughInput) -> ScoreResult {
    let score = child_pugh_points(input);
    let class = ChildPughClass::from_score(score);
    let (one_year, two_year) = class.survival();
    let perioperative = class.perioperative_mortality();

    let recommendations = match class {
        ChildPughClass::A => vec![
            "Well-compensated disease".to_string(),
            "Surgery generally tolerated".to_string(),
            "Surveillance for varices and hepatocellular carcinoma".to_string(),
        ],
        ChildPughClass::B => vec![
            "Significant functional compromise".to_string(),
            "Consider transplant referral".to_string(),
            "Elective surgery carries substantial risk".to_string(),
        ],
        ChildPughClass::C => vec![
            "Decompensated disease".to_string(),
            "Transplant evaluation".to_string(),
            "Avoid elective surgery".to_string(),
        ],
    };

    ScoreResult {
        score: f64::from(score),
        max_score: 15.0,
        risk_tier: class.tier(),
        risk_percentage: perioperative,
        interpretation: format!(
            "Child-Pugh Score: {score} - Class {class:?} (1-year survival {one_year}%, 2-year survival {two_year}%)"
        ),
        recommendations,
        management_steps: vec![ManagementStep::new(
            match class {
                ChildPughClass::A => Priority::Routine,
                ChildPughClass::B => Priority::Urgent,
                ChildPughClass::C => Priority::Immediate,
            },
            "Hepatology review and dose adjustment of hepatically cleared drugs",
            format!("Class {class:?} carries {perioperative}% perioperative mortality"),
        )],
        measured: None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Fib4Input {
    pub age: f64,
    /// U/L.
    pub ast: f64,
    /// U/L.
    pub alt: f64,
    /// ×10⁹/L.
    pub platelets: f64,
}

/// Probability of advanced fibrosis (%) by tier.
const FIB4_FIBROSIS: TierRates = TierRates {
    low: 10.0,
    moderate: 30.0,
    high: 80.0,
    critical: 80.0,
};

pub const FIB4_MAX_SCORE: f64 = 10.0;

pub fn fib4_index(input: &Fib4Input) -> f64 {
    input.age * input.ast / (input.platelets * input.alt.sqrt())
}

/// FIB-4 fibrosis index.
pub fn fib4(input: &Fib4Input) -> ScoreResult {
    let index = fib4_index(input);
    let risk_tier = band(
        index,
        &[(Cut::Below(1.3), RiskTier::Low), (Cut::AtMost(2.67), RiskTier::Moderate)],
        RiskTier::High,
    );
    let fibrosis = FIB4_FIBROSIS.rate(risk_tier);

    let (finding, next) = match risk_tier {
        RiskTier::Low => ("Advanced fibrosis unlikely", "Repeat FIB-4 in 2-3 years"),
        RiskTier::Moderate => ("Indeterminate", "Elastography to clarify fibrosis stage"),
        _ => ("Advanced fibrosis likely", "Hepatology referral"),
    };

    ScoreResult {
        score: index.clamp(0.0, FIB4_MAX_SCORE),
        max_score: FIB4_MAX_SCORE,
        risk_tier,
        risk_percentage: fibrosis,
        interpretation: format!("FIB-4 Index: {index:.2} - {finding}"),
        recommendations: vec![next.to_string(), "Address metabolic risk factors".to_string()],
        management_steps: vec![ManagementStep::new(
            if risk_tier == RiskTier::High { Priority::Urgent } else { Priority::Routine },
            next,
            format!("FIB-4 {index:.2}: {finding}"),
        )],
        measured: Some(index),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ApriInput {
    /// U/L.
    pub ast: f64,
    /// Laboratory upper limit of normal for AST, U/L.
    pub ast_upper_limit: f64,
    /// ×10⁹/L.
    pub platelets: f64,
}

/// Probability of significant fibrosis (%) by tier.
const APRI_FIBROSIS: TierRates = TierRates {
    low: 14.0,
    moderate: 50.0,
    high: 88.0,
    critical: 88.0,
};

pub const APRI_MAX_SCORE: f64 = 5.0;

/// APRI above this suggests cirrhosis.
pub const APRI_CIRRHOSIS: f64 = 2.0;

pub fn apri_index(input: &ApriInput) -> f64 {
    (input.ast / input.ast_upper_limit * 100.0) / input.platelets
}

/// AST to Platelet Ratio Index.
pub fn apri(input: &ApriInput) -> ScoreResult {
    let index = apri_index(input);
    let risk_tier = band(
        index,
        &[(Cut::Below(0.5), RiskTier::Low), (Cut::AtMost(1.5), RiskTier::Moderate)],
        RiskTier::High,
    );
    let fibrosis = APRI_FIBROSIS.rate(risk_tier);

    let finding = match risk_tier {
        RiskTier::Low => "Significant fibrosis unlikely",
        RiskTier::Moderate => "Indeterminate",
        _ => "Significant fibrosis likely",
    };
    let mut recommendations = vec![
        if risk_tier == RiskTier::Low {
            "Routine monitoring".to_string()
        } else {
            "Confirm with elastography or FIB-4".to_string()
        },
    ];
    if index > APRI_CIRRHOSIS {
        recommendations.push("APRI > 2.0 indicates probable cirrhosis".to_string());
    }

    ScoreResult {
        score: index.clamp(0.0, APRI_MAX_SCORE),
        max_score: APRI_MAX_SCORE,
        risk_tier,
        risk_percentage: fibrosis,
        interpretation: format!("APRI: {index:.2} - {finding}"),
        recommendations,
        management_steps: vec![ManagementStep::new(
            if risk_tier == RiskTier::High { Priority::Urgent } else { Priority::Routine },
            if risk_tier == RiskTier::Low { "Routine follow-up" } else { "Hepatology referral" },
            format!("APRI {index:.2}: {finding}"),
        )],
        measured: Some(index),
    }
}
