//! Pre-operative assessment: ASA physical status, RCRI, Caprini VTE.

use clinicalc_core::models::result::{ManagementStep, ScoreResult};
use clinicalc_core::models::risk::{Priority, RiskTier};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::classifier::{band, indexed_rate, weighted_sum, Cut, TierRates};

/// ASA physical status class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum AsaClass {
    I,
    II,
    III,
    IV,
    V,
    VI,
}

impl AsaClass {
    /// Class from its ordinal 1–6; out-of-range ordinals saturate.
    pub fn from_ordinal(ordinal: f64) -> Self {
        use Cut::AtLeast;
        band(
            ordinal,
            &[
                (AtLeast(6.0), Self::VI),
                (AtLeast(5.0), Self::V),
                (AtLeast(4.0), Self::IV),
                (AtLeast(3.0), Self::III),
                (AtLeast(2.0), Self::II),
            ],
            Self::I,
        )
    }

    pub fn ordinal(self) -> u32 {
        match self {
            Self::I => 1,
            Self::II => 2,
            Self::III => 3,
            Self::IV => 4,
            Self::V => 5,
            Self::VI => 6,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::I => "Healthy patient",
            Self::II => "Mild systemic disease",
            Self::III => "Severe systemic disease",
            Self::IV => "Severe systemic disease that is a constant threat to life",
            Self::V => "Moribund patient not expected to survive without surgery",
            Self::VI => "Brain-dead organ donor",
        }
    }

    /// Elective perioperative mortality, %.
    pub fn mortality(self) -> f64 {
        match self {
            Self::I => 0.1,
            Self::II => 0.4,
            Self::III => 4.3,
            Self::IV => 23.0,
            Self::V => 51.0,
            Self::VI => 100.0,
        }
    }

    pub fn tier(self) -> RiskTier {
        match self {
            Self::I | Self::II => RiskTier::Low,
            Self::III => RiskTier::Moderate,
            Self::IV => RiskTier::High,
            Self::V | Self::VI => RiskTier::Critical,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AsaInput {
    pub class: AsaClass,
    pub emergency: bool,
}

/// ASA Physical Status. Emergency surgery doubles the quoted mortality.
pub fn asa(input: &AsaInput) -> ScoreResult {
    let class = input.class;
    let base = class.mortality();
    let mortality = if input.emergency { (base * 2.0).min(100.0) } else { base };
    let suffix = if input.emergency { "E" } else { "" };
    let risk_tier = class.tier();

    let mut recommendations = vec![match risk_tier {
        RiskTier::Low => "Standard anaesthetic care".to_string(),
        RiskTier::Moderate => "Optimise comorbidities before elective surgery".to_string(),
        _ => "Senior anaesthetic review and critical care bed".to_string(),
    }];
    if input.emergency {
        recommendations.push("Emergency procedure: mortality risk doubled".to_string());
    }
    recommendations.push("Document ASA class on the anaesthetic record".to_string());

    ScoreResult {
        score: f64::from(class.ordinal()),
        max_score: 6.0,
        risk_tier,
        risk_percentage: mortality,
        interpretation: format!(
            "ASA {class:?}{suffix} - {} ({mortality}% perioperative mortality)",
            class.description()
        ),
        recommendations,
        management_steps: vec![ManagementStep::new(
            match risk_tier {
                RiskTier::Low => Priority::Routine,
                RiskTier::Moderate => Priority::Urgent,
                _ => Priority::Immediate,
            },
            "Pre-operative anaesthetic assessment",
            format!("ASA {class:?}{suffix} carries {mortality}% perioperative mortality"),
        )],
        measured: None,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RcriInput {
    /// Intraperitoneal, intrathoracic or suprainguinal vascular.
    pub high_risk_surgery: bool,
    pub ischemic_heart_disease: bool,
    pub heart_failure: bool,
    pub cerebrovascular_disease: bool,
    pub diabetes_insulin: bool,
    /// Creatinine > 2 mg/dL.
    pub renal_insufficiency: bool,
}

/// Major cardiac complication rate (%) for 0, 1, 2 and 3+ criteria.
const RCRI_COMPLICATIONS: [f64; 4] = [0.4, 0.9, 6.6, 11.0];

/// Revised Cardiac Risk Index (Lee).
pub fn rcri(input: &RcriInput) -> ScoreResult {
    let score = weighted_sum(&[
        (input.high_risk_surgery, 1),
        (input.ischemic_heart_disease, 1),
        (input.heart_failure, 1),
        (input.cerebrovascular_disease, 1),
        (input.diabetes_insulin, 1),
        (input.renal_insufficiency, 1),
    ]);
    let rate = indexed_rate(f64::from(score), &RCRI_COMPLICATIONS);
    let risk_tier = band(
        f64::from(score),
        &[(Cut::AtLeast(3.0), RiskTier::High), (Cut::AtLeast(2.0), RiskTier::Moderate)],
        RiskTier::Low,
    );

    ScoreResult {
        score: f64::from(score),
        max_score: 6.0,
        risk_tier,
        risk_percentage: rate,
        interpretation: format!(
            "RCRI Score: {score} - {rate}% risk of major cardiac complications"
        ),
        recommendations: match risk_tier {
            RiskTier::Low => vec!["Proceed with surgery".to_string()],
            RiskTier::Moderate => vec![
                "Consider pre-operative BNP or troponin".to_string(),
                "Functional capacity assessment".to_string(),
            ],
            _ => vec![
                "Cardiology consultation before elective surgery".to_string(),
                "Post-operative troponin surveillance".to_string(),
            ],
        },
        management_steps: vec![ManagementStep::new(
            if risk_tier == RiskTier::High { Priority::Urgent } else { Priority::Routine },
            "Peri-operative cardiac risk optimisation",
            format!("RCRI {score} predicts {rate}% major cardiac events"),
        )],
        measured: None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CapriniAge {
    Under41,
    From41To60,
    From61To74,
    Over74,
}

impl CapriniAge {
    pub fn points(self) -> u32 {
        match self {
            Self::Under41 => 0,
            Self::From41To60 => 1,
            Self::From61To74 => 2,
            Self::Over74 => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CapriniInput {
    pub age: CapriniAge,
    pub minor_surgery: bool,
    /// Major surgery > 45 minutes.
    pub major_surgery: bool,
    /// BMI > 25.
    pub bmi: bool,
    pub varicose_veins: bool,
    pub current_cancer: bool,
    pub previous_vte: bool,
    pub thrombophilia: bool,
    /// Confined to bed > 72 hours.
    pub immobility: bool,
}

/// Post-operative VTE incidence (%) by tier.
const CAPRINI_VTE: TierRates = TierRates {
    low: 2.0,
    moderate: 10.0,
    high: 20.0,
    critical: 40.0,
};

/// Caprini venous thromboembolism risk assessment.
pub fn caprini(input: &CapriniInput) -> ScoreResult {
    let score = input.age.points()
        + weighted_sum(&[
            (input.minor_surgery, 1),
            (input.major_surgery, 2),
            (input.bmi, 1),
            (input.varicose_veins, 1),
            (input.current_cancer, 2),
            (input.previous_vte, 3),
            (input.thrombophilia, 3),
            (input.immobility, 2),
        ]);
    let risk_tier = band(
        f64::from(score),
        &[
            (Cut::AtMost(2.0), RiskTier::Low),
            (Cut::AtMost(4.0), RiskTier::Moderate),
            (Cut::AtMost(6.0), RiskTier::High),
        ],
        RiskTier::Critical,
    );
    let vte = CAPRINI_VTE.rate(risk_tier);

    let prophylaxis = match risk_tier {
        RiskTier::Low => "Early ambulation; mechanical prophylaxis optional",
        RiskTier::Moderate => "Mechanical or pharmacological prophylaxis",
        RiskTier::High => "Pharmacological prophylaxis plus mechanical prophylaxis",
        RiskTier::Critical => "Combined prophylaxis; consider extended-duration anticoagulation",
    };

    ScoreResult {
        score: f64::from(score),
        max_score: 18.0,
        risk_tier,
        risk_percentage: vte,
        interpretation: format!("Caprini Score: {score} - {risk_tier} RISK ({vte}% VTE risk)"),
        recommendations: vec![
            prophylaxis.to_string(),
            "Reassess bleeding risk before anticoagulation".to_string(),
        ],
        management_steps: vec![ManagementStep::new(
            if risk_tier >= RiskTier::High { Priority::Urgent } else { Priority::Routine },
            prophylaxis,
            format!("Caprini {score} predicts {vte}% VTE incidence"),
        )],
        measured: None,
    }
}
