//! Respiratory infection and pulmonary embolism severity: CURB-65,
//! SMART-COP, PSI/PORT, Centor, PESI.

use clinicalc_core::models::result::{ManagementStep, ScoreResult};
use clinicalc_core::models::risk::{Priority, RiskTier};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::lines;
use crate::classifier::{band, indexed_rate, weighted_sum, Cut, TierRates};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Curb65Input {
    pub confusion: bool,
    /// Urea > 7 mmol/L (BUN > 19 mg/dL).
    pub urea: bool,
    /// Respiratory rate >= 30.
    pub respiratory_rate: bool,
    /// Systolic < 90 or diastolic <= 60 mmHg.
    pub blood_pressure: bool,
    pub age_65: bool,
}

/// 30-day mortality (%) by exact score 0..=5.
const CURB65_MORTALITY: [f64; 6] = [0.7, 3.2, 13.0, 17.0, 41.5, 57.0];

pub fn curb65(input: &Curb65Input) -> ScoreResult {
    let score = weighted_sum(&[
        (input.confusion, 1),
        (input.urea, 1),
        (input.respiratory_rate, 1),
        (input.blood_pressure, 1),
        (input.age_65, 1),
    ]);
    let mortality = indexed_rate(f64::from(score), &CURB65_MORTALITY);
    let (risk_tier, disposition, action, priority) = match score {
        0 => (
            RiskTier::Low,
            "Outpatient management possible",
            "Outpatient management",
            Priority::Routine,
        ),
        1 | 2 => (
            RiskTier::Moderate,
            "Hospital admission recommended",
            "Hospital admission",
            Priority::Urgent,
        ),
        _ => (
            RiskTier::High,
            "ICU admission strongly recommended",
            "ICU admission",
            Priority::Immediate,
        ),
    };

    ScoreResult {
        score: f64::from(score),
        max_score: 5.0,
        risk_tier,
        risk_percentage: mortality,
        interpretation: format!(
            "CURB-65 Score: {score} - {risk_tier} RISK ({mortality}% 30-day mortality)"
        ),
        recommendations: vec![
            disposition.to_string(),
            "Empiric antibiotics based on local resistance".to_string(),
            "Oxygen to maintain SpO2 >90%".to_string(),
            "Supportive care".to_string(),
        ],
        management_steps: vec![ManagementStep::new(
            priority,
            action,
            format!("CURB-65 {score} predicts {mortality}% mortality"),
        )],
        measured: None,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SmartCopInput {
    /// Systolic < 90 mmHg. 2 points.
    pub systolic_bp: bool,
    pub multilobar: bool,
    /// Albumin < 3.5 g/dL.
    pub albumin: bool,
    /// Age-adjusted tachypnoea.
    pub respiratory_rate: bool,
    /// Heart rate >= 125.
    pub tachycardia: bool,
    pub confusion: bool,
    /// Age-adjusted hypoxaemia. 2 points.
    pub oxygen: bool,
    /// Arterial pH < 7.35. 2 points.
    pub ph: bool,
}

/// Need for intensive respiratory or vasopressor support, by tier.
const SMART_COP_SUPPORT: TierRates = TierRates {
    low: 5.0,
    moderate: 12.5,
    high: 33.0,
    critical: 33.0,
};

pub fn smart_cop(input: &SmartCopInput) -> ScoreResult {
    let score = weighted_sum(&[
        (input.systolic_bp, 2),
        (input.multilobar, 1),
        (input.albumin, 1),
        (input.respiratory_rate, 1),
        (input.tachycardia, 1),
        (input.confusion, 1),
        (input.oxygen, 2),
        (input.ph, 2),
    ]);
    let risk_tier = band(
        f64::from(score),
        &[(Cut::AtMost(2.0), RiskTier::Low), (Cut::AtMost(4.0), RiskTier::Moderate)],
        RiskTier::High,
    );
    let support = SMART_COP_SUPPORT.rate(risk_tier);

    ScoreResult {
        score: f64::from(score),
        max_score: 11.0,
        risk_tier,
        risk_percentage: support,
        interpretation: format!(
            "SMART-COP Score: {score} - {risk_tier} RISK ({support}% need intensive respiratory or vasopressor support)"
        ),
        recommendations: match risk_tier {
            RiskTier::Low => vec![
                "Ward-level care appropriate".to_string(),
                "Reassess if clinical deterioration".to_string(),
            ],
            RiskTier::Moderate => vec![
                "Discuss with ICU early".to_string(),
                "High-dependency monitoring".to_string(),
            ],
            _ => vec![
                "ICU referral".to_string(),
                "Anticipate ventilatory or vasopressor support".to_string(),
            ],
        },
        management_steps: vec![ManagementStep::new(
            match risk_tier {
                RiskTier::Low => Priority::Routine,
                RiskTier::Moderate => Priority::Urgent,
                _ => Priority::Immediate,
            },
            "Determine level of care",
            format!("SMART-COP {score} predicts {support}% need for IRVS"),
        )],
        measured: None,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PesiInput {
    pub age: f64,
    pub male: bool,
    pub cancer: bool,
    pub heart_failure: bool,
    pub chronic_lung_disease: bool,
    /// Pulse >= 110.
    pub pulse: bool,
    /// Systolic < 100 mmHg.
    pub systolic_bp: bool,
    /// Respiratory rate >= 30.
    pub respiratory_rate: bool,
    /// Temperature < 36 °C.
    pub temperature: bool,
    pub altered_mental: bool,
    /// SaO2 < 90%.
    pub oxygen_sat: bool,
}

/// PESI risk class I–V.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum PesiClass {
    I,
    II,
    III,
    IV,
    V,
}

impl PesiClass {
    pub fn from_score(score: f64) -> Self {
        use Cut::AtLeast;
        band(
            score,
            &[
                (AtLeast(126.0), Self::V),
                (AtLeast(106.0), Self::IV),
                (AtLeast(86.0), Self::III),
                (AtLeast(66.0), Self::II),
            ],
            Self::I,
        )
    }

    /// 30-day mortality (%), upper bound of the published range.
    pub fn mortality(self) -> f64 {
        match self {
            Self::I => 1.6,
            Self::II => 3.5,
            Self::III => 7.1,
            Self::IV => 11.4,
            Self::V => 24.5,
        }
    }

    pub fn tier(self) -> RiskTier {
        match self {
            Self::I | Self::II => RiskTier::Low,
            Self::III => RiskTier::Moderate,
            Self::IV => RiskTier::High,
            Self::V => RiskTier::Critical,
        }
    }
}

/// Upper bound used for display: age 120 plus every criterion.
pub const PESI_MAX_SCORE: f64 = 350.0;

/// Pulmonary Embolism Severity Index. Age counts as points unchanged, so
/// the score stays within `max_score` only for ages up to 120.
pub fn pesi(input: &PesiInput) -> ScoreResult {
    let points = weighted_sum(&[
        (input.male, 10),
        (input.cancer, 30),
        (input.heart_failure, 10),
        (input.chronic_lung_disease, 10),
        (input.pulse, 20),
        (input.systolic_bp, 30),
        (input.respiratory_rate, 20),
        (input.temperature, 20),
        (input.altered_mental, 60),
        (input.oxygen_sat, 20),
    ]);
    let score = input.age + f64::from(points);
    let class = PesiClass::from_score(score);
    let mortality = class.mortality();
    let risk_tier = class.tier();
    let outpatient = class <= PesiClass::II;

    ScoreResult {
        score,
        max_score: PESI_MAX_SCORE,
        risk_tier,
        risk_percentage: mortality,
        interpretation: format!(
            "PESI Score: {score} - Class {class:?} ({mortality}% 30-day mortality)"
        ),
        recommendations: vec![
            if outpatient {
                "Consider outpatient treatment if no other contraindications".to_string()
            } else {
                "Hospital admission for anticoagulation and monitoring".to_string()
            },
            "Anticoagulation unless contraindicated".to_string(),
            "Assess right ventricular function and troponin".to_string(),
        ],
        management_steps: vec![ManagementStep::new(
            match class {
                PesiClass::I | PesiClass::II => Priority::Routine,
                PesiClass::III | PesiClass::IV => Priority::Urgent,
                PesiClass::V => Priority::Immediate,
            },
            if outpatient { "Early discharge pathway" } else { "Inpatient management" },
            format!("PESI class {class:?} carries {mortality}% 30-day mortality"),
        )],
        measured: None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PsiInput {
    pub age: f64,
    pub male: bool,
    pub nursing_home: bool,
    pub neoplastic_disease: bool,
    pub liver_disease: bool,
    pub heart_failure: bool,
    pub cerebrovascular_disease: bool,
    pub renal_disease: bool,
    pub altered_mental: bool,
    /// Breaths/min.
    pub respiratory_rate: f64,
    /// mmHg.
    pub systolic_bp: f64,
    /// °C.
    pub temperature: f64,
    /// Beats/min.
    pub pulse: f64,
    /// Arterial pH.
    pub ph: f64,
    /// mg/dL.
    pub bun: f64,
    /// mEq/L.
    pub sodium: f64,
    /// mg/dL.
    pub glucose: f64,
    /// %.
    pub hematocrit: f64,
    /// mmHg.
    pub pao2: f64,
    pub pleural_effusion: bool,
}

impl PsiInput {
    fn has_comorbidity(&self) -> bool {
        self.neoplastic_disease
            || self.liver_disease
            || self.heart_failure
            || self.cerebrovascular_disease
            || self.renal_disease
    }

    fn exam_points(&self) -> u32 {
        weighted_sum(&[
            (self.altered_mental, 20),
            (self.respiratory_rate >= 30.0, 20),
            (self.systolic_bp < 90.0, 20),
            (self.temperature < 35.0 || self.temperature >= 40.0, 15),
            (self.pulse >= 125.0, 10),
        ])
    }
}

/// PORT risk class I–V.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum PsiClass {
    I,
    II,
    III,
    IV,
    V,
}

impl PsiClass {
    /// Class II–V from the point total. Class I is assigned before any
    /// points are counted; see [`psi_class`].
    pub fn from_points(points: f64) -> Self {
        use Cut::Above;
        band(
            points,
            &[(Above(130.0), Self::V), (Above(90.0), Self::IV), (Above(70.0), Self::III)],
            Self::II,
        )
    }

    /// 30-day mortality (%).
    pub fn mortality(self) -> f64 {
        match self {
            Self::I => 0.1,
            Self::II => 0.6,
            Self::III => 0.9,
            Self::IV => 9.3,
            Self::V => 27.0,
        }
    }

    pub fn tier(self) -> RiskTier {
        match self {
            Self::I | Self::II => RiskTier::Low,
            Self::III => RiskTier::Moderate,
            Self::IV => RiskTier::High,
            Self::V => RiskTier::Critical,
        }
    }
}

/// Point total: age (less 10 for women) plus every weighted finding.
pub fn psi_points(input: &PsiInput) -> f64 {
    let findings = weighted_sum(&[
        (input.nursing_home, 10),
        (input.neoplastic_disease, 30),
        (input.liver_disease, 20),
        (input.heart_failure, 10),
        (input.cerebrovascular_disease, 10),
        (input.renal_disease, 10),
        (input.ph < 7.35, 30),
        (input.bun >= 30.0, 20),
        (input.sodium < 130.0, 20),
        (input.glucose >= 250.0, 10),
        (input.hematocrit < 30.0, 10),
        (input.pao2 < 60.0, 10),
        (input.pleural_effusion, 10),
    ]) + input.exam_points();
    let age = if input.male { input.age } else { input.age - 10.0 };
    age + f64::from(findings)
}

/// Class I covers patients 50 or younger with no comorbidity and a normal
/// examination; everyone else is classed by points.
pub fn psi_class(input: &PsiInput) -> PsiClass {
    if input.age <= 50.0 && !input.has_comorbidity() && input.exam_points() == 0 {
        PsiClass::I
    } else {
        PsiClass::from_points(psi_points(input))
    }
}

/// Upper bound used for display: age 120 plus every finding.
pub const PSI_MAX_SCORE: f64 = 405.0;

/// Pneumonia Severity Index (PORT). Age counts as points, so the score
/// stays within `max_score` only for adult ages up to 120.
pub fn psi_port(input: &PsiInput) -> ScoreResult {
    let score = psi_points(input);
    let class = psi_class(input);
    let mortality = class.mortality();
    let risk_tier = class.tier();

    let (setting, priority) = match class {
        PsiClass::I | PsiClass::II => ("Outpatient treatment", Priority::Routine),
        PsiClass::III => ("Outpatient or brief observation admission", Priority::Routine),
        PsiClass::IV => ("Hospital admission", Priority::Urgent),
        PsiClass::V => ("Hospital admission; assess for ICU", Priority::Immediate),
    };

    ScoreResult {
        score,
        max_score: PSI_MAX_SCORE,
        risk_tier,
        risk_percentage: mortality,
        interpretation: format!(
            "PSI Score: {score} - Class {class:?} ({mortality}% 30-day mortality)"
        ),
        recommendations: vec![
            setting.to_string(),
            "Empiric antibiotics per local guidelines".to_string(),
            "Review social factors before discharge".to_string(),
        ],
        management_steps: vec![ManagementStep::new(
            priority,
            setting,
            format!("PSI class {class:?} carries {mortality}% 30-day mortality"),
        )],
        measured: None,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CentorInput {
    /// Temperature > 38 °C.
    pub fever: bool,
    pub cough_absent: bool,
    pub tonsillar_exudate: bool,
    pub tender_anterior_nodes: bool,
    pub age_3_14: bool,
}

/// Group A streptococcal pharyngitis probability (%) by score 0..=4
/// (higher scores share the last entry).
const CENTOR_STREP_RISK: [f64; 5] = [2.5, 10.0, 17.0, 35.0, 53.0];

/// Centor criteria with the McIsaac paediatric age point.
pub fn centor(input: &CentorInput) -> ScoreResult {
    let score = weighted_sum(&[
        (input.fever, 1),
        (input.cough_absent, 1),
        (input.tonsillar_exudate, 1),
        (input.tender_anterior_nodes, 1),
        (input.age_3_14, 1),
    ]);
    let risk = indexed_rate(f64::from(score), &CENTOR_STREP_RISK);
    let risk_tier = band(
        f64::from(score),
        &[(Cut::AtLeast(4.0), RiskTier::High), (Cut::AtLeast(2.0), RiskTier::Moderate)],
        RiskTier::Low,
    );

    let recommendations = match risk_tier {
        RiskTier::Low => lines(&["No testing or antibiotics", "Symptomatic treatment"]),
        RiskTier::Moderate => lines(&["Rapid antigen test or throat culture", "Antibiotics only if positive"]),
        _ => lines(&["Rapid antigen test", "Consider empiric antibiotics"]),
    };

    ScoreResult {
        score: f64::from(score),
        max_score: 5.0,
        risk_tier,
        risk_percentage: risk,
        interpretation: format!("Centor Score: {score} - {risk}% probability of streptococcal pharyngitis"),
        recommendations,
        management_steps: vec![ManagementStep::new(
            Priority::Routine,
            if risk_tier == RiskTier::Low { "Symptomatic care" } else { "Streptococcal testing" },
            format!("Centor {score} gives {risk}% pretest probability"),
        )],
        measured: None,
    }
}
