//! Sepsis, deterioration and ICU severity scores: qSOFA, SOFA, APACHE II,
//! NEWS2.

use clinicalc_core::models::result::{ManagementStep, ScoreResult};
use clinicalc_core::models::risk::{Priority, RiskTier};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::lines;
use crate::classifier::{band, symmetric_points, Cut, TierRates};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QsofaInput {
    pub altered_mentation: bool,
    /// Breaths per minute.
    pub respiratory_rate: f64,
    /// mmHg.
    pub systolic_bp: f64,
}

/// Quick SOFA (Sepsis-3): one point each for altered mentation,
/// respiratory rate >= 22 and systolic BP < 100.
pub fn qsofa(input: &QsofaInput) -> ScoreResult {
    let mut score = 0u32;
    if input.altered_mentation {
        score += 1;
    }
    if input.respiratory_rate >= 22.0 {
        score += 1;
    }
    if input.systolic_bp < 100.0 {
        score += 1;
    }

    let positive = score >= 2;
    let (risk_tier, risk_percentage) = if positive {
        (RiskTier::High, 80.0)
    } else {
        (RiskTier::Low, 10.0)
    };

    let (interpretation, recommendations, steps) = if positive {
        (
            "HIGH RISK: Patient meets criteria for sepsis. Immediate ICU evaluation recommended.",
            lines(&[
                "Activate sepsis protocol immediately",
                "Obtain blood cultures before antibiotics",
                "Initiate broad-spectrum antibiotics within 1 hour",
                "Arrange ICU bed",
            ]),
            vec![
                ManagementStep::new(
                    Priority::Immediate,
                    "Activate sepsis protocol",
                    "qSOFA ≥2 predicts 10-fold mortality increase",
                ),
                ManagementStep::new(
                    Priority::Immediate,
                    "Blood cultures x2, lactate, CBC, CMP, LFTs",
                    "Identify source and assess organ dysfunction",
                ),
                ManagementStep::new(
                    Priority::Immediate,
                    "Empiric antibiotics (within 1 hour)",
                    "Each hour delay increases mortality by 7.6%",
                ),
            ],
        )
    } else {
        (
            "LOW RISK: Sepsis unlikely based on qSOFA criteria. Continue standard monitoring.",
            lines(&[
                "Continue routine monitoring",
                "Reassess if clinical deterioration",
                "Monitor vital signs q4h",
                "Consider repeat qSOFA in 6-12 hours",
            ]),
            vec![
                ManagementStep::new(Priority::Routine, "Continue standard care", "Low risk profile"),
                ManagementStep::new(
                    Priority::Routine,
                    "Routine labs if indicated",
                    "Identify source and assess organ dysfunction",
                ),
                ManagementStep::new(
                    Priority::Routine,
                    "Supportive care",
                    "Each hour delay increases mortality by 7.6%",
                ),
            ],
        )
    };

    ScoreResult {
        score: f64::from(score),
        max_score: 3.0,
        risk_tier,
        risk_percentage,
        interpretation: interpretation.to_string(),
        recommendations,
        management_steps: steps,
        measured: None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SofaInput {
    pub pao2_fio2: f64,
    /// ×10³/µL.
    pub platelets: f64,
    /// mg/dL.
    pub bilirubin: f64,
    /// Mean arterial pressure, mmHg.
    pub mean_arterial_pressure: f64,
    pub gcs: f64,
    /// mg/dL.
    pub creatinine: f64,
}

/// Per-organ SOFA points, 0–4 each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SofaComponents {
    pub respiratory: u32,
    pub coagulation: u32,
    pub hepatic: u32,
    pub cardiovascular: u32,
    pub neurological: u32,
    pub renal: u32,
}

impl SofaComponents {
    pub fn total(&self) -> u32 {
        self.respiratory
            + self.coagulation
            + self.hepatic
            + self.cardiovascular
            + self.neurological
            + self.renal
    }
}

pub fn sofa_components(input: &SofaInput) -> SofaComponents {
    use Cut::{AtLeast, AtMost, Below};
    SofaComponents {
        respiratory: band(
            input.pao2_fio2,
            &[(Below(100.0), 4), (Below(200.0), 3), (Below(300.0), 2), (Below(400.0), 1)],
            0,
        ),
        coagulation: band(
            input.platelets,
            &[(Below(20.0), 4), (Below(50.0), 3), (Below(100.0), 2), (Below(150.0), 1)],
            0,
        ),
        hepatic: band(
            input.bilirubin,
            &[(AtLeast(12.0), 4), (AtLeast(6.0), 3), (AtLeast(2.0), 2), (AtLeast(1.2), 1)],
            0,
        ),
        cardiovascular: band(
            input.mean_arterial_pressure,
            &[(Below(70.0), 4), (Below(80.0), 3), (Below(90.0), 2), (Below(100.0), 1)],
            0,
        ),
        neurological: band(
            input.gcs,
            &[(AtMost(6.0), 4), (AtMost(9.0), 3), (AtMost(12.0), 2), (AtMost(14.0), 1)],
            0,
        ),
        renal: band(
            input.creatinine,
            &[(AtLeast(5.0), 4), (AtLeast(3.5), 3), (AtLeast(2.0), 2), (AtLeast(1.2), 1)],
            0,
        ),
    }
}

const SOFA_MORTALITY: TierRates = TierRates {
    low: 5.0,
    moderate: 25.0,
    high: 60.0,
    critical: 95.0,
};

/// Sequential Organ Failure Assessment: six organ systems, 0–4 points each.
pub fn sofa(input: &SofaInput) -> ScoreResult {
    let score = sofa_components(input).total();
    let risk_tier = band(
        f64::from(score),
        &[
            (Cut::AtLeast(11.0), RiskTier::Critical),
            (Cut::AtLeast(8.0), RiskTier::High),
            (Cut::AtLeast(5.0), RiskTier::Moderate),
        ],
        RiskTier::Low,
    );
    let mortality = SOFA_MORTALITY.rate(risk_tier);

    ScoreResult {
        score: f64::from(score),
        max_score: 24.0,
        risk_tier,
        risk_percentage: mortality,
        interpretation: format!(
            "SOFA Score: {score}/24 - {risk_tier} RISK ({mortality}% ICU mortality)"
        ),
        recommendations: vec![
            format!("Predicted ICU mortality: {mortality}%"),
            "Assess for organ dysfunction".to_string(),
            "Consider ICU admission if score ≥8".to_string(),
            "Repeat SOFA daily for trend assessment".to_string(),
        ],
        management_steps: vec![
            ManagementStep::new(
                if score >= 11 { Priority::Immediate } else { Priority::Urgent },
                "ICU admission and continuous monitoring",
                format!("SOFA {score} predicts {mortality}% mortality"),
            ),
            ManagementStep::new(
                Priority::Urgent,
                "Identify and treat organ dysfunction",
                "Each organ system failure increases mortality exponentially",
            ),
        ],
        measured: None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ApacheIiInput {
    /// °C.
    pub temperature: f64,
    pub heart_rate: f64,
    pub respiratory_rate: f64,
    /// mmHg.
    pub systolic_bp: f64,
    pub age: f64,
}

const APACHE_MORTALITY: TierRates = TierRates {
    low: 8.0,
    moderate: 25.0,
    high: 55.0,
    critical: 85.0,
};

/// Vital-sign and age subset of APACHE II.
pub fn apache_ii(input: &ApacheIiInput) -> ScoreResult {
    use Cut::{AtLeast, AtMost};

    let temperature = symmetric_points(
        input.temperature,
        &[
            (AtLeast(41.0), AtMost(29.9), 4),
            (AtLeast(39.0), AtMost(32.0), 3),
            (AtLeast(38.5), AtMost(32.1), 1),
        ],
    );
    let heart_rate = symmetric_points(
        input.heart_rate,
        &[
            (AtLeast(180.0), AtMost(39.0), 4),
            (AtLeast(140.0), AtMost(54.0), 3),
            (AtLeast(110.0), AtMost(69.0), 1),
        ],
    );
    let respiratory_rate = symmetric_points(
        input.respiratory_rate,
        &[
            (AtLeast(50.0), AtMost(5.0), 4),
            (AtLeast(35.0), AtMost(9.0), 3),
            (AtLeast(25.0), AtMost(11.0), 1),
        ],
    );
    let systolic = symmetric_points(
        input.systolic_bp,
        &[
            (AtLeast(180.0), AtMost(49.0), 4),
            (AtLeast(130.0), AtMost(69.0), 3),
            (AtLeast(110.0), AtMost(79.0), 1),
        ],
    );
    let age = band(
        input.age,
        &[(AtLeast(75.0), 6), (AtLeast(65.0), 5), (AtLeast(55.0), 3), (AtLeast(45.0), 1)],
        0,
    );

    let score = temperature + heart_rate + respiratory_rate + systolic + age;
    let risk_tier = band(
        f64::from(score),
        &[
            (AtLeast(25.0), RiskTier::Critical),
            (AtLeast(20.0), RiskTier::High),
            (AtLeast(15.0), RiskTier::Moderate),
        ],
        RiskTier::Low,
    );
    let mortality = APACHE_MORTALITY.rate(risk_tier);

    ScoreResult {
        score: f64::from(score),
        max_score: 71.0,
        risk_tier,
        risk_percentage: mortality,
        interpretation: format!(
            "APACHE II Score: {score} - {risk_tier} RISK ({mortality}% predicted mortality)"
        ),
        recommendations: vec![
            format!("Predicted ICU mortality: {mortality}%"),
            "Daily APACHE II assessment".to_string(),
            "Intensive monitoring and support".to_string(),
            "Multidisciplinary team involvement".to_string(),
        ],
        management_steps: vec![ManagementStep::new(
            if score >= 25 { Priority::Immediate } else { Priority::Urgent },
            "ICU admission with intensive monitoring",
            format!("APACHE II {score} indicates high severity"),
        )],
        measured: None,
    }
}

/// ACVPU level of consciousness.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Consciousness {
    #[default]
    Alert,
    NewConfusion,
    Voice,
    Pain,
    Unresponsive,
}

impl Consciousness {
    pub fn points(self) -> u32 {
        if self == Self::Alert { 0 } else { 3 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct News2Input {
    /// Breaths per minute.
    pub respiratory_rate: f64,
    /// SpO2 %, scored on scale 1.
    pub spo2: f64,
    pub supplemental_oxygen: bool,
    /// °C.
    pub temperature: f64,
    /// mmHg.
    pub systolic_bp: f64,
    /// Beats per minute.
    pub heart_rate: f64,
    pub consciousness: Consciousness,
}

/// Per-parameter NEWS2 points, in chart order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct News2Components {
    pub respiratory_rate: u32,
    pub spo2: u32,
    pub supplemental_oxygen: u32,
    pub temperature: u32,
    pub systolic_bp: u32,
    pub heart_rate: u32,
    pub consciousness: u32,
}

impl News2Components {
    fn all(&self) -> [u32; 7] {
        [
            self.respiratory_rate,
            self.spo2,
            self.supplemental_oxygen,
            self.temperature,
            self.systolic_bp,
            self.heart_rate,
            self.consciousness,
        ]
    }

    pub fn total(&self) -> u32 {
        self.all().iter().sum()
    }

    /// Any single parameter scoring 3 (a "red score").
    pub fn has_red_score(&self) -> bool {
        self.all().contains(&3)
    }
}

pub fn news2_components(input: &News2Input) -> News2Components {
    use Cut::{AtMost, Below};

    News2Components {
        respiratory_rate: band(
            input.respiratory_rate,
            &[(AtMost(8.0), 3), (AtMost(11.0), 1), (AtMost(20.0), 0), (AtMost(24.0), 2)],
            3,
        ),
        spo2: band(
            input.spo2,
            &[(AtMost(91.0), 3), (AtMost(93.0), 2), (AtMost(95.0), 1)],
            0,
        ),
        supplemental_oxygen: if input.supplemental_oxygen { 2 } else { 0 },
        temperature: band(
            input.temperature,
            &[(AtMost(35.0), 3), (AtMost(36.0), 1), (AtMost(38.0), 0), (AtMost(39.0), 1)],
            2,
        ),
        systolic_bp: band(
            input.systolic_bp,
            &[(AtMost(90.0), 3), (AtMost(100.0), 2), (AtMost(110.0), 1), (Below(220.0), 0)],
            3,
        ),
        heart_rate: band(
            input.heart_rate,
            &[
                (AtMost(40.0), 3),
                (AtMost(50.0), 1),
                (AtMost(90.0), 0),
                (AtMost(110.0), 1),
                (AtMost(130.0), 2),
            ],
            3,
        ),
        consciousness: input.consciousness.points(),
    }
}

/// Approximate rate (%) of cardiac arrest, unplanned ICU admission or death
/// within 24 hours for each clinical-risk group.
const NEWS2_DETERIORATION: TierRates = TierRates {
    low: 1.0,
    moderate: 3.0,
    high: 7.0,
    critical: 19.0,
};

/// National Early Warning Score 2.
///
/// Clinical risk is set by the aggregate (0–4 low, 5–6 medium, 7+ high),
/// except that a red score in any single parameter raises an otherwise low
/// aggregate to low-medium. Medium and high map to the high and critical
/// tiers.
pub fn news2(input: &News2Input) -> ScoreResult {
    let components = news2_components(input);
    let score = components.total();
    let risk_tier = match score {
        7.. => RiskTier::Critical,
        5..=6 => RiskTier::High,
        _ if components.has_red_score() => RiskTier::Moderate,
        _ => RiskTier::Low,
    };
    let rate = NEWS2_DETERIORATION.rate(risk_tier);

    let (response, frequency, priority) = match risk_tier {
        RiskTier::Low if score == 0 => ("Continue routine monitoring", "Minimum 12-hourly observations", Priority::Routine),
        RiskTier::Low => ("Inform registered nurse to assess", "Minimum 4-6 hourly observations", Priority::Routine),
        RiskTier::Moderate => ("Urgent ward-based review by a clinician", "Minimum hourly observations", Priority::Urgent),
        RiskTier::High => ("Urgent review by a clinician competent in acute illness", "Minimum hourly observations", Priority::Urgent),
        RiskTier::Critical => ("Emergency assessment by a critical care team", "Continuous monitoring of vital signs", Priority::Immediate),
    };

    ScoreResult {
        score: f64::from(score),
        max_score: 20.0,
        risk_tier,
        risk_percentage: rate,
        interpretation: format!("NEWS2 Score: {score} - {risk_tier} clinical risk"),
        recommendations: vec![response.to_string(), frequency.to_string()],
        management_steps: vec![ManagementStep::new(
            priority,
            response,
            format!("NEWS2 {score} triggers {}", frequency.to_lowercase()),
        )],
        measured: None,
    }
}
