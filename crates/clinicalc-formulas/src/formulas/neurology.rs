//! Stroke and consciousness scales: NIHSS, Glasgow Coma Scale, ABCD².

use clinicalc_core::models::result::{ManagementStep, ScoreResult};
use clinicalc_core::models::risk::{Priority, RiskTier};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::lines;
use crate::classifier::{band, weighted_sum, Cut, TierRates};

/// The fifteen NIH Stroke Scale exam items, each graded from 0 up to its
/// own published maximum (2, 3 or 4). The maxima add up to 42.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NihssInput {
    pub loc: f64,
    pub loc_questions: f64,
    pub loc_commands: f64,
    pub gaze: f64,
    pub visual: f64,
    pub facial_palsy: f64,
    pub motor_arm_left: f64,
    pub motor_arm_right: f64,
    pub motor_leg_left: f64,
    pub motor_leg_right: f64,
    pub limb_ataxia: f64,
    pub sensory: f64,
    pub language: f64,
    pub dysarthria: f64,
    pub extinction: f64,
}

impl NihssInput {
    pub fn items(&self) -> [f64; 15] {
        [
            self.loc,
            self.loc_questions,
            self.loc_commands,
            self.gaze,
            self.visual,
            self.facial_palsy,
            self.motor_arm_left,
            self.motor_arm_right,
            self.motor_leg_left,
            self.motor_leg_right,
            self.limb_ataxia,
            self.sensory,
            self.language,
            self.dysarthria,
            self.extinction,
        ]
    }
}

/// NIH Stroke Scale. Items are summed as given, so the score stays within
/// `max_score` only when every item is within its own grade range.
pub fn nihss(input: &NihssInput) -> ScoreResult {
    let score: f64 = input.items().iter().sum();

    let (risk_tier, interpretation, recommendations) = if score == 0.0 {
        (
            RiskTier::Low,
            "No stroke symptoms detected",
            lines(&["Continue routine care", "Monitor for symptom development"]),
        )
    } else if score <= 4.0 {
        (
            RiskTier::Low,
            "Minor stroke - Consider thrombolytics if within window",
            lines(&[
                "Assess thrombolytic eligibility (within 4.5 hours)",
                "Neurology consultation",
                "Intensive monitoring",
            ]),
        )
    } else if score <= 14.0 {
        (
            RiskTier::Moderate,
            "Moderate stroke - High thrombolytic benefit",
            lines(&[
                "Activate stroke protocol",
                "Thrombolytics indicated if within 4.5 hours",
                "ICU admission",
                "Thrombectomy evaluation if within 24 hours",
            ]),
        )
    } else if score <= 20.0 {
        (
            RiskTier::High,
            "Moderate-to-severe stroke - Consider thrombectomy",
            lines(&[
                "Activate stroke protocol",
                "Thrombectomy evaluation (if within 24 hours)",
                "ICU admission",
                "Neurology consultation",
            ]),
        )
    } else {
        (
            RiskTier::Critical,
            "Severe stroke - Highest mortality risk",
            lines(&[
                "ICU admission",
                "Airway protection consideration",
                "Neurology/neurosurgery consultation",
                "Family discussion regarding prognosis",
            ]),
        )
    };

    let risk_percentage = band(
        score,
        &[(Cut::AtLeast(20.0), 90.0), (Cut::AtLeast(14.0), 70.0), (Cut::AtLeast(5.0), 40.0)],
        10.0,
    );

    ScoreResult {
        score,
        max_score: 42.0,
        risk_tier,
        risk_percentage,
        interpretation: interpretation.to_string(),
        recommendations,
        management_steps: vec![
            ManagementStep::new(
                if score >= 14.0 { Priority::Immediate } else { Priority::Urgent },
                "Activate stroke protocol",
                format!("NIHSS {score} indicates significant stroke burden"),
            ),
            ManagementStep::new(
                Priority::Immediate,
                "Stat CT/CTA head",
                "Differentiate ischemic vs hemorrhagic stroke",
            ),
        ],
        measured: None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GcsInput {
    /// 1–4.
    pub eye_opening: f64,
    /// 1–5.
    pub verbal_response: f64,
    /// 1–6.
    pub motor_response: f64,
}

/// Glasgow Coma Scale. Lower is worse.
pub fn gcs(input: &GcsInput) -> ScoreResult {
    let score = input.eye_opening + input.verbal_response + input.motor_response;

    let (risk_tier, interpretation, recommendations) = if score >= 13.0 {
        (
            RiskTier::Low,
            "Mild head injury - Good prognosis",
            lines(&["Observation", "Repeat neuro checks q1h", "Discharge if criteria met"]),
        )
    } else if score >= 9.0 {
        (
            RiskTier::Moderate,
            "Moderate head injury - Consider ICU admission",
            lines(&[
                "ICU admission",
                "CT head if not done",
                "Neuro checks q15-30min",
                "Prepare for possible intubation",
            ]),
        )
    } else if score >= 6.0 {
        (
            RiskTier::High,
            "Severe head injury - Intubation likely needed",
            lines(&[
                "ICU admission mandatory",
                "Prepare for intubation",
                "Neurosurgery consultation",
                "ICP monitoring consideration",
            ]),
        )
    } else {
        (
            RiskTier::Critical,
            "Critical head injury - Immediate intubation required",
            lines(&[
                "Immediate intubation",
                "ICU admission",
                "Neurosurgery consultation",
                "ICP monitoring",
            ]),
        )
    };

    let risk_percentage = match risk_tier {
        RiskTier::Low => 5.0,
        RiskTier::Moderate => 20.0,
        RiskTier::High => 60.0,
        RiskTier::Critical => 95.0,
    };

    let airway = score <= 8.0;
    ScoreResult {
        score,
        max_score: 15.0,
        risk_tier,
        risk_percentage,
        interpretation: interpretation.to_string(),
        recommendations,
        management_steps: vec![ManagementStep::new(
            if airway { Priority::Immediate } else { Priority::Urgent },
            if airway { "Prepare for intubation" } else { "ICU admission" },
            format!("GCS {score} indicates severe neurological injury"),
        )],
        measured: None,
    }
}

/// Clinical features of the index TIA, scored 0/1/2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TiaFeatures {
    Other,
    SpeechDisturbance,
    UnilateralWeakness,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Abcd2Input {
    pub age_60: bool,
    /// BP >= 140/90 at first assessment.
    pub hypertension: bool,
    pub clinical_features: TiaFeatures,
    /// Minutes.
    pub duration: f64,
    pub diabetes: bool,
}

const ABCD2_STROKE_RISK: TierRates = TierRates {
    low: 1.0,
    moderate: 4.1,
    high: 8.1,
    critical: 8.1,
};

/// ABCD² score: 2-day stroke risk after transient ischaemic attack.
pub fn abcd2(input: &Abcd2Input) -> ScoreResult {
    let clinical = match input.clinical_features {
        TiaFeatures::UnilateralWeakness => 2,
        TiaFeatures::SpeechDisturbance => 1,
        TiaFeatures::Other => 0,
    };
    let duration = band(input.duration, &[(Cut::AtLeast(60.0), 2), (Cut::AtLeast(10.0), 1)], 0);
    let score = weighted_sum(&[(input.age_60, 1), (input.hypertension, 1), (input.diabetes, 1)])
        + clinical
        + duration;

    let risk_tier = band(
        f64::from(score),
        &[(Cut::AtMost(3.0), RiskTier::Low), (Cut::AtMost(5.0), RiskTier::Moderate)],
        RiskTier::High,
    );
    let risk = ABCD2_STROKE_RISK.rate(risk_tier);

    ScoreResult {
        score: f64::from(score),
        max_score: 7.0,
        risk_tier,
        risk_percentage: risk,
        interpretation: format!("ABCD² Score: {score} - 2-day stroke risk: {risk}%"),
        recommendations: vec![
            match risk_tier {
                RiskTier::Low => "Outpatient TIA clinic review within 7 days".to_string(),
                _ => "Specialist TIA assessment within 24 hours".to_string(),
            },
            "Start antiplatelet therapy unless contraindicated".to_string(),
            "Carotid imaging and ECG".to_string(),
        ],
        management_steps: vec![ManagementStep::new(
            if risk_tier >= RiskTier::Moderate { Priority::Urgent } else { Priority::Routine },
            "Secondary stroke prevention work-up",
            format!("ABCD² {score} predicts {risk}% 2-day stroke risk"),
        )],
        measured: None,
    }
}
