use std::sync::LazyLock;

use clinicalc_core::models::definition::{
    CalculatorDefinition, ChoiceOption, InputFieldSpec, Reference, ScoreOrientation,
};
use clinicalc_core::models::input::NormalizedInput;
use clinicalc_core::models::result::ScoreResult;
use clinicalc_formulas::formulas::neurology::{
    abcd2, gcs, nihss, Abcd2Input, GcsInput, NihssInput, TiaFeatures,
};

use super::definition;
use crate::error::EngineError;
use crate::Calculator;

/// NIHSS exam items: field id, label, highest grade.
const NIHSS_ITEMS: [(&str, &str, f64); 15] = [
    ("loc", "1a. Level of Consciousness", 3.0),
    ("loc_questions", "1b. LOC Questions (Month, Age)", 2.0),
    ("loc_commands", "1c. LOC Commands (Open/Close eyes, Fist)", 2.0),
    ("gaze", "2. Best Gaze", 2.0),
    ("visual", "3. Visual Fields", 3.0),
    ("facial_palsy", "4. Facial Palsy", 3.0),
    ("motor_arm_left", "5a. Motor Arm - Left", 4.0),
    ("motor_arm_right", "5b. Motor Arm - Right", 4.0),
    ("motor_leg_left", "6a. Motor Leg - Left", 4.0),
    ("motor_leg_right", "6b. Motor Leg - Right", 4.0),
    ("limb_ataxia", "7. Limb Ataxia", 2.0),
    ("sensory", "8. Sensory", 2.0),
    ("language", "9. Best Language", 3.0),
    ("dysarthria", "10. Dysarthria", 2.0),
    ("extinction", "11. Extinction/Inattention", 2.0),
];

pub struct Nihss;

impl Calculator for Nihss {
    fn definition(&self) -> &CalculatorDefinition {
        static DEFINITION: LazyLock<CalculatorDefinition> = LazyLock::new(|| {
            definition(
                "nihss",
                "NIHSS (NIH Stroke Scale)",
                "Acute stroke severity assessment - Determines thrombolytic eligibility",
                &["Neurology", "Stroke", "Emergency Medicine"],
                ScoreOrientation::HigherIsWorse,
                NIHSS_ITEMS
                    .iter()
                    .map(|(id, label, max)| InputFieldSpec::number(id, label, 0.0, *max, 0.0))
                    .collect(),
                vec![Reference::new(
                    "Brott T, et al.",
                    1989,
                    "Measurements of acute cerebral infarction: a clinical examination scale",
                    "Stroke",
                    "20",
                    "864-870",
                )],
            )
        });
        &DEFINITION
    }

    fn evaluate(&self, input: &NormalizedInput) -> Result<ScoreResult, EngineError> {
        Ok(nihss(&NihssInput {
            loc: input.number("loc")?,
            loc_questions: input.number("loc_questions")?,
            loc_commands: input.number("loc_commands")?,
            gaze: input.number("gaze")?,
            visual: input.number("visual")?,
            facial_palsy: input.number("facial_palsy")?,
            motor_arm_left: input.number("motor_arm_left")?,
            motor_arm_right: input.number("motor_arm_right")?,
            motor_leg_left: input.number("motor_leg_left")?,
            motor_leg_right: input.number("motor_leg_right")?,
            limb_ataxia: input.number("limb_ataxia")?,
            sensory: input.number("sensory")?,
            language: input.number("language")?,
            dysarthria: input.number("dysarthria")?,
            extinction: input.number("extinction")?,
        }))
    }
}

pub struct Abcd2;

impl Calculator for Abcd2 {
    fn definition(&self) -> &CalculatorDefinition {
        static DEFINITION: LazyLock<CalculatorDefinition> = LazyLock::new(|| {
            definition(
                "abcd2",
                "ABCD² Score",
                "TIA/Stroke risk after TIA - Guides urgent imaging and treatment",
                &["Neurology", "Stroke Prevention"],
                ScoreOrientation::HigherIsWorse,
                vec![
                    InputFieldSpec::boolean("age_60", "Age ≥60 years"),
                    InputFieldSpec::boolean("hypertension", "Blood Pressure ≥140/90 mmHg"),
                    InputFieldSpec::choice(
                        "clinical_features",
                        "Clinical Features",
                        vec![
                            ChoiceOption::weighted("Other symptoms", 0.0),
                            ChoiceOption::weighted("Speech disturbance without weakness", 1.0),
                            ChoiceOption::weighted("Unilateral weakness", 2.0),
                        ],
                        "Other symptoms",
                    ),
                    InputFieldSpec::number("duration", "Duration of Symptoms", 0.0, 1440.0, 0.0)
                        .with_unit("minutes"),
                    InputFieldSpec::boolean("diabetes", "Diabetes"),
                ],
                vec![Reference::new(
                    "Johnston SC, et al.",
                    2007,
                    "Validation and refinement of scores to predict very early stroke risk after transient ischaemic attack",
                    "Lancet",
                    "369",
                    "283-292",
                )],
            )
        });
        &DEFINITION
    }

    fn evaluate(&self, input: &NormalizedInput) -> Result<ScoreResult, EngineError> {
        let clinical_features = match input.weight("clinical_features")? {
            w if w >= 2.0 => TiaFeatures::UnilateralWeakness,
            w if w >= 1.0 => TiaFeatures::SpeechDisturbance,
            _ => TiaFeatures::Other,
        };
        Ok(abcd2(&Abcd2Input {
            age_60: input.flag("age_60")?,
            hypertension: input.flag("hypertension")?,
            clinical_features,
            duration: input.number("duration")?,
            diabetes: input.flag("diabetes")?,
        }))
    }
}

/// Glasgow Coma Scale. Lower totals are worse.
pub struct GlasgowComa;

impl Calculator for GlasgowComa {
    fn definition(&self) -> &CalculatorDefinition {
        static DEFINITION: LazyLock<CalculatorDefinition> = LazyLock::new(|| {
            let responses = |pairs: &[(&str, f64)]| {
                pairs
                    .iter()
                    .map(|(value, points)| ChoiceOption::weighted(value, *points))
                    .collect::<Vec<_>>()
            };
            definition(
                "glasgow_coma",
                "Glasgow Coma Scale",
                "Consciousness assessment - Evaluates neurological status",
                &["Neurology", "Critical Care", "Emergency Medicine", "Trauma"],
                ScoreOrientation::LowerIsWorse,
                vec![
                    InputFieldSpec::choice(
                        "eye_opening",
                        "Eye Opening",
                        responses(&[
                            ("No eye opening", 1.0),
                            ("To pain", 2.0),
                            ("To voice", 3.0),
                            ("Spontaneous", 4.0),
                        ]),
                        "Spontaneous",
                    ),
                    InputFieldSpec::choice(
                        "verbal_response",
                        "Verbal Response",
                        responses(&[
                            ("No verbal response", 1.0),
                            ("Incomprehensible sounds", 2.0),
                            ("Inappropriate words", 3.0),
                            ("Confused", 4.0),
                            ("Oriented", 5.0),
                        ]),
                        "Oriented",
                    ),
                    InputFieldSpec::choice(
                        "motor_response",
                        "Motor Response",
                        responses(&[
                            ("No motor response", 1.0),
                            ("Extension to pain", 2.0),
                            ("Abnormal flexion to pain", 3.0),
                            ("Withdrawal from pain", 4.0),
                            ("Localizes pain", 5.0),
                            ("Obeys commands", 6.0),
                        ]),
                        "Obeys commands",
                    ),
                ],
                vec![Reference::new(
                    "Teasdale G, Jennett B",
                    1974,
                    "Assessment of coma and impaired consciousness",
                    "Lancet",
                    "2",
                    "81-84",
                )],
            )
        });
        &DEFINITION
    }

    fn aliases(&self) -> &[&'static str] {
        &["gcs"]
    }

    fn evaluate(&self, input: &NormalizedInput) -> Result<ScoreResult, EngineError> {
        Ok(gcs(&GcsInput {
            eye_opening: input.weight("eye_opening")?,
            verbal_response: input.weight("verbal_response")?,
            motor_response: input.weight("motor_response")?,
        }))
    }
}
