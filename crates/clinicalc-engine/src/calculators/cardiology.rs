use std::sync::LazyLock;

use clinicalc_core::models::definition::{
    CalculatorDefinition, ChoiceOption, InputFieldSpec, Reference, ScoreOrientation,
};
use clinicalc_core::models::input::NormalizedInput;
use clinicalc_core::models::result::ScoreResult;
use clinicalc_formulas::formulas::cardiology::{
    ascvd, cha2ds2_vasc, framingham, has_bled, heart, timi, AscvdInput, AscvdRace,
    CardiovascularProfile, Cha2ds2VascInput, HasBledInput, HeartInput, TimiInput,
};

use super::definition;
use crate::error::EngineError;
use crate::Calculator;

/// A 0/1/2-point select, as used by every HEART component except age.
fn graded(id: &str, label: &str, options: [&str; 3]) -> InputFieldSpec {
    InputFieldSpec::choice(
        id,
        label,
        vec![
            ChoiceOption::weighted(options[0], 0.0),
            ChoiceOption::weighted(options[1], 1.0),
            ChoiceOption::weighted(options[2], 2.0),
        ],
        options[0],
    )
}

pub struct Heart;

impl Calculator for Heart {
    fn definition(&self) -> &CalculatorDefinition {
        static DEFINITION: LazyLock<CalculatorDefinition> = LazyLock::new(|| {
            definition(
                "heart",
                "HEART Score",
                "Chest pain risk assessment - Identifies low-risk patients safe for discharge",
                &["Cardiology", "Emergency Medicine", "Chest Pain"],
                ScoreOrientation::HigherIsWorse,
                vec![
                    graded(
                        "history",
                        "History of Presenting Complaint",
                        ["Slightly suspicious", "Moderately suspicious", "Highly suspicious"],
                    ),
                    graded(
                        "ecg",
                        "ECG Changes",
                        ["Normal", "Non-specific repolarization", "Significant ST deviation"],
                    ),
                    InputFieldSpec::number("age", "Age", 0.0, 120.0, 50.0).with_unit("years"),
                    graded(
                        "risk_factors",
                        "Risk Factors for CAD",
                        [
                            "No known risk factors",
                            "1-2 risk factors",
                            "≥3 risk factors or known atherosclerotic disease",
                        ],
                    ),
                    graded(
                        "troponin",
                        "Initial Troponin",
                        ["≤ normal limit", "1-3× normal limit", ">3× normal limit"],
                    ),
                ],
                vec![Reference::new(
                    "Six AJ, et al.",
                    2008,
                    "Chest pain in the emergency room: value of the HEART score",
                    "Netherlands Heart Journal",
                    "16",
                    "191-196",
                )],
            )
        });
        &DEFINITION
    }

    fn evaluate(&self, input: &NormalizedInput) -> Result<ScoreResult, EngineError> {
        Ok(heart(&HeartInput {
            history: input.weight("history")?,
            ecg: input.weight("ecg")?,
            age: input.number("age")?,
            risk_factors: input.weight("risk_factors")?,
            troponin: input.weight("troponin")?,
        }))
    }
}

pub struct Cha2ds2Vasc;

impl Calculator for Cha2ds2Vasc {
    fn definition(&self) -> &CalculatorDefinition {
        static DEFINITION: LazyLock<CalculatorDefinition> = LazyLock::new(|| {
            definition(
                "cha2ds2vasc",
                "CHA₂DS₂-VASc Score",
                "Stroke risk in atrial fibrillation - Guides anticoagulation decisions",
                &["Cardiology", "Neurology", "Stroke Prevention"],
                ScoreOrientation::HigherIsWorse,
                vec![
                    InputFieldSpec::boolean("chf", "Congestive Heart Failure"),
                    InputFieldSpec::boolean("hypertension", "Hypertension"),
                    InputFieldSpec::boolean("age_75", "Age ≥75 years"),
                    InputFieldSpec::boolean("diabetes", "Diabetes"),
                    InputFieldSpec::boolean("stroke_tia", "Stroke/TIA/Thromboembolism"),
                    InputFieldSpec::boolean("vascular_disease", "Vascular Disease")
                        .with_description("Prior MI, peripheral artery disease, or aortic plaque"),
                    InputFieldSpec::boolean("age_65_74", "Age 65-74 years"),
                    InputFieldSpec::boolean("female", "Female Sex"),
                ],
                vec![Reference::new(
                    "Lip GY, et al.",
                    2010,
                    "Refining clinical risk stratification for predicting stroke and thromboembolism in atrial fibrillation",
                    "Chest",
                    "137",
                    "263-272",
                )],
            )
        });
        &DEFINITION
    }

    fn evaluate(&self, input: &NormalizedInput) -> Result<ScoreResult, EngineError> {
        Ok(cha2ds2_vasc(&Cha2ds2VascInput {
            chf: input.flag("chf")?,
            hypertension: input.flag("hypertension")?,
            age_75: input.flag("age_75")?,
            diabetes: input.flag("diabetes")?,
            stroke_tia: input.flag("stroke_tia")?,
            vascular_disease: input.flag("vascular_disease")?,
            age_65_74: input.flag("age_65_74")?,
            female: input.flag("female")?,
        }))
    }
}

pub struct HasBled;

impl Calculator for HasBled {
    fn definition(&self) -> &CalculatorDefinition {
        static DEFINITION: LazyLock<CalculatorDefinition> = LazyLock::new(|| {
            definition(
                "hasbled",
                "HAS-BLED Score",
                "Bleeding risk in atrial fibrillation - Assesses anticoagulation safety",
                &["Cardiology", "Neurology", "Gastroenterology"],
                ScoreOrientation::HigherIsWorse,
                vec![
                    InputFieldSpec::boolean("hypertension", "Hypertension (uncontrolled)")
                        .with_description("Systolic >160 mmHg"),
                    InputFieldSpec::boolean("abnormal_renal_function", "Abnormal Renal Function")
                        .with_description("Dialysis, transplant, or creatinine >2.26 mg/dL"),
                    InputFieldSpec::boolean("abnormal_liver_function", "Abnormal Liver Function")
                        .with_description("Cirrhosis, or bilirubin >2× / AST/ALT >3× normal"),
                    InputFieldSpec::boolean("stroke", "Stroke History"),
                    InputFieldSpec::boolean("bleeding", "Bleeding History")
                        .with_description("Major bleeding or predisposition to bleeding"),
                    InputFieldSpec::boolean("labile_inr", "Labile INR")
                        .with_description("Time in therapeutic range <60%"),
                    InputFieldSpec::boolean("elderly", "Age >65 years"),
                    InputFieldSpec::boolean("drugs", "Drugs")
                        .with_description("Antiplatelet agents or NSAIDs"),
                    InputFieldSpec::boolean("alcohol", "Alcohol Use")
                        .with_description("≥8 drinks per week"),
                ],
                vec![Reference::new(
                    "Pisters R, et al.",
                    2010,
                    "A novel user-friendly score (HAS-BLED) to assess 1-year risk of major bleeding in patients with atrial fibrillation",
                    "Chest",
                    "138",
                    "1093-1100",
                )],
            )
        });
        &DEFINITION
    }

    fn aliases(&self) -> &[&'static str] {
        &["has_bled"]
    }

    fn evaluate(&self, input: &NormalizedInput) -> Result<ScoreResult, EngineError> {
        Ok(has_bled(&HasBledInput {
            hypertension: input.flag("hypertension")?,
            abnormal_renal_function: input.flag("abnormal_renal_function")?,
            abnormal_liver_function: input.flag("abnormal_liver_function")?,
            stroke: input.flag("stroke")?,
            bleeding: input.flag("bleeding")?,
            labile_inr: input.flag("labile_inr")?,
            elderly: input.flag("elderly")?,
            drugs: input.flag("drugs")?,
            alcohol: input.flag("alcohol")?,
        }))
    }
}

pub struct Timi;

impl Calculator for Timi {
    fn definition(&self) -> &CalculatorDefinition {
        static DEFINITION: LazyLock<CalculatorDefinition> = LazyLock::new(|| {
            definition(
                "timi",
                "TIMI Risk Score",
                "Acute Coronary Syndrome risk - Predicts 14-day mortality and complications",
                &["Cardiology", "Emergency Medicine"],
                ScoreOrientation::HigherIsWorse,
                vec![
                    InputFieldSpec::boolean("age_65", "Age ≥65 years"),
                    InputFieldSpec::boolean("risk_factors", "≥3 CAD Risk Factors"),
                    InputFieldSpec::boolean("known_stenosis", "Prior Coronary Stenosis ≥50%"),
                    InputFieldSpec::boolean("aspirin", "Aspirin Use in Last 7 Days"),
                    InputFieldSpec::boolean("severe_angina", "Severe Angina (≥2 episodes in 24h)"),
                    InputFieldSpec::boolean("st_deviation", "ST Segment Changes ≥0.5 mm"),
                    InputFieldSpec::boolean("positive_marker", "Elevated Troponin"),
                ],
                vec![Reference::new(
                    "Antman EM, et al.",
                    2000,
                    "The TIMI risk score for unstable angina/non-ST elevation MI",
                    "JAMA",
                    "284",
                    "835-842",
                )],
            )
        });
        &DEFINITION
    }

    fn evaluate(&self, input: &NormalizedInput) -> Result<ScoreResult, EngineError> {
        Ok(timi(&TimiInput {
            age_65: input.flag("age_65")?,
            risk_factors: input.flag("risk_factors")?,
            known_stenosis: input.flag("known_stenosis")?,
            aspirin: input.flag("aspirin")?,
            severe_angina: input.flag("severe_angina")?,
            st_deviation: input.flag("st_deviation")?,
            positive_marker: input.flag("positive_marker")?,
        }))
    }
}

/// Risk-factor fields shared by the 10-year models, with the age range
/// each model was derived on.
fn profile_fields(min_age: f64, max_age: f64) -> Vec<InputFieldSpec> {
    vec![
        InputFieldSpec::number("age", "Age", min_age, max_age, 55.0).with_unit("years"),
        InputFieldSpec::boolean("female", "Female Sex"),
        InputFieldSpec::number("total_cholesterol", "Total Cholesterol", 100.0, 400.0, 200.0)
            .with_unit("mg/dL"),
        InputFieldSpec::number("hdl", "HDL Cholesterol", 20.0, 100.0, 50.0).with_unit("mg/dL"),
        InputFieldSpec::number("sbp", "Systolic BP", 80.0, 200.0, 120.0).with_unit("mmHg"),
        InputFieldSpec::boolean("hypertension_treatment", "On Hypertension Treatment"),
        InputFieldSpec::boolean("smoking", "Current Smoker"),
        InputFieldSpec::boolean("diabetes", "Diabetes"),
    ]
}

fn profile(input: &NormalizedInput) -> Result<CardiovascularProfile, EngineError> {
    Ok(CardiovascularProfile {
        age: input.number("age")?,
        female: input.flag("female")?,
        total_cholesterol: input.number("total_cholesterol")?,
        hdl: input.number("hdl")?,
        systolic_bp: input.number("sbp")?,
        bp_treated: input.flag("hypertension_treatment")?,
        smoker: input.flag("smoking")?,
        diabetes: input.flag("diabetes")?,
    })
}

pub struct Framingham;

impl Calculator for Framingham {
    fn definition(&self) -> &CalculatorDefinition {
        static DEFINITION: LazyLock<CalculatorDefinition> = LazyLock::new(|| {
            definition(
                "framingham",
                "Framingham Risk Score",
                "10-year cardiovascular disease risk - Guides primary prevention",
                &["Cardiology", "Preventive Medicine"],
                ScoreOrientation::HigherIsWorse,
                profile_fields(30.0, 74.0),
                vec![Reference::new(
                    "D'Agostino RB Sr, et al.",
                    2008,
                    "General cardiovascular risk profile for use in primary care: the Framingham Heart Study",
                    "Circulation",
                    "117",
                    "743-753",
                )],
            )
        });
        &DEFINITION
    }

    fn evaluate(&self, input: &NormalizedInput) -> Result<ScoreResult, EngineError> {
        Ok(framingham(&profile(input)?))
    }
}

const RACES: [(&str, AscvdRace); 4] = [
    ("White", AscvdRace::White),
    ("African American", AscvdRace::AfricanAmerican),
    ("Hispanic", AscvdRace::Hispanic),
    ("Asian", AscvdRace::Asian),
];

pub struct Ascvd;

impl Calculator for Ascvd {
    fn definition(&self) -> &CalculatorDefinition {
        static DEFINITION: LazyLock<CalculatorDefinition> = LazyLock::new(|| {
            let mut fields = profile_fields(40.0, 79.0);
            fields.insert(
                2,
                InputFieldSpec::choice(
                    "race",
                    "Race/Ethnicity",
                    RACES.iter().map(|(label, _)| ChoiceOption::plain(label)).collect(),
                    "White",
                ),
            );
            definition(
                "ascvd",
                "ASCVD Risk Calculator",
                "10-year atherosclerotic cardiovascular disease risk - Pooled cohort equations",
                &["Cardiology", "Preventive Medicine"],
                ScoreOrientation::HigherIsWorse,
                fields,
                vec![Reference::new(
                    "Goff DC Jr, et al.",
                    2014,
                    "2013 ACC/AHA guideline on the assessment of cardiovascular risk",
                    "Circulation",
                    "129",
                    "S49-S73",
                )],
            )
        });
        &DEFINITION
    }

    fn evaluate(&self, input: &NormalizedInput) -> Result<ScoreResult, EngineError> {
        let selected = input.choice("race")?;
        let race = RACES
            .iter()
            .find(|(label, _)| *label == selected.value)
            .map(|(_, race)| *race)
            .unwrap_or_default();
        Ok(ascvd(&AscvdInput {
            profile: profile(input)?,
            race,
        }))
    }
}
