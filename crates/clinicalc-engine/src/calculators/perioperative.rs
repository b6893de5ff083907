use std::sync::LazyLock;

use clinicalc_core::models::definition::{
    CalculatorDefinition, ChoiceOption, InputFieldSpec, Reference, ScoreOrientation,
};
use clinicalc_core::models::input::NormalizedInput;
use clinicalc_core::models::result::ScoreResult;
use clinicalc_formulas::formulas::perioperative::{
    asa, caprini, rcri, AsaClass, AsaInput, CapriniAge, CapriniInput, RcriInput,
};

use super::definition;
use crate::error::EngineError;
use crate::Calculator;

const SURGERY: &[&str] = &["Perioperative", "Anesthesiology", "Surgery"];

const ASA_CLASSES: [AsaClass; 6] = [
    AsaClass::I,
    AsaClass::II,
    AsaClass::III,
    AsaClass::IV,
    AsaClass::V,
    AsaClass::VI,
];

/// Option label for an ASA class, e.g. "I - Healthy patient".
fn asa_label(class: AsaClass) -> String {
    format!("{class:?} - {}", class.description())
}

pub struct AsaPhysicalStatus;

impl Calculator for AsaPhysicalStatus {
    fn definition(&self) -> &CalculatorDefinition {
        static DEFINITION: LazyLock<CalculatorDefinition> = LazyLock::new(|| {
            definition(
                "asa_physical_status",
                "ASA Physical Status",
                "American Society of Anesthesiologists classification - Perioperative mortality",
                SURGERY,
                ScoreOrientation::HigherIsWorse,
                vec![
                    InputFieldSpec::choice(
                        "asa_class",
                        "ASA Class",
                        ASA_CLASSES
                            .iter()
                            .map(|&class| {
                                ChoiceOption::weighted(&asa_label(class), class.ordinal() as f64)
                            })
                            .collect(),
                        &asa_label(AsaClass::I),
                    ),
                    InputFieldSpec::boolean("emergency", "Emergency Surgery")
                        .with_description("Adds the E suffix"),
                ],
                vec![Reference::new(
                    "Mayhew D, et al.",
                    2019,
                    "A review of ASA physical status - historical perspectives and modern developments",
                    "Anaesthesia",
                    "74",
                    "373-379",
                )],
            )
        });
        &DEFINITION
    }

    fn evaluate(&self, input: &NormalizedInput) -> Result<ScoreResult, EngineError> {
        Ok(asa(&AsaInput {
            class: AsaClass::from_ordinal(input.weight("asa_class")?),
            emergency: input.flag("emergency")?,
        }))
    }
}

/// Revised Cardiac Risk Index.
pub struct Rcri;

impl Calculator for Rcri {
    fn definition(&self) -> &CalculatorDefinition {
        static DEFINITION: LazyLock<CalculatorDefinition> = LazyLock::new(|| {
            definition(
                "rcri",
                "Revised Cardiac Risk Index",
                "Major cardiac complications after non-cardiac surgery",
                &["Perioperative", "Cardiology", "Surgery"],
                ScoreOrientation::HigherIsWorse,
                vec![
                    InputFieldSpec::boolean("high_risk_surgery", "High-Risk Surgery")
                        .with_description("Intraperitoneal, intrathoracic, or suprainguinal vascular"),
                    InputFieldSpec::boolean("ischemic_heart_disease", "Ischemic Heart Disease"),
                    InputFieldSpec::boolean("heart_failure", "Congestive Heart Failure"),
                    InputFieldSpec::boolean("cerebrovascular_disease", "Cerebrovascular Disease"),
                    InputFieldSpec::boolean("diabetes_insulin", "Diabetes on Insulin"),
                    InputFieldSpec::boolean("renal_insufficiency", "Creatinine >2 mg/dL"),
                ],
                vec![Reference::new(
                    "Lee TH, et al.",
                    1999,
                    "Derivation and prospective validation of a simple index for prediction of cardiac risk of major noncardiac surgery",
                    "Circulation",
                    "100",
                    "1043-1049",
                )],
            )
        });
        &DEFINITION
    }

    fn evaluate(&self, input: &NormalizedInput) -> Result<ScoreResult, EngineError> {
        Ok(rcri(&RcriInput {
            high_risk_surgery: input.flag("high_risk_surgery")?,
            ischemic_heart_disease: input.flag("ischemic_heart_disease")?,
            heart_failure: input.flag("heart_failure")?,
            cerebrovascular_disease: input.flag("cerebrovascular_disease")?,
            diabetes_insulin: input.flag("diabetes_insulin")?,
            renal_insufficiency: input.flag("renal_insufficiency")?,
        }))
    }
}

pub struct CapriniVte;

impl Calculator for CapriniVte {
    fn definition(&self) -> &CalculatorDefinition {
        static DEFINITION: LazyLock<CalculatorDefinition> = LazyLock::new(|| {
            definition(
                "caprini_vte",
                "Caprini VTE Risk",
                "Venous thromboembolism risk in surgical patients - Guides prophylaxis",
                &["Perioperative", "Hematology", "Surgery"],
                ScoreOrientation::HigherIsWorse,
                vec![
                    InputFieldSpec::choice(
                        "age",
                        "Age",
                        vec![
                            ChoiceOption::weighted("<41 years", 0.0),
                            ChoiceOption::weighted("41-60 years", 1.0),
                            ChoiceOption::weighted("61-74 years", 2.0),
                            ChoiceOption::weighted("≥75 years", 3.0),
                        ],
                        "<41 years",
                    ),
                    InputFieldSpec::boolean("minor_surgery", "Minor Surgery"),
                    InputFieldSpec::boolean("major_surgery", "Major Surgery (>45 min)"),
                    InputFieldSpec::boolean("bmi", "BMI >25"),
                    InputFieldSpec::boolean("varicose_veins", "Varicose Veins"),
                    InputFieldSpec::boolean("current_cancer", "Current or Past Malignancy"),
                    InputFieldSpec::boolean("previous_vte", "History of VTE"),
                    InputFieldSpec::boolean("thrombophilia", "Thrombophilia"),
                    InputFieldSpec::boolean("immobility", "Confined to Bed >72 hours"),
                ],
                vec![Reference::new(
                    "Caprini JA",
                    2005,
                    "Thrombosis risk assessment as a guide to quality patient care",
                    "Disease-a-Month",
                    "51",
                    "70-78",
                )],
            )
        });
        &DEFINITION
    }

    fn evaluate(&self, input: &NormalizedInput) -> Result<ScoreResult, EngineError> {
        let age = match input.weight("age")? {
            w if w >= 3.0 => CapriniAge::Over74,
            w if w >= 2.0 => CapriniAge::From61To74,
            w if w >= 1.0 => CapriniAge::From41To60,
            _ => CapriniAge::Under41,
        };
        Ok(caprini(&CapriniInput {
            age,
            minor_surgery: input.flag("minor_surgery")?,
            major_surgery: input.flag("major_surgery")?,
            bmi: input.flag("bmi")?,
            varicose_veins: input.flag("varicose_veins")?,
            current_cancer: input.flag("current_cancer")?,
            previous_vte: input.flag("previous_vte")?,
            thrombophilia: input.flag("thrombophilia")?,
            immobility: input.flag("immobility")?,
        }))
    }
}
