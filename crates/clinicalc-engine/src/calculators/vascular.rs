use std::sync::LazyLock;

use clinicalc_core::models::definition::{
    CalculatorDefinition, InputFieldSpec, Reference, ScoreOrientation,
};
use clinicalc_core::models::input::NormalizedInput;
use clinicalc_core::models::result::ScoreResult;
use clinicalc_formulas::formulas::vascular::{wells_dvt, wells_pe, WellsDvtInput, WellsPeInput};

use super::definition;
use crate::error::EngineError;
use crate::Calculator;

const CATEGORIES: &[&str] = &["Vascular", "Emergency Medicine", "Thromboembolism"];

pub struct WellsDvt;

impl Calculator for WellsDvt {
    fn definition(&self) -> &CalculatorDefinition {
        static DEFINITION: LazyLock<CalculatorDefinition> = LazyLock::new(|| {
            definition(
                "wells_dvt",
                "Wells Score for DVT",
                "Deep vein thrombosis probability - Guides D-dimer and ultrasound",
                CATEGORIES,
                ScoreOrientation::HigherIsWorse,
                vec![
                    InputFieldSpec::boolean("active_cancer", "Active Cancer"),
                    InputFieldSpec::boolean(
                        "paralysis_immobilization",
                        "Paralysis, Paresis or Recent Leg Cast",
                    ),
                    InputFieldSpec::boolean(
                        "bedridden_surgery",
                        "Bedridden >3 days or Major Surgery within 12 weeks",
                    ),
                    InputFieldSpec::boolean("localized_tenderness", "Localized Tenderness"),
                    InputFieldSpec::boolean("entire_leg_swelling", "Entire Leg Swelling"),
                    InputFieldSpec::boolean("calf_swelling", "Calf Swelling >3cm"),
                    InputFieldSpec::boolean("pitting_edema", "Pitting Edema"),
                    InputFieldSpec::boolean("collateral_veins", "Collateral Superficial Veins"),
                    InputFieldSpec::boolean("previous_dvt", "Previous DVT"),
                    InputFieldSpec::boolean(
                        "alternative_diagnosis",
                        "Alternative Diagnosis as Likely",
                    )
                    .with_description("Subtracts 2 points"),
                ],
                vec![Reference::new(
                    "Wells PS, et al.",
                    1997,
                    "Value of assessment of pretest probability of deep-vein thrombosis in clinical management",
                    "Lancet",
                    "350",
                    "1795-1798",
                )],
            )
        });
        &DEFINITION
    }

    fn evaluate(&self, input: &NormalizedInput) -> Result<ScoreResult, EngineError> {
        Ok(wells_dvt(&WellsDvtInput {
            active_cancer: input.flag("active_cancer")?,
            paralysis_immobilization: input.flag("paralysis_immobilization")?,
            bedridden_surgery: input.flag("bedridden_surgery")?,
            localized_tenderness: input.flag("localized_tenderness")?,
            entire_leg_swelling: input.flag("entire_leg_swelling")?,
            calf_swelling: input.flag("calf_swelling")?,
            pitting_edema: input.flag("pitting_edema")?,
            collateral_veins: input.flag("collateral_veins")?,
            previous_dvt: input.flag("previous_dvt")?,
            alternative_diagnosis: input.flag("alternative_diagnosis")?,
        }))
    }
}

pub struct WellsPe;

impl Calculator for WellsPe {
    fn definition(&self) -> &CalculatorDefinition {
        static DEFINITION: LazyLock<CalculatorDefinition> = LazyLock::new(|| {
            definition(
                "wells_pe",
                "Wells Score for PE",
                "Pulmonary embolism probability - Guides CT angiography",
                &["Vascular", "Emergency Medicine", "Thromboembolism", "Respiratory"],
                ScoreOrientation::HigherIsWorse,
                vec![
                    InputFieldSpec::boolean("clinical_dvt", "Clinical Signs of DVT")
                        .with_description("3 points"),
                    InputFieldSpec::boolean("pe_likely", "PE Most Likely Diagnosis")
                        .with_description("3 points"),
                    InputFieldSpec::boolean("heart_rate", "Heart Rate >100"),
                    InputFieldSpec::boolean("immobilization", "Immobilization >3 days or Surgery"),
                    InputFieldSpec::boolean("previous_vte", "Previous VTE"),
                    InputFieldSpec::boolean("hemoptysis", "Hemoptysis"),
                    InputFieldSpec::boolean("malignancy", "Malignancy"),
                ],
                vec![Reference::new(
                    "Wells PS, et al.",
                    2000,
                    "Derivation of a simple clinical model to categorize patients' probability of pulmonary embolism",
                    "Thrombosis and Haemostasis",
                    "83",
                    "416-420",
                )],
            )
        });
        &DEFINITION
    }

    fn evaluate(&self, input: &NormalizedInput) -> Result<ScoreResult, EngineError> {
        Ok(wells_pe(&WellsPeInput {
            clinical_dvt: input.flag("clinical_dvt")?,
            pe_likely: input.flag("pe_likely")?,
            heart_rate: input.flag("heart_rate")?,
            immobilization: input.flag("immobilization")?,
            previous_vte: input.flag("previous_vte")?,
            hemoptysis: input.flag("hemoptysis")?,
            malignancy: input.flag("malignancy")?,
        }))
    }
}
