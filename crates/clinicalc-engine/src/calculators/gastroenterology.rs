use std::sync::LazyLock;

use clinicalc_core::models::definition::{
    CalculatorDefinition, InputFieldSpec, Reference, ScoreOrientation,
};
use clinicalc_core::models::input::NormalizedInput;
use clinicalc_core::models::result::ScoreResult;
use clinicalc_formulas::formulas::gastroenterology::{
    bisap, glasgow_blatchford, BisapInput, GlasgowBlatchfordInput,
};

use super::definition;
use crate::error::EngineError;
use crate::Calculator;

pub struct GlasgowBlatchford;

impl Calculator for GlasgowBlatchford {
    fn definition(&self) -> &CalculatorDefinition {
        static DEFINITION: LazyLock<CalculatorDefinition> = LazyLock::new(|| {
            definition(
                "glasgow_blatchford",
                "Glasgow-Blatchford Score",
                "Upper GI bleeding risk - Identifies need for intervention",
                &["Gastroenterology", "Emergency Medicine"],
                ScoreOrientation::HigherIsWorse,
                vec![
                    InputFieldSpec::number("blood_urea", "Blood Urea", 0.0, 50.0, 5.0)
                        .with_unit("mmol/L"),
                    InputFieldSpec::number("hemoglobin", "Hemoglobin", 5.0, 18.0, 14.0)
                        .with_unit("g/dL"),
                    InputFieldSpec::number("systolic_bp", "Systolic BP", 50.0, 250.0, 120.0)
                        .with_unit("mmHg"),
                    InputFieldSpec::number("pulse", "Pulse", 30.0, 200.0, 80.0).with_unit("bpm"),
                    InputFieldSpec::boolean("female", "Female Sex")
                        .with_description("Lowers the hemoglobin cut-offs"),
                    InputFieldSpec::boolean("melena", "Melena Present"),
                    InputFieldSpec::boolean("syncope", "Syncope"),
                    InputFieldSpec::boolean("hepatic_disease", "Hepatic Disease"),
                    InputFieldSpec::boolean("cardiac_failure", "Cardiac Failure"),
                ],
                vec![Reference::new(
                    "Blatchford O, et al.",
                    2000,
                    "A risk score to predict need for treatment for upper-gastrointestinal haemorrhage",
                    "Lancet",
                    "356",
                    "1318-1321",
                )],
            )
        });
        &DEFINITION
    }

    fn aliases(&self) -> &[&'static str] {
        &["gbs"]
    }

    fn evaluate(&self, input: &NormalizedInput) -> Result<ScoreResult, EngineError> {
        Ok(glasgow_blatchford(&GlasgowBlatchfordInput {
            blood_urea: input.number("blood_urea")?,
            hemoglobin: input.number("hemoglobin")?,
            systolic_bp: input.number("systolic_bp")?,
            pulse: input.number("pulse")?,
            female: input.flag("female")?,
            melena: input.flag("melena")?,
            syncope: input.flag("syncope")?,
            hepatic_disease: input.flag("hepatic_disease")?,
            cardiac_failure: input.flag("cardiac_failure")?,
        }))
    }
}

pub struct Bisap;

impl Calculator for Bisap {
    fn definition(&self) -> &CalculatorDefinition {
        static DEFINITION: LazyLock<CalculatorDefinition> = LazyLock::new(|| {
            definition(
                "bisap",
                "BISAP Score",
                "Acute pancreatitis severity - Predicts in-hospital mortality",
                &["Gastroenterology", "Critical Care"],
                ScoreOrientation::HigherIsWorse,
                vec![
                    InputFieldSpec::boolean("bun", "BUN >25 mg/dL"),
                    InputFieldSpec::boolean("impaired_mental", "Impaired Mental Status"),
                    InputFieldSpec::boolean("sirs", "SIRS Criteria (≥2)"),
                    InputFieldSpec::boolean("age", "Age >60 years"),
                    InputFieldSpec::boolean("pleural_effusion", "Pleural Effusion"),
                ],
                vec![Reference::new(
                    "Wu BU, et al.",
                    2008,
                    "The early prediction of mortality in acute pancreatitis: a large population-based study",
                    "Gut",
                    "57",
                    "1698-1703",
                )],
            )
        });
        &DEFINITION
    }

    fn evaluate(&self, input: &NormalizedInput) -> Result<ScoreResult, EngineError> {
        Ok(bisap(&BisapInput {
            bun: input.flag("bun")?,
            impaired_mental: input.flag("impaired_mental")?,
            sirs: input.flag("sirs")?,
            age: input.flag("age")?,
            pleural_effusion: input.flag("pleural_effusion")?,
        }))
    }
}
