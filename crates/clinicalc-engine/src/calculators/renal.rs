use std::sync::LazyLock;

use clinicalc_core::models::definition::{
    CalculatorDefinition, InputFieldSpec, Reference, ScoreOrientation,
};
use clinicalc_core::models::input::NormalizedInput;
use clinicalc_core::models::result::ScoreResult;
use clinicalc_formulas::formulas::renal::{
    ckd_epi, creatinine_clearance, CreatinineClearanceInput, EgfrInput,
};

use super::definition;
use crate::error::EngineError;
use crate::Calculator;

const CATEGORIES: &[&str] = &["Renal", "Nephrology", "Drug Dosing"];

fn creatinine_field() -> InputFieldSpec {
    InputFieldSpec::number("creatinine", "Serum Creatinine", 0.1, 10.0, 1.0).with_unit("mg/dL")
}

fn age_field() -> InputFieldSpec {
    InputFieldSpec::number("age", "Age", 0.0, 120.0, 50.0).with_unit("years")
}

pub struct CkdEpi;

impl Calculator for CkdEpi {
    fn definition(&self) -> &CalculatorDefinition {
        static DEFINITION: LazyLock<CalculatorDefinition> = LazyLock::new(|| {
            definition(
                "ckd_epi",
                "CKD-EPI eGFR",
                "Estimated Glomerular Filtration Rate - Kidney function assessment",
                CATEGORIES,
                ScoreOrientation::LowerIsWorse,
                vec![
                    creatinine_field(),
                    age_field(),
                    InputFieldSpec::boolean("female", "Female Sex"),
                ],
                vec![Reference::new(
                    "Levey AS, et al.",
                    2009,
                    "A new equation to estimate glomerular filtration rate",
                    "Annals of Internal Medicine",
                    "150",
                    "604-612",
                )],
            )
        });
        &DEFINITION
    }

    fn evaluate(&self, input: &NormalizedInput) -> Result<ScoreResult, EngineError> {
        Ok(ckd_epi(&EgfrInput {
            creatinine: input.number("creatinine")?,
            age: input.number("age")?,
            female: input.flag("female")?,
        }))
    }
}

/// Cockcroft-Gault creatinine clearance, used for drug dosing.
pub struct CreatinineClearance;

impl Calculator for CreatinineClearance {
    fn definition(&self) -> &CalculatorDefinition {
        static DEFINITION: LazyLock<CalculatorDefinition> = LazyLock::new(|| {
            definition(
                "creatinine_clearance",
                "Creatinine Clearance",
                "Cockcroft-Gault equation - Renal function for drug dosing",
                CATEGORIES,
                ScoreOrientation::LowerIsWorse,
                vec![
                    age_field(),
                    InputFieldSpec::number("weight", "Weight", 20.0, 200.0, 70.0).with_unit("kg"),
                    InputFieldSpec::boolean("female", "Female Sex")
                        .with_description("Multiplies clearance by 0.85"),
                    creatinine_field(),
                ],
                vec![Reference::new(
                    "Cockcroft DW, Gault MH",
                    1976,
                    "Prediction of creatinine clearance from serum creatinine",
                    "Nephron",
                    "16",
                    "31-41",
                )],
            )
        });
        &DEFINITION
    }

    fn aliases(&self) -> &[&'static str] {
        &["crcl"]
    }

    fn evaluate(&self, input: &NormalizedInput) -> Result<ScoreResult, EngineError> {
        Ok(creatinine_clearance(&CreatinineClearanceInput {
            age: input.number("age")?,
            weight: input.number("weight")?,
            creatinine: input.number("creatinine")?,
            female: input.flag("female")?,
        }))
    }
}
