use std::sync::LazyLock;

use clinicalc_core::models::definition::{
    CalculatorDefinition, ChoiceOption, InputFieldSpec, Reference, ScoreOrientation,
};
use clinicalc_core::models::input::NormalizedInput;
use clinicalc_core::models::result::ScoreResult;
use clinicalc_formulas::formulas::hepatology::{
    apri, child_pugh, fib4, meld, meld_na, ApriInput, Ascites, ChildPughInput, Encephalopathy,
    Fib4Input, MeldInput, MeldNaInput,
};

use super::definition;
use crate::error::EngineError;
use crate::Calculator;

const LIVER: &[&str] = &["Hepatology", "Gastroenterology", "Liver Disease"];

fn inr() -> InputFieldSpec {
    InputFieldSpec::number("inr", "INR", 0.8, 10.0, 1.0)
}

fn bilirubin() -> InputFieldSpec {
    InputFieldSpec::number("bilirubin", "Total Bilirubin", 0.1, 30.0, 1.0).with_unit("mg/dL")
}

fn creatinine() -> InputFieldSpec {
    InputFieldSpec::number("creatinine", "Creatinine", 0.1, 10.0, 1.0).with_unit("mg/dL")
}

fn platelets() -> InputFieldSpec {
    InputFieldSpec::number("platelets", "Platelet Count", 1.0, 1000.0, 200.0).with_unit("×10⁹/L")
}

fn ast() -> InputFieldSpec {
    InputFieldSpec::number("ast", "AST", 1.0, 5000.0, 30.0).with_unit("U/L")
}

pub struct Meld;

impl Calculator for Meld {
    fn definition(&self) -> &CalculatorDefinition {
        static DEFINITION: LazyLock<CalculatorDefinition> = LazyLock::new(|| {
            definition(
                "meld",
                "MELD Score",
                "Model for End-Stage Liver Disease - Liver transplant priority",
                LIVER,
                ScoreOrientation::HigherIsWorse,
                vec![inr(), creatinine(), bilirubin()],
                vec![Reference::new(
                    "Kamath PS, et al.",
                    2001,
                    "A model to predict survival in patients with end-stage liver disease",
                    "Hepatology",
                    "33",
                    "464-470",
                )],
            )
        });
        &DEFINITION
    }

    fn evaluate(&self, input: &NormalizedInput) -> Result<ScoreResult, EngineError> {
        Ok(meld(&MeldInput {
            inr: input.number("inr")?,
            bilirubin: input.number("bilirubin")?,
            creatinine: input.number("creatinine")?,
        }))
    }
}

pub struct MeldNa;

impl Calculator for MeldNa {
    fn definition(&self) -> &CalculatorDefinition {
        static DEFINITION: LazyLock<CalculatorDefinition> = LazyLock::new(|| {
            definition(
                "meld_na",
                "MELD-Na Score",
                "MELD with serum sodium - Current standard for liver allocation",
                LIVER,
                ScoreOrientation::HigherIsWorse,
                vec![
                    creatinine(),
                    bilirubin(),
                    inr(),
                    InputFieldSpec::number("sodium", "Serum Sodium", 100.0, 170.0, 140.0)
                        .with_unit("mEq/L")
                        .with_description("Bounded to 125-137 in the calculation"),
                    InputFieldSpec::boolean("dialysis", "Dialysis ≥2 times in past week")
                        .with_description("Sets creatinine to 4.0 mg/dL"),
                ],
                vec![Reference::new(
                    "Kim WR, et al.",
                    2008,
                    "Hyponatremia and mortality among patients on the liver-transplant waiting list",
                    "New England Journal of Medicine",
                    "359",
                    "1018-1026",
                )],
            )
        });
        &DEFINITION
    }

    fn evaluate(&self, input: &NormalizedInput) -> Result<ScoreResult, EngineError> {
        Ok(meld_na(&MeldNaInput {
            inr: input.number("inr")?,
            bilirubin: input.number("bilirubin")?,
            creatinine: input.number("creatinine")?,
            sodium: input.number("sodium")?,
            dialysis: input.flag("dialysis")?,
        }))
    }
}

pub struct ChildPugh;

impl Calculator for ChildPugh {
    fn definition(&self) -> &CalculatorDefinition {
        static DEFINITION: LazyLock<CalculatorDefinition> = LazyLock::new(|| {
            definition(
                "child_pugh",
                "Child-Pugh Score",
                "Cirrhosis severity - Prognosis and perioperative risk in chronic liver disease",
                LIVER,
                ScoreOrientation::HigherIsWorse,
                vec![
                    bilirubin(),
                    InputFieldSpec::number("albumin", "Serum Albumin", 1.0, 6.0, 3.5)
                        .with_unit("g/dL"),
                    inr(),
                    InputFieldSpec::choice(
                        "ascites",
                        "Ascites",
                        vec![
                            ChoiceOption::weighted("None", 1.0),
                            ChoiceOption::weighted("Slight", 2.0),
                            ChoiceOption::weighted("Moderate-Severe", 3.0),
                        ],
                        "None",
                    ),
                    InputFieldSpec::choice(
                        "encephalopathy",
                        "Hepatic Encephalopathy",
                        vec![
                            ChoiceOption::weighted("None", 1.0),
                            ChoiceOption::weighted("Grade 1-2", 2.0),
                            ChoiceOption::weighted("Grade 3-4", 3.0),
                        ],
                        "None",
                    ),
                ],
                vec![Reference::new(
                    "Pugh RN, et al.",
                    1973,
                    "Transection of the oesophagus for bleeding oesophageal varices",
                    "British Journal of Surgery",
                    "60",
                    "646-649",
                )],
            )
        });
        &DEFINITION
    }

    fn evaluate(&self, input: &NormalizedInput) -> Result<ScoreResult, EngineError> {
        let ascites = match input.weight("ascites")? {
            w if w >= 3.0 => Ascites::ModerateSevere,
            w if w >= 2.0 => Ascites::Slight,
            _ => Ascites::None,
        };
        let encephalopathy = match input.weight("encephalopathy")? {
            w if w >= 3.0 => Encephalopathy::Grade3To4,
            w if w >= 2.0 => Encephalopathy::Grade1To2,
            _ => Encephalopathy::None,
        };
        Ok(child_pugh(&ChildPughInput {
            bilirubin: input.number("bilirubin")?,
            albumin: input.number("albumin")?,
            inr: input.number("inr")?,
            ascites,
            encephalopathy,
        }))
    }
}

pub struct Fib4;

impl Calculator for Fib4 {
    fn definition(&self) -> &CalculatorDefinition {
        static DEFINITION: LazyLock<CalculatorDefinition> = LazyLock::new(|| {
            definition(
                "fib4",
                "FIB-4 Index",
                "Non-invasive liver fibrosis estimate from age, transaminases and platelets",
                LIVER,
                ScoreOrientation::HigherIsWorse,
                vec![
                    InputFieldSpec::number("age", "Age", 0.0, 120.0, 50.0).with_unit("years"),
                    ast(),
                    InputFieldSpec::number("alt", "ALT", 1.0, 5000.0, 30.0).with_unit("U/L"),
                    platelets(),
                ],
                vec![Reference::new(
                    "Sterling RK, et al.",
                    2006,
                    "Development of a simple noninvasive index to predict significant fibrosis in patients with HIV/HCV coinfection",
                    "Hepatology",
                    "43",
                    "1317-1325",
                )],
            )
        });
        &DEFINITION
    }

    fn evaluate(&self, input: &NormalizedInput) -> Result<ScoreResult, EngineError> {
        Ok(fib4(&Fib4Input {
            age: input.number("age")?,
            ast: input.number("ast")?,
            alt: input.number("alt")?,
            platelets: input.number("platelets")?,
        }))
    }
}

pub struct Apri;

impl Calculator for Apri {
    fn definition(&self) -> &CalculatorDefinition {
        static DEFINITION: LazyLock<CalculatorDefinition> = LazyLock::new(|| {
            definition(
                "apri",
                "APRI Score",
                "AST to Platelet Ratio Index - Fibrosis and cirrhosis screening",
                LIVER,
                ScoreOrientation::HigherIsWorse,
                vec![
                    ast(),
                    InputFieldSpec::number("ast_upper_limit", "AST Upper Limit of Normal", 1.0, 200.0, 40.0)
                        .with_unit("U/L"),
                    platelets(),
                ],
                vec![Reference::new(
                    "Wai CT, et al.",
                    2003,
                    "A simple noninvasive index can predict both significant fibrosis and cirrhosis in patients with chronic hepatitis C",
                    "Hepatology",
                    "38",
                    "518-526",
                )],
            )
        });
        &DEFINITION
    }

    fn evaluate(&self, input: &NormalizedInput) -> Result<ScoreResult, EngineError> {
        Ok(apri(&ApriInput {
            ast: input.number("ast")?,
            ast_upper_limit: input.number("ast_upper_limit")?,
            platelets: input.number("platelets")?,
        }))
    }
}
