use std::sync::LazyLock;

use clinicalc_core::models::definition::{
    CalculatorDefinition, InputFieldSpec, Reference, ScoreOrientation,
};
use clinicalc_core::models::input::NormalizedInput;
use clinicalc_core::models::result::ScoreResult;
use clinicalc_formulas::formulas::respiratory::{
    centor, curb65, pesi, psi_port, smart_cop, CentorInput, Curb65Input, PesiInput, PsiInput,
    SmartCopInput,
};

use super::definition;
use crate::error::EngineError;
use crate::Calculator;

pub struct Curb65;

impl Calculator for Curb65 {
    fn definition(&self) -> &CalculatorDefinition {
        static DEFINITION: LazyLock<CalculatorDefinition> = LazyLock::new(|| {
            definition(
                "curb65",
                "CURB-65 Score",
                "Pneumonia severity - Determines admission vs outpatient management",
                &["Respiratory", "Infectious Disease", "Emergency Medicine"],
                ScoreOrientation::HigherIsWorse,
                vec![
                    InputFieldSpec::boolean("confusion", "Confusion"),
                    InputFieldSpec::boolean("urea", "Urea >7 mmol/L")
                        .with_description("BUN >19 mg/dL"),
                    InputFieldSpec::boolean("respiratory_rate", "Respiratory Rate ≥30"),
                    InputFieldSpec::boolean("blood_pressure", "Systolic BP <90 or Diastolic ≤60"),
                    InputFieldSpec::boolean("age_65", "Age ≥65 years"),
                ],
                vec![Reference::new(
                    "Lim WS, et al.",
                    2003,
                    "Defining community acquired pneumonia severity on presentation to hospital",
                    "Thorax",
                    "58",
                    "377-382",
                )],
            )
        });
        &DEFINITION
    }

    fn evaluate(&self, input: &NormalizedInput) -> Result<ScoreResult, EngineError> {
        Ok(curb65(&Curb65Input {
            confusion: input.flag("confusion")?,
            urea: input.flag("urea")?,
            respiratory_rate: input.flag("respiratory_rate")?,
            blood_pressure: input.flag("blood_pressure")?,
            age_65: input.flag("age_65")?,
        }))
    }
}

pub struct SmartCop;

impl Calculator for SmartCop {
    fn definition(&self) -> &CalculatorDefinition {
        static DEFINITION: LazyLock<CalculatorDefinition> = LazyLock::new(|| {
            definition(
                "smart_cop",
                "SMART-COP",
                "Predicts need for intensive respiratory or vasopressor support in pneumonia",
                &["Respiratory", "Infectious Disease", "Critical Care"],
                ScoreOrientation::HigherIsWorse,
                vec![
                    InputFieldSpec::boolean("systolic_bp", "Systolic BP <90 mmHg")
                        .with_description("2 points"),
                    InputFieldSpec::boolean("multilobar", "Multilobar Chest X-ray Involvement"),
                    InputFieldSpec::boolean("albumin", "Albumin <3.5 g/dL"),
                    InputFieldSpec::boolean("respiratory_rate", "High Respiratory Rate")
                        .with_description("≥25 if age ≤50, ≥30 if age >50"),
                    InputFieldSpec::boolean("tachycardia", "Heart Rate ≥125 bpm"),
                    InputFieldSpec::boolean("confusion", "New Confusion"),
                    InputFieldSpec::boolean("oxygen", "Low Oxygenation")
                        .with_description("2 points; age-adjusted PaO2, SpO2 or PaO2/FiO2 cut-offs"),
                    InputFieldSpec::boolean("ph", "Arterial pH <7.35")
                        .with_description("2 points"),
                ],
                vec![Reference::new(
                    "Charles PG, et al.",
                    2008,
                    "SMART-COP: a tool for predicting the need for intensive respiratory or vasopressor support in community-acquired pneumonia",
                    "Clinical Infectious Diseases",
                    "47",
                    "375-384",
                )],
            )
        });
        &DEFINITION
    }

    fn evaluate(&self, input: &NormalizedInput) -> Result<ScoreResult, EngineError> {
        Ok(smart_cop(&SmartCopInput {
            systolic_bp: input.flag("systolic_bp")?,
            multilobar: input.flag("multilobar")?,
            albumin: input.flag("albumin")?,
            respiratory_rate: input.flag("respiratory_rate")?,
            tachycardia: input.flag("tachycardia")?,
            confusion: input.flag("confusion")?,
            oxygen: input.flag("oxygen")?,
            ph: input.flag("ph")?,
        }))
    }
}

pub struct Pesi;

impl Calculator for Pesi {
    fn definition(&self) -> &CalculatorDefinition {
        static DEFINITION: LazyLock<CalculatorDefinition> = LazyLock::new(|| {
            definition(
                "pesi",
                "PESI Score",
                "Pulmonary Embolism Severity Index - 30-day mortality in acute PE",
                &["Respiratory", "Emergency Medicine", "Hematology"],
                ScoreOrientation::HigherIsWorse,
                vec![
                    InputFieldSpec::number("age", "Age", 0.0, 120.0, 50.0).with_unit("years"),
                    InputFieldSpec::boolean("male", "Male Sex"),
                    InputFieldSpec::boolean("cancer", "History of Cancer"),
                    InputFieldSpec::boolean("heart_failure", "Chronic Heart Failure"),
                    InputFieldSpec::boolean("chronic_lung_disease", "Chronic Lung Disease"),
                    InputFieldSpec::boolean("pulse", "Heart Rate ≥110 bpm"),
                    InputFieldSpec::boolean("systolic_bp", "Systolic BP <100 mmHg"),
                    InputFieldSpec::boolean("respiratory_rate", "Respiratory Rate ≥30"),
                    InputFieldSpec::boolean("temperature", "Temperature <36 °C"),
                    InputFieldSpec::boolean("altered_mental", "Altered Mental Status"),
                    InputFieldSpec::boolean("oxygen_sat", "Arterial Oxygen Saturation <90%"),
                ],
                vec![Reference::new(
                    "Aujesky D, et al.",
                    2005,
                    "Derivation and validation of a prognostic model for pulmonary embolism",
                    "American Journal of Respiratory and Critical Care Medicine",
                    "172",
                    "1041-1046",
                )],
            )
        });
        &DEFINITION
    }

    fn evaluate(&self, input: &NormalizedInput) -> Result<ScoreResult, EngineError> {
        Ok(pesi(&PesiInput {
            age: input.number("age")?,
            male: input.flag("male")?,
            cancer: input.flag("cancer")?,
            heart_failure: input.flag("heart_failure")?,
            chronic_lung_disease: input.flag("chronic_lung_disease")?,
            pulse: input.flag("pulse")?,
            systolic_bp: input.flag("systolic_bp")?,
            respiratory_rate: input.flag("respiratory_rate")?,
            temperature: input.flag("temperature")?,
            altered_mental: input.flag("altered_mental")?,
            oxygen_sat: input.flag("oxygen_sat")?,
        }))
    }
}

pub struct PsiPort;

impl Calculator for PsiPort {
    fn definition(&self) -> &CalculatorDefinition {
        static DEFINITION: LazyLock<CalculatorDefinition> = LazyLock::new(|| {
            definition(
                "psi_port",
                "PSI/PORT Score",
                "Pneumonia Severity Index - Comprehensive mortality prediction",
                &["Respiratory", "Infectious Disease"],
                ScoreOrientation::HigherIsWorse,
                vec![
                    InputFieldSpec::number("age", "Age", 18.0, 120.0, 50.0).with_unit("years"),
                    InputFieldSpec::boolean("male", "Male Sex"),
                    InputFieldSpec::boolean("nursing_home", "Nursing Home Resident"),
                    InputFieldSpec::boolean("neoplastic_disease", "Neoplastic Disease"),
                    InputFieldSpec::boolean("liver_disease", "Liver Disease"),
                    InputFieldSpec::boolean("heart_failure", "Congestive Heart Failure"),
                    InputFieldSpec::boolean("cerebrovascular_disease", "Cerebrovascular Disease"),
                    InputFieldSpec::boolean("renal_disease", "Renal Disease"),
                    InputFieldSpec::boolean("altered_mental", "Altered Mental Status"),
                    InputFieldSpec::number("rr", "Respiratory Rate", 0.0, 60.0, 16.0)
                        .with_unit("breaths/min"),
                    InputFieldSpec::number("sbp", "Systolic BP", 0.0, 250.0, 120.0).with_unit("mmHg"),
                    InputFieldSpec::number("temp", "Temperature", 25.0, 45.0, 37.0).with_unit("°C"),
                    InputFieldSpec::number("pulse", "Heart Rate", 0.0, 300.0, 80.0).with_unit("bpm"),
                    InputFieldSpec::number("ph", "Arterial pH", 6.8, 8.0, 7.4),
                    InputFieldSpec::number("bun", "BUN", 0.0, 100.0, 15.0).with_unit("mg/dL"),
                    InputFieldSpec::number("sodium", "Sodium", 100.0, 180.0, 140.0).with_unit("mEq/L"),
                    InputFieldSpec::number("glucose", "Glucose", 0.0, 500.0, 100.0).with_unit("mg/dL"),
                    InputFieldSpec::number("hematocrit", "Hematocrit", 10.0, 60.0, 40.0).with_unit("%"),
                    InputFieldSpec::number("pao2", "PaO2", 20.0, 150.0, 90.0).with_unit("mmHg"),
                    InputFieldSpec::boolean("pleural_effusion", "Pleural Effusion on CXR"),
                ],
                vec![Reference::new(
                    "Fine MJ, et al.",
                    1997,
                    "A prediction rule to identify low-risk patients with community-acquired pneumonia",
                    "New England Journal of Medicine",
                    "336",
                    "243-250",
                )],
            )
        });
        &DEFINITION
    }

    fn aliases(&self) -> &[&'static str] {
        &["psi"]
    }

    fn evaluate(&self, input: &NormalizedInput) -> Result<ScoreResult, EngineError> {
        Ok(psi_port(&PsiInput {
            age: input.number("age")?,
            male: input.flag("male")?,
            nursing_home: input.flag("nursing_home")?,
            neoplastic_disease: input.flag("neoplastic_disease")?,
            liver_disease: input.flag("liver_disease")?,
            heart_failure: input.flag("heart_failure")?,
            cerebrovascular_disease: input.flag("cerebrovascular_disease")?,
            renal_disease: input.flag("renal_disease")?,
            altered_mental: input.flag("altered_mental")?,
            respiratory_rate: input.number("rr")?,
            systolic_bp: input.number("sbp")?,
            temperature: input.number("temp")?,
            pulse: input.number("pulse")?,
            ph: input.number("ph")?,
            bun: input.number("bun")?,
            sodium: input.number("sodium")?,
            glucose: input.number("glucose")?,
            hematocrit: input.number("hematocrit")?,
            pao2: input.number("pao2")?,
            pleural_effusion: input.flag("pleural_effusion")?,
        }))
    }
}

pub struct Centor;

impl Calculator for Centor {
    fn definition(&self) -> &CalculatorDefinition {
        static DEFINITION: LazyLock<CalculatorDefinition> = LazyLock::new(|| {
            definition(
                "centor",
                "Centor Score",
                "Strep throat risk - Guides antibiotic therapy",
                &["Infectious Disease", "Emergency Medicine", "Respiratory"],
                ScoreOrientation::HigherIsWorse,
                vec![
                    InputFieldSpec::boolean("fever", "Fever >38°C"),
                    InputFieldSpec::boolean("cough", "Cough Absent"),
                    InputFieldSpec::boolean("exudate", "Tonsillar Exudate or Swelling"),
                    InputFieldSpec::boolean("nodes", "Tender Anterior Cervical Nodes"),
                    InputFieldSpec::boolean("age", "Age 3-14 years"),
                ],
                vec![
                    Reference::new(
                        "Centor RM, et al.",
                        1981,
                        "The diagnosis of strep throat in adults in the emergency room",
                        "Medical Decision Making",
                        "1",
                        "239-246",
                    ),
                    Reference::new(
                        "McIsaac WJ, et al.",
                        1998,
                        "A clinical score to reduce unnecessary antibiotic use in patients with sore throat",
                        "CMAJ",
                        "158",
                        "75-83",
                    ),
                ],
            )
        });
        &DEFINITION
    }

    fn evaluate(&self, input: &NormalizedInput) -> Result<ScoreResult, EngineError> {
        Ok(centor(&CentorInput {
            fever: input.flag("fever")?,
            cough_absent: input.flag("cough")?,
            tonsillar_exudate: input.flag("exudate")?,
            tender_anterior_nodes: input.flag("nodes")?,
            age_3_14: input.flag("age")?,
        }))
    }
}
