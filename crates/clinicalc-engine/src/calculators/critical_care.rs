use std::sync::LazyLock;

use clinicalc_core::models::definition::{
    CalculatorDefinition, ChoiceOption, InputFieldSpec, Reference, ScoreOrientation,
};
use clinicalc_core::models::input::NormalizedInput;
use clinicalc_core::models::result::ScoreResult;
use clinicalc_formulas::formulas::critical_care::{
    apache_ii, news2, qsofa, sofa, ApacheIiInput, Consciousness, News2Input, QsofaInput,
    SofaInput,
};

use super::definition;
use crate::error::EngineError;
use crate::Calculator;

/// qSOFA: bedside sepsis screen outside the ICU.
pub struct Qsofa;

impl Calculator for Qsofa {
    fn definition(&self) -> &CalculatorDefinition {
        static DEFINITION: LazyLock<CalculatorDefinition> = LazyLock::new(|| {
            definition(
                "qsofa",
                "qSOFA Score",
                "Identifies high-risk patients for sepsis-related mortality outside the ICU",
                &["Critical Care", "Infectious Disease", "Emergency Medicine"],
                ScoreOrientation::HigherIsWorse,
                vec![
                    InputFieldSpec::boolean("altered_mentation", "Altered Mentation")
                        .with_description("Disorientation, lethargy, or agitation"),
                    InputFieldSpec::number("respiratory_rate", "Respiratory Rate", 0.0, 60.0, 16.0)
                        .with_unit("breaths/min")
                        .with_description("Normal: 12-20"),
                    InputFieldSpec::number("systolic_bp", "Systolic Blood Pressure", 0.0, 250.0, 120.0)
                        .with_unit("mmHg")
                        .with_description("Normal: ≥100"),
                ],
                vec![
                    Reference::new(
                        "Singer M, et al.",
                        2016,
                        "The Third International Consensus Definitions for Sepsis and Septic Shock (Sepsis-3)",
                        "JAMA",
                        "315",
                        "801-810",
                    ),
                    Reference::new(
                        "Seymour CW, et al.",
                        2016,
                        "Assessment of Clinical Criteria for Sepsis",
                        "JAMA",
                        "315",
                        "775-787",
                    ),
                ],
            )
        });
        &DEFINITION
    }

    fn evaluate(&self, input: &NormalizedInput) -> Result<ScoreResult, EngineError> {
        Ok(qsofa(&QsofaInput {
            altered_mentation: input.flag("altered_mentation")?,
            respiratory_rate: input.number("respiratory_rate")?,
            systolic_bp: input.number("systolic_bp")?,
        }))
    }
}

/// SOFA: six-organ dysfunction score.
pub struct Sofa;

impl Calculator for Sofa {
    fn definition(&self) -> &CalculatorDefinition {
        static DEFINITION: LazyLock<CalculatorDefinition> = LazyLock::new(|| {
            definition(
                "sofa",
                "SOFA Score",
                "Sequential Organ Failure Assessment - Predicts ICU mortality and organ dysfunction",
                &["Critical Care", "Intensive Care", "Emergency Medicine"],
                ScoreOrientation::HigherIsWorse,
                vec![
                    InputFieldSpec::number("pao2_fio2", "Respiratory Component", 0.0, 600.0, 400.0)
                        .with_description("PaO2/FiO2 ratio"),
                    InputFieldSpec::number("platelets", "Coagulation", 0.0, 1000.0, 150.0)
                        .with_unit("×10³/µL")
                        .with_description("Platelet count"),
                    InputFieldSpec::number("bilirubin", "Liver Function", 0.0, 50.0, 1.0)
                        .with_unit("mg/dL")
                        .with_description("Bilirubin"),
                    InputFieldSpec::number("map", "Cardiovascular", 0.0, 200.0, 100.0)
                        .with_unit("mmHg")
                        .with_description("Mean arterial pressure"),
                    InputFieldSpec::number("gcs", "CNS (Glasgow Coma Scale)", 3.0, 15.0, 15.0),
                    InputFieldSpec::number("creatinine", "Renal Function", 0.0, 20.0, 1.0)
                        .with_unit("mg/dL")
                        .with_description("Creatinine"),
                ],
                vec![Reference::new(
                    "Vincent JL, et al.",
                    1996,
                    "The SOFA (Sepsis-related Organ Failure Assessment) score to describe organ dysfunction/failure",
                    "Intensive Care Medicine",
                    "22",
                    "707-710",
                )],
            )
        });
        &DEFINITION
    }

    fn evaluate(&self, input: &NormalizedInput) -> Result<ScoreResult, EngineError> {
        Ok(sofa(&SofaInput {
            pao2_fio2: input.number("pao2_fio2")?,
            platelets: input.number("platelets")?,
            bilirubin: input.number("bilirubin")?,
            mean_arterial_pressure: input.number("map")?,
            gcs: input.number("gcs")?,
            creatinine: input.number("creatinine")?,
        }))
    }
}

/// APACHE II, vital-sign and age subset.
pub struct ApacheIi;

impl Calculator for ApacheIi {
    fn definition(&self) -> &CalculatorDefinition {
        static DEFINITION: LazyLock<CalculatorDefinition> = LazyLock::new(|| {
            definition(
                "apache2",
                "APACHE II Score",
                "Acute Physiology and Chronic Health Evaluation - ICU mortality prediction",
                &["Critical Care", "Intensive Care"],
                ScoreOrientation::HigherIsWorse,
                vec![
                    InputFieldSpec::number("temperature", "Temperature", 25.0, 45.0, 37.0)
                        .with_unit("°C"),
                    InputFieldSpec::number("heart_rate", "Heart Rate", 0.0, 250.0, 80.0)
                        .with_unit("bpm"),
                    InputFieldSpec::number("respiratory_rate", "Respiratory Rate", 0.0, 80.0, 16.0)
                        .with_unit("breaths/min"),
                    InputFieldSpec::number("systolic_bp", "Systolic Blood Pressure", 0.0, 300.0, 120.0)
                        .with_unit("mmHg"),
                    InputFieldSpec::number("age", "Age", 0.0, 120.0, 50.0).with_unit("years"),
                ],
                vec![Reference::new(
                    "Knaus WA, et al.",
                    1985,
                    "APACHE II: A severity of disease classification system",
                    "Critical Care Medicine",
                    "13",
                    "818-829",
                )],
            )
        });
        &DEFINITION
    }

    fn aliases(&self) -> &[&'static str] {
        &["apache"]
    }

    fn evaluate(&self, input: &NormalizedInput) -> Result<ScoreResult, EngineError> {
        Ok(apache_ii(&ApacheIiInput {
            temperature: input.number("temperature")?,
            heart_rate: input.number("heart_rate")?,
            respiratory_rate: input.number("respiratory_rate")?,
            systolic_bp: input.number("systolic_bp")?,
            age: input.number("age")?,
        }))
    }
}

/// ACVPU levels in chart order; the option weight is the ordinal.
const ACVPU: [(&str, Consciousness); 5] = [
    ("Alert", Consciousness::Alert),
    ("New confusion", Consciousness::NewConfusion),
    ("Voice", Consciousness::Voice),
    ("Pain", Consciousness::Pain),
    ("Unresponsive", Consciousness::Unresponsive),
];

/// NEWS2: early warning score for acute deterioration.
pub struct News2;

impl Calculator for News2 {
    fn definition(&self) -> &CalculatorDefinition {
        static DEFINITION: LazyLock<CalculatorDefinition> = LazyLock::new(|| {
            definition(
                "news2",
                "NEWS2 Score",
                "National Early Warning Score - Detects clinical deterioration",
                &["Critical Care", "Emergency Medicine", "General Medicine", "Respiratory"],
                ScoreOrientation::HigherIsWorse,
                vec![
                    InputFieldSpec::number("respiration", "Respiratory Rate", 0.0, 60.0, 16.0)
                        .with_unit("breaths/min"),
                    InputFieldSpec::number("oxygen", "Oxygen Saturation", 50.0, 100.0, 97.0)
                        .with_unit("%"),
                    InputFieldSpec::boolean("supplemental_oxygen", "On Supplemental Oxygen"),
                    InputFieldSpec::number("temp", "Temperature", 25.0, 45.0, 37.0).with_unit("°C"),
                    InputFieldSpec::number("sbp", "Systolic BP", 50.0, 250.0, 120.0)
                        .with_unit("mmHg"),
                    InputFieldSpec::number("hr", "Heart Rate", 0.0, 300.0, 80.0).with_unit("bpm"),
                    InputFieldSpec::choice(
                        "consciousness",
                        "Consciousness",
                        ACVPU
                            .iter()
                            .enumerate()
                            .map(|(i, (label, _))| ChoiceOption::weighted(label, i as f64))
                            .collect(),
                        "Alert",
                    ),
                ],
                vec![Reference::new(
                    "Royal College of Physicians",
                    2017,
                    "National Early Warning Score (NEWS) 2",
                    "Clinical Guide",
                    "",
                    "",
                )],
            )
        });
        &DEFINITION
    }

    fn evaluate(&self, input: &NormalizedInput) -> Result<ScoreResult, EngineError> {
        let level = input.weight("consciousness")?;
        let consciousness = ACVPU
            .get(level as usize)
            .map_or(Consciousness::Alert, |(_, c)| *c);
        Ok(news2(&News2Input {
            respiratory_rate: input.number("respiration")?,
            spo2: input.number("oxygen")?,
            supplemental_oxygen: input.flag("supplemental_oxygen")?,
            temperature: input.number("temp")?,
            systolic_bp: input.number("sbp")?,
            heart_rate: input.number("hr")?,
            consciousness,
        }))
    }
}
