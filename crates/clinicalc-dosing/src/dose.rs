use std::sync::LazyLock;

use clinicalc_core::models::definition::{ChoiceOption, InputFieldSpec};
use clinicalc_core::models::input::RawInputBag;
use clinicalc_engine::normalize::normalize;
use clinicalc_formulas::formulas::hepatology::ChildPughClass;
use clinicalc_formulas::formulas::renal::estimate_gfr;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::DosingError;
use crate::medications::{self, Medication, ReferenceSource, REFERENCES_UPDATED};

/// Patient parameters for a dosing calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DosingInput {
    /// Body weight, kg.
    pub weight: f64,
    pub age: f64,
    /// Serum creatinine, mg/dL.
    pub creatinine: f64,
    pub female: bool,
    /// Child-Pugh class for hepatic adjustment, when known.
    pub child_pugh: Option<ChildPughClass>,
}

static FIELDS: LazyLock<Vec<InputFieldSpec>> = LazyLock::new(|| {
    vec![
        InputFieldSpec::number("weight", "Weight", 1.0, 300.0, 70.0).with_unit("kg"),
        InputFieldSpec::number("age", "Age", 0.0, 120.0, 50.0).with_unit("years"),
        InputFieldSpec::number("creatinine", "Serum Creatinine", 0.1, 10.0, 1.0).with_unit("mg/dL"),
        InputFieldSpec::boolean("female", "Female Sex"),
        InputFieldSpec::choice(
            "child_pugh",
            "Child-Pugh Class",
            ["Unknown", "A", "B", "C"].map(ChoiceOption::plain).to_vec(),
            "Unknown",
        ),
    ]
});

/// Fields a dosing form collects, with their defaults.
pub fn dosing_fields() -> &'static [InputFieldSpec] {
    &FIELDS
}

impl DosingInput {
    /// Coerce a raw form bag, substituting defaults exactly as the scoring
    /// engine does.
    pub fn from_raw(raw: &RawInputBag) -> Result<Self, DosingError> {
        let input = normalize(dosing_fields(), raw);
        let child_pugh = match input.choice("child_pugh")?.value.as_str() {
            "A" => Some(ChildPughClass::A),
            "B" => Some(ChildPughClass::B),
            "C" => Some(ChildPughClass::C),
            _ => None,
        };
        Ok(Self {
            weight: input.number("weight")?,
            age: input.number("age")?,
            creatinine: input.number("creatinine")?,
            female: input.flag("female")?,
            child_pugh,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ComputedComponent {
    pub name: String,
    /// Unadjusted amount for this patient's weight.
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DrugReference {
    pub source: ReferenceSource,
    pub last_updated: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DosingResult {
    pub medication_id: String,
    pub medication_name: String,
    pub standard_dose: String,
    /// Every dose component before adjustment.
    pub components: Vec<ComputedComponent>,
    /// The primary component after renal and hepatic adjustment, to one
    /// decimal place.
    pub calculated_dose: f64,
    pub unit: String,
    /// Estimated GFR, mL/min/1.73m².
    pub gfr: f64,
    pub renal_factor: f64,
    pub renal_adjustment: String,
    pub hepatic_factor: f64,
    pub hepatic_adjustment: Option<String>,
    pub warnings: Vec<String>,
    pub references: Vec<DrugReference>,
}

fn describe_renal(gfr: f64, factor: f64) -> String {
    if factor >= 1.0 {
        format!("GFR: {gfr} mL/min - No adjustment")
    } else {
        format!("GFR: {gfr} mL/min - Reduced to {}% dose", (factor * 100.0).round())
    }
}

fn describe_hepatic(class: ChildPughClass) -> String {
    match class {
        ChildPughClass::A => "Child-Pugh A (Mild) - No adjustment needed",
        ChildPughClass::B => "Child-Pugh B (Moderate) - Reduce dose 25-50%",
        ChildPughClass::C => "Child-Pugh C (Severe) - Reduce dose 50-75% or avoid",
    }
    .to_string()
}

/// Compute the adjusted dose of `medication_id` for this patient.
pub fn calculate_dose(medication_id: &str, input: &DosingInput) -> Result<DosingResult, DosingError> {
    let Some(medication) = medications::find(medication_id) else {
        tracing::warn!(medication_id = %medication_id, "unknown medication");
        return Err(DosingError::UnknownMedication(medication_id.to_string()));
    };
    dose_for(medication, input)
}

/// [`DosingInput::from_raw`] followed by [`calculate_dose`].
pub fn calculate_dose_raw(medication_id: &str, raw: &RawInputBag) -> Result<DosingResult, DosingError> {
    calculate_dose(medication_id, &DosingInput::from_raw(raw)?)
}

fn dose_for(medication: &Medication, input: &DosingInput) -> Result<DosingResult, DosingError> {
    let gfr = estimate_gfr(input.creatinine, input.age, input.female);
    let renal_factor = medication.renal.factor(gfr);
    let hepatic_factor = input.child_pugh.map_or(1.0, ChildPughClass::dose_factor);

    let base = medication
        .primary()
        .map_or(0.0, |c| c.amount.for_weight(input.weight));
    let adjusted = base * renal_factor * hepatic_factor;
    let calculated_dose = (adjusted * 10.0).round() / 10.0;

    tracing::debug!(
        medication_id = medication.id,
        gfr,
        renal_factor,
        hepatic_factor,
        calculated_dose,
        "dose calculated"
    );

    if !calculated_dose.is_finite() {
        return Err(DosingError::NonFinite {
            medication_id: medication.id.to_string(),
            value: calculated_dose,
        });
    }

    Ok(DosingResult {
        medication_id: medication.id.to_string(),
        medication_name: medication.name.to_string(),
        standard_dose: medication.standard_dose.to_string(),
        components: medication
            .components
            .iter()
            .map(|c| ComputedComponent {
                name: c.name.to_string(),
                amount: c.amount.for_weight(input.weight),
            })
            .collect(),
        calculated_dose,
        unit: medication.unit.to_string(),
        gfr,
        renal_factor,
        renal_adjustment: describe_renal(gfr, renal_factor),
        hepatic_factor,
        hepatic_adjustment: input.child_pugh.map(describe_hepatic),
        warnings: medication.warnings.iter().map(|w| w.to_string()).collect(),
        references: medication
            .references
            .iter()
            .map(|&source| DrugReference {
                source,
                last_updated: REFERENCES_UPDATED.to_string(),
            })
            .collect(),
    })
}
