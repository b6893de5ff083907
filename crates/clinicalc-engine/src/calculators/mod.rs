//! Built-in calculators, grouped by specialty. Each one pairs a static
//! [`CalculatorDefinition`] with the formula it dispatches to.

pub mod cardiology;
pub mod critical_care;
pub mod gastroenterology;
pub mod hepatology;
pub mod neurology;
pub mod perioperative;
pub mod renal;
pub mod respiratory;
pub mod vascular;

use clinicalc_core::models::definition::{
    CalculatorDefinition, InputFieldSpec, Reference, ScoreOrientation,
};

pub(crate) fn definition(
    id: &str,
    name: &str,
    description: &str,
    categories: &[&str],
    orientation: ScoreOrientation,
    input_fields: Vec<InputFieldSpec>,
    references: Vec<Reference>,
) -> CalculatorDefinition {
    CalculatorDefinition {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        categories: categories.iter().map(|c| c.to_string()).collect(),
        orientation,
        input_fields,
        references,
    }
}
