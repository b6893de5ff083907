//! clinicalc-engine
//!
//! Calculator catalogue and dispatch. Maps a calculator id and an untyped
//! input bag to the matching formula: the bag is normalized against the
//! calculator's field specs, the formula runs on the typed record, and any
//! non-finite outcome comes back as a [`Failure`](error::Failure) rather
//! than a panic. Unknown ids fall through to the generic scorer.

pub mod calculators;
pub mod error;
pub mod normalize;
pub mod registry;

use clinicalc_core::models::definition::CalculatorDefinition;
use clinicalc_core::models::input::{NormalizedInput, RawInputBag};
use clinicalc_core::models::result::ScoreResult;

use error::{EngineError, Failure};
use registry::Registry;

/// Trait implemented by each calculator in the catalogue.
pub trait Calculator: Send + Sync {
    /// Static descriptor: id, labels, fields, references.
    fn definition(&self) -> &CalculatorDefinition;

    /// Run the formula on a record produced by [`Calculator::normalize`].
    fn evaluate(&self, input: &NormalizedInput) -> Result<ScoreResult, EngineError>;

    fn id(&self) -> &str {
        &self.definition().id
    }

    fn name(&self) -> &str {
        &self.definition().name
    }

    /// Other ids this calculator answers to.
    fn aliases(&self) -> &[&'static str] {
        &[]
    }

    /// Coerce a raw bag into the typed record `evaluate` expects.
    fn normalize(&self, raw: &RawInputBag) -> NormalizedInput {
        normalize::normalize(&self.definition().input_fields, raw)
    }
}

/// Return all built-in calculators in catalogue order.
pub fn all_calculators() -> Vec<Box<dyn Calculator>> {
    use calculators::{
        cardiology, critical_care, gastroenterology, hepatology, neurology, perioperative, renal,
        respiratory, vascular,
    };

    vec![
        Box::new(critical_care::Qsofa),
        Box::new(critical_care::Sofa),
        Box::new(critical_care::ApacheIi),
        Box::new(critical_care::News2),
        Box::new(cardiology::Heart),
        Box::new(cardiology::Cha2ds2Vasc),
        Box::new(cardiology::HasBled),
        Box::new(cardiology::Timi),
        Box::new(cardiology::Framingham),
        Box::new(cardiology::Ascvd),
        Box::new(neurology::Nihss),
        Box::new(neurology::Abcd2),
        Box::new(neurology::GlasgowComa),
        Box::new(respiratory::Curb65),
        Box::new(respiratory::SmartCop),
        Box::new(respiratory::Pesi),
        Box::new(respiratory::PsiPort),
        Box::new(respiratory::Centor),
        Box::new(vascular::WellsDvt),
        Box::new(vascular::WellsPe),
        Box::new(renal::CkdEpi),
        Box::new(renal::CreatinineClearance),
        Box::new(hepatology::Meld),
        Box::new(hepatology::MeldNa),
        Box::new(hepatology::ChildPugh),
        Box::new(hepatology::Fib4),
        Box::new(hepatology::Apri),
        Box::new(gastroenterology::GlasgowBlatchford),
        Box::new(gastroenterology::Bisap),
        Box::new(perioperative::AsaPhysicalStatus),
        Box::new(perioperative::Rcri),
        Box::new(perioperative::CapriniVte),
    ]
}

/// Score `raw` with the built-in calculator registered under `calculator_id`.
///
/// Unknown ids are scored by the generic fallback, not rejected.
pub fn execute(calculator_id: &str, raw: &RawInputBag) -> Result<ScoreResult, Failure> {
    Registry::builtin().execute(calculator_id, raw)
}

/// Look up a built-in definition by id or alias.
pub fn get_definition(calculator_id: &str) -> Option<&'static CalculatorDefinition> {
    Registry::builtin().definition(calculator_id)
}

/// All built-in definitions, in catalogue order.
pub fn list_definitions() -> Vec<&'static CalculatorDefinition> {
    Registry::builtin().definitions().collect()
}

/// Built-in definitions carrying the category tag (case-insensitive).
pub fn by_category(tag: &str) -> Vec<&'static CalculatorDefinition> {
    Registry::builtin()
        .definitions()
        .filter(|d| d.has_category(tag))
        .collect()
}
