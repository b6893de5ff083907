use std::any::Any;
use std::collections::HashMap;
use std::panic::{self, AssertUnwindSafe};
use std::sync::LazyLock;

use clinicalc_core::models::definition::CalculatorDefinition;
use clinicalc_core::models::input::RawInputBag;
use clinicalc_core::models::result::ScoreResult;
use clinicalc_formulas::formulas::generic::generic;

use crate::error::{EngineError, Failure};
use crate::normalize::untyped_contributions;
use crate::{all_calculators, Calculator};

/// Open map from calculator id (and aliases) to calculator, with the
/// generic scorer as the default entry.
pub struct Registry {
    calculators: Vec<Box<dyn Calculator>>,
    index: HashMap<String, usize>,
}

static BUILTIN: LazyLock<Registry> = LazyLock::new(|| {
    let mut registry = Registry::new();
    for calculator in all_calculators() {
        registry.register(calculator);
    }
    registry
});

impl Registry {
    /// An empty registry: every id resolves to the generic scorer.
    pub fn new() -> Self {
        Self {
            calculators: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// The process-wide registry holding every built-in calculator.
    pub fn builtin() -> &'static Registry {
        &BUILTIN
    }

    /// Add a calculator under its id and aliases. A later registration
    /// takes over any id or alias it shares with an earlier one.
    pub fn register(&mut self, calculator: Box<dyn Calculator>) {
        let position = self.calculators.len();
        let keys = std::iter::once(calculator.id().to_string())
            .chain(calculator.aliases().iter().map(|a| a.to_string()));
        for key in keys {
            if let Some(previous) = self.index.insert(key.clone(), position) {
                tracing::warn!(
                    calculator_id = %key,
                    replaced = %self.calculators[previous].id(),
                    "calculator id registered twice"
                );
            }
        }
        self.calculators.push(calculator);
    }

    pub fn get(&self, calculator_id: &str) -> Option<&dyn Calculator> {
        self.index
            .get(calculator_id)
            .map(|&i| self.calculators[i].as_ref())
    }

    pub fn definition(&self, calculator_id: &str) -> Option<&CalculatorDefinition> {
        self.get(calculator_id).map(|c| c.definition())
    }

    /// Definitions in registration order, each once regardless of aliases.
    /// Calculators shadowed by a later registration are skipped.
    pub fn definitions(&self) -> impl Iterator<Item = &CalculatorDefinition> {
        self.calculators
            .iter()
            .enumerate()
            .filter(|(i, c)| self.index.get(c.id()) == Some(i))
            .map(|(_, c)| c.definition())
    }

    pub fn len(&self) -> usize {
        self.definitions().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Normalize `raw`, run the matching formula and check the outcome.
    ///
    /// Unknown ids are scored by the generic fallback. A result holding NaN
    /// or infinity, or an evaluator that panics, is reported as a
    /// [`Failure`] naming the calculator.
    pub fn execute(&self, calculator_id: &str, raw: &RawInputBag) -> Result<ScoreResult, Failure> {
        let _span = tracing::debug_span!("execute", calculator_id = %calculator_id).entered();

        let outcome = match self.get(calculator_id) {
            Some(calculator) => {
                panic::catch_unwind(AssertUnwindSafe(|| {
                    let input = calculator.normalize(raw);
                    calculator.evaluate(&input)
                }))
                .unwrap_or_else(|payload| Err(EngineError::Panicked(panic_message(payload))))
            }
            None => {
                tracing::debug!(calculator_id = %calculator_id, "no formula registered, using generic scorer");
                Ok(generic(&untyped_contributions(raw)))
            }
        };

        outcome
            .and_then(|result| ensure_finite(calculator_id, result))
            .map_err(|source| {
                let failure = Failure::new(calculator_id, source);
                tracing::warn!(calculator_id = %calculator_id, error = %failure, "calculation failed");
                failure
            })
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    match payload.downcast::<String>() {
        Ok(message) => *message,
        Err(payload) => payload
            .downcast_ref::<&str>()
            .map_or_else(|| "unknown panic".to_string(), |s| s.to_string()),
    }
}

fn ensure_finite(calculator_id: &str, result: ScoreResult) -> Result<ScoreResult, EngineError> {
    if result.is_finite() {
        return Ok(result);
    }
    let value = result
        .measured
        .filter(|v| !v.is_finite())
        .unwrap_or(result.score);
    Err(EngineError::NonFinite {
        calculator_id: calculator_id.to_string(),
        value,
    })
}
