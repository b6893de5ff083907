use clinicalc_core::error::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// The normalized record does not match what the evaluator reads. Only
    /// reachable when a definition and its evaluator disagree.
    #[error("input error: {0}")]
    Input(#[from] CoreError),

    #[error("'{calculator_id}' produced a non-finite result ({value})")]
    NonFinite { calculator_id: String, value: f64 },

    #[error("evaluator panicked: {0}")]
    Panicked(String),
}

/// A calculation that could not produce a result. Callers should treat it
/// as "unable to compute", never as fatal.
#[derive(Debug, Error)]
#[error("calculation failed for '{calculator_id}': {source}")]
pub struct Failure {
    pub calculator_id: String,
    #[source]
    pub source: EngineError,
}

impl Failure {
    pub fn new(calculator_id: &str, source: EngineError) -> Self {
        Self {
            calculator_id: calculator_id.to_string(),
            source,
        }
    }
}
