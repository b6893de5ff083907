use clinicalc_core::error::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DosingError {
    #[error("medication not found: {0}")]
    UnknownMedication(String),

    #[error("input error: {0}")]
    Input(#[from] CoreError),

    #[error("dose for '{medication_id}' is not a finite number ({value})")]
    NonFinite { medication_id: String, value: f64 },
}
