use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("missing required field: {0}")]
    MissingField(String),

    #[error("field '{field}' does not hold a {expected} value")]
    FieldType {
        field: String,
        expected: &'static str,
    },

    #[error("{field} must be between 1 and 5, got {value}")]
    InvalidRating { field: &'static str, value: u8 },
}
