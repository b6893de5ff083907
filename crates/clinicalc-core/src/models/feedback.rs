use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Feedback as submitted from the UI, before it is timestamped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FeedbackSubmission {
    pub calculator_id: String,
    /// 1–5.
    pub rating: u8,
    /// `None` when the user skipped the question.
    pub helpful: Option<bool>,
    /// 1–5.
    pub ease_of_use: u8,
    pub comment: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub user_email: Option<String>,
}

impl FeedbackSubmission {
    pub fn validate(&self) -> Result<(), CoreError> {
        check_rating("rating", self.rating)?;
        check_rating("ease_of_use", self.ease_of_use)
    }

    /// Validate and stamp the submission, producing a stored record.
    pub fn stamp(self, timestamp: jiff::Timestamp) -> Result<FeedbackRecord, CoreError> {
        self.validate()?;
        Ok(FeedbackRecord {
            calculator_id: self.calculator_id,
            rating: self.rating,
            helpful: self.helpful,
            ease_of_use: self.ease_of_use,
            comment: self.comment,
            user_email: self.user_email,
            timestamp,
        })
    }
}

fn check_rating(field: &'static str, value: u8) -> Result<(), CoreError> {
    if (1..=5).contains(&value) {
        Ok(())
    } else {
        Err(CoreError::InvalidRating { field, value })
    }
}

/// A persisted feedback entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FeedbackRecord {
    pub calculator_id: String,
    pub rating: u8,
    pub helpful: Option<bool>,
    pub ease_of_use: u8,
    pub comment: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub user_email: Option<String>,
    pub timestamp: jiff::Timestamp,
}
