use clinicalc_core::models::feedback::{FeedbackRecord, FeedbackSubmission};
use jiff::Timestamp;

use crate::error::FeedbackError;
use crate::store::{load_json, save_json, KeyValueStore};
use crate::FEEDBACK_KEY;

/// Every feedback entry ever submitted, persisted as one JSON list.
pub struct FeedbackStore<S> {
    store: S,
    records: Vec<FeedbackRecord>,
}

impl<S: KeyValueStore> FeedbackStore<S> {
    /// Load the saved list. A store that has never held feedback starts empty.
    pub fn open(store: S) -> Result<Self, FeedbackError> {
        let records: Vec<FeedbackRecord> = load_json(&store, FEEDBACK_KEY)?;
        tracing::debug!(count = records.len(), "feedback loaded");
        Ok(Self { store, records })
    }

    /// Validate, stamp with the current time, append and persist.
    pub fn submit(&mut self, submission: FeedbackSubmission) -> Result<FeedbackRecord, FeedbackError> {
        self.submit_at(submission, Timestamp::now())
    }

    pub fn submit_at(
        &mut self,
        submission: FeedbackSubmission,
        timestamp: Timestamp,
    ) -> Result<FeedbackRecord, FeedbackError> {
        let record = submission.stamp(timestamp)?;
        self.records.push(record.clone());
        if let Err(e) = save_json(&mut self.store, FEEDBACK_KEY, &self.records) {
            self.records.pop();
            return Err(e);
        }
        tracing::info!(calculator_id = %record.calculator_id, rating = record.rating, "feedback submitted");
        Ok(record)
    }

    pub fn records(&self) -> &[FeedbackRecord] {
        &self.records
    }

    pub fn for_calculator<'a>(
        &'a self,
        calculator_id: &'a str,
    ) -> impl Iterator<Item = &'a FeedbackRecord> + 'a {
        self.records
            .iter()
            .filter(move |r| r.calculator_id == calculator_id)
    }

    /// Mean rating to one decimal place; 0 when there is no feedback.
    pub fn average_rating(&self, calculator_id: &str) -> f64 {
        let ratings: Vec<f64> = self
            .for_calculator(calculator_id)
            .map(|r| f64::from(r.rating))
            .collect();
        if ratings.is_empty() {
            return 0.0;
        }
        let mean = ratings.iter().sum::<f64>() / ratings.len() as f64;
        (mean * 10.0).round() / 10.0
    }

    /// Share of entries marked helpful, as a rounded percentage. Entries
    /// that skipped the question count against it.
    pub fn helpful_percentage(&self, calculator_id: &str) -> u32 {
        let (total, helpful) = self
            .for_calculator(calculator_id)
            .fold((0u32, 0u32), |(total, helpful), r| {
                (total + 1, helpful + u32::from(r.helpful == Some(true)))
            });
        if total == 0 {
            return 0;
        }
        (f64::from(helpful) / f64::from(total) * 100.0).round() as u32
    }

    /// The whole list as pretty-printed JSON.
    pub fn export_json(&self) -> Result<String, FeedbackError> {
        Ok(serde_json::to_string_pretty(&self.records)?)
    }

    pub fn into_inner(self) -> S {
        self.store
    }
}
