//! clinicalc-feedback
//!
//! Local persistence for user feedback on calculators and for the list of
//! favorite calculators. Both live as JSON documents under namespaced keys
//! of a small key-value store.

pub mod error;
pub mod favorites;
pub mod feedback;
pub mod store;

/// Key holding the feedback list.
pub const FEEDBACK_KEY: &str = "clinicalc_feedback";

/// Key holding the favorite calculator ids.
pub const FAVORITES_KEY: &str = "clinicalc_favorites";
