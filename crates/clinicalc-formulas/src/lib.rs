//! clinicalc-formulas
//!
//! The scoring formulas. Each formula is a pure function from a typed
//! input record to a [`ScoreResult`](clinicalc_core::models::result::ScoreResult):
//! no I/O, no shared state, same input gives the same output.
//!
//! Banding thresholds and outcome-rate tables live next to the formula
//! that owns them; [`classifier`] only supplies the lookup helpers.

pub mod classifier;
pub mod formulas;
