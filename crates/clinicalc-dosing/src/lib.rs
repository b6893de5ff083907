//! clinicalc-dosing
//!
//! Weight-based medication dosing with renal and hepatic adjustment.
//! Follows the same normalize, compute, classify shape as the scoring
//! engine: a raw bag is coerced into a [`DosingInput`](dose::DosingInput),
//! the baseline dose is computed from body weight, and the estimated GFR
//! and optional Child-Pugh class pick the adjustment multipliers.

pub mod dose;
pub mod error;
pub mod medications;

pub use dose::{calculate_dose, calculate_dose_raw, DosingInput, DosingResult};
pub use error::DosingError;
