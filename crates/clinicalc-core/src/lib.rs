//! clinicalc-core
//!
//! Shared vocabulary of the calculator engine: risk tiers, score results,
//! calculator definitions, raw and normalized input records, and feedback
//! records. Pure data, no I/O.

pub mod error;
pub mod models;
