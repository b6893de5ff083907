//! clinicalc-cli
//!
//! Terminal host for the scoring engine: configuration, logging setup and
//! the command implementations behind the `clinicalc` binary.

pub mod commands;
pub mod config;
