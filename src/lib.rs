// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! QubitOS Calibration
//!
//! Error budget estimation for single-qubit gates on transmon qubits. Given
//! coherence times, anharmonicity and a gate duration, the crate decomposes
//! the expected infidelity for Gaussian, DRAG and GRAPE pulses, classifies
//! which method the calibration calls for, and estimates robustness to
//! detuning and amplitude miscalibration.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │        CLI          │   REST (axum)     │
//! ├─────────────────────┴───────────────────┤
//! │   analysis (validate → budget → robust) │
//! ├──────────────────┬──────────────────────┤
//! │    validation    │   store (presets)    │
//! ├──────────────────┴──────────────────────┤
//! │        budget engine (pure, no I/O)     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`budget`]: Decoherence floor, coherent-error laws, regime, robustness
//! - [`analysis`]: Validated end-to-end entry point
//! - [`validation`]: Input validation
//! - [`store`]: Saved hardware configurations
//! - [`config`]: Configuration management
//! - [`server`]: REST server
//! - [`error`]: Error types

pub mod analysis;
pub mod budget;
pub mod config;
pub mod error;
pub mod server;
pub mod store;
pub mod validation;

pub use analysis::{analyze, CalibrationAnalysis};
pub use config::Config;
pub use error::{Error, Result};

#[cfg(test)]
pub mod test_utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
