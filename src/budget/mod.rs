// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Error budget engine for single-qubit transmon gates.
//!
//! Given coherence times, anharmonicity and a gate duration, the engine
//! estimates total infidelity for three pulse-shaping strategies and decides
//! which one the calibration calls for.
//!
//! # Architecture
//!
//! Every stage is a pure function over value types:
//!
//! - [`compute_decoherence_floor`]: T1/T_phi infidelity no pulse can beat
//! - [`drag_coherent_error`], [`gaussian_coherent_error`]: empirical
//!   coherent-error scaling laws
//! - [`drag_beta`]: DRAG quadrature coefficient from the anharmonicity
//! - [`compute_error_budget`]: floor + coherent errors + regime
//! - [`estimate_robustness`]: worst-case fidelity under miscalibration
//! - [`report`]: deterministic text rendering
//!
//! Calls share no state and may run concurrently without synchronization.

pub mod assemble;
pub mod coherent;
pub mod floor;
pub mod regime;
pub mod report;
pub mod robustness;
pub mod types;

pub use assemble::compute_error_budget;
pub use coherent::{drag_beta, drag_coherent_error, gaussian_coherent_error};
pub use floor::compute_decoherence_floor;
pub use regime::{classify_regime, RegimeInputs, REGIME_RULES};
pub use report::{render_budget, render_robustness};
pub use robustness::{estimate_robustness, ROBUSTNESS_THRESHOLD};
pub use types::{
    DecoherenceFloor, ErrorBudget, HardwareParams, InfidelityEstimates, PulseMethod, Regime,
    RobustnessEstimate,
};
