// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Value types for the single-qubit error budget.
//!
//! Every type here is constructed fresh from its inputs and never mutated
//! afterwards. Nothing carries identity beyond its field values.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Transmon coherence and drive parameters for one gate calibration query.
///
/// # Units
///
/// - `anharmonicity_mhz` in MHz (negative for transmons)
/// - `t1_us`, `t2_us` in microseconds
/// - `gate_time_ns` in nanoseconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HardwareParams {
    /// Anharmonicity (f12 - f01) in MHz.
    pub anharmonicity_mhz: f64,
    /// T1 relaxation time in microseconds.
    pub t1_us: f64,
    /// T2 coherence time in microseconds.
    pub t2_us: f64,
    /// Gate (pulse) duration in nanoseconds.
    pub gate_time_ns: f64,
}

impl HardwareParams {
    /// Create a parameter set. No validation is performed here; see
    /// [`crate::validation::validate_hardware_params`].
    pub fn new(anharmonicity_mhz: f64, t1_us: f64, t2_us: f64, gate_time_ns: f64) -> Self {
        Self {
            anharmonicity_mhz,
            t1_us,
            t2_us,
            gate_time_ns,
        }
    }

    /// Same hardware, different gate duration.
    pub fn with_gate_time(self, gate_time_ns: f64) -> Self {
        Self {
            gate_time_ns,
            ..self
        }
    }
}

/// Infidelity contributions from relaxation and dephasing during one gate.
///
/// No pulse-shaping method can get below `total`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecoherenceFloor {
    /// Relaxation contribution `t / (2 T1)`.
    pub t1_contribution: f64,
    /// Pure-dephasing contribution, clamped to be non-negative.
    pub t2_contribution: f64,
    /// `t1_contribution + t2_contribution`.
    pub total: f64,
}

/// Estimated total infidelity per pulse-shaping method.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InfidelityEstimates {
    pub gaussian: f64,
    pub drag: f64,
    pub grape: f64,
}

impl InfidelityEstimates {
    /// Estimate for a single method.
    pub fn get(&self, method: PulseMethod) -> f64 {
        match method {
            PulseMethod::Gaussian => self.gaussian,
            PulseMethod::Drag => self.drag,
            PulseMethod::Grape => self.grape,
        }
    }
}

/// Pulse-shaping strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PulseMethod {
    /// Plain Gaussian envelope, no leakage correction.
    Gaussian,
    /// Gaussian with first-order DRAG quadrature correction.
    Drag,
    /// Numerically optimized (GRAPE) pulse.
    Grape,
}

impl PulseMethod {
    /// All methods in reporting order.
    pub const ALL: [PulseMethod; 3] = [
        PulseMethod::Gaussian,
        PulseMethod::Drag,
        PulseMethod::Grape,
    ];

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            PulseMethod::Gaussian => "Gaussian",
            PulseMethod::Drag => "DRAG",
            PulseMethod::Grape => "GRAPE",
        }
    }
}

impl fmt::Display for PulseMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which pulse method a gate calibration calls for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Regime {
    /// Gate shorter than the validity limit of perturbative DRAG.
    ShortGate,
    /// DRAG coherent error is well under the decoherence floor.
    DragSufficient,
    /// DRAG leaves too much coherent error; optimize numerically.
    GrapeNeeded,
}

impl Regime {
    /// Stable identifier, identical to the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Regime::ShortGate => "short_gate",
            Regime::DragSufficient => "drag_sufficient",
            Regime::GrapeNeeded => "grape_needed",
        }
    }
}

impl fmt::Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Full error budget for one gate calibration query.
///
/// Built by [`crate::budget::compute_error_budget`]. `regime` and
/// `recommendation` are derived from the other fields and reproduce exactly
/// for identical inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBudget {
    pub hardware: HardwareParams,
    pub decoherence_floor: DecoherenceFloor,
    pub estimated_infidelity: InfidelityEstimates,
    pub regime: Regime,
    /// DRAG quadrature scaling in nanoseconds.
    pub drag_beta: f64,
    /// T2 expressed in gate durations. Reporting only.
    pub t2_over_t_ratio: f64,
    pub recommendation: String,
}

/// Worst-case fidelity of one method under detuning and amplitude
/// miscalibration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RobustnessEstimate {
    pub method: PulseMethod,
    /// Minimum fidelity over the reference detuning range.
    pub detuning_min_fidelity: f64,
    /// Minimum fidelity over the reference amplitude error range.
    pub amplitude_min_fidelity: f64,
    pub robust_to_detuning: bool,
    pub robust_to_amplitude: bool,
}
