// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Robustness of each pulse method to detuning and amplitude miscalibration.
//!
//! Worst-case fidelities come from a fixed reference table measured at a
//! 20 ns gate. Shorter gates degrade them through
//! `gate_factor = min(1, 20 / T)`:
//!
//! ```text
//! F_min = F_ref * (1 - coef * gate_factor)
//! ```
//!
//! The `robust_to_*` flags are static classifications from the reference
//! study. They are not thresholded from the computed fidelities.

use tracing::debug;

use super::coherent::REFERENCE_GATE_TIME_NS;
use super::types::{HardwareParams, PulseMethod, RobustnessEstimate};

/// Fidelity a method must hold under miscalibration to count as robust.
pub const ROBUSTNESS_THRESHOLD: f64 = 0.98;

/// Reference robustness data for one pulse method.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RobustnessReference {
    pub method: PulseMethod,
    pub detuning_fidelity: f64,
    pub detuning_coefficient: f64,
    pub amplitude_fidelity: f64,
    pub amplitude_coefficient: f64,
    pub robust_to_detuning: bool,
    pub robust_to_amplitude: bool,
}

/// Reference table, in reporting order.
pub const ROBUSTNESS_TABLE: [RobustnessReference; 3] = [
    RobustnessReference {
        method: PulseMethod::Gaussian,
        detuning_fidelity: 0.937,
        detuning_coefficient: 0.03,
        amplitude_fidelity: 0.965,
        amplitude_coefficient: 0.02,
        robust_to_detuning: false,
        robust_to_amplitude: false,
    },
    RobustnessReference {
        method: PulseMethod::Drag,
        detuning_fidelity: 0.990,
        detuning_coefficient: 0.01,
        amplitude_fidelity: 0.990,
        amplitude_coefficient: 0.01,
        robust_to_detuning: true,
        robust_to_amplitude: true,
    },
    RobustnessReference {
        method: PulseMethod::Grape,
        detuning_fidelity: 0.931,
        detuning_coefficient: 0.04,
        amplitude_fidelity: 0.994,
        amplitude_coefficient: 0.005,
        robust_to_detuning: false,
        robust_to_amplitude: true,
    },
];

/// Degradation factor for a gate of `gate_time_ns`, capped at 1.
pub fn gate_factor(gate_time_ns: f64) -> f64 {
    (REFERENCE_GATE_TIME_NS / gate_time_ns).min(1.0)
}

impl RobustnessEstimate {
    /// Whether the static flags agree with thresholding the computed
    /// fidelities at [`ROBUSTNESS_THRESHOLD`].
    pub fn flags_match_threshold(&self) -> bool {
        self.robust_to_detuning == (self.detuning_min_fidelity >= ROBUSTNESS_THRESHOLD)
            && self.robust_to_amplitude == (self.amplitude_min_fidelity >= ROBUSTNESS_THRESHOLD)
    }
}

/// Estimate robustness for Gaussian, DRAG and GRAPE, in that order.
pub fn estimate_robustness(params: &HardwareParams) -> [RobustnessEstimate; 3] {
    let factor = gate_factor(params.gate_time_ns);

    ROBUSTNESS_TABLE.map(|reference| {
        let estimate = RobustnessEstimate {
            method: reference.method,
            detuning_min_fidelity: reference.detuning_fidelity
                * (1.0 - reference.detuning_coefficient * factor),
            amplitude_min_fidelity: reference.amplitude_fidelity
                * (1.0 - reference.amplitude_coefficient * factor),
            robust_to_detuning: reference.robust_to_detuning,
            robust_to_amplitude: reference.robust_to_amplitude,
        };

        if !estimate.flags_match_threshold() {
            debug!(
                method = %estimate.method,
                detuning = estimate.detuning_min_fidelity,
                amplitude = estimate.amplitude_min_fidelity,
                threshold = ROBUSTNESS_THRESHOLD,
                "Static robustness flags disagree with computed fidelity"
            );
        }

        estimate
    })
}
