// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Coherent-error scaling laws for Gaussian and DRAG pulses.
//!
//! Both models are empirical power laws pinned to a single reference point:
//! a 20 ns gate on a transmon with |alpha| = 200 MHz.
//!
//! - Gaussian: `eps = 2.8e-2 * (20/T)^2 * (200/|alpha|)^2`
//! - DRAG:     `eps = 4.9e-4 * (20/T)^4 * (200/|alpha|)^2`
//!
//! DRAG removes leakage to first order, so its residual error falls off with
//! the fourth power of gate time instead of the second.
//!
//! # References
//!
//! - Motzoi, Gambetta, Rebentrost, Wilhelm (2009), PRL 103, 110501.
//!   doi:10.1103/PhysRevLett.103.110501
//! - Gambetta, Motzoi, Merkel, Wilhelm (2011), PRA 83, 012308.

use std::f64::consts::PI;

/// Gate time of the calibration reference point, in ns.
pub const REFERENCE_GATE_TIME_NS: f64 = 20.0;

/// Anharmonicity magnitude of the calibration reference point, in MHz.
pub const REFERENCE_ANHARMONICITY_MHZ: f64 = 200.0;

/// DRAG coherent error at the reference point.
pub const DRAG_REFERENCE_ERROR: f64 = 4.9e-4;

/// Gaussian coherent error at the reference point.
pub const GAUSSIAN_REFERENCE_ERROR: f64 = 2.8e-2;

fn anharmonicity_scale(anharmonicity_mhz: f64) -> f64 {
    (REFERENCE_ANHARMONICITY_MHZ / anharmonicity_mhz.abs()).powi(2)
}

/// Residual coherent error of a first-order DRAG pulse.
pub fn drag_coherent_error(gate_time_ns: f64, anharmonicity_mhz: f64) -> f64 {
    DRAG_REFERENCE_ERROR
        * (REFERENCE_GATE_TIME_NS / gate_time_ns).powi(4)
        * anharmonicity_scale(anharmonicity_mhz)
}

/// Coherent error of an uncorrected Gaussian pulse.
pub fn gaussian_coherent_error(gate_time_ns: f64, anharmonicity_mhz: f64) -> f64 {
    GAUSSIAN_REFERENCE_ERROR
        * (REFERENCE_GATE_TIME_NS / gate_time_ns).powi(2)
        * anharmonicity_scale(anharmonicity_mhz)
}

/// Anharmonicity as an angular frequency in rad/ns.
pub fn anharmonicity_rad_per_ns(anharmonicity_mhz: f64) -> f64 {
    anharmonicity_mhz * 2.0 * PI / 1000.0
}

/// DRAG quadrature coefficient `beta = -1 / (2 alpha)` in ns.
///
/// Depends on the anharmonicity and nothing else.
pub fn drag_beta(anharmonicity_mhz: f64) -> f64 {
    -1.0 / (2.0 * anharmonicity_rad_per_ns(anharmonicity_mhz))
}
