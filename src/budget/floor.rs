// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Decoherence floor for a single gate.
//!
//! Uses the rate picture for a qubit under amplitude damping and pure
//! dephasing:
//!
//! - relaxation:     `eps_1   = t / (2 T1)`
//! - pure dephasing: `eps_phi = t / T_phi`, with `1/T_phi = 1/T2 - 1/(2 T1)`
//!
//! # References
//!
//! - Krantz et al. (2019), arXiv:1904.06560, §II.C: T1, T2 and T_phi
//!   for superconducting qubits.

use super::types::DecoherenceFloor;

/// Nanoseconds per microsecond.
pub const NS_PER_US: f64 = 1000.0;

/// Compute the decoherence floor for a gate of `gate_time_ns`.
///
/// `t1_us` and `t2_us` are converted to nanoseconds before any ratio is
/// taken. The dephasing term is clamped at zero so that `T2 > 2 T1` (which
/// validation reports separately) can never yield negative infidelity.
///
/// Inputs are expected to be positive; see
/// [`crate::validation::validate_hardware_params`].
pub fn compute_decoherence_floor(gate_time_ns: f64, t1_us: f64, t2_us: f64) -> DecoherenceFloor {
    let t1_ns = t1_us * NS_PER_US;
    let t2_ns = t2_us * NS_PER_US;

    let t1_contribution = gate_time_ns / (2.0 * t1_ns);
    let t2_contribution = (gate_time_ns / t2_ns - gate_time_ns / (2.0 * t1_ns)).max(0.0);

    DecoherenceFloor {
        t1_contribution,
        t2_contribution,
        total: t1_contribution + t2_contribution,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rel_close(a: f64, b: f64, rel: f64) -> bool {
        (a - b).abs() <= rel * b.abs().max(f64::MIN_POSITIVE)
    }

    // =========================================================================
    // Reference values
    // =========================================================================

    #[test]
    fn test_reference_device() {
        let floor = compute_decoherence_floor(20.0, 37.0, 9.6);
        assert!(rel_close(floor.t1_contribution, 20.0 / 74_000.0, 1e-12));
        assert!(rel_close(
            floor.t2_contribution,
            20.0 / 9600.0 - 20.0 / 74_000.0,
            1e-12
        ));
        assert!((floor.t1_contribution - 2.703e-4).abs() < 1e-7);
        assert!((floor.t2_contribution - 1.813e-3).abs() < 1e-6);
        assert!((floor.total - 2.083e-3).abs() < 1e-6);
    }

    #[test]
    fn test_total_is_sum() {
        let floor = compute_decoherence_floor(35.0, 80.0, 60.0);
        assert_eq!(floor.total, floor.t1_contribution + floor.t2_contribution);
    }

    #[test]
    fn test_units_are_converted() {
        // 1 us = 1000 ns: a 1000 ns gate on T1 = 1 us gives t/(2T1) = 0.5
        let floor = compute_decoherence_floor(1000.0, 1.0, 2.0);
        assert!(rel_close(floor.t1_contribution, 0.5, 1e-12));
    }

    // =========================================================================
    // Dephasing clamp
    // =========================================================================

    #[test]
    fn test_t2_exactly_2t1_has_no_dephasing() {
        for t1 in [0.3, 1.0, 37.0, 50.0, 123.456] {
            let floor = compute_decoherence_floor(20.0, t1, 2.0 * t1);
            assert_eq!(floor.t2_contribution, 0.0, "t1 = {t1}");
        }
    }

    #[test]
    fn test_t2_above_2t1_is_clamped() {
        let floor = compute_decoherence_floor(20.0, 50.0, 150.0);
        assert_eq!(floor.t2_contribution, 0.0);
        assert_eq!(floor.total, floor.t1_contribution);
    }

    // =========================================================================
    // Monotonicity
    // =========================================================================

    proptest! {
        #[test]
        fn prop_contributions_non_negative(
            gate in 0.1f64..1000.0,
            t1 in 0.1f64..500.0,
            t2 in 0.1f64..1000.0,
        ) {
            let floor = compute_decoherence_floor(gate, t1, t2);
            prop_assert!(floor.t1_contribution >= 0.0);
            prop_assert!(floor.t2_contribution >= 0.0);
        }

        #[test]
        fn prop_non_decreasing_in_gate_time(
            gate in 0.1f64..500.0,
            extra in 0.0f64..500.0,
            t1 in 0.1f64..500.0,
            t2 in 0.1f64..1000.0,
        ) {
            let short = compute_decoherence_floor(gate, t1, t2).total;
            let long = compute_decoherence_floor(gate + extra, t1, t2).total;
            prop_assert!(long >= short * (1.0 - 1e-12));
        }

        #[test]
        fn prop_non_increasing_in_t1(
            gate in 0.1f64..500.0,
            t1 in 0.1f64..500.0,
            extra in 0.0f64..500.0,
            t2 in 0.1f64..1000.0,
        ) {
            let worse = compute_decoherence_floor(gate, t1, t2).total;
            let better = compute_decoherence_floor(gate, t1 + extra, t2).total;
            prop_assert!(better <= worse * (1.0 + 1e-12));
        }

        #[test]
        fn prop_non_increasing_in_t2(
            gate in 0.1f64..500.0,
            t1 in 0.1f64..500.0,
            t2 in 0.1f64..1000.0,
            extra in 0.0f64..500.0,
        ) {
            let worse = compute_decoherence_floor(gate, t1, t2).total;
            let better = compute_decoherence_floor(gate, t1, t2 + extra).total;
            prop_assert!(better <= worse * (1.0 + 1e-12));
        }
    }
}
