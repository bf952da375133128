// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Error budget assembly.

use super::coherent::{drag_beta, drag_coherent_error, gaussian_coherent_error};
use super::floor::{compute_decoherence_floor, NS_PER_US};
use super::regime::{classify_regime, recommendation, RecommendationContext, RegimeInputs};
use super::types::{ErrorBudget, HardwareParams, InfidelityEstimates};

/// Assemble the error budget for one gate calibration query.
///
/// GRAPE is modeled as removing all coherent error, so its estimate is the
/// decoherence floor itself; Gaussian and DRAG add their coherent error on
/// top of the floor.
///
/// Expects validated parameters; see
/// [`crate::validation::validate_hardware_params`].
pub fn compute_error_budget(params: &HardwareParams) -> ErrorBudget {
    let floor = compute_decoherence_floor(params.gate_time_ns, params.t1_us, params.t2_us);

    let drag_coherent = drag_coherent_error(params.gate_time_ns, params.anharmonicity_mhz);
    let gaussian_coherent = gaussian_coherent_error(params.gate_time_ns, params.anharmonicity_mhz);

    let estimated_infidelity = InfidelityEstimates {
        gaussian: gaussian_coherent + floor.total,
        drag: drag_coherent + floor.total,
        grape: floor.total,
    };

    let regime = classify_regime(&RegimeInputs {
        gate_time_ns: params.gate_time_ns,
        drag_coherent_error: drag_coherent,
        decoherence_floor: floor.total,
    });

    let recommendation = recommendation(
        regime,
        &RecommendationContext {
            gate_time_ns: params.gate_time_ns,
            t2_us: params.t2_us,
            decoherence_floor: floor.total,
            drag_coherent_error: drag_coherent,
            drag_total: estimated_infidelity.drag,
            grape_total: estimated_infidelity.grape,
        },
    );

    ErrorBudget {
        hardware: *params,
        decoherence_floor: floor,
        estimated_infidelity,
        regime,
        drag_beta: drag_beta(params.anharmonicity_mhz),
        t2_over_t_ratio: params.t2_us * NS_PER_US / params.gate_time_ns,
        recommendation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::budget::types::Regime;
    use crate::test_utils::{params, reference_params};
    use proptest::prelude::*;

    // =========================================================================
    // Concrete scenarios
    // =========================================================================

    #[test]
    fn test_reference_device_budget() {
        let budget = compute_error_budget(&reference_params());

        assert!((budget.decoherence_floor.total - 2.083e-3).abs() < 1e-6);
        let floor = budget.decoherence_floor.total;
        assert!((budget.estimated_infidelity.drag - (4.9e-4 + floor)).abs() < 1e-15);
        assert!((budget.estimated_infidelity.gaussian - (2.8e-2 + floor)).abs() < 1e-15);
        assert_eq!(budget.estimated_infidelity.grape, floor);
        assert_eq!(budget.regime, Regime::DragSufficient);
        assert!((budget.drag_beta - 0.3979).abs() < 1e-4);
        assert!((budget.t2_over_t_ratio - 480.0).abs() < 1e-9);
        assert_eq!(budget.hardware, reference_params());
    }

    #[test]
    fn test_short_gate_regardless_of_errors() {
        // Very long coherence: DRAG error dominates, still short_gate
        let budget = compute_error_budget(&params(-200.0, 500.0, 400.0, 10.0));
        assert_eq!(budget.regime, Regime::ShortGate);
        // Very short coherence: floor dominates, still short_gate
        let budget = compute_error_budget(&params(-200.0, 2.0, 1.0, 10.0));
        assert_eq!(budget.regime, Regime::ShortGate);
    }

    #[test]
    fn test_regime_boundary_at_15ns() {
        let below = compute_error_budget(&reference_params().with_gate_time(14.999));
        assert_eq!(below.regime, Regime::ShortGate);

        // At 15 ns DRAG error ~1.55e-3 exceeds half the floor (~7.8e-4)
        let at = compute_error_budget(&reference_params().with_gate_time(15.0));
        assert!(
            drag_coherent_error(15.0, -200.0) >= 0.5 * at.decoherence_floor.total
        );
        assert_eq!(at.regime, Regime::GrapeNeeded);
    }

    #[test]
    fn test_grape_needed_with_long_coherence() {
        // Floor tiny compared to DRAG coherent error
        let budget = compute_error_budget(&params(-200.0, 300.0, 300.0, 20.0));
        assert_eq!(budget.regime, Regime::GrapeNeeded);
        assert!(budget.recommendation.starts_with("GRAPE recommended"));
    }

    #[test]
    fn test_recommendation_regenerates_identically() {
        let a = compute_error_budget(&reference_params());
        let b = compute_error_budget(&reference_params());
        assert_eq!(a.recommendation, b.recommendation);
        assert!(a.recommendation.contains("T2 = 9.6 us"));
    }

    // =========================================================================
    // Properties
    // =========================================================================

    fn valid_params() -> impl Strategy<Value = HardwareParams> {
        (-500.0f64..-50.0, 1.0f64..300.0, 0.5f64..600.0, 5.0f64..200.0)
            .prop_map(|(alpha, t1, t2, gate)| params(alpha, t1, t2.min(2.0 * t1), gate))
    }

    proptest! {
        #[test]
        fn prop_deterministic(p in valid_params()) {
            prop_assert_eq!(compute_error_budget(&p), compute_error_budget(&p));
        }

        #[test]
        fn prop_grape_never_worse(p in valid_params()) {
            let est = compute_error_budget(&p).estimated_infidelity;
            prop_assert!(est.grape <= est.drag);
            prop_assert!(est.grape <= est.gaussian);
        }

        #[test]
        fn prop_estimates_at_least_floor(p in valid_params()) {
            let budget = compute_error_budget(&p);
            let floor = budget.decoherence_floor.total;
            prop_assert!(budget.estimated_infidelity.gaussian >= floor);
            prop_assert!(budget.estimated_infidelity.drag >= floor);
            prop_assert!(budget.estimated_infidelity.grape >= floor);
        }

        #[test]
        fn prop_beta_depends_only_on_anharmonicity(
            p in valid_params(),
            t1 in 1.0f64..300.0,
            t2 in 0.5f64..600.0,
            gate in 5.0f64..200.0,
        ) {
            let other = params(p.anharmonicity_mhz, t1, t2, gate);
            prop_assert_eq!(
                compute_error_budget(&p).drag_beta,
                compute_error_budget(&other).drag_beta
            );
        }

        #[test]
        fn prop_short_gates_always_short_gate(
            p in valid_params(),
            gate in 0.1f64..14.999,
        ) {
            let budget = compute_error_budget(&p.with_gate_time(gate));
            prop_assert_eq!(budget.regime, Regime::ShortGate);
        }
    }
}
