// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Regime classification and recommendation text.
//!
//! Classification is an ordered list of rules evaluated top to bottom; the
//! first rule whose predicate holds decides the regime. The last rule always
//! matches.

use super::types::Regime;

/// Below this gate time first-order DRAG is not considered valid.
pub const SHORT_GATE_THRESHOLD_NS: f64 = 15.0;

/// DRAG is sufficient when its coherent error is below this fraction of the
/// decoherence floor.
pub const DRAG_FLOOR_FRACTION: f64 = 0.5;

/// Quantities the classification rules look at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegimeInputs {
    pub gate_time_ns: f64,
    pub drag_coherent_error: f64,
    pub decoherence_floor: f64,
}

/// One classification rule.
#[derive(Debug, Clone, Copy)]
pub struct RegimeRule {
    pub regime: Regime,
    pub description: &'static str,
    pub applies: fn(&RegimeInputs) -> bool,
}

/// Classification rules in priority order.
pub static REGIME_RULES: [RegimeRule; 3] = [
    RegimeRule {
        regime: Regime::ShortGate,
        description: "gate_time_ns < 15",
        applies: is_short_gate,
    },
    RegimeRule {
        regime: Regime::DragSufficient,
        description: "drag_coherent_error < 0.5 * decoherence_floor",
        applies: drag_below_floor,
    },
    RegimeRule {
        regime: Regime::GrapeNeeded,
        description: "otherwise",
        applies: always,
    },
];

fn is_short_gate(i: &RegimeInputs) -> bool {
    i.gate_time_ns < SHORT_GATE_THRESHOLD_NS
}

fn drag_below_floor(i: &RegimeInputs) -> bool {
    i.drag_coherent_error < DRAG_FLOOR_FRACTION * i.decoherence_floor
}

fn always(_: &RegimeInputs) -> bool {
    true
}

/// The first rule that applies to `inputs`.
pub fn matching_rule(inputs: &RegimeInputs) -> &'static RegimeRule {
    REGIME_RULES
        .iter()
        .find(|rule| (rule.applies)(inputs))
        .unwrap_or(&REGIME_RULES[REGIME_RULES.len() - 1])
}

/// Classify a gate calibration. First matching rule wins.
pub fn classify_regime(inputs: &RegimeInputs) -> Regime {
    matching_rule(inputs).regime
}

/// Values substituted into the recommendation text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecommendationContext {
    pub gate_time_ns: f64,
    pub t2_us: f64,
    pub decoherence_floor: f64,
    pub drag_coherent_error: f64,
    pub drag_total: f64,
    pub grape_total: f64,
}

impl RecommendationContext {
    /// DRAG total infidelity relative to the GRAPE limit.
    pub fn drag_to_grape_ratio(&self) -> f64 {
        self.drag_total / self.grape_total
    }
}

/// Explanatory text for a regime. Deterministic in its inputs.
pub fn recommendation(regime: Regime, ctx: &RecommendationContext) -> String {
    match regime {
        Regime::ShortGate => format!(
            "Gate time {:.1} ns is below the {:.0} ns validity limit of first-order DRAG; \
             the perturbative correction breaks down at this duration. Use GRAPE, which can \
             approach the decoherence floor of {:.3e}.",
            ctx.gate_time_ns, SHORT_GATE_THRESHOLD_NS, ctx.decoherence_floor,
        ),
        Regime::DragSufficient => format!(
            "DRAG is sufficient: its coherent error ({:.3e}) is below half the decoherence \
             floor ({:.3e}). GRAPE would lower total infidelity by only a factor of {:.2}. \
             Performance is limited by T2 = {} us; improving coherence pays off more than \
             further pulse optimization.",
            ctx.drag_coherent_error,
            ctx.decoherence_floor,
            ctx.drag_to_grape_ratio(),
            ctx.t2_us,
        ),
        Regime::GrapeNeeded => format!(
            "GRAPE recommended: DRAG coherent error ({:.3e}) is at least half the decoherence \
             floor ({:.3e}). DRAG total infidelity is {:.2}x the GRAPE limit, so numerical \
             optimization recovers a significant share of the budget.",
            ctx.drag_coherent_error,
            ctx.decoherence_floor,
            ctx.drag_to_grape_ratio(),
        ),
    }
}
