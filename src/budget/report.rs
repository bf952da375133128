// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Plain-text rendering of budgets and robustness estimates.
//!
//! Output has a fixed section order and is fully determined by the value
//! being rendered, so it can be handed to downstream presentation layers
//! verbatim.

use std::fmt::{self, Write as _};

use super::types::{ErrorBudget, PulseMethod, RobustnessEstimate};

impl fmt::Display for ErrorBudget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hw = &self.hardware;
        let floor = &self.decoherence_floor;

        writeln!(f, "=== Single-Qubit Gate Error Budget ===")?;
        writeln!(f)?;
        writeln!(f, "Hardware:")?;
        writeln!(f, "  Anharmonicity:      {} MHz", hw.anharmonicity_mhz)?;
        writeln!(f, "  T1:                 {} us", hw.t1_us)?;
        writeln!(f, "  T2:                 {} us", hw.t2_us)?;
        writeln!(f, "  Gate time:          {} ns", hw.gate_time_ns)?;
        writeln!(f, "  T2 / gate time:     {:.1}", self.t2_over_t_ratio)?;
        writeln!(f)?;
        writeln!(f, "Decoherence floor:")?;
        writeln!(f, "  T1 contribution:    {:.3e}", floor.t1_contribution)?;
        writeln!(f, "  T2 contribution:    {:.3e}", floor.t2_contribution)?;
        writeln!(f, "  Total:              {:.3e}", floor.total)?;
        writeln!(f)?;
        writeln!(f, "Estimated infidelity:")?;
        for method in PulseMethod::ALL {
            writeln!(
                f,
                "  {:<20}{:.3e}",
                format!("{}:", method.label()),
                self.estimated_infidelity.get(method)
            )?;
        }
        writeln!(f)?;
        writeln!(f, "DRAG beta:            {:.4} ns", self.drag_beta)?;
        writeln!(f, "Regime:               {}", self.regime)?;
        writeln!(f)?;
        writeln!(f, "Recommendation:")?;
        write!(f, "  {}", self.recommendation)
    }
}

impl fmt::Display for RobustnessEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<10}detuning {:.4} ({}), amplitude {:.4} ({})",
            self.method.label(),
            self.detuning_min_fidelity,
            robust_label(self.robust_to_detuning),
            self.amplitude_min_fidelity,
            robust_label(self.robust_to_amplitude),
        )
    }
}

fn robust_label(robust: bool) -> &'static str {
    if robust {
        "robust"
    } else {
        "not robust"
    }
}

/// Render an error budget as labeled text.
pub fn render_budget(budget: &ErrorBudget) -> String {
    budget.to_string()
}

/// Render robustness estimates, one method per line.
pub fn render_robustness(estimates: &[RobustnessEstimate; 3]) -> String {
    let mut out = String::from("=== Robustness (minimum fidelity) ===\n");
    for estimate in estimates {
        // Writing into a String cannot fail
        let _ = writeln!(out, "  {estimate}");
    }
    out
}
