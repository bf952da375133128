// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Validated end-to-end analysis of one calibration query.

use serde::Serialize;
use tracing::{debug, warn};

use crate::budget::{
    compute_error_budget, estimate_robustness, ErrorBudget, HardwareParams, RobustnessEstimate,
};
use crate::error::{Result, ValidationWarning};
use crate::validation::{validate_budget, validate_hardware_params};

/// Budget, robustness and validation warnings for one parameter set.
#[derive(Debug, Clone, PartialEq)]
pub struct CalibrationAnalysis {
    pub budget: ErrorBudget,
    pub robustness: [RobustnessEstimate; 3],
    pub warnings: Vec<ValidationWarning>,
}

/// Serializable view with warnings rendered as messages.
#[derive(Debug, Serialize)]
pub struct AnalysisView<'a> {
    pub budget: &'a ErrorBudget,
    pub robustness: &'a [RobustnessEstimate; 3],
    pub warnings: Vec<String>,
}

impl CalibrationAnalysis {
    /// Warning messages, in the order they were raised.
    pub fn warning_messages(&self) -> Vec<String> {
        self.warnings.iter().map(ToString::to_string).collect()
    }

    /// JSON-friendly view of the analysis.
    pub fn view(&self) -> AnalysisView<'_> {
        AnalysisView {
            budget: &self.budget,
            robustness: &self.robustness,
            warnings: self.warning_messages(),
        }
    }
}

/// Validate `params`, then compute the error budget and robustness.
///
/// With `strict` set, `T2 > 2*T1` is refused; otherwise it is computed with
/// the dephasing clamp and reported as a warning. A budget whose numbers
/// overflow is refused with [`crate::error::ValidationError::NonFiniteResult`].
pub fn analyze(params: &HardwareParams, strict: bool) -> Result<CalibrationAnalysis> {
    let warnings = validate_hardware_params(params, strict)?;
    for warning in &warnings {
        warn!(
            anharmonicity_mhz = params.anharmonicity_mhz,
            t1_us = params.t1_us,
            t2_us = params.t2_us,
            gate_time_ns = params.gate_time_ns,
            "{}",
            warning
        );
    }

    let budget = compute_error_budget(params);
    validate_budget(&budget)?;
    let robustness = estimate_robustness(params);

    debug!(
        regime = %budget.regime,
        floor = budget.decoherence_floor.total,
        drag = budget.estimated_infidelity.drag,
        "Error budget computed"
    );

    Ok(CalibrationAnalysis {
        budget,
        robustness,
        warnings,
    })
}
