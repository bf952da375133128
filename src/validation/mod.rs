// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Input validation for error budget queries.

use crate::budget::{ErrorBudget, HardwareParams};
use crate::error::{Result, ValidationError, ValidationWarning};

/// Validate hardware parameters before any computation.
///
/// Checks run in a fixed order and the first failure is returned:
///
/// 1. all fields finite
/// 2. `gate_time_ns`, `t1_us`, `t2_us` positive
/// 3. `anharmonicity_mhz` non-zero
///
/// Positive anharmonicity is reported as a warning. `T2 > 2*T1` is an error
/// when `strict` is set and a warning otherwise; `T2 == 2*T1` is valid.
///
/// On success returns the (possibly empty) list of warnings.
pub fn validate_hardware_params(
    params: &HardwareParams,
    strict: bool,
) -> Result<Vec<ValidationWarning>> {
    let fields = [
        ("anharmonicity_mhz", params.anharmonicity_mhz),
        ("t1_us", params.t1_us),
        ("t2_us", params.t2_us),
        ("gate_time_ns", params.gate_time_ns),
    ];

    for (field, value) in fields {
        if !value.is_finite() {
            return Err(ValidationError::NonFiniteParameter {
                field: field.into(),
            }
            .into());
        }
    }

    for (field, value) in [
        ("gate_time_ns", params.gate_time_ns),
        ("t1_us", params.t1_us),
        ("t2_us", params.t2_us),
    ] {
        if value <= 0.0 {
            return Err(ValidationError::NonPositiveParameter {
                field: field.into(),
                value,
            }
            .into());
        }
    }

    if params.anharmonicity_mhz == 0.0 {
        return Err(ValidationError::ZeroAnharmonicity.into());
    }

    let mut warnings = Vec::new();

    if params.anharmonicity_mhz > 0.0 {
        warnings.push(ValidationWarning::UnusualAnharmonicitySign {
            anharmonicity_mhz: params.anharmonicity_mhz,
        });
    }

    // Physics: T2 <= 2*T1
    if params.t2_us > 2.0 * params.t1_us {
        if strict {
            return Err(ValidationError::UnphysicalDephasing {
                t1_us: params.t1_us,
                t2_us: params.t2_us,
            }
            .into());
        }
        warnings.push(ValidationWarning::UnphysicalDephasing {
            t1_us: params.t1_us,
            t2_us: params.t2_us,
        });
    }

    Ok(warnings)
}

/// Validate the numeric fields of an assembled budget.
///
/// Finite, in-range parameters can still overflow the power laws (e.g. an
/// anharmonicity of `-1e-160` MHz). Such a budget is refused rather than
/// reported with infinities.
pub fn validate_budget(budget: &ErrorBudget) -> Result<()> {
    let fields = [
        ("decoherence_floor.t1_contribution", budget.decoherence_floor.t1_contribution),
        ("decoherence_floor.t2_contribution", budget.decoherence_floor.t2_contribution),
        ("decoherence_floor.total", budget.decoherence_floor.total),
        ("estimated_infidelity.gaussian", budget.estimated_infidelity.gaussian),
        ("estimated_infidelity.drag", budget.estimated_infidelity.drag),
        ("estimated_infidelity.grape", budget.estimated_infidelity.grape),
        ("drag_beta", budget.drag_beta),
        ("t2_over_t_ratio", budget.t2_over_t_ratio),
    ];

    match fields.iter().find(|(_, value)| !value.is_finite()) {
        Some((field, _)) => Err(ValidationError::NonFiniteResult {
            field: (*field).into(),
        }
        .into()),
        None => Ok(()),
    }
}

/// Validate a saved configuration name.
pub fn validate_config_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName.into());
    }
    Ok(())
}
