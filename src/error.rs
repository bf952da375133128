// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Error types for the calibration service.

use std::fmt;

use axum::http::StatusCode;

/// Result type alias for calibration operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Calibration service error types.
#[derive(Debug)]
pub enum Error {
    /// Configuration error
    Config(String),
    /// Validation error
    Validation(ValidationError),
    /// Saved configuration not found
    NotFound(String),
    /// Server error
    Server(String),
    /// IO error
    Io(std::io::Error),
    /// Serialization error
    Serialization(String),
}

impl Error {
    /// HTTP status for REST responses.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Config(_) | Error::Server(_) | Error::Io(_) | Error::Serialization(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            Error::Config(_) => "CONFIG_ERROR",
            Error::Validation(_) => "VALIDATION_ERROR",
            Error::NotFound(_) => "NOT_FOUND",
            Error::Server(_) => "SERVER_ERROR",
            Error::Io(_) => "IO_ERROR",
            Error::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Validation(e) => write!(f, "Validation error: {}", e),
            Error::NotFound(name) => write!(f, "Configuration not found: {}", name),
            Error::Server(msg) => write!(f, "Server error: {}", msg),
            Error::Io(e) => write!(f, "IO error: {}", e),
            Error::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Validation(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<ValidationError> for Error {
    fn from(e: ValidationError) -> Self {
        Error::Validation(e)
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(e: serde_yaml::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

/// Validation errors. A parameter set that fails any of these produces no
/// result at all.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// `gate_time_ns`, `t1_us` or `t2_us` is zero or negative
    NonPositiveParameter { field: String, value: f64 },
    /// A parameter is NaN or infinite
    NonFiniteParameter { field: String },
    /// Parameters are finite but a derived quantity overflows
    NonFiniteResult { field: String },
    /// Anharmonicity of exactly zero
    ZeroAnharmonicity,
    /// `T2 > 2*T1` and degraded semantics were not accepted
    UnphysicalDephasing { t1_us: f64, t2_us: f64 },
    /// Saved configuration name is empty
    EmptyName,
}

impl ValidationError {
    /// Name of the offending field, if the error concerns a single field.
    pub fn field(&self) -> Option<&str> {
        match self {
            ValidationError::NonPositiveParameter { field, .. }
            | ValidationError::NonFiniteParameter { field }
            | ValidationError::NonFiniteResult { field } => Some(field),
            ValidationError::ZeroAnharmonicity => Some("anharmonicity_mhz"),
            ValidationError::UnphysicalDephasing { .. } => Some("t2_us"),
            ValidationError::EmptyName => None,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NonPositiveParameter { field, value } => {
                write!(f, "Field '{}': must be positive, got {}", field, value)
            }
            ValidationError::NonFiniteParameter { field } => {
                write!(f, "Field '{}': must be finite", field)
            }
            ValidationError::NonFiniteResult { field } => {
                write!(f, "Result '{}' is not finite for these parameters", field)
            }
            ValidationError::ZeroAnharmonicity => {
                write!(f, "Field 'anharmonicity_mhz': must be non-zero")
            }
            ValidationError::UnphysicalDephasing { t1_us, t2_us } => {
                write!(
                    f,
                    "Physics constraint violated: T2={} us > 2*T1={} us",
                    t2_us,
                    2.0 * t1_us
                )
            }
            ValidationError::EmptyName => write!(f, "Configuration name cannot be empty"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Non-fatal findings reported alongside a completed computation.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationWarning {
    /// `T2 > 2*T1`; the dephasing contribution is clamped to zero.
    UnphysicalDephasing { t1_us: f64, t2_us: f64 },
    /// Positive anharmonicity, where transmons are negative.
    UnusualAnharmonicitySign { anharmonicity_mhz: f64 },
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationWarning::UnphysicalDephasing { t1_us, t2_us } => write!(
                f,
                "T2={} us exceeds the physical bound 2*T1={} us; \
                 pure-dephasing contribution clamped to zero",
                t2_us,
                2.0 * t1_us
            ),
            ValidationWarning::UnusualAnharmonicitySign { anharmonicity_mhz } => write!(
                f,
                "Anharmonicity {} MHz is positive but transmons have negative \
                 anharmonicity; did you mean {} MHz?",
                anharmonicity_mhz, -anharmonicity_mhz
            ),
        }
    }
}
