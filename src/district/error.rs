use thiserror::Error;

/// Errors raised when a district record is malformed.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DistrictError {
    #[error("District '{district}': {field} must be a finite, non-negative number (got {value})")]
    InvalidField {
        district: String,
        field: &'static str,
        value: f64,
    },

    #[error("District '{district}': demand must be positive")]
    NonPositiveDemand { district: String },

    #[error("District '{district}': minimum requirement {min_required} exceeds demand {demand}")]
    MinimumExceedsDemand {
        district: String,
        min_required: f64,
        demand: f64,
    },
}
