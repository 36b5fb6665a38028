use thiserror::Error;

use crate::district::DistrictError;

/// Errors that prevent an allocation from being produced.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AllocationError {
    #[error("Cannot allocate: district list is empty")]
    NoDistricts,

    #[error("Invalid district: {0}")]
    InvalidDistrict(DistrictError),

    #[error("District '{district}': minimum requirement {min_required} exceeds demand {demand}")]
    MinimumExceedsDemand {
        district: String,
        min_required: f64,
        demand: f64,
    },

    #[error("Minimum requirements total {required} but only {supply} is available")]
    InsufficientSupply { required: f64, supply: f64 },

    #[error("Expected {expected} values, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Projection input contains a non-finite value")]
    NonFiniteInput,

    #[error("Invalid solver setting: {0}")]
    InvalidSettings(String),

    #[error("Solver did not converge after {iterations} iterations (last step {last_step:e})")]
    NotConverged { iterations: usize, last_step: f64 },
}

impl From<DistrictError> for AllocationError {
    fn from(err: DistrictError) -> Self {
        match err {
            DistrictError::MinimumExceedsDemand {
                district,
                min_required,
                demand,
            } => AllocationError::MinimumExceedsDemand {
                district,
                min_required,
                demand,
            },
            other => AllocationError::InvalidDistrict(other),
        }
    }
}

/// A bound broken by an allocation vector.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConstraintViolation {
    #[error("District '{district}' receives {value}, below its minimum {min_required}")]
    BelowMinimum {
        district: String,
        value: f64,
        min_required: f64,
    },

    #[error("District '{district}' receives {value}, above its demand {demand}")]
    AboveDemand {
        district: String,
        value: f64,
        demand: f64,
    },

    #[error("Allocations total {total}, exceeding supply {supply}")]
    SupplyExceeded { total: f64, supply: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_districts_display() {
        assert_eq!(
            AllocationError::NoDistricts.to_string(),
            "Cannot allocate: district list is empty"
        );
    }

    #[test]
    fn insufficient_supply_display() {
        let e = AllocationError::InsufficientSupply {
            required: 12000.0,
            supply: 10000.0,
        };
        assert_eq!(
            e.to_string(),
            "Minimum requirements total 12000 but only 10000 is available"
        );
    }

    #[test]
    fn district_minimum_error_is_lifted() {
        let err: AllocationError = DistrictError::MinimumExceedsDemand {
            district: "الحي".to_string(),
            min_required: 10.0,
            demand: 5.0,
        }
        .into();
        assert!(matches!(err, AllocationError::MinimumExceedsDemand { .. }));
    }

    #[test]
    fn other_district_errors_are_wrapped() {
        let err: AllocationError = DistrictError::NonPositiveDemand {
            district: "بدرة".to_string(),
        }
        .into();
        assert!(matches!(err, AllocationError::InvalidDistrict(_)));
        assert!(err.to_string().starts_with("Invalid district:"));
    }

    #[test]
    fn supply_exceeded_display() {
        let v = ConstraintViolation::SupplyExceeded {
            total: 101.0,
            supply: 100.0,
        };
        assert_eq!(v.to_string(), "Allocations total 101, exceeding supply 100");
    }
}
