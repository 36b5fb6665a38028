//! Feasibility of a district list before any solver runs.

use log::warn;

use super::error::AllocationError;
use crate::district::District;

/// Aggregate figures of a district list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Budget {
    /// Σ supply, the cap on the allocation total.
    pub total_supply: f64,
    /// Σ min_required.
    pub total_minimum: f64,
    /// Σ demand.
    pub total_demand: f64,
}

impl Budget {
    /// True when every district can be served in full.
    pub fn covers_demand(&self) -> bool {
        self.total_demand <= self.total_supply
    }

    /// Demand that cannot be met from the pool (zero if supply suffices).
    pub fn deficit(&self) -> f64 {
        (self.total_demand - self.total_supply).max(0.0)
    }
}

/// Checks that the feasible region `{min ≤ x ≤ demand, Σx ≤ Σsupply}` is non-empty.
///
/// # Errors
///
/// - [`AllocationError::NoDistricts`] for an empty list
/// - [`AllocationError::InvalidDistrict`] for a malformed record
/// - [`AllocationError::MinimumExceedsDemand`] when a box is empty
/// - [`AllocationError::InsufficientSupply`] when the minimums alone exceed supply
pub fn check_feasibility(districts: &[District]) -> Result<Budget, AllocationError> {
    if districts.is_empty() {
        return Err(AllocationError::NoDistricts);
    }

    for district in districts {
        district.validate()?;
    }

    let budget = Budget {
        total_supply: districts.iter().map(|d| d.supply).sum(),
        total_minimum: districts.iter().map(|d| d.min_required).sum(),
        total_demand: districts.iter().map(|d| d.demand).sum(),
    };

    if budget.total_minimum > budget.total_supply {
        warn!(
            "rejecting allocation: minimums {} exceed supply {}",
            budget.total_minimum, budget.total_supply
        );
        return Err(AllocationError::InsufficientSupply {
            required: budget.total_minimum,
            supply: budget.total_supply,
        });
    }

    Ok(budget)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::district::{wasit_districts, DistrictError};

    #[test]
    fn empty_list_is_rejected() {
        assert_eq!(check_feasibility(&[]), Err(AllocationError::NoDistricts));
    }

    #[test]
    fn builtin_budget() {
        let budget = check_feasibility(&wasit_districts()).unwrap();
        assert_eq!(budget.total_supply, 15200.0);
        assert_eq!(budget.total_minimum, 9900.0);
        assert_eq!(budget.total_demand, 20000.0);
        assert!(!budget.covers_demand());
        assert_eq!(budget.deficit(), 4800.0);
    }

    #[test]
    fn minimums_above_supply_are_rejected() {
        let districts = vec![
            District::new("a", 1000.0, 300.0, 800.0, 500.0),
            District::new("b", 1000.0, 300.0, 800.0, 500.0),
        ];
        assert_eq!(
            check_feasibility(&districts),
            Err(AllocationError::InsufficientSupply {
                required: 1600.0,
                supply: 600.0,
            })
        );
    }

    #[test]
    fn minimums_equal_to_supply_are_feasible() {
        let districts = vec![
            District::new("a", 1000.0, 500.0, 500.0, 0.0),
            District::new("b", 1000.0, 300.0, 300.0, 0.0),
        ];
        let budget = check_feasibility(&districts).unwrap();
        assert_eq!(budget.total_minimum, budget.total_supply);
    }

    #[test]
    fn empty_box_is_rejected() {
        let districts = vec![District::new("a", 100.0, 5000.0, 200.0, 0.0)];
        assert!(matches!(
            check_feasibility(&districts),
            Err(AllocationError::MinimumExceedsDemand { .. })
        ));
    }

    #[test]
    fn malformed_record_is_rejected() {
        let districts = vec![District::new("a", 100.0, f64::INFINITY, 10.0, 0.0)];
        assert!(matches!(
            check_feasibility(&districts),
            Err(AllocationError::InvalidDistrict(DistrictError::InvalidField {
                field: "supply",
                ..
            }))
        ));
    }
}
