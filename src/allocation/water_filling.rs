//! Exact allocation by water-filling.
//!
//! The objective `Σ (demand_i − x_i)²` is the squared distance from `demand`, so
//! the optimum is the projection of the demand vector onto the feasible set. Every
//! district loses the same amount `λ` below its demand unless its minimum stops
//! it first; `λ` is the water level reported on the result.

use log::debug;

use super::error::AllocationError;
use super::feasibility::check_feasibility;
use super::projection::project_onto_budget;
use super::result::Allocation;
use super::AllocationAlgorithm;
use crate::district::District;

/// Default bisection tolerance on the water level, in m³/day.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Water-filling allocator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaterFilling {
    tolerance: f64,
}

impl WaterFilling {
    /// Creates an allocator that resolves the water level to within `tolerance`.
    pub fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }
}

impl Default for WaterFilling {
    fn default() -> Self {
        Self::new(DEFAULT_TOLERANCE)
    }
}

impl AllocationAlgorithm for WaterFilling {
    fn name(&self) -> &str {
        "water-filling"
    }

    fn allocate(&self, districts: &[District]) -> Result<Allocation, AllocationError> {
        let budget = check_feasibility(districts)?;
        debug!(
            "water-filling {} districts: demand {}, supply {}, minimum {}",
            districts.len(),
            budget.total_demand,
            budget.total_supply,
            budget.total_minimum
        );

        let demand: Vec<f64> = districts.iter().map(|d| d.demand).collect();
        let minimum: Vec<f64> = districts.iter().map(|d| d.min_required).collect();

        let projection = project_onto_budget(
            &demand,
            &minimum,
            &demand,
            budget.total_supply,
            self.tolerance,
        )?;

        debug!(
            "water level {} after {} bisections",
            projection.multiplier, projection.iterations
        );

        Ok(Allocation::new(districts, projection.point)?
            .with_water_level(projection.multiplier)
            .with_iterations(projection.iterations))
    }
}
