//! Warm-started projected-gradient allocator.
//!
//! Starts from the allocation currently in force and walks downhill:
//!
//! ```text
//! x ← P(x + 2·step·(demand − x))
//! ```
//!
//! where `P` is the projection onto the feasible set. The gradient of the
//! objective is 2-Lipschitz, so any `step` in `(0, 0.5]` converges; in the free
//! coordinates the error shrinks by a factor `1 − 2·step` per iteration.
//! Iteration stops once no coordinate moves by more than `tolerance`.

use log::{debug, trace};

use super::error::AllocationError;
use super::feasibility::check_feasibility;
use super::projection::project_onto_budget;
use super::result::Allocation;
use super::AllocationAlgorithm;
use crate::district::District;

/// Projected-gradient allocator seeded at `current_alloc`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedGradient {
    step: f64,
    tolerance: f64,
    max_iterations: usize,
}

impl ProjectedGradient {
    pub const DEFAULT_STEP: f64 = 0.25;
    pub const DEFAULT_TOLERANCE: f64 = 1e-9;
    pub const DEFAULT_MAX_ITERATIONS: usize = 10_000;

    /// # Arguments
    ///
    /// * `step` - gradient step, must lie in `(0, 0.5]`
    /// * `tolerance` - largest per-coordinate move accepted as converged
    /// * `max_iterations` - iteration budget before [`AllocationError::NotConverged`]
    pub fn new(step: f64, tolerance: f64, max_iterations: usize) -> Self {
        Self {
            step,
            tolerance,
            max_iterations,
        }
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    fn check_settings(&self) -> Result<(), AllocationError> {
        if !(self.step > 0.0 && self.step <= 0.5) {
            return Err(AllocationError::InvalidSettings(format!(
                "step must lie in (0, 0.5], got {}",
                self.step
            )));
        }
        if self.tolerance.is_nan() || self.tolerance <= 0.0 {
            return Err(AllocationError::InvalidSettings(format!(
                "tolerance must be positive, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }
}

impl Default for ProjectedGradient {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_STEP,
            Self::DEFAULT_TOLERANCE,
            Self::DEFAULT_MAX_ITERATIONS,
        )
    }
}

impl AllocationAlgorithm for ProjectedGradient {
    fn name(&self) -> &str {
        "projected-gradient"
    }

    fn allocate(&self, districts: &[District]) -> Result<Allocation, AllocationError> {
        self.check_settings()?;
        let budget = check_feasibility(districts)?;

        let demand: Vec<f64> = districts.iter().map(|d| d.demand).collect();
        let minimum: Vec<f64> = districts.iter().map(|d| d.min_required).collect();
        let seed: Vec<f64> = districts.iter().map(|d| d.current_alloc).collect();
        let cap = budget.total_supply;

        // Keep projection error well below the convergence threshold so it does
        // not masquerade as movement.
        let inner_tolerance = self.tolerance * 1e-3;

        let mut x = project_onto_budget(&seed, &minimum, &demand, cap, inner_tolerance)?.point;
        debug!(
            "projected-gradient on {} districts from seed total {}",
            districts.len(),
            x.iter().sum::<f64>()
        );

        let mut last_step = f64::INFINITY;
        for iteration in 1..=self.max_iterations {
            let moved: Vec<f64> = x
                .iter()
                .zip(&demand)
                .map(|(xi, di)| xi + 2.0 * self.step * (di - xi))
                .collect();
            let next =
                project_onto_budget(&moved, &minimum, &demand, cap, inner_tolerance)?.point;

            last_step = next
                .iter()
                .zip(&x)
                .map(|(a, b)| (a - b).abs())
                .fold(0.0_f64, f64::max);
            x = next;
            trace!("iteration {iteration}: max move {last_step:e}");

            if last_step <= self.tolerance {
                debug!("projected-gradient converged after {iteration} iterations");
                return Ok(Allocation::new(districts, x)?.with_iterations(iteration));
            }
        }

        Err(AllocationError::NotConverged {
            iterations: self.max_iterations,
            last_step,
        })
    }
}
