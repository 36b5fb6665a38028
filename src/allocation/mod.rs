//! District water allocation.
//!
//! Given districts with demand `d`, minimum `m` and supply `s`, find `x` that
//! minimises `Σ (d_i − x_i)²` subject to
//!
//! - `m_i ≤ x_i ≤ d_i` for every district,
//! - `Σ x_i ≤ Σ s_i`.
//!
//! The problem is a strictly convex quadratic program, so the optimum is unique
//! whenever the feasible region is non-empty. An empty region (minimums above
//! supply, or a minimum above its own demand) is reported as an
//! [`AllocationError`] before any solver runs.
//!
//! # Module Structure
//!
//! - [`feasibility`] - budget figures and the feasibility check
//! - [`projection`] - KKT projection onto the box ∩ budget set
//! - [`water_filling`] - exact solver, the projection of the demand vector
//! - [`gradient`] - projected-gradient solver warm-started at `current_alloc`
//! - [`result`] - the [`Allocation`] table and constraint verification

mod error;
pub mod feasibility;
pub mod gradient;
pub mod projection;
pub mod result;
pub mod water_filling;


pub use error::{AllocationError, ConstraintViolation};
pub use feasibility::{check_feasibility, Budget};
pub use gradient::ProjectedGradient;
pub use projection::{project_onto_budget, Projection};
pub use result::{Allocation, AllocationRow};
pub use water_filling::WaterFilling;

use crate::district::District;

/// Algorithm computing an allocation for a list of districts.
pub trait AllocationAlgorithm {
    /// Short identifier used in logs and reports.
    fn name(&self) -> &str;

    /// Allocates supply across `districts`, returning one row per district in
    /// input order.
    fn allocate(&self, districts: &[District]) -> Result<Allocation, AllocationError>;
}

/// Optimal allocation vector for `districts` using the exact solver.
///
/// ```
/// use wasit_water::allocation::optimize_allocation;
/// use wasit_water::District;
///
/// let districts = [District::new("الكوت", 5000.0, 3200.0, 2500.0, 3000.0)];
/// let x = optimize_allocation(&districts).unwrap();
/// assert!((x[0] - 3200.0).abs() < 1e-6);
/// ```
pub fn optimize_allocation(districts: &[District]) -> Result<Vec<f64>, AllocationError> {
    WaterFilling::default()
        .allocate(districts)
        .map(|allocation| allocation.values())
}
