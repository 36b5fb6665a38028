//! Euclidean projection onto a box intersected with a budget half-space.
//!
//! The feasible set of the allocation problem is
//!
//! ```text
//! C = { x : lower ≤ x ≤ upper, Σx ≤ cap }
//! ```
//!
//! From the KKT conditions the projection of a point `t` onto `C` has the form
//!
//! ```text
//! x_i(λ) = clamp(t_i − λ, lower_i, upper_i),   λ ≥ 0
//! ```
//!
//! where `λ = 0` if `Σ clamp(t_i, lower_i, upper_i) ≤ cap`, and otherwise `λ` is
//! the root of the non-increasing, piecewise-linear `g(λ) = Σ x_i(λ) − cap`.
//! The root is bracketed in `[0, max(t_i − lower_i)]` and located by bisection.
//!
//! # Tolerance
//!
//! Bisection stops once the bracket is narrower than `tolerance` (in the units of
//! `t`, m³/day for allocations) or after [`MAX_BISECTIONS`] halvings. The point
//! is evaluated at the upper end of the final bracket, where `g ≤ 0`, so the
//! budget constraint holds up to rounding and each coordinate lies within
//! `tolerance` of the exact projection.

use log::trace;

use super::error::AllocationError;

/// Upper bound on bisection steps; enough to reach f64 resolution for any
/// bracket below 1e15.
pub const MAX_BISECTIONS: usize = 200;

/// Result of [`project_onto_budget`].
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    /// The projected point.
    pub point: Vec<f64>,
    /// The budget multiplier λ (zero when the budget is slack).
    pub multiplier: f64,
    /// Bisection steps taken.
    pub iterations: usize,
}

#[inline]
fn clamp(value: f64, lower: f64, upper: f64) -> f64 {
    value.max(lower).min(upper)
}

fn shifted(target: &[f64], lower: &[f64], upper: &[f64], lambda: f64) -> Vec<f64> {
    target
        .iter()
        .zip(lower.iter().zip(upper))
        .map(|(&t, (&l, &u))| clamp(t - lambda, l, u))
        .collect()
}

fn shifted_sum(target: &[f64], lower: &[f64], upper: &[f64], lambda: f64) -> f64 {
    target
        .iter()
        .zip(lower.iter().zip(upper))
        .map(|(&t, (&l, &u))| clamp(t - lambda, l, u))
        .sum()
}

/// Projects `target` onto `{lower ≤ x ≤ upper, Σx ≤ cap}`.
///
/// # Errors
///
/// - [`AllocationError::LengthMismatch`] if the slices differ in length
/// - [`AllocationError::NonFiniteInput`] if any input is NaN or infinite
/// - [`AllocationError::InvalidSettings`] if some `lower_i > upper_i` or the
///   tolerance is not positive
/// - [`AllocationError::InsufficientSupply`] if `Σ lower > cap` (empty set)
pub fn project_onto_budget(
    target: &[f64],
    lower: &[f64],
    upper: &[f64],
    cap: f64,
    tolerance: f64,
) -> Result<Projection, AllocationError> {
    let n = target.len();
    for other in [lower.len(), upper.len()] {
        if other != n {
            return Err(AllocationError::LengthMismatch {
                expected: n,
                actual: other,
            });
        }
    }

    let all_finite = target
        .iter()
        .chain(lower)
        .chain(upper)
        .chain(std::iter::once(&cap))
        .all(|v| v.is_finite());
    if !all_finite {
        return Err(AllocationError::NonFiniteInput);
    }

    if tolerance.is_nan() || tolerance <= 0.0 {
        return Err(AllocationError::InvalidSettings(format!(
            "projection tolerance must be positive, got {tolerance}"
        )));
    }

    if lower.iter().zip(upper).any(|(l, u)| l > u) {
        return Err(AllocationError::InvalidSettings(
            "lower bound above upper bound".to_string(),
        ));
    }

    let floor: f64 = lower.iter().sum();
    if floor > cap {
        return Err(AllocationError::InsufficientSupply {
            required: floor,
            supply: cap,
        });
    }

    if shifted_sum(target, lower, upper, 0.0) <= cap {
        return Ok(Projection {
            point: shifted(target, lower, upper, 0.0),
            multiplier: 0.0,
            iterations: 0,
        });
    }

    // At `hi` every coordinate sits on its lower bound, so g(hi) = Σlower − cap ≤ 0.
    let mut lo = 0.0_f64;
    let mut hi = target
        .iter()
        .zip(lower)
        .map(|(t, l)| t - l)
        .fold(0.0_f64, f64::max);

    let mut iterations = 0;
    while hi - lo > tolerance && iterations < MAX_BISECTIONS {
        let mid = lo + 0.5 * (hi - lo);
        if mid <= lo || mid >= hi {
            break;
        }
        if shifted_sum(target, lower, upper, mid) > cap {
            lo = mid;
        } else {
            hi = mid;
        }
        iterations += 1;
    }

    trace!("projection converged: λ ∈ [{lo}, {hi}] after {iterations} bisections");

    Ok(Projection {
        point: shifted(target, lower, upper, hi),
        multiplier: hi,
        iterations,
    })
}
