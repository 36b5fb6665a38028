//! District record and the built-in Wasit table.

use super::error::DistrictError;
use crate::Id;

/// One administrative area taking part in the allocation.
///
/// All volumes are in m³/day.
///
/// # Invariants
///
/// - every field is finite and non-negative
/// - `demand > 0`
/// - `min_required <= demand`
///
/// These are checked by [`District::validate`]; the fields stay public so the
/// record can be built literally or loaded from configuration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct District {
    /// Display name, also used as the district identifier.
    pub name: Id,
    /// Desired daily allocation.
    pub demand: f64,
    /// Contribution of this district to the shared supply pool.
    pub supply: f64,
    /// Guaranteed minimum allocation.
    pub min_required: f64,
    /// Allocation currently in force; only used to seed iterative solvers.
    pub current_alloc: f64,
}

impl District {
    pub fn new(
        name: impl Into<Id>,
        demand: f64,
        supply: f64,
        min_required: f64,
        current_alloc: f64,
    ) -> Self {
        Self {
            name: name.into(),
            demand,
            supply,
            min_required,
            current_alloc,
        }
    }

    /// Checks the record invariants.
    pub fn validate(&self) -> Result<(), DistrictError> {
        let fields = [
            ("demand", self.demand),
            ("supply", self.supply),
            ("min_required", self.min_required),
            ("current_alloc", self.current_alloc),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(DistrictError::InvalidField {
                    district: self.name.clone(),
                    field,
                    value,
                });
            }
        }

        if self.demand <= 0.0 {
            return Err(DistrictError::NonPositiveDemand {
                district: self.name.clone(),
            });
        }

        if self.min_required > self.demand {
            return Err(DistrictError::MinimumExceedsDemand {
                district: self.name.clone(),
                min_required: self.min_required,
                demand: self.demand,
            });
        }

        Ok(())
    }

    /// Shortfall of the current allocation against demand (zero if met).
    pub fn current_shortfall(&self) -> f64 {
        (self.demand - self.current_alloc).max(0.0)
    }
}

/// The five districts of Wasit governorate with their planning figures.
pub fn wasit_districts() -> Vec<District> {
    vec![
        District::new("الكوت", 5000.0, 3200.0, 2500.0, 3000.0),
        District::new("الحي", 4000.0, 3500.0, 2000.0, 3400.0),
        District::new("بدرة", 3000.0, 2500.0, 1500.0, 2400.0),
        District::new("النعمانية", 3800.0, 2900.0, 1800.0, 2700.0),
        District::new("الصويرة", 4200.0, 3100.0, 2100.0, 2900.0),
    ]
}
