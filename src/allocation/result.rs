//! Allocation results with per-district rows and constraint verification.

use std::fmt::Display;

use super::error::{AllocationError, ConstraintViolation};
use crate::district::District;
use crate::Id;

/// One district's line in an allocation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AllocationRow {
    pub district: Id,
    pub demand: f64,
    pub min_required: f64,
    pub current: f64,
    pub optimized: f64,
}

impl AllocationRow {
    /// Change against the allocation currently in force.
    pub fn improvement(&self) -> f64 {
        self.optimized - self.current
    }

    /// Demand left unserved by the optimized allocation.
    pub fn shortfall(&self) -> f64 {
        (self.demand - self.optimized).max(0.0)
    }
}

/// Optimized allocation vector, one row per district in input order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Allocation {
    rows: Vec<AllocationRow>,
    total_supply: f64,
    water_level: Option<f64>,
    iterations: usize,
}

impl Allocation {
    /// Pairs `values` with the districts they were computed for.
    pub fn new(districts: &[District], values: Vec<f64>) -> Result<Self, AllocationError> {
        if districts.len() != values.len() {
            return Err(AllocationError::LengthMismatch {
                expected: districts.len(),
                actual: values.len(),
            });
        }

        let rows = districts
            .iter()
            .zip(values)
            .map(|(d, optimized)| AllocationRow {
                district: d.name.clone(),
                demand: d.demand,
                min_required: d.min_required,
                current: d.current_alloc,
                optimized,
            })
            .collect();

        Ok(Self {
            rows,
            total_supply: districts.iter().map(|d| d.supply).sum(),
            water_level: None,
            iterations: 0,
        })
    }

    pub fn with_water_level(mut self, level: f64) -> Self {
        self.water_level = Some(level);
        self
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn rows(&self) -> &[AllocationRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Looks a row up by district name.
    pub fn get(&self, district: &str) -> Option<&AllocationRow> {
        self.rows.iter().find(|r| r.district == district)
    }

    /// The allocation vector in input order.
    pub fn values(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.optimized).collect()
    }

    pub fn total(&self) -> f64 {
        self.rows.iter().map(|r| r.optimized).sum()
    }

    pub fn total_supply(&self) -> f64 {
        self.total_supply
    }

    /// Σ (demand − x)², the quantity the optimizer minimises.
    pub fn objective(&self) -> f64 {
        self.rows
            .iter()
            .map(|r| (r.demand - r.optimized).powi(2))
            .sum()
    }

    /// Σ unserved demand.
    pub fn unmet_demand(&self) -> f64 {
        self.rows.iter().map(AllocationRow::shortfall).sum()
    }

    /// Uniform cut below demand for districts above their minimum, when the
    /// solver reports one.
    pub fn water_level(&self) -> Option<f64> {
        self.water_level
    }

    /// Solver iterations spent producing this allocation.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Checks every bound within `tolerance`.
    ///
    /// Returns the first violation found, checking rows in order and the supply
    /// cap last.
    pub fn verify(&self, tolerance: f64) -> Result<(), ConstraintViolation> {
        for row in &self.rows {
            if row.optimized < row.min_required - tolerance {
                return Err(ConstraintViolation::BelowMinimum {
                    district: row.district.clone(),
                    value: row.optimized,
                    min_required: row.min_required,
                });
            }
            if row.optimized > row.demand + tolerance {
                return Err(ConstraintViolation::AboveDemand {
                    district: row.district.clone(),
                    value: row.optimized,
                    demand: row.demand,
                });
            }
        }

        let total = self.total();
        if total > self.total_supply + tolerance {
            return Err(ConstraintViolation::SupplyExceeded {
                total,
                supply: self.total_supply,
            });
        }

        Ok(())
    }
}

impl Display for Allocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{:<12} {:>10} {:>10} {:>10} {:>10}",
            "district", "demand", "current", "optimized", "change"
        )?;
        for row in &self.rows {
            writeln!(
                f,
                "{:<12} {:>10.1} {:>10.1} {:>10.1} {:>+10.1}",
                row.district,
                row.demand,
                row.current,
                row.optimized,
                row.improvement()
            )?;
        }
        write!(
            f,
            "total {:.1} of {:.1} available, unmet {:.1}",
            self.total(),
            self.total_supply,
            self.unmet_demand()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_districts() -> Vec<District> {
        vec![
            District::new("a", 100.0, 60.0, 20.0, 50.0),
            District::new("b", 80.0, 40.0, 30.0, 45.0),
        ]
    }

    #[test]
    fn rows_follow_input_order() {
        let alloc = Allocation::new(&two_districts(), vec![55.0, 45.0]).unwrap();
        assert_eq!(alloc.len(), 2);
        assert_eq!(alloc.rows()[0].district, "a");
        assert_eq!(alloc.rows()[1].district, "b");
        assert_eq!(alloc.values(), vec![55.0, 45.0]);
        assert_eq!(alloc.total(), 100.0);
        assert_eq!(alloc.total_supply(), 100.0);
    }

    #[test]
    fn length_mismatch_is_rejected() {
        let err = Allocation::new(&two_districts(), vec![1.0]);
        assert_eq!(
            err,
            Err(AllocationError::LengthMismatch {
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn derived_figures() {
        let alloc = Allocation::new(&two_districts(), vec![55.0, 45.0]).unwrap();
        assert_eq!(alloc.objective(), 45.0 * 45.0 + 35.0 * 35.0);
        assert_eq!(alloc.unmet_demand(), 80.0);
        let a = alloc.get("a").unwrap();
        assert_eq!(a.improvement(), 5.0);
        assert_eq!(alloc.get("b").unwrap().improvement(), 0.0);
        assert!(alloc.get("missing").is_none());
    }

    #[test]
    fn verify_accepts_feasible_vector() {
        let alloc = Allocation::new(&two_districts(), vec![55.0, 45.0]).unwrap();
        assert_eq!(alloc.verify(1e-9), Ok(()));
    }

    #[test]
    fn verify_reports_below_minimum() {
        let alloc = Allocation::new(&two_districts(), vec![10.0, 45.0]).unwrap();
        assert_eq!(
            alloc.verify(1e-9),
            Err(ConstraintViolation::BelowMinimum {
                district: "a".to_string(),
                value: 10.0,
                min_required: 20.0,
            })
        );
    }

    #[test]
    fn verify_reports_above_demand() {
        let alloc = Allocation::new(&two_districts(), vec![20.0, 81.0]).unwrap();
        assert!(matches!(
            alloc.verify(1e-9),
            Err(ConstraintViolation::AboveDemand { .. })
        ));
    }

    #[test]
    fn verify_reports_supply_exceeded() {
        let alloc = Allocation::new(&two_districts(), vec![70.0, 40.0]).unwrap();
        assert_eq!(
            alloc.verify(1e-9),
            Err(ConstraintViolation::SupplyExceeded {
                total: 110.0,
                supply: 100.0,
            })
        );
    }

    #[test]
    fn display_lists_every_district() {
        let alloc = Allocation::new(&two_districts(), vec![55.0, 45.0]).unwrap();
        let text = alloc.to_string();
        assert!(text.contains("optimized"));
        assert!(text.lines().count() == 4);
        assert!(text.contains("+5.0"));
    }
}
