//! Single entry point over a [`DashboardConfig`].
//!
//! The advisor owns the configuration and the solver built from it, and exposes
//! each dashboard operation as one call.

use log::debug;

use crate::allocation::{Allocation, AllocationAlgorithm, AllocationError};
use crate::atmosphere::{self, AtmosphereError, HarvestAssessment};
use crate::config::{ConfigError, DashboardConfig};
use crate::sites::{self, CollectorSite};
use crate::timetable::TimetableError;

/// Allocation row joined with the district's timetable.
#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryPlan {
    pub district: String,
    /// m³/day.
    pub daily_volume: f64,
    /// Open supply hours per day.
    pub supply_hours: f64,
    /// m³/hour while supplying.
    pub hourly_rate: f64,
}

pub struct WaterAdvisor {
    config: DashboardConfig,
    solver: Box<dyn AllocationAlgorithm + Send + Sync>,
}

impl std::fmt::Debug for WaterAdvisor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WaterAdvisor")
            .field("config", &self.config)
            .field("solver", &self.solver.name())
            .finish()
    }
}

impl WaterAdvisor {
    /// Validates `config` and builds its solver.
    pub fn new(config: DashboardConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let solver = config.solver.build();
        debug!(
            "advisor ready: {} districts, solver {}",
            config.districts.len(),
            solver.name()
        );
        Ok(Self { config, solver })
    }

    /// Advisor over the built-in Wasit tables.
    pub fn wasit() -> Self {
        let config = DashboardConfig::wasit();
        let solver = config.solver.build();
        Self { config, solver }
    }

    /// Replaces the configured solver.
    pub fn with_algorithm(mut self, solver: impl AllocationAlgorithm + Send + Sync + 'static) -> Self {
        self.solver = Box::new(solver);
        self
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn solver_name(&self) -> &str {
        self.solver.name()
    }

    /// Optimal allocation for the configured districts.
    pub fn optimize(&self) -> Result<Allocation, AllocationError> {
        self.solver.allocate(&self.config.districts)
    }

    /// Harvesting figures for the given conditions.
    pub fn assess_harvest(
        &self,
        temp_c: f64,
        humidity_pct: f64,
        area_m2: f64,
    ) -> Result<HarvestAssessment, AtmosphereError> {
        atmosphere::assess(temp_c, humidity_pct, area_m2)
    }

    /// FAQ answer, or the default answer for unknown questions.
    pub fn answer(&self, question: &str) -> &str {
        self.config.faq.respond(question)
    }

    /// Collector sites by descending score.
    pub fn ranked_sites(&self) -> Vec<&CollectorSite> {
        sites::ranked(&self.config.sites)
    }

    /// Converts an allocation into per-district delivery rates.
    ///
    /// Fails with [`TimetableError::UnknownDistrict`] if an allocated district has
    /// no timetable entry.
    pub fn delivery_plan(&self, allocation: &Allocation) -> Result<Vec<DeliveryPlan>, TimetableError> {
        let timetable = &self.config.timetable;
        allocation
            .rows()
            .iter()
            .map(|row| {
                Ok(DeliveryPlan {
                    district: row.district.clone(),
                    daily_volume: row.optimized,
                    supply_hours: timetable.daily_supply_hours(&row.district)?.value(),
                    hourly_rate: timetable.hourly_rate(&row.district, row.optimized)?,
                })
            })
            .collect()
    }
}

impl Default for WaterAdvisor {
    fn default() -> Self {
        Self::wasit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocation::ProjectedGradient;
    use crate::district::District;
    use crate::sites::SiteKind;

    #[test]
    fn optimizes_builtin_districts() {
        let advisor = WaterAdvisor::wasit();
        assert_eq!(advisor.solver_name(), "water-filling");
        let alloc = advisor.optimize().unwrap();
        assert!((alloc.get("الكوت").unwrap().optimized - 4040.0).abs() < 1e-6);
        assert!((alloc.get("الحي").unwrap().improvement() - (3040.0 - 3400.0)).abs() < 1e-6);
    }

    #[test]
    fn swapping_solver_keeps_result() {
        let exact = WaterAdvisor::wasit().optimize().unwrap();
        let advisor = WaterAdvisor::wasit().with_algorithm(ProjectedGradient::default());
        assert_eq!(advisor.solver_name(), "projected-gradient");
        let iterative = advisor.optimize().unwrap();
        for (a, b) in exact.values().iter().zip(iterative.values()) {
            assert!((a - b).abs() < 1e-6);
        }
    }

    #[test]
    fn infeasible_config_reports_error() {
        let mut config = DashboardConfig::wasit();
        config.districts = vec![District::new("a", 100.0, 10.0, 50.0, 0.0)];
        let advisor = WaterAdvisor::new(config).unwrap();
        assert!(matches!(
            advisor.optimize(),
            Err(AllocationError::InsufficientSupply { .. })
        ));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut config = DashboardConfig::wasit();
        config.solver.tolerance = -1.0;
        assert!(WaterAdvisor::new(config).is_err());
    }

    #[test]
    fn delivery_plan_uses_timetable() {
        let advisor = WaterAdvisor::wasit();
        let alloc = advisor.optimize().unwrap();
        let plan = advisor.delivery_plan(&alloc).unwrap();
        assert_eq!(plan.len(), 5);
        assert!((plan[0].supply_hours - 5.0).abs() < 1e-12);
        assert!((plan[0].hourly_rate - 808.0).abs() < 1e-6);
    }

    #[test]
    fn delivery_plan_needs_timetable_entry() {
        let mut config = DashboardConfig::wasit();
        config.districts.push(District::new("واسط الجديدة", 100.0, 100.0, 0.0, 0.0));
        let advisor = WaterAdvisor::new(config).unwrap();
        let alloc = advisor.optimize().unwrap();
        assert_eq!(
            advisor.delivery_plan(&alloc),
            Err(TimetableError::UnknownDistrict("واسط الجديدة".to_string()))
        );
    }

    #[test]
    fn answers_and_sites() {
        let advisor = WaterAdvisor::default();
        assert_eq!(advisor.answer("غير معروف"), advisor.config().faq.default_answer());
        assert_eq!(advisor.ranked_sites()[0].kind, SiteKind::Industrial);
        assert!(advisor.assess_harvest(28.0, 150.0, 10.0).is_err());
    }
}
