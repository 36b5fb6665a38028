//! Immutable dashboard configuration.
//!
//! Bundles every static table the dashboard works from with the solver
//! settings. Built once at startup, either from the built-in Wasit tables or,
//! with the `serde` feature, from a JSON document.

use thiserror::Error;

use crate::allocation::{AllocationAlgorithm, ProjectedGradient, WaterFilling};
use crate::district::{wasit_districts, District, DistrictError};
use crate::faq::FaqResponder;
use crate::sites::{wasit_sites, CollectorSite};
use crate::timetable::DistributionTimetable;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid district: {0}")]
    District(#[from] DistrictError),

    #[error("Invalid solver settings: {0}")]
    Solver(String),

    #[error("Site '{site}' has score {score}, expected a value in [0, 1]")]
    SiteScore { site: String, score: f64 },

    #[error("Cannot read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed configuration: {0}")]
    Json(String),
}

/// Which allocation solver to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SolverKind {
    #[default]
    WaterFilling,
    ProjectedGradient,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SolverSettings {
    pub kind: SolverKind,
    /// Convergence tolerance in m³/day.
    pub tolerance: f64,
    /// Gradient step; projected-gradient only.
    pub step: f64,
    /// Iteration budget; projected-gradient only.
    pub max_iterations: usize,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            kind: SolverKind::WaterFilling,
            tolerance: 1e-9,
            step: ProjectedGradient::DEFAULT_STEP,
            max_iterations: ProjectedGradient::DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tolerance.is_nan() || self.tolerance <= 0.0 {
            return Err(ConfigError::Solver(format!(
                "tolerance must be positive, got {}",
                self.tolerance
            )));
        }
        if self.kind == SolverKind::ProjectedGradient {
            if !(self.step > 0.0 && self.step <= 0.5) {
                return Err(ConfigError::Solver(format!(
                    "step must lie in (0, 0.5], got {}",
                    self.step
                )));
            }
            if self.max_iterations == 0 {
                return Err(ConfigError::Solver(
                    "max_iterations must be at least 1".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Instantiates the configured solver.
    pub fn build(&self) -> Box<dyn AllocationAlgorithm + Send + Sync> {
        match self.kind {
            SolverKind::WaterFilling => Box::new(WaterFilling::new(self.tolerance)),
            SolverKind::ProjectedGradient => Box::new(ProjectedGradient::new(
                self.step,
                self.tolerance,
                self.max_iterations,
            )),
        }
    }
}

/// Everything the dashboard needs, loaded once.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DashboardConfig {
    pub districts: Vec<District>,
    pub faq: FaqResponder,
    pub sites: Vec<CollectorSite>,
    pub timetable: DistributionTimetable,
    pub solver: SolverSettings,
}

impl DashboardConfig {
    /// The built-in Wasit tables with the exact solver.
    pub fn wasit() -> Self {
        Self {
            districts: wasit_districts(),
            faq: FaqResponder::wasit(),
            sites: wasit_sites(),
            timetable: DistributionTimetable::wasit(),
            solver: SolverSettings::default(),
        }
    }

    /// Checks district records, site scores and solver settings.
    ///
    /// Allocation feasibility is not checked here; an infeasible district list
    /// is a valid configuration whose allocation reports an error.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for district in &self.districts {
            district.validate()?;
        }
        for site in &self.sites {
            if !(0.0..=1.0).contains(&site.score) {
                return Err(ConfigError::SiteScore {
                    site: site.name.clone(),
                    score: site.score,
                });
            }
        }
        self.solver.validate()
    }

    /// Parses and validates a JSON configuration; omitted sections fall back to
    /// the built-in tables.
    #[cfg(feature = "serde")]
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Json(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    #[cfg(feature = "serde")]
    pub fn from_json_file(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    #[cfg(feature = "serde")]
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Json(e.to_string()))
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self::wasit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_config_is_valid() {
        let config = DashboardConfig::wasit();
        assert!(config.validate().is_ok());
        assert_eq!(config.districts.len(), 5);
        assert_eq!(config.sites.len(), 3);
        assert_eq!(config.timetable.len(), 5);
        assert_eq!(config.solver.kind, SolverKind::WaterFilling);
    }

    #[test]
    fn rejects_bad_district() {
        let mut config = DashboardConfig::wasit();
        config.districts[0].demand = -1.0;
        assert!(matches!(config.validate(), Err(ConfigError::District(_))));
    }

    #[test]
    fn rejects_bad_site_score() {
        let mut config = DashboardConfig::wasit();
        config.sites[1].score = 1.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SiteScore { .. })
        ));
    }

    #[test]
    fn rejects_bad_solver_settings() {
        let settings = SolverSettings {
            tolerance: 0.0,
            ..SolverSettings::default()
        };
        assert!(settings.validate().is_err());

        let settings = SolverSettings {
            kind: SolverKind::ProjectedGradient,
            step: 0.9,
            ..SolverSettings::default()
        };
        assert!(matches!(settings.validate(), Err(ConfigError::Solver(_))));

        // Step is irrelevant to the exact solver.
        let settings = SolverSettings {
            step: 0.9,
            ..SolverSettings::default()
        };
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn build_selects_solver() {
        let exact = SolverSettings::default().build();
        assert_eq!(exact.name(), "water-filling");

        let iterative = SolverSettings {
            kind: SolverKind::ProjectedGradient,
            ..SolverSettings::default()
        }
        .build();
        assert_eq!(iterative.name(), "projected-gradient");
    }

    #[cfg(feature = "serde")]
    mod json {
        use super::*;

        #[test]
        fn round_trip() {
            let config = DashboardConfig::wasit();
            let json = config.to_json_string().unwrap();
            let back = DashboardConfig::from_json_str(&json).unwrap();
            assert_eq!(back, config);
        }

        #[test]
        fn partial_document_uses_builtin_tables() {
            let json = r#"{
                "districts": [
                    {"name": "a", "demand": 100.0, "supply": 50.0, "min_required": 10.0, "current_alloc": 40.0}
                ],
                "solver": {"kind": "projected_gradient"}
            }"#;
            let config = DashboardConfig::from_json_str(json).unwrap();
            assert_eq!(config.districts.len(), 1);
            assert_eq!(config.solver.kind, SolverKind::ProjectedGradient);
            assert_eq!(config.solver.step, ProjectedGradient::DEFAULT_STEP);
            assert_eq!(config.sites.len(), 3);
            assert_eq!(config.faq.entries().len(), 3);
        }

        #[test]
        fn invalid_document_is_rejected() {
            let json = r#"{"districts": [{"name": "a", "demand": 0.0, "supply": 1.0, "min_required": 0.0, "current_alloc": 0.0}]}"#;
            assert!(matches!(
                DashboardConfig::from_json_str(json),
                Err(ConfigError::District(_))
            ));
            assert!(matches!(
                DashboardConfig::from_json_str("{"),
                Err(ConfigError::Json(_))
            ));
        }

        #[test]
        fn overlapping_timetable_is_rejected() {
            let json = r#"{"timetable": [
                {"district": "a", "windows": [{"start": 6.0, "end": 9.0}, {"start": 8.0, "end": 10.0}]}
            ]}"#;
            assert!(matches!(
                DashboardConfig::from_json_str(json),
                Err(ConfigError::Json(_))
            ));
        }
    }
}
