//! wasit-water - water distribution and atmospheric harvesting toolkit for Wasit.
//!
//! Reallocates district water supply under minimum-guarantee and aggregate-supply
//! constraints, estimates atmospheric water yield, and carries the static tables
//! (FAQ, collector sites, distribution timetable) the dashboard is built on.

pub mod advisor;
pub mod allocation;
pub mod atmosphere;
pub mod config;
pub mod district;
pub mod faq;
pub mod sites;
pub mod timetable;
pub mod units;

pub use advisor::WaterAdvisor;
pub use allocation::{Allocation, AllocationAlgorithm, AllocationError, ProjectedGradient, WaterFilling};
pub use config::DashboardConfig;
pub use district::District;

// Re-export unit helpers for ergonomic use
pub use units::{clock, convert, SameDim};

/// Identifier type used for districts and sites (their display name).
pub type Id = String;
