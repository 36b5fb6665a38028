//! Atmospheric water harvesting estimates.
//!
//! Closed-form models only: Magnus dew point, an empirical daily-yield curve,
//! and threshold rules for system choice and weather alerts. Humidity is always
//! validated against `[0, 100]` before any formula runs.

mod alerts;
mod error;
mod harvest;
mod psychrometrics;

use log::debug;

pub use alerts::{HarvestOutlook, WeatherAlert, DROUGHT_HUMIDITY, HEAT_WAVE_CUT_PCT, HEAT_WAVE_TEMP};
pub use error::AtmosphereError;
pub use harvest::{recommend_system, water_yield, HarvestSystem, FOG_DEPRESSION, HUMID_THRESHOLD};
pub use psychrometrics::{check_humidity, dew_point, dew_point_depression, MAGNUS_A, MAGNUS_B};

/// Everything the harvesting tab shows for one set of conditions.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HarvestAssessment {
    pub temperature: f64,
    pub humidity: f64,
    pub area: f64,
    /// °C.
    pub dew_point: f64,
    /// Litres per day.
    pub water_yield: f64,
    pub system: HarvestSystem,
    pub alert: Option<WeatherAlert>,
    pub outlook: HarvestOutlook,
}

/// Evaluates all harvesting figures for the given conditions.
///
/// Fails on the first invalid input; no partial assessment is returned.
pub fn assess(temp_c: f64, humidity_pct: f64, area_m2: f64) -> Result<HarvestAssessment, AtmosphereError> {
    let dew_point = dew_point(temp_c, humidity_pct)?;
    let water_yield = water_yield(temp_c, humidity_pct, area_m2)?;
    let system = HarvestSystem::recommend(temp_c, humidity_pct)?;
    debug!(
        "harvest at {temp_c} °C / {humidity_pct} %: dew point {dew_point:.2}, {water_yield:.2} L/day, {system}"
    );

    Ok(HarvestAssessment {
        temperature: temp_c,
        humidity: humidity_pct,
        area: area_m2,
        dew_point,
        water_yield,
        system,
        alert: WeatherAlert::check(temp_c, humidity_pct),
        outlook: HarvestOutlook::from_humidity(humidity_pct),
    })
}
