//! Atmospheric water yield and harvesting system choice.

use std::fmt::Display;

use super::error::AtmosphereError;
use super::psychrometrics::{check_humidity, check_temperature, dew_point};

/// Base yield coefficient, litres per m² per day at 0 % RH and 25 °C.
const BASE_YIELD: f64 = 0.8;
/// Exponential humidity gain per percentage point.
const HUMIDITY_GAIN: f64 = 0.08;
/// Temperature at which collectors perform best, °C.
const OPTIMAL_TEMP: f64 = 25.0;
/// Quadratic penalty per °C² away from the optimum.
const TEMP_PENALTY: f64 = 0.018;

/// Dew-point depression below which fog nets are recommended, °C.
pub const FOG_DEPRESSION: f64 = 2.0;
/// Relative humidity above which condensation-based systems pay off, %.
pub const HUMID_THRESHOLD: f64 = 70.0;

/// Estimated daily harvest in litres.
///
/// ```text
/// yield = 0.8 · e^(0.08·RH) · (1 − 0.018·(T − 25)²) · area
/// ```
///
/// The temperature factor turns negative beyond roughly ±7.5 °C from 25 °C; the
/// yield is floored at zero there.
///
/// # Errors
///
/// - [`AtmosphereError::HumidityOutOfRange`] outside `[0, 100]`
/// - [`AtmosphereError::InvalidArea`] for negative or non-finite area
/// - [`AtmosphereError::InvalidTemperature`] for non-finite temperature
pub fn water_yield(temp_c: f64, humidity_pct: f64, area_m2: f64) -> Result<f64, AtmosphereError> {
    check_humidity(humidity_pct)?;
    check_temperature(temp_c)?;
    if !area_m2.is_finite() || area_m2 < 0.0 {
        return Err(AtmosphereError::InvalidArea(area_m2));
    }

    let humidity_factor = BASE_YIELD * (HUMIDITY_GAIN * humidity_pct).exp();
    let temp_factor = 1.0 - TEMP_PENALTY * (temp_c - OPTIMAL_TEMP).powi(2);
    Ok((humidity_factor * temp_factor * area_m2).max(0.0))
}

/// Atmospheric water harvesting technology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum HarvestSystem {
    /// Mesh nets catching fog droplets; needs near-saturated air.
    FogNets,
    /// Thermoelectric cooling condensers.
    ThermoelectricCondensers,
    /// Desiccant-assisted extraction for dry air.
    DesiccantAssisted,
}

impl HarvestSystem {
    /// Recommends a system for the given conditions.
    ///
    /// Fog nets when the dew-point depression is under 2 °C, thermoelectric
    /// condensers above 70 % RH, desiccant-assisted systems otherwise.
    pub fn recommend(temp_c: f64, humidity_pct: f64) -> Result<Self, AtmosphereError> {
        let td = dew_point(temp_c, humidity_pct)?;
        Ok(if temp_c - td < FOG_DEPRESSION {
            HarvestSystem::FogNets
        } else if humidity_pct > HUMID_THRESHOLD {
            HarvestSystem::ThermoelectricCondensers
        } else {
            HarvestSystem::DesiccantAssisted
        })
    }

    pub fn label(&self) -> &'static str {
        match self {
            HarvestSystem::FogNets => "🌫️ شبكات الضباب (كفاءة عالية)",
            HarvestSystem::ThermoelectricCondensers => "⚡ مولدات تعمل بالتبريد الكهروحراري",
            HarvestSystem::DesiccantAssisted => "🧂 أنظمة مساعدة بالمجففات",
        }
    }
}

impl Display for HarvestSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            HarvestSystem::FogNets => "fog nets",
            HarvestSystem::ThermoelectricCondensers => "thermoelectric condensers",
            HarvestSystem::DesiccantAssisted => "desiccant-assisted",
        };
        f.write_str(name)
    }
}

/// Shorthand for [`HarvestSystem::recommend`].
pub fn recommend_system(temp_c: f64, humidity_pct: f64) -> Result<HarvestSystem, AtmosphereError> {
    HarvestSystem::recommend(temp_c, humidity_pct)
}
