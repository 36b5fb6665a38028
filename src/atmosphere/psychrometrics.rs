//! Dew point by the Magnus approximation.

use super::error::AtmosphereError;

/// Magnus coefficient `A` (dimensionless).
pub const MAGNUS_A: f64 = 17.27;
/// Magnus coefficient `B` in °C.
pub const MAGNUS_B: f64 = 237.7;

/// Rejects relative humidity outside `[0, 100]` (and NaN).
pub fn check_humidity(humidity_pct: f64) -> Result<(), AtmosphereError> {
    if (0.0..=100.0).contains(&humidity_pct) {
        Ok(())
    } else {
        Err(AtmosphereError::HumidityOutOfRange(humidity_pct))
    }
}

pub(crate) fn check_temperature(temp_c: f64) -> Result<(), AtmosphereError> {
    if temp_c.is_finite() && temp_c > -MAGNUS_B {
        Ok(())
    } else {
        Err(AtmosphereError::InvalidTemperature(temp_c))
    }
}

/// Dew point in °C for air at `temp_c` and relative humidity `humidity_pct`.
///
/// ```text
/// α  = A·T / (B + T) + ln(RH / 100)
/// Td = B·α / (A − α)
/// ```
///
/// # Errors
///
/// - [`AtmosphereError::HumidityOutOfRange`] outside `[0, 100]`
/// - [`AtmosphereError::DewPointUndefined`] at exactly 0 %
/// - [`AtmosphereError::InvalidTemperature`] for non-finite or sub-`−B` input
pub fn dew_point(temp_c: f64, humidity_pct: f64) -> Result<f64, AtmosphereError> {
    check_humidity(humidity_pct)?;
    check_temperature(temp_c)?;
    if humidity_pct == 0.0 {
        return Err(AtmosphereError::DewPointUndefined);
    }

    let alpha = (MAGNUS_A * temp_c) / (MAGNUS_B + temp_c) + (humidity_pct / 100.0).ln();
    Ok((MAGNUS_B * alpha) / (MAGNUS_A - alpha))
}

/// Dew-point depression `T − Td`; small values mean air close to saturation.
pub fn dew_point_depression(temp_c: f64, humidity_pct: f64) -> Result<f64, AtmosphereError> {
    Ok(temp_c - dew_point(temp_c, humidity_pct)?)
}
