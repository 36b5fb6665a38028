//! Weather alerts and harvesting outlook.

use super::harvest::HUMID_THRESHOLD;

/// Temperature above which a heat-wave alert is raised, °C.
pub const HEAT_WAVE_TEMP: f64 = 40.0;
/// Relative humidity below which a drought alert is raised, %.
pub const DROUGHT_HUMIDITY: f64 = 30.0;
/// Daily consumption cut advised during a heat wave, %.
pub const HEAT_WAVE_CUT_PCT: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum WeatherAlert {
    /// Cut daily consumption by [`HEAT_WAVE_CUT_PCT`].
    HeatWave,
    /// Avoid daytime irrigation.
    SevereDrought,
}

impl WeatherAlert {
    /// Heat wave takes precedence over drought.
    pub fn check(temp_c: f64, humidity_pct: f64) -> Option<Self> {
        if temp_c > HEAT_WAVE_TEMP {
            Some(WeatherAlert::HeatWave)
        } else if humidity_pct < DROUGHT_HUMIDITY {
            Some(WeatherAlert::SevereDrought)
        } else {
            None
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WeatherAlert::HeatWave => "تحذير: موجة حر! تقليل الاستهلاك اليومي 20%",
            WeatherAlert::SevereDrought => "تحذير: جفاف شديد - تجنب الري نهاراً",
        }
    }

    /// Daily volume to plan for once the alert's advice is applied.
    pub fn adjusted_consumption(&self, daily_volume: f64) -> f64 {
        match self {
            WeatherAlert::HeatWave => daily_volume * (1.0 - HEAT_WAVE_CUT_PCT / 100.0),
            WeatherAlert::SevereDrought => daily_volume,
        }
    }
}

/// Whether current humidity suits harvesting on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum HarvestOutlook {
    Favorable,
    AssistedAdvised,
}

impl HarvestOutlook {
    pub fn from_humidity(humidity_pct: f64) -> Self {
        if humidity_pct > HUMID_THRESHOLD {
            HarvestOutlook::Favorable
        } else {
            HarvestOutlook::AssistedAdvised
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HarvestOutlook::Favorable => "✅ ظروف ممتازة للاستمطار",
            HarvestOutlook::AssistedAdvised => "⚠️ يفضل استخدام أنظمة مساعدة",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heat_wave_wins_over_drought() {
        assert_eq!(WeatherAlert::check(42.0, 10.0), Some(WeatherAlert::HeatWave));
    }

    #[test]
    fn drought_when_dry() {
        assert_eq!(
            WeatherAlert::check(30.0, 25.0),
            Some(WeatherAlert::SevereDrought)
        );
    }

    #[test]
    fn thresholds_are_strict() {
        assert_eq!(WeatherAlert::check(40.0, 30.0), None);
    }

    #[test]
    fn heat_wave_cuts_consumption() {
        assert!((WeatherAlert::HeatWave.adjusted_consumption(5000.0) - 4000.0).abs() < 1e-9);
        assert_eq!(WeatherAlert::SevereDrought.adjusted_consumption(5000.0), 5000.0);
    }

    #[test]
    fn outlook() {
        assert_eq!(HarvestOutlook::from_humidity(71.0), HarvestOutlook::Favorable);
        assert_eq!(
            HarvestOutlook::from_humidity(70.0),
            HarvestOutlook::AssistedAdvised
        );
        assert!(HarvestOutlook::Favorable.label().contains("ظروف ممتازة"));
    }
}
