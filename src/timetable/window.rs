//! Daily supply window as a time-of-day interval.

use std::fmt::Display;

use qtty::{Hour, Quantity};

use super::error::TimetableError;
use crate::units::HOURS_PER_DAY;

/// Closed time-of-day range `[start, end]` during which a district receives water.
///
/// Both ends are hours since midnight with `0 ≤ start ≤ end ≤ 24`; windows do not
/// wrap past midnight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SupplyWindow {
    start: Quantity<Hour>,
    end: Quantity<Hour>,
}

impl SupplyWindow {
    /// Creates window `[start, end]`.
    ///
    /// # Errors
    ///
    /// - [`TimetableError::NaNTime`] if either end is NaN
    /// - [`TimetableError::InvertedWindow`] if `start > end`
    /// - [`TimetableError::OutsideDay`] if either end falls outside `[0, 24]`
    pub fn new(start: Quantity<Hour>, end: Quantity<Hour>) -> Result<Self, TimetableError> {
        let (s, e) = (start.value(), end.value());
        if s.is_nan() || e.is_nan() {
            return Err(TimetableError::NaNTime);
        }
        if s > e {
            return Err(TimetableError::InvertedWindow { start: s, end: e });
        }
        if s < 0.0 || e > HOURS_PER_DAY {
            return Err(TimetableError::OutsideDay { start: s, end: e });
        }
        Ok(Self { start, end })
    }

    /// Window from literal table data known to be valid.
    pub(super) fn fixed(start: Quantity<Hour>, end: Quantity<Hour>) -> Self {
        debug_assert!(
            0.0 <= start.value() && start.value() <= end.value() && end.value() <= HOURS_PER_DAY,
            "invalid built-in supply window"
        );
        Self { start, end }
    }

    pub fn from_hours(start: f64, end: f64) -> Result<Self, TimetableError> {
        Self::new(Quantity::new(start), Quantity::new(end))
    }

    pub const fn start(&self) -> Quantity<Hour> {
        self.start
    }

    pub const fn end(&self) -> Quantity<Hour> {
        self.end
    }

    pub fn duration(&self) -> Quantity<Hour> {
        self.end - self.start
    }

    /// Returns true if `at` ∈ `[start, end]`.
    pub fn contains(&self, at: Quantity<Hour>) -> bool {
        self.start.value() <= at.value() && at.value() <= self.end.value()
    }

    /// True if the windows share more than an endpoint.
    pub fn overlaps(&self, other: &SupplyWindow) -> bool {
        self.start.value() < other.end.value() && other.start.value() < self.end.value()
    }
}

fn write_clock(f: &mut std::fmt::Formatter<'_>, hours: Quantity<Hour>) -> std::fmt::Result {
    let total_minutes = (hours.value() * 60.0).round() as u32;
    write!(f, "{:02}:{:02}", total_minutes / 60, total_minutes % 60)
}

impl Display for SupplyWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_clock(f, self.start)?;
        f.write_str("-")?;
        write_clock(f, self.end)
    }
}

// =============================================================================
// SupplyWindow Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for SupplyWindow {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("SupplyWindow", 2)?;
        s.serialize_field("start", &self.start.value())?;
        s.serialize_field("end", &self.end.value())?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for SupplyWindow {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw {
            start: f64,
            end: f64,
        }

        let raw = Raw::deserialize(deserializer)?;
        Self::from_hours(raw.start, raw.end).map_err(serde::de::Error::custom)
    }
}
