//! Daily distribution timetable.
//!
//! Each district is fed during a few fixed windows per day. The timetable answers
//! whether a district is being supplied at a given time of day and converts a
//! daily allocation into the flow rate needed while its windows are open.

mod error;
mod window;

pub use error::TimetableError;
pub use window::SupplyWindow;

use qtty::{Hour, Quantity};

use crate::units::clock;
use crate::Id;

/// Supply windows of one district, sorted by start time.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistrictSchedule {
    pub district: Id,
    pub windows: Vec<SupplyWindow>,
}

/// Supply windows for every district, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<DistrictSchedule>", into = "Vec<DistrictSchedule>"))]
pub struct DistributionTimetable {
    schedules: Vec<DistrictSchedule>,
}

impl DistributionTimetable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The published Wasit timetable: a morning and an evening window per district.
    pub fn wasit() -> Self {
        let table = [
            ("الكوت", (6, 0), (9, 0), (18, 0), (20, 0)),
            ("الحي", (7, 0), (10, 0), (19, 0), (21, 0)),
            ("بدرة", (8, 0), (11, 0), (20, 0), (22, 0)),
            ("النعمانية", (5, 0), (8, 0), (17, 0), (19, 0)),
            ("الصويرة", (6, 30), (9, 30), (18, 30), (20, 30)),
        ];

        let schedules = table
            .into_iter()
            .map(|(district, ms, me, es, ee)| DistrictSchedule {
                district: district.to_string(),
                windows: vec![
                    SupplyWindow::fixed(clock(ms.0, ms.1), clock(me.0, me.1)),
                    SupplyWindow::fixed(clock(es.0, es.1), clock(ee.0, ee.1)),
                ],
            })
            .collect();

        Self { schedules }
    }

    pub fn len(&self) -> usize {
        self.schedules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schedules.is_empty()
    }

    /// District names in insertion order.
    pub fn districts(&self) -> impl Iterator<Item = &str> {
        self.schedules.iter().map(|s| s.district.as_str())
    }

    /// Sets the windows of `district`, replacing any previous entry.
    ///
    /// Windows are stored sorted by start time and must not overlap (sharing an
    /// endpoint is allowed).
    pub fn insert(
        &mut self,
        district: impl Into<Id>,
        mut windows: Vec<SupplyWindow>,
    ) -> Result<(), TimetableError> {
        let district: Id = district.into();
        windows.sort_by(|a, b| a.start().value().total_cmp(&b.start().value()));

        if windows.windows(2).any(|pair| pair[0].overlaps(&pair[1])) {
            return Err(TimetableError::OverlappingWindows(district));
        }

        match self.schedules.iter_mut().find(|s| s.district == district) {
            Some(existing) => existing.windows = windows,
            None => self.schedules.push(DistrictSchedule { district, windows }),
        }
        Ok(())
    }

    /// Supply windows of `district`, sorted by start time.
    pub fn windows(&self, district: &str) -> Result<&[SupplyWindow], TimetableError> {
        self.schedules
            .iter()
            .find(|s| s.district == district)
            .map(|s| s.windows.as_slice())
            .ok_or_else(|| TimetableError::UnknownDistrict(district.to_string()))
    }

    /// Total hours of supply per day.
    pub fn daily_supply_hours(&self, district: &str) -> Result<Quantity<Hour>, TimetableError> {
        Ok(self
            .windows(district)?
            .iter()
            .fold(Quantity::new(0.0), |acc, w| acc + w.duration()))
    }

    /// True if `district` is being supplied at time of day `at`.
    pub fn is_supplying(&self, district: &str, at: Quantity<Hour>) -> Result<bool, TimetableError> {
        if at.value().is_nan() {
            return Err(TimetableError::NaNTime);
        }
        Ok(self.windows(district)?.iter().any(|w| w.contains(at)))
    }

    /// Flow in m³/hour needed to deliver `daily_volume` m³ within the open windows.
    pub fn hourly_rate(&self, district: &str, daily_volume: f64) -> Result<f64, TimetableError> {
        let hours = self.daily_supply_hours(district)?.value();
        if hours <= 0.0 {
            return Err(TimetableError::NoSupplyHours(district.to_string()));
        }
        Ok(daily_volume / hours)
    }

    /// Districts supplied at time of day `at`.
    pub fn supplied_at(&self, at: Quantity<Hour>) -> Vec<&str> {
        self.schedules
            .iter()
            .filter(|s| s.windows.iter().any(|w| w.contains(at)))
            .map(|s| s.district.as_str())
            .collect()
    }
}

impl TryFrom<Vec<DistrictSchedule>> for DistributionTimetable {
    type Error = TimetableError;

    fn try_from(schedules: Vec<DistrictSchedule>) -> Result<Self, Self::Error> {
        let mut timetable = Self::new();
        for schedule in schedules {
            timetable.insert(schedule.district, schedule.windows)?;
        }
        Ok(timetable)
    }
}

impl From<DistributionTimetable> for Vec<DistrictSchedule> {
    fn from(timetable: DistributionTimetable) -> Self {
        timetable.schedules
    }
}
