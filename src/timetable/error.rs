use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TimetableError {
    #[error("Time value cannot be NaN")]
    NaNTime,

    #[error("Window start {start} is after its end {end}")]
    InvertedWindow { start: f64, end: f64 },

    #[error("Window [{start}, {end}] falls outside the 24-hour day")]
    OutsideDay { start: f64, end: f64 },

    #[error("District '{0}' has overlapping supply windows")]
    OverlappingWindows(String),

    #[error("District '{0}' not found in timetable")]
    UnknownDistrict(String),

    #[error("District '{0}' has no supply hours")]
    NoSupplyHours(String),
}
