//! Unit helpers built on `qtty`.
//!
//! Supply windows are expressed as time-of-day quantities in hours. Published
//! timetables often carry half-hour marks ("06:30"), so minutes are converted
//! through the same-dimension machinery rather than by hand.

use qtty::{Hour, Minute, Quantity, Unit};

/// Marker trait for units that share the same physical dimension.
///
/// Implemented for any pair of units where `From::Dim == To::Dim`, so a
/// conversion between, say, minutes and meters fails to compile.
pub trait SameDim<To: Unit>: Unit<Dim = To::Dim> {}

impl<From, To> SameDim<To> for From
where
    From: Unit,
    To: Unit<Dim = From::Dim>,
{
}

/// Converts a quantity to another unit of the same dimension.
#[inline]
pub const fn convert<From, To>(q: Quantity<From>) -> Quantity<To>
where
    From: SameDim<To>,
    To: Unit,
{
    q.to_const::<To>()
}

/// Time of day `hh:mm` as hours since midnight.
///
/// ```
/// use wasit_water::clock;
///
/// assert!((clock(6, 30).value() - 6.5).abs() < 1e-12);
/// ```
pub fn clock(hours: u32, minutes: u32) -> Quantity<Hour> {
    let minutes: Quantity<Hour> = convert(Quantity::<Minute>::new(minutes as f64));
    Quantity::<Hour>::new(hours as f64) + minutes
}

/// Hours in one day; the upper bound of any time-of-day value.
pub const HOURS_PER_DAY: f64 = 24.0;

#[cfg(test)]
mod tests {
    use super::*;
    use qtty::{Day, Second};

    #[test]
    fn minutes_to_hours() {
        let half: Quantity<Hour> = convert(Quantity::<Minute>::new(30.0));
        assert!((half.value() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn day_is_twenty_four_hours() {
        let day: Quantity<Hour> = convert(Quantity::<Day>::new(1.0));
        assert!((day.value() - HOURS_PER_DAY).abs() < 1e-12);
    }

    #[test]
    fn hours_to_seconds() {
        let seconds: Quantity<Second> = convert(Quantity::<Hour>::new(2.0));
        assert!((seconds.value() - 7200.0).abs() < 1e-9);
    }

    #[test]
    fn clock_builds_fractional_hours() {
        assert!((clock(18, 30).value() - 18.5).abs() < 1e-12);
        assert!((clock(0, 0).value()).abs() < 1e-12);
        assert!((clock(24, 0).value() - 24.0).abs() < 1e-12);
    }
}
