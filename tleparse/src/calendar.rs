//! Calendar arithmetic on day-of-year values, shared with propagation
//! consumers.

use crate::{TleError, SECONDS_PER_DAY};

const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Gregorian leap year rule
pub const fn is_leap_year(year: i32) -> bool {
    year % 400 == 0 || (year % 4 == 0 && year % 100 != 0)
}

pub const fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Convert a 1-based day of year into `(month, day)`, both 1-based.
///
/// Returns `None` for day 0 or a day past the end of the year.
pub fn day_of_year_to_month_day(day_of_year: u32, is_leap: bool) -> Option<(u32, u32)> {
    if day_of_year == 0 {
        return None;
    }

    let mut remaining = day_of_year;
    for (idx, days) in DAYS_IN_MONTH.iter().enumerate() {
        let days = if idx == 1 && is_leap { days + 1 } else { *days };
        if remaining <= days {
            return Some((idx as u32 + 1, remaining));
        }
        remaining -= days;
    }
    None
}

/// Broken-down form of a fractional day of year
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct MonthDayTime {
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    /// Floored to microseconds
    pub second: f64,
}

/// Convert a fractional day of year (1.0 is midnight on January 1st) of `year`
/// into month, day, hour, minute and second.
///
/// Half a microsecond is added to the fraction before the conversion so values
/// just short of a whole second don't truncate to the one below.
///
/// The day is not carried: a fraction within half a microsecond of the next
/// midnight comes out as hour 24, minute 0 of the same month and day.
pub fn days_to_mdhms(year: i32, days: f64) -> Result<MonthDayTime, TleError> {
    if !days.is_finite() || days < 1.0 {
        return Err(TleError::EpochOutOfRange(format!(
            "day of year {days} out of range"
        )));
    }

    let whole = days.floor();
    let fraction = days - whole;

    let (month, day) = day_of_year_to_month_day(whole as u32, is_leap_year(year)).ok_or_else(
        || TleError::EpochOutOfRange(format!("day of year {whole} out of range for {year}")),
    )?;

    let fraction = fraction + 0.5 / (SECONDS_PER_DAY * 1e6);
    let seconds_total = fraction * SECONDS_PER_DAY;
    let minutes_total = (seconds_total / 60.0).floor() as u32;
    let second = seconds_total % 60.0;

    Ok(MonthDayTime {
        month,
        day,
        hour: minutes_total / 60,
        minute: minutes_total % 60,
        second: (second * 1e6).floor() / 1e6,
    })
}

/// Wrap an angle in degrees into `[-180, 180]`
pub fn normalize_angle(angle: f64) -> f64 {
    let angle = angle % 360.0;
    if angle > 180.0 {
        angle - 360.0
    } else if angle < -180.0 {
        angle + 360.0
    } else {
        angle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn leap_years() {
        assert!(is_leap_year(2008));
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2100));
        assert!(!is_leap_year(2023));
        assert_eq!(days_in_year(2000), 366);
        assert_eq!(days_in_year(1999), 365);
    }

    #[test]
    fn month_day() {
        assert_eq!(day_of_year_to_month_day(1, false), Some((1, 1)));
        assert_eq!(day_of_year_to_month_day(31, false), Some((1, 31)));
        assert_eq!(day_of_year_to_month_day(32, false), Some((2, 1)));
        assert_eq!(day_of_year_to_month_day(59, false), Some((2, 28)));
        assert_eq!(day_of_year_to_month_day(60, false), Some((3, 1)));
        assert_eq!(day_of_year_to_month_day(60, true), Some((2, 29)));
        assert_eq!(day_of_year_to_month_day(264, true), Some((9, 20)));
        assert_eq!(day_of_year_to_month_day(365, false), Some((12, 31)));
        assert_eq!(day_of_year_to_month_day(366, true), Some((12, 31)));
    }

    #[test]
    fn month_day_out_of_range() {
        assert_eq!(day_of_year_to_month_day(0, true), None);
        assert_eq!(day_of_year_to_month_day(366, false), None);
        assert_eq!(day_of_year_to_month_day(367, true), None);
    }

    #[test]
    fn mdhms() {
        let t = days_to_mdhms(2008, 264.51782528).unwrap();
        assert_eq!((t.month, t.day, t.hour, t.minute), (9, 20, 12, 25));
        assert_relative_eq!(t.second, 40.104192, epsilon = 1e-9);

        let t = days_to_mdhms(2023, 1.0).unwrap();
        assert_eq!((t.month, t.day, t.hour, t.minute), (1, 1, 0, 0));
        assert_relative_eq!(t.second, 0.0);

        let t = days_to_mdhms(2023, 32.75).unwrap();
        assert_eq!((t.month, t.day, t.hour, t.minute), (2, 1, 18, 0));
        assert_relative_eq!(t.second, 0.0);
    }

    #[test]
    fn mdhms_rounding_bias() {
        // 0.3 µs short of 12:00:01
        let days = 1.0 + (43_201.0 - 0.3e-6) / SECONDS_PER_DAY;
        let t = days_to_mdhms(2023, days).unwrap();
        assert_eq!((t.hour, t.minute), (12, 0));
        assert_relative_eq!(t.second, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn mdhms_bias_reaches_hour_24() {
        // 0.2 µs short of midnight on January 2nd
        let days = 2.0 - 0.2e-6 / SECONDS_PER_DAY;
        let t = days_to_mdhms(2023, days).unwrap();
        assert_eq!((t.month, t.day, t.hour, t.minute), (1, 1, 24, 0));
        assert_relative_eq!(t.second, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn mdhms_out_of_range() {
        assert!(matches!(
            days_to_mdhms(2023, 366.5),
            Err(TleError::EpochOutOfRange(_))
        ));
        assert!(days_to_mdhms(2024, 366.5).is_ok());
        assert!(days_to_mdhms(2024, 0.5).is_err());
        assert!(days_to_mdhms(2024, f64::NAN).is_err());
    }

    #[test]
    fn angles() {
        assert_relative_eq!(normalize_angle(190.0), -170.0);
        assert_relative_eq!(normalize_angle(-190.0), 170.0);
        assert_relative_eq!(normalize_angle(540.0), 180.0);
        assert_relative_eq!(normalize_angle(45.0), 45.0);
        assert_relative_eq!(normalize_angle(-720.5), -0.5);
    }
}
