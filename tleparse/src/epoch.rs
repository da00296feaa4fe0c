//! TLE epoch resolution
//!
//! Line 1 packs the epoch as a two-digit year (columns 18..20) followed by a
//! fractional day of year (columns 20..32), `YYDDD.FFFFFFFF`. Day 1.0 is
//! midnight UTC on January 1st.

use crate::{calendar::days_in_year, TleError, CENTURY_PIVOT, NANOS_PER_DAY};
use chrono::{Duration, NaiveDate};
use nom::{
    character::complete::{char, digit0, digit1},
    combinator::all_consuming,
    sequence::separated_pair,
    IResult,
};
use tletypes::prelude::*;

/// Instant of a record's epoch, recomputed from the line 1 fields on every call
pub trait EpochExt {
    fn epoch(&self) -> Result<UtcTimestamp, TleError>;
}

impl EpochExt for Line1 {
    fn epoch(&self) -> Result<UtcTimestamp, TleError> {
        resolve_epoch(&self.epoch_year, &self.epoch_day)
    }
}

impl EpochExt for Tle {
    fn epoch(&self) -> Result<UtcTimestamp, TleError> {
        self.line1.epoch()
    }
}

/// Four-digit year from the two-digit TLE year: 57-99 are 1957-1999, 00-56
/// are 2000-2056.
pub const fn full_year(two_digit_year: u32) -> i32 {
    if two_digit_year >= CENTURY_PIVOT {
        1900 + two_digit_year as i32
    } else {
        2000 + two_digit_year as i32
    }
}

/// Resolve the line 1 epoch year and epoch day fields into a UTC instant
pub fn resolve_epoch(epoch_year: &str, epoch_day: &str) -> Result<UtcTimestamp, TleError> {
    let packed = format!("{epoch_year}{epoch_day}");
    let invalid = || TleError::InvalidEpochFormat(packed.clone());

    let (_, (year_day, fraction)) = packed_epoch(&packed).map_err(|_| invalid())?;
    if year_day.len() != 5 {
        return Err(invalid());
    }

    let (yy, ddd) = year_day.split_at(2);
    let two_digit_year = yy.parse::<u32>().map_err(|_| invalid())?;
    let day_of_year = ddd.parse::<u32>().map_err(|_| invalid())?;
    let fraction = format!("0.{fraction}")
        .parse::<f64>()
        .map_err(|_| invalid())?;

    epoch_from_parts(two_digit_year, day_of_year, fraction)
}

/// Build the epoch instant from already-split parts.
///
/// The instant is midnight UTC on January 1st of the resolved year, plus
/// `day_of_year - 1` days, plus the fraction of a day rounded to the nearest
/// nanosecond.
pub fn epoch_from_parts(
    two_digit_year: u32,
    day_of_year: u32,
    fraction: f64,
) -> Result<UtcTimestamp, TleError> {
    if two_digit_year > 99 {
        return Err(TleError::EpochOutOfRange(format!(
            "two-digit year {two_digit_year} out of range (00-99)"
        )));
    }
    let year = full_year(two_digit_year);

    let max_day = days_in_year(year);
    if !(1..=max_day).contains(&day_of_year) {
        return Err(TleError::EpochOutOfRange(format!(
            "day of year {day_of_year} out of range (1-{max_day}) for {year}"
        )));
    }

    if !(0.0..1.0).contains(&fraction) {
        return Err(TleError::EpochOutOfRange(format!(
            "fractional day {fraction} out of range [0.0, 1.0)"
        )));
    }

    let start_of_year = NaiveDate::from_ymd_opt(year, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or_else(|| TleError::EpochOutOfRange(format!("year {year}")))?
        .and_utc();

    let nanos = (fraction * NANOS_PER_DAY).round() as i64;

    Ok(start_of_year
        + Duration::days(i64::from(day_of_year - 1))
        + Duration::nanoseconds(nanos))
}

fn packed_epoch(s: &str) -> IResult<&str, (&str, &str)> {
    all_consuming(separated_pair(digit1, char('.'), digit0))(s)
}
