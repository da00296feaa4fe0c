//! Parser, validator and epoch resolver for two-line element sets

use std::ops::Range;

pub use crate::assembler::{parse_tle, parse_tles, read_tles, AssemblerConfig, TleAssembler};
pub use crate::calendar::{
    day_of_year_to_month_day, days_to_mdhms, is_leap_year, normalize_angle, MonthDayTime,
};
pub use crate::checksum::{checksum, validate, verify_checksum};
pub use crate::epoch::{epoch_from_parts, full_year, resolve_epoch, EpochExt};
pub use crate::error::{ReadError, TleError, ValidationError};
pub use crate::fields::{parse_line1, parse_line2, LINE1_COLUMNS, LINE2_COLUMNS};
pub use crate::notation::normalize_sci_notation;
pub use crate::numeric::{parse_float, parse_int, Line1Ext, Line2Ext};
pub use tletypes::prelude::*;

pub mod assembler;
pub mod calendar;
pub mod checksum;
pub mod epoch;
pub mod error;
pub mod fields;
pub mod notation;
pub mod numeric;

pub const TLE_LINE_LEN: usize = 69;
pub const CHECKSUM_COLUMN: usize = 68;
pub const SATELLITE_ID_COLUMNS: Range<usize> = 2..7;
pub const LINE1_PREFIX: &str = "1 ";
pub const LINE2_PREFIX: &str = "2 ";

/// Two-digit years at or above this are in the 1900s
pub const CENTURY_PIVOT: u32 = 57;
pub const SECONDS_PER_DAY: f64 = 86_400.0;
pub const NANOS_PER_DAY: f64 = SECONDS_PER_DAY * 1e9;
