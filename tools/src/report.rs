//! Rendering of assembled records for `tle-dump`

use crate::config::{Output, OutputFormat};
use serde::Serialize;
use std::io::{self, Write};
use tleparse::{
    days_to_mdhms, parse_float, EpochExt, Line1Ext, Line1Field, MonthDayTime, Tle, TleError,
    UtcTimestamp,
};

#[derive(Serialize)]
struct JsonRecord<'a> {
    #[serde(flatten)]
    tle: &'a Tle,
    #[serde(skip_serializing_if = "Option::is_none")]
    epoch: Option<UtcTimestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    epoch_error: Option<String>,
}

pub fn write_report<W: Write>(out: &mut W, tles: &[Tle], output: &Output) -> io::Result<()> {
    for tle in tles {
        match output.format {
            OutputFormat::Text => {
                writeln!(out, "{tle}")?;
                if output.show_epoch {
                    match tle.epoch() {
                        Ok(epoch) => writeln!(out, "epoch: {epoch}")?,
                        Err(e) => writeln!(out, "epoch: invalid ({e})")?,
                    }
                }
            }
            OutputFormat::Json => {
                let (epoch, epoch_error) = match output.show_epoch.then(|| tle.epoch()) {
                    Some(Ok(epoch)) => (Some(epoch), None),
                    Some(Err(e)) => (None, Some(e.to_string())),
                    None => (None, None),
                };
                let record = JsonRecord {
                    tle,
                    epoch,
                    epoch_error,
                };
                serde_json::to_writer(&mut *out, &record)?;
                writeln!(out)?;
            }
        }
    }
    Ok(())
}

/// Calendar breakdown of a record's epoch
pub fn epoch_fields(tle: &Tle) -> Result<(i32, MonthDayTime), TleError> {
    let year = tle.line1.epoch_full_year()?;
    let days = parse_float(Line1Field::EpochDay, &tle.line1.epoch_day)?;
    Ok((year, days_to_mdhms(year, days)?))
}

pub fn write_summary<W: Write>(out: &mut W, tles: &[Tle]) -> io::Result<()> {
    writeln!(out, "records: {}", tles.len())?;
    let Some(first) = tles.first() else {
        return Ok(());
    };
    writeln!(out, "first: '{}' ({})", first.name, first.norad_id)?;
    match epoch_fields(first) {
        Ok((year, t)) => writeln!(
            out,
            "first epoch: year {} month {} day {} hour {} minute {} second {:.6}",
            year, t.month, t.day, t.hour, t.minute, t.second
        ),
        Err(e) => writeln!(out, "first epoch: invalid ({e})"),
    }
}
