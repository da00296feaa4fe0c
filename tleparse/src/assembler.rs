//! Groups text lines into records
//!
//! A record is an optional name line followed by line 1 and line 2:
//!
//! ```text
//! ISS (ZARYA)
//! 1 25544U 98067A   08264.51782528 -.00002182  00000-0 -11606-4 0  2927
//! 2 25544  51.6416 247.4627 0006703 130.5360 325.0288 15.72125391563537
//! ```
//!
//! A line starting with `"1 "` is parsed as line 1, a line starting with
//! `"2 "` as line 2 (which closes the record), blank lines are skipped and
//! anything else is remembered as the name of the next record. A name or line 1 still pending when the input
//! ends is dropped.

use crate::{
    fields::{parse_line1, parse_line2},
    validate, ReadError, TleError, LINE1_PREFIX, LINE2_PREFIX,
};
use std::io::BufRead;
use tletypes::prelude::*;
use tracing::{debug, trace};

#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct AssemblerConfig {
    /// Run [`validate`] on every record's data lines before accepting it
    pub validate: bool,
}

#[derive(Clone, Debug, Default)]
pub struct TleAssembler {
    config: AssemblerConfig,
    name: Option<String>,
    line1: Option<Line1>,
    records: Vec<Tle>,
}

impl TleAssembler {
    pub fn new(config: AssemblerConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Feed the next line, without its line terminator
    pub fn push_line(&mut self, line: &str) -> Result<(), TleError> {
        if line.starts_with(LINE1_PREFIX) {
            let line1 = parse_line1(line)?;
            if let Some(prev) = self.line1.replace(line1) {
                debug!(
                    catalog = %prev.catalog_number,
                    "Line 1 replaced before its line 2"
                );
            }
        } else if line.starts_with(LINE2_PREFIX) {
            let line2 = parse_line2(line)?;
            let norad_id = norad_id(line);
            let line1 = self.line1.take().ok_or_else(|| TleError::OrphanLine2 {
                catalog: norad_id.clone(),
            })?;

            if self.config.validate {
                if let Err(e) = validate(&line1.raw, &line2.raw) {
                    debug!(catalog = %norad_id, error = %e, "Record failed validation");
                    return Err(e.into());
                }
            }

            let tle = Tle {
                name: self.name.take().unwrap_or_default(),
                norad_id,
                line1,
                line2,
            };
            trace!(catalog = %tle.norad_id, name = %tle.name, "Record assembled");
            self.records.push(tle);
        } else if !line.trim().is_empty() {
            self.name = Some(line.trim().to_owned());
        }
        Ok(())
    }

    /// Records assembled so far, in input order
    pub fn records(&self) -> &[Tle] {
        &self.records
    }

    /// True when a name or line 1 is waiting for its line 2
    pub fn has_pending(&self) -> bool {
        self.name.is_some() || self.line1.is_some()
    }

    /// Finish assembly. A pending name or line 1 is dropped.
    pub fn finish(self) -> Vec<Tle> {
        if self.has_pending() {
            debug!(
                name = ?self.name,
                catalog = ?self.line1.as_ref().map(|l| l.catalog_number.as_str()),
                "Dropping incomplete trailing record"
            );
        }
        self.records
    }
}

/// Build one record from its name (may be empty) and data lines.
///
/// Like the assembler, this only extracts fields; use [`validate`] for the
/// structural checks.
pub fn parse_tle(name: &str, line1: &str, line2: &str) -> Result<Tle, TleError> {
    Ok(Tle {
        name: name.trim().to_owned(),
        norad_id: norad_id(line2),
        line1: parse_line1(line1)?,
        line2: parse_line2(line2)?,
    })
}

/// Second whitespace-separated token of line 2
fn norad_id(line2: &str) -> CatalogNumber {
    line2
        .split_whitespace()
        .nth(1)
        .unwrap_or_default()
        .to_owned()
}

/// Read every record from a line source.
///
/// Any I/O or parse error aborts the read; no partial result is returned.
pub fn read_tles<R: BufRead>(reader: R, config: AssemblerConfig) -> Result<Vec<Tle>, ReadError> {
    let mut assembler = TleAssembler::new(config);
    for line in reader.lines() {
        let line = line?;
        assembler.push_line(line.trim_end_matches('\r'))?;
    }
    Ok(assembler.finish())
}

/// Parse every record of an in-memory TLE set. See [`read_tles`].
pub fn parse_tles(set: &str, config: AssemblerConfig) -> Result<Vec<Tle>, TleError> {
    let mut assembler = TleAssembler::new(config);
    for line in set.lines() {
        assembler.push_line(line)?;
    }
    Ok(assembler.finish())
}
