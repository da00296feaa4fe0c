//! Fixed-width field extraction for TLE data lines

use crate::{notation::normalize_sci_notation, TleError, TLE_LINE_LEN};
use tletypes::prelude::*;

/// Post-processing applied to a trimmed column value
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum PostProcess {
    /// Keep the trimmed text
    Text,
    /// Implicit-decimal exponential token, see [`normalize_sci_notation`]
    SciNotation,
    /// Restore the implied leading "0."
    LeadingDecimal,
}

impl PostProcess {
    pub fn apply(self, value: &str) -> String {
        match self {
            PostProcess::Text => value.to_owned(),
            PostProcess::SciNotation => normalize_sci_notation(value),
            PostProcess::LeadingDecimal => format!("0.{value}"),
        }
    }
}

/// A field's position on the line, `start..end`
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Column<F> {
    pub field: F,
    pub start: usize,
    pub end: usize,
    pub post: PostProcess,
}

const fn col<F>(field: F, start: usize, end: usize, post: PostProcess) -> Column<F> {
    Column {
        field,
        start,
        end,
        post,
    }
}

impl<F> Column<F> {
    /// Slice, trim and post-process this column of `line`
    pub fn extract(&self, line: &str, line_number: u8) -> Result<String, TleError> {
        let value = line
            .get(self.start..self.end)
            .ok_or(TleError::InvalidColumn {
                line: line_number,
                start: self.start,
                end: self.end,
            })?;
        Ok(self.post.apply(value.trim()))
    }
}

pub const LINE1_COLUMNS: [Column<Line1Field>; 14] = {
    use Line1Field::*;
    use PostProcess::*;
    [
        col(LineNumber, 0, 1, Text),
        col(CatalogNumber, 2, 7, Text),
        col(Classification, 7, 8, Text),
        col(LaunchYear, 9, 11, Text),
        col(LaunchNumber, 11, 14, Text),
        col(LaunchPiece, 14, 17, Text),
        col(EpochYear, 18, 20, Text),
        col(EpochDay, 20, 32, Text),
        col(FirstDerivative, 33, 43, SciNotation),
        col(SecondDerivative, 44, 52, SciNotation),
        col(Bstar, 53, 61, SciNotation),
        col(EphemerisType, 62, 63, Text),
        col(ElementSetNumber, 64, 68, Text),
        col(Checksum, 68, 69, Text),
    ]
};

pub const LINE2_COLUMNS: [Column<Line2Field>; 10] = {
    use Line2Field::*;
    use PostProcess::*;
    [
        col(LineNumber, 0, 1, Text),
        col(CatalogNumber, 2, 7, Text),
        col(Inclination, 8, 16, Text),
        col(RightAscension, 17, 25, Text),
        col(Eccentricity, 26, 33, LeadingDecimal),
        col(ArgumentOfPerigee, 34, 42, Text),
        col(MeanAnomaly, 43, 51, Text),
        col(MeanMotion, 52, 63, Text),
        col(RevolutionNumber, 63, 68, Text),
        col(Checksum, 68, 69, Text),
    ]
};

/// Extract the fields of TLE line 1.
///
/// Only the length is checked; line number, checksum and the rest are
/// left to [`validate`](crate::validate).
pub fn parse_line1(line: &str) -> Result<Line1, TleError> {
    check_len(line, 1)?;

    let mut l1 = Line1 {
        raw: line.to_owned(),
        ..Default::default()
    };
    for column in LINE1_COLUMNS.iter() {
        *line1_slot(&mut l1, column.field) = column.extract(line, 1)?;
    }
    Ok(l1)
}

/// Extract the fields of TLE line 2. See [`parse_line1`].
pub fn parse_line2(line: &str) -> Result<Line2, TleError> {
    check_len(line, 2)?;

    let mut l2 = Line2 {
        raw: line.to_owned(),
        ..Default::default()
    };
    for column in LINE2_COLUMNS.iter() {
        *line2_slot(&mut l2, column.field) = column.extract(line, 2)?;
    }
    Ok(l2)
}

fn check_len(line: &str, line_number: u8) -> Result<(), TleError> {
    if line.len() < TLE_LINE_LEN {
        Err(TleError::LineTooShort {
            line: line_number,
            len: line.len(),
        })
    } else {
        Ok(())
    }
}

fn line1_slot(l1: &mut Line1, field: Line1Field) -> &mut String {
    use Line1Field::*;
    match field {
        LineNumber => &mut l1.line_number,
        CatalogNumber => &mut l1.catalog_number,
        Classification => &mut l1.classification,
        LaunchYear => &mut l1.launch_year,
        LaunchNumber => &mut l1.launch_number,
        LaunchPiece => &mut l1.launch_piece,
        EpochYear => &mut l1.epoch_year,
        EpochDay => &mut l1.epoch_day,
        FirstDerivative => &mut l1.first_derivative,
        SecondDerivative => &mut l1.second_derivative,
        Bstar => &mut l1.bstar,
        EphemerisType => &mut l1.ephemeris_type,
        ElementSetNumber => &mut l1.element_set_number,
        Checksum => &mut l1.checksum,
    }
}

fn line2_slot(l2: &mut Line2, field: Line2Field) -> &mut String {
    use Line2Field::*;
    match field {
        LineNumber => &mut l2.line_number,
        CatalogNumber => &mut l2.catalog_number,
        Inclination => &mut l2.inclination,
        RightAscension => &mut l2.right_ascension,
        Eccentricity => &mut l2.eccentricity,
        ArgumentOfPerigee => &mut l2.argument_of_perigee,
        MeanAnomaly => &mut l2.mean_anomaly,
        MeanMotion => &mut l2.mean_motion,
        RevolutionNumber => &mut l2.revolution_number,
        Checksum => &mut l2.checksum,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ISS_L1: &str = "1 25544U 98067A   08264.51782528 -.00002182  00000-0 -11606-4 0  2927";
    const ISS_L2: &str = "2 25544  51.6416 247.4627 0006703 130.5360 325.0288 15.72125391563537";

    #[test]
    fn line1_fields() {
        let l1 = parse_line1(ISS_L1).unwrap();
        assert_eq!(l1.line_number, "1");
        assert_eq!(l1.catalog_number, "25544");
        assert_eq!(l1.classification, "U");
        assert_eq!(l1.launch_year, "98");
        assert_eq!(l1.launch_number, "067");
        assert_eq!(l1.launch_piece, "A");
        assert_eq!(l1.epoch_year, "08");
        assert_eq!(l1.epoch_day, "264.51782528");
        assert_eq!(l1.first_derivative, "-.000021e82");
        assert_eq!(l1.second_derivative, "0.0000e-0");
        assert_eq!(l1.bstar, "-1.1606e-4");
        assert_eq!(l1.ephemeris_type, "0");
        assert_eq!(l1.element_set_number, "292");
        assert_eq!(l1.checksum, "7");
        assert_eq!(l1.raw, ISS_L1);
    }

    #[test]
    fn line2_fields() {
        let l2 = parse_line2(ISS_L2).unwrap();
        assert_eq!(l2.line_number, "2");
        assert_eq!(l2.catalog_number, "25544");
        assert_eq!(l2.inclination, "51.6416");
        assert_eq!(l2.right_ascension, "247.4627");
        assert_eq!(l2.eccentricity, "0.0006703");
        assert_eq!(l2.argument_of_perigee, "130.5360");
        assert_eq!(l2.mean_anomaly, "325.0288");
        assert_eq!(l2.mean_motion, "15.72125391");
        assert_eq!(l2.revolution_number, "56353");
        assert_eq!(l2.checksum, "7");
        assert_eq!(l2.raw, ISS_L2);
    }

    #[test]
    fn too_short() {
        assert_eq!(
            parse_line1(&ISS_L1[..68]),
            Err(TleError::LineTooShort { line: 1, len: 68 })
        );
        assert_eq!(
            parse_line2(""),
            Err(TleError::LineTooShort { line: 2, len: 0 })
        );
    }

    #[test]
    fn only_length_is_checked() {
        // Line 2 text run through the line 1 extractor
        let l1 = parse_line1(ISS_L2).unwrap();
        assert_eq!(l1.line_number, "2");

        let long = format!("{ISS_L2}   trailing");
        let l2 = parse_line2(&long).unwrap();
        assert_eq!(l2.checksum, "7");
        assert_eq!(l2.raw, long);
    }

    #[test]
    fn multibyte_column_boundary() {
        let line = format!("1 2554é{}", &ISS_L1[8..]);
        assert_eq!(
            parse_line1(&line),
            Err(TleError::InvalidColumn {
                line: 1,
                start: 2,
                end: 7
            })
        );
    }

    #[test]
    fn columns_are_ordered_and_disjoint() {
        for w in LINE1_COLUMNS.windows(2) {
            assert!(w[0].end <= w[1].start);
        }
        for w in LINE2_COLUMNS.windows(2) {
            assert!(w[0].end <= w[1].start);
        }
        assert_eq!(LINE1_COLUMNS.last().map(|c| c.end), Some(TLE_LINE_LEN));
        assert_eq!(LINE2_COLUMNS.last().map(|c| c.end), Some(TLE_LINE_LEN));
    }
}
