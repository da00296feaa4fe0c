//! Modulo-10 line checksum and record validation

use crate::{ValidationError, CHECKSUM_COLUMN, SATELLITE_ID_COLUMNS, TLE_LINE_LEN};

/// Sum of the line's digits, counting `-` as 1 and anything else as 0, over
/// columns `0..68`, modulo 10.
pub fn checksum(line: &str) -> u8 {
    let sum: u32 = line
        .bytes()
        .take(CHECKSUM_COLUMN)
        .map(|b| match b {
            b'-' => 1,
            b'0'..=b'9' => u32::from(b - b'0'),
            _ => 0,
        })
        .sum();
    (sum % 10) as u8
}

/// True when the check digit in column 68 matches [`checksum`].
///
/// A line without a digit in column 68 never verifies.
pub fn verify_checksum(line: &str) -> bool {
    match line.as_bytes().get(CHECKSUM_COLUMN) {
        Some(b @ b'0'..=b'9') => b - b'0' == checksum(line),
        _ => false,
    }
}

/// Validate a pair of data lines.
///
/// Checks, in order: both lines are exactly 69 characters, the line number
/// markers, matching satellite IDs, and both checksums. The first failure is
/// returned.
pub fn validate(line1: &str, line2: &str) -> Result<(), ValidationError> {
    let lines = [(1, line1), (2, line2)];

    for (n, line) in lines {
        if line.len() != TLE_LINE_LEN {
            return Err(ValidationError::Length {
                line: n,
                len: line.len(),
            });
        }
    }

    for (n, line) in lines {
        let marker = char::from(b'0' + n);
        let found = line.chars().next().unwrap_or(' ');
        if found != marker {
            return Err(ValidationError::LineNumber { line: n, found });
        }
    }

    // Both lengths are known to be 69 bytes here. Compare bytes so a column
    // boundary inside a multi-byte character can't hide a mismatch.
    let id1 = &line1.as_bytes()[SATELLITE_ID_COLUMNS];
    let id2 = &line2.as_bytes()[SATELLITE_ID_COLUMNS];
    if id1 != id2 {
        return Err(ValidationError::IdMismatch {
            line1: String::from_utf8_lossy(id1).into_owned(),
            line2: String::from_utf8_lossy(id2).into_owned(),
        });
    }

    for (n, line) in lines {
        if !verify_checksum(line) {
            return Err(ValidationError::Checksum {
                line: n,
                expected: char::from(line.as_bytes()[CHECKSUM_COLUMN]),
                computed: checksum(line),
            });
        }
    }

    Ok(())
}
