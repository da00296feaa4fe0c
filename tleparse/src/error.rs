use std::io;

/// Errors produced while extracting fields or resolving an epoch
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum TleError {
    #[error("Line {line} too short: {len} chars")]
    LineTooShort { line: u8, len: usize },
    #[error("Line {line} columns {start}..{end} do not fall on character boundaries")]
    InvalidColumn { line: u8, start: usize, end: usize },
    #[error("Invalid TLE epoch format '{0}', expected YYDDD.FFFFFFFF")]
    InvalidEpochFormat(String),
    #[error("TLE epoch out of range: {0}")]
    EpochOutOfRange(String),
    #[error("Invalid {field} value '{value}'")]
    InvalidNumber { field: String, value: String },
    #[error("Line 2 for catalog number '{catalog}' has no preceding line 1")]
    OrphanLine2 { catalog: String },
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Record-level validation failures, one kind per check
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Line {line} length must be 69 characters, got {len}")]
    Length { line: u8, len: usize },
    #[error("Line {line} must start with '{line}', got '{found}'")]
    LineNumber { line: u8, found: char },
    #[error("Satellite IDs do not match between lines: '{line1}' vs '{line2}'")]
    IdMismatch { line1: String, line2: String },
    #[error("Checksum failed on line {line}: expected '{expected}', computed {computed}")]
    Checksum {
        line: u8,
        expected: char,
        computed: u8,
    },
}

/// Errors from reading records out of a line source
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Tle(#[from] TleError),
}

impl From<ValidationError> for ReadError {
    fn from(e: ValidationError) -> Self {
        ReadError::Tle(e.into())
    }
}
