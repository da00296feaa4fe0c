use chrono::{DateTime, Utc};

/// Absolute instant in UTC, nanosecond resolution
pub type UtcTimestamp = DateTime<Utc>;
