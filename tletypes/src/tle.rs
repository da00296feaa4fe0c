use crate::{line1::Line1, line2::Line2};
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// NORAD catalog number, kept as text
pub type CatalogNumber = String;

/// A two-line element set
/// https://en.wikipedia.org/wiki/Two-line_element_set
///
/// Records are plain values: an updated ephemeris is a new `Tle`, there is no
/// in-place update.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Display, Serialize, Deserialize)]
#[display(fmt = "{}\n{}\n{}", "name", "line1", "line2")]
pub struct Tle {
    /// Title line, empty for two-line records
    pub name: String,

    /// Catalog number recovered from line 2
    pub norad_id: CatalogNumber,

    pub line1: Line1,
    pub line2: Line2,
}
