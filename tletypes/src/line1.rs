use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Names of the fixed-width columns of TLE line 1
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Display)]
pub enum Line1Field {
    #[display(fmt = "line number")]
    LineNumber,
    #[display(fmt = "catalog number")]
    CatalogNumber,
    #[display(fmt = "classification")]
    Classification,
    #[display(fmt = "launch year")]
    LaunchYear,
    #[display(fmt = "launch number")]
    LaunchNumber,
    #[display(fmt = "launch piece")]
    LaunchPiece,
    #[display(fmt = "epoch year")]
    EpochYear,
    #[display(fmt = "epoch day")]
    EpochDay,
    #[display(fmt = "first derivative of mean motion")]
    FirstDerivative,
    #[display(fmt = "second derivative of mean motion")]
    SecondDerivative,
    #[display(fmt = "bstar")]
    Bstar,
    #[display(fmt = "ephemeris type")]
    EphemerisType,
    #[display(fmt = "element set number")]
    ElementSetNumber,
    #[display(fmt = "checksum")]
    Checksum,
}

/// TLE line 1
///
/// Every field is the trimmed text of its column. Numeric conversion is left
/// to the consumer, with the exception of the implicit-decimal fields
/// (derivatives and bstar) which hold the normalized `<mantissa>e<exponent>`
/// form.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default, Display, Serialize, Deserialize)]
#[display(fmt = "{}", "raw")]
pub struct Line1 {
    /// Always "1" for a well-formed line
    pub line_number: String,
    /// NORAD catalog number as written on this line
    pub catalog_number: String,
    /// U, C or S
    pub classification: String,

    /// International designator, last two digits of the launch year
    pub launch_year: String,
    /// International designator, launch number of the year
    pub launch_number: String,
    /// International designator, piece of the launch
    pub launch_piece: String,

    /// Two-digit epoch year
    pub epoch_year: String,
    /// Fractional day of year, kept verbatim
    pub epoch_day: String,

    /// First derivative of mean motion divided by two [rev/day^2]
    pub first_derivative: String,
    /// Second derivative of mean motion divided by six [rev/day^3]
    pub second_derivative: String,
    /// Drag term [1/earth radii]
    pub bstar: String,

    pub ephemeris_type: String,
    pub element_set_number: String,
    pub checksum: String,

    /// The line exactly as it was read
    pub raw: String,
}

impl Line1 {
    pub fn field(&self, field: Line1Field) -> &str {
        use Line1Field::*;
        match field {
            LineNumber => &self.line_number,
            CatalogNumber => &self.catalog_number,
            Classification => &self.classification,
            LaunchYear => &self.launch_year,
            LaunchNumber => &self.launch_number,
            LaunchPiece => &self.launch_piece,
            EpochYear => &self.epoch_year,
            EpochDay => &self.epoch_day,
            FirstDerivative => &self.first_derivative,
            SecondDerivative => &self.second_derivative,
            Bstar => &self.bstar,
            EphemerisType => &self.ephemeris_type,
            ElementSetNumber => &self.element_set_number,
            Checksum => &self.checksum,
        }
    }

    /// International designator, e.g. "98067A"
    pub fn international_designator(&self) -> String {
        format!(
            "{}{}{}",
            self.launch_year, self.launch_number, self.launch_piece
        )
    }
}
