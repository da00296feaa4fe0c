use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Names of the fixed-width columns of TLE line 2
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Display)]
pub enum Line2Field {
    #[display(fmt = "line number")]
    LineNumber,
    #[display(fmt = "catalog number")]
    CatalogNumber,
    #[display(fmt = "inclination")]
    Inclination,
    #[display(fmt = "right ascension of the ascending node")]
    RightAscension,
    #[display(fmt = "eccentricity")]
    Eccentricity,
    #[display(fmt = "argument of perigee")]
    ArgumentOfPerigee,
    #[display(fmt = "mean anomaly")]
    MeanAnomaly,
    #[display(fmt = "mean motion")]
    MeanMotion,
    #[display(fmt = "revolution number")]
    RevolutionNumber,
    #[display(fmt = "checksum")]
    Checksum,
}

/// TLE line 2
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default, Display, Serialize, Deserialize)]
#[display(fmt = "{}", "raw")]
pub struct Line2 {
    /// Always "2" for a well-formed line
    pub line_number: String,
    pub catalog_number: String,

    /// [deg]
    pub inclination: String,
    /// Right ascension of the ascending node [deg]
    pub right_ascension: String,
    /// With the implied leading "0." restored
    pub eccentricity: String,
    /// [deg]
    pub argument_of_perigee: String,
    /// [deg]
    pub mean_anomaly: String,
    /// [rev/day]
    pub mean_motion: String,
    /// Revolution number at epoch
    pub revolution_number: String,

    pub checksum: String,

    /// The line exactly as it was read
    pub raw: String,
}

impl Line2 {
    pub fn field(&self, field: Line2Field) -> &str {
        use Line2Field::*;
        match field {
            LineNumber => &self.line_number,
            CatalogNumber => &self.catalog_number,
            Inclination => &self.inclination,
            RightAscension => &self.right_ascension,
            Eccentricity => &self.eccentricity,
            ArgumentOfPerigee => &self.argument_of_perigee,
            MeanAnomaly => &self.mean_anomaly,
            MeanMotion => &self.mean_motion,
            RevolutionNumber => &self.revolution_number,
            Checksum => &self.checksum,
        }
    }
}
