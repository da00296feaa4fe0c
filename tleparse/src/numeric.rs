//! Deferred numeric conversion of text fields

use crate::{epoch::full_year, TleError};
use std::fmt::Display;
use tletypes::prelude::*;

pub fn parse_float<F: Display>(field: F, value: &str) -> Result<f64, TleError> {
    value.parse::<f64>().map_err(|_| invalid(field, value))
}

pub fn parse_int<F: Display>(field: F, value: &str) -> Result<i64, TleError> {
    value.parse::<i64>().map_err(|_| invalid(field, value))
}

fn parse_uint<F: Display>(field: F, value: &str) -> Result<u64, TleError> {
    value.parse::<u64>().map_err(|_| invalid(field, value))
}

fn invalid<F: Display>(field: F, value: &str) -> TleError {
    TleError::InvalidNumber {
        field: field.to_string(),
        value: value.to_owned(),
    }
}

pub trait Line1Ext {
    fn catalog_number_value(&self) -> Result<u64, TleError>;

    /// Four-digit epoch year
    fn epoch_full_year(&self) -> Result<i32, TleError>;

    fn ephemeris_type_value(&self) -> Result<u64, TleError>;

    fn element_set_number_value(&self) -> Result<u64, TleError>;
}

impl Line1Ext for Line1 {
    fn catalog_number_value(&self) -> Result<u64, TleError> {
        parse_uint(Line1Field::CatalogNumber, &self.catalog_number)
    }

    fn epoch_full_year(&self) -> Result<i32, TleError> {
        let yy = parse_uint(Line1Field::EpochYear, &self.epoch_year)?;
        if self.epoch_year.len() != 2 {
            return Err(invalid(Line1Field::EpochYear, &self.epoch_year));
        }
        Ok(full_year(yy as u32))
    }

    fn ephemeris_type_value(&self) -> Result<u64, TleError> {
        parse_uint(Line1Field::EphemerisType, &self.ephemeris_type)
    }

    fn element_set_number_value(&self) -> Result<u64, TleError> {
        parse_uint(Line1Field::ElementSetNumber, &self.element_set_number)
    }
}

pub trait Line2Ext {
    fn catalog_number_value(&self) -> Result<u64, TleError>;

    /// [deg]
    fn inclination_deg(&self) -> Result<f64, TleError>;

    /// [deg]
    fn right_ascension_deg(&self) -> Result<f64, TleError>;

    fn eccentricity_value(&self) -> Result<f64, TleError>;

    /// [deg]
    fn argument_of_perigee_deg(&self) -> Result<f64, TleError>;

    /// [deg]
    fn mean_anomaly_deg(&self) -> Result<f64, TleError>;

    /// [rev/day]
    fn mean_motion_rev_per_day(&self) -> Result<f64, TleError>;

    fn revolution_number_value(&self) -> Result<u64, TleError>;
}

impl Line2Ext for Line2 {
    fn catalog_number_value(&self) -> Result<u64, TleError> {
        parse_uint(Line2Field::CatalogNumber, &self.catalog_number)
    }

    fn inclination_deg(&self) -> Result<f64, TleError> {
        parse_float(Line2Field::Inclination, &self.inclination)
    }

    fn right_ascension_deg(&self) -> Result<f64, TleError> {
        parse_float(Line2Field::RightAscension, &self.right_ascension)
    }

    fn eccentricity_value(&self) -> Result<f64, TleError> {
        parse_float(Line2Field::Eccentricity, &self.eccentricity)
    }

    fn argument_of_perigee_deg(&self) -> Result<f64, TleError> {
        parse_float(Line2Field::ArgumentOfPerigee, &self.argument_of_perigee)
    }

    fn mean_anomaly_deg(&self) -> Result<f64, TleError> {
        parse_float(Line2Field::MeanAnomaly, &self.mean_anomaly)
    }

    fn mean_motion_rev_per_day(&self) -> Result<f64, TleError> {
        parse_float(Line2Field::MeanMotion, &self.mean_motion)
    }

    fn revolution_number_value(&self) -> Result<u64, TleError> {
        parse_uint(Line2Field::RevolutionNumber, &self.revolution_number)
    }
}
