pub mod line1;
pub mod line2;
pub mod prelude;
pub mod time;
pub mod tle;
