pub use crate::line1::{Line1, Line1Field};
pub use crate::line2::{Line2, Line2Field};
pub use crate::time::UtcTimestamp;
pub use crate::tle::{CatalogNumber, Tle};
