//! Date display utilities.

use std::fmt;

use jiff::civil::Date;

/// A wrapper around an optional plan date for terminal output.
///
/// Dates print as `YYYY-MM-DD`; a missing date prints as `-`.
pub struct DisplayDate<'a>(pub &'a Option<Date>);

impl fmt::Display for DisplayDate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(date) => write!(f, "{}", date.strftime("%Y-%m-%d")),
            None => write!(f, "-"),
        }
    }
}
