//! Error types for lunar calendar conversion.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from converting between civil and lunar dates.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LunarError {
    /// The civil triple is not a real calendar date, or the lunar
    /// (year, month, day) does not exist in its year.
    InvalidInput(&'static str),
    /// The requested year lies outside the lunar year table.
    OutOfRange {
        /// Civil or lunar year that was requested.
        year: i32,
    },
}

impl Display for LunarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::OutOfRange { year } => write!(f, "year {year} outside lunar year table"),
        }
    }
}

impl Error for LunarError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(
            "year 1899 outside lunar year table",
            LunarError::OutOfRange { year: 1899 }.to_string()
        );
        assert_eq!(
            "invalid input: no such day",
            LunarError::InvalidInput("no such day").to_string()
        );
    }
}
