//! Utilities for converting Gregorian dates into the Chinese lunisolar
//! calendar.
//!
//! Conversion relies on a precomputed table of lunar years from 1900 to 2100
//! (month lengths and leap month placement), so dates outside that span are
//! rejected rather than extrapolated. On top of the lunar year, month and day,
//! this crate derives the sexagenary (stem-branch) pillars for year, month and
//! day, the zodiac animal and the traditional festivals.
//!
//! # Examples
//!
//! Basic usage with [`Date`]:
//!
//! ```
//! use nongli::Date;
//!
//! let date = Date::from_gregorian(2000, 1, 1).unwrap();
//!
//! assert_eq!(2451545, date.jdn());
//! assert_eq!("2000-01-01", date.iso_gregorian());
//! ```
//!
//! Chinese lunisolar calendar:
//!
//! ```
//! use nongli::chinese::{LunarDate, Month::*, zodiac::Zodiac};
//!
//! let date = LunarDate::from_gregorian(2020, 5, 23).unwrap();
//!
//! assert_eq!((2020, Leap(4), 1), (date.year(), date.lunar_month(), date.day()));
//! assert_eq!("庚子", date.year_pillar().to_string());
//! assert_eq!("辛巳", date.month_pillar().to_string());
//! assert_eq!("丙寅", date.day_pillar().to_string());
//! assert_eq!(Zodiac::Rat, date.zodiac());
//! ```
//!
//! Upstream "zero" dates are passed as `None` and yield no lunar date:
//!
//! ```
//! use nongli::chinese::to_lunar;
//!
//! assert_eq!(Ok(None), to_lunar(None));
//! ```

pub mod chinese;
pub mod date;
pub mod error;

pub use chinese::{LunarDate, Month, to_lunar};
pub use date::{Date, YearType};
pub use error::LunarError;
