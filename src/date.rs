//! Calendar-independant date.

use std::ops::{Add, Sub};

use chrono::{Datelike, NaiveDate};

/// Julian day number of 0001-01-01 minus one, i.e. the JDN of CE day 0.
const JDN_CE_DAY_ZERO: i32 = 1_721_425;

/// A calendar-independant date.
///
/// Supported range begins from January 1, 4713 BC, proleptic Julian calendar.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Date {
    jdn: u32,
}

impl Date {
    /// Creates a `Date` with a Julian day number (JDN).
    pub fn from_jdn(jdn: u32) -> Self {
        Self { jdn }
    }
    /// Returns the Julian day number (JDN) of the date.
    pub fn jdn(&self) -> u32 {
        self.jdn
    }

    /// Creates a `Date` with a proleptic Gregorian calendar date.
    ///
    /// `year` should be an astronomical year number, i.e. 1 BC is `0`, 2
    /// BC is `-1`, etc.
    ///
    /// Returns `None` if `month` or `day` does not name a real day of that
    /// year, or if the result date is out of supported range.
    ///
    /// # Example
    ///
    /// ```
    /// use nongli::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!(2451545, date.jdn());
    ///
    /// assert_eq!(None, Date::from_gregorian(2021, 2, 29));
    /// ```
    pub fn from_gregorian(year: i32, month: i32, day: i32) -> Option<Self> {
        if !is_valid_gregorian(year, month, day) {
            return None;
        }
        let (y, m, d) = (year as i64, month as i64, day as i64);
        u32::try_from(
            (1461 * (y + 4800 + (m - 14) / 12)) / 4 + (367 * (m - 2 - 12 * ((m - 14) / 12))) / 12
                - (3 * ((y + 4900 + (m - 14) / 12) / 100)) / 4
                + d
                - 32075,
        )
        .map(Self::from_jdn)
        .ok()
    }
    /// Represents the date in Gregorian calendar.
    ///
    /// Returns in `(year, month, day)` format.
    ///
    /// # Example
    ///
    /// ```
    /// use nongli::Date;
    ///
    /// let date = Date::from_jdn(2451545);
    /// assert_eq!((2000, 1, 1), date.gregorian());
    /// ```
    pub fn gregorian(&self) -> (i32, i32, i32) {
        let jdn = self.jdn as i64;
        let f = jdn + 1401 + (((4 * jdn + 274277) / 146097) * 3) / 4 - 38;
        let e = 4 * f + 3;
        let g = (e % 1461) / 4;
        let h = 5 * g + 2;
        let day = (h % 153) / 5 + 1;
        let month = (h / 153 + 2) % 12 + 1;
        let year = e / 1461 - 4716 + (12 + 2 - month) / 12;
        (year as i32, month as i32, day as i32)
    }
    /// Formats the date in ISO 8601 format.
    ///
    /// # Example
    ///
    /// ```
    /// use nongli::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!("2000-01-01", date.iso_gregorian());
    /// ```
    pub fn iso_gregorian(&self) -> String {
        let (y, m, d) = self.gregorian();
        format!("{:04}-{:02}-{:02}", y, m, d)
    }

    /// Converts a [`chrono::NaiveDate`] into a `Date`.
    ///
    /// Returns `None` for dates before the start of the supported range.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use nongli::Date;
    ///
    /// let naive = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
    /// assert_eq!(2451545, Date::from_naive_date(naive).unwrap().jdn());
    /// ```
    pub fn from_naive_date(date: NaiveDate) -> Option<Self> {
        u32::try_from(date.num_days_from_ce() as i64 + JDN_CE_DAY_ZERO as i64)
            .ok()
            .map(Self::from_jdn)
    }
    /// Converts the date into a [`chrono::NaiveDate`].
    ///
    /// Returns `None` if the date is outside the range `chrono` represents.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        let days = i32::try_from(self.jdn as i64 - JDN_CE_DAY_ZERO as i64).ok()?;
        NaiveDate::from_num_days_from_ce_opt(days)
    }
}

impl Add<i32> for Date {
    type Output = Date;
    fn add(self, rhs: i32) -> Self::Output {
        Date::from_jdn(if rhs >= 0 {
            self.jdn + rhs as u32
        } else {
            self.jdn - rhs.wrapping_neg() as u32
        })
    }
}
impl Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> Self::Output {
        self.jdn as i32 - rhs.jdn as i32
    }
}

/// Indicates whether a year is a leap year or common year.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum YearType {
    Common,
    Leap,
}

impl YearType {
    /// Determines if `year` is a leap year in Gregorian calendar.
    pub fn from_gregorian(year: i32) -> Self {
        if year % 4 == 0 && year % 100 != 0 || year % 400 == 0 {
            Self::Leap
        } else {
            Self::Common
        }
    }
    /// Returns `true` if `self` is `Leap`, otherwise `false`.
    pub fn is_leap(&self) -> bool {
        matches!(self, YearType::Leap)
    }
}

/// Checks that `month` and `day` name a real day of the proleptic Gregorian
/// `year`, regardless of whether a `Date` can represent it.
pub fn is_valid_gregorian(year: i32, month: i32, day: i32) -> bool {
    (1..=12).contains(&month)
        && day >= 1
        && day <= days_in_month(month, YearType::from_gregorian(year))
}

fn days_in_month(month: i32, year_type: YearType) -> i32 {
    match month {
        2 => 28 + year_type.is_leap() as i32,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() {
        let date = Date::from_jdn(2440588);
        assert_eq!(2440588, date.jdn());
    }

    #[test]
    fn from_gregorian() {
        let date = Date::from_gregorian(1970, 1, 1).unwrap();
        assert_eq!(2440588, date.jdn());
        let date = Date::from_gregorian(2021, 9, 8).unwrap();
        assert_eq!(2459466, date.jdn());
        let date = Date::from_gregorian(1900, 1, 31).unwrap();
        assert_eq!(2415051, date.jdn());
    }

    #[test]
    fn rejects_impossible_days() {
        for (y, m, d) in [
            (2021, 2, 29),
            (1900, 2, 29),
            (2021, 4, 31),
            (2021, 0, 1),
            (2021, 13, 1),
            (2021, 1, 0),
            (2021, 1, 32),
        ] {
            assert_eq!(None, Date::from_gregorian(y, m, d), "{y:04}-{m:02}-{d:02}");
        }
        assert!(Date::from_gregorian(2000, 2, 29).is_some());
        assert!(Date::from_gregorian(2020, 2, 29).is_some());
    }

    #[test]
    fn extreme_years() {
        let date = Date::from_gregorian(2_000_000, 1, 1).unwrap();
        assert_eq!((2_000_000, 1, 1), date.gregorian());
        assert_eq!(None, Date::from_gregorian(-5000, 1, 1));
        assert_eq!(None, Date::from_gregorian(i32::MAX, 1, 1));
        assert_eq!(None, Date::from_gregorian(i32::MIN, 1, 1));
        assert!(is_valid_gregorian(i32::MAX, 12, 31));
        assert!(!is_valid_gregorian(i32::MAX, 2, 30));
    }

    #[test]
    fn to_gregorian() {
        let date = Date::from_jdn(2440588);
        assert_eq!((1970, 1, 1), date.gregorian());
        let date = Date::from_jdn(2459466);
        assert_eq!((2021, 9, 8), date.gregorian());
        let date = Date::from_jdn(2451545);
        assert_eq!((2000, 1, 1), date.gregorian());
    }

    #[test]
    fn arithmetic() {
        let date = Date::from_gregorian(2020, 12, 31).unwrap();
        assert_eq!("2021-01-01", (date + 1).iso_gregorian());
        assert_eq!("2020-12-01", (date + -30).iso_gregorian());
        let (a, b) = (
            Date::from_gregorian(2021, 1, 1).unwrap(),
            Date::from_gregorian(2020, 1, 1).unwrap(),
        );
        assert_eq!(366, a - b);
    }

    #[test]
    fn naive_date_bridge() {
        let naive = NaiveDate::from_ymd_opt(2021, 2, 12).unwrap();
        let date = Date::from_naive_date(naive).unwrap();
        assert_eq!(Date::from_gregorian(2021, 2, 12), Some(date));
        assert_eq!(Some(naive), date.to_naive_date());
    }

    #[test]
    fn iso_format() {
        assert_eq!(
            "2021-09-08",
            Date::from_gregorian(2021, 9, 8).unwrap().iso_gregorian()
        );
    }
}
