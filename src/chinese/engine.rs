//! 日數推算：公曆日期與農曆年月日互換
//!
//! 以公曆 1900 年 1 月 31 日（農曆 1900 年正月初一）為曆元，日期先化為距曆元的日數，再依年表逐年、逐月扣減。

use tracing::debug;

use super::Month;
use super::table::{self, LunarYearInfo};
use crate::date::Date;
use crate::error::LunarError;

/// 曆元 1900 年 1 月 31 日的儒略日數
const EPOCH_JDN: u32 = 2_415_051;

/// 曆元日期，即農曆 1900 年正月初一。
pub fn epoch() -> Date {
    Date::from_jdn(EPOCH_JDN)
}

/// 公曆日期距曆元的日數，曆元前為負。
///
/// # 用例
///
/// ```
/// use nongli::Date;
/// use nongli::chinese::engine;
///
/// assert_eq!(0, engine::civil_to_offset(Date::from_gregorian(1900, 1, 31).unwrap()));
/// assert_eq!(-1, engine::civil_to_offset(Date::from_gregorian(1900, 1, 30).unwrap()));
/// ```
pub fn civil_to_offset(date: Date) -> i32 {
    date - epoch()
}

/// 依距曆元日數求其所在農曆年及年內月名、日序，返回 `(年資料, 月, 日)`。
///
/// 日數落在年表之外則回報 [`LunarError::OutOfRange`]。
///
/// # 用例
///
/// ```
/// use nongli::Date;
/// use nongli::chinese::{Month::*, engine};
///
/// let offset = engine::civil_to_offset(Date::from_gregorian(2020, 5, 23).unwrap());
/// let (info, month, day) = engine::offset_to_lunar(offset).unwrap();
///
/// assert_eq!((2020, Leap(4), 1), (info.year, month, day));
/// ```
pub fn offset_to_lunar(offset: i32) -> Result<(&'static LunarYearInfo, Month, u32), LunarError> {
    let years = table::all();
    let idx = years.partition_point(|info| info.new_year_offset <= offset);
    let out_of_range = || {
        let year = u32::try_from(EPOCH_JDN as i64 + offset as i64)
            .map(|jdn| Date::from_jdn(jdn).gregorian().0)
            .unwrap_or(i32::MIN);
        debug!(offset, year, "date outside lunar year table");
        LunarError::OutOfRange { year }
    };
    if idx == 0 {
        return Err(out_of_range());
    }
    let info = &years[idx - 1];
    let mut rem = offset - info.new_year_offset;
    if rem >= info.total_days as i32 {
        return Err(out_of_range());
    }

    for slot in &info.months {
        if rem < slot.days as i32 {
            return Ok((info, slot.month, rem as u32 + 1));
        }
        rem -= slot.days as i32;
    }
    unreachable!("offset {offset} not within lunar year {}", info.year)
}

/// 由農曆年月日求距曆元日數，為 [`offset_to_lunar`] 的逆運算。
///
/// 年份不在年表內回報 [`LunarError::OutOfRange`]；該年無此月（如不存在的閏月）或該月無此日則回報 [`LunarError::InvalidInput`]。
///
/// # 用例
///
/// ```
/// use nongli::chinese::{Month::*, engine};
///
/// let offset = engine::lunar_to_offset(2021, Common(1), 1).unwrap();
/// assert_eq!("2021-02-12", (engine::epoch() + offset).iso_gregorian());
/// ```
pub fn lunar_to_offset(year: i32, month: Month, day: u32) -> Result<i32, LunarError> {
    let info = LunarYearInfo::get(year)?;
    let mut offset = info.new_year_offset;
    for slot in &info.months {
        if slot.month == month {
            if !(1..=slot.days).contains(&day) {
                return Err(LunarError::InvalidInput("day not in lunar month"));
            }
            return Ok(offset + day as i32 - 1);
        }
        offset += slot.days as i32;
    }
    Err(LunarError::InvalidInput("month not in lunar year"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use Month::*;

    fn lunar(y: i32, m: i32, d: i32) -> Result<(i32, Month, u32), LunarError> {
        let offset = civil_to_offset(Date::from_gregorian(y, m, d).unwrap());
        offset_to_lunar(offset).map(|(info, month, day)| (info.year, month, day))
    }

    #[test]
    fn dates() {
        let data = [
            ((1900, 1, 31), (1900, Common(1), 1)),
            ((2016, 11, 29), (2016, Common(11), 1)),
            ((2017, 1, 27), (2016, Common(12), 30)),
            ((2017, 1, 28), (2017, Common(1), 1)),
            ((2017, 7, 22), (2017, Common(6), 29)),
            ((2017, 7, 23), (2017, Leap(6), 1)),
            ((2017, 12, 17), (2017, Common(10), 30)),
            ((2020, 5, 1), (2020, Common(4), 9)),
            ((2020, 5, 23), (2020, Leap(4), 1)),
            ((2020, 6, 20), (2020, Leap(4), 29)),
            ((2020, 6, 21), (2020, Common(5), 1)),
            ((2020, 8, 5), (2020, Common(6), 16)),
            ((2021, 7, 7), (2021, Common(5), 28)),
            ((2033, 12, 22), (2033, Leap(11), 1)),
            ((2101, 1, 28), (2100, Common(12), 29)),
        ];
        for ((y, m, d), std) in data {
            assert_eq!(Ok(std), lunar(y, m, d), "{y:04}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn boundaries_resolve_forward() {
        // 年末次日為次年正月初一
        assert_eq!(Ok((2020, Common(12), 30)), lunar(2021, 2, 11));
        assert_eq!(Ok((2021, Common(1), 1)), lunar(2021, 2, 12));
        // 月末次日為次月初一
        assert_eq!(Ok((2021, Common(5), 30)), lunar(2021, 7, 9));
        assert_eq!(Ok((2021, Common(6), 1)), lunar(2021, 7, 10));
    }

    #[test]
    fn out_of_range() {
        assert_eq!(Err(LunarError::OutOfRange { year: 1900 }), lunar(1900, 1, 30));
        assert_eq!(Err(LunarError::OutOfRange { year: 1899 }), lunar(1899, 6, 1));
        assert_eq!(Err(LunarError::OutOfRange { year: 2101 }), lunar(2101, 1, 29));
    }

    #[test]
    fn inverse() {
        for (y, m, d) in [(1900, 1, 31), (2017, 7, 23), (2020, 6, 20), (2101, 1, 28)] {
            let offset = civil_to_offset(Date::from_gregorian(y, m, d).unwrap());
            let (info, month, day) = offset_to_lunar(offset).unwrap();
            assert_eq!(Ok(offset), lunar_to_offset(info.year, month, day));
        }
    }

    #[test]
    fn inverse_rejects_missing_dates() {
        assert!(matches!(
            lunar_to_offset(2021, Leap(4), 1),
            Err(LunarError::InvalidInput(_))
        ));
        // 2017 年六月小
        assert!(matches!(
            lunar_to_offset(2017, Common(6), 30),
            Err(LunarError::InvalidInput(_))
        ));
        assert!(matches!(
            lunar_to_offset(2017, Common(6), 0),
            Err(LunarError::InvalidInput(_))
        ));
        assert_eq!(
            Err(LunarError::OutOfRange { year: 2101 }),
            lunar_to_offset(2101, Common(1), 1)
        );
    }
}
