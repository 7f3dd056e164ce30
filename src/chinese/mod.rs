//! Chinese calendar
//!
//! Note: 為方便處理諸多術語，本模塊文檔用中文。
//!
//! 本程序採用預製的農曆年表（見 [`table`]）推算夏曆，支持農曆 1900 年正月初一（公曆 1900-01-31）至 2100 年除夕（公曆 2101-01-28）。

use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

use chrono::NaiveDate;

use crate::date::{self, Date};
use crate::error::LunarError;

pub mod engine;
pub mod festival;
pub mod fmt;
pub mod sexagenary;
pub mod table;
pub mod zodiac;

use sexagenary::GanZhi;
use table::{FIRST_YEAR, LAST_YEAR, LunarYearInfo, MonthSlot};
use zodiac::Zodiac;

/// 月名，`Common` 為平月，`Leap` 為閏月。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Month {
    Common(u32),
    Leap(u32),
}
impl Month {
    /// 取得月序號，無論平閏。
    pub fn num(&self) -> u32 {
        use Month::*;
        *match self {
            Common(v) | Leap(v) => v,
        }
    }
    /// 閏月為 `true`，平月為 `false`
    pub fn is_leap(&self) -> bool {
        matches!(self, Self::Leap(_))
    }
    /// 取得月名的文本形式，十一、十二月稱「冬月」「腊月」。
    pub fn name(&self) -> String {
        fmt::month(*self)
    }
}

/// 農曆日期，由公曆日期推算而得，建立後不可變。
///
/// 年柱、月柱、日柱、生肖、節日均按需推算。
///
/// # 用例
///
/// ```
/// use nongli::chinese::{LunarDate, Month::*, zodiac::Zodiac};
///
/// let date = LunarDate::from_gregorian(2020, 8, 5).unwrap();
///
/// assert_eq!((2020, Common(6), 16), (date.year(), date.lunar_month(), date.day()));
/// assert_eq!("庚子", date.year_pillar().to_string());
/// assert_eq!(Zodiac::Rat, date.zodiac());
/// assert_eq!("二零二零年六月十六", date.to_string());
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct LunarDate {
    info: &'static LunarYearInfo,
    slot: MonthSlot,
    day: u32,
    date: Date,
}

impl LunarDate {
    /// 由公曆日期推算農曆日期。
    ///
    /// 日期不在年表範圍內則回報 [`LunarError::OutOfRange`]。
    pub fn from_date(date: Date) -> Result<Self, LunarError> {
        let (info, month, day) = engine::offset_to_lunar(engine::civil_to_offset(date))?;
        Ok(Self::resolved(info, month, day, date))
    }

    /// 由公曆年月日推算農曆日期。
    ///
    /// 所給年月日並非真實日期則回報 [`LunarError::InvalidInput`]；公曆年份遠在年表之外則直接回報 [`LunarError::OutOfRange`]。
    ///
    /// # 用例
    ///
    /// ```
    /// use nongli::LunarError;
    /// use nongli::chinese::LunarDate;
    ///
    /// let date = LunarDate::from_gregorian(2021, 2, 12).unwrap();
    /// assert_eq!(Some("春节"), date.festival());
    ///
    /// assert!(matches!(LunarDate::from_gregorian(2021, 2, 30), Err(LunarError::InvalidInput(_))));
    /// assert_eq!(Err(LunarError::OutOfRange { year: 1899 }), LunarDate::from_gregorian(1899, 2, 1));
    /// assert_eq!(Err(LunarError::OutOfRange { year: -5000 }), LunarDate::from_gregorian(-5000, 1, 1));
    /// ```
    pub fn from_gregorian(year: i32, month: i32, day: i32) -> Result<Self, LunarError> {
        if !date::is_valid_gregorian(year, month, day) {
            return Err(LunarError::InvalidInput("not a gregorian date"));
        }
        // 農曆 2100 年除夕在公曆 2101 年
        if !(FIRST_YEAR..=LAST_YEAR + 1).contains(&year) {
            return Err(LunarError::OutOfRange { year });
        }
        let date = Date::from_gregorian(year, month, day)
            .ok_or(LunarError::InvalidInput("not a gregorian date"))?;
        Self::from_date(date)
    }

    /// 由農曆年月日求農曆日期（及其公曆日期）。
    ///
    /// 年份不在年表內回報 [`LunarError::OutOfRange`]；該年無此月或該月無此日則回報 [`LunarError::InvalidInput`]。
    ///
    /// # 用例
    ///
    /// ```
    /// use nongli::chinese::{LunarDate, Month::*};
    ///
    /// let date = LunarDate::from_lunar(2020, Leap(4), 1).unwrap();
    /// assert_eq!((2020, 5, 23), date.to_gregorian());
    ///
    /// assert!(LunarDate::from_lunar(2021, Leap(4), 1).is_err());
    /// ```
    pub fn from_lunar(year: i32, month: Month, day: u32) -> Result<Self, LunarError> {
        let offset = engine::lunar_to_offset(year, month, day)?;
        Self::from_date(engine::epoch() + offset)
    }

    fn resolved(info: &'static LunarYearInfo, month: Month, day: u32, date: Date) -> Self {
        let slot = info
            .months
            .iter()
            .copied()
            .find(|s| s.month == month)
            .unwrap_or_else(|| unreachable!("{month:?} resolved outside lunar year {}", info.year));
        Self {
            info,
            slot,
            day,
            date,
        }
    }

    /// 農曆年（以正月初一所在公元年計）
    pub fn year(&self) -> i32 {
        self.info.year
    }
    /// 月序號 `1..=12`，閏月亦返回其平月序號。
    pub fn month(&self) -> u32 {
        self.slot.month.num()
    }
    /// 月名，區分平閏。
    pub fn lunar_month(&self) -> Month {
        self.slot.month
    }
    /// 日 `1..=30`
    pub fn day(&self) -> u32 {
        self.day
    }
    /// 是否在閏月中。
    pub fn is_leap_month(&self) -> bool {
        self.slot.month.is_leap()
    }
    /// 本年閏月序號，無閏月為 0。
    pub fn leap_month(&self) -> u32 {
        self.info.leap_month
    }
    /// 本年是否有閏月。
    pub fn is_leap_year(&self) -> bool {
        self.info.leap_month > 0
    }
    /// 本年閏月是否與所在月同序號（所在月為該平月或其閏月）。
    ///
    /// # 用例
    ///
    /// ```
    /// use nongli::chinese::LunarDate;
    ///
    /// // 2020 年閏四月，五月一日在平四月
    /// let date = LunarDate::from_gregorian(2020, 5, 1).unwrap();
    /// assert!(!date.is_leap_month());
    /// assert!(date.month_has_leap());
    /// ```
    pub fn month_has_leap(&self) -> bool {
        self.info.leap_month == self.month()
    }
    /// 所在月日數
    pub fn days_in_month(&self) -> u32 {
        self.slot.days
    }
    /// 本年日數
    pub fn days_in_year(&self) -> u32 {
        self.info.total_days
    }
    /// 是否為歲末最後一日（除夕）。
    pub fn is_last_day_of_year(&self) -> bool {
        engine::civil_to_offset(self.date) + 1 == self.info.end_offset()
    }
    /// 本年年表資料
    pub fn year_info(&self) -> &'static LunarYearInfo {
        self.info
    }

    /// 對應的公曆日期
    pub fn date(&self) -> Date {
        self.date
    }
    /// 對應的公曆年月日，格式為 `(年, 月, 日)`。
    pub fn to_gregorian(&self) -> (i32, i32, i32) {
        self.date.gregorian()
    }

    /// 年柱
    pub fn year_pillar(&self) -> GanZhi {
        sexagenary::year_pillar(self.info.year)
    }
    /// 月柱，依節氣月推算，與農曆月無關。
    pub fn month_pillar(&self) -> GanZhi {
        sexagenary::month_pillar(self.date)
    }
    /// 日柱
    pub fn day_pillar(&self) -> GanZhi {
        sexagenary::day_pillar(self.date)
    }
    /// 生肖
    pub fn zodiac(&self) -> Zodiac {
        Zodiac::from_pillar(self.year_pillar())
    }
    /// 節日，無則返回 `None`。
    pub fn festival(&self) -> Option<&'static str> {
        festival::lookup(self.slot.month, self.day, self.is_last_day_of_year())
    }

    /// 年份逐位漢字，如「二零二零」。
    pub fn to_chinese_year_string(&self) -> String {
        fmt::year(self.info.year)
    }
    /// 月名，如「闰四月」。
    pub fn to_chinese_month_string(&self) -> String {
        fmt::month(self.slot.month)
    }
    /// 日名，如「初九」。
    pub fn to_chinese_day_string(&self) -> String {
        fmt::day(self.day)
    }
}

impl Display for LunarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}年{}{}",
            self.to_chinese_year_string(),
            self.to_chinese_month_string(),
            self.to_chinese_day_string()
        )
    }
}

impl Ord for LunarDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.date.cmp(&other.date)
    }
}
impl PartialOrd for LunarDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl TryFrom<NaiveDate> for LunarDate {
    type Error = LunarError;
    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        let date = Date::from_naive_date(date)
            .ok_or(LunarError::InvalidInput("date before julian day zero"))?;
        Self::from_date(date)
    }
}

/// 轉換入口：由上游公曆日期求農曆日期。
///
/// 上游日期為空（零值或無法解析）時以 `None` 傳入，直接返回 `Ok(None)`，不查年表；日期不在年表範圍內則回報 [`LunarError::OutOfRange`]。
///
/// # 用例
///
/// ```
/// use nongli::Date;
/// use nongli::chinese::{to_lunar, Month::*};
///
/// assert_eq!(Ok(None), to_lunar(None));
///
/// let date = to_lunar(Date::from_gregorian(2021, 7, 7)).unwrap().unwrap();
/// assert_eq!((2021, Common(5), 28), (date.year(), date.lunar_month(), date.day()));
/// ```
pub fn to_lunar(date: Option<Date>) -> Result<Option<LunarDate>, LunarError> {
    date.map(LunarDate::from_date).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use Month::*;

    fn lunar(y: i32, m: i32, d: i32) -> LunarDate {
        LunarDate::from_gregorian(y, m, d).unwrap()
    }

    #[test]
    fn fields() {
        let date = lunar(2020, 5, 1);
        assert_eq!(2020, date.year());
        assert_eq!(4, date.month());
        assert_eq!(9, date.day());
        assert!(!date.is_leap_month());
        assert_eq!(4, date.leap_month());
        assert!(date.is_leap_year());
        assert!(date.month_has_leap());
        assert_eq!(Zodiac::Rat, date.zodiac());

        let date = lunar(2020, 5, 23);
        assert_eq!((4, true), (date.month(), date.is_leap_month()));
        assert_eq!(29, date.days_in_month());
        assert_eq!(384, date.days_in_year());

        let date = lunar(2021, 7, 7);
        assert_eq!((2021, 5, 28), (date.year(), date.month(), date.day()));
        assert_eq!(0, date.leap_month());
        assert!(!date.is_leap_year());
        assert!(!date.month_has_leap());
        assert_eq!(Zodiac::Ox, date.zodiac());
    }

    #[test]
    fn strings() {
        for ((y, m, d), (year, month, day)) in [
            ((2020, 5, 1), ("二零二零", "四月", "初九")),
            ((2020, 5, 23), ("二零二零", "闰四月", "初一")),
            ((2020, 8, 5), ("二零二零", "六月", "十六")),
            ((2021, 1, 1), ("二零二零", "冬月", "十八")),
            ((2021, 7, 7), ("二零二一", "五月", "廿八")),
        ] {
            let date = lunar(y, m, d);
            assert_eq!(year, date.to_chinese_year_string());
            assert_eq!(month, date.to_chinese_month_string());
            assert_eq!(day, date.to_chinese_day_string());
        }
        assert_eq!("二零二零年闰四月初一", lunar(2020, 5, 23).to_string());
    }

    #[test]
    fn last_day_of_year() {
        let eve = lunar(2021, 2, 11);
        assert!(eve.is_last_day_of_year());
        assert_eq!((Common(12), 30), (eve.lunar_month(), eve.day()));
        assert_eq!(Some("除夕"), eve.festival());

        // 腊月小，二十九即除夕
        let eve = lunar(2022, 1, 31);
        assert_eq!((Common(12), 29), (eve.lunar_month(), eve.day()));
        assert_eq!(Some("除夕"), eve.festival());

        assert!(!lunar(2021, 2, 12).is_last_day_of_year());
    }

    #[test]
    fn from_lunar_round_trip() {
        for (y, m, d) in [(2020, 5, 23), (2021, 2, 12), (1900, 1, 31), (2101, 1, 28)] {
            let date = lunar(y, m, d);
            let back = LunarDate::from_lunar(date.year(), date.lunar_month(), date.day());
            assert_eq!(Ok(date), back);
            assert_eq!((y, m, d), date.to_gregorian());
        }
    }

    #[test]
    fn facade() {
        assert_eq!(Ok(None), to_lunar(None));
        assert_eq!(
            Err(LunarError::OutOfRange { year: 1899 }),
            to_lunar(Date::from_gregorian(1899, 12, 31))
        );
        assert_eq!(Ok(Some(lunar(2021, 2, 12))), to_lunar(Date::from_gregorian(2021, 2, 12)));
    }

    #[test]
    fn ordering() {
        assert!(lunar(2020, 5, 23) > lunar(2020, 5, 22));
        assert!(lunar(2020, 6, 21) > lunar(2020, 6, 20));
    }

    #[test]
    fn naive_date() {
        let naive = NaiveDate::from_ymd_opt(2021, 9, 21).unwrap();
        let date = LunarDate::try_from(naive).unwrap();
        assert_eq!(Some("中秋节"), date.festival());
    }
}
