//! 農曆年表
//!
//! 每年以一個整數壓縮存放：
//!
//! - 位 `0..=3`：閏月序號，0 表示無閏月；
//! - 位 `4..=15`：一至十二月大小，位 `16 - n` 為 1 表示 n 月大（30 日），否則小（29 日）；
//! - 位 `16`：閏月大小。
//!
//! 首次取用時一次性解碼並自檢，資料有誤則 panic。

use std::sync::OnceLock;

use tracing::debug;

use super::Month;
use crate::error::LunarError;

/// 年表首年
pub const FIRST_YEAR: i32 = 1900;
/// 年表末年
pub const LAST_YEAR: i32 = 2100;

#[rustfmt::skip]
static PACKED: [u32; (LAST_YEAR - FIRST_YEAR + 1) as usize] = [
    0x04bd8, 0x04ae0, 0x0a570, 0x054d5, 0x0d260, 0x0d950, 0x16554, 0x056a0, 0x09ad0, 0x055d2, // 1900
    0x04ae0, 0x0a5b6, 0x0a4d0, 0x0d250, 0x1d255, 0x0b540, 0x0d6a0, 0x0ada2, 0x095b0, 0x14977, // 1910
    0x04970, 0x0a4b0, 0x0b4b5, 0x06a50, 0x06d40, 0x1ab54, 0x02b60, 0x09570, 0x052f2, 0x04970, // 1920
    0x06566, 0x0d4a0, 0x0ea50, 0x16a95, 0x05ad0, 0x02b60, 0x186e3, 0x092e0, 0x1c8d7, 0x0c950, // 1930
    0x0d4a0, 0x1d8a6, 0x0b550, 0x056a0, 0x1a5b4, 0x025d0, 0x092d0, 0x0d2b2, 0x0a950, 0x0b557, // 1940
    0x06ca0, 0x0b550, 0x15355, 0x04da0, 0x0a5b0, 0x14573, 0x052b0, 0x0a9a8, 0x0e950, 0x06aa0, // 1950
    0x0aea6, 0x0ab50, 0x04b60, 0x0aae4, 0x0a570, 0x05260, 0x0f263, 0x0d950, 0x05b57, 0x056a0, // 1960
    0x096d0, 0x04dd5, 0x04ad0, 0x0a4d0, 0x0d4d4, 0x0d250, 0x0d558, 0x0b540, 0x0b6a0, 0x195a6, // 1970
    0x095b0, 0x049b0, 0x0a974, 0x0a4b0, 0x0b27a, 0x06a50, 0x06d40, 0x0af46, 0x0ab60, 0x09570, // 1980
    0x04af5, 0x04970, 0x064b0, 0x074a3, 0x0ea50, 0x06b58, 0x05ac0, 0x0ab60, 0x096d5, 0x092e0, // 1990
    0x0c960, 0x0d954, 0x0d4a0, 0x0da50, 0x07552, 0x056a0, 0x0abb7, 0x025d0, 0x092d0, 0x0cab5, // 2000
    0x0a950, 0x0b4a0, 0x0baa4, 0x0ad50, 0x055d9, 0x04ba0, 0x0a5b0, 0x15176, 0x052b0, 0x0a930, // 2010
    0x07954, 0x06aa0, 0x0ad50, 0x05b52, 0x04b60, 0x0a6e6, 0x0a4e0, 0x0d260, 0x0ea65, 0x0d530, // 2020
    0x05aa0, 0x076a3, 0x096d0, 0x04afb, 0x04ad0, 0x0a4d0, 0x1d0b6, 0x0d250, 0x0d520, 0x0dd45, // 2030
    0x0b5a0, 0x056d0, 0x055b2, 0x049b0, 0x0a577, 0x0a4b0, 0x0aa50, 0x1b255, 0x06d20, 0x0ada0, // 2040
    0x14b63, 0x09370, 0x049f8, 0x04970, 0x064b0, 0x168a6, 0x0ea50, 0x06b20, 0x1a6c4, 0x0aae0, // 2050
    0x0a2e0, 0x0d2e3, 0x0c960, 0x0d557, 0x0d4a0, 0x0da50, 0x05d55, 0x056a0, 0x0a6d0, 0x055d4, // 2060
    0x052d0, 0x0a9b8, 0x0a950, 0x0b4a0, 0x0b6a6, 0x0ad50, 0x055a0, 0x0aba4, 0x0a5b0, 0x052b0, // 2070
    0x0b273, 0x06930, 0x07337, 0x06aa0, 0x0ad50, 0x14b55, 0x04b60, 0x0a570, 0x054e4, 0x0d160, // 2080
    0x0e968, 0x0d520, 0x0daa0, 0x16aa6, 0x056d0, 0x04ae0, 0x0a9d4, 0x0a2d0, 0x0d150, 0x0f252, // 2090
    0x0d520,                                                                                  // 2100
];

/// 一個月的月名與日數
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct MonthSlot {
    /// 月名，閏月沿用其前一平月的序號
    pub month: Month,
    /// 日數，29 或 30
    pub days: u32,
}

/// 一個農曆年的資料
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct LunarYearInfo {
    /// 農曆年序號（以正月初一所在公元年計）
    pub year: i32,
    /// 閏月序號，0 表示無閏月
    pub leap_month: u32,
    /// 依序列出各月，有閏月則為 13 個
    pub months: Vec<MonthSlot>,
    /// 全年日數
    pub total_days: u32,
    /// 正月初一距曆元（1900 年正月初一）的日數
    pub new_year_offset: i32,
}

impl LunarYearInfo {
    /// 取得農曆 `year` 年的資料。
    ///
    /// 年表無該年則回報 [`LunarError::OutOfRange`]。
    ///
    /// # 用例
    ///
    /// ```
    /// use nongli::chinese::table::LunarYearInfo;
    ///
    /// let info = LunarYearInfo::get(2020).unwrap();
    /// assert_eq!(4, info.leap_month);
    /// assert_eq!(13, info.months.len());
    /// assert_eq!(384, info.total_days);
    /// ```
    pub fn get(year: i32) -> Result<&'static Self, LunarError> {
        if !(FIRST_YEAR..=LAST_YEAR).contains(&year) {
            return Err(LunarError::OutOfRange { year });
        }
        Ok(&all()[(year - FIRST_YEAR) as usize])
    }

    /// 取得某月日數，月份不存在則返回 `None`。
    pub fn days_in(&self, month: Month) -> Option<u32> {
        self.months.iter().find(|s| s.month == month).map(|s| s.days)
    }

    /// 次年正月初一距曆元的日數
    pub fn end_offset(&self) -> i32 {
        self.new_year_offset + self.total_days as i32
    }
}

/// 年表全部年份，按年排序。
pub fn all() -> &'static [LunarYearInfo] {
    static DATA: OnceLock<Vec<LunarYearInfo>> = OnceLock::new();
    DATA.get_or_init(|| {
        let years = decode_all().unwrap_or_else(|e| panic!("corrupt lunar year table: {:?}", e));
        debug!(
            years = years.len(),
            first = FIRST_YEAR,
            last = LAST_YEAR,
            "lunar year table loaded"
        );
        years
    })
}

fn decode_all() -> Result<Vec<LunarYearInfo>, TableError> {
    let mut res = Vec::with_capacity(PACKED.len());
    let mut offset = 0;
    for (year, &bits) in (FIRST_YEAR..).zip(PACKED.iter()) {
        let info = decode(year, bits, offset)?;
        offset = info.end_offset();
        res.push(info);
    }
    Ok(res)
}

fn decode(year: i32, bits: u32, new_year_offset: i32) -> Result<LunarYearInfo, TableError> {
    use ErrorType::*;
    let err = |reason| TableError { year, reason };

    if bits >> 17 != 0 {
        return Err(err(StrayBits(bits)));
    }
    let leap_month = bits & 0xf;
    if leap_month > 12 {
        return Err(err(LeapMonth(leap_month)));
    }
    let size = |long: bool| if long { 30 } else { 29 };

    let mut months = Vec::with_capacity(13);
    for n in 1..=12 {
        months.push(MonthSlot {
            month: Month::Common(n),
            days: size(bits & (0x10000 >> n) != 0),
        });
        if n == leap_month {
            months.push(MonthSlot {
                month: Month::Leap(n),
                days: size(bits & 0x10000 != 0),
            });
        }
    }
    let total_days = months.iter().map(|s| s.days).sum();
    if !(353..=385).contains(&total_days) {
        return Err(err(TotalDays(total_days)));
    }

    Ok(LunarYearInfo {
        year,
        leap_month,
        months,
        total_days,
        new_year_offset,
    })
}

#[derive(Debug)]
struct TableError {
    #[allow(dead_code)]
    pub year: i32,
    #[allow(dead_code)]
    pub reason: ErrorType,
}

#[derive(Debug)]
#[allow(dead_code)]
enum ErrorType {
    StrayBits(u32),
    LeapMonth(u32),
    TotalDays(u32),
}
