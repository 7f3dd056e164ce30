//! 干支紀年、紀月、紀日
//!
//! 年柱、月柱、日柱互不相干，僅共用天干地支名表：
//!
//! - 年柱依農曆年序號推算，以 1984 年（甲子）為基準；
//! - 月柱依節氣月（以「節」為界的太陽月）推算，與農曆月份無關；
//! - 日柱依絕對日數推算，以 2000 年 1 月 7 日（甲子日）為基準。

use std::fmt::{self, Display, Formatter};

use crate::date::Date;

/// 天干名，甲為 0。
pub const GAN_NAMES: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];
/// 地支名，子為 0。
pub const ZHI_NAMES: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

/// 甲子年
const YEAR_BASE: i32 = 1984;
/// 甲子日（2000-01-07）的儒略日數
const DAY_BASE_JDN: u32 = 2_451_551;

/// 一柱干支。`gan` 與 `zhi` 奇偶相同，共 60 種組合。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct GanZhi {
    gan: u8,
    zhi: u8,
}

impl GanZhi {
    /// 由六十甲子序號（0 為甲子）建立，序號可為任意整數，取模 60。
    ///
    /// # 用例
    ///
    /// ```
    /// use nongli::chinese::sexagenary::GanZhi;
    ///
    /// assert_eq!("甲子", GanZhi::from_cycle(0).to_string());
    /// assert_eq!("癸亥", GanZhi::from_cycle(-1).to_string());
    /// assert_eq!("庚子", GanZhi::from_cycle(36).to_string());
    /// ```
    pub fn from_cycle(n: i64) -> Self {
        let n = n.rem_euclid(60);
        Self {
            gan: (n % 10) as u8,
            zhi: (n % 12) as u8,
        }
    }
    /// 天干序號，`0..=9`
    pub fn gan(&self) -> u8 {
        self.gan
    }
    /// 地支序號，`0..=11`
    pub fn zhi(&self) -> u8 {
        self.zhi
    }
    /// 六十甲子序號，`0..=59`
    pub fn cycle(&self) -> u8 {
        // 6 * gan - 5 * zhi 同時滿足模 10 與模 12 的餘數
        (6 * self.gan as i32 - 5 * self.zhi as i32).rem_euclid(60) as u8
    }
    /// 天干名，如「甲」
    pub fn gan_name(&self) -> &'static str {
        GAN_NAMES[self.gan as usize]
    }
    /// 地支名，如「子」
    pub fn zhi_name(&self) -> &'static str {
        ZHI_NAMES[self.zhi as usize]
    }
}

impl Display for GanZhi {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.gan_name(), self.zhi_name())
    }
}

/// 農曆年的年柱。
///
/// # 用例
///
/// ```
/// use nongli::chinese::sexagenary;
///
/// assert_eq!("庚子", sexagenary::year_pillar(2020).to_string());
/// assert_eq!("辛丑", sexagenary::year_pillar(2021).to_string());
/// ```
pub fn year_pillar(lunar_year: i32) -> GanZhi {
    GanZhi::from_cycle((lunar_year - YEAR_BASE) as i64)
}

/// 公曆日期的日柱，僅取決於絕對日數。
///
/// # 用例
///
/// ```
/// use nongli::Date;
/// use nongli::chinese::sexagenary;
///
/// let date = Date::from_gregorian(2020, 5, 1).unwrap();
/// assert_eq!("甲辰", sexagenary::day_pillar(date).to_string());
/// ```
pub fn day_pillar(date: Date) -> GanZhi {
    GanZhi::from_cycle(date.jdn() as i64 - DAY_BASE_JDN as i64)
}

/// 公曆日期的月柱，依節氣月及該節氣年（以立春為界）的年干推算（五虎遁）。
///
/// # 用例
///
/// ```
/// use nongli::Date;
/// use nongli::chinese::sexagenary;
///
/// let date = Date::from_gregorian(2020, 8, 5).unwrap();
/// assert_eq!("癸未", sexagenary::month_pillar(date).to_string());
/// ```
pub fn month_pillar(date: Date) -> GanZhi {
    let (solar_year, month) = solar_month(date);
    let year_gan = year_pillar(solar_year).gan() as i32;
    let gan = (year_gan * 2 + month as i32 + 1).rem_euclid(10);
    let zhi = (month as i32 + 1).rem_euclid(12);
    GanZhi {
        gan: gan as u8,
        zhi: zhi as u8,
    }
}

/// 求公曆日期所在節氣月，返回 `(節氣年, 月序)`。
///
/// 月序 `1..=12` 分別為寅月（立春起）至丑月（小寒起）；節氣年以立春為界，故立春前的一月、二月日期屬前一年。
///
/// # 用例
///
/// ```
/// use nongli::Date;
/// use nongli::chinese::sexagenary::solar_month;
///
/// assert_eq!((2021, 1), solar_month(Date::from_gregorian(2021, 2, 3).unwrap()));
/// assert_eq!((2020, 12), solar_month(Date::from_gregorian(2021, 2, 2).unwrap()));
/// assert_eq!((2020, 11), solar_month(Date::from_gregorian(2021, 1, 1).unwrap()));
/// ```
pub fn solar_month(date: Date) -> (i32, u32) {
    let (y, m, d) = date.gregorian();
    let after = d as u32 >= jie_day(y, m as u32);
    let month = if after { m - 1 } else { m - 2 };
    let month = if month <= 0 { month + 12 } else { month };
    let solar_year = if m == 1 || (m == 2 && !after) { y - 1 } else { y };
    (solar_year, month as u32)
}

/// 節日期常數 C，依公曆月 1..=12 排列（小寒、立春、驚蟄……大雪），20 世紀適用。
const JIE_C_20: [f64; 12] = [
    6.11, 4.6295, 6.3826, 5.59, 6.318, 6.5, 7.928, 8.35, 8.44, 9.098, 8.218, 7.9,
];
/// 同上，21 世紀適用。
const JIE_C_21: [f64; 12] = [
    5.4055, 3.87, 5.63, 4.81, 5.52, 5.678, 7.108, 7.5, 7.646, 8.318, 7.438, 7.18,
];
/// 通式推算偏差一日的年份：`(公曆年, 公曆月, 修正)`
const JIE_CORRECTIONS: [(i32, u32, i32); 10] = [
    (1902, 6, 1),
    (1911, 5, 1),
    (1925, 7, 1),
    (1927, 9, 1),
    (1954, 12, 1),
    (1982, 1, 1),
    (2002, 8, 1),
    (2016, 7, 1),
    (2019, 1, -1),
    (2089, 11, 1),
];

/// 公曆 `year` 年 `month` 月中「節」（每月前一個節氣）的日期。
///
/// 以通式 `floor(Y * 0.2422 + C) - floor(L)` 近似，並修正已知偏差；僅在年表範圍（1900 至 2100 年）內可信。
///
/// # 用例
///
/// ```
/// use nongli::chinese::sexagenary::jie_day;
///
/// assert_eq!(3, jie_day(2021, 2)); // 立春
/// assert_eq!(7, jie_day(2021, 7)); // 小暑
/// assert_eq!(5, jie_day(2019, 1)); // 小寒
/// ```
///
/// # Panics
///
/// 若月序號不在 `1..=12` 間則 panic。
pub fn jie_day(year: i32, month: u32) -> u32 {
    assert!((1..=12).contains(&month), "month {} not in 1..=12", month);
    let (base, c) = if year <= 2000 {
        (1900, JIE_C_20[month as usize - 1])
    } else {
        (2000, JIE_C_21[month as usize - 1])
    };
    let y = year - base;
    // 一、二月的節在閏日之前，閏年數按前一年計
    let last = if month <= 2 { year - 1 } else { year };
    let leaps = (leap_years_through(last) - leap_years_through(base)).max(0);
    let correction = JIE_CORRECTIONS
        .iter()
        .find(|&&(cy, cm, _)| cy == year && cm == month)
        .map_or(0, |&(_, _, delta)| delta);
    ((y as f64 * 0.2422 + c).floor() as i32 - leaps + correction) as u32
}

/// 公元 1 年至 `year` 年間的公曆閏年數
fn leap_years_through(year: i32) -> i32 {
    year.div_euclid(4) - year.div_euclid(100) + year.div_euclid(400)
}
