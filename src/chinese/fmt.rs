//! 格式化日期相關功能
//!
//! 輸出用簡體字，與節日名稱一致。

/// 漢數字，第 `1..=9` 項分別為「一」到「九」。為便於格式化日期，第 0 項為「十」。
pub const NUM_CHINESE: &[&str] = &["十", "一", "二", "三", "四", "五", "六", "七", "八", "九"];

/// 逐位讀的數字，第 0 項為「零」。
pub const DIGITS: &[&str] = &["零", "一", "二", "三", "四", "五", "六", "七", "八", "九"];

/// 取得年份的逐位漢字寫法，負號略去。
///
/// # 用例
///
/// ```
/// use nongli::chinese;
///
/// assert_eq!("二零二零", chinese::fmt::year(2020));
/// assert_eq!("一九零零", chinese::fmt::year(1900));
/// ```
pub fn year(y: i32) -> String {
    y.unsigned_abs()
        .to_string()
        .bytes()
        .map(|b| DIGITS[(b - b'0') as usize])
        .collect()
}

/// 取得月名（含「月」字）。十一、十二月稱「冬月」「腊月」。
///
/// # 用例
///
/// ```
/// use nongli::chinese::{self, Month::*};
///
/// assert_eq!("冬月", chinese::fmt::month(Common(11)));
/// assert_eq!("闰四月", chinese::fmt::month(Leap(4)));
/// assert_eq!("正月", chinese::fmt::month(Common(1)));
/// ```
///
/// # Panics
///
/// 若月序號不在 `1..=12` 間則 panic。
pub fn month(m: super::Month) -> String {
    let mut rt = String::new();
    if m.is_leap() {
        rt += "闰";
    }
    let num = m.num();
    rt += match num {
        1 => "正",
        2..=9 => NUM_CHINESE[num as usize],
        10 => "十",
        11 => "冬",
        12 => "腊",
        _ => panic!("month {} not in 1..=12", num),
    };
    rt += "月";
    rt
}

/// 取得日名，前十日為「初一」到「初十」，第 21 至 29 日為「廿一」到「廿九」。
///
/// # 用例
///
/// ```
/// use nongli::chinese;
///
/// assert_eq!("初十", chinese::fmt::day(10));
/// assert_eq!("廿五", chinese::fmt::day(25));
/// assert_eq!("三十", chinese::fmt::day(30));
/// ```
///
/// # Panics
///
/// 若日序號不在 `1..=30` 間則 panic。
pub fn day(d: u32) -> String {
    match d {
        1..=10 => "初",
        11..=19 => "十",
        20 => "二",
        21..=29 => "廿",
        30 => "三",
        _ => panic!("day {} not in 1..=30", d),
    }
    .to_owned()
        + NUM_CHINESE[(d % 10) as usize]
}

/// 節氣序號轉為名稱。`1..=24` 分別為立春到大寒。
///
/// # 用例
///
/// ```
/// use nongli::chinese;
///
/// assert_eq!("谷雨", chinese::fmt::solar_term(6));
/// assert_eq!("小寒", chinese::fmt::solar_term(23));
/// ```
pub fn solar_term(term: u32) -> &'static str {
    const NAMES: &[&str] = &[
        "大寒", "立春", "雨水", "惊蛰", "春分", "清明", "谷雨", "立夏", "小满", "芒种", "夏至",
        "小暑", "大暑", "立秋", "处暑", "白露", "秋分", "寒露", "霜降", "立冬", "小雪", "大雪",
        "冬至", "小寒",
    ];
    NAMES[term.rem_euclid(24) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chinese::Month::*;

    #[test]
    fn test_year() {
        for (std, y) in [("二零二零", 2020), ("二零二一", 2021), ("二一零零", 2100)] {
            assert_eq!(std, year(y));
        }
    }

    #[test]
    fn test_month() {
        for (std, m) in [
            ("四月", Common(4)),
            ("六月", Common(6)),
            ("十月", Common(10)),
            ("腊月", Common(12)),
            ("闰六月", Leap(6)),
            ("闰冬月", Leap(11)),
        ] {
            assert_eq!(std, month(m));
        }
    }

    #[test]
    fn test_day() {
        for (std, d) in [
            ("初一", 1),
            ("初九", 9),
            ("初十", 10),
            ("十一", 11),
            ("十六", 16),
            ("二十", 20),
            ("廿一", 21),
            ("廿八", 28),
            ("三十", 30),
        ] {
            assert_eq!(std, day(d));
        }
    }

    #[test]
    #[should_panic]
    fn day_out_of_domain() {
        day(31);
    }
}
