//! 農曆傳統節日

use super::Month;

/// 固定日期的節日，以平月 `(月, 日)` 為鍵。
const FESTIVALS: [(u32, u32, &str); 13] = [
    (1, 1, "春节"),
    (1, 15, "元宵节"),
    (2, 2, "龙抬头"),
    (3, 3, "上巳节"),
    (5, 5, "端午节"),
    (7, 7, "七夕节"),
    (7, 15, "中元节"),
    (8, 15, "中秋节"),
    (9, 9, "重阳节"),
    (10, 1, "寒衣节"),
    (10, 15, "下元节"),
    (12, 8, "腊八节"),
    (12, 23, "小年"),
];

/// 歲末最後一日，大小月皆然。
pub const NEW_YEARS_EVE: &str = "除夕";

/// 查詢節日。`last_day_of_year` 為 `true` 時返回「除夕」；閏月無固定日期節日。
///
/// 無節日返回 `None`。
///
/// # 用例
///
/// ```
/// use nongli::chinese::{festival, Month::*};
///
/// assert_eq!(Some("中秋节"), festival::lookup(Common(8), 15, false));
/// assert_eq!(Some("除夕"), festival::lookup(Common(12), 29, true));
/// assert_eq!(None, festival::lookup(Leap(4), 1, false));
/// ```
pub fn lookup(month: Month, day: u32, last_day_of_year: bool) -> Option<&'static str> {
    if last_day_of_year {
        return Some(NEW_YEARS_EVE);
    }
    let Month::Common(m) = month else {
        return None;
    };
    FESTIVALS
        .iter()
        .find(|&&(fm, fd, _)| fm == m && fd == day)
        .map(|&(_, _, name)| name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use Month::*;

    #[test]
    fn fixed_dates() {
        assert_eq!(Some("春节"), lookup(Common(1), 1, false));
        assert_eq!(Some("腊八节"), lookup(Common(12), 8, false));
        assert_eq!(Some("小年"), lookup(Common(12), 23, false));
        assert_eq!(None, lookup(Common(12), 24, false));
        assert_eq!(None, lookup(Common(6), 6, false));
    }

    #[test]
    fn leap_months_have_none() {
        assert_eq!(None, lookup(Leap(5), 5, false));
        assert_eq!(None, lookup(Leap(7), 15, false));
    }

    #[test]
    fn new_years_eve_by_flag() {
        assert_eq!(Some(NEW_YEARS_EVE), lookup(Common(12), 30, true));
        assert_eq!(Some(NEW_YEARS_EVE), lookup(Common(12), 29, true));
        assert_eq!(None, lookup(Common(12), 29, false));
    }
}
