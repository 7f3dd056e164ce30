//! 生肖

use std::fmt::{self, Display, Formatter};

use super::sexagenary::GanZhi;

/// 十二生肖，依地支順序，子為鼠。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Zodiac {
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

/// 全部生肖，序號與地支序號相同。
pub const ALL_ZODIACS: [Zodiac; 12] = [
    Zodiac::Rat,
    Zodiac::Ox,
    Zodiac::Tiger,
    Zodiac::Rabbit,
    Zodiac::Dragon,
    Zodiac::Snake,
    Zodiac::Horse,
    Zodiac::Goat,
    Zodiac::Monkey,
    Zodiac::Rooster,
    Zodiac::Dog,
    Zodiac::Pig,
];

const CHINESE_NAMES: [&str; 12] = [
    "鼠", "牛", "虎", "兔", "龙", "蛇", "马", "羊", "猴", "鸡", "狗", "猪",
];

const ENGLISH_NAMES: [&str; 12] = [
    "Rat", "Ox", "Tiger", "Rabbit", "Dragon", "Snake", "Horse", "Goat", "Monkey", "Rooster",
    "Dog", "Pig",
];

impl Zodiac {
    /// 依年柱取得生肖。
    ///
    /// # 用例
    ///
    /// ```
    /// use nongli::chinese::{sexagenary, zodiac::Zodiac};
    ///
    /// assert_eq!(Zodiac::Rat, Zodiac::from_pillar(sexagenary::year_pillar(2020)));
    /// assert_eq!(Zodiac::Ox, Zodiac::from_pillar(sexagenary::year_pillar(2021)));
    /// ```
    pub fn from_pillar(pillar: GanZhi) -> Self {
        ALL_ZODIACS[pillar.zhi() as usize]
    }

    /// 序號，與地支序號相同（鼠 = 0 .. 猪 = 11）。
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// 中文名，如「鼠」。
    pub fn name(self) -> &'static str {
        CHINESE_NAMES[self.index() as usize]
    }

    /// 英文名，如 "Rat"。
    pub fn english_name(self) -> &'static str {
        ENGLISH_NAMES[self.index() as usize]
    }
}

impl Display for Zodiac {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.english_name())
    }
}
