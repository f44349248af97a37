//! Glyph and name tables for the traditional clock.

/// Twelve earthly branches (十二支), indexed by whole display hour.
pub const BRANCHES: [char; 12] = [
    '子', '丑', '寅', '卯', '辰', '巳', '午', '未', '申', '酉', '戌', '亥',
];

/// Ten heavenly stems (十干), indexed by stem.
pub const STEMS: [char; 10] = ['甲', '乙', '丙', '丁', '戊', '己', '庚', '辛', '壬', '癸'];

/// Quarter glyphs, indexed by `floor(4 * hour) mod 4`.
pub const QUARTERS: [char; 4] = ['初', '二', '三', '四'];

/// Hour names, starting from the midnight bell.
pub const TOKI_NAMES: [&str; 12] = [
    "真夜九ツ",
    "夜八ツ",
    "暁七ツ",
    "明ケ六ツ",
    "朝五ツ",
    "昼四ツ",
    "真昼九ツ",
    "昼八ツ",
    "夕七ツ",
    "暮レ六ツ",
    "宵五ツ",
    "夜四ツ",
];

/// Shown instead of the hour name right at the midnight mark.
pub const MIDNIGHT_NAME: &str = "真夜中";

/// Shown instead of the hour name right at the noon mark.
pub const NOON_NAME: &str = "正午";

pub const DAY_GLYPH: char = '昼';
pub const NIGHT_GLYPH: char = '夜';

/// Branch glyph for a display hour in `[0, 12)`.
pub fn branch(hour: f64) -> char {
    BRANCHES[wrap(hour.floor() as i64, 12)]
}

/// Stem glyph; indices wrap modulo 10.
pub fn stem(index: u8) -> char {
    STEMS[usize::from(index) % STEMS.len()]
}

/// Quarter glyph for a display hour.
pub fn quarter(hour: f64) -> char {
    QUARTERS[quarter_index(hour)]
}

/// `floor(4 * hour) mod 4`.
pub fn quarter_index(hour: f64) -> usize {
    wrap((4.0 * hour).floor() as i64, 4)
}

/// Hour name for a display hour; the hour starts at its `.5` mark.
pub fn toki(hour: f64) -> &'static str {
    TOKI_NAMES[wrap((hour - 0.5).floor() as i64, 12)]
}

fn wrap(i: i64, n: usize) -> usize {
    i.rem_euclid(n as i64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn branch_by_whole_hour() {
        assert_eq!(branch(0.0), '子');
        assert_eq!(branch(0.99), '子');
        assert_eq!(branch(6.5), '午');
        assert_eq!(branch(11.9), '亥');
    }

    #[test]
    fn toki_starts_at_half_marks() {
        assert_eq!(toki(0.5), "真夜九ツ");
        assert_eq!(toki(0.49), "夜四ツ");
        assert_eq!(toki(3.5), "明ケ六ツ");
        assert_eq!(toki(6.7), "真昼九ツ");
        assert_eq!(toki(9.6), "暮レ六ツ");
    }

    #[test]
    fn quarters() {
        assert_eq!(quarter(3.0), '初');
        assert_eq!(quarter(3.3), '二');
        assert_eq!(quarter(3.5), '三');
        assert_eq!(quarter(3.99), '四');
        assert_eq!(quarter_index(11.8), 3);
    }

    #[test]
    fn stems_wrap() {
        assert_eq!(stem(0), '甲');
        assert_eq!(stem(9), '癸');
        assert_eq!(stem(12), '丙');
    }
}
