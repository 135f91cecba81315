use crate::domain::model::ZodiacSign;

pub const DEFAULT_LUCKY_COLOR: &str = "#8E7CC3";

const LUCKY_COLORS: [(&str, &str); 12] = [
    ("Aries", "#E53935"),
    ("Taurus", "#43A047"),
    ("Gemini", "#FDD835"),
    ("Cancer", "#B0BEC5"),
    ("Leo", "#FB8C00"),
    ("Virgo", "#6D4C41"),
    ("Libra", "#F48FB1"),
    ("Scorpio", "#880E4F"),
    ("Sagittarius", "#5E35B1"),
    ("Capricorn", "#37474F"),
    ("Aquarius", "#00ACC1"),
    ("Pisces", "#26A69A"),
];

const LUCKY_NUMBERS: [u32; 9] = [7, 3, 9, 1, 5, 8, 2, 6, 4];

/// 未知的星座名稱回傳 [`DEFAULT_LUCKY_COLOR`]
pub fn lucky_color(sign_name: &str) -> &'static str {
    LUCKY_COLORS
        .iter()
        .find(|(name, _)| *name == sign_name)
        .map(|(_, color)| *color)
        .unwrap_or(DEFAULT_LUCKY_COLOR)
}

/// 主數同樣以 `(n - 1) mod 9` 計算索引
pub fn lucky_number(life_path: u32) -> u32 {
    let index = (i64::from(life_path) - 1).rem_euclid(LUCKY_NUMBERS.len() as i64);
    LUCKY_NUMBERS[index as usize]
}

pub fn lucky_values(sign: ZodiacSign, life_path: u32) -> (&'static str, u32) {
    (lucky_color(sign.as_str()), lucky_number(life_path))
}
