use crate::domain::model::{Element, Modality, ZodiacSign};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignRecord {
    pub sign: ZodiacSign,
    /// (月, 日)，包含邊界
    pub start: (u32, u32),
    /// (月, 日)，包含邊界
    pub end: (u32, u32),
    pub element: Element,
    pub modality: Modality,
}

impl SignRecord {
    const fn new(
        sign: ZodiacSign,
        start: (u32, u32),
        end: (u32, u32),
        element: Element,
        modality: Modality,
    ) -> Self {
        Self {
            sign,
            start,
            end,
            element,
            modality,
        }
    }

    /// 判斷 `month`/`day` 是否落在此星座的區間內
    pub fn contains(&self, month: u32, day: u32) -> bool {
        let (start_month, start_day) = self.start;
        let (end_month, end_day) = self.end;

        let after_start = month > start_month || (month == start_month && day >= start_day);
        let before_end = month < end_month || (month == end_month && day <= end_day);

        if start_month <= end_month {
            after_start && before_end
        } else {
            // 跨年區間 (摩羯座)
            after_start || before_end
        }
    }
}

pub static SIGN_TABLE: [SignRecord; 12] = {
    use Element::*;
    use Modality::*;
    [
        SignRecord::new(ZodiacSign::Aries, (3, 21), (4, 19), Fire, Cardinal),
        SignRecord::new(ZodiacSign::Taurus, (4, 20), (5, 20), Earth, Fixed),
        SignRecord::new(ZodiacSign::Gemini, (5, 21), (6, 20), Air, Mutable),
        SignRecord::new(ZodiacSign::Cancer, (6, 21), (7, 22), Water, Cardinal),
        SignRecord::new(ZodiacSign::Leo, (7, 23), (8, 22), Fire, Fixed),
        SignRecord::new(ZodiacSign::Virgo, (8, 23), (9, 22), Earth, Mutable),
        SignRecord::new(ZodiacSign::Libra, (9, 23), (10, 22), Air, Cardinal),
        SignRecord::new(ZodiacSign::Scorpio, (10, 23), (11, 21), Water, Fixed),
        SignRecord::new(ZodiacSign::Sagittarius, (11, 22), (12, 21), Fire, Mutable),
        SignRecord::new(ZodiacSign::Capricorn, (12, 22), (1, 19), Earth, Cardinal),
        SignRecord::new(ZodiacSign::Aquarius, (1, 20), (2, 18), Air, Fixed),
        SignRecord::new(ZodiacSign::Pisces, (2, 19), (3, 20), Water, Mutable),
    ]
};

/// 跨年星座 (摩羯座) 的索引，找不到對應時使用
const FALLBACK_INDEX: usize = 9;

/// 依月/日查詢太陽星座，年份不影響結果
///
/// 依 [`SIGN_TABLE`] 順序掃描，回傳第一個包含該日期的星座；
/// 超出範圍的輸入 (例如 13 月) 一律回傳摩羯座
pub fn sign_for(month: u32, day: u32) -> &'static SignRecord {
    SIGN_TABLE
        .iter()
        .find(|record| record.contains(month, day))
        .unwrap_or(&SIGN_TABLE[FALLBACK_INDEX])
}

pub fn sun_sign(month: u32, day: u32) -> (ZodiacSign, Element, Modality) {
    let record = sign_for(month, day);
    (record.sign, record.element, record.modality)
}
