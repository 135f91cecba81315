const FNV_OFFSET_BASIS: u32 = 2_166_136_261;
const FNV_PRIME: u32 = 16_777_619;

pub const AFFIRMATIONS: [&str; 12] = [
    "Small steady steps today build the foundation you have been hoping for.",
    "Trust the quiet voice that already knows the answer.",
    "Your warmth is a gift; share it without keeping score.",
    "Finish one thing completely before starting the next.",
    "A conversation you have been avoiding will go better than you fear.",
    "Rest is part of the work, not a reward for it.",
    "Curiosity will open a door that effort alone cannot.",
    "Let go of one expectation and notice what arrives in its place.",
    "Your discipline today is a letter to your future self.",
    "Say yes to the unexpected invitation.",
    "Clarity comes from writing it down, not from thinking it over again.",
    "You are allowed to change your mind as you learn more.",
];

/// 以 `text` 的 UTF-16 code unit 計算 32-bit FNV-1a
pub fn fnv1a_32(text: &str) -> u32 {
    text.encode_utf16().fold(FNV_OFFSET_BASIS, |hash, unit| {
        (hash ^ u32::from(unit)).wrapping_mul(FNV_PRIME)
    })
}

/// 將雜湊值正規化到 `[0, 1)`
pub fn seeded_unit(text: &str) -> f64 {
    f64::from(fnv1a_32(text)) / 4_294_967_296.0
}

/// 長度為 `len` 的列表中的穩定索引，`len` 不可為 0
pub fn seeded_index(text: &str, len: usize) -> usize {
    let index = (seeded_unit(text) * len as f64).floor() as usize;
    index.min(len.saturating_sub(1))
}

pub fn seeded_pick<'a, T>(text: &str, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(seeded_index(text, items.len()))
}

/// 某人某天的每日訊息，相同輸入必得相同訊息
pub fn daily_message(name: &str, date: &str) -> &'static str {
    let seed = format!("{}|{}", name, date);
    AFFIRMATIONS[seeded_index(&seed, AFFIRMATIONS.len())]
}
