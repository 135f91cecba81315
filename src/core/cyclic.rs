use crate::domain::model::ChineseAnimal;

/// 鼠年，對應 [`ANIMALS`] 索引 0
pub const EPOCH_YEAR: i32 = 2008;

pub const ANIMALS: [ChineseAnimal; 12] = [
    ChineseAnimal::Rat,
    ChineseAnimal::Ox,
    ChineseAnimal::Tiger,
    ChineseAnimal::Rabbit,
    ChineseAnimal::Dragon,
    ChineseAnimal::Snake,
    ChineseAnimal::Horse,
    ChineseAnimal::Goat,
    ChineseAnimal::Monkey,
    ChineseAnimal::Rooster,
    ChineseAnimal::Dog,
    ChineseAnimal::Pig,
];

pub fn animal_for_year(year: i32) -> ChineseAnimal {
    let index = ((year - EPOCH_YEAR) % 12 + 12) % 12;
    ANIMALS[index as usize]
}

/// 從 `YYYY-...` 日期的前四個字元讀出年份
pub fn animal_from_date(date: &str) -> Option<ChineseAnimal> {
    date.get(..4)
        .and_then(|year| year.parse::<i32>().ok())
        .map(animal_for_year)
}
