use serde::{Deserialize, Serialize};
use std::fmt;

/// 呼叫端收集的原始出生資料，產生 profile 前先經
/// [`Validate`](crate::utils::validation::Validate) 檢查
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthInput {
    pub name: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`，24 小時制
    pub time: String,
    pub place: String,
    /// `±HH:MM`
    pub tz_offset: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modality {
    Cardinal,
    Fixed,
    Mutable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChineseAnimal {
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

impl Element {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Air => "Air",
            Self::Water => "Water",
        }
    }
}

impl Modality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cardinal => "Cardinal",
            Self::Fixed => "Fixed",
            Self::Mutable => "Mutable",
        }
    }
}

impl ZodiacSign {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }
}

impl ChineseAnimal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rat => "Rat",
            Self::Ox => "Ox",
            Self::Tiger => "Tiger",
            Self::Rabbit => "Rabbit",
            Self::Dragon => "Dragon",
            Self::Snake => "Snake",
            Self::Horse => "Horse",
            Self::Goat => "Goat",
            Self::Monkey => "Monkey",
            Self::Rooster => "Rooster",
            Self::Dog => "Dog",
            Self::Pig => "Pig",
        }
    }
}

macro_rules! display_via_as_str {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

display_via_as_str!(Element, Modality, ZodiacSign, ChineseAnimal);

/// 推導出的 profile，完全由來源 [`BirthInput`] 決定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AstroProfile {
    pub name: String,
    pub sun_sign: ZodiacSign,
    pub element: Element,
    pub modality: Modality,
    pub life_path: u32,
    pub chinese_animal: ChineseAnimal,
    pub lucky_color: String,
    pub lucky_number: u32,
    pub summary: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerSource {
    Remote,
    RuleBased,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub text: String,
    pub source: AnswerSource,
}
