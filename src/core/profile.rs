use crate::core::{cyclic, lucky, numerology, signs};
use crate::domain::model::{AstroProfile, BirthInput, ChineseAnimal, Element, Modality, ZodiacSign};
use crate::utils::error::{AstroError, Result};

static SIGN_TRAITS: [(ZodiacSign, [&str; 3]); 12] = [
    (ZodiacSign::Aries, ["courageous", "energetic", "direct"]),
    (ZodiacSign::Taurus, ["patient", "reliable", "sensual"]),
    (ZodiacSign::Gemini, ["curious", "adaptable", "witty"]),
    (ZodiacSign::Cancer, ["nurturing", "intuitive", "protective"]),
    (ZodiacSign::Leo, ["generous", "confident", "warm-hearted"]),
    (ZodiacSign::Virgo, ["analytical", "practical", "diligent"]),
    (ZodiacSign::Libra, ["diplomatic", "fair-minded", "social"]),
    (ZodiacSign::Scorpio, ["passionate", "resourceful", "determined"]),
    (ZodiacSign::Sagittarius, ["optimistic", "adventurous", "honest"]),
    (ZodiacSign::Capricorn, ["disciplined", "ambitious", "responsible"]),
    (ZodiacSign::Aquarius, ["inventive", "independent", "humanitarian"]),
    (ZodiacSign::Pisces, ["compassionate", "imaginative", "gentle"]),
];

pub fn traits_for(sign: ZodiacSign) -> &'static [&'static str] {
    SIGN_TRAITS
        .iter()
        .find(|(s, _)| *s == sign)
        .map(|(_, traits)| traits.as_slice())
        .unwrap_or(&[])
}

/// 將 `YYYY-MM-DD` 拆成數字，這裡不檢查範圍
pub fn parse_date_parts(date: &str) -> Result<(i32, u32, u32)> {
    let malformed = || AstroError::InvalidDate {
        value: date.to_string(),
    };

    let mut parts = date.trim().splitn(3, '-');
    let year = parts
        .next()
        .filter(|p| p.len() == 4)
        .and_then(|p| p.parse::<i32>().ok())
        .ok_or_else(malformed)?;
    let month = parts
        .next()
        .filter(|p| p.len() == 2)
        .and_then(|p| p.parse::<u32>().ok())
        .ok_or_else(malformed)?;
    let day = parts
        .next()
        .filter(|p| p.len() == 2)
        .and_then(|p| p.parse::<u32>().ok())
        .ok_or_else(malformed)?;

    Ok((year, month, day))
}

fn join_traits(traits: &[&str]) -> String {
    match traits {
        [] => "hard to pin down".to_string(),
        [only] => only.to_string(),
        [first, second] => format!("{} and {}", first, second),
        [init @ .., last] => format!("{}, and {}", init.join(", "), last),
    }
}

fn life_path_theme(life_path: u32) -> &'static str {
    match life_path {
        1 => "independence and leadership",
        2 => "partnership and diplomacy",
        3 => "creativity and self-expression",
        4 => "structure and hard work",
        5 => "freedom and change",
        6 => "care and responsibility",
        7 => "reflection and inner wisdom",
        8 => "ambition and material mastery",
        9 => "compassion and completion",
        11 => "intuition and inspiration",
        22 => "building something lasting",
        33 => "teaching and service",
        _ => "a path still unfolding",
    }
}

pub fn render_summary(
    name: &str,
    sign: ZodiacSign,
    element: Element,
    modality: Modality,
    traits: &[&str],
    life_path: u32,
    animal: ChineseAnimal,
) -> String {
    format!(
        "{name}, your Sun in {sign} gives you a {element} temperament with a {modality} rhythm. \
         People tend to see you as {traits}. Life Path {life_path} points you toward {theme}, \
         and being born in the Year of the {animal} adds its own instincts to the mix.",
        name = name.trim(),
        sign = sign,
        element = element,
        modality = modality,
        traits = join_traits(traits),
        life_path = life_path,
        theme = life_path_theme(life_path),
        animal = animal,
    )
}

/// 產生完整的個人 profile
///
/// 只有日期無法拆成年、月、日時才會失敗；
/// 平年 2 月 29 日或 13 月等情況仍會產生 profile
pub fn profile_from_birth(input: &BirthInput) -> Result<AstroProfile> {
    let (year, month, day) = parse_date_parts(&input.date)?;

    let (sun_sign, element, modality) = signs::sun_sign(month, day);
    let life_path = numerology::life_path_from_date(&input.date);
    let chinese_animal = cyclic::animal_for_year(year);
    let (lucky_color, lucky_number) = lucky::lucky_values(sun_sign, life_path);
    let traits = traits_for(sun_sign);

    tracing::debug!(
        "Derived profile for {}: sign={}, life_path={}, animal={}",
        input.name,
        sun_sign,
        life_path,
        chinese_animal
    );

    let summary = render_summary(
        &input.name,
        sun_sign,
        element,
        modality,
        &traits[..traits.len().min(3)],
        life_path,
        chinese_animal,
    );

    Ok(AstroProfile {
        name: input.name.trim().to_string(),
        sun_sign,
        element,
        modality,
        life_path,
        chinese_animal,
        lucky_color: lucky_color.to_string(),
        lucky_number,
        summary,
    })
}
