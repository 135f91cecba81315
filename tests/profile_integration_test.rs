use astro_profile::utils::validation::Validate;
use astro_profile::{
    daily_message, profile_from_birth, qa_fallback, BirthInput, ChineseAnimal, Element, Modality,
    ZodiacSign,
};

fn birth(name: &str, date: &str) -> BirthInput {
    BirthInput {
        name: name.to_string(),
        date: date.to_string(),
        time: "21:15".to_string(),
        place: "Taipei".to_string(),
        tz_offset: "+08:00".to_string(),
    }
}

/// 完整流程：驗證 -> 產生 profile -> 問答
#[test]
fn test_validated_input_to_answer() {
    let input = birth("Mei", "2000-01-08");
    assert!(input.validate().is_ok());

    let profile = profile_from_birth(&input).unwrap();
    assert_eq!(profile.sun_sign, ZodiacSign::Capricorn);
    assert_eq!(profile.element, Element::Earth);
    assert_eq!(profile.modality, Modality::Cardinal);
    assert_eq!(profile.life_path, 11);
    assert_eq!(profile.chinese_animal, ChineseAnimal::Dragon);
    assert_eq!(profile.lucky_number, 3);
    assert!(profile.summary.starts_with("Mei, your Sun in Capricorn"));
    assert!(profile.summary.contains("Life Path 11"));

    let answer = qa_fallback("Will I find love?", &profile);
    assert!(answer.contains("Capricorn"));
    assert!(answer.contains("Small consistent gestures"));
}

#[test]
fn test_profile_generation_is_byte_identical() {
    let input = birth("Mei", "1979-10-23");
    let first = serde_json::to_string(&profile_from_birth(&input).unwrap()).unwrap();
    let second = serde_json::to_string(&profile_from_birth(&input).unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_boundary_birthdays() {
    let cases = [
        ("1990-03-21", ZodiacSign::Aries),
        ("1990-03-20", ZodiacSign::Pisces),
        ("1990-12-21", ZodiacSign::Sagittarius),
        ("1990-12-22", ZodiacSign::Capricorn),
        ("1990-01-19", ZodiacSign::Capricorn),
        ("1990-01-20", ZodiacSign::Aquarius),
    ];

    for (date, expected) in cases {
        let profile = profile_from_birth(&birth("Sam", date)).unwrap();
        assert_eq!(profile.sun_sign, expected, "date {}", date);
    }
}

#[test]
fn test_invalid_input_is_caught_before_the_core() {
    let mut input = birth("Sam", "1990-02-30");
    assert!(input.validate().is_err());

    input.date = "1990-02-28".to_string();
    input.time = "25:00".to_string();
    assert!(input.validate().is_err());
}

#[test]
fn test_daily_message_is_stable_per_person_and_day() {
    let a = daily_message("Mei", "2026-10-16");
    assert_eq!(a, daily_message("Mei", "2026-10-16"));
    assert!(!a.is_empty());

    // 不同日期至少會出現兩種訊息
    let distinct: std::collections::HashSet<&str> = (1..=28)
        .map(|d| daily_message("Mei", &format!("2026-02-{:02}", d)))
        .collect();
    assert!(distinct.len() > 1);
}
