use crate::domain::model::{AstroProfile, Element, Modality};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Career,
    Study,
    Love,
    Health,
    Money,
}

/// 依優先順序排列，第一個命中關鍵字的主題勝出
const TOPIC_KEYWORDS: [(Topic, &[&str]); 5] = [
    (Topic::Career, &["career", "job", "work", "internship"]),
    (Topic::Study, &["study", "exam"]),
    (Topic::Love, &["love", "relationship", "marriage"]),
    (Topic::Health, &["health"]),
    (Topic::Money, &["money", "finance", "wealth"]),
];

pub fn classify(question: &str) -> Option<Topic> {
    let lowered = question.to_lowercase();
    TOPIC_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lowered.contains(k)))
        .map(|(topic, _)| *topic)
}

fn career_advice(element: Element) -> &'static str {
    match element {
        Element::Fire => "This is a season to act boldly: pitch the idea, ask for the role, and let your initiative speak first.",
        Element::Earth => "Steady, visible results will carry more weight than big announcements; build your case one deliverable at a time.",
        Element::Air => "Your network is your engine right now; a conversation or a shared idea is likely to open the next door.",
        Element::Water => "Trust your read of the people around you; choose the team and the culture before the title.",
    }
}

fn study_advice(modality: Modality) -> &'static str {
    match modality {
        Modality::Cardinal => "Set the plan yourself: map the syllabus, pick start dates, and lead your own revision.",
        Modality::Fixed => "Depth beats breadth for you; stay with one subject until it truly clicks before moving on.",
        Modality::Mutable => "Vary the format: switch between reading, teaching a friend, and practice questions to keep momentum.",
    }
}

fn love_advice(element: Element) -> &'static str {
    match element {
        Element::Fire => "Bring warmth and spontaneity, but leave room for the other person to set the pace.",
        Element::Earth => "Small consistent gestures say more than grand promises; show up reliably.",
        Element::Air => "Honest conversation is your love language; say what you mean and listen for what is unsaid.",
        Element::Water => "Let yourself be seen; emotional openness will deepen the bond you are hoping for.",
    }
}

fn money_advice(modality: Modality) -> &'static str {
    match modality {
        Modality::Cardinal => "Start the budget or savings plan you have been postponing; momentum matters more than precision.",
        Modality::Fixed => "Hold to your long-term plan and avoid reacting to short-term swings.",
        Modality::Mutable => "Keep options flexible and review spending monthly; adjust rather than overhaul.",
    }
}

/// 沒有遠端服務可用時的規則式回答
///
/// 一定回傳非空字串，相同問題與 profile 得到相同答案
pub fn qa_fallback(question: &str, profile: &AstroProfile) -> String {
    let sign = profile.sun_sign;
    let element = profile.element;
    let life_path = profile.life_path;

    match classify(question) {
        Some(Topic::Career) => format!(
            "For your career as a {} ({} sign): {} Life Path {} favors work where you can use your natural strengths.",
            sign,
            element,
            career_advice(element),
            life_path
        ),
        Some(Topic::Study) => format!(
            "For your studies as a {}: {} Your {} energy and Life Path {} help you stay with it when the material gets hard.",
            sign,
            study_advice(profile.modality),
            element,
            life_path
        ),
        Some(Topic::Love) => format!(
            "In love and relationships, {} brings {} energy. {} Life Path {} reminds you that connection grows with patience.",
            sign,
            element,
            love_advice(element),
            life_path
        ),
        Some(Topic::Health) => format!(
            "For your health as a {} ({} sign): keep a simple routine of sleep, movement, and regular meals. \
             Life Path {} suggests listening to your body's early signals rather than pushing through.",
            sign, element, life_path
        ),
        Some(Topic::Money) => format!(
            "On money matters, a {} with Life Path {}: {} Your {} nature is an asset when you plan ahead.",
            sign,
            life_path,
            money_advice(profile.modality),
            element
        ),
        None => format!(
            "Clarify your intention: ask about career, study, love, health, or money so the stars can answer more precisely. \
             As a {} with {} energy and Life Path {}, your best guidance starts with a focused question.",
            sign, element, life_path
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{ChineseAnimal, ZodiacSign};

    fn profile(sign: ZodiacSign, element: Element, modality: Modality) -> AstroProfile {
        AstroProfile {
            name: "Ada".to_string(),
            sun_sign: sign,
            element,
            modality,
            life_path: 7,
            chinese_animal: ChineseAnimal::Horse,
            lucky_color: "#E53935".to_string(),
            lucky_number: 2,
            summary: String::new(),
        }
    }

    #[test]
    fn test_classify_priority_order() {
        assert_eq!(classify("How is my CAREER?"), Some(Topic::Career));
        assert_eq!(classify("Will I pass the exam?"), Some(Topic::Study));
        // career 優先於 love
        assert_eq!(classify("Love at work?"), Some(Topic::Career));
        assert_eq!(classify("Is my health ok?"), Some(Topic::Health));
        assert_eq!(classify("Any wealth coming?"), Some(Topic::Money));
        assert_eq!(classify("What should I do?"), None);
    }

    #[test]
    fn test_fire_career_acts_boldly() {
        let p = profile(ZodiacSign::Aries, Element::Fire, Modality::Cardinal);
        let answer = qa_fallback("How is my career?", &p);
        assert!(answer.contains("act boldly"));
        assert!(answer.contains("Aries"));
        assert!(answer.contains("Life Path 7"));
    }

    #[test]
    fn test_career_branches_on_element() {
        let earth = profile(ZodiacSign::Taurus, Element::Earth, Modality::Fixed);
        let answer = qa_fallback("Should I take this job?", &earth);
        assert!(!answer.contains("act boldly"));
        assert!(answer.contains("Steady, visible results"));
    }

    #[test]
    fn test_study_branches_on_modality() {
        let mutable = profile(ZodiacSign::Gemini, Element::Air, Modality::Mutable);
        assert!(qa_fallback("study tips?", &mutable).contains("Vary the format"));

        let fixed = profile(ZodiacSign::Leo, Element::Fire, Modality::Fixed);
        let answer = qa_fallback("study tips?", &fixed);
        assert!(answer.contains("Depth beats breadth"));
        assert!(answer.contains("Leo"));
        assert!(answer.contains("Fire"));
        assert!(answer.contains("Life Path 7"));
    }

    #[test]
    fn test_element_decision_table() {
        let cases = [
            (Element::Fire, "act boldly", "warmth and spontaneity"),
            (Element::Earth, "Steady, visible results", "Small consistent gestures"),
            (Element::Air, "Your network is your engine", "Honest conversation"),
            (Element::Water, "Trust your read of the people", "Let yourself be seen"),
        ];

        for (element, career_phrase, love_phrase) in cases {
            let p = profile(ZodiacSign::Aries, element, Modality::Cardinal);

            let career = qa_fallback("Any internship luck?", &p);
            assert!(career.contains(career_phrase), "{:?} career: {}", element, career);
            assert!(career.contains(element.as_str()));
            assert!(career.contains("Life Path 7"));

            let love = qa_fallback("Is marriage ahead?", &p);
            assert!(love.contains(love_phrase), "{:?} love: {}", element, love);
            assert!(love.contains(element.as_str()));
            assert!(love.contains("Life Path 7"));
        }
    }

    #[test]
    fn test_modality_decision_table() {
        let cases = [
            (Modality::Cardinal, "Set the plan yourself", "Start the budget"),
            (Modality::Fixed, "Depth beats breadth", "Hold to your long-term plan"),
            (Modality::Mutable, "Vary the format", "Keep options flexible"),
        ];

        for (modality, study_phrase, money_phrase) in cases {
            let p = profile(ZodiacSign::Virgo, Element::Earth, modality);

            let study = qa_fallback("How will my exam go?", &p);
            assert!(study.contains(study_phrase), "{:?} study: {}", modality, study);
            assert!(study.contains("Life Path 7"));

            let money = qa_fallback("What about my finance?", &p);
            assert!(money.contains(money_phrase), "{:?} money: {}", modality, money);
            assert!(money.contains("Virgo"));
            assert!(money.contains("Life Path 7"));
        }
    }

    #[test]
    fn test_health_template() {
        for element in [Element::Fire, Element::Earth, Element::Air, Element::Water] {
            let p = profile(ZodiacSign::Cancer, element, Modality::Cardinal);
            let answer = qa_fallback("How is my HEALTH?", &p);
            assert!(answer.starts_with("For your health as a Cancer"));
            assert!(answer.contains("simple routine of sleep, movement, and regular meals"));
            assert!(answer.contains(element.as_str()));
            assert!(answer.contains("Life Path 7"));
        }
    }

    #[test]
    fn test_unmatched_question_asks_for_clarity() {
        let p = profile(ZodiacSign::Pisces, Element::Water, Modality::Mutable);
        let answer = qa_fallback("Tell me something", &p);
        assert!(answer.starts_with("Clarify your intention"));
        assert!(answer.contains("Pisces"));
    }

    #[test]
    fn test_answers_are_deterministic_and_non_empty() {
        let p = profile(ZodiacSign::Scorpio, Element::Water, Modality::Fixed);
        for q in ["", "money?", "marriage?", "health?", "internship?"] {
            let a = qa_fallback(q, &p);
            assert!(!a.is_empty());
            assert_eq!(a, qa_fallback(q, &p));
        }
    }
}
